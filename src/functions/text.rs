use std::sync::Arc;

use crate::{
    layout::{
        builder::{BuildResult, LayoutBuilder},
        LayoutBox,
    },
    parse_node::{CommandNode, ParseNodeType},
    symbols::AtomClass,
    Options,
};

use super::{ord_argument, ArgType, FunctionPropSpec, FunctionSpec, Functions};

pub fn add_functions(fns: &mut Functions) {
    let text = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 1)
            .with_allowed_in_argument(true)
            .with_allowed_in_text(true)
            .with_arg_types(&[ArgType::Text] as &[ArgType]),
        builder: Some(Box::new(text_builder)),
    });

    fns.insert("\\text".into(), text);
}

/// The argument was parsed in text mode, so its symbols are already text symbols set in the
/// roman font. It is laid out as a single ordinary atom.
fn text_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    builder.build_hlist(ord_argument(&node.args[0]), options, Some(AtomClass::Ord))
}
