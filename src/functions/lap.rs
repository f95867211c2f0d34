use std::sync::Arc;

use crate::{
    layout::{
        builder::{BuildResult, LayoutBuilder},
        HList, LayoutBox,
    },
    parse_node::{CommandNode, ParseNodeType},
    symbols::AtomClass,
    Options,
};

use super::{FunctionPropSpec, FunctionSpec, Functions};

pub fn add_functions(fns: &mut Functions) {
    let lap = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 1).with_allowed_in_text(true),
        builder: Some(Box::new(lap_builder)),
    });

    fns.insert_for_all_str(["\\llap", "\\rlap"].into_iter(), lap);
}

/// A box of zero width whose contents stick out to the left (`\llap`) or right (`\rlap`) of
/// where it is placed
fn lap_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let inner = builder.build_group(&node.args[0], options)?;
    let back = LayoutBox::spacer(-inner.width());

    let children = if node.name == "\\llap" {
        vec![back, inner]
    } else {
        vec![inner, back]
    };

    Ok(HList::new(children, Some(AtomClass::Ord)).into())
}
