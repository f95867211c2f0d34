use std::sync::Arc;

use crate::{
    layout::{
        builder::{BuildResult, LayoutBuilder},
        vlist::{make_v_list, VListElem, VListParam},
        LayoutBox, Metrics, Rule,
    },
    parse_node::{CommandNode, ParseNodeType},
    symbols::AtomClass,
    unit::Em,
    Options,
};

use super::{FunctionPropSpec, FunctionSpec, Functions};

pub fn add_functions(fns: &mut Functions) {
    let underline = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 1)
            .with_allowed_in_argument(true)
            .with_allowed_in_text(true),
        builder: Some(Box::new(underline_builder)),
    });

    fns.insert("\\underline".into(), underline);
}

/// Underlines its argument, following Rule 10 of the TeXbook
fn underline_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let inner = builder.build_group(&node.args[0], options)?;

    let theta = options.metric(|m| m.default_rule_thickness);
    let line = Rule {
        metrics: Metrics::new(theta, Em::ZERO, inner.width()),
        color: options.color.clone(),
    };

    let top = inner.height();
    Ok(make_v_list(
        VListParam::Top {
            amount: top,
            children: vec![
                VListElem::Kern(theta),
                VListElem::Box(line.into()),
                VListElem::Kern(theta * 3.0),
                VListElem::Box(inner),
            ],
        },
        Some(AtomClass::Ord),
    ))
}
