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
    let overline = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 1)
            .with_allowed_in_argument(true),
        builder: Some(Box::new(overline_builder)),
    });

    fns.insert("\\overline".into(), overline);
}

fn overline_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    // Build the inner group in cramped style (TeXbook Rule 9)
    let cramped = options.having_cramped_style();
    let inner = builder.build_group(&node.args[0], cramped.as_ref().unwrap_or(options))?;

    let theta = options.metric(|m| m.default_rule_thickness);
    let line = Rule {
        metrics: Metrics::new(theta, Em::ZERO, inner.width()),
        color: options.color.clone(),
    };

    Ok(make_v_list(
        VListParam::FirstBaseLine {
            children: vec![
                VListElem::Box(inner),
                VListElem::Kern(theta * 3.0),
                VListElem::Box(line.into()),
                VListElem::Kern(theta),
            ],
        },
        Some(AtomClass::Ord),
    ))
}
