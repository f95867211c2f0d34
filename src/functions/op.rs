use std::sync::Arc;

use crate::{
    font_metrics::Font,
    layout::{
        builder::{make_glyph, BuildResult, LayoutBuilder},
        vlist::{make_v_list, VListElem, VListElemShift, VListParam},
        HList, LayoutBox,
    },
    parse_node::{CommandNode, Mode, ParseNode, ParseNodeType},
    symbols::AtomClass,
    unit::Em,
    util::find_assoc_data,
    Options,
};

use super::{FunctionPropSpec, FunctionSpec, Functions};

/// Operators drawn with a single large glyph
const SINGLE_CHAR_BIG_OPS: &[(&str, &str)] = &[
    ("\\prod", "\u{220F}"),
    ("\\coprod", "\u{2210}"),
    ("\\sum", "\u{2211}"),
    ("\\bigcap", "\u{22c2}"),
    ("\\bigcup", "\u{22c3}"),
    ("\\int", "\u{222b}"),
    ("\\oint", "\u{222e}"),
];

/// Operators set as their name in roman type
const NAMED_OPS: &[&str] = &[
    "\\arg", "\\cos", "\\cot", "\\csc", "\\deg", "\\det", "\\dim", "\\exp", "\\gcd", "\\inf",
    "\\ker", "\\lim", "\\ln", "\\log", "\\max", "\\min", "\\Pr", "\\sec", "\\sin", "\\sup",
    "\\tan",
];

/// Operators that put their scripts above and below them in display style
const LIMIT_OPS: &[&str] = &[
    "\\sum", "\\prod", "\\coprod", "\\bigcup", "\\bigcap", "\\lim", "\\max", "\\min", "\\sup",
    "\\inf", "\\det", "\\gcd", "\\Pr",
];

pub fn add_functions(fns: &mut Functions) {
    let big_op = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 0)
            .with_allowed_in_argument(true),
        builder: Some(Box::new(big_op_builder)),
    });
    fns.insert_for_all_str(SINGLE_CHAR_BIG_OPS.iter().map(|(name, _)| *name), big_op);

    let named_op = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 0)
            .with_allowed_in_argument(true),
        builder: Some(Box::new(named_op_builder)),
    });
    fns.insert_for_all_str(NAMED_OPS.iter().copied(), named_op);
}

/// Whether `node` is an operator which takes limits
pub(crate) fn has_limits(node: &ParseNode) -> bool {
    matches!(node, ParseNode::Command(command) if LIMIT_OPS.contains(&command.name.as_str()))
}

/// A large operator glyph, from Size2 in display style and Size1 otherwise, centered on the axis
fn big_op_builder(
    _builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let text = find_assoc_data(SINGLE_CHAR_BIG_OPS, node.name.as_str())
        .copied()
        .unwrap_or(node.name.as_str());
    let font = if options.style.is_display() {
        Font::Size2
    } else {
        Font::Size1
    };

    let glyph = make_glyph(text, font, Mode::Math, options, Some(AtomClass::Op))?;

    // Shift the glyph down so its vertical middle is on the axis
    let shift = (glyph.height() - glyph.depth()) * 0.5 - options.metric(|m| m.axis_height);

    Ok(make_v_list(
        VListParam::IndividualShift {
            children: vec![VListElemShift { elem: glyph, shift }],
        },
        Some(AtomClass::Op),
    ))
}

/// An operator name like `\sin`, set upright
fn named_op_builder(
    _builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let name = node.name.trim_start_matches('\\');

    let mut buf = [0; 4];
    let children = name
        .chars()
        .map(|ch| make_glyph(ch.encode_utf8(&mut buf), Font::MainRegular, Mode::Text, options, None))
        .collect::<BuildResult<Vec<_>>>()?;

    Ok(HList::new(children, Some(AtomClass::Op)).into())
}

/// Lays out an operator with its scripts as limits, above and below it (Rule 13a)
pub(crate) fn build_limits(
    builder: &mut LayoutBuilder,
    base: &ParseNode,
    sup: Option<&ParseNode>,
    sub: Option<&ParseNode>,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let base = builder.build_group(base, options)?;

    let sup = match sup {
        Some(sup) => {
            let sup_options = options.having_style(options.style.sup());
            Some(builder.build_group(sup, sup_options.as_ref().unwrap_or(options))?)
        }
        None => None,
    };
    let sub = match sub {
        Some(sub) => {
            let sub_options = options.having_style(options.style.sub());
            Some(builder.build_group(sub, sub_options.as_ref().unwrap_or(options))?)
        }
        None => None,
    };

    let width = [Some(&base), sup.as_ref(), sub.as_ref()]
        .into_iter()
        .flatten()
        .map(LayoutBox::width)
        .fold(Em::ZERO, Em::max);

    let spacing5 = options.metric(|m| m.big_op_spacing5);
    let sup_kern = |sup: &LayoutBox| {
        options
            .metric(|m| m.big_op_spacing1)
            .max(options.metric(|m| m.big_op_spacing3) - sup.depth())
    };
    let sub_kern = |sub: &LayoutBox| {
        options
            .metric(|m| m.big_op_spacing2)
            .max(options.metric(|m| m.big_op_spacing4) - sub.height())
    };

    let base_height = base.height();
    let base_depth = base.depth();
    let base = base.centered_in(width);

    let params = match (sup, sub) {
        (None, None) => return Ok(base),
        (Some(sup), None) => VListParam::Bottom {
            amount: base_depth,
            children: vec![
                VListElem::Box(base),
                VListElem::Kern(sup_kern(&sup)),
                VListElem::Box(sup.centered_in(width)),
                VListElem::Kern(spacing5),
            ],
        },
        (None, Some(sub)) => {
            let sub_kern = sub_kern(&sub);
            VListParam::Top {
                amount: base_height,
                children: vec![
                    VListElem::Kern(spacing5),
                    VListElem::Box(sub.centered_in(width)),
                    VListElem::Kern(sub_kern),
                    VListElem::Box(base),
                ],
            }
        }
        (Some(sup), Some(sub)) => {
            let sub_kern = sub_kern(&sub);
            let bottom = spacing5 + sub.height() + sub.depth() + sub_kern + base_depth;
            VListParam::Bottom {
                amount: bottom,
                children: vec![
                    VListElem::Kern(spacing5),
                    VListElem::Box(sub.centered_in(width)),
                    VListElem::Kern(sub_kern),
                    VListElem::Box(base),
                    VListElem::Kern(sup_kern(&sup)),
                    VListElem::Box(sup.centered_in(width)),
                    VListElem::Kern(spacing5),
                ],
            }
        }
    };

    Ok(make_v_list(params, Some(AtomClass::Op)))
}
