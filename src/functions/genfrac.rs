use std::sync::Arc;

use crate::{
    delimiter::{custom_sized_delim, NULL_DELIMITER_SPACE},
    layout::{
        builder::{BuildResult, LayoutBuilder},
        vlist::{make_v_list, VListElemShift, VListParam},
        HList, LayoutBox, Metrics, Rule,
    },
    parse_node::{CommandNode, ParseNodeType},
    style::{DISPLAY_STYLE, TEXT_STYLE},
    symbols::AtomClass,
    unit::Em,
    Options,
};

use super::{FunctionPropSpec, FunctionSpec, Functions};

pub fn add_functions(fns: &mut Functions) {
    let genfrac = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 2)
            .with_allowed_in_argument(true),
        builder: Some(Box::new(genfrac_builder)),
    });

    fns.insert_for_all_str(GENFRAC_NAMES.iter().copied(), genfrac);
}

const GENFRAC_NAMES: &[&str] = &[
    "\\dfrac", "\\frac", "\\tfrac", "\\dbinom", "\\binom", "\\tbinom",
];

/// Lays out a fraction according to Rule 15 of the TeXbook
fn genfrac_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let name = node.name.as_str();
    let has_bar_line = !name.ends_with("binom");

    let style = match name {
        "\\dfrac" | "\\dbinom" => DISPLAY_STYLE,
        "\\tfrac" | "\\tbinom" => TEXT_STYLE,
        _ => options.style,
    };
    let options = options.having_style(style).unwrap_or_else(|| options.clone());

    let num_options = options.having_style(style.frac_num());
    let num_options = num_options.as_ref().unwrap_or(&options);
    let den_options = options.having_style(style.frac_den());
    let den_options = den_options.as_ref().unwrap_or(&options);

    let numer = builder.build_group(&node.args[0], num_options)?;
    let denom = builder.build_group(&node.args[1], den_options)?;

    let rule_width = if has_bar_line {
        options.metric(|m| m.default_rule_thickness)
    } else {
        Em::ZERO
    };
    let theta = options.metric(|m| m.default_rule_thickness);

    // Rule 15b
    let (mut num_shift, clearance, mut denom_shift) = if style.is_display() {
        let clearance = if has_bar_line {
            theta * 3.0
        } else {
            theta * 7.0
        };
        (
            options.metric(|m| m.num1),
            clearance,
            options.metric(|m| m.denom1),
        )
    } else if has_bar_line {
        (options.metric(|m| m.num2), theta, options.metric(|m| m.denom2))
    } else {
        (
            options.metric(|m| m.num3),
            theta * 3.0,
            options.metric(|m| m.denom2),
        )
    };

    let width = numer.width().max(denom.width());
    let numer_depth = numer.depth();
    let denom_height = denom.height();
    let numer = numer.centered_in(width);
    let denom = denom.centered_in(width);

    let children = if has_bar_line {
        // Rule 15d
        let axis_height = options.metric(|m| m.axis_height);

        let num_gap = (num_shift - numer_depth) - (axis_height + rule_width * 0.5);
        if num_gap < clearance {
            num_shift += clearance - num_gap;
        }

        let den_gap = (axis_height - rule_width * 0.5) - (denom_height - denom_shift);
        if den_gap < clearance {
            denom_shift += clearance - den_gap;
        }

        let bar = Rule {
            metrics: Metrics::new(rule_width, Em::ZERO, width),
            color: options.color.clone(),
        };
        let mid_shift = -(axis_height - rule_width * 0.5);

        vec![
            VListElemShift {
                elem: denom,
                shift: denom_shift,
            },
            VListElemShift {
                elem: bar.into(),
                shift: mid_shift,
            },
            VListElemShift {
                elem: numer,
                shift: -num_shift,
            },
        ]
    } else {
        // Rule 15c
        let candidate_clearance = (num_shift - numer_depth) - (denom_height - denom_shift);
        if candidate_clearance < clearance {
            num_shift += (clearance - candidate_clearance) * 0.5;
            denom_shift += (clearance - candidate_clearance) * 0.5;
        }

        vec![
            VListElemShift {
                elem: denom,
                shift: denom_shift,
            },
            VListElemShift {
                elem: numer,
                shift: -num_shift,
            },
        ]
    };

    let frac = make_v_list(VListParam::IndividualShift { children }, None);

    // Rule 15e
    let (left, right) = if has_bar_line {
        let space = NULL_DELIMITER_SPACE * options.size_multiplier();
        (LayoutBox::spacer(space), LayoutBox::spacer(space))
    } else {
        let delim_size = if style.is_display() {
            options.metric(|m| m.delim1)
        } else {
            options.metric(|m| m.delim2)
        };
        (
            custom_sized_delim("(", delim_size, true, &options, AtomClass::Open)?,
            custom_sized_delim(")", delim_size, true, &options, AtomClass::Close)?,
        )
    };

    Ok(HList::new(vec![left, frac, right], Some(AtomClass::Inner)).into())
}
