//! Super and subscript placement, following Rule 18 of Appendix G of the TeXbook.

use crate::{
    functions::op,
    parse_node::SupSubNode,
    symbols::AtomClass,
    unit::Em,
    Options,
};

use super::{
    builder::{BuildResult, LayoutBuilder},
    vlist::{make_v_list, VListElemShift, VListParam},
    HList, LayoutBox,
};

/// Horizontal space after a script
pub(crate) const SCRIPT_SPACE: Em = Em(0.05);

pub(crate) fn build_supsub(
    builder: &mut LayoutBuilder,
    node: &SupSubNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    // Operators with limits put their scripts above and below in display style
    if let Some(base) = node.base.as_deref() {
        if options.style.is_display() && op::has_limits(base) {
            return op::build_limits(
                builder,
                base,
                node.sup.as_deref(),
                node.sub.as_deref(),
                options,
            );
        }
    }

    let base = match node.base.as_deref() {
        Some(base) => builder.build_group(base, options)?,
        None => HList::new(Vec::new(), Some(AtomClass::Ord)).into(),
    };
    let class = base.class().unwrap_or(AtomClass::Ord);

    let sup_options = options.having_style(options.style.sup());
    let sup_options = sup_options.as_ref().unwrap_or(options);
    let sub_options = options.having_style(options.style.sub());
    let sub_options = sub_options.as_ref().unwrap_or(options);

    let sup = match node.sup.as_deref() {
        Some(sup) => Some(builder.build_group(sup, sup_options)?),
        None => None,
    };
    let sub = match node.sub.as_deref() {
        Some(sub) => Some(builder.build_group(sub, sub_options)?),
        None => None,
    };

    // Rule 18a
    let (mut sup_shift, mut sub_shift) = if base.is_character_box() {
        (Em::ZERO, Em::ZERO)
    } else {
        (
            base.height() - sup_options.metric(|m| m.sup_drop),
            base.depth() + sub_options.metric(|m| m.sub_drop),
        )
    };

    let x_height = options.metric(|m| m.x_height);
    let rule_width = options.metric(|m| m.default_rule_thickness);

    // Rule 18c
    let min_sup_shift = if options.style.is_display() {
        options.metric(|m| m.sup1)
    } else if options.style.is_cramped() {
        options.metric(|m| m.sup3)
    } else {
        options.metric(|m| m.sup2)
    };

    let italic = base.italic();
    let children = match (sup, sub) {
        (None, None) => return Ok(base),
        (None, Some(sub)) => {
            // Rule 18b
            sub_shift = sub_shift
                .max(options.metric(|m| m.sub1))
                .max(sub.height() - x_height * 0.8);

            vec![VListElemShift {
                elem: script_box(sub, -italic),
                shift: sub_shift,
            }]
        }
        (Some(sup), None) => {
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth() + x_height * 0.25);

            vec![VListElemShift {
                elem: script_box(sup, Em::ZERO),
                shift: -sup_shift,
            }]
        }
        (Some(sup), Some(sub)) => {
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth() + x_height * 0.25);
            // Rule 18e
            sub_shift = sub_shift.max(options.metric(|m| m.sub2));

            if (sup_shift - sup.depth()) - (sub.height() - sub_shift) < rule_width * 4.0 {
                sub_shift = rule_width * 4.0 - sup_shift + sup.depth() + sub.height();
                let psi = x_height * 0.8 - (sup_shift - sup.depth());
                if psi > Em::ZERO {
                    sup_shift += psi;
                    sub_shift = sub_shift - psi;
                }
            }

            vec![
                VListElemShift {
                    elem: script_box(sub, -italic),
                    shift: sub_shift,
                },
                VListElemShift {
                    elem: script_box(sup, Em::ZERO),
                    shift: -sup_shift,
                },
            ]
        }
    };

    let scripts = make_v_list(VListParam::IndividualShift { children }, None);

    Ok(HList::new(vec![base, scripts], Some(class)).into())
}

/// A script moved right by `kern`, followed by the script space
fn script_box(script: LayoutBox, kern: Em) -> LayoutBox {
    let mut children = Vec::with_capacity(3);
    if kern != Em::ZERO {
        children.push(LayoutBox::spacer(kern));
    }
    children.push(script);
    children.push(LayoutBox::spacer(SCRIPT_SPACE));

    HList::new(children, None).into()
}
