use crate::{symbols::AtomClass, unit::Em};

use super::{LayoutBox, Metrics, VList, VListChild};

/// An entry in a vertical list, listed bottom to top
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum VListElem {
    Box(LayoutBox),
    Kern(Em),
}

/// A box along with how far it should be shifted downward
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VListElemShift {
    pub elem: LayoutBox,
    pub shift: Em,
}

pub(crate) enum VListParam {
    /// Where each child contains how much it should be shifted downward
    IndividualShift { children: Vec<VListElemShift> },
    /// `amount` specifies the topmost point of the vlist
    Top { amount: Em, children: Vec<VListElem> },
    /// `amount` specifies the bottommost point of the vlist
    Bottom { amount: Em, children: Vec<VListElem> },
    /// Positioned such that its baseline is `amount` away from the baseline of the first child,
    /// which must be a box
    Shift { amount: Em, children: Vec<VListElem> },
    /// Positioned so that its baseline is aligned with the baseline of the first child, which
    /// must be a box. Equivalent to `Shift` with an amount of zero.
    FirstBaseLine { children: Vec<VListElem> },
}
impl VListParam {
    fn into_children_and_depth(self) -> (Vec<VListElem>, Em) {
        match self {
            VListParam::IndividualShift { children } => {
                let mut new_children = Vec::with_capacity(children.len() * 2);

                let depth = children
                    .first()
                    .map_or(Em::ZERO, |first| -first.shift - first.elem.depth());
                let mut curr_pos = depth;

                let mut prev_height = Em::ZERO;
                let mut prev_depth = Em::ZERO;
                // Add in kerns to the list of children to get each element to be shifted to the
                // correct specified shift
                for (i, child) in children.into_iter().enumerate() {
                    let cur_height = child.elem.height();
                    let cur_depth = child.elem.depth();
                    if i != 0 {
                        let diff = -child.shift - curr_pos - cur_depth;
                        let size = diff - (prev_height + prev_depth);

                        curr_pos += diff;

                        new_children.push(VListElem::Kern(size));
                    }
                    new_children.push(VListElem::Box(child.elem));

                    prev_height = cur_height;
                    prev_depth = cur_depth;
                }

                (new_children, depth)
            }
            VListParam::Top { amount, children } => {
                let mut bottom = amount;
                for child in children.iter() {
                    bottom = bottom
                        - match child {
                            VListElem::Box(elem) => elem.height() + elem.depth(),
                            VListElem::Kern(kern) => *kern,
                        };
                }
                (children, bottom)
            }
            VListParam::Bottom { amount, children } => (children, -amount),
            VListParam::Shift { amount, children } => {
                let depth = first_depth(&children);
                (children, -depth - amount)
            }
            VListParam::FirstBaseLine { children } => {
                let depth = first_depth(&children);
                (children, -depth)
            }
        }
    }
}

fn first_depth(children: &[VListElem]) -> Em {
    match children.first() {
        Some(VListElem::Box(elem)) => elem.depth(),
        _ => Em::ZERO,
    }
}

/// Makes a vertical list by stacking boxes and kerns on top of each other.
/// Allows for many different ways of specifying the positioning method.
pub(crate) fn make_v_list(params: VListParam, class: Option<AtomClass>) -> LayoutBox {
    let (children, depth) = params.into_children_and_depth();

    let mut real_children = Vec::with_capacity(children.len());
    let mut min_pos = depth;
    let mut max_pos = depth;
    let mut curr_pos = depth;
    let mut width = Em::ZERO;
    for child in children {
        match child {
            VListElem::Kern(kern) => curr_pos += kern,
            VListElem::Box(elem) => {
                let metrics = elem.metrics();
                width = width.max(metrics.width);
                real_children.push(VListChild {
                    shift: curr_pos + metrics.depth,
                    node: elem,
                });
                curr_pos += metrics.height + metrics.depth;
            }
        }

        min_pos = min_pos.min(curr_pos);
        max_pos = max_pos.max(curr_pos);
    }

    LayoutBox::VList(VList {
        children: real_children,
        class,
        metrics: Metrics::new(max_pos, -min_pos, width),
    })
}

#[cfg(test)]
mod tests {
    use super::{make_v_list, VListElem, VListElemShift, VListParam};
    use crate::{
        layout::{LayoutBox, Metrics, Rule},
        unit::Em,
    };

    fn rule(height: f64, depth: f64) -> LayoutBox {
        LayoutBox::Rule(Rule {
            metrics: Metrics::new(Em(height), Em(depth), Em(1.0)),
            color: None,
        })
    }

    #[test]
    fn test_individual_shift() {
        let vlist = make_v_list(
            VListParam::IndividualShift {
                children: vec![
                    VListElemShift {
                        elem: rule(0.5, 0.1),
                        shift: Em(0.3),
                    },
                    VListElemShift {
                        elem: rule(0.4, 0.2),
                        shift: Em(-0.8),
                    },
                ],
            },
            None,
        );
        let LayoutBox::VList(vlist) = vlist else {
            panic!("expected vlist");
        };
        assert!((vlist.children[0].shift.0 + 0.3).abs() < 1e-9);
        assert!((vlist.children[1].shift.0 - 0.8).abs() < 1e-9);
        assert!((vlist.metrics.height.0 - 1.2).abs() < 1e-9);
        assert!((vlist.metrics.depth.0 - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_kerns_extend_the_stack() {
        let vlist = make_v_list(
            VListParam::FirstBaseLine {
                children: vec![VListElem::Box(rule(0.5, 0.0)), VListElem::Kern(Em(0.25))],
            },
            None,
        );
        assert_eq!(vlist.height(), Em(0.75));
        assert_eq!(vlist.depth(), Em(0.0));
    }
}
