//! The layout tree: sized boxes with every length resolved to absolute em.

use crate::{font_metrics::Font, symbols::AtomClass, unit::Em};

pub mod builder;
pub(crate) mod supsub;
pub(crate) mod vlist;

/// Extent of a box around its baseline and reference point
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Distance above the baseline
    pub height: Em,
    /// Distance below the baseline
    pub depth: Em,
    pub width: Em,
}
impl Metrics {
    pub fn new(height: Em, depth: Em, width: Em) -> Metrics {
        Metrics {
            height,
            depth,
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutBox {
    Glyph(Glyph),
    HList(HList),
    VList(VList),
    Spacer(Spacer),
    Rule(Rule),
}
impl LayoutBox {
    pub fn metrics(&self) -> Metrics {
        match self {
            LayoutBox::Glyph(glyph) => glyph.metrics,
            LayoutBox::HList(hlist) => hlist.metrics,
            LayoutBox::VList(vlist) => vlist.metrics,
            LayoutBox::Spacer(spacer) => Metrics::new(Em::ZERO, Em::ZERO, spacer.width),
            LayoutBox::Rule(rule) => rule.metrics,
        }
    }

    pub fn height(&self) -> Em {
        self.metrics().height
    }

    pub fn depth(&self) -> Em {
        self.metrics().depth
    }

    pub fn width(&self) -> Em {
        self.metrics().width
    }

    /// The atom class the box was laid out as, if it takes part in inter-atom spacing
    pub fn class(&self) -> Option<AtomClass> {
        match self {
            LayoutBox::Glyph(glyph) => glyph.class,
            LayoutBox::HList(hlist) => hlist.class,
            LayoutBox::VList(vlist) => vlist.class,
            LayoutBox::Spacer(_) => Some(AtomClass::Spacing),
            LayoutBox::Rule(_) => None,
        }
    }

    pub(crate) fn set_class(&mut self, class: AtomClass) {
        match self {
            LayoutBox::Glyph(glyph) => glyph.class = Some(class),
            LayoutBox::HList(hlist) => hlist.class = Some(class),
            LayoutBox::VList(vlist) => vlist.class = Some(class),
            LayoutBox::Spacer(_) | LayoutBox::Rule(_) => {}
        }
    }

    /// Whether the box is a single character, for the purposes of script placement
    pub fn is_character_box(&self) -> bool {
        match self {
            LayoutBox::Glyph(_) => true,
            LayoutBox::HList(hlist) => {
                hlist.children.len() == 1 && hlist.children[0].is_character_box()
            }
            _ => false,
        }
    }

    /// The italic correction of the glyph, if the box is a single glyph
    pub fn italic(&self) -> Em {
        match self {
            LayoutBox::Glyph(glyph) => glyph.italic,
            LayoutBox::HList(hlist) if hlist.children.len() == 1 => hlist.children[0].italic(),
            _ => Em::ZERO,
        }
    }

    pub(crate) fn spacer(width: Em) -> LayoutBox {
        LayoutBox::Spacer(Spacer { width })
    }

    /// Pads the box on both sides so that it is centered in `width`
    pub(crate) fn centered_in(self, width: Em) -> LayoutBox {
        let pad = (width - self.width()) * 0.5;
        if pad == Em::ZERO {
            return self;
        }

        HList::new(
            vec![LayoutBox::spacer(pad), self, LayoutBox::spacer(pad)],
            None,
        )
        .into()
    }
}
impl From<HList> for LayoutBox {
    fn from(hlist: HList) -> Self {
        LayoutBox::HList(hlist)
    }
}
impl From<VList> for LayoutBox {
    fn from(vlist: VList) -> Self {
        LayoutBox::VList(vlist)
    }
}
impl From<Glyph> for LayoutBox {
    fn from(glyph: Glyph) -> Self {
        LayoutBox::Glyph(glyph)
    }
}
impl From<Rule> for LayoutBox {
    fn from(rule: Rule) -> Self {
        LayoutBox::Rule(rule)
    }
}

/// A single character set in one font
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub font: Font,
    /// Font size, as a multiple of the base size
    pub size: f64,
    /// The width includes the italic correction
    pub metrics: Metrics,
    pub italic: Em,
    pub class: Option<AtomClass>,
    pub color: Option<String>,
}

/// Boxes set side by side on a common baseline
#[derive(Debug, Clone, PartialEq)]
pub struct HList {
    pub children: Vec<LayoutBox>,
    pub class: Option<AtomClass>,
    pub metrics: Metrics,
}
impl HList {
    pub fn new(children: Vec<LayoutBox>, class: Option<AtomClass>) -> HList {
        let mut metrics = Metrics::default();
        for child in children.iter() {
            let child = child.metrics();
            metrics.height = metrics.height.max(child.height);
            metrics.depth = metrics.depth.max(child.depth);
            metrics.width += child.width;
        }

        HList {
            children,
            class,
            metrics,
        }
    }
}

/// A child of a [`VList`] along with the position of its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct VListChild {
    pub node: LayoutBox,
    /// Distance the child's baseline is raised above the list's baseline
    pub shift: Em,
}

/// Boxes stacked vertically. All children share the left edge of the list.
///
/// The height and depth are those of the whole stack, including kerns between children, and can
/// be larger than the children alone.
#[derive(Debug, Clone, PartialEq)]
pub struct VList {
    pub children: Vec<VListChild>,
    pub class: Option<AtomClass>,
    pub metrics: Metrics,
}

/// Empty horizontal space. May be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    pub width: Em,
}

/// A filled rectangle, like a fraction bar or a radical's vinculum
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub metrics: Metrics,
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Glyph, HList, LayoutBox, Metrics};
    use crate::{font_metrics::Font, symbols::AtomClass, unit::Em};

    fn glyph(width: f64, height: f64, depth: f64) -> LayoutBox {
        LayoutBox::Glyph(Glyph {
            text: "x".to_string(),
            font: Font::MathItalic,
            size: 1.0,
            metrics: Metrics::new(Em(height), Em(depth), Em(width)),
            italic: Em::ZERO,
            class: Some(AtomClass::Ord),
            color: None,
        })
    }

    #[test]
    fn test_hlist_metrics() {
        let hlist = HList::new(
            vec![
                glyph(0.5, 0.4, 0.0),
                LayoutBox::spacer(Em(0.25)),
                glyph(0.3, 0.7, 0.2),
            ],
            None,
        );
        assert_eq!(hlist.metrics, Metrics::new(Em(0.7), Em(0.2), Em(1.05)));

        let nested = LayoutBox::HList(HList::new(vec![glyph(0.5, 0.4, 0.0)], None));
        assert!(nested.is_character_box());
        assert!(!LayoutBox::HList(hlist).is_character_box());
    }
}
