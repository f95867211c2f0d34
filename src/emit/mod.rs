//! Turns a laid out formula into output. The traversal is shared: it decides every class, style
//! and position, and a [`Backend`] only decides how an element is represented. This keeps the
//! backends in agreement about every measurement.

use std::borrow::Cow;

use crate::{
    dom_tree::CssStyle,
    layout::{Glyph, HList, LayoutBox, Rule, VList},
    symbols::AtomClass,
    tree::{Attributes, ClassList},
    unit::{make_em, Em},
    MathLayout,
};

pub mod dom;
pub mod markup;

/// Space reserved above the tallest child of a vertical list, so that positioning a child never
/// depends on the line height of the surrounding text
const PSTRUT_PADDING: f64 = 2.0;

/// Zero width space, which gives the depth row of a vertical list something to hang from
const ZERO_WIDTH_SPACE: &str = "\u{200b}";

pub trait Backend {
    type Node;
    type Output;

    fn text(&mut self, text: &str) -> Self::Node;

    fn span(
        &mut self,
        classes: ClassList,
        style: CssStyle,
        attributes: Attributes,
        children: Vec<Self::Node>,
    ) -> Self::Node;

    fn finish(self, root: Self::Node) -> Self::Output;
}

/// Emit a formula through the given backend
pub fn emit<B: Backend>(layout: &MathLayout, backend: B) -> B::Output {
    let mut emitter = Emitter { backend };
    let body = emitter.emit_box(&layout.root);
    let root = emitter.wrap_root(layout, body);
    emitter.backend.finish(root)
}

fn em(v: Em) -> Option<Cow<'static, str>> {
    Some(Cow::Owned(make_em(v.0)))
}

fn classes(names: &[&str]) -> ClassList {
    names.iter().map(|name| name.to_string()).collect()
}

fn class_list(class: Option<AtomClass>) -> ClassList {
    class.map(|c| vec![c.as_str().to_string()]).unwrap_or_default()
}

struct Emitter<B: Backend> {
    backend: B,
}
impl<B: Backend> Emitter<B> {
    fn span(&mut self, classes: ClassList, style: CssStyle, children: Vec<B::Node>) -> B::Node {
        self.backend.span(classes, style, Attributes::new(), children)
    }

    fn emit_box(&mut self, node: &LayoutBox) -> B::Node {
        match node {
            LayoutBox::Glyph(glyph) => self.emit_glyph(glyph),
            LayoutBox::HList(hlist) => self.emit_hlist(hlist),
            LayoutBox::VList(vlist) => self.emit_vlist(vlist),
            LayoutBox::Spacer(spacer) => {
                let style = CssStyle {
                    margin_right: em(spacer.width),
                    ..Default::default()
                };
                self.span(classes(&["mspace"]), style, Vec::new())
            }
            LayoutBox::Rule(rule) => self.emit_rule(rule),
        }
    }

    fn emit_glyph(&mut self, glyph: &Glyph) -> B::Node {
        let mut class = class_list(glyph.class);
        class.push(glyph.font.css_class().to_string());

        // Lengths inside the glyph's span are relative to its own font size
        let mut style = CssStyle {
            color: glyph.color.clone().map(Cow::Owned),
            ..Default::default()
        };
        if glyph.size != 1.0 {
            style.font_size = Some(Cow::Owned(make_em(glyph.size)));
        }
        if glyph.italic > Em::ZERO {
            style.margin_right = Some(Cow::Owned(make_em(glyph.italic.0 / glyph.size)));
        }

        let text = self.backend.text(&glyph.text);
        self.span(class, style, vec![text])
    }

    fn emit_hlist(&mut self, hlist: &HList) -> B::Node {
        let children = hlist
            .children
            .iter()
            .map(|child| self.emit_box(child))
            .collect();
        self.span(class_list(hlist.class), CssStyle::default(), children)
    }

    fn emit_rule(&mut self, rule: &Rule) -> B::Node {
        let style = CssStyle {
            border_color: rule.color.clone().map(Cow::Owned),
            border_top_width: em(rule.metrics.height + rule.metrics.depth),
            vertical_align: em(-rule.metrics.depth),
            width: em(rule.metrics.width),
            ..Default::default()
        };
        self.span(classes(&["rule"]), style, Vec::new())
    }

    /// Each child sits in a relatively positioned wrapper. A strut taller than any child gives
    /// every wrapper the same baseline, from which `top` moves the child into place.
    fn emit_vlist(&mut self, vlist: &VList) -> B::Node {
        let pstrut_size = vlist
            .children
            .iter()
            .map(|child| child.node.height())
            .fold(Em::ZERO, Em::max)
            + Em(PSTRUT_PADDING);

        let mut wrappers = Vec::with_capacity(vlist.children.len());
        for child in vlist.children.iter() {
            let pstrut = self.span(
                classes(&["pstrut"]),
                CssStyle {
                    height: em(pstrut_size),
                    ..Default::default()
                },
                Vec::new(),
            );
            let node = self.emit_box(&child.node);

            let style = CssStyle {
                top: em(-(pstrut_size + child.shift)),
                ..Default::default()
            };
            wrappers.push(self.span(ClassList::new(), style, vec![pstrut, node]));
        }

        let list = self.span(
            classes(&["vlist"]),
            CssStyle {
                height: em(vlist.metrics.height),
                ..Default::default()
            },
            wrappers,
        );

        let mut outer = classes(&["vlist-t"]);
        let rows = if vlist.metrics.depth > Em::ZERO {
            outer.push("vlist-t2".to_string());

            let space = self.backend.text(ZERO_WIDTH_SPACE);
            let space = self.span(classes(&["vlist-s"]), CssStyle::default(), vec![space]);
            let top_row = self.span(classes(&["vlist-r"]), CssStyle::default(), vec![list, space]);

            let depth = self.span(
                classes(&["vlist"]),
                CssStyle {
                    height: em(vlist.metrics.depth),
                    ..Default::default()
                },
                Vec::new(),
            );
            let bottom_row = self.span(classes(&["vlist-r"]), CssStyle::default(), vec![depth]);

            vec![top_row, bottom_row]
        } else {
            vec![self.span(classes(&["vlist-r"]), CssStyle::default(), vec![list])]
        };

        outer.extend(class_list(vlist.class));
        self.span(outer, CssStyle::default(), rows)
    }

    /// The strut fixes the extent of the formula's line box to the layout's height and depth
    fn wrap_root(&mut self, layout: &MathLayout, body: B::Node) -> B::Node {
        let metrics = layout.metrics;
        let strut = self.span(
            classes(&["strut"]),
            CssStyle {
                height: em(metrics.height + metrics.depth),
                vertical_align: em(-metrics.depth),
                ..Default::default()
            },
            Vec::new(),
        );
        let base = self.span(
            classes(&["base"]),
            CssStyle {
                width: em(metrics.width),
                ..Default::default()
            },
            vec![strut, body],
        );

        let mut attributes = Attributes::new();
        attributes.insert("aria-hidden".to_string(), "true".to_string());
        let html = self
            .backend
            .span(classes(&["katex-html"]), CssStyle::default(), attributes, vec![base]);

        let katex = self.span(classes(&["katex"]), CssStyle::default(), vec![html]);
        if layout.display_mode {
            self.span(classes(&["katex-display"]), CssStyle::default(), vec![katex])
        } else {
            katex
        }
    }
}
