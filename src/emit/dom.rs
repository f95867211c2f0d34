use std::borrow::Cow;

use crate::{
    dom_tree::{CssStyle, DomChild, DomNode},
    tree::{Attributes, ClassList},
};

use super::Backend;

/// Builds a tree of [`DomNode`]s that can be inserted into a host container
#[derive(Debug, Default)]
pub struct DomBackend;

impl Backend for DomBackend {
    type Node = DomChild;
    type Output = DomNode;

    fn text(&mut self, text: &str) -> DomChild {
        DomChild::Text(text.to_string())
    }

    fn span(
        &mut self,
        classes: ClassList,
        style: CssStyle,
        attributes: Attributes,
        children: Vec<DomChild>,
    ) -> DomChild {
        DomChild::Node(DomNode {
            tag: Cow::Borrowed("span"),
            classes,
            style,
            attributes,
            children,
        })
    }

    fn finish(self, root: DomChild) -> DomNode {
        match root {
            DomChild::Node(node) => node,
            // The emitter always wraps the formula in a span
            DomChild::Text(text) => {
                let mut node = DomNode::new("span");
                node.append_text(text);
                node
            }
            DomChild::Raw(markup) => {
                let mut node = DomNode::new("span");
                node.set_inner_markup(markup);
                node
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dom_tree::DomChild, emit::Backend, parser::ParserConfig, render, render_to_dom_tree,
        tree::VirtualNode, DomNode,
    };

    use super::DomBackend;

    #[test]
    fn test_dom_tree_shape() {
        let dom = render_to_dom_tree("x", ParserConfig::default()).unwrap();
        assert_eq!(dom.tag, "span");
        assert_eq!(dom.classes, vec!["katex".to_string()]);

        let html = dom.find_by_class("katex-html").unwrap();
        assert_eq!(html.attributes.get("aria-hidden").map(String::as_str), Some("true"));
        assert_eq!(dom.text_content(), "x");
    }

    #[test]
    fn test_render_replaces_children() {
        let mut target = DomNode::new("div");
        target.append_text("old content");

        render("a+b", &mut target, ParserConfig::default()).unwrap();
        assert_eq!(target.children.len(), 1);
        assert!(matches!(&target.children[0], DomChild::Node(node) if node.has_class("katex")));
        assert_eq!(target.text_content(), "a+b");

        // A failed render leaves the container alone
        let before = target.clone();
        assert!(render(r"\frac{a}", &mut target, ParserConfig::default()).is_err());
        assert_eq!(target, before);
    }

    #[test]
    fn test_finish_wraps_loose_children() {
        let text = DomBackend.finish(DomChild::Text("a<b".to_string()));
        assert_eq!(text.to_markup(), "<span>a&lt;b</span>");

        let raw = DomBackend.finish(DomChild::Raw("<b>x</b>".to_string()));
        assert_eq!(raw.children, vec![DomChild::Raw("<b>x</b>".to_string())]);
        assert_eq!(raw.to_markup(), "<span><b>x</b></span>");
    }
}
