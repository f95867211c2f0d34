//! Rendering every formula embedded in a host document.
//!
//! Formulas live in elements with the class `tex` or with the tag name `tex`. Each one is rendered
//! independently: a formula that fails to render is reported and left as it was, and the rest
//! carry on.

use std::{collections::HashSet, hash::Hash};

use crate::{
    dom_tree::{DomChild, DomNode},
    error::RenderError,
    parser::ParserConfig,
    render_to_string,
};

const TEX_CLASS: &str = "tex";
const TEX_TAG: &str = "tex";
/// Classes which request that the formula be set in display style
const DISPLAY_CLASSES: [&str; 2] = ["tex-displaystyle", "tex-block"];

/// The document that formulas are found in and written back to
pub trait HostDocument {
    type ElementId: Clone + Eq + Hash;

    /// Elements with the class, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::ElementId>;

    /// Elements with the tag name, in document order
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::ElementId>;

    fn has_class(&self, id: &Self::ElementId, class: &str) -> bool;

    fn text_content(&self, id: &Self::ElementId) -> String;

    fn set_inner_markup(&mut self, id: &Self::ElementId, markup: String);
}

/// A formula that could not be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub formula: String,
    pub error: RenderError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub rendered: usize,
    pub failures: Vec<BatchFailure>,
}
impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Render every formula in the document, replacing each element's content with the result
pub fn render_all<D: HostDocument>(document: &mut D) -> BatchReport {
    let mut seen = HashSet::new();
    let mut elements = document.elements_by_class(TEX_CLASS);
    elements.extend(document.elements_by_tag(TEX_TAG));
    elements.retain(|id| seen.insert(id.clone()));

    let mut report = BatchReport::default();
    for id in elements {
        let mut formula = document.text_content(&id);
        if DISPLAY_CLASSES.iter().any(|class| document.has_class(&id, class)) {
            formula = format!("\\displaystyle{{{}}}", formula);
        }

        match render_to_string(&formula, ParserConfig::default()) {
            Ok(markup) => {
                document.set_inner_markup(&id, markup);
                report.rendered += 1;
            }
            Err(error) => {
                eprintln!("Failed to render formula {:?}: {}", formula, error);
                report.failures.push(BatchFailure { formula, error });
            }
        }
    }

    report
}

/// Elements of a [`DomNode`] document are addressed by the child indices leading to them from
/// the root
impl HostDocument for DomNode {
    type ElementId = Vec<usize>;

    fn elements_by_class(&self, class: &str) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        collect_paths(self, &mut Vec::new(), &|node| node.has_class(class), &mut found);
        found
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        collect_paths(
            self,
            &mut Vec::new(),
            &|node| node.tag.eq_ignore_ascii_case(tag),
            &mut found,
        );
        found
    }

    fn has_class(&self, id: &Vec<usize>, class: &str) -> bool {
        node_at(self, id).map_or(false, |node| node.has_class(class))
    }

    fn text_content(&self, id: &Vec<usize>) -> String {
        node_at(self, id)
            .map(DomNode::text_content)
            .unwrap_or_default()
    }

    fn set_inner_markup(&mut self, id: &Vec<usize>, markup: String) {
        if let Some(node) = node_at_mut(self, id) {
            node.set_inner_markup(markup);
        }
    }
}

fn collect_paths(
    node: &DomNode,
    path: &mut Vec<usize>,
    matches: &dyn Fn(&DomNode) -> bool,
    found: &mut Vec<Vec<usize>>,
) {
    if matches(node) {
        found.push(path.clone());
    }

    for (i, child) in node.children.iter().enumerate() {
        if let DomChild::Node(child) = child {
            path.push(i);
            collect_paths(child, path, matches, found);
            path.pop();
        }
    }
}

fn node_at<'a>(root: &'a DomNode, path: &[usize]) -> Option<&'a DomNode> {
    path.iter().try_fold(root, |node, &i| match node.children.get(i) {
        Some(DomChild::Node(child)) => Some(child),
        _ => None,
    })
}

fn node_at_mut<'a>(root: &'a mut DomNode, path: &[usize]) -> Option<&'a mut DomNode> {
    path.iter().try_fold(root, |node, &i| match node.children.get_mut(i) {
        Some(DomChild::Node(child)) => Some(child),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::{node_at, HostDocument};
    use crate::dom_tree::DomNode;

    fn document() -> DomNode {
        let mut body = DomNode::new("body");

        let mut p = DomNode::new("p");
        let mut tex = DomNode::new("span").with_class("tex");
        tex.append_text("x^2");
        p.append_child(tex);
        body.append_child(p);

        let mut both = DomNode::new("tex").with_class("tex");
        both.append_text("y");
        body.append_child(both);

        body
    }

    #[test]
    fn test_element_lookup() {
        let doc = document();
        assert_eq!(doc.elements_by_class("tex"), vec![vec![0, 0], vec![1]]);
        assert_eq!(doc.elements_by_tag("tex"), vec![vec![1]]);
        assert_eq!(HostDocument::text_content(&doc, &vec![0, 0]), "x^2");
        assert!(HostDocument::has_class(&doc, &vec![1], "tex"));
        assert!(node_at(&doc, &[5]).is_none());
    }

    #[test]
    fn test_set_inner_markup() {
        let mut doc = document();
        HostDocument::set_inner_markup(&mut doc, &vec![1], "<b>y</b>".to_string());
        let node = node_at(&doc, &[1]).unwrap();
        assert_eq!(node.text_content(), "");
        assert_eq!(
            crate::tree::VirtualNode::to_markup(node),
            "<tex class=\"tex\"><b>y</b></tex>"
        );
    }
}
