use crate::{
    dom_tree::CssStyle,
    tree::{write_attributes, Attributes, ClassList},
    util,
};

use super::Backend;

/// Writes the formula straight to a markup string, escaping all text
#[derive(Debug, Default)]
pub struct MarkupBackend;

impl Backend for MarkupBackend {
    type Node = String;
    type Output = String;

    fn text(&mut self, text: &str) -> String {
        util::escape(text).into_owned()
    }

    fn span(
        &mut self,
        classes: ClassList,
        style: CssStyle,
        attributes: Attributes,
        children: Vec<String>,
    ) -> String {
        let mut markup = String::from("<span");
        write_attributes(&mut markup, &classes, &style.to_css(), &attributes);
        markup.push('>');
        for child in children {
            markup.push_str(&child);
        }
        markup.push_str("</span>");
        markup
    }

    fn finish(self, root: String) -> String {
        root
    }
}
