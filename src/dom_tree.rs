//! The presentation node tree produced by the node-tree backend, and the host containers it is
//! inserted into.

use std::borrow::Cow;

use crate::tree::{write_attributes, Attributes, ClassList, VirtualNode};

/// Inline style of a presentation node. Only the properties the emitter sets are present, and
/// they are always written in the order of the fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssStyle {
    pub border_color: Option<Cow<'static, str>>,
    pub border_top_width: Option<Cow<'static, str>>,
    pub color: Option<Cow<'static, str>>,
    pub font_size: Option<Cow<'static, str>>,
    pub height: Option<Cow<'static, str>>,
    pub margin_right: Option<Cow<'static, str>>,
    pub top: Option<Cow<'static, str>>,
    pub vertical_align: Option<Cow<'static, str>>,
    pub width: Option<Cow<'static, str>>,
}
impl CssStyle {
    pub fn is_empty(&self) -> bool {
        self.to_css().is_empty()
    }

    /// The text that goes in `style="{}"`
    pub fn to_css(&self) -> String {
        let props = [
            ("border-color", &self.border_color),
            ("border-top-width", &self.border_top_width),
            ("color", &self.color),
            ("font-size", &self.font_size),
            ("height", &self.height),
            ("margin-right", &self.margin_right),
            ("top", &self.top),
            ("vertical-align", &self.vertical_align),
            ("width", &self.width),
        ];

        let mut css = String::new();
        for (name, value) in props {
            if let Some(value) = value {
                css.push_str(name);
                css.push(':');
                css.push_str(value);
                css.push(';');
            }
        }
        css
    }

    /// Look up a property by its CSS name
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "border-color" => &self.border_color,
            "border-top-width" => &self.border_top_width,
            "color" => &self.color,
            "font-size" => &self.font_size,
            "height" => &self.height,
            "margin-right" => &self.margin_right,
            "top" => &self.top,
            "vertical-align" => &self.vertical_align,
            "width" => &self.width,
            _ => return None,
        };
        value.as_deref()
    }
}

/// A child of a [`DomNode`]
#[derive(Debug, Clone, PartialEq)]
pub enum DomChild {
    Node(DomNode),
    Text(String),
    /// Markup that was rendered elsewhere. Written out as is.
    Raw(String),
}
impl VirtualNode for DomChild {
    fn to_markup(&self) -> String {
        match self {
            DomChild::Node(node) => node.to_markup(),
            DomChild::Text(text) => crate::util::escape(text).into_owned(),
            DomChild::Raw(markup) => markup.clone(),
        }
    }
}
impl From<DomNode> for DomChild {
    fn from(node: DomNode) -> Self {
        DomChild::Node(node)
    }
}

/// An element of the presentation tree
#[derive(Debug, Clone, PartialEq)]
pub struct DomNode {
    pub tag: Cow<'static, str>,
    pub classes: ClassList,
    pub style: CssStyle,
    pub attributes: Attributes,
    pub children: Vec<DomChild>,
}
impl DomNode {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> DomNode {
        DomNode {
            tag: tag.into(),
            classes: ClassList::new(),
            style: CssStyle::default(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn span(classes: ClassList, style: CssStyle, children: Vec<DomChild>) -> DomNode {
        DomNode {
            tag: Cow::Borrowed("span"),
            classes,
            style,
            attributes: Attributes::new(),
            children,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> DomNode {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|x| x == class)
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn append_child(&mut self, node: DomNode) {
        self.children.push(DomChild::Node(node));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(DomChild::Text(text.into()));
    }

    /// Replace the content with already rendered markup
    pub fn set_inner_markup(&mut self, markup: String) {
        self.children.clear();
        self.children.push(DomChild::Raw(markup));
    }

    /// Child elements, skipping text
    pub fn child_nodes(&self) -> impl Iterator<Item = &DomNode> {
        self.children.iter().filter_map(|child| match child {
            DomChild::Node(node) => Some(node),
            DomChild::Text(_) | DomChild::Raw(_) => None,
        })
    }

    /// All of the text below this node, in document order
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in self.children.iter() {
            match child {
                DomChild::Node(node) => node.collect_text(out),
                DomChild::Text(t) => out.push_str(t),
                DomChild::Raw(_) => {}
            }
        }
    }

    /// Depth-first search for the first node with the class
    pub fn find_by_class(&self, class: &str) -> Option<&DomNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_nodes().find_map(|node| node.find_by_class(class))
    }
}
impl VirtualNode for DomNode {
    fn to_markup(&self) -> String {
        let mut markup = format!("<{}", self.tag);
        write_attributes(&mut markup, &self.classes, &self.style.to_css(), &self.attributes);
        markup.push('>');

        for child in self.children.iter() {
            markup.push_str(&child.to_markup());
        }

        markup.push_str("</");
        markup.push_str(&self.tag);
        markup.push('>');
        markup
    }
}

#[cfg(test)]
mod tests {
    use super::{CssStyle, DomNode};
    use crate::tree::VirtualNode;

    #[test]
    fn test_style_order() {
        let style = CssStyle {
            width: Some("1em".into()),
            height: Some("2em".into()),
            ..Default::default()
        };
        assert_eq!(style.to_css(), "height:2em;width:1em;");
        assert_eq!(style.get("width"), Some("1em"));
        assert_eq!(style.get("top"), None);
        assert!(CssStyle::default().is_empty());
    }

    #[test]
    fn test_markup() {
        let mut node = DomNode::new("div").with_class("tex");
        node.append_text("a < b");
        assert_eq!(node.to_markup(), "<div class=\"tex\">a &lt; b</div>");

        let mut inner = DomNode::span(vec!["mord".to_string()], CssStyle::default(), Vec::new());
        inner.append_text("x");
        node.clear_children();
        node.append_child(inner);
        assert_eq!(
            node.to_markup(),
            "<div class=\"tex\"><span class=\"mord\">x</span></div>"
        );
        assert_eq!(node.text_content(), "x");
        assert!(node.find_by_class("mord").is_some());
    }
}
