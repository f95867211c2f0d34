use std::{borrow::Cow, collections::BTreeMap};

use crate::util;

pub type ClassList = Vec<String>;

/// Attributes of a presentation node. Ordered so that rendering a node twice gives the same text.
pub type Attributes = BTreeMap<String, String>;

/// Returns the value that should go in `class="{}"`
pub(crate) fn class_attr(classes: &[String]) -> Option<String> {
    if classes.iter().all(|c| c.is_empty()) {
        None
    } else {
        Some(
            classes
                .iter()
                .filter(|c| !c.is_empty())
                .map(|class| util::escape(class.as_str()))
                .collect::<Vec<Cow<'_, str>>>()
                .join(" "),
        )
    }
}

/// Writes the attribute part of an opening tag: the classes, the style, and then the remaining
/// attributes. Shared by every writer of markup so that they agree byte for byte.
pub(crate) fn write_attributes(
    out: &mut String,
    classes: &[String],
    style: &str,
    attributes: &Attributes,
) {
    if let Some(class) = class_attr(classes) {
        out.push_str(" class=\"");
        out.push_str(&class);
        out.push('"');
    }

    if !style.is_empty() {
        out.push_str(" style=\"");
        out.push_str(&util::escape(style));
        out.push('"');
    }

    for (name, value) in attributes {
        out.push(' ');
        out.push_str(&util::escape(name));
        out.push_str("=\"");
        out.push_str(&util::escape(value));
        out.push('"');
    }
}

pub trait VirtualNode {
    fn to_markup(&self) -> String;
}
impl<T: VirtualNode + ?Sized> VirtualNode for Box<T> {
    fn to_markup(&self) -> String {
        (**self).to_markup()
    }
}

#[cfg(test)]
mod tests {
    use super::{class_attr, write_attributes, Attributes};

    #[test]
    fn test_class_attr() {
        assert_eq!(class_attr(&[]), None);
        assert_eq!(class_attr(&[String::new()]), None);
        assert_eq!(
            class_attr(&["mord".to_string(), String::new(), "mathit".to_string()]),
            Some("mord mathit".to_string())
        );
        assert_eq!(
            class_attr(&["a\"b".to_string()]),
            Some("a&quot;b".to_string())
        );
    }

    #[test]
    fn test_write_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert("title".to_string(), "<x>".to_string());
        attributes.insert("aria-hidden".to_string(), "true".to_string());

        let mut out = String::new();
        write_attributes(&mut out, &["katex".to_string()], "height:1em;", &attributes);
        assert_eq!(
            out,
            " class=\"katex\" style=\"height:1em;\" aria-hidden=\"true\" title=\"&lt;x&gt;\""
        );
    }
}
