use std::sync::Arc;

use crate::{
    delimiter::{delim_char, sized_delim},
    layout::{
        builder::{BuildResult, LayoutBuilder},
        LayoutBox,
    },
    parse_node::{CommandNode, ParseNodeType},
    symbols::AtomClass,
    util::find_assoc_data,
    Options,
};

use super::{ArgType, FunctionPropSpec, FunctionSpec, Functions};

#[derive(Debug, Clone, Copy)]
struct DelimInfo {
    class: AtomClass,
    size: usize,
}

const fn delim_info(class: AtomClass, size: usize) -> DelimInfo {
    DelimInfo { class, size }
}

const DELIM_SIZES: &[(&str, DelimInfo)] = &[
    ("\\bigl", delim_info(AtomClass::Open, 1)),
    ("\\Bigl", delim_info(AtomClass::Open, 2)),
    ("\\biggl", delim_info(AtomClass::Open, 3)),
    ("\\Biggl", delim_info(AtomClass::Open, 4)),
    ("\\bigr", delim_info(AtomClass::Close, 1)),
    ("\\Bigr", delim_info(AtomClass::Close, 2)),
    ("\\biggr", delim_info(AtomClass::Close, 3)),
    ("\\Biggr", delim_info(AtomClass::Close, 4)),
    ("\\bigm", delim_info(AtomClass::Rel, 1)),
    ("\\Bigm", delim_info(AtomClass::Rel, 2)),
    ("\\biggm", delim_info(AtomClass::Rel, 3)),
    ("\\Biggm", delim_info(AtomClass::Rel, 4)),
    ("\\big", delim_info(AtomClass::Ord, 1)),
    ("\\Big", delim_info(AtomClass::Ord, 2)),
    ("\\bigg", delim_info(AtomClass::Ord, 3)),
    ("\\Bigg", delim_info(AtomClass::Ord, 4)),
];

/// Whether the token can be used where a delimiter is expected. `.` is the empty delimiter.
pub fn is_delimiter(text: &str) -> bool {
    text == "." || delim_char(text).is_some()
}

pub fn add_functions(fns: &mut Functions) {
    let delim_sizing = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 1)
            .with_allowed_in_argument(true)
            .with_arg_types(&[ArgType::Delimiter] as &[ArgType]),
        builder: Some(Box::new(delim_sizing_builder)),
    });
    fns.insert_for_all_str(DELIM_SIZES.iter().map(|(name, _)| *name), delim_sizing);

    // The parser reads the delimiters and body itself, up to the matching `\right`
    let left = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::LeftRight, 0)
            .with_allowed_in_argument(true),
        builder: None,
    });
    fns.insert("\\left".into(), left);
}

fn delim_sizing_builder(
    _builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let info = find_assoc_data(DELIM_SIZES, node.name.as_str())
        .copied()
        .unwrap_or(delim_info(AtomClass::Ord, 1));
    let delim = node.args[0].text().unwrap_or(".");

    sized_delim(delim, info.size, options, info.class)
}

#[cfg(test)]
mod tests {
    use super::is_delimiter;
    use crate::{
        build_layout,
        error::RenderError,
        parser::{ParseError, ParserConfig},
        parse_tree,
    };

    #[test]
    fn test_is_delimiter() {
        assert!(is_delimiter("("));
        assert!(is_delimiter("\\langle"));
        assert!(is_delimiter("."));
        assert!(!is_delimiter("x"));
    }

    #[test]
    fn test_big_sizes_grow() {
        let conf = ParserConfig::default();
        let heights = [r"\bigl(", r"\Bigl(", r"\biggl(", r"\Biggl("]
            .into_iter()
            .map(|expr| {
                let layout = build_layout(expr, conf.clone()).unwrap();
                layout.metrics.height + layout.metrics.depth
            })
            .collect::<Vec<_>>();

        assert!(heights.windows(2).all(|w| w[0] < w[1]), "{heights:?}");
    }

    #[test]
    fn test_invalid_delimiter() {
        let err = parse_tree(r"\big x", ParserConfig::default()).unwrap_err();
        assert_eq!(
            err,
            RenderError::Parse(ParseError::InvalidDelimiter {
                delim: "x".to_string(),
                position: 5,
            })
        );
    }
}
