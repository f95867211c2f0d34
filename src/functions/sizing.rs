use std::sync::Arc;

use crate::parse_node::ParseNodeType;

use super::{FunctionPropSpec, FunctionSpec, Functions};

/// Size commands, in order of size index starting at 1
const SIZE_FUNCS: &[&str] = &[
    "\\tiny",
    "\\sixptsize",
    "\\scriptsize",
    "\\footnotesize",
    "\\small",
    "\\normalsize",
    "\\large",
    "\\Large",
    "\\LARGE",
    "\\huge",
    "\\Huge",
];

pub fn add_functions(fns: &mut Functions) {
    // The parser collects the rest of the group into a sizing node, which the layout builder
    // handles directly
    let sizing = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Sizing, 0).with_allowed_in_text(true),
        builder: None,
    });

    fns.insert_for_all_str(SIZE_FUNCS.iter().copied(), sizing);
}

/// The size index, 1 through 11, of a size command
pub fn size_of(name: &str) -> Option<usize> {
    SIZE_FUNCS.iter().position(|&s| s == name).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::size_of;
    use crate::{build_layout, parser::ParserConfig};

    #[test]
    fn test_size_of() {
        assert_eq!(size_of("\\tiny"), Some(1));
        assert_eq!(size_of("\\normalsize"), Some(6));
        assert_eq!(size_of("\\Huge"), Some(11));
        assert_eq!(size_of("\\big"), None);
    }

    #[test]
    fn test_size_scales_glyphs() {
        let conf = ParserConfig::default();
        let normal = build_layout("x", conf.clone()).unwrap();
        let huge = build_layout(r"\Huge x", conf.clone()).unwrap();
        let tiny = build_layout(r"\tiny x", conf).unwrap();

        let ratio = huge.metrics.width.0 / normal.metrics.width.0;
        assert!((ratio - 2.488).abs() < 1e-9);
        assert!(tiny.metrics.width < normal.metrics.width);
    }
}
