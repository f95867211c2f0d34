use std::sync::Arc;

use crate::{
    parse_node::ParseNodeType,
    style::{StyleId, DISPLAY_STYLE, SCRIPT_SCRIPT_STYLE, SCRIPT_STYLE, TEXT_STYLE},
    util::find_assoc_data,
};

use super::{FunctionPropSpec, FunctionSpec, Functions};

const STYLE_FUNCS: &[(&str, StyleId)] = &[
    ("\\displaystyle", DISPLAY_STYLE),
    ("\\textstyle", TEXT_STYLE),
    ("\\scriptstyle", SCRIPT_STYLE),
    ("\\scriptscriptstyle", SCRIPT_SCRIPT_STYLE),
];

pub fn add_functions(fns: &mut Functions) {
    let styling = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Styling, 0).with_allowed_in_text(true),
        builder: None,
    });

    fns.insert_for_all_str(STYLE_FUNCS.iter().map(|(name, _)| *name), styling);
}

/// The style a style command switches to. Style changes are Rule 3 of Appendix G of the
/// TeXbook.
pub fn style_of(name: &str) -> Option<StyleId> {
    find_assoc_data(STYLE_FUNCS, name).copied()
}
