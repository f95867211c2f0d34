use std::sync::Arc;

use crate::{
    layout::{
        builder::{BuildResult, LayoutBuilder},
        LayoutBox,
    },
    parse_node::{CommandNode, ParseNode, ParseNodeType},
    symbols::AtomClass,
    util::{find_assoc_data, parse_rgb, parse_rgb_3},
    Options,
};

use super::{ord_argument, ArgType, FunctionPropSpec, FunctionSpec, Functions};

/// Commands which color their argument with a fixed color
const NAMED_COLOR_COMMANDS: &[(&str, &str)] = &[
    ("\\blue", "#6495ed"),
    ("\\orange", "#ffa500"),
    ("\\pink", "#ff00af"),
    ("\\red", "#df0030"),
    ("\\green", "#28ae7b"),
    ("\\gray", "gray"),
    ("\\purple", "#9d38bd"),
];

/// Color names accepted by `\color`
const COLOR_NAMES: &[&str] = &[
    "black", "blue", "brown", "cyan", "darkgray", "gray", "green", "lightgray", "lime",
    "magenta", "olive", "orange", "pink", "purple", "red", "teal", "violet", "white", "yellow",
];

pub fn add_functions(fns: &mut Functions) {
    let color = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 2)
            .with_allowed_in_text(true)
            .with_allowed_in_argument(true)
            .with_arg_types(&[ArgType::Color, ArgType::Group] as &[ArgType]),
        builder: Some(Box::new(color_builder)),
    });
    fns.insert("\\color".into(), color);

    let named_color = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_args(ParseNodeType::Command, 1)
            .with_allowed_in_text(true)
            .with_allowed_in_argument(true),
        builder: Some(Box::new(named_color_builder)),
    });
    fns.insert_for_all_str(
        NAMED_COLOR_COMMANDS.iter().map(|(name, _)| *name),
        named_color,
    );
}

/// Normalizes a color argument into a CSS color: `#rgb` and `#rrggbb` become lowercase
/// `#rrggbb`, and known names are passed through. Returns `None` for anything else.
pub fn parse_color(color: &str) -> Option<String> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        let rgb = match hex.len() {
            3 => parse_rgb_3(hex)?,
            6 => parse_rgb(hex)?,
            _ => return None,
        };
        return Some(format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]));
    }

    let lower = color.to_ascii_lowercase();
    COLOR_NAMES.contains(&lower.as_str()).then_some(lower)
}

fn color_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    // The parser has already checked the color
    let color = match &node.args[0] {
        ParseNode::Raw(raw) => parse_color(&raw.string),
        _ => None,
    };

    build_colored(builder, &node.args[1], color, options)
}

fn named_color_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let color = find_assoc_data(NAMED_COLOR_COMMANDS, node.name.as_str()).map(|c| c.to_string());

    build_colored(builder, &node.args[0], color, options)
}

fn build_colored(
    builder: &mut LayoutBuilder,
    body: &ParseNode,
    color: Option<String>,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let new_options = match color {
        Some(color) => options.clone().with_color(color),
        None => options.clone(),
    };

    builder.build_hlist(ord_argument(body), &new_options, Some(AtomClass::Ord))
}

#[cfg(test)]
mod tests {
    use super::parse_color;
    use crate::{
        layout::{builder::LayoutBuilder, LayoutBox},
        parser::{Parser, ParserConfig},
        Options,
    };

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#F08").as_deref(), Some("#ff0088"));
        assert_eq!(parse_color("#1a2B3c").as_deref(), Some("#1a2b3c"));
        assert_eq!(parse_color("Red").as_deref(), Some("red"));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("#+fffff"), None);
        assert_eq!(parse_color("#+ff"), None);
        assert_eq!(parse_color("notacolor"), None);
    }

    fn first_glyph_color(node: &LayoutBox) -> Option<String> {
        match node {
            LayoutBox::Glyph(glyph) => Some(glyph.color.clone().unwrap_or_default()),
            LayoutBox::HList(hlist) => hlist.children.iter().find_map(first_glyph_color),
            LayoutBox::VList(vlist) => vlist
                .children
                .iter()
                .find_map(|child| first_glyph_color(&child.node)),
            _ => None,
        }
    }

    #[test]
    fn test_color_reaches_glyphs() {
        let conf = ParserConfig::default();
        let options = Options::from_parser_conf(&conf);

        let tree = Parser::new(r"\color{#f00}{x}", conf.clone()).parse().unwrap();
        let root = LayoutBuilder::new(&conf).build(&tree, &options).unwrap();
        assert_eq!(first_glyph_color(&root).as_deref(), Some("#ff0000"));

        let tree = Parser::new(r"\blue{x}", conf.clone()).parse().unwrap();
        let root = LayoutBuilder::new(&conf).build(&tree, &options).unwrap();
        assert_eq!(first_glyph_color(&root).as_deref(), Some("#6495ed"));
    }
}
