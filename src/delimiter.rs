//! Delimiters which grow to fit their contents, like `\left(` or the surd of a radical.
//!
//! A delimiter of a given size is picked from a sequence of glyphs of increasing size: the Main
//! font glyph in scriptscript, script and text style, then the glyphs of the Size1 through Size4
//! fonts. Vertical bars have no large glyphs, so past the Main font they become a drawn rule.

use crate::{
    error::BuildError,
    font_metrics::{get_character_metrics, Font},
    layout::{
        builder::{make_glyph, BuildResult, LayoutBuilder, Surrounding},
        vlist::{make_v_list, VListElemShift, VListParam},
        HList, LayoutBox, Metrics, Rule,
    },
    parse_node::{LeftRightNode, Mode},
    style::{StyleId, SCRIPT_SCRIPT_STYLE, SCRIPT_STYLE, TEXT_STYLE},
    symbols::AtomClass,
    unit::Em,
    Options,
};

/// Space taken by the `.` delimiter, which draws nothing
pub(crate) const NULL_DELIMITER_SPACE: Em = Em(0.12);

/// Total heights of the `\big` family, in em. Found by looking at TeX's output of
/// `$\bigl| \Bigl| \biggl| \Biggl| \showlists$`.
const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// The character drawn for a delimiter, `None` if it is not a delimiter
pub(crate) fn delim_char(delim: &str) -> Option<&'static str> {
    Some(match delim {
        "(" => "(",
        ")" => ")",
        "[" | "\\lbrack" => "[",
        "]" | "\\rbrack" => "]",
        "\\{" | "\\lbrace" => "{",
        "\\}" | "\\rbrace" => "}",
        "/" => "/",
        "\\backslash" => "\\",
        "<" | "\\langle" | "\u{27e8}" => "\u{27e8}",
        ">" | "\\rangle" | "\u{27e9}" => "\u{27e9}",
        "\\lfloor" | "\u{230a}" => "\u{230a}",
        "\\rfloor" | "\u{230b}" => "\u{230b}",
        "\\lceil" | "\u{2308}" => "\u{2308}",
        "\\rceil" | "\u{2309}" => "\u{2309}",
        "|" | "\\vert" | "\u{2223}" => "\u{2223}",
        "\\|" | "\\Vert" | "\u{2225}" => "\u{2225}",
        "\\surd" => "\u{221a}",
        _ => return None,
    })
}

/// How many vertical rules a bar delimiter is drawn with, if it is one
fn bar_count(ch: &str) -> Option<usize> {
    match ch {
        "\u{2223}" => Some(1),
        "\u{2225}" => Some(2),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// The Main font glyph, set in the given style
    Small(StyleId),
    /// The glyph of one of the Size fonts, 1 through 4
    Large(usize),
    /// Drawn rules
    Bar,
}

const GLYPH_SEQUENCE: [Delimiter; 7] = [
    Delimiter::Small(SCRIPT_SCRIPT_STYLE),
    Delimiter::Small(SCRIPT_STYLE),
    Delimiter::Small(TEXT_STYLE),
    Delimiter::Large(1),
    Delimiter::Large(2),
    Delimiter::Large(3),
    Delimiter::Large(4),
];

const BAR_SEQUENCE: [Delimiter; 4] = [
    Delimiter::Small(SCRIPT_SCRIPT_STYLE),
    Delimiter::Small(SCRIPT_STYLE),
    Delimiter::Small(TEXT_STYLE),
    Delimiter::Bar,
];

fn delim_size_to_font(size: usize) -> Font {
    Font::DELIMITER_SIZES[size.clamp(1, 4) - 1]
}

/// Total height of `ch` as the given kind of delimiter, in absolute em
fn delimiter_total_height(ch: &str, delim: Delimiter, options: &Options) -> BuildResult<Em> {
    let (font, multiplier) = match delim {
        Delimiter::Small(style) => {
            let new_options = options.having_style(style);
            let new_options = new_options.as_ref().unwrap_or(options);
            (Font::MainRegular, new_options.size_multiplier())
        }
        Delimiter::Large(size) => (delim_size_to_font(size), options.size_multiplier()),
        Delimiter::Bar => return Ok(Em(f64::INFINITY)),
    };

    let c = ch.chars().next().ok_or_else(|| BuildError::UnknownSymbol {
        text: ch.to_string(),
    })?;
    let metrics = get_character_metrics(c, font).ok_or(BuildError::MissingMetric { ch: c, font })?;
    Ok(Em((metrics.height + metrics.depth) * multiplier))
}

/// Traverse a sequence of delimiters to decide what kind of delimiter should be used to create a
/// delimiter of the given height+depth
fn traverse_sequence(
    ch: &str,
    height: Em,
    sequence: &[Delimiter],
    options: &Options,
) -> BuildResult<Delimiter> {
    // Smaller styles start earlier in the sequence. Scriptscript starts at index 0, script at 1,
    // and text and display at 2.
    let start = (3 - options.style.size()).min(2);
    for entry in sequence.iter().skip(start) {
        if delimiter_total_height(ch, *entry, options)? >= height {
            return Ok(*entry);
        }
    }

    // Nothing is large enough, so use the largest there is
    Ok(sequence[sequence.len() - 1])
}

/// Makes a delimiter of at least the given height+depth.
/// When `center` is set it is vertically centered on the axis.
pub(crate) fn custom_sized_delim(
    delim: &str,
    height: Em,
    center: bool,
    options: &Options,
    class: AtomClass,
) -> BuildResult<LayoutBox> {
    if delim == "." {
        return Ok(null_delimiter(options, class));
    }

    let ch = delim_char(delim).ok_or_else(|| BuildError::UnknownSymbol {
        text: delim.to_string(),
    })?;
    let sequence: &[Delimiter] = if bar_count(ch).is_some() {
        &BAR_SEQUENCE
    } else {
        &GLYPH_SEQUENCE
    };

    match traverse_sequence(ch, height, sequence, options)? {
        Delimiter::Small(style) => small_delim(ch, style, center, options, class),
        Delimiter::Large(size) => large_delim(ch, size, options, class),
        Delimiter::Bar => Ok(bar_delim(ch, height, options, class)),
    }
}

/// Makes a delimiter for the `\big` family, of size 1 through 4
pub(crate) fn sized_delim(
    delim: &str,
    size: usize,
    options: &Options,
    class: AtomClass,
) -> BuildResult<LayoutBox> {
    if delim == "." {
        return Ok(null_delimiter(options, class));
    }

    let ch = delim_char(delim).ok_or_else(|| BuildError::UnknownSymbol {
        text: delim.to_string(),
    })?;

    if bar_count(ch).is_some() {
        let height = Em(SIZE_TO_MAX_HEIGHT[size.clamp(1, 4)]) * options.size_multiplier();
        Ok(bar_delim(ch, height, options, class))
    } else {
        large_delim(ch, size, options, class)
    }
}

/// Makes a delimiter for `\left` or `\right`, which is centered on the axis and reaches at least
/// as far from it as the contents do
pub(crate) fn left_right_delim(
    delim: &str,
    height: Em,
    depth: Em,
    options: &Options,
    class: AtomClass,
) -> BuildResult<LayoutBox> {
    let axis_height = options.metric(|m| m.axis_height);

    // Taken from TeX source, tex.web, function make_left_right
    let delimiter_factor = 901.0;
    let delimiter_extend = Em(5.0 / options.font_metrics().pt_per_em) * options.size_multiplier();

    let max_dist_from_axis = (height - axis_height).max(depth + axis_height);

    let total_height = (max_dist_from_axis * (delimiter_factor / 500.0))
        .max(max_dist_from_axis * 2.0 - delimiter_extend);

    custom_sized_delim(delim, total_height, true, options, class)
}

fn null_delimiter(options: &Options, class: AtomClass) -> LayoutBox {
    HList::new(
        vec![LayoutBox::spacer(NULL_DELIMITER_SPACE * options.size_multiplier())],
        Some(class),
    )
    .into()
}

/// Makes a delimiter from the Main font, restyled to text, script or scriptscript size
fn small_delim(
    ch: &str,
    style: StyleId,
    center: bool,
    options: &Options,
    class: AtomClass,
) -> BuildResult<LayoutBox> {
    let new_options = options.having_style(style);
    let new_options = new_options.as_ref().unwrap_or(options);

    let glyph = make_glyph(ch, Font::MainRegular, Mode::Math, new_options, Some(class))?;
    if !center {
        return Ok(glyph);
    }

    // The glyph is centered on the axis of its own size, move it to the axis of ours
    let shift = new_options.metric(|m| m.axis_height) - options.metric(|m| m.axis_height);
    if shift == Em::ZERO {
        return Ok(glyph);
    }

    Ok(make_v_list(
        VListParam::IndividualShift {
            children: vec![VListElemShift { elem: glyph, shift }],
        },
        Some(class),
    ))
}

/// Makes a delimiter from one of the Size fonts. These glyphs are centered on the axis already.
fn large_delim(
    ch: &str,
    size: usize,
    options: &Options,
    class: AtomClass,
) -> BuildResult<LayoutBox> {
    make_glyph(ch, delim_size_to_font(size), Mode::Math, options, Some(class))
}

/// Makes a vertical bar delimiter out of rules, centered on the axis
fn bar_delim(ch: &str, height: Em, options: &Options, class: AtomClass) -> LayoutBox {
    let count = bar_count(ch).unwrap_or(1);
    let axis_height = options.metric(|m| m.axis_height);
    let thickness = options.metric(|m| m.default_rule_thickness);
    // Keep the width of the text size glyph
    let width = get_character_metrics(ch.chars().next().unwrap_or('|'), Font::MainRegular)
        .map_or(Em(0.27778), |metrics| Em(metrics.width))
        * options.size_multiplier();

    let pitch = width * (1.0 / (count + 1) as f64);
    let mut children = Vec::with_capacity(count * 2 + 1);
    for i in 0..count {
        let gap = if i == 0 {
            pitch - thickness * 0.5
        } else {
            pitch - thickness
        };
        children.push(LayoutBox::spacer(gap));
        children.push(
            Rule {
                metrics: Metrics::new(
                    axis_height + height * 0.5,
                    height * 0.5 - axis_height,
                    thickness,
                ),
                color: options.color.clone(),
            }
            .into(),
        );
    }
    children.push(LayoutBox::spacer(pitch - thickness * 0.5));

    HList::new(children, Some(class)).into()
}

/// Lays out `\left<delim> ... \right<delim>`. The delimiters grow to fit the body, which is
/// spaced as if it were between an opening and a closing.
pub(crate) fn build_left_right(
    builder: &mut LayoutBuilder,
    node: &LeftRightNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    let inner = builder.build_expression(
        &node.body,
        options,
        Surrounding {
            before: Some(AtomClass::Open),
            after: Some(AtomClass::Close),
        },
    )?;

    let inner_height = inner.iter().map(LayoutBox::height).fold(Em::ZERO, Em::max);
    let inner_depth = inner.iter().map(LayoutBox::depth).fold(Em::ZERO, Em::max);

    let left = left_right_delim(&node.left, inner_height, inner_depth, options, AtomClass::Open)?;
    let right = left_right_delim(
        &node.right,
        inner_height,
        inner_depth,
        options,
        AtomClass::Close,
    )?;

    let mut children = Vec::with_capacity(inner.len() + 2);
    children.push(left);
    children.extend(inner);
    children.push(right);

    Ok(HList::new(children, Some(AtomClass::Inner)).into())
}

#[cfg(test)]
mod tests {
    use super::{custom_sized_delim, delim_char, sized_delim};
    use crate::{
        font_metrics::Font,
        layout::LayoutBox,
        parser::ParserConfig,
        symbols::AtomClass,
        unit::Em,
        Options,
    };

    fn options() -> Options {
        Options::from_parser_conf(&ParserConfig::default())
    }

    fn font_of(node: &LayoutBox) -> Option<Font> {
        match node {
            LayoutBox::Glyph(glyph) => Some(glyph.font),
            LayoutBox::VList(vlist) => font_of(&vlist.children[0].node),
            _ => None,
        }
    }

    #[test]
    fn test_delimiter_names() {
        assert_eq!(delim_char("\\{"), Some("{"));
        assert_eq!(delim_char("<"), Some("\u{27e8}"));
        assert_eq!(delim_char("\\Vert"), Some("\u{2225}"));
        assert_eq!(delim_char("x"), None);
    }

    #[test]
    fn test_sequence_grows() {
        let options = options();
        let small = custom_sized_delim("(", Em(0.5), true, &options, AtomClass::Open).unwrap();
        assert_eq!(font_of(&small), Some(Font::MainRegular));

        let large = custom_sized_delim("(", Em(1.7), true, &options, AtomClass::Open).unwrap();
        assert_eq!(font_of(&large), Some(Font::Size2));

        // Nothing is this large, so the largest glyph is used
        let huge = custom_sized_delim("(", Em(20.0), true, &options, AtomClass::Open).unwrap();
        assert_eq!(font_of(&huge), Some(Font::Size4));
    }

    #[test]
    fn test_bars_become_rules() {
        let options = options();
        let bar = sized_delim("|", 3, &options, AtomClass::Ord).unwrap();
        let LayoutBox::HList(hlist) = &bar else {
            panic!("expected hlist");
        };
        assert!((bar.height().0 + bar.depth().0 - 2.4).abs() < 1e-9);
        assert!(hlist
            .children
            .iter()
            .any(|child| matches!(child, LayoutBox::Rule(_))));

        let null = sized_delim(".", 1, &options, AtomClass::Open).unwrap();
        assert_eq!(null.width(), Em(0.12));
    }
}
