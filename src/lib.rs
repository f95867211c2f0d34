use font_metrics::{get_global_metrics, FontMetrics};
use layout::{builder::LayoutBuilder, LayoutBox, Metrics};
use once_cell::unsync::OnceCell;
use style::{StyleId, DISPLAY_STYLE, TEXT_STYLE};
use unit::Em;

pub mod array;
#[cfg(feature = "batch")]
pub mod batch;
pub mod delimiter;
pub mod dom_tree;
pub mod emit;
pub mod environments;
pub mod error;
pub mod font_metrics;
mod font_metrics_data;
pub mod functions;
pub mod layout;
pub mod lexer;
pub mod parse_node;
pub mod parser;
mod spacing_data;
pub mod style;
pub mod symbols;
pub mod tree;
pub mod unit;
mod util;

pub use dom_tree::DomNode;
pub use error::{BuildError, LexError, ParseError, RecursionLimitError, RenderError};
pub use parse_node::ParseNode;
pub use parser::ParserConfig;

const SIZE_STYLE_MAP: [[u8; 3]; 11] = [
    // Each element contains [textsize, scriptsize, scriptscriptsize].
    // The size mappings are taken from TeX with \normalsize=10pt.
    [1, 1, 1],   // size1: [5, 5, 5]              \tiny
    [2, 1, 1],   // size2: [6, 5, 5]
    [3, 1, 1],   // size3: [7, 5, 5]              \scriptsize
    [4, 2, 1],   // size4: [8, 6, 5]              \footnotesize
    [5, 2, 1],   // size5: [9, 6, 5]              \small
    [6, 3, 1],   // size6: [10, 7, 5]             \normalsize
    [7, 4, 2],   // size7: [12, 8, 6]             \large
    [8, 6, 3],   // size8: [14.4, 10, 7]          \Large
    [9, 7, 6],   // size9: [17.28, 12, 10]        \LARGE
    [10, 8, 7],  // size10: [20.74, 14.4, 12]     \huge
    [11, 10, 9], // size11: [24.88, 20.74, 17.28] \HUGE
];

const SIZE_MULTIPLIERS: [f64; 11] = [
    // font_metrics::get_global_metrics also uses size indexes, so if
    // you change size indexes, change that function.
    0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488,
];

fn size_at_style(size: usize, style: StyleId) -> usize {
    if style.size() < 2 {
        size
    } else {
        SIZE_STYLE_MAP[size - 1][style.size() - 1] as usize
    }
}

const BASE_SIZE: usize = 6;

/// The context a node is built in. Derived from the parent's context, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub style: StyleId,
    /// CSS color of glyphs and rules
    pub color: Option<String>,
    /// Size index, 1 through 11
    pub size: usize,
    /// The size that script styles are relative to
    pub text_size: usize,
    /// This is separate per options instance
    font_metrics: OnceCell<FontMetrics>,
}
impl Options {
    pub(crate) fn from_parser_conf(conf: &ParserConfig) -> Self {
        Options {
            style: if conf.display_mode {
                DISPLAY_STYLE
            } else {
                TEXT_STYLE
            },
            color: None,
            size: BASE_SIZE,
            text_size: BASE_SIZE,
            font_metrics: OnceCell::new(),
        }
    }

    /// The intended method of cloning the options instance and then altering it. This clears the
    /// font metrics cache.
    pub fn clone_alter(&self) -> Options {
        let mut opts = self.clone();
        opts.font_metrics = Default::default();
        opts
    }

    pub fn size_multiplier(&self) -> f64 {
        SIZE_MULTIPLIERS[self.size - 1]
    }

    /// Returns an options object with the given style
    /// Returns `None` if there was no changes needed
    pub fn having_style(&self, style: StyleId) -> Option<Options> {
        if self.style == style {
            None
        } else {
            let mut opts = self.clone_alter();
            opts.style = style;
            opts.size = size_at_style(self.text_size, style);
            Some(opts)
        }
    }

    /// Returns an options object with a cramped version of the current style.
    /// Returns `None` if there was no changes needed.
    pub fn having_cramped_style(&self) -> Option<Options> {
        self.having_style(self.style.cramp())
    }

    /// Returns an options object with the given size and in at least `\textstyle`.
    /// Returns `None` if there was no changes needed.
    pub fn having_size(&self, size: usize) -> Option<Options> {
        if self.size == size && self.text_size == size {
            None
        } else {
            let mut opts = self.clone_alter();
            opts.style = self.style.text();
            opts.size = size;
            opts.text_size = size;
            Some(opts)
        }
    }

    pub fn with_color(mut self, color: String) -> Options {
        self.color = Some(color);
        self
    }

    /// Get the font metrics, initializing if needed.
    pub fn font_metrics(&self) -> &FontMetrics {
        let size = self.size;
        self.font_metrics.get_or_init(|| get_global_metrics(size))
    }

    /// A font parameter, scaled to this context's size
    pub fn metric(&self, pick: fn(&FontMetrics) -> f64) -> Em {
        Em(pick(self.font_metrics()) * self.size_multiplier())
    }

    /// Width of 1mu at this context's size
    pub fn em_per_mu(&self) -> Em {
        self.metric(|m| m.css_em_per_mu)
    }
}

/// A laid out formula
#[derive(Debug, Clone, PartialEq)]
pub struct MathLayout {
    pub root: LayoutBox,
    pub display_mode: bool,
    pub metrics: Metrics,
}

/// Parse a formula into its syntax tree. The root is the implicit group around the whole formula.
pub fn parse_tree(expr: &str, conf: ParserConfig) -> Result<ParseNode, RenderError> {
    let mut parser = parser::Parser::new(expr, conf);
    parser.parse()
}

/// Parse and lay out a formula
pub fn build_layout(expr: &str, conf: ParserConfig) -> Result<MathLayout, RenderError> {
    let tree = parse_tree(expr, conf.clone())?;

    let options = Options::from_parser_conf(&conf);
    let root = LayoutBuilder::new(&conf).build(&tree, &options)?;

    Ok(MathLayout {
        metrics: root.metrics(),
        root,
        display_mode: conf.display_mode,
    })
}

/// Render a formula to a markup string
pub fn render_to_string(expr: &str, conf: ParserConfig) -> Result<String, RenderError> {
    let layout = build_layout(expr, conf)?;
    Ok(emit::emit(&layout, emit::markup::MarkupBackend::default()))
}

/// Render a formula to a presentation node tree, without inserting it anywhere
pub fn render_to_dom_tree(expr: &str, conf: ParserConfig) -> Result<DomNode, RenderError> {
    let layout = build_layout(expr, conf)?;
    Ok(emit::emit(&layout, emit::dom::DomBackend::default()))
}

/// Render a formula into `target`, replacing whatever it held before.
/// On failure `target` is left untouched.
pub fn render(expr: &str, target: &mut DomNode, conf: ParserConfig) -> Result<(), RenderError> {
    let node = render_to_dom_tree(expr, conf)?;
    target.clear_children();
    target.append_child(node);
    Ok(())
}
