use thiserror::Error;

use crate::font_metrics::Font;
pub use crate::parser::ParseError;

/// A malformed escape or character in the source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated escape at end of input (position {position})")]
    UnterminatedEscape { position: usize },
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}
impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnterminatedEscape { position }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// A syntax tree that could not be laid out
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("unknown symbol {text:?}")]
    UnknownSymbol { text: String },
    #[error("no metrics for {ch:?} in font {}", font.as_str())]
    MissingMetric { ch: char, font: Font },
    #[error("unknown command {name:?}")]
    UnknownCommand { name: String },
}

/// Nesting of groups or arguments went past the configured limit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("nesting depth exceeded the limit of {limit}")]
pub struct RecursionLimitError {
    pub limit: usize,
    /// Where in the source the limit was hit, when known
    pub position: Option<usize>,
}

/// The error type for every failure caused by the source text.
///
/// All four kinds are the same category from a caller's point of view: the formula cannot be
/// rendered and a fallback should be shown. Panics are never converted into this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("build error: {0}")]
    Build(#[from] BuildError),
    #[error(transparent)]
    RecursionLimit(#[from] RecursionLimitError),
}
impl RenderError {
    /// Whether this failure points at incomplete symbol or metric coverage rather than bad
    /// input. Maintainers may want to log these separately.
    pub fn is_coverage_gap(&self) -> bool {
        matches!(self, RenderError::Build(BuildError::MissingMetric { .. }))
    }

    /// Byte offset in the source where the failure was detected, when known
    pub fn position(&self) -> Option<usize> {
        match self {
            RenderError::Lex(err) => Some(err.position()),
            RenderError::Parse(err) => Some(err.position()),
            RenderError::Build(_) => None,
            RenderError::RecursionLimit(err) => err.position,
        }
    }
}
