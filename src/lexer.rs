use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::LexError, parse_node::Mode, util::SourceLocation};

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    const REGEX_TEXT: &str = concat!(
        r"\A(?:",
        // [1] whitespace
        r"([ \r\n\t]+)",
        // [2] backslash followed by letters. Trailing whitespace only delimits the name.
        r"|(\\[a-zA-Z]+)[ \r\n\t]*",
        // [3] backslash followed by a single non-letter
        r"|(\\[^a-zA-Z])",
        // [4] comment, up to and including the end of the line
        r"|(%[^\n]*\n?)",
        // [5] any other printable character
        r"|([^\\\x00-\x08\x0b\x0c\x0e-\x1f\x7f])",
        r")"
    );
    Regex::new(REGEX_TEXT).expect("token regex is valid")
});

/// What a token means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `\name` or `\` followed by a single non-letter
    Command,
    /// Any literal character
    Char,
    BeginGroup,
    EndGroup,
    Superscript,
    Subscript,
    /// `&`, which separates cells in an environment
    AlignTab,
    /// `\\` or `\cr`, which separate rows in an environment
    RowSeparator,
    /// Whitespace. Only produced in text mode.
    Space,
    Eof,
}
impl TokenKind {
    fn classify(content: &str) -> TokenKind {
        match content {
            "{" => TokenKind::BeginGroup,
            "}" => TokenKind::EndGroup,
            "^" => TokenKind::Superscript,
            "_" => TokenKind::Subscript,
            "&" => TokenKind::AlignTab,
            "\\\\" | "\\cr" => TokenKind::RowSeparator,
            " " => TokenKind::Space,
            "EOF" => TokenKind::Eof,
            c if c.starts_with('\\') => TokenKind::Command,
            _ => TokenKind::Char,
        }
    }
}

/// Tokenizes a single source string on demand.
///
/// In math mode whitespace is skipped. In text mode a run of whitespace is one
/// [`TokenKind::Space`] token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    mode: Mode,
    pos: usize,
}
impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            input,
            mode: Mode::Math,
            pos: 0,
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current byte offset into the input
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Lex a single token
    pub fn lex(&mut self) -> Result<Token<'a>, LexError> {
        loop {
            if self.pos >= self.input.len() {
                debug_assert_eq!(self.pos, self.input.len());
                return Ok(Token::eof(Some(self.pos..self.pos)));
            }

            let initial_pos = self.pos;
            let input = &self.input[self.pos..];
            let capture = match TOKEN_REGEX.captures(input) {
                Some(capture) => capture,
                None => return Err(self.lex_failure(initial_pos, input)),
            };

            if let Some(space) = capture.get(1) {
                self.pos += space.end();
                if self.mode == Mode::Text {
                    return Ok(Token::new_with_text(
                        Cow::Borrowed(" "),
                        initial_pos..self.pos,
                    ));
                }
            } else if let Some(command) = capture.get(2) {
                // The whole match includes the whitespace that ended the name
                self.pos += capture.get(0).map_or(command.end(), |m| m.end());
                let text = &self.input[initial_pos..initial_pos + command.end()];
                return Ok(Token::new(text, initial_pos..initial_pos + command.end()));
            } else if let Some(escape) = capture.get(3) {
                self.pos += escape.end();
                let text = escape.as_str();
                // `\` followed by any whitespace is a control space
                let text = if text[1..].chars().all(char::is_whitespace) {
                    Cow::Borrowed("\\ ")
                } else {
                    Cow::Borrowed(&self.input[initial_pos..self.pos])
                };
                return Ok(Token::new_with_text(text, initial_pos..self.pos));
            } else if let Some(comment) = capture.get(4) {
                self.pos += comment.end();
            } else if let Some(ch) = capture.get(5) {
                self.pos += ch.end();
                return Ok(Token::new(
                    &self.input[initial_pos..self.pos],
                    initial_pos..self.pos,
                ));
            } else {
                return Err(self.lex_failure(initial_pos, input));
            }
        }
    }

    fn lex_failure(&self, pos: usize, input: &str) -> LexError {
        let mut chars = input.chars();
        match chars.next() {
            Some('\\') if chars.next().is_none() => LexError::UnterminatedEscape { position: pos },
            Some(ch) => LexError::UnexpectedCharacter { ch, position: pos },
            None => LexError::UnterminatedEscape { position: pos },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub content: Cow<'a, str>,
    pub kind: TokenKind,
    pub loc: Option<SourceLocation>,
}
impl<'a> Token<'a> {
    pub fn new(content: &'a str, loc: impl Into<SourceLocation>) -> Token<'a> {
        Token::new_with_text(Cow::Borrowed(content), loc)
    }

    fn new_with_text(content: Cow<'a, str>, loc: impl Into<SourceLocation>) -> Token<'a> {
        Token {
            kind: TokenKind::classify(&content),
            content,
            loc: Some(loc.into()),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn eof(loc: Option<impl Into<SourceLocation>>) -> Token<'static> {
        Token {
            content: Cow::Borrowed("EOF"),
            kind: TokenKind::Eof,
            loc: loc.map(Into::into),
        }
    }

    /// Byte offset of the start of the token, or 0 if it has no location
    pub fn position(&self) -> usize {
        self.loc.as_ref().map_or(0, SourceLocation::start)
    }
}
