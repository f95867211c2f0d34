use std::sync::Arc;

use thiserror::Error;

use crate::{
    environments::{EnvContext, ENVIRONMENTS},
    error::{RecursionLimitError, RenderError},
    functions::{
        color::parse_color, delimsizing::is_delimiter, sizing::size_of, styling::style_of,
        ArgType, FunctionSpec, FUNCTIONS,
    },
    lexer::{Lexer, Token, TokenKind},
    parse_node::{
        CommandNode, LeftRightNode, Mode, NodeInfo, OrdGroupNode, ParseNode, ParseNodeType,
        RawNode, SizingNode, StylingNode, SupSubNode, SymbolNode,
    },
    symbols::SYMBOLS,
    util::SourceLocation,
};

pub type ParseResult<T> = Result<T, RenderError>;

/// Ways a token stream can fail to form a valid syntax tree.
/// Every variant carries the byte offset where the problem was noticed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected:?} but found {found:?} at position {position}")]
    Expected {
        expected: String,
        found: String,
        position: usize,
    },
    #[error("unmatched '{{' opened at position {position}")]
    UnmatchedOpenBrace { position: usize },
    #[error("unmatched '}}' at position {position}")]
    UnmatchedCloseBrace { position: usize },
    #[error("double superscript at position {position}")]
    DoubleSuperscript { position: usize },
    #[error("double subscript at position {position}")]
    DoubleSubscript { position: usize },
    #[error("expected a group after {context} at position {position}")]
    ExpectedGroup { context: String, position: usize },
    #[error("missing argument for {command} at position {position}")]
    MissingArgument { command: String, position: usize },
    #[error("{command} cannot be used as an argument without braces (position {position})")]
    FunctionNoArguments { command: String, position: usize },
    #[error("{command} cannot be used in text mode (position {position})")]
    FunctionUnusableTextMode { command: String, position: usize },
    #[error("{command} cannot be used in math mode (position {position})")]
    FunctionUnusableMathMode { command: String, position: usize },
    #[error("undefined control sequence {name} at position {position}")]
    UndefinedControlSequence { name: String, position: usize },
    #[error("unknown symbol {text:?} at position {position}")]
    UnknownSymbol { text: String, position: usize },
    #[error("invalid color {color:?} at position {position}")]
    InvalidColor { color: String, position: usize },
    #[error("invalid delimiter {delim:?} at position {position}")]
    InvalidDelimiter { delim: String, position: usize },
    #[error("unknown environment {name:?} at position {position}")]
    UnknownEnvironment { name: String, position: usize },
    #[error("\\begin{{{begin}}} ended by \\end{{{end}}} at position {position}")]
    MismatchedEnvironment {
        begin: String,
        end: String,
        position: usize,
    },
    #[error("environment {name:?} opened at position {position} is never ended")]
    UnterminatedEnvironment { name: String, position: usize },
    #[error("too many columns in {env:?}, at most {limit} allowed (position {position})")]
    TooManyColumns {
        env: String,
        limit: usize,
        position: usize,
    },
    #[error("invalid column alignment {spec:?} at position {position}")]
    InvalidColumnAlignment { spec: String, position: usize },
    #[error("\\left at position {position} has no matching \\right")]
    MissingRight { position: usize },
    #[error("\\right without a matching \\left at position {position}")]
    UnexpectedRight { position: usize },
    #[error("alignment or row separator outside of an environment at position {position}")]
    MisplacedAlignment { position: usize },
}
impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::Expected { position, .. }
            | ParseError::UnmatchedOpenBrace { position }
            | ParseError::UnmatchedCloseBrace { position }
            | ParseError::DoubleSuperscript { position }
            | ParseError::DoubleSubscript { position }
            | ParseError::ExpectedGroup { position, .. }
            | ParseError::MissingArgument { position, .. }
            | ParseError::FunctionNoArguments { position, .. }
            | ParseError::FunctionUnusableTextMode { position, .. }
            | ParseError::FunctionUnusableMathMode { position, .. }
            | ParseError::UndefinedControlSequence { position, .. }
            | ParseError::UnknownSymbol { position, .. }
            | ParseError::InvalidColor { position, .. }
            | ParseError::InvalidDelimiter { position, .. }
            | ParseError::UnknownEnvironment { position, .. }
            | ParseError::MismatchedEnvironment { position, .. }
            | ParseError::UnterminatedEnvironment { position, .. }
            | ParseError::TooManyColumns { position, .. }
            | ParseError::InvalidColumnAlignment { position, .. }
            | ParseError::MissingRight { position }
            | ParseError::UnexpectedRight { position }
            | ParseError::MisplacedAlignment { position } => *position,
        }
    }
}

/// Configuration options for parsing and layout.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Lay out the formula in display style rather than text style
    pub display_mode: bool,
    /// Maximum nesting of groups and arguments before giving up with a
    /// [`RecursionLimitError`]
    pub max_nesting_depth: usize,
}
impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            display_mode: false,
            max_nesting_depth: 128,
        }
    }
}

/// The token that ends the expression currently being parsed, beyond the ones that always end
/// an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakToken {
    /// `]`, ending an optional argument
    RightBracket,
}
impl BreakToken {
    fn matches(self, text: &str) -> bool {
        match self {
            BreakToken::RightBracket => text == "]",
        }
    }
}

/// Recursive descent parser over a [`Lexer`], with a single token of lookahead.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    pub(crate) conf: ParserConfig,
    lexer: Lexer<'a>,
    /// Lookahead token
    next_token: Option<Token<'a>>,
    /// Current nesting of groups
    depth: usize,
}
impl<'a> Parser<'a> {
    pub fn new(input: &'a str, conf: ParserConfig) -> Parser<'a> {
        Parser {
            conf,
            lexer: Lexer::new(input),
            next_token: None,
            depth: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.lexer.mode()
    }

    /// Error unless the lookahead token is `text`, consuming it if it is
    fn expect(&mut self, text: &str) -> ParseResult<()> {
        let token = self.fetch()?;
        if token.content != text {
            return Err(ParseError::Expected {
                expected: text.to_string(),
                found: token.content.to_string(),
                position: token.position(),
            }
            .into());
        }

        self.consume();
        Ok(())
    }

    /// Discards the current lookahead token, returning the value it holds
    fn consume(&mut self) -> Option<Token<'a>> {
        self.next_token.take()
    }

    /// Returns the current lookahead token, lexing a new one if the previous lookahead was
    /// consumed
    fn fetch(&mut self) -> ParseResult<&Token<'a>> {
        let token = match self.next_token.take() {
            Some(token) => token,
            None => self.lexer.lex()?,
        };
        Ok(self.next_token.insert(token))
    }

    /// Switch the current mode. Any lookahead token has already been lexed in the old mode, so
    /// this should happen only after fetching a token whose meaning doesn't depend on the mode.
    fn switch_mode(&mut self, mode: Mode) {
        self.lexer.set_mode(mode);
    }

    fn enter_group(&mut self, position: usize) -> ParseResult<()> {
        if self.depth >= self.conf.max_nesting_depth {
            return Err(RecursionLimitError {
                limit: self.conf.max_nesting_depth,
                position: Some(position),
            }
            .into());
        }

        self.depth += 1;
        Ok(())
    }

    fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Main parsing function, which parses an entire input into the implicit top-level group.
    pub fn parse(&mut self) -> ParseResult<ParseNode> {
        let start = self.fetch()?.position();
        let body = self.parse_expression(None)?;

        let token = self.fetch()?;
        let position = token.position();
        match token.kind {
            TokenKind::Eof => {}
            TokenKind::EndGroup => return Err(ParseError::UnmatchedCloseBrace { position }.into()),
            TokenKind::AlignTab | TokenKind::RowSeparator => {
                return Err(ParseError::MisplacedAlignment { position }.into())
            }
            _ if token.content == "\\right" => {
                return Err(ParseError::UnexpectedRight { position }.into())
            }
            _ => {
                return Err(ParseError::Expected {
                    expected: "EOF".to_string(),
                    found: token.content.to_string(),
                    position,
                }
                .into())
            }
        }

        Ok(ParseNode::OrdGroup(OrdGroupNode {
            body,
            info: NodeInfo::new(Mode::Math, Some(SourceLocation(start..position))),
        }))
    }

    /// Parses an "expression", which is a list of atoms.
    /// `break_on`: a token that ends this expression in addition to the tokens which always
    /// end one
    pub(crate) fn parse_expression(
        &mut self,
        break_on: Option<BreakToken>,
    ) -> ParseResult<Vec<ParseNode>> {
        let mut body = Vec::new();

        loop {
            let token = self.fetch()?;

            if let Some(break_on) = break_on {
                if break_on.matches(&token.content) {
                    break;
                }
            }

            if is_end_of_expression(token) {
                break;
            }

            match self.parse_atom(break_on)? {
                Some(atom) => body.push(atom),
                None => break,
            }
        }

        Ok(body)
    }

    /// Handle a subscript or superscript
    fn handle_sup_subscript(&mut self, name: &str) -> ParseResult<ParseNode> {
        let symbol_token = self.consume();
        let position = symbol_token.map_or(0, |t| t.position());

        self.parse_group(Some(name), None)?.ok_or_else(|| {
            ParseError::ExpectedGroup {
                context: name.to_string(),
                position,
            }
            .into()
        })
    }

    fn parse_atom(&mut self, break_on: Option<BreakToken>) -> ParseResult<Option<ParseNode>> {
        let base = self.parse_group(None, break_on)?;

        // There are no superscripts or subscripts in text mode
        if self.mode() == Mode::Text {
            return Ok(base);
        }

        let mut superscript = None;
        let mut subscript = None;
        loop {
            let lex = self.fetch()?;
            let position = lex.position();

            if lex.kind == TokenKind::Superscript {
                if superscript.is_some() {
                    return Err(ParseError::DoubleSuperscript { position }.into());
                }

                superscript = Some(self.handle_sup_subscript("superscript")?);
            } else if lex.kind == TokenKind::Subscript {
                if subscript.is_some() {
                    return Err(ParseError::DoubleSubscript { position }.into());
                }

                subscript = Some(self.handle_sup_subscript("subscript")?);
            } else if lex.content == "'" {
                // Prime
                if superscript.is_some() {
                    return Err(ParseError::DoubleSuperscript { position }.into());
                }

                let prime = ParseNode::Symbol(SymbolNode {
                    text: "\\prime".to_string(),
                    info: NodeInfo::new(Mode::Math, lex.loc.clone()),
                });

                self.consume();

                let mut prime_count = 1;
                while self.fetch()?.content == "'" {
                    prime_count += 1;
                    self.consume();
                }

                // If there's a superscript following the primes, then we add that on
                let sup = if self.fetch()?.kind == TokenKind::Superscript {
                    Some(self.handle_sup_subscript("superscript")?)
                } else {
                    None
                };

                let primes = std::iter::repeat(prime)
                    .take(prime_count)
                    .chain(sup)
                    .collect::<Vec<_>>();

                superscript = Some(ParseNode::OrdGroup(OrdGroupNode {
                    body: primes,
                    info: NodeInfo::new(Mode::Math, Some(SourceLocation(position..position + 1))),
                }));
            } else {
                // If it wasn't ^, _, or ', stop parsing super/subscripts
                break;
            }
        }

        Ok(if superscript.is_some() || subscript.is_some() {
            let loc = SourceLocation::combine(
                base.as_ref().and_then(ParseNode::loc),
                superscript
                    .as_ref()
                    .into_iter()
                    .chain(subscript.as_ref())
                    .filter_map(ParseNode::loc)
                    .max_by_key(|loc| loc.0.end),
            );
            Some(ParseNode::SupSub(SupSubNode {
                base: base.map(Box::new),
                sup: superscript.map(Box::new),
                sub: subscript.map(Box::new),
                info: NodeInfo::new(Mode::Math, loc),
            }))
        } else {
            base
        })
    }

    /// Parses an ordinary group, which is either a single nucleus (like "x"), a command with its
    /// arguments, or an expression in braces (like "{x+y}").
    ///
    /// `arg_name` is set when the group is the argument of a command or a script.
    /// Returns `None` if the lookahead token cannot start a group.
    fn parse_group(
        &mut self,
        arg_name: Option<&str>,
        break_on: Option<BreakToken>,
    ) -> ParseResult<Option<ParseNode>> {
        let position = self.fetch()?.position();
        self.enter_group(position)?;
        let res = self.parse_group_inner(arg_name, break_on);
        self.leave_group();
        res
    }

    fn parse_group_inner(
        &mut self,
        arg_name: Option<&str>,
        break_on: Option<BreakToken>,
    ) -> ParseResult<Option<ParseNode>> {
        let first_token = self.fetch()?.clone();

        match first_token.kind {
            TokenKind::BeginGroup => {
                self.consume();
                let body = self.parse_expression(None)?;
                let end = self.close_group(&first_token)?;

                Ok(Some(ParseNode::OrdGroup(OrdGroupNode {
                    body,
                    info: NodeInfo::new(
                        self.mode(),
                        SourceLocation::combine(first_token.loc, Some(end)),
                    ),
                })))
            }
            TokenKind::Command | TokenKind::Char | TokenKind::Space => {
                if is_end_of_expression(&first_token)
                    || break_on.is_some_and(|b| b.matches(&first_token.content))
                {
                    return Ok(None);
                }

                // A prime with nothing before it is a script on an empty base
                if self.mode() == Mode::Math && first_token.content == "'" {
                    return Ok(None);
                }

                if let Some(func) = FUNCTIONS.get(&first_token.content) {
                    self.parse_function(&first_token, func.clone(), arg_name, break_on)
                        .map(Some)
                } else {
                    self.parse_symbol().map(Some)
                }
            }
            _ => Ok(None),
        }
    }

    /// Expects the `}` which ends the group started by `open`, returning its location
    fn close_group(&mut self, open: &Token<'a>) -> ParseResult<SourceLocation> {
        let token = self.fetch()?;
        let position = token.position();
        let loc = token.loc.clone().unwrap_or(SourceLocation(position..position));
        match token.kind {
            TokenKind::EndGroup => {
                self.consume();
                Ok(loc)
            }
            TokenKind::Eof => Err(ParseError::UnmatchedOpenBrace {
                position: open.position(),
            }
            .into()),
            TokenKind::AlignTab | TokenKind::RowSeparator => {
                Err(ParseError::MisplacedAlignment { position }.into())
            }
            _ if token.content == "\\right" => {
                Err(ParseError::UnexpectedRight { position }.into())
            }
            _ => Err(ParseError::Expected {
                expected: "}".to_string(),
                found: token.content.to_string(),
                position,
            }
            .into()),
        }
    }

    fn parse_function(
        &mut self,
        token: &Token<'a>,
        func: Arc<FunctionSpec>,
        arg_name: Option<&str>,
        break_on: Option<BreakToken>,
    ) -> ParseResult<ParseNode> {
        let name = token.content.to_string();
        let position = token.position();

        if arg_name.is_some() && !func.prop.allowed_in_argument {
            return Err(ParseError::FunctionNoArguments {
                command: name,
                position,
            }
            .into());
        } else if self.mode() == Mode::Text && !func.prop.allowed_in_text {
            return Err(ParseError::FunctionUnusableTextMode {
                command: name,
                position,
            }
            .into());
        } else if self.mode() == Mode::Math && !func.prop.allowed_in_math {
            return Err(ParseError::FunctionUnusableMathMode {
                command: name,
                position,
            }
            .into());
        }

        self.consume();
        let info = NodeInfo::new(self.mode(), token.loc.clone());

        match func.prop.typ {
            ParseNodeType::Styling => {
                // A style directive applies to the rest of the enclosing group
                let body = self.parse_expression(break_on)?;
                let style = style_of(&name).ok_or_else(|| undefined(&name, position))?;
                Ok(ParseNode::Styling(StylingNode { style, body, info }))
            }
            ParseNodeType::Sizing => {
                let body = self.parse_expression(break_on)?;
                let size = size_of(&name).ok_or_else(|| undefined(&name, position))?;
                Ok(ParseNode::Sizing(SizingNode { size, body, info }))
            }
            ParseNodeType::LeftRight => self.parse_left_right(position, info),
            ParseNodeType::Environment => self.parse_environment(position, info),
            _ => {
                let (args, optional_args) = self.parse_arguments(&name, position, &func)?;
                Ok(ParseNode::Command(CommandNode {
                    name,
                    args,
                    optional_args,
                    info,
                }))
            }
        }
    }

    fn parse_arguments(
        &mut self,
        func_name: &str,
        position: usize,
        func: &FunctionSpec,
    ) -> ParseResult<(Vec<ParseNode>, Vec<Option<ParseNode>>)> {
        let mut optional_args = Vec::with_capacity(func.prop.num_optional_args);
        for _ in 0..func.prop.num_optional_args {
            optional_args.push(self.parse_optional_argument()?);
        }

        let mut args = Vec::with_capacity(func.prop.num_args);
        for i in 0..func.prop.num_args {
            let arg = self.parse_group_of_arg_type(func_name, func.prop.arg_type(i))?;
            let arg = arg.ok_or_else(|| ParseError::MissingArgument {
                command: func_name.to_string(),
                position,
            })?;
            args.push(arg);
        }

        Ok((args, optional_args))
    }

    /// Parses `[...]` if it is next
    fn parse_optional_argument(&mut self) -> ParseResult<Option<ParseNode>> {
        let open = self.fetch()?.clone();
        if open.content != "[" {
            return Ok(None);
        }

        self.consume();
        self.enter_group(open.position())?;
        let body = self.parse_expression(Some(BreakToken::RightBracket));
        self.leave_group();
        let body = body?;

        let end = self.fetch()?.loc.clone();
        self.expect("]")?;

        Ok(Some(ParseNode::OrdGroup(OrdGroupNode {
            body,
            info: NodeInfo::new(self.mode(), SourceLocation::combine(open.loc, end)),
        })))
    }

    fn parse_group_of_arg_type(
        &mut self,
        name: &str,
        typ: ArgType,
    ) -> ParseResult<Option<ParseNode>> {
        if self.fetch()?.is_eof() {
            return Ok(None);
        }

        match typ {
            ArgType::Math => self.parse_group(Some(name), None),
            ArgType::Group => {
                let mode = self.mode();
                self.parse_braced_group(name, mode).map(Some)
            }
            ArgType::Text => self.parse_braced_group(name, Mode::Text).map(Some),
            ArgType::Color => {
                let raw = self.parse_string_group(name)?;
                let position = raw.info.loc.as_ref().map_or(0, SourceLocation::start);
                if parse_color(&raw.string).is_none() {
                    return Err(ParseError::InvalidColor {
                        color: raw.string,
                        position,
                    }
                    .into());
                }
                Ok(Some(ParseNode::Raw(raw)))
            }
            ArgType::Delimiter => self.parse_delimiter().map(|delim| {
                Some(ParseNode::Symbol(SymbolNode {
                    text: delim.content.into_owned(),
                    info: NodeInfo::new(self.mode(), delim.loc),
                }))
            }),
            ArgType::Raw => self.parse_string_group(name).map(ParseNode::Raw).map(Some),
        }
    }

    /// Parses a group which must be surrounded by braces, with its contents in `mode`
    fn parse_braced_group(&mut self, name: &str, mode: Mode) -> ParseResult<ParseNode> {
        let open = self.fetch()?.clone();
        if open.kind != TokenKind::BeginGroup {
            return Err(ParseError::ExpectedGroup {
                context: name.to_string(),
                position: open.position(),
            }
            .into());
        }

        let outer_mode = self.mode();
        // The `{` has already been lexed, so the contents are lexed in the new mode
        self.switch_mode(mode);
        self.consume();

        self.enter_group(open.position())?;
        let body = self.parse_expression(None);
        self.leave_group();
        let body = body?;

        // `}` means the same in both modes. Switch back after it so that whatever follows it is
        // lexed in the outer mode.
        let end = self.close_group(&open);
        self.switch_mode(outer_mode);
        let end = end?;

        Ok(ParseNode::OrdGroup(OrdGroupNode {
            body,
            info: NodeInfo::new(mode, SourceLocation::combine(open.loc, Some(end))),
        }))
    }

    /// Parses a group, returning the string formed by the brace-enclosed tokens
    fn parse_string_group(&mut self, name: &str) -> ParseResult<RawNode> {
        let open = self.fetch()?.clone();
        if open.kind != TokenKind::BeginGroup {
            return Err(ParseError::ExpectedGroup {
                context: name.to_string(),
                position: open.position(),
            }
            .into());
        }
        self.consume();

        let mut text = String::new();
        loop {
            let token = self.fetch()?;
            match token.kind {
                TokenKind::EndGroup => break,
                TokenKind::Eof => {
                    return Err(ParseError::UnmatchedOpenBrace {
                        position: open.position(),
                    }
                    .into())
                }
                _ => {
                    text += &token.content;
                    self.consume();
                }
            }
        }

        let end = self.close_group(&open)?;

        Ok(RawNode {
            string: text,
            info: NodeInfo::new(Mode::Text, SourceLocation::combine(open.loc, Some(end))),
        })
    }

    /// Parses a single delimiter token, like `(` or `\langle`, or `.` for no delimiter
    fn parse_delimiter(&mut self) -> ParseResult<Token<'a>> {
        let token = self.fetch()?.clone();
        if !is_delimiter(&token.content) {
            if token.is_eof() {
                return Err(ParseError::Expected {
                    expected: "delimiter".to_string(),
                    found: token.content.to_string(),
                    position: token.position(),
                }
                .into());
            }

            return Err(ParseError::InvalidDelimiter {
                delim: token.content.to_string(),
                position: token.position(),
            }
            .into());
        }

        self.consume();
        Ok(token)
    }

    /// Parses the rest of `\left<delim> ... \right<delim>`
    fn parse_left_right(&mut self, position: usize, info: NodeInfo) -> ParseResult<ParseNode> {
        let left = self.parse_delimiter()?;
        let body = self.parse_expression(None)?;

        let right_token = self.fetch()?;
        if right_token.content != "\\right" {
            return Err(ParseError::MissingRight { position }.into());
        }
        self.consume();
        let right = self.parse_delimiter()?;

        Ok(ParseNode::LeftRight(LeftRightNode {
            left: left.content.into_owned(),
            right: right.content.into_owned(),
            body,
            info: NodeInfo::new(info.mode, SourceLocation::combine(info.loc, right.loc)),
        }))
    }

    /// Parses the rest of `\begin{name} ... \end{name}`
    fn parse_environment(&mut self, position: usize, info: NodeInfo) -> ParseResult<ParseNode> {
        let name_node = self.parse_string_group("\\begin")?;
        let name = name_node.string;

        let env = ENVIRONMENTS.get(name.as_str()).cloned().ok_or_else(|| {
            ParseError::UnknownEnvironment {
                name: name.clone(),
                position,
            }
        })?;

        let mut args = Vec::with_capacity(env.prop.num_args);
        for _ in 0..env.prop.num_args {
            args.push(self.parse_string_group(&name)?);
        }

        let rows = self.parse_rows(&name, position)?;

        // `parse_rows` stops only at `\end`
        self.consume();
        let end_node = self.parse_string_group("\\end")?;
        if end_node.string != name {
            return Err(ParseError::MismatchedEnvironment {
                begin: name,
                end: end_node.string,
                position: end_node.info.loc.map_or(position, |loc| loc.start()),
            }
            .into());
        }

        let context = EnvContext {
            name: &name,
            args: &args,
            position,
            info: NodeInfo::new(info.mode, SourceLocation::combine(info.loc, end_node.info.loc)),
        };

        (env.handler)(context, rows)
    }

    /// Parses the rows of an environment body up to its `\end`. Cells are separated by `&` and
    /// rows by `\\`. A trailing row separator does not start a new row.
    fn parse_rows(&mut self, name: &str, position: usize) -> ParseResult<Vec<Vec<ParseNode>>> {
        let mut rows = Vec::new();
        let mut row = Vec::new();

        let mode = self.mode();
        loop {
            let start = self.fetch()?.loc.clone();
            let cell = self.parse_expression(None)?;
            let token = self.fetch()?;
            let end = token.loc.clone();

            row.push(ParseNode::OrdGroup(OrdGroupNode {
                body: cell,
                info: NodeInfo::new(mode, SourceLocation::combine(start, end)),
            }));

            match token.kind {
                TokenKind::AlignTab => {
                    self.consume();
                }
                TokenKind::RowSeparator => {
                    self.consume();
                    rows.push(std::mem::take(&mut row));
                }
                TokenKind::Eof => {
                    return Err(ParseError::UnterminatedEnvironment {
                        name: name.to_string(),
                        position,
                    }
                    .into())
                }
                _ if token.content == "\\end" => {
                    rows.push(row);
                    break;
                }
                _ => {
                    return Err(ParseError::Expected {
                        expected: "\\end".to_string(),
                        found: token.content.to_string(),
                        position: token.position(),
                    }
                    .into())
                }
            }
        }

        // Drop the empty row after a trailing `\\`
        if rows.len() > 1 {
            if let Some(last) = rows.last() {
                if last.len() == 1 && matches!(&last[0], ParseNode::OrdGroup(g) if g.body.is_empty())
                {
                    rows.pop();
                }
            }
        }

        Ok(rows)
    }

    /// Parses a single symbol token
    fn parse_symbol(&mut self) -> ParseResult<ParseNode> {
        let token = self.fetch()?.clone();
        let text = &token.content;
        let mode = self.mode();

        let known = SYMBOLS.contains_key(mode, text)
            // Text mode passes through characters it has no entry for. Whether they can be laid
            // out is decided by the font metrics.
            || (mode == Mode::Text && token.kind == TokenKind::Char && !text.is_ascii());

        if !known {
            let position = token.position();
            return Err(if token.kind == TokenKind::Command {
                ParseError::UndefinedControlSequence {
                    name: text.to_string(),
                    position,
                }
            } else {
                ParseError::UnknownSymbol {
                    text: text.to_string(),
                    position,
                }
            }
            .into());
        }

        self.consume();

        Ok(ParseNode::Symbol(SymbolNode {
            text: token.content.into_owned(),
            info: NodeInfo::new(mode, token.loc),
        }))
    }
}

fn undefined(name: &str, position: usize) -> ParseError {
    ParseError::UndefinedControlSequence {
        name: name.to_string(),
        position,
    }
}

/// Tokens that always end the current expression
fn is_end_of_expression(token: &Token) -> bool {
    matches!(
        token.kind,
        TokenKind::Eof | TokenKind::EndGroup | TokenKind::AlignTab | TokenKind::RowSeparator
    ) || token.content == "\\right"
        || token.content == "\\end"
}
