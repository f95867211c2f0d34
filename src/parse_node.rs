use crate::{style::StyleId, util::SourceLocation};

/// Whether source is being read as math or as text (inside `\text{...}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Math,
    Text,
}

/// The syntax tree. A closed set of node kinds, each matched exhaustively by the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode {
    /// A single symbol from the symbol table
    Symbol(SymbolNode),
    /// `{...}`, or the implicit group around the whole formula
    OrdGroup(OrdGroupNode),
    /// A command from the function table, along with its arguments
    Command(CommandNode),
    SupSub(SupSubNode),
    Environment(EnvironmentNode),
    /// A style directive and the rest of the group it applies to
    Styling(StylingNode),
    /// A size directive and the rest of the group it applies to
    Sizing(SizingNode),
    /// `\left ... \right`
    LeftRight(LeftRightNode),
    /// An uninterpreted string argument, such as a color
    Raw(RawNode),
}
impl ParseNode {
    pub fn info(&self) -> &NodeInfo {
        match self {
            ParseNode::Symbol(a) => &a.info,
            ParseNode::OrdGroup(a) => &a.info,
            ParseNode::Command(a) => &a.info,
            ParseNode::SupSub(a) => &a.info,
            ParseNode::Environment(a) => &a.info,
            ParseNode::Styling(a) => &a.info,
            ParseNode::Sizing(a) => &a.info,
            ParseNode::LeftRight(a) => &a.info,
            ParseNode::Raw(a) => &a.info,
        }
    }

    pub fn loc(&self) -> Option<SourceLocation> {
        self.info().loc.clone()
    }

    pub fn mode(&self) -> Mode {
        self.info().mode
    }

    /// The source text of a symbol
    pub fn text(&self) -> Option<&str> {
        match self {
            ParseNode::Symbol(a) => Some(&a.text),
            ParseNode::Raw(a) => Some(&a.string),
            _ => None,
        }
    }

    pub fn typ(&self) -> ParseNodeType {
        match self {
            ParseNode::Symbol(_) => ParseNodeType::Symbol,
            ParseNode::OrdGroup(_) => ParseNodeType::OrdGroup,
            ParseNode::Command(_) => ParseNodeType::Command,
            ParseNode::SupSub(_) => ParseNodeType::SupSub,
            ParseNode::Environment(_) => ParseNodeType::Environment,
            ParseNode::Styling(_) => ParseNodeType::Styling,
            ParseNode::Sizing(_) => ParseNodeType::Sizing,
            ParseNode::LeftRight(_) => ParseNodeType::LeftRight,
            ParseNode::Raw(_) => ParseNodeType::Raw,
        }
    }

    /// The node, with any wrapping single-element groups removed
    pub fn unwrap_group(&self) -> &ParseNode {
        match self {
            ParseNode::OrdGroup(group) if group.body.len() == 1 => group.body[0].unwrap_group(),
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseNodeType {
    Symbol,
    OrdGroup,
    Command,
    SupSub,
    Environment,
    Styling,
    Sizing,
    LeftRight,
    Raw,
}

pub trait EqNoLoc {
    /// Returns true if the two nodes are equal, ignoring their locations.
    fn eq_no_loc(&self, o: &Self) -> bool;
}
impl<T: EqNoLoc> EqNoLoc for Vec<T> {
    fn eq_no_loc(&self, o: &Self) -> bool {
        self.len() == o.len() && self.iter().zip(o.iter()).all(|(a, b)| a.eq_no_loc(b))
    }
}
impl<T: EqNoLoc> EqNoLoc for Option<T> {
    fn eq_no_loc(&self, o: &Self) -> bool {
        match (self, o) {
            (Some(a), Some(b)) => a.eq_no_loc(b),
            (None, None) => true,
            _ => false,
        }
    }
}
impl<T: EqNoLoc> EqNoLoc for Box<T> {
    fn eq_no_loc(&self, o: &Self) -> bool {
        self.as_ref().eq_no_loc(o.as_ref())
    }
}
impl EqNoLoc for ParseNode {
    fn eq_no_loc(&self, o: &Self) -> bool {
        match (self, o) {
            (ParseNode::Symbol(a), ParseNode::Symbol(b)) => a.eq_no_loc(b),
            (ParseNode::OrdGroup(a), ParseNode::OrdGroup(b)) => a.eq_no_loc(b),
            (ParseNode::Command(a), ParseNode::Command(b)) => a.eq_no_loc(b),
            (ParseNode::SupSub(a), ParseNode::SupSub(b)) => a.eq_no_loc(b),
            (ParseNode::Environment(a), ParseNode::Environment(b)) => a.eq_no_loc(b),
            (ParseNode::Styling(a), ParseNode::Styling(b)) => a.eq_no_loc(b),
            (ParseNode::Sizing(a), ParseNode::Sizing(b)) => a.eq_no_loc(b),
            (ParseNode::LeftRight(a), ParseNode::LeftRight(b)) => a.eq_no_loc(b),
            (ParseNode::Raw(a), ParseNode::Raw(b)) => a.eq_no_loc(b),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
}
impl NodeInfo {
    pub fn new(mode: Mode, loc: Option<SourceLocation>) -> NodeInfo {
        NodeInfo { mode, loc }
    }
}
impl EqNoLoc for NodeInfo {
    fn eq_no_loc(&self, o: &Self) -> bool {
        self.mode == o.mode
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolNode {
    /// The source text, like `x` or `\alpha`
    pub text: String,
    pub info: NodeInfo,
}
impl EqNoLoc for SymbolNode {
    fn eq_no_loc(&self, o: &SymbolNode) -> bool {
        self.text == o.text && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdGroupNode {
    pub body: Vec<ParseNode>,
    pub info: NodeInfo,
}
impl EqNoLoc for OrdGroupNode {
    fn eq_no_loc(&self, o: &OrdGroupNode) -> bool {
        self.body.eq_no_loc(&o.body) && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandNode {
    /// Name including the backslash
    pub name: String,
    /// Required arguments in source order. Always as many as the command declares.
    pub args: Vec<ParseNode>,
    /// Optional `[...]` arguments in source order, `None` where one was not given
    pub optional_args: Vec<Option<ParseNode>>,
    pub info: NodeInfo,
}
impl EqNoLoc for CommandNode {
    fn eq_no_loc(&self, o: &CommandNode) -> bool {
        self.name == o.name
            && self.args.eq_no_loc(&o.args)
            && self.optional_args.eq_no_loc(&o.optional_args)
            && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupSubNode {
    /// Missing for a script with nothing before it, like `^2` at the start of a group
    pub base: Option<Box<ParseNode>>,
    pub sup: Option<Box<ParseNode>>,
    pub sub: Option<Box<ParseNode>>,
    pub info: NodeInfo,
}
impl EqNoLoc for SupSubNode {
    fn eq_no_loc(&self, o: &SupSubNode) -> bool {
        self.base.eq_no_loc(&o.base)
            && self.sup.eq_no_loc(&o.sup)
            && self.sub.eq_no_loc(&o.sub)
            && self.info.eq_no_loc(&o.info)
    }
}

/// Horizontal alignment of an environment column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentNode {
    pub name: String,
    /// Rows of cells. Every cell is an [`OrdGroupNode`].
    pub rows: Vec<Vec<ParseNode>>,
    /// Explicit column alignments, for environments that take them. Columns without one are
    /// centered.
    pub cols: Option<Vec<ColumnAlign>>,
    /// Multiplier on the distance between baselines of consecutive rows
    pub array_stretch: f64,
    /// Whether there is column separation space before the first and after the last column
    pub outer_padding: bool,
    pub info: NodeInfo,
}
impl EqNoLoc for EnvironmentNode {
    fn eq_no_loc(&self, o: &EnvironmentNode) -> bool {
        self.name == o.name
            && self.rows.eq_no_loc(&o.rows)
            && self.cols == o.cols
            && self.array_stretch == o.array_stretch
            && self.outer_padding == o.outer_padding
            && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StylingNode {
    pub style: StyleId,
    pub body: Vec<ParseNode>,
    pub info: NodeInfo,
}
impl EqNoLoc for StylingNode {
    fn eq_no_loc(&self, o: &StylingNode) -> bool {
        self.style == o.style && self.body.eq_no_loc(&o.body) && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizingNode {
    /// Size index, 1 (`\tiny`) through 11 (`\Huge`)
    pub size: usize,
    pub body: Vec<ParseNode>,
    pub info: NodeInfo,
}
impl EqNoLoc for SizingNode {
    fn eq_no_loc(&self, o: &SizingNode) -> bool {
        self.size == o.size && self.body.eq_no_loc(&o.body) && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeftRightNode {
    /// Delimiter source text, `.` for none
    pub left: String,
    pub right: String,
    pub body: Vec<ParseNode>,
    pub info: NodeInfo,
}
impl EqNoLoc for LeftRightNode {
    fn eq_no_loc(&self, o: &LeftRightNode) -> bool {
        self.left == o.left
            && self.right == o.right
            && self.body.eq_no_loc(&o.body)
            && self.info.eq_no_loc(&o.info)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    pub string: String,
    pub info: NodeInfo,
}
impl EqNoLoc for RawNode {
    fn eq_no_loc(&self, o: &RawNode) -> bool {
        self.string == o.string && self.info.eq_no_loc(&o.info)
    }
}
