use std::{borrow::Cow, collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;

use crate::{
    environments,
    error::RenderError,
    layout::{builder::LayoutBuilder, LayoutBox},
    parse_node::{CommandNode, ParseNode, ParseNodeType},
    Options,
};

pub mod color;
pub mod delimsizing;
pub mod genfrac;
pub mod lap;
pub mod op;
pub mod overline;
pub mod sizing;
pub mod sqrt;
pub mod styling;
pub mod text;
pub mod underline;

pub(crate) static FUNCTIONS: Lazy<Functions> = Lazy::new(|| {
    let mut fns = Functions {
        fns: HashMap::new(),
    };

    color::add_functions(&mut fns);
    delimsizing::add_functions(&mut fns);
    environments::add_functions(&mut fns);
    genfrac::add_functions(&mut fns);
    lap::add_functions(&mut fns);
    op::add_functions(&mut fns);
    overline::add_functions(&mut fns);
    sizing::add_functions(&mut fns);
    sqrt::add_functions(&mut fns);
    styling::add_functions(&mut fns);
    text::add_functions(&mut fns);
    underline::add_functions(&mut fns);

    fns
});

pub struct Functions {
    fns: HashMap<Cow<'static, str>, Arc<FunctionSpec>>,
}
impl Functions {
    pub fn get(&self, name: &str) -> Option<&Arc<FunctionSpec>> {
        self.fns.get(name)
    }

    pub fn insert(&mut self, name: Cow<'static, str>, spec: Arc<FunctionSpec>) {
        self.fns.insert(name, spec);
    }

    pub fn insert_for_all_str<I: Iterator<Item = &'static str>>(
        &mut self,
        names: I,
        spec: Arc<FunctionSpec>,
    ) {
        for name in names {
            self.insert(Cow::Borrowed(name), spec.clone())
        }
    }
}

/// How a command argument is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A braced group or a single token, parsed in math mode
    Math,
    /// A braced group, parsed in the surrounding mode
    Group,
    /// A braced group, parsed in text mode
    Text,
    /// A braced color name or `#rgb`/`#rrggbb` value
    Color,
    /// A single delimiter token
    Delimiter,
    /// A braced string of letters, such as an environment name
    Raw,
}

#[derive(Debug, Clone)]
pub struct FunctionPropSpec {
    pub typ: ParseNodeType,
    /// Number of arguments the function takes
    pub num_args: usize,
    /// The type of each required argument. Arguments past the end are [`ArgType::Math`].
    pub arg_types: Cow<'static, [ArgType]>,
    /// Whether it can be used, without braces, as the argument of another command or as a
    /// super/subscript
    pub allowed_in_argument: bool,
    /// Whether or not the function is allowed inside text mode
    pub allowed_in_text: bool,
    /// Whether or not the function is allowed inside math mode
    pub allowed_in_math: bool,
    /// The number of optional `[...]` arguments the function should parse
    pub num_optional_args: usize,
}
impl FunctionPropSpec {
    /// Create function prop spec with only num args set
    pub const fn new_num_args(typ: ParseNodeType, num_args: usize) -> FunctionPropSpec {
        Self::new_num_opt_args(typ, num_args, 0)
    }

    /// Create function prop spec with num args and opt args set
    pub const fn new_num_opt_args(
        typ: ParseNodeType,
        num_args: usize,
        opt_args: usize,
    ) -> FunctionPropSpec {
        FunctionPropSpec {
            typ,
            num_args,
            arg_types: Cow::Borrowed(&[]),
            allowed_in_argument: false,
            allowed_in_text: false,
            allowed_in_math: true,
            num_optional_args: opt_args,
        }
    }

    pub(crate) fn with_allowed_in_text(mut self, allowed_in_text: bool) -> Self {
        self.allowed_in_text = allowed_in_text;
        self
    }

    pub(crate) fn with_allowed_in_argument(mut self, allowed_in_argument: bool) -> Self {
        self.allowed_in_argument = allowed_in_argument;
        self
    }

    pub(crate) fn with_arg_types(mut self, arg_types: impl Into<Cow<'static, [ArgType]>>) -> Self {
        self.arg_types = arg_types.into();
        self
    }

    pub fn arg_type(&self, index: usize) -> ArgType {
        self.arg_types.get(index).copied().unwrap_or(ArgType::Math)
    }
}

/// Lays out a parsed command
pub type BuilderFn = Box<
    dyn Fn(&mut LayoutBuilder, &CommandNode, &Options) -> Result<LayoutBox, RenderError>
        + Send
        + Sync,
>;

pub struct FunctionSpec {
    pub prop: FunctionPropSpec,
    /// Only [`ParseNodeType::Command`] functions have a builder. The others produce their own
    /// node kinds, which the layout builder handles directly.
    pub builder: Option<BuilderFn>,
}

/// If the argument is an ord group, its body. Otherwise just the argument.
pub(crate) fn ord_argument(arg: &ParseNode) -> &[ParseNode] {
    if let ParseNode::OrdGroup(ord_group) = arg {
        &ord_group.body
    } else {
        std::slice::from_ref(arg)
    }
}
