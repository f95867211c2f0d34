use std::{borrow::Cow, collections::HashMap, sync::Arc};

use once_cell::sync::Lazy;

use crate::{
    functions::{FunctionPropSpec, FunctionSpec, Functions},
    parse_node::{NodeInfo, ParseNode, ParseNodeType, RawNode},
    parser::ParseResult,
};

pub mod array;

/// What an environment handler knows about the `\begin{...}` it was called for
pub struct EnvContext<'a> {
    pub name: &'a str,
    /// The environment's own arguments, like the column specification of `array`
    pub args: &'a [RawNode],
    /// Position of the `\begin`
    pub position: usize,
    pub info: NodeInfo,
}

/// Turns the parsed rows of an environment body into a node
pub type EnvHandler =
    Box<dyn Fn(EnvContext, Vec<Vec<ParseNode>>) -> ParseResult<ParseNode> + Send + Sync>;

pub struct EnvironmentSpec {
    pub prop: FunctionPropSpec,
    pub handler: EnvHandler,
}

pub type Environments = HashMap<&'static str, Arc<EnvironmentSpec>>;

pub(crate) static ENVIRONMENTS: Lazy<Environments> = Lazy::new(|| {
    let mut envs = HashMap::new();

    array::add_environments(&mut envs);

    envs
});

/// `\begin` starts every environment. The parser reads the name and looks it up in
/// [`ENVIRONMENTS`]. `\end` is never looked up, since it always ends an expression.
pub fn add_functions(fns: &mut Functions) {
    fns.insert(
        Cow::Borrowed("\\begin"),
        Arc::new(FunctionSpec {
            prop: FunctionPropSpec::new_num_args(ParseNodeType::Environment, 1),
            builder: None,
        }),
    );
}
