//! Turns a syntax tree into a layout tree.

use crate::{
    array::build_array,
    delimiter::build_left_right,
    error::{BuildError, RecursionLimitError, RenderError},
    font_metrics::{get_character_metrics, Font},
    functions::FUNCTIONS,
    parse_node::{CommandNode, Mode, ParseNode, SymbolNode},
    parser::ParserConfig,
    spacing_data::{atom_spacing, explicit_space, ExplicitSpace},
    symbols::{AtomClass, SYMBOLS},
    unit::Em,
    Options,
};

use super::{supsub::build_supsub, Glyph, HList, LayoutBox, Metrics};

pub type BuildResult<T> = Result<T, RenderError>;

/// Where an expression sits, which decides how binary operators at its ends are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Surrounding {
    /// The class of whatever precedes the expression, `None` for the start of a list
    pub before: Option<AtomClass>,
    /// The class of whatever follows the expression, `None` for the end of a list
    pub after: Option<AtomClass>,
}
impl Surrounding {
    /// A list of its own, like a group or a cell
    pub const LIST: Surrounding = Surrounding {
        before: None,
        after: None,
    };
}

/// A built node which has not yet been spaced against its neighbours
struct Item {
    node: LayoutBox,
    class: AtomClass,
    /// Whether the node was built in a script style
    tight: bool,
    /// Width of 1mu in the node's context
    em_per_mu: Em,
}

/// Builds layout boxes, tracking how deeply nested the current node is.
pub struct LayoutBuilder {
    max_depth: usize,
    depth: usize,
}
impl LayoutBuilder {
    pub fn new(conf: &ParserConfig) -> LayoutBuilder {
        LayoutBuilder {
            max_depth: conf.max_nesting_depth,
            depth: 0,
        }
    }

    /// Build the root of a syntax tree
    pub fn build(&mut self, tree: &ParseNode, options: &Options) -> BuildResult<LayoutBox> {
        let body = match tree {
            ParseNode::OrdGroup(group) => &group.body[..],
            _ => std::slice::from_ref(tree),
        };

        let children = self.build_expression(body, options, Surrounding::LIST)?;
        Ok(HList::new(children, None).into())
    }

    fn enter(&mut self, node: &ParseNode) -> BuildResult<()> {
        if self.depth >= self.max_depth {
            return Err(RecursionLimitError {
                limit: self.max_depth,
                position: node.loc().map(|loc| loc.start()),
            }
            .into());
        }

        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Builds a list of nodes into boxes with inter-atom spacing inserted between them.
    /// Style and size directives in the list are spliced in, so that their bodies are spaced
    /// against the nodes around them.
    pub(crate) fn build_expression(
        &mut self,
        nodes: &[ParseNode],
        options: &Options,
        surrounding: Surrounding,
    ) -> BuildResult<Vec<LayoutBox>> {
        let mut items = Vec::with_capacity(nodes.len());
        self.collect_items(nodes, options, &mut items)?;

        reclassify_bins(&mut items, surrounding);

        let mut children = Vec::with_capacity(items.len() * 2 + 1);
        let mut prev_class = surrounding.before;
        // Style of the last atom, which the closing neighbour is spaced in
        let mut last_context = None;
        for mut item in items {
            if item.class != AtomClass::Spacing {
                if let Some(prev) = prev_class {
                    if let Some(space) = atom_spacing(prev, item.class, item.tight) {
                        children.push(LayoutBox::spacer(item.em_per_mu * space.0));
                    }
                }

                prev_class = Some(item.class);
                last_context = Some((item.tight, item.em_per_mu));
                item.node.set_class(item.class);
            }

            children.push(item.node);
        }

        if let (Some(prev), Some(after), Some((tight, em_per_mu))) =
            (prev_class, surrounding.after, last_context)
        {
            if let Some(space) = atom_spacing(prev, after, tight) {
                children.push(LayoutBox::spacer(em_per_mu * space.0));
            }
        }

        Ok(children)
    }

    /// Builds a list of nodes into a single horizontal list
    pub(crate) fn build_hlist(
        &mut self,
        nodes: &[ParseNode],
        options: &Options,
        class: Option<AtomClass>,
    ) -> BuildResult<LayoutBox> {
        let children = self.build_expression(nodes, options, Surrounding::LIST)?;
        Ok(HList::new(children, class).into())
    }

    fn collect_items(
        &mut self,
        nodes: &[ParseNode],
        options: &Options,
        items: &mut Vec<Item>,
    ) -> BuildResult<()> {
        for node in nodes {
            match node {
                ParseNode::Styling(styling) => {
                    self.enter(node)?;
                    let new_options = options.having_style(styling.style);
                    let new_options = new_options.as_ref().unwrap_or(options);
                    let res = self.collect_items(&styling.body, new_options, items);
                    self.leave();
                    res?;
                }
                ParseNode::Sizing(sizing) => {
                    self.enter(node)?;
                    let new_options = options.having_size(sizing.size);
                    let new_options = new_options.as_ref().unwrap_or(options);
                    let res = self.collect_items(&sizing.body, new_options, items);
                    self.leave();
                    res?;
                }
                _ => {
                    let built = self.build_group(node, options)?;
                    let class = built.class().unwrap_or(AtomClass::Ord);
                    items.push(Item {
                        node: built,
                        class,
                        tight: options.style.is_tight(),
                        em_per_mu: options.em_per_mu(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Builds a single node into a single box
    pub(crate) fn build_group(
        &mut self,
        node: &ParseNode,
        options: &Options,
    ) -> BuildResult<LayoutBox> {
        self.enter(node)?;
        let res = self.build_group_inner(node, options);
        self.leave();
        res
    }

    fn build_group_inner(&mut self, node: &ParseNode, options: &Options) -> BuildResult<LayoutBox> {
        match node {
            ParseNode::Symbol(symbol) => build_symbol(symbol, options),
            ParseNode::OrdGroup(group) => {
                self.build_hlist(&group.body, options, Some(AtomClass::Ord))
            }
            ParseNode::Command(command) => self.build_command(command, options),
            ParseNode::SupSub(supsub) => build_supsub(self, supsub, options),
            ParseNode::Environment(env) => build_array(self, env, options),
            ParseNode::Styling(styling) => {
                let new_options = options.having_style(styling.style);
                let new_options = new_options.as_ref().unwrap_or(options);
                self.build_hlist(&styling.body, new_options, Some(AtomClass::Ord))
            }
            ParseNode::Sizing(sizing) => {
                let new_options = options.having_size(sizing.size);
                let new_options = new_options.as_ref().unwrap_or(options);
                self.build_hlist(&sizing.body, new_options, Some(AtomClass::Ord))
            }
            ParseNode::LeftRight(left_right) => build_left_right(self, left_right, options),
            ParseNode::Raw(raw) => Err(BuildError::UnknownSymbol {
                text: raw.string.clone(),
            }
            .into()),
        }
    }

    fn build_command(&mut self, command: &CommandNode, options: &Options) -> BuildResult<LayoutBox> {
        let builder = FUNCTIONS
            .get(&command.name)
            .and_then(|func| func.builder.as_ref())
            .ok_or_else(|| BuildError::UnknownCommand {
                name: command.name.clone(),
            })?;

        builder(self, command, options)
    }
}

/// Makes a glyph for `text` in `font`, with its metrics scaled to the size of `options`
pub(crate) fn make_glyph(
    text: &str,
    font: Font,
    mode: Mode,
    options: &Options,
    class: Option<AtomClass>,
) -> BuildResult<LayoutBox> {
    let ch = text.chars().next().ok_or_else(|| BuildError::UnknownSymbol {
        text: text.to_string(),
    })?;
    let metrics = get_character_metrics(ch, font)
        .ok_or(BuildError::MissingMetric { ch, font })?
        .scaled(options.size_multiplier());

    // Italic correction only applies to slanted math glyphs
    let italic = if font.is_italic() && mode == Mode::Math {
        Em(metrics.italic)
    } else {
        Em::ZERO
    };

    Ok(LayoutBox::Glyph(Glyph {
        text: text.to_string(),
        font,
        size: options.size_multiplier(),
        metrics: Metrics::new(
            Em(metrics.height),
            Em(metrics.depth),
            Em(metrics.width) + italic,
        ),
        italic,
        class,
        color: options.color.clone(),
    }))
}

/// Makes a glyph for a symbol from the symbol table
pub(crate) fn make_symbol(text: &str, mode: Mode, options: &Options) -> BuildResult<LayoutBox> {
    match SYMBOLS.get(mode, text) {
        Some(symbol) => make_glyph(
            symbol.output_text(text),
            symbol.font,
            mode,
            options,
            Some(symbol.class),
        ),
        // Characters without an entry are accepted in text mode, and set in the main font if it
        // has them
        None if mode == Mode::Text && text.chars().count() == 1 => {
            make_glyph(text, Font::MainRegular, mode, options, Some(AtomClass::Ord))
        }
        None => Err(BuildError::UnknownSymbol {
            text: text.to_string(),
        }
        .into()),
    }
}

fn build_symbol(symbol: &SymbolNode, options: &Options) -> BuildResult<LayoutBox> {
    if let Some(space) = explicit_space(&symbol.text) {
        let width = match space {
            ExplicitSpace::Mu(mu) => options.em_per_mu() * mu.0,
            ExplicitSpace::Em(em) => em * options.size_multiplier(),
        };
        return Ok(LayoutBox::spacer(width));
    }

    make_symbol(&symbol.text, symbol.info.mode, options)
}

/// Bin atoms become Ord where there is nothing for them to be binary between: at the start or end
/// of a list, and next to another operator, a relation, an opening or a closing.
fn reclassify_bins(items: &mut [Item], surrounding: Surrounding) {
    let non_space = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.class != AtomClass::Spacing)
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    let mut prev = surrounding.before;
    for (pos, &i) in non_space.iter().enumerate() {
        if items[i].class == AtomClass::Bin {
            let next = match non_space.get(pos + 1) {
                Some(&j) => Some(items[j].class),
                None => surrounding.after,
            };

            let cancelled_by_prev = matches!(
                prev,
                None | Some(
                    AtomClass::Bin
                        | AtomClass::Open
                        | AtomClass::Rel
                        | AtomClass::Op
                        | AtomClass::Punct
                )
            );
            let cancelled_by_next = matches!(
                next,
                None | Some(AtomClass::Rel | AtomClass::Close | AtomClass::Punct)
            );

            if cancelled_by_prev || cancelled_by_next {
                items[i].class = AtomClass::Ord;
            }
        }

        prev = Some(items[i].class);
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutBuilder, Surrounding};
    use crate::{
        layout::LayoutBox,
        parser::{Parser, ParserConfig},
        parse_node::ParseNode,
        symbols::AtomClass,
        Options,
    };

    fn build_children(input: &str) -> Vec<LayoutBox> {
        let conf = ParserConfig::default();
        let tree = Parser::new(input, conf.clone()).parse().unwrap();
        let ParseNode::OrdGroup(group) = tree else {
            panic!("root should be a group");
        };
        let options = Options::from_parser_conf(&conf);
        LayoutBuilder::new(&conf)
            .build_expression(&group.body, &options, Surrounding::LIST)
            .unwrap()
    }

    fn classes(children: &[LayoutBox]) -> Vec<AtomClass> {
        children.iter().filter_map(LayoutBox::class).collect()
    }

    #[test]
    fn test_leading_bin_is_ord() {
        let children = build_children("-x");
        assert_eq!(classes(&children), vec![AtomClass::Ord, AtomClass::Ord]);
        // No space between the two ords
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_bin_spacing() {
        use AtomClass::*;
        let children = build_children("a+b");
        assert_eq!(
            classes(&children),
            vec![Ord, Spacing, Bin, Spacing, Ord]
        );

        let children = build_children("a+=b");
        assert_eq!(
            classes(&children),
            vec![Ord, Ord, Spacing, Rel, Spacing, Ord]
        );
    }

    #[test]
    fn test_last_atom_is_spaced_against_what_follows() {
        use AtomClass::*;
        let conf = ParserConfig::default();
        let tree = Parser::new("a,", conf.clone()).parse().unwrap();
        let ParseNode::OrdGroup(group) = tree else {
            panic!("root should be a group");
        };
        let options = Options::from_parser_conf(&conf);
        let closed = Surrounding {
            before: Some(Open),
            after: Some(Close),
        };
        let children = LayoutBuilder::new(&conf)
            .build_expression(&group.body, &options, closed)
            .unwrap();
        assert_eq!(classes(&children), vec![Ord, Punct, Spacing]);
        assert!(
            matches!(children.last(), Some(LayoutBox::Spacer(s)) if (s.width.0 - 3.0 / 18.0).abs() < 1e-9)
        );

        // Nothing trails a list of its own
        assert_eq!(classes(&build_children("a,")), vec![Ord, Punct]);
    }

    #[test]
    fn test_script_style_is_tight() {
        let children = build_children(r"\scriptstyle a+b");
        assert!(children
            .iter()
            .all(|child| child.class() != Some(AtomClass::Spacing)));
    }
}
