use std::sync::Arc;

use crate::{
    delimiter::custom_sized_delim,
    layout::{
        builder::{BuildResult, LayoutBuilder},
        vlist::{make_v_list, VListElem, VListElemShift, VListParam},
        HList, LayoutBox, Metrics, Rule,
    },
    parse_node::{CommandNode, ParseNodeType},
    style::SCRIPT_SCRIPT_STYLE,
    symbols::AtomClass,
    unit::Em,
    Options,
};

use super::{FunctionPropSpec, FunctionSpec, Functions};

pub fn add_functions(fns: &mut Functions) {
    let sqrt = Arc::new(FunctionSpec {
        prop: FunctionPropSpec::new_num_opt_args(ParseNodeType::Command, 1, 1)
            .with_allowed_in_argument(true),
        builder: Some(Box::new(sqrt_builder)),
    });
    fns.insert("\\sqrt".into(), sqrt);
}

/// Lays out a radical according to Rule 11 of the TeXbook
fn sqrt_builder(
    builder: &mut LayoutBuilder,
    node: &CommandNode,
    options: &Options,
) -> BuildResult<LayoutBox> {
    // The radicand is set in the cramped version of the current style
    let cramped = options.having_cramped_style();
    let inner = builder.build_group(&node.args[0], cramped.as_ref().unwrap_or(options))?;

    let theta = options.metric(|m| m.default_rule_thickness);
    let phi = if options.style.is_display() {
        options.metric(|m| m.x_height)
    } else {
        theta
    };
    let mut line_clearance = theta + phi * 0.25;

    let inner_height = inner.height() + inner.depth();
    let min_delimiter_height = inner_height + line_clearance + theta;

    let delim = custom_sized_delim("\\surd", min_delimiter_height, false, options, AtomClass::Ord)?;

    // Use any extra room the surd leaves to center the radicand under the vinculum
    let delim_depth = delim.height() + delim.depth() - theta;
    if delim_depth > inner_height + line_clearance {
        line_clearance = (line_clearance + delim_depth - inner_height) * 0.5;
    }

    // The top of the surd meets the top of the vinculum
    let delim_shift = -(inner.height() + line_clearance + theta) + delim.height();
    let delim = make_v_list(
        VListParam::IndividualShift {
            children: vec![VListElemShift {
                elem: delim,
                shift: delim_shift,
            }],
        },
        None,
    );

    let vinculum = Rule {
        metrics: Metrics::new(theta, Em::ZERO, inner.width()),
        color: options.color.clone(),
    };
    let body = make_v_list(
        VListParam::FirstBaseLine {
            children: vec![
                VListElem::Box(inner),
                VListElem::Kern(line_clearance),
                VListElem::Box(vinculum.into()),
                VListElem::Kern(theta),
            ],
        },
        None,
    );

    let mut children = Vec::with_capacity(3);
    if let Some(index) = node.optional_args.first().and_then(Option::as_ref) {
        let index_options = options.having_style(SCRIPT_SCRIPT_STYLE);
        let index_options = index_options.as_ref().unwrap_or(options);
        let root = builder.build_group(index, index_options)?;

        // The amount the index is shifted by, from TeX's `\r@@t`
        let to_shift = (body.height() - body.depth()) * 0.6;
        let root = make_v_list(
            VListParam::Shift {
                amount: -to_shift,
                children: vec![VListElem::Box(root)],
            },
            None,
        );

        // The index sits 5/18em in from the left and overlaps the surd by 10/18em, both in the
        // size of the index
        let index_em = Em(1.0 / 18.0) * index_options.size_multiplier();
        children.push(
            HList::new(
                vec![
                    LayoutBox::spacer(index_em * 5.0),
                    root,
                    LayoutBox::spacer(index_em * -10.0),
                ],
                None,
            )
            .into(),
        );
    }
    children.push(delim);
    children.push(body);

    Ok(HList::new(children, Some(AtomClass::Ord)).into())
}

#[cfg(test)]
mod tests {
    use crate::{
        layout::{builder::LayoutBuilder, LayoutBox},
        parser::{Parser, ParserConfig},
        Options,
    };

    fn build(input: &str) -> LayoutBox {
        let conf = ParserConfig::default();
        let tree = Parser::new(input, conf.clone()).parse().unwrap();
        let options = Options::from_parser_conf(&conf);
        LayoutBuilder::new(&conf).build(&tree, &options).unwrap()
    }

    #[test]
    fn test_sqrt_covers_radicand() {
        let x = build("x");
        let sqrt = build(r"\sqrt{x}");
        assert!(sqrt.height() > x.height());
        assert!(sqrt.width() > x.width());
    }

    #[test]
    fn test_sqrt_index_adds_width() {
        let plain = build(r"\sqrt{x}");
        let indexed = build(r"\sqrt[3]{x}");
        assert!(indexed.width() > plain.width());
        assert!(indexed.height() >= plain.height());
    }

    #[test]
    fn test_tall_radicand_grows_surd() {
        let small = build(r"\sqrt{x}");
        let tall = build(r"\sqrt{\frac{\frac{1}{2}}{\frac{3}{4}}}");
        assert!(tall.height() + tall.depth() > small.height() + small.depth());
    }
}
