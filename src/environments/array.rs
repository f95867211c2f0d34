use std::sync::Arc;

use crate::{
    functions::FunctionPropSpec,
    parse_node::{ColumnAlign, EnvironmentNode, LeftRightNode, NodeInfo, ParseNode, ParseNodeType},
    parser::{ParseError, ParseResult},
};

use super::{EnvContext, EnvHandler, EnvironmentSpec, Environments};

fn align_spec_from_arg(ctx: &EnvContext) -> ParseResult<Vec<ColumnAlign>> {
    let spec = ctx.args.first().map_or("", |arg| arg.string.as_str());
    let position = ctx
        .args
        .first()
        .and_then(|arg| arg.info.loc.as_ref())
        .map_or(ctx.position, |loc| loc.start());

    let mut cols = Vec::new();
    for ch in spec.chars() {
        match ch {
            'l' => cols.push(ColumnAlign::Left),
            'c' => cols.push(ColumnAlign::Center),
            'r' => cols.push(ColumnAlign::Right),
            _ => {
                return Err(ParseError::InvalidColumnAlignment {
                    spec: spec.to_string(),
                    position,
                }
                .into())
            }
        }
    }

    if cols.is_empty() {
        return Err(ParseError::InvalidColumnAlignment {
            spec: spec.to_string(),
            position,
        }
        .into());
    }

    Ok(cols)
}

fn matrix_handler(ctx: EnvContext, rows: Vec<Vec<ParseNode>>) -> ParseResult<ParseNode> {
    let res = EnvironmentNode {
        name: ctx.name.to_string(),
        rows,
        cols: None,
        array_stretch: 1.0,
        outer_padding: false,
        info: ctx.info.clone(),
    };

    let delims = match ctx.name {
        "pmatrix" => Some(("(", ")")),
        "bmatrix" => Some(("[", "]")),
        "Bmatrix" => Some(("\\{", "\\}")),
        "vmatrix" => Some(("|", "|")),
        "Vmatrix" => Some(("\\Vert", "\\Vert")),
        _ => None,
    };

    Ok(if let Some((left, right)) = delims {
        ParseNode::LeftRight(LeftRightNode {
            left: left.to_string(),
            right: right.to_string(),
            body: vec![ParseNode::Environment(res)],
            info: ctx.info,
        })
    } else {
        ParseNode::Environment(res)
    })
}

fn array_handler(ctx: EnvContext, rows: Vec<Vec<ParseNode>>) -> ParseResult<ParseNode> {
    let cols = align_spec_from_arg(&ctx)?;

    if let Some(row) = rows.iter().find(|row| row.len() > cols.len()) {
        let position = row
            .get(cols.len())
            .and_then(ParseNode::loc)
            .map_or(ctx.position, |loc| loc.start());
        return Err(ParseError::TooManyColumns {
            env: ctx.name.to_string(),
            limit: cols.len(),
            position,
        }
        .into());
    }

    Ok(ParseNode::Environment(EnvironmentNode {
        name: ctx.name.to_string(),
        rows,
        cols: Some(cols),
        array_stretch: 1.0,
        outer_padding: true,
        info: ctx.info,
    }))
}

fn cases_handler(ctx: EnvContext, rows: Vec<Vec<ParseNode>>) -> ParseResult<ParseNode> {
    const LIMIT: usize = 2;
    if let Some(row) = rows.iter().find(|row| row.len() > LIMIT) {
        let position = row
            .get(LIMIT)
            .and_then(ParseNode::loc)
            .map_or(ctx.position, |loc| loc.start());
        return Err(ParseError::TooManyColumns {
            env: ctx.name.to_string(),
            limit: LIMIT,
            position,
        }
        .into());
    }

    let res = EnvironmentNode {
        name: ctx.name.to_string(),
        rows,
        cols: Some(vec![ColumnAlign::Left, ColumnAlign::Left]),
        array_stretch: 1.2,
        outer_padding: false,
        info: ctx.info.clone(),
    };

    Ok(ParseNode::LeftRight(LeftRightNode {
        left: "\\{".to_string(),
        right: ".".to_string(),
        body: vec![ParseNode::Environment(res)],
        info: NodeInfo::new(ctx.info.mode, ctx.info.loc),
    }))
}

pub fn add_environments(envs: &mut Environments) {
    let mut push = |names: &[&'static str], prop: FunctionPropSpec, handler: EnvHandler| {
        let spec = Arc::new(EnvironmentSpec { prop, handler });
        for name in names {
            envs.insert(*name, spec.clone());
        }
    };

    push(
        &["array"],
        FunctionPropSpec::new_num_args(ParseNodeType::Environment, 1),
        Box::new(array_handler),
    );

    push(
        &["matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix"],
        FunctionPropSpec::new_num_args(ParseNodeType::Environment, 0),
        Box::new(matrix_handler),
    );

    push(
        &["cases"],
        FunctionPropSpec::new_num_args(ParseNodeType::Environment, 0),
        Box::new(cases_handler),
    );
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RenderError,
        parse_node::{ColumnAlign, ParseNode},
        parser::{ParseError, Parser, ParserConfig},
    };

    fn parse_first(input: &str) -> Result<ParseNode, RenderError> {
        let mut parser = Parser::new(input, ParserConfig::default());
        match parser.parse()? {
            ParseNode::OrdGroup(mut group) => Ok(group.body.remove(0)),
            node => Ok(node),
        }
    }

    #[test]
    fn test_matrix_rows() {
        let node = parse_first(r"\begin{pmatrix} a & b \\ c & d \\ \end{pmatrix}").unwrap();
        let ParseNode::LeftRight(lr) = node else {
            panic!("pmatrix should be wrapped in delimiters");
        };
        assert_eq!(lr.left, "(");
        let ParseNode::Environment(env) = &lr.body[0] else {
            panic!("expected environment");
        };
        // The trailing row separator does not add a row
        assert_eq!(env.rows.len(), 2);
        assert!(env.rows.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn test_array_columns() {
        let node = parse_first(r"\begin{array}{lc} 1 & 2 \end{array}").unwrap();
        let ParseNode::Environment(env) = node else {
            panic!("expected environment");
        };
        assert_eq!(env.cols, Some(vec![ColumnAlign::Left, ColumnAlign::Center]));

        let err = parse_first(r"\begin{array}{l} 1 & 2 \end{array}").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Parse(ParseError::TooManyColumns { limit: 1, .. })
        ));

        let err = parse_first(r"\begin{array}{lx} 1 \end{array}").unwrap_err();
        assert!(matches!(
            err,
            RenderError::Parse(ParseError::InvalidColumnAlignment { .. })
        ));
    }
}
