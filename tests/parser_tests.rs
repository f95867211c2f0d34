use texbox::{
    parse_node::{ColumnAlign, EqNoLoc, Mode, ParseNode},
    parse_tree,
    parser::ParserConfig,
};

// Helper to check that parsing succeeds
fn assert_parses(expr: &str) {
    let conf = ParserConfig::default();
    let result = parse_tree(expr, conf);
    assert!(result.is_ok(), "Failed to parse: {}\nError: {:?}", expr, result.err());
}

// Parse, returning the body of the implicit top-level group
fn parse_body(expr: &str) -> Vec<ParseNode> {
    match parse_tree(expr, ParserConfig::default()) {
        Ok(ParseNode::OrdGroup(group)) => group.body,
        Ok(node) => panic!("expected the top-level group, got {:?}", node),
        Err(err) => panic!("Failed to parse: {}\nError: {:?}", expr, err),
    }
}

fn parse_first(expr: &str) -> ParseNode {
    parse_body(expr)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("{} parsed to nothing", expr))
}

fn assert_same_tree(a: &str, b: &str) {
    let a_tree = parse_tree(a, ParserConfig::default()).unwrap();
    let b_tree = parse_tree(b, ParserConfig::default()).unwrap();
    assert!(a_tree.eq_no_loc(&b_tree), "{} and {} should parse the same", a, b);
}

// =============================================================================
// Basic Parser Tests
// =============================================================================

#[test]
fn parser_should_not_fail_on_empty_string() {
    assert_parses("");
    assert!(parse_body("").is_empty());
}

#[test]
fn parser_should_ignore_whitespace() {
    assert_same_tree("    x    y    ", "xy");
    assert_same_tree("    x   ^ y    ", "x^y");
}

#[test]
fn parser_should_ignore_comments() {
    assert_same_tree("x % a comment\n+ y", "x+y");
    assert_same_tree("x %", "x");
}

#[test]
fn ord_parser_should_not_fail() {
    assert_parses("1234|/.abcdefgzABCDEFGZ");
}

#[test]
fn bin_rel_and_punct_should_parse() {
    assert_parses(r"+-*\cdot\pm\div");
    assert_parses(r"=<>\leq\geq\neq\cong");
    assert_parses(r",;\colon");
}

#[test]
fn symbols_are_leaves() {
    let body = parse_body(r"a\alpha 2");
    assert_eq!(body.len(), 3);
    assert_eq!(body[1].text(), Some("\\alpha"));
    assert!(body.iter().all(|node| matches!(node, ParseNode::Symbol(_))));
}

// =============================================================================
// Groups
// =============================================================================

#[test]
fn braces_make_groups() {
    let node = parse_first("{xy}");
    let ParseNode::OrdGroup(group) = node else {
        panic!("expected a group");
    };
    assert_eq!(group.body.len(), 2);
}

#[test]
fn empty_group_parses() {
    let node = parse_first("{}");
    assert!(matches!(node, ParseNode::OrdGroup(ref g) if g.body.is_empty()));
}

#[test]
fn group_locations_cover_their_source() {
    let node = parse_first("{ab}c");
    let loc = node.loc().unwrap();
    assert_eq!(loc.0, 0..4);
}

// =============================================================================
// Superscripts and Subscripts
// =============================================================================

#[test]
fn should_parse_scripts_in_either_order() {
    for expr in ["x^2_3", "x_3^2"] {
        let ParseNode::SupSub(supsub) = parse_first(expr) else {
            panic!("expected supsub for {}", expr);
        };
        assert_eq!(supsub.sup.as_ref().and_then(|n| n.text()), Some("2"));
        assert_eq!(supsub.sub.as_ref().and_then(|n| n.text()), Some("3"));
    }
}

#[test]
fn script_without_base() {
    let ParseNode::SupSub(supsub) = parse_first("^2") else {
        panic!("expected supsub");
    };
    assert!(supsub.base.is_none());
}

#[test]
fn script_takes_a_single_atom() {
    let body = parse_body("x^23");
    assert_eq!(body.len(), 2);
    assert_eq!(body[1].text(), Some("3"));
}

#[test]
fn script_takes_a_group() {
    let ParseNode::SupSub(supsub) = parse_first("x^{23}") else {
        panic!("expected supsub");
    };
    assert!(matches!(supsub.sup.as_deref(), Some(ParseNode::OrdGroup(g)) if g.body.len() == 2));
}

#[test]
fn primes_become_superscripts() {
    let ParseNode::SupSub(supsub) = parse_first("f''") else {
        panic!("expected supsub");
    };
    let Some(ParseNode::OrdGroup(sup)) = supsub.sup.as_deref() else {
        panic!("expected group of primes");
    };
    assert_eq!(sup.body.len(), 2);
    assert!(sup.body.iter().all(|n| n.text() == Some("\\prime")));
}

#[test]
fn primes_merge_with_superscript() {
    let ParseNode::SupSub(supsub) = parse_first("f'^2_i") else {
        panic!("expected supsub");
    };
    let Some(ParseNode::OrdGroup(sup)) = supsub.sup.as_deref() else {
        panic!("expected group of primes");
    };
    assert_eq!(sup.body.len(), 2);
    assert_eq!(sup.body[1].text(), Some("2"));
    assert!(supsub.sub.is_some());
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn frac_takes_two_arguments() {
    let ParseNode::Command(frac) = parse_first(r"\frac{a}{b}") else {
        panic!("expected command");
    };
    assert_eq!(frac.name, "\\frac");
    assert_eq!(frac.args.len(), 2);
}

#[test]
fn frac_arguments_can_be_single_tokens() {
    let ParseNode::Command(frac) = parse_first(r"\frac12") else {
        panic!("expected command");
    };
    assert_eq!(frac.args[0].text(), Some("1"));
    assert_eq!(frac.args[1].text(), Some("2"));
}

#[test]
fn sqrt_optional_argument() {
    let ParseNode::Command(sqrt) = parse_first(r"\sqrt[3]{x}") else {
        panic!("expected command");
    };
    assert_eq!(sqrt.optional_args.len(), 1);
    assert!(sqrt.optional_args[0].is_some());

    let ParseNode::Command(sqrt) = parse_first(r"\sqrt{x}") else {
        panic!("expected command");
    };
    assert!(sqrt.optional_args[0].is_none());
}

#[test]
fn color_argument_is_raw() {
    let ParseNode::Command(color) = parse_first(r"\color{#0af}{x}") else {
        panic!("expected command");
    };
    assert!(matches!(&color.args[0], ParseNode::Raw(raw) if raw.string == "#0af"));
}

#[test]
fn named_colors_parse() {
    for name in ["blue", "orange", "pink", "red", "green", "gray", "purple"] {
        assert_parses(&format!("\\{}{{x}}", name));
    }
}

#[test]
fn operators_parse() {
    assert_parses(r"\sum_{i=0}^n \prod \coprod \bigcup \bigcap \int_0^1 \oint");
    assert_parses(r"\sin x \cos \tan \cot \sec \csc \log \ln \exp");
    assert_parses(r"\lim_{x\to 0} \max \min \sup \inf \det \arg \dim \ker \deg \gcd \Pr");
}

#[test]
fn decorations_parse() {
    assert_parses(r"\overline{x}\underline{y}\llap{a}\rlap{b}");
}

#[test]
fn explicit_spaces_parse() {
    assert_parses(r"a\,b\:c\;d\!e\ f~g\quad h\qquad i");
}

// =============================================================================
// Text Mode
// =============================================================================

#[test]
fn text_switches_mode() {
    let ParseNode::Command(text) = parse_first(r"\text{a b}") else {
        panic!("expected command");
    };
    let ParseNode::OrdGroup(body) = &text.args[0] else {
        panic!("expected group");
    };
    assert!(body.body.iter().all(|n| n.mode() == Mode::Text));
    // Whitespace is kept in text mode
    assert_eq!(body.body.len(), 3);
}

#[test]
fn text_mode_collapses_whitespace_runs() {
    let ParseNode::Command(text) = parse_first(r"\text{a    b}") else {
        panic!("expected command");
    };
    let ParseNode::OrdGroup(body) = &text.args[0] else {
        panic!("expected group");
    };
    assert_eq!(body.body.len(), 3);
}

#[test]
fn mode_returns_to_math_after_text() {
    let body = parse_body(r"\text{a} b");
    assert_eq!(body.len(), 2);
    assert_eq!(body[1].mode(), Mode::Math);
}

// =============================================================================
// Style and Size Directives
// =============================================================================

#[test]
fn style_directive_takes_rest_of_group() {
    let body = parse_body(r"a \displaystyle b c");
    assert_eq!(body.len(), 2);
    let ParseNode::Styling(styling) = &body[1] else {
        panic!("expected styling");
    };
    assert_eq!(styling.body.len(), 2);
}

#[test]
fn size_directive_takes_rest_of_group() {
    let body = parse_body(r"{\Large a b} c");
    assert_eq!(body.len(), 2);
    let ParseNode::OrdGroup(group) = &body[0] else {
        panic!("expected group");
    };
    let ParseNode::Sizing(sizing) = &group.body[0] else {
        panic!("expected sizing");
    };
    assert_eq!(sizing.size, 8);
    assert_eq!(sizing.body.len(), 2);
}

// =============================================================================
// Delimiters
// =============================================================================

#[test]
fn left_right_parses() {
    let ParseNode::LeftRight(lr) = parse_first(r"\left( x + y \right]") else {
        panic!("expected left right");
    };
    assert_eq!(lr.left, "(");
    assert_eq!(lr.right, "]");
    assert_eq!(lr.body.len(), 3);
}

#[test]
fn left_right_null_delimiters() {
    let ParseNode::LeftRight(lr) = parse_first(r"\left. \frac{a}{b} \right|") else {
        panic!("expected left right");
    };
    assert_eq!(lr.left, ".");
    assert_eq!(lr.right, "|");
}

#[test]
fn left_right_nests() {
    assert_parses(r"\left( \left[ x \right] \right)");
}

#[test]
fn big_delimiters_parse() {
    assert_parses(r"\bigl( \Bigl[ \biggl\{ \Biggl\langle x \Biggr\rangle \biggr\} \Bigr] \bigr)");
    assert_parses(r"\big| \Big| \bigg| \Bigg| \bigm|");
}

// =============================================================================
// Environments
// =============================================================================

#[test]
fn matrix_rows_and_cells() {
    let ParseNode::Environment(env) = parse_first(r"\begin{matrix} a & b \\ c & d \end{matrix}")
    else {
        panic!("expected environment");
    };
    assert_eq!(env.name, "matrix");
    assert_eq!(env.rows.len(), 2);
    assert!(env.rows.iter().all(|row| row.len() == 2));
}

#[test]
fn trailing_row_separator_is_dropped() {
    let ParseNode::Environment(env) = parse_first(r"\begin{matrix} a \\ b \\ \end{matrix}") else {
        panic!("expected environment");
    };
    assert_eq!(env.rows.len(), 2);
}

#[test]
fn delimited_matrices_are_wrapped() {
    for (name, left, right) in [
        ("pmatrix", "(", ")"),
        ("bmatrix", "[", "]"),
        ("vmatrix", "|", "|"),
        ("Vmatrix", "\\Vert", "\\Vert"),
    ] {
        let expr = format!("\\begin{{{0}}} a \\end{{{0}}}", name);
        let ParseNode::LeftRight(lr) = parse_first(&expr) else {
            panic!("{} should be wrapped in delimiters", name);
        };
        assert_eq!(lr.left, left, "{}", name);
        assert_eq!(lr.right, right, "{}", name);
    }
}

#[test]
fn cases_has_a_left_brace() {
    let ParseNode::LeftRight(lr) = parse_first(r"\begin{cases} a & x > 0 \\ b & x \le 0 \end{cases}")
    else {
        panic!("cases should be wrapped in delimiters");
    };
    assert_eq!(lr.right, ".");
    let ParseNode::Environment(env) = &lr.body[0] else {
        panic!("expected environment");
    };
    assert!(env.array_stretch > 1.0);
}

#[test]
fn array_column_spec() {
    let ParseNode::Environment(env) = parse_first(r"\begin{array}{lcr} a & b & c \end{array}")
    else {
        panic!("expected environment");
    };
    assert_eq!(
        env.cols,
        Some(vec![ColumnAlign::Left, ColumnAlign::Center, ColumnAlign::Right])
    );
    assert!(env.outer_padding);
}
