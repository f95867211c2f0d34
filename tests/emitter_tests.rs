use texbox::{
    build_layout, parser::ParserConfig, render, render_to_dom_tree, render_to_string,
    tree::VirtualNode, unit::make_em, DomNode,
};

fn display() -> ParserConfig {
    ParserConfig {
        display_mode: true,
        ..ParserConfig::default()
    }
}

fn markup(expr: &str) -> String {
    render_to_string(expr, ParserConfig::default())
        .unwrap_or_else(|err| panic!("Failed to render: {}\nError: {:?}", expr, err))
}

fn dom(expr: &str) -> DomNode {
    render_to_dom_tree(expr, ParserConfig::default())
        .unwrap_or_else(|err| panic!("Failed to render: {}\nError: {:?}", expr, err))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// Every span the markup opens, it closes
fn assert_balanced(markup: &str) {
    assert_eq!(count(markup, "<span"), count(markup, "</span>"), "{}", markup);
}

// =============================================================================
// Backend Agreement
// =============================================================================

#[test]
fn string_matches_node_tree() {
    for expr in [
        "",
        "a+b=c",
        r"\frac{\sqrt{x}}{y_1^2}",
        r"\left\{ \begin{array}{lr} x & 1 \\ -x & 0 \end{array} \right.",
        r"\text{if } \Big| x \Big|",
        r"\color{#0f0}{\int_0^\infty} e^{-x} \, dx",
        r#"x < y \quad \text{"and"} \quad y > z"#,
    ] {
        let conf = ParserConfig::default();
        let string = render_to_string(expr, conf.clone()).unwrap();
        let tree = render_to_dom_tree(expr, conf).unwrap();
        assert_eq!(string, tree.to_markup(), "{}", expr);
        assert_balanced(&string);
    }
}

#[test]
fn display_mode_agrees_too() {
    let expr = r"\sum_{k=1}^n k = \frac{n(n+1)}{2}";
    let string = render_to_string(expr, display()).unwrap();
    let tree = render_to_dom_tree(expr, display()).unwrap();
    assert_eq!(string, tree.to_markup());
}

// =============================================================================
// Root Structure
// =============================================================================

#[test]
fn root_is_wrapped_in_katex_classes() {
    let tree = dom("x");
    assert!(tree.has_class("katex"));
    let html = tree.find_by_class("katex-html").unwrap();
    assert_eq!(html.attributes.get("aria-hidden").map(String::as_str), Some("true"));
    assert!(html.find_by_class("base").is_some());

    assert!(markup("x").starts_with("<span class=\"katex\"><span class=\"katex-html\""));
}

#[test]
fn display_mode_adds_a_wrapper() {
    let tree = render_to_dom_tree("x", display()).unwrap();
    assert!(tree.has_class("katex-display"));
    assert!(tree.child_nodes().next().unwrap().has_class("katex"));
    assert!(!dom("x").has_class("katex-display"));
}

#[test]
fn strut_matches_layout_metrics() {
    for expr in [r"\frac{a}{b}", "x_i^2", r"\sqrt{y}", "g"] {
        let layout = build_layout(expr, ParserConfig::default()).unwrap();
        let tree = dom(expr);

        let strut = tree.find_by_class("strut").unwrap();
        let total = layout.metrics.height.0 + layout.metrics.depth.0;
        assert_eq!(strut.style.get("height"), Some(make_em(total).as_str()), "{}", expr);
        assert_eq!(
            strut.style.get("vertical-align"),
            Some(make_em(-layout.metrics.depth.0).as_str()),
            "{}",
            expr
        );

        let base = tree.find_by_class("base").unwrap();
        assert_eq!(
            base.style.get("width"),
            Some(make_em(layout.metrics.width.0).as_str())
        );
    }
}

// =============================================================================
// Glyphs
// =============================================================================

#[test]
fn glyphs_carry_class_and_font() {
    let string = markup("a=1");
    assert!(string.contains("<span class=\"mord mathit\">a</span>"), "{}", string);
    assert!(string.contains("<span class=\"mrel mathrm\">=</span>"), "{}", string);
    assert!(string.contains("<span class=\"mord mathrm\">1</span>"), "{}", string);
}

#[test]
fn text_is_escaped() {
    let string = markup(r#"a<b>c \text{"y"}"#);
    assert!(string.contains(">&lt;</span>"), "{}", string);
    assert!(string.contains(">&gt;</span>"), "{}", string);
    assert!(string.contains(">&quot;</span>"), "{}", string);
    assert!(!string.contains("><</span>"));
}

#[test]
fn scripts_get_a_font_size() {
    let string = markup("x^2");
    assert!(string.contains("font-size:0.7em;"), "{}", string);
    assert!(!markup("x").contains("font-size"));
}

#[test]
fn colors_become_styles() {
    let string = markup(r"\color{#F00}{x}");
    assert!(string.contains("color:#ff0000;"), "{}", string);

    let string = markup(r"\blue{x}");
    assert!(string.contains("color:#6495ed;"), "{}", string);
}

// =============================================================================
// Rules, Spaces and Lists
// =============================================================================

#[test]
fn fraction_bar_is_a_rule() {
    let tree = dom(r"\frac{a}{b}");
    let rule = tree.find_by_class("rule").unwrap();
    assert!(rule.style.get("border-top-width").is_some());
    assert!(rule.style.get("width").is_some());
    assert!(rule.children.is_empty());
}

#[test]
fn spacing_becomes_margins() {
    let string = markup("a+b");
    assert_eq!(count(&string, "class=\"mspace\""), 2, "{}", string);
    assert!(string.contains(&format!("margin-right:{};", make_em(4.0 / 18.0))));

    let string = markup(r"a\quad b");
    assert!(string.contains("margin-right:1em;"), "{}", string);
}

#[test]
fn vertical_lists_position_children() {
    let tree = dom(r"\frac{a}{b}");
    let vlist = tree.find_by_class("vlist-t").unwrap();
    assert!(vlist.has_class("vlist-t2"));
    // One wrapper for each of the numerator, bar and denominator
    let list = vlist.find_by_class("vlist").unwrap();
    assert_eq!(list.child_nodes().count(), 3);
    for wrapper in list.child_nodes() {
        assert!(wrapper.style.get("top").is_some());
        assert!(wrapper.child_nodes().next().unwrap().has_class("pstrut"));
    }
}

// =============================================================================
// Rendering Into A Target
// =============================================================================

#[test]
fn render_replaces_target_content() {
    let mut target = DomNode::new("div");
    target.append_text("x^2");

    render("x^2", &mut target, ParserConfig::default()).unwrap();
    assert_eq!(target.children.len(), 1);
    assert_eq!(target.child_nodes().next(), Some(&dom("x^2")));
    assert_eq!(target.to_markup(), format!("<div>{}</div>", markup("x^2")));
}

#[test]
fn failed_render_keeps_target() {
    let mut target = DomNode::new("div").with_class("tex");
    target.append_text(r"\frac{a}");
    let before = target.clone();

    assert!(render(r"\frac{a}", &mut target, ParserConfig::default()).is_err());
    assert_eq!(target, before);
}

#[test]
fn text_content_is_the_formula_glyphs() {
    assert_eq!(dom("a+b").text_content(), "a+b");
    assert_eq!(dom(r"\sin x").text_content(), "sinx");
}
