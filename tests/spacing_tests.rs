use texbox::{build_layout, layout::LayoutBox, parser::ParserConfig, symbols::AtomClass};

const MU: f64 = 1.0 / 18.0;

// Helper to check that a formula lays out
fn assert_builds(expr: &str) {
    let result = build_layout(expr, ParserConfig::default());
    assert!(result.is_ok(), "Failed to build: {}\nError: {:?}", expr, result.err());
}

// The top-level list of a formula
fn root_children(expr: &str) -> Vec<LayoutBox> {
    let layout = build_layout(expr, ParserConfig::default())
        .unwrap_or_else(|err| panic!("Failed to build: {}\nError: {:?}", expr, err));
    let LayoutBox::HList(root) = layout.root else {
        panic!("root of {} should be an hlist", expr);
    };
    root.children
}

// Widths of the spacers in the top-level list, in order
fn spacer_widths(expr: &str) -> Vec<f64> {
    root_children(expr)
        .iter()
        .filter_map(|child| match child {
            LayoutBox::Spacer(spacer) => Some(spacer.width.0),
            _ => None,
        })
        .collect()
}

// Classes of the atoms in the top-level list, skipping spacers
fn classes(expr: &str) -> Vec<Option<AtomClass>> {
    root_children(expr)
        .iter()
        .filter(|child| !matches!(child, LayoutBox::Spacer(_)))
        .map(LayoutBox::class)
        .collect()
}

fn assert_widths(expr: &str, expected: &[f64]) {
    let widths = spacer_widths(expr);
    assert_eq!(widths.len(), expected.len(), "{}: {:?}", expr, widths);
    for (got, want) in widths.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{}: {:?} != {:?}", expr, widths, expected);
    }
}

// =============================================================================
// Inter-atom Spacing
// =============================================================================

#[test]
fn ord_ord_has_no_space() {
    assert_widths("ab", &[]);
    assert_widths("12", &[]);
}

#[test]
fn bin_gets_medium_space() {
    assert_widths("a+b", &[4.0 * MU, 4.0 * MU]);
    assert_widths(r"a\cdot b", &[4.0 * MU, 4.0 * MU]);
}

#[test]
fn rel_gets_thick_space() {
    assert_widths("a=b", &[5.0 * MU, 5.0 * MU]);
    assert_widths(r"a\leq b", &[5.0 * MU, 5.0 * MU]);
}

#[test]
fn op_gets_thin_space() {
    assert_widths(r"\sin x", &[3.0 * MU]);
    assert_widths(r"a\sin x", &[3.0 * MU, 3.0 * MU]);
}

#[test]
fn punct_gets_thin_space_after() {
    assert_widths("a,b", &[3.0 * MU]);
    // Only a thin space before a relation
    assert_widths("a,=b", &[3.0 * MU, 5.0 * MU]);
}

#[test]
fn open_and_close_have_no_space_inside() {
    assert_widths("(a)", &[]);
    assert_widths("(a+b)", &[4.0 * MU, 4.0 * MU]);
}

#[test]
fn closing_delimiters_are_spaced_against_the_body() {
    let children = root_children(r"\left( a, \right)");
    let [LayoutBox::HList(inner)] = &children[..] else {
        panic!("expected one inner list, got {:?}", children);
    };
    let classes: Vec<_> = inner.children.iter().map(LayoutBox::class).collect();
    assert_eq!(
        classes,
        vec![
            Some(AtomClass::Open),
            Some(AtomClass::Ord),
            Some(AtomClass::Punct),
            Some(AtomClass::Spacing),
            Some(AtomClass::Close)
        ]
    );
    assert!((inner.children[3].width().0 - 3.0 * MU).abs() < 1e-9);

    // Nothing is added between an ordinary atom and the closer
    let children = root_children(r"\left( a \right)");
    let [LayoutBox::HList(inner)] = &children[..] else {
        panic!("expected one inner list, got {:?}", children);
    };
    assert_eq!(inner.children.len(), 3);
}

#[test]
fn fractions_are_inner() {
    assert_widths(r"a\frac{1}{2}", &[3.0 * MU]);
    assert_widths(r"\frac{1}{2}=", &[5.0 * MU]);
}

// =============================================================================
// Bin Reclassification
// =============================================================================

#[test]
fn leading_bin_becomes_ord() {
    assert_eq!(classes("-a"), vec![Some(AtomClass::Ord), Some(AtomClass::Ord)]);
    assert_widths("-a", &[]);
}

#[test]
fn trailing_bin_becomes_ord() {
    assert_eq!(classes("a+"), vec![Some(AtomClass::Ord), Some(AtomClass::Ord)]);
    assert_widths("a+", &[]);
}

#[test]
fn bin_after_operator_becomes_ord() {
    for expr in ["a=-b", "(-b)", "a,-b"] {
        assert!(!classes(expr).contains(&Some(AtomClass::Bin)), "{}", expr);
    }
    assert_widths("a=-b", &[5.0 * MU, 5.0 * MU]);

    // Only the first of two adjacent binary operators stays binary
    assert_eq!(
        classes("a+-b"),
        vec![
            Some(AtomClass::Ord),
            Some(AtomClass::Bin),
            Some(AtomClass::Ord),
            Some(AtomClass::Ord)
        ]
    );
}

#[test]
fn bin_before_rel_becomes_ord() {
    assert_eq!(
        classes("a+=b"),
        vec![
            Some(AtomClass::Ord),
            Some(AtomClass::Ord),
            Some(AtomClass::Rel),
            Some(AtomClass::Ord)
        ]
    );
}

#[test]
fn groups_are_separate_lists() {
    // The + is first in its own list, so it is not binary
    assert_widths("a{+b}", &[]);
}

#[test]
fn directives_splice_into_their_list() {
    assert_widths(r"a \displaystyle + b", &[4.0 * MU, 4.0 * MU]);
}

// =============================================================================
// Script Styles
// =============================================================================

#[test]
fn script_style_drops_most_spacing() {
    assert_widths(r"\scriptstyle a+b=c", &[]);
    assert_widths(r"\scriptscriptstyle a+b=c", &[]);
}

#[test]
fn script_style_keeps_op_spacing() {
    // quad is 1.171em in the script font, and the script size is 0.7
    let mu = 1.171 / 18.0 * 0.7;
    assert_widths(r"\scriptstyle \sin x", &[3.0 * mu]);
}

#[test]
fn spacing_scales_with_size() {
    assert_widths(r"\Large a+b", &[4.0 * MU * 1.44, 4.0 * MU * 1.44]);
}

// =============================================================================
// Explicit Spacing
// =============================================================================

#[test]
fn explicit_mu_spaces() {
    assert_widths(r"a\,b", &[3.0 * MU]);
    assert_widths(r"a\:b", &[4.0 * MU]);
    assert_widths(r"a\;b", &[5.0 * MU]);
    assert_widths(r"a\!b", &[-3.0 * MU]);
}

#[test]
fn explicit_em_spaces() {
    assert_widths(r"a\ b", &[0.25]);
    assert_widths("a~b", &[0.25]);
    assert_widths(r"a\quad b", &[1.0]);
    assert_widths(r"a\qquad b", &[2.0]);
}

#[test]
fn explicit_spaces_are_transparent() {
    // The + is still binary between a and b, and is spaced against them
    assert_widths(r"a\,+b", &[3.0 * MU, 4.0 * MU, 4.0 * MU]);
    assert_eq!(
        classes(r"a\,+b"),
        vec![Some(AtomClass::Ord), Some(AtomClass::Bin), Some(AtomClass::Ord)]
    );
}

#[test]
fn spaces_build_in_text() {
    assert_builds(r"\text{a b\quad c}");
}
