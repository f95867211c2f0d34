use texbox::{
    build_layout, font_metrics::Font, parse_tree, parser::ParserConfig, render_to_string,
    BuildError, LexError, ParseError, RecursionLimitError, RenderError,
};

// Helper to check that parsing fails with exactly the expected error
fn assert_parse_error(expr: &str, expected: ParseError) {
    let result = parse_tree(expr, ParserConfig::default());
    assert_eq!(
        result.err(),
        Some(RenderError::Parse(expected)),
        "for expression: {}",
        expr
    );
}

// Simpler helper that just checks for any error, at any stage
fn assert_fails(expr: &str) {
    let result = render_to_string(expr, ParserConfig::default());
    assert!(result.is_err(), "Expected an error for: {}", expr);
}

fn with_depth(max_nesting_depth: usize) -> ParserConfig {
    ParserConfig {
        max_nesting_depth,
        ..ParserConfig::default()
    }
}

// =============================================================================
// Lexer Errors
// =============================================================================

#[test]
fn rejects_trailing_backslash() {
    let err = parse_tree("x\\", ParserConfig::default()).unwrap_err();
    assert_eq!(
        err,
        RenderError::Lex(LexError::UnterminatedEscape { position: 1 })
    );
    assert_eq!(err.position(), Some(1));
}

#[test]
fn rejects_control_characters() {
    let err = parse_tree("a\u{1}", ParserConfig::default()).unwrap_err();
    assert_eq!(
        err,
        RenderError::Lex(LexError::UnexpectedCharacter {
            ch: '\u{1}',
            position: 1
        })
    );
}

// =============================================================================
// Scripts
// =============================================================================

#[test]
fn rejects_double_superscripts() {
    assert_parse_error("x^2^3", ParseError::DoubleSuperscript { position: 3 });
    assert_parse_error("x'^2^3", ParseError::DoubleSuperscript { position: 4 });
    assert_parse_error("x^2'", ParseError::DoubleSuperscript { position: 3 });
}

#[test]
fn rejects_double_subscripts() {
    assert_parse_error("x_1_2", ParseError::DoubleSubscript { position: 3 });
}

#[test]
fn rejects_script_without_argument() {
    assert_parse_error(
        "x^",
        ParseError::ExpectedGroup {
            context: "superscript".to_string(),
            position: 1,
        },
    );
    assert_parse_error(
        "x_}",
        ParseError::ExpectedGroup {
            context: "subscript".to_string(),
            position: 1,
        },
    );
}

// =============================================================================
// Groups
// =============================================================================

#[test]
fn rejects_unmatched_braces() {
    assert_parse_error("{x", ParseError::UnmatchedOpenBrace { position: 0 });
    assert_parse_error("a{b{c}", ParseError::UnmatchedOpenBrace { position: 1 });
    assert_parse_error("x}", ParseError::UnmatchedCloseBrace { position: 1 });
}

#[test]
fn rejects_misplaced_alignment() {
    assert_parse_error("a & b", ParseError::MisplacedAlignment { position: 2 });
    assert_parse_error(r"a \\ b", ParseError::MisplacedAlignment { position: 2 });
    assert_parse_error("{a & b}", ParseError::MisplacedAlignment { position: 3 });
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn rejects_missing_arguments() {
    assert_parse_error(
        r"\frac{a}",
        ParseError::MissingArgument {
            command: "\\frac".to_string(),
            position: 0,
        },
    );
    assert_parse_error(
        r"x + \sqrt",
        ParseError::MissingArgument {
            command: "\\sqrt".to_string(),
            position: 4,
        },
    );
}

#[test]
fn rejects_unbraced_function_arguments() {
    assert_parse_error(
        r"\frac\llap{x}{y}",
        ParseError::FunctionNoArguments {
            command: "\\llap".to_string(),
            position: 5,
        },
    );
    assert_parse_error(
        r"x^\llap{a}",
        ParseError::FunctionNoArguments {
            command: "\\llap".to_string(),
            position: 2,
        },
    );
}

#[test]
fn braced_function_arguments_are_fine() {
    assert!(parse_tree(r"\frac{\llap{x}}{y}", ParserConfig::default()).is_ok());
    assert!(parse_tree(r"x^\frac12", ParserConfig::default()).is_ok());
}

#[test]
fn rejects_math_functions_in_text() {
    assert_parse_error(
        r"\text{\frac{a}{b}}",
        ParseError::FunctionUnusableTextMode {
            command: "\\frac".to_string(),
            position: 6,
        },
    );
}

#[test]
fn rejects_undefined_control_sequences() {
    assert_parse_error(
        r"x\foo",
        ParseError::UndefinedControlSequence {
            name: "\\foo".to_string(),
            position: 1,
        },
    );
}

#[test]
fn rejects_unknown_symbols() {
    assert_parse_error(
        "\u{e9}",
        ParseError::UnknownSymbol {
            text: "\u{e9}".to_string(),
            position: 0,
        },
    );
}

#[test]
fn rejects_invalid_colors() {
    assert_parse_error(
        r"\color{nope}{x}",
        ParseError::InvalidColor {
            color: "nope".to_string(),
            position: 6,
        },
    );
    assert_fails(r"\color{#12}{x}");
    assert_parse_error(
        r"\color{#+fffff}{x}",
        ParseError::InvalidColor {
            color: "#+fffff".to_string(),
            position: 6,
        },
    );
    assert_fails(r"\color{#-0f}{x}");
    assert!(parse_tree(r"\color{#1a2B3c}{x}", ParserConfig::default()).is_ok());
}

// =============================================================================
// Delimiters
// =============================================================================

#[test]
fn rejects_invalid_delimiters() {
    assert_parse_error(
        r"\left x \right)",
        ParseError::InvalidDelimiter {
            delim: "x".to_string(),
            position: 6,
        },
    );
    assert_parse_error(
        r"\bigl",
        ParseError::MissingArgument {
            command: "\\bigl".to_string(),
            position: 0,
        },
    );
}

#[test]
fn rejects_unbalanced_left_right() {
    assert_parse_error(r"\left( x", ParseError::MissingRight { position: 0 });
    assert_parse_error(r"x \right)", ParseError::UnexpectedRight { position: 2 });
    assert_parse_error(r"{\left( x}", ParseError::MissingRight { position: 1 });
}

// =============================================================================
// Environments
// =============================================================================

#[test]
fn rejects_unknown_environments() {
    assert_parse_error(
        r"\begin{foo} x \end{foo}",
        ParseError::UnknownEnvironment {
            name: "foo".to_string(),
            position: 0,
        },
    );
}

#[test]
fn rejects_mismatched_environments() {
    assert_parse_error(
        r"\begin{matrix}a\end{pmatrix}",
        ParseError::MismatchedEnvironment {
            begin: "matrix".to_string(),
            end: "pmatrix".to_string(),
            position: 19,
        },
    );
}

#[test]
fn rejects_unterminated_environments() {
    assert_parse_error(
        r"\begin{matrix} a & b",
        ParseError::UnterminatedEnvironment {
            name: "matrix".to_string(),
            position: 0,
        },
    );
}

#[test]
fn rejects_bad_array_columns() {
    let err = parse_tree(r"\begin{array}{c} a & b \end{array}", ParserConfig::default())
        .unwrap_err();
    assert!(
        matches!(
            err,
            RenderError::Parse(ParseError::TooManyColumns { limit: 1, .. })
        ),
        "{:?}",
        err
    );

    let err = parse_tree(r"\begin{array}{cx} a \end{array}", ParserConfig::default())
        .unwrap_err();
    assert!(
        matches!(
            err,
            RenderError::Parse(ParseError::InvalidColumnAlignment { .. })
        ),
        "{:?}",
        err
    );
}

// =============================================================================
// Build Errors
// =============================================================================

#[test]
fn missing_metrics_are_coverage_gaps() {
    // Text mode accepts any character, but the fonts only cover some of them
    let err = build_layout("\\text{\u{e9}}", ParserConfig::default()).unwrap_err();
    assert_eq!(
        err,
        RenderError::Build(BuildError::MissingMetric {
            ch: '\u{e9}',
            font: Font::MainRegular,
        })
    );
    assert!(err.is_coverage_gap());
    assert!(!RenderError::from(ParseError::MissingRight { position: 0 }).is_coverage_gap());
}

// =============================================================================
// Nesting Limits
// =============================================================================

#[test]
fn deep_nesting_is_rejected() {
    let expr = format!("{}x{}", "{".repeat(500), "}".repeat(500));
    let err = parse_tree(&expr, ParserConfig::default()).unwrap_err();
    assert!(
        matches!(err, RenderError::RecursionLimit(RecursionLimitError { limit: 128, .. })),
        "{:?}",
        err
    );
}

#[test]
fn nesting_limit_is_configurable() {
    assert!(parse_tree("{{x}}", with_depth(3)).is_ok());
    assert!(matches!(
        parse_tree("{{{{x}}}}", with_depth(3)),
        Err(RenderError::RecursionLimit(_))
    ));

    // Scripts and arguments nest as well
    assert!(matches!(
        parse_tree(r"x^{y^{z^{w}}}", with_depth(3)),
        Err(RenderError::RecursionLimit(_))
    ));
}

#[test]
fn errors_abort_the_whole_render() {
    // A bad atom late in the formula still fails everything before it
    assert_fails(r"\frac{a}{b} + \sqrt{x} + \foo");
    assert_fails(r"\begin{matrix} a \\ \frac{b} \end{matrix}");
}

#[test]
fn error_messages_name_the_problem() {
    let err = parse_tree(r"x\foo", ParserConfig::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("\\foo"), "{}", message);
    assert!(message.contains("position 1"), "{}", message);
}
