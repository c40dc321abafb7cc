use std::fs;

use codelang::{
    ast::Position,
    config::Config,
    error::{Error, ParseError, RuntimeError},
    run_source,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "code"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));

        count += 1;
        match run(&source, &input) {
            (Ok(()), output) => assert_eq!(output, expected, "output of {path:?}"),
            (Err(e), output) => panic!("Demo {path:?} failed:\n{output}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn program(body: &str) -> String {
    format!("BEGIN CODE\n{body}\nEND CODE\n")
}

fn run(source: &str, input: &str) -> (Result<(), Error>, String) {
    let mut input = input.as_bytes();
    let mut output = Vec::new();
    let result = run_source(source, Config::default(), &mut input, &mut output);
    (result, String::from_utf8(output).expect("output is UTF-8"))
}

fn assert_output(body: &str, input: &str, expected: &str) {
    match run(&program(body), input) {
        (Ok(()), output) => assert_eq!(output, expected),
        (Err(e), _) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(body: &str, input: &str) -> RuntimeError {
    match run(&program(body), input) {
        (Err(Error::Runtime(e)), _) => e,
        (Err(e), _) => panic!("Expected a runtime error, got: {e}"),
        (Ok(()), output) => panic!("Script succeeded but was expected to fail:\n{output}"),
    }
}

fn parse_error(source: &str) -> ParseError {
    match run(source, "") {
        (Err(Error::Parse(e)), _) => e,
        (Err(e), _) => panic!("Expected a syntax error, got: {e}"),
        (Ok(()), _) => panic!("Script parsed but was expected to fail"),
    }
}

#[test]
fn declarations_and_defaults() {
    assert_output("INT x\nDISPLAY: \"[\" & x & \"]\"", "", "[]");
    assert_output("INT a = 1, b, c = 3\nb = a + c\nDISPLAY: a & b & c", "", "143");
    assert_output("CHAR c = 'z'\nSTRING s = \"hi there\"\nDISPLAY: s & c", "", "hi therez");
}

#[test]
fn numeric_promotion_and_division() {
    assert_output("DISPLAY: 1 + 0.5", "", "1.5");
    assert_output("DISPLAY: 7 / 2", "", "3");
    assert_output("DISPLAY: 7.0 / 2", "", "3.5");
    assert_output("DISPLAY: -7 % 3", "", "-1");
    assert_output("DISPLAY: 2 * 3.5 - 1", "", "6");
    assert_output("DISPLAY: 1.0 / 0", "", "inf");
}

#[test]
fn precedence_follows_the_operator_table() {
    assert_output("DISPLAY: 2 + 3 * 4", "", "14");
    assert_output("DISPLAY: (2 + 3) * 4", "", "20");
    assert_output("DISPLAY: 1 + 2 & 3 + 4", "", "37");
    assert_output("DISPLAY: NOT 1 > 2 AND 2 > 1", "", "TRUE");
    assert_output("DISPLAY: \"FALSE\" OR 1 == 1 AND \"FALSE\"", "", "FALSE");
}

#[test]
fn booleans_render_in_uppercase() {
    assert_output("BOOL b = 1 < 2\nDISPLAY: b", "", "TRUE");
    assert_output("BOOL b = \"FALSE\"\nDISPLAY: b & $ & (NOT b)", "", "FALSE\nTRUE");
}

#[test]
fn equality_across_kinds_is_false() {
    assert_output("DISPLAY: 1 == 1.0", "", "FALSE");
    assert_output("DISPLAY: 'a' <> \"a\"", "", "TRUE");
    assert_output("DISPLAY: \"ab\" == \"ab\"", "", "TRUE");
}

#[test]
fn concatenation_and_text_addition() {
    assert_output("DISPLAY: \"n=\" & 4 & ' ' & 2.5", "", "n=4 2.5");
    assert_output("DISPLAY: \"a\" + 1", "", "a1");
    assert_output("DISPLAY: 1 + \"a\"", "", "1a");
}

#[test]
fn newline_and_escape_literals() {
    assert_output("DISPLAY: \"a\" & $ & \"b\"", "", "a\nb");
    assert_output("DISPLAY: [[] & [&] & []] & [#] & [$]", "", "[&]#$");
    assert!(matches!(runtime_error("DISPLAY: [a]", ""),
                     RuntimeError::InvalidEscapeSequence { sequence: 'a', .. }));
}

#[test]
fn comments_are_ignored() {
    assert_output("# leading comment\nINT x = 1 # trailing\nDISPLAY: x", "", "1");
    assert_output("DISPLAY: \"# not a comment\"", "", "# not a comment");
}

#[test]
fn multi_target_assignment() {
    assert_output("INT x, y\nx = y = 4\nDISPLAY: x & y", "", "44");
    assert!(matches!(runtime_error("INT x\nFLOAT f\nx = f = 4", ""),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn redeclaration_is_a_warning() {
    assert_output("INT x = 1\nINT x = 2\nDISPLAY: x",
                  "",
                  "Warning: 3:4 -> redefinition of variable 'x'.\n1");
}

#[test]
fn type_mismatch_on_declaration_and_assignment() {
    let e = runtime_error("FLOAT r = 3", "");
    assert_eq!(e.to_string(), "Error: 2:6 -> cannot convert INT to FLOAT.");

    assert!(matches!(runtime_error("INT x\nx = 2.5", ""), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("BOOL b = 1", ""), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn undefined_variable_is_error() {
    let e = runtime_error("DISPLAY: y", "");
    assert_eq!(e.to_string(), "Error: 2:9 -> variable 'y' is not defined.");
    assert_eq!(e.position(), Some(Position::new(2, 9)));

    let e = runtime_error("DISPLAY: \"é\" & y", "");
    assert_eq!(e.to_string(), "Error: 2:15 -> variable 'y' is not defined.");

    assert!(matches!(runtime_error("y = 1", ""), RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn operator_errors() {
    assert!(matches!(runtime_error("DISPLAY: 1 / 0", ""), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("DISPLAY: 1 % 0", ""), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("DISPLAY: 'c' - 1", ""),
                     RuntimeError::InvalidOperator { .. }));
    assert!(matches!(runtime_error("DISPLAY: 3 > 2.5", ""),
                     RuntimeError::InvalidRelationalOperator { .. }));
    assert!(matches!(runtime_error("DISPLAY: 1 AND \"TRUE\"", ""),
                     RuntimeError::InvalidBooleanOperator { .. }));
    assert!(matches!(runtime_error("DISPLAY: -\"a\"", ""),
                     RuntimeError::UnaryOperatorError { .. }));
    assert!(matches!(runtime_error("DISPLAY: NOT 1", ""), RuntimeError::NegationError { .. }));
}

#[test]
fn output_before_an_error_is_kept() {
    let (result, output) = run(&program("DISPLAY: \"before\"\nDISPLAY: 1 / 0"), "");
    assert!(result.is_err());
    assert_eq!(output, "before");
}

#[test]
fn if_chain_runs_first_matching_branch() {
    let chain = "INT n = 5\nIF (n > 10)\nBEGIN IF\nDISPLAY: \"big\"\nEND IF\nELSE IF (n > \
                 3)\nBEGIN IF\nDISPLAY: \"medium\"\nEND IF\nELSE IF (n > 1)\nBEGIN \
                 IF\nDISPLAY: \"small\"\nEND IF\nELSE\nBEGIN IF\nDISPLAY: \"tiny\"\nEND IF";
    assert_output(chain, "", "medium");

    assert_output("IF (\"FALSE\")\nBEGIN IF\nDISPLAY: 1\nEND IF\nDISPLAY: 2", "", "2");
}

#[test]
fn non_boolean_condition_is_logic_error() {
    assert!(matches!(runtime_error("IF (1)\nBEGIN IF\nEND IF", ""),
                     RuntimeError::LogicError { .. }));
    assert!(matches!(runtime_error("WHILE (\"x\")\nBEGIN WHILE\nEND WHILE", ""),
                     RuntimeError::LogicError { .. }));
}

#[test]
fn while_loop_cap_is_exactly_the_limit() {
    assert_output("INT i = 0\nWHILE (i < 1000)\nBEGIN WHILE\ni = i + 1\nEND WHILE\nDISPLAY: i",
                  "",
                  "1000");

    let e = runtime_error("INT i = 0\nWHILE (i < 1001)\nBEGIN WHILE\ni = i + 1\nEND WHILE", "");
    assert!(matches!(e, RuntimeError::InfiniteLoop { .. }));
}

#[test]
fn do_while_runs_body_before_guard() {
    assert_output("INT i = 10\nDO\nBEGIN DO\nDISPLAY: i\nEND DO\nWHILE (i < 5)", "", "10");
    assert!(matches!(runtime_error("DO\nBEGIN DO\nEND DO\nWHILE (\"TRUE\")", ""),
                     RuntimeError::InfiniteLoop { .. }));
}

#[test]
fn nested_loops() {
    let body = "INT i = 0, j\nWHILE (i < 3)\nBEGIN WHILE\nj = 0\nWHILE (j < i)\nBEGIN \
                WHILE\nDISPLAY: \"*\"\nj = j + 1\nEND WHILE\nDISPLAY: $\ni = i + 1\nEND WHILE";
    assert_output(body, "", "\n*\n**\n");
}

#[test]
fn scan_converts_to_declared_types() {
    assert_output("INT a\nFLOAT b\nBOOL c\nCHAR d\nSCAN: a, b, c, d\nDISPLAY: a & b & c & d",
                  "1, 2.5, true, q\n",
                  "12.5TRUEq");
}

#[test]
fn scan_accepts_fewer_values_than_names() {
    assert_output("INT a = 7, b = 8\nSCAN: a, b\nDISPLAY: a & b", "1\n", "18");
}

#[test]
fn scan_count_errors() {
    let e = runtime_error("INT a\nSCAN: a", "\n");
    assert!(matches!(e, RuntimeError::InvalidScanInputCount { expected: 1, found: 0, .. }));

    let e = runtime_error("INT a\nSCAN: a", "");
    assert!(matches!(e, RuntimeError::InvalidScanInputCount { found: 0, .. }));

    let e = runtime_error("INT a\nSCAN: a", "1, 2\n");
    assert!(matches!(e, RuntimeError::InvalidScanInputCount { expected: 1, found: 2, .. }));
}

#[test]
fn scan_format_error_message() {
    let e = runtime_error("INT a, b\nSCAN: a, b", "5, x\n");
    assert_eq!(e.to_string(),
               "Error: in Input Scan, in line 3 -> input 'x' is not in the expected format for \
                data type INT.");

    assert!(matches!(runtime_error("SCAN: z", "1\n"), RuntimeError::UndeclaredVariable { .. }));
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_error("DISPLAY: 1"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("BEGIN CODE\nDISPLAY: 1\n"),
                     ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error(&program("INT x = 1 2")), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error(&program("DISPLAY: 1 @ 2")),
                     ParseError::UnrecognizedInput { .. }));
    assert!(matches!(parse_error(&program("DISPLAY: 99999999999")),
                     ParseError::LiteralTooLarge { .. }));
    assert!(matches!(parse_error(&program("IF (\"TRUE\")\nBEGIN WHILE\nEND WHILE")),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("BEGIN CODE\nEND CODE\nDISPLAY: 1"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn smallest_integer_is_not_a_literal() {
    let e = parse_error(&program("INT x = -2147483648"));
    assert!(matches!(e, ParseError::LiteralTooLarge { ref text, .. } if text == "2147483648"));

    assert_output("INT x = -2147483647 - 1\nDISPLAY: x", "", "-2147483648");
}

#[test]
fn syntax_error_stops_before_execution() {
    let (result, output) = run(&program("DISPLAY: 1\nDISPLAY: )"), "");
    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(output, "");
}

#[test]
fn empty_program_runs() {
    assert_output("", "", "");
    let (result, _) = run("\n\nBEGIN CODE\nEND CODE", "");
    assert!(result.is_ok());
}
