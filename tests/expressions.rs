use recurcalc::{AngleUnit, EvaluationOutcome, evaluate_expression};

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src, AngleUnit::Radian) {
        EvaluationOutcome::Success(value) => {
            assert_eq!(value, expected, "{src} evaluated to {value}, expected {expected}");
        },
        other => panic!("{src} failed: {other}"),
    }
}

fn assert_approx(src: &str, angle_unit: AngleUnit, expected: f64) {
    match evaluate_expression(src, angle_unit) {
        EvaluationOutcome::Success(value) => {
            let tolerance = 1e-9 * expected.abs().max(1.0);
            assert!((value - expected).abs() <= tolerance,
                    "{src} evaluated to {value}, expected about {expected}");
        },
        other => panic!("{src} failed: {other}"),
    }
}

fn assert_parser_failure(src: &str) {
    match evaluate_expression(src, AngleUnit::Radian) {
        EvaluationOutcome::ParserFailure(message) => {
            assert!(message.starts_with("Parser error: "), "unexpected message {message}");
        },
        other => panic!("{src} was expected to be rejected by the parser, got {other:?}"),
    }
}

#[test]
fn single_numbers() {
    assert_value("42", 42.0);
    assert_value("3.5", 3.5);
    assert_value("2.5e3", 2500.0);
    assert_value("1E-2", 0.01);
}

#[test]
fn basic_arithmetic() {
    assert_value("1+1", 2.0);
    assert_value("5-3", 2.0);
    assert_value("4*2", 8.0);
    assert_value("8/2", 4.0);
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("2+3*4-5/5", 13.0);
    assert_value("10/2+3*2", 11.0);
    assert_value("2*3^2", 18.0);
    assert_value("(2+3)*4", 20.0);
}

#[test]
fn left_associativity() {
    assert_value("10-4-3", 3.0);
    assert_value("64/4/2", 8.0);
    assert_value("2^3^2", 64.0);
}

#[test]
fn parenthesized_expressions() {
    assert_approx("1+2/(3+4)", AngleUnit::Radian, 1.285_714_285_714_285_6);
    assert_value("((((7))))", 7.0);
    assert_value("(1+(2*(3+(4))))", 15.0);
}

#[test]
fn unary_minus() {
    assert_value("-3", -3.0);
    assert_value("--3", 3.0);
    assert_value("2*-3", -6.0);
    assert_value("-2^2", 4.0);
    assert_value("-(2^2)", -4.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn whitespace_is_ignored() {
    assert_value(" 2 +\t3 * 4\n", 14.0);
    assert_value("1 2 + 3", 15.0);
    assert_value("2 e 3", 2000.0);
    assert_approx("s q r t ( 1 6 )", AngleUnit::Radian, 4.0);
}

#[test]
fn exponentiation() {
    assert_value("3^4", 81.0);
    assert_approx("3.375e9^(1/3)", AngleUnit::Radian, 1500.0);
    assert_approx("4^0.5", AngleUnit::Radian, 2.0);
    assert_value("2^-2", 0.25);
}

#[test]
fn functions_and_constants() {
    assert_approx("sqrt(ln(e))", AngleUnit::Radian, 1.0);
    assert_approx("exp(ln(2))", AngleUnit::Radian, 2.0);
    assert_approx("sin(pi/2)", AngleUnit::Radian, 1.0);
    assert_approx("cos(pi)", AngleUnit::Radian, -1.0);
    assert_approx("tg(pi/4)", AngleUnit::Radian, 1.0);
    assert_approx("ctg(pi/4)", AngleUnit::Radian, 1.0);
    assert_approx("exp1", AngleUnit::Radian, std::f64::consts::E);
    assert_approx("sqrt16+1", AngleUnit::Radian, 5.0);
    assert_approx("2*pi", AngleUnit::Radian, std::f64::consts::TAU);
}

#[test]
fn degree_mode() {
    assert_approx("sin(90)", AngleUnit::Degree, 1.0);
    assert_approx("cos(180)", AngleUnit::Degree, -1.0);
    assert_approx("tg(45)", AngleUnit::Degree, 1.0);
    assert_approx("ctg(45)", AngleUnit::Degree, 1.0);
    // Only trigonometric arguments are converted.
    assert_approx("sqrt(81)+sin(30)", AngleUnit::Degree, 9.5);
    assert_approx("exp(0)", AngleUnit::Degree, 1.0);
}

#[test]
fn division_by_zero_is_an_evaluation_failure() {
    let expected = EvaluationOutcome::EvaluationFailure("Error during evaluation: Division by zero.".to_string());
    assert_eq!(evaluate_expression("1/0", AngleUnit::Radian), expected);
    assert_eq!(evaluate_expression("5/(2-2)", AngleUnit::Radian), expected);
    assert_eq!(evaluate_expression("1/-0", AngleUnit::Radian), expected);
    assert_eq!(evaluate_expression("sqrt(1/0)", AngleUnit::Radian), expected);
}

#[test]
fn incomplete_expression_reports_invalid_number() {
    assert_eq!(evaluate_expression("1/", AngleUnit::Radian),
               EvaluationOutcome::ParserFailure("Parser error: Invalid number at position 2.".to_string()));
    assert_parser_failure("2+");
    assert_parser_failure("3*");
    assert_parser_failure("2+*3");
}

#[test]
fn invalid_characters_are_rejected() {
    assert_parser_failure("2+3a");
    assert_parser_failure("1+4j");
    assert_parser_failure("2+3@5");
    assert_parser_failure("1+2#3");
    assert_parser_failure("0; import os; os.system('echo hello')");
    assert_parser_failure("__import__('os')");
    assert_eq!(evaluate_expression("2+3@5", AngleUnit::Radian).message(),
               Some("Parser error: Unexpected character '@' at position 3."));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(evaluate_expression("(1+2", AngleUnit::Radian).message(),
               Some("Parser error: Mismatched parentheses at position 4."));
    assert_eq!(evaluate_expression("1+2)", AngleUnit::Radian).message(),
               Some("Parser error: Incomplete or invalid expression at position 3."));
}

#[test]
fn overflow_is_not_an_error() {
    assert_eq!(evaluate_expression("1e300/1e-300", AngleUnit::Radian),
               EvaluationOutcome::Success(f64::INFINITY));
    assert_eq!(evaluate_expression("1e308*10", AngleUnit::Radian),
               EvaluationOutcome::Success(f64::INFINITY));
    assert_eq!(evaluate_expression("-1e308*10", AngleUnit::Radian),
               EvaluationOutcome::Success(f64::NEG_INFINITY));
}

#[test]
fn nan_is_a_result() {
    for src in ["(-8)^(1/3)", "sqrt(-1)", "ln(-1)", "1e308*10-1e308*10"] {
        let outcome = evaluate_expression(src, AngleUnit::Radian);
        assert!(outcome.value().is_some_and(f64::is_nan), "{src} gave {outcome:?}");
    }
}

#[test]
fn outcome_display() {
    assert_eq!(evaluate_expression("2+3*4", AngleUnit::Radian).to_string(), "Result: 14.0");
    assert_eq!(evaluate_expression("1/4", AngleUnit::Radian).to_string(), "Result: 0.25");
    assert_eq!(evaluate_expression("1/0", AngleUnit::Radian).to_string(),
               "Error during evaluation: Division by zero.");
}

#[test]
fn outcome_accessors() {
    let success = evaluate_expression("6*7", AngleUnit::Radian);
    assert!(success.is_success());
    assert_eq!(success.value(), Some(42.0));
    assert_eq!(success.message(), None);

    let failure = evaluate_expression("6*", AngleUnit::Radian);
    assert!(!failure.is_success());
    assert_eq!(failure.value(), None);
    assert!(failure.message().is_some());
}

#[test]
fn deep_nesting_is_a_parser_failure() {
    let src = format!("{}1", "-".repeat(200_000));
    assert_eq!(evaluate_expression(&src, AngleUnit::Radian).message(),
               Some("Parser error: Expression nested too deeply at position 128."));

    let src = format!("{}1", "-".repeat(127));
    assert_value(&src, -1.0);
}

#[test]
fn long_operator_chains() {
    assert_value(&format!("{}1", "1+".repeat(200_000)), 200_001.0);
    assert_value(&format!("{}1", "2*".repeat(100_000)), f64::INFINITY);
    assert_value(&format!("1{}", "^1".repeat(100_000)), 1.0);
}
