use rpn_calc::{CalcError, Calculator};

fn evaluate(expression: &str) -> Result<f64, CalcError> {
    Calculator::new().evaluate_expression(expression)
}

fn is_domain_error(result: Result<f64, CalcError>) -> bool {
    matches!(result, Err(CalcError::domain(_)))
}

#[test]
fn arithmetic() {
    assert_eq!(evaluate("6 3 /"), Ok(2.0));
    assert_eq!(evaluate("1 2 3 + +"), Ok(6.0));
    assert_eq!(evaluate("5 5 + 3 *"), Ok(30.0));
    assert_eq!(evaluate("2 3 ^"), Ok(8.0));
    assert_eq!(evaluate("16 sqrt"), Ok(4.0));
}

#[test]
fn division_by_zero_keeps_operands() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.evaluate_expression("5 0 /"), Err(CalcError::division_by_zero));
    assert_eq!(calculator.pop(), Ok(0.0));
    assert_eq!(calculator.pop(), Ok(5.0));
    assert_eq!(calculator.pop(), Err(CalcError::stack_underflow));
}

#[test]
fn fibonacci() {
    assert_eq!(evaluate("10 fib"), Ok(55.0));
    assert!(is_domain_error(evaluate("-1 fib")));
    assert!(is_domain_error(evaluate("2.5 fib")));
}

#[test]
fn pascal() {
    assert_eq!(evaluate("5 2 pascal"), Ok(10.0));
    assert!(is_domain_error(evaluate("2 5 pascal")));
}

#[test]
fn trigonometry() {
    let sine = evaluate("90 sin").unwrap();
    assert!((sine - 1.0).abs() < 1e-9);
    assert!(is_domain_error(evaluate("90 tan")));
}

#[test]
fn malformed_and_invalid_input() {
    assert_eq!(evaluate("1 2"), Err(CalcError::malformed_expression(2)));
    assert_eq!(evaluate(""), Err(CalcError::malformed_expression(0)));
    assert_eq!(evaluate("foo"), Err(CalcError::invalid_input("foo".into())));
    assert_eq!(evaluate("+"), Err(CalcError::stack_underflow));
}

#[test]
fn history_records_successes_only() {
    let mut calculator = Calculator::new();
    assert_eq!(calculator.evaluate_expression("3 4 +"), Ok(7.0));
    assert!(calculator.evaluate_expression("foo").is_err());

    let lines: Vec<String> = calculator.display_history().collect();
    assert_eq!(lines, vec!["1. 3 4 + = 7".to_string()]);
    assert_eq!(calculator.history().entries()[0].to_string(), "3 4 + = 7");

    calculator.clear_history();
    assert_eq!(calculator.display_history().count(), 0);
}

#[test]
fn batch_keeps_going_after_a_failure() {
    let mut calculator = Calculator::new();
    let results = calculator.evaluate_batch(&["2 3 +", "1 0 /", "5 1 -"]);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], 5.0);
    assert!(results[1].is_nan());
    assert_eq!(results[2], 4.0);
    assert_eq!(calculator.history().len(), 2);
}

#[test]
fn error_messages() {
    assert_eq!(CalcError::stack_underflow.to_string(), "stack underflow");
    assert_eq!(CalcError::division_by_zero.to_string(), "division by zero");
    assert_eq!(
        evaluate("bar").unwrap_err().to_string(),
        "'bar' is neither a number nor an operation"
    );
    assert_eq!(
        evaluate("90 tan").unwrap_err().to_string(),
        "tangent is undefined at 90 degrees"
    );
}
