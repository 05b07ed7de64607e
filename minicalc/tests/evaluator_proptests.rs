//! Property-based tests for the evaluator

use minicalc::display::{render, Language};
use minicalc::{evaluate, EvaluationResult, Operator};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Finite decimals; `Display` output parses back to the same f64.
fn number_strategy() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9f64
}

/// Spellings of zero a user might type into the divisor field.
fn zero_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("0"),
        Just("0.0"),
        Just("0,0"),
        Just("-0"),
        Just(" 0 "),
        Just("0e5"),
    ]
}

/// Letters that can never spell a number (no `e`, `i`, `n`, `f`, `a`).
fn garbage_strategy() -> impl Strategy<Value = String> {
    "[gxyzqw]{1,6}[0-9]{0,3}"
}

/// NaN-safe comparison.
fn same(a: &EvaluationResult, b: &EvaluationResult) -> bool {
    format!("{:?}", a) == format!("{:?}", b)
}

proptest! {
    #[test]
    fn prop_add_matches_float_addition(a in number_strategy(), b in number_strategy()) {
        let result = evaluate(&a.to_string(), &b.to_string(), Operator::Add);
        prop_assert_eq!(result, EvaluationResult::Number(a + b));
    }

    #[test]
    fn prop_comma_equals_dot(a in number_strategy(), b in number_strategy(), op in operator_strategy()) {
        let (dot_a, dot_b) = (a.to_string(), b.to_string());
        let (comma_a, comma_b) = (dot_a.replace('.', ","), dot_b.replace('.', ","));
        prop_assert!(same(&evaluate(&dot_a, &dot_b, op), &evaluate(&comma_a, &comma_b, op)));
    }

    #[test]
    fn prop_zero_divisor(a in number_strategy(), zero in zero_strategy()) {
        prop_assert_eq!(evaluate(&a.to_string(), zero, Operator::Divide), EvaluationResult::DivisionByZero);
    }

    #[test]
    fn prop_nonzero_divisor(a in number_strategy(), b in number_strategy()) {
        prop_assume!(b != 0.0);
        let result = evaluate(&a.to_string(), &b.to_string(), Operator::Divide);
        prop_assert_eq!(result, EvaluationResult::Number(a / b));
    }

    #[test]
    fn prop_garbage_is_invalid(text in garbage_strategy(), b in number_strategy(), op in operator_strategy()) {
        prop_assert_eq!(evaluate(&text, &b.to_string(), op), EvaluationResult::InvalidInput);
        prop_assert_eq!(evaluate(&b.to_string(), &text, op), EvaluationResult::InvalidInput);
    }

    #[test]
    fn prop_invalid_checked_before_zero_divisor(text in garbage_strategy(), zero in zero_strategy()) {
        prop_assert_eq!(evaluate(&text, zero, Operator::Divide), EvaluationResult::InvalidInput);
    }

    #[test]
    fn prop_total_and_deterministic(a in ".*", b in ".*", op in operator_strategy()) {
        let first = evaluate(&a, &b, op);
        let second = evaluate(&a, &b, op);
        prop_assert!(same(&first, &second));
        // Every result renders to something
        prop_assert!(!render(&first, Language::English).is_empty());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(
        evaluate("3,14", "2", Operator::Add),
        evaluate("3.14", "2", Operator::Add)
    );
    assert_eq!(evaluate("5", "0", Operator::Divide), EvaluationResult::DivisionByZero);
    assert_eq!(evaluate("abc", "2", Operator::Add), EvaluationResult::InvalidInput);
    assert_eq!(evaluate("", "2", Operator::Multiply), EvaluationResult::InvalidInput);
    assert_eq!(evaluate("10", "4", Operator::Divide), EvaluationResult::Number(2.5));
    assert_eq!(evaluate("abc", "0", Operator::Divide), EvaluationResult::InvalidInput);
}
