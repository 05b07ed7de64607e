//! Two-operand arithmetic.
//!
//! Operands arrive as raw field text. A comma is accepted as the decimal
//! separator, and anything that still fails to parse yields
//! [`EvaluationResult::InvalidInput`] before any operator is looked at.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in button order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Glyph shown on the operator button.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply to already-parsed operands. A zero divisor (either sign) is
    /// reported instead of producing an infinity.
    pub fn apply(self, a: f64, b: f64) -> EvaluationResult {
        match self {
            Operator::Add => EvaluationResult::Number(a + b),
            Operator::Subtract => EvaluationResult::Number(a - b),
            Operator::Multiply => EvaluationResult::Number(a * b),
            Operator::Divide => {
                if b == 0.0 {
                    EvaluationResult::DivisionByZero
                } else {
                    EvaluationResult::Number(a / b)
                }
            }
        }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationResult {
    Number(f64),
    DivisionByZero,
    InvalidInput,
}

impl EvaluationResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            EvaluationResult::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, EvaluationResult::Number(_))
    }
}

/// Parse one operand, treating `,` as a decimal point.
///
/// Surrounding whitespace is ignored. Exponents and `inf`/`nan` are
/// accepted. Digits may be grouped with single underscores (`1_000`), but
/// a comma is always a decimal point: `"1,000"` is `1.0`.
pub fn parse_operand(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    strip_digit_groups(&normalized)?.parse::<f64>().ok()
}

/// Remove `_` separators, each of which must sit between two digits.
fn strip_digit_groups(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !matches!((before, after), (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit()) {
            return None;
        }
    }
    Some(text.replace('_', ""))
}

/// Evaluate `operand_a <operator> operand_b`.
pub fn evaluate(operand_a: &str, operand_b: &str, operator: Operator) -> EvaluationResult {
    let (Some(a), Some(b)) = (parse_operand(operand_a), parse_operand(operand_b)) else {
        tracing::debug!(operand_a, operand_b, "unparseable operand");
        return EvaluationResult::InvalidInput;
    };

    let result = operator.apply(a, b);
    tracing::debug!(a, b, op = operator.symbol(), ?result, "evaluated");
    result
}
