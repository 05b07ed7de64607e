//! Rendering results and UI text.

use crate::evaluator::EvaluationResult;
use serde::{Deserialize, Serialize};

/// UI language. Affects labels and the error texts in the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
}

/// Every user-visible string for one language.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub title: &'static str,
    pub operand_a: &'static str,
    pub operand_b: &'static str,
    pub result: &'static str,
    pub clear: &'static str,
    pub invalid_input: &'static str,
    pub division_by_zero: &'static str,
    pub settings: &'static str,
    pub enter_key: &'static str,
    pub language: &'static str,
    pub help: &'static str,
    pub about: &'static str,
    pub about_text: &'static str,
}

const ENGLISH: Messages = Messages {
    title: "Mini Calculator",
    operand_a: "Number A",
    operand_b: "Number B",
    result: "Result",
    clear: "Clear (Esc)",
    invalid_input: "Invalid input",
    division_by_zero: "Error: ÷0",
    settings: "settings",
    enter_key: "Enter key",
    language: "language",
    help: "help",
    about: "about",
    about_text: "add, subtract, multiply or divide two numbers",
};

const GERMAN: Messages = Messages {
    title: "Mini-Rechner",
    operand_a: "Zahl A",
    operand_b: "Zahl B",
    result: "Ergebnis",
    clear: "Clear (Esc)",
    invalid_input: "Ungültige Eingabe",
    division_by_zero: "Fehler: ÷0",
    settings: "Einstellungen",
    enter_key: "Enter-Taste",
    language: "Sprache",
    help: "Hilfe",
    about: "Über",
    about_text: "zwei Zahlen addieren, subtrahieren, multiplizieren oder dividieren",
};

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::English => &ENGLISH,
            Language::German => &GERMAN,
        }
    }

    /// Name of the language in itself, for the settings menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
        }
    }
}

/// Render an evaluation result as display text.
pub fn render(result: &EvaluationResult, language: Language) -> String {
    let messages = language.messages();
    match result {
        EvaluationResult::Number(value) => format_number(*value),
        EvaluationResult::DivisionByZero => messages.division_by_zero.to_string(),
        EvaluationResult::InvalidInput => messages.invalid_input.to_string(),
    }
}

/// Format a number for the display.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    // Avoid floating point display issues
    if n == n.floor() && n.abs() < 1e12 {
        format!("{}", n as i64)
    } else if n.abs() >= 1e12 || n.abs() < 1e-6 {
        format!("{:e}", n)
    } else {
        let s = format!("{:.10}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
