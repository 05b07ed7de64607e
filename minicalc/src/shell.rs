//! Calculator window state, independent of egui.
//!
//! The window reads `operand_a`, `operand_b` and `display` from here and
//! feeds user actions back in. Arithmetic happens only in
//! [`crate::evaluator::evaluate`]; this type stores what it returns.

use crate::display::{render, Language};
use crate::evaluator::{evaluate, EvaluationResult, Operator};

/// The two input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OperandA,
    OperandB,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Evaluate(Operator),
    Clear,
}

/// Window-wide keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Enter,
    Escape,
}

impl Shortcut {
    /// Resolve to an action, using `enter_operator` for Enter.
    pub fn action(self, enter_operator: Operator) -> Action {
        match self {
            Shortcut::Enter => Action::Evaluate(enter_operator),
            Shortcut::Escape => Action::Clear,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    pub operand_a: String,
    pub operand_b: String,
    display: String,
    last: Option<EvaluationResult>,
    focus_request: Option<Field>,
    language: Language,
    enter_operator: Operator,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Language::default(), Operator::Add)
    }
}

impl Calculator {
    pub fn new(language: Language, enter_operator: Operator) -> Self {
        Self {
            operand_a: String::new(),
            operand_b: String::new(),
            display: String::new(),
            last: None,
            focus_request: Some(Field::OperandA),
            language,
            enter_operator,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn last_result(&self) -> Option<EvaluationResult> {
        self.last
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn enter_operator(&self) -> Operator {
        self.enter_operator
    }

    /// Switch language; an error already on the display is re-rendered.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if let Some(result) = &self.last {
            self.display = render(result, language);
        }
    }

    pub fn set_enter_operator(&mut self, operator: Operator) {
        self.enter_operator = operator;
    }

    /// Evaluate the current operands and show the result.
    pub fn evaluate(&mut self, operator: Operator) -> EvaluationResult {
        let result = evaluate(&self.operand_a, &self.operand_b, operator);
        self.display = render(&result, self.language);
        self.last = Some(result);
        result
    }

    /// Empty both fields and the display, then focus operand A.
    pub fn clear(&mut self) {
        self.operand_a.clear();
        self.operand_b.clear();
        self.display.clear();
        self.last = None;
        self.focus_request = Some(Field::OperandA);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Evaluate(operator) => {
                self.evaluate(operator);
            }
            Action::Clear => self.clear(),
        }
    }

    pub fn handle_shortcut(&mut self, shortcut: Shortcut) {
        self.apply(shortcut.action(self.enter_operator));
    }

    /// Pending focus change, handed out once.
    pub fn take_focus_request(&mut self) -> Option<Field> {
        self.focus_request.take()
    }
}
