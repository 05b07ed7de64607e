//! minicalc — a two-field desktop calculator
//!
//! [`evaluator`] holds the arithmetic, [`shell`] the window state,
//! [`display`] the text that ends up on screen and [`app`] the egui front end.

pub mod app;
pub mod display;
pub mod evaluator;
pub mod settings;
pub mod shell;

pub use evaluator::{evaluate, EvaluationResult, Operator};
