//! minicore — shared library for the Mini-Rechner calculator

pub mod logging;
pub mod repaint;
pub mod storage;
pub mod theme;

pub use repaint::RepaintController;
pub use theme::CalcTheme;
