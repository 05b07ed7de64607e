//! Input-driven repaint scheduling.
//!
//! egui redraws on every frame it is asked for. A calculator only changes
//! when the user types or clicks, so `RepaintController` lets the app sleep
//! between input events and asks for exactly one extra frame when state
//! changed outside of input handling (for example a focus request that only
//! takes effect on the following frame).

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (mouse, key press, scroll).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
}

/// Decide the repaint reason from the frame counter and pending flags.
pub fn classify(frame: u64, had_input: bool, needs_repaint: bool) -> RepaintReason {
    if frame == 0 {
        RepaintReason::Init
    } else if needs_repaint && !had_input {
        RepaintReason::StateChange
    } else {
        RepaintReason::Input
    }
}

/// Call [`RepaintController::begin_frame`] at the top of `update()` and
/// [`RepaintController::end_frame`] at the bottom.
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request one more frame after the current one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.raw_scroll_delta != egui::Vec2::ZERO
                || i.pointer.is_moving()
        });
        self.reason = classify(self.frame, had_input, self.needs_repaint);
        self.needs_repaint = false;
    }

    /// Schedules an immediate repaint if something was marked dirty during
    /// this frame; otherwise egui sleeps until the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        }
    }
}
