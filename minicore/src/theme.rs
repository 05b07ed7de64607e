//! Calculator theme
//!
//! Flat light look: white panels, 1px black outlines, no rounding, no
//! shadows. Operator buttons get a pastel accent each.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const GREEN: Color32 = Color32::from_rgb(0xd9, 0xea, 0xd3);
    pub const ORANGE: Color32 = Color32::from_rgb(0xfc, 0xe5, 0xcd);
    pub const BLUE: Color32 = Color32::from_rgb(0xcf, 0xe2, 0xf3);
    pub const PINK: Color32 = Color32::from_rgb(0xea, 0xd1, 0xdc);
}

/// Theme configuration for the calculator window
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_display: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 12.0,
            font_size_display: 14.0,
            font_size_small: 10.0,
            window_padding: 16.0,
            item_spacing: 6.0,
        }
    }
}

impl CalcTheme {
    /// Font used for the result display and operator buttons.
    pub fn display_font(&self) -> FontId {
        FontId::new(self.font_size_display, FontFamily::Proportional)
    }

    /// Build the egui style without touching a context.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, self.display_font()),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.extreme_bg_color = CalcColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(6.0, 2.0);
        style
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Result display: white fill, 2px black outline, roomy margins
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(Stroke::new(2.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::symmetric(10.0, 8.0))
    }

    /// Grouping frame around the whole calculator
    pub fn panel_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(Stroke::new(2.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::same(14.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::WHITE)
        .stroke(Stroke::new(1.0, CalcColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
