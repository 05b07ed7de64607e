//! egui front end

use crate::display::Language;
use crate::evaluator::Operator;
use crate::settings::CalcSettings;
use crate::shell::{Action, Calculator, Field, Shortcut};
use egui::{Color32, Context, Key, Modifiers};
use minicore::repaint::RepaintController;
use minicore::theme::{menu_bar, CalcColors, CalcTheme};

const FIELD_WIDTH: f32 = 140.0;
const BUTTON_HEIGHT: f32 = 36.0;
const CLEAR_HEIGHT: f32 = 26.0;
const DISPLAY_HEIGHT: f32 = 24.0;

fn field_id(field: Field) -> egui::Id {
    match field {
        Field::OperandA => egui::Id::new("operand_a"),
        Field::OperandB => egui::Id::new("operand_b"),
    }
}

fn operator_fill(op: Operator) -> Color32 {
    match op {
        Operator::Add => CalcColors::GREEN,
        Operator::Subtract => CalcColors::ORANGE,
        Operator::Multiply => CalcColors::BLUE,
        Operator::Divide => CalcColors::PINK,
    }
}

pub struct MiniCalcApp {
    calc: Calculator,
    settings: CalcSettings,
    theme: CalcTheme,
    show_about: bool,
    repaint: RepaintController,
}

impl MiniCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: CalcSettings) -> Self {
        Self {
            calc: Calculator::new(settings.language, settings.enter_operator),
            settings,
            theme: CalcTheme::default(),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "user action");
        self.calc.apply(action);
        self.repaint.mark_needs_repaint();
    }

    /// Runs before any widget is drawn. Both keys are consumed so a focused
    /// button or text field never sees them as well.
    fn handle_keys(&mut self, ctx: &Context) {
        let shortcuts: Vec<Shortcut> = ctx.input_mut(|i| {
            let mut pressed = Vec::new();
            if i.consume_key(Modifiers::NONE, Key::Enter) {
                pressed.push(Shortcut::Enter);
            }
            if i.consume_key(Modifiers::NONE, Key::Escape) {
                pressed.push(Shortcut::Escape);
            }
            pressed
        });
        for shortcut in shortcuts {
            self.apply(shortcut.action(self.calc.enter_operator()));
        }
    }

    fn apply_focus_request(&mut self, ctx: &Context) {
        if let Some(field) = self.calc.take_focus_request() {
            ctx.memory_mut(|mem| mem.request_focus(field_id(field)));
            self.repaint.mark_needs_repaint();
        }
    }

    fn settings_changed(&mut self, ctx: &Context) {
        self.calc.set_language(self.settings.language);
        self.calc.set_enter_operator(self.settings.enter_operator);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(
            self.settings.language.messages().title.to_string(),
        ));
        self.settings.save();
    }

    fn render_menu(&mut self, ctx: &Context) {
        let m = self.settings.language.messages();
        let mut changed = false;

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button(m.settings, |ui| {
                    ui.label(m.enter_key);
                    for op in Operator::ALL {
                        if ui.selectable_label(self.settings.enter_operator == op, op.symbol()).clicked() {
                            self.settings.enter_operator = op;
                            changed = true;
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    ui.label(m.language);
                    for language in Language::ALL {
                        if ui.selectable_label(self.settings.language == language, language.native_name()).clicked() {
                            self.settings.language = language;
                            changed = true;
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button(m.help, |ui| {
                    if ui.button(m.about).clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        if changed {
            self.settings_changed(ctx);
        }
    }

    fn render_fields(&mut self, ui: &mut egui::Ui) {
        let m = self.calc.language().messages();
        ui.horizontal(|ui| {
            for field in [Field::OperandA, Field::OperandB] {
                ui.vertical(|ui| {
                    let (label, text) = match field {
                        Field::OperandA => (m.operand_a, &mut self.calc.operand_a),
                        Field::OperandB => (m.operand_b, &mut self.calc.operand_b),
                    };
                    ui.label(label);
                    ui.add(
                        egui::TextEdit::singleline(text)
                            .id(field_id(field))
                            .desired_width(FIELD_WIDTH),
                    );
                });
            }
        });
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let m = self.calc.language().messages();
        ui.label(m.result);
        CalcTheme::display_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(DISPLAY_HEIGHT);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.calc.display())
                        .font(self.theme.display_font())
                        .strong(),
                );
            });
        });
    }

    fn render_buttons(&self, ui: &mut egui::Ui) -> Option<Action> {
        let m = self.calc.language().messages();
        let mut action = None;

        let spacing = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - 3.0 * spacing) / 4.0;
        ui.horizontal(|ui| {
            for op in Operator::ALL {
                let button = egui::Button::new(
                    egui::RichText::new(op.symbol()).font(self.theme.display_font()),
                )
                .fill(operator_fill(op));
                if ui.add_sized([btn_w, BUTTON_HEIGHT], button).clicked() {
                    action = Some(Action::Evaluate(op));
                }
            }
        });

        ui.add_space(6.0);
        let width = ui.available_width();
        if ui.add_sized([width, CLEAR_HEIGHT], egui::Button::new(m.clear)).clicked() {
            action = Some(Action::Clear);
        }
        action
    }

    fn render_about(&mut self, ctx: &Context) {
        let m = self.calc.language().messages();
        egui::Window::new(m.about)
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(m.title);
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label(m.about_text);
                    ui.add_space(4.0);
                    ui.label("Enter / Esc");
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    /// Draw one frame. Split out of `update` so it can run without a window.
    pub fn draw(&mut self, ctx: &Context) {
        self.repaint.begin_frame(ctx);
        tracing::trace!(frame = self.repaint.frame(), reason = ?self.repaint.reason(), "draw");
        self.handle_keys(ctx);
        self.render_menu(ctx);

        let mut action = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CalcColors::WHITE)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                CalcTheme::panel_frame().show(ui, |ui| {
                    self.render_fields(ui);
                    ui.add_space(8.0);
                    self.render_display(ui);
                    ui.add_space(10.0);
                    action = self.render_buttons(ui);
                });
            });
        if let Some(action) = action {
            self.apply(action);
        }

        if self.show_about {
            self.render_about(ctx);
        }

        self.apply_focus_request(ctx);
        self.repaint.end_frame(ctx);
    }
}

impl eframe::App for MiniCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.draw(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minicore::repaint::RepaintReason;

    fn run_frame(app: &mut MiniCalcApp, ctx: &Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.draw(ctx));
    }

    fn press(app: &mut MiniCalcApp, ctx: &Context, key: Key) {
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            }],
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.draw(ctx));
    }

    fn app_with_operands(ctx: &Context, a: &str, b: &str) -> MiniCalcApp {
        let mut app = MiniCalcApp::with_settings(CalcSettings::default());
        run_frame(&mut app, ctx);
        app.calc.operand_a = a.into();
        app.calc.operand_b = b.into();
        app
    }

    #[test]
    fn test_enter_key_adds() {
        let ctx = Context::default();
        let mut app = app_with_operands(&ctx, "8", "2");
        assert_eq!(app.repaint.reason(), RepaintReason::Init);
        press(&mut app, &ctx, Key::Enter);
        assert_eq!(app.calculator().display(), "10");
        assert_eq!(app.repaint.reason(), RepaintReason::Input);
        assert_eq!(app.repaint.frame(), 2);
    }

    #[test]
    fn test_enter_key_adds_whatever_has_focus() {
        // Tabbing walks A, B, the four operator buttons, then Clear
        for tabs in 0..=6 {
            let ctx = Context::default();
            let mut app = app_with_operands(&ctx, "8", "2");
            for _ in 0..tabs {
                press(&mut app, &ctx, Key::Tab);
            }
            press(&mut app, &ctx, Key::Enter);
            assert_eq!(app.calculator().display(), "10", "after {} tabs", tabs);
            assert_eq!(app.calculator().operand_a, "8", "after {} tabs", tabs);
            assert_eq!(app.calculator().operand_b, "2", "after {} tabs", tabs);
        }
    }

    #[test]
    fn test_enter_key_evaluates_once() {
        let ctx = Context::default();
        let mut app = app_with_operands(&ctx, "8", "2");
        press(&mut app, &ctx, Key::Enter);
        // Changing an operand without pressing anything leaves the display alone
        app.calc.operand_b = "0".into();
        run_frame(&mut app, &ctx);
        assert_eq!(app.calculator().display(), "10");
    }

    #[test]
    fn test_escape_key_clears_and_refocuses() {
        let ctx = Context::default();
        let mut app = app_with_operands(&ctx, "8", "2");
        press(&mut app, &ctx, Key::Enter);
        for _ in 0..3 {
            press(&mut app, &ctx, Key::Tab);
        }

        press(&mut app, &ctx, Key::Escape);
        assert!(app.calculator().operand_a.is_empty());
        assert!(app.calculator().operand_b.is_empty());
        assert_eq!(app.calculator().display(), "");

        run_frame(&mut app, &ctx);
        assert_eq!(ctx.memory(|mem| mem.focused()), Some(field_id(Field::OperandA)));
    }

    #[test]
    fn test_focus_request_consumed_by_frame() {
        let ctx = Context::default();
        let mut app = MiniCalcApp::with_settings(CalcSettings::default());
        run_frame(&mut app, &ctx);
        assert_eq!(app.calc.take_focus_request(), None);

        app.apply(Action::Clear);
        assert_eq!(app.calc.take_focus_request(), Some(Field::OperandA));
    }

    #[test]
    fn test_settings_flow_into_calculator() {
        let settings = CalcSettings {
            enter_operator: Operator::Subtract,
            language: Language::German,
        };
        let app = MiniCalcApp::with_settings(settings);
        assert_eq!(app.calculator().enter_operator(), Operator::Subtract);
        assert_eq!(app.calculator().language(), Language::German);
    }

    #[test]
    fn test_action_updates_display() {
        let ctx = Context::default();
        let mut app = MiniCalcApp::with_settings(CalcSettings::default());
        app.calc.operand_a = "8".into();
        app.calc.operand_b = "2".into();
        app.apply(Action::Evaluate(Operator::Divide));
        run_frame(&mut app, &ctx);
        assert_eq!(app.calculator().display(), "4");
    }

    #[test]
    fn test_operator_fills_distinct() {
        let fills: Vec<_> = Operator::ALL.iter().map(|op| operator_fill(*op)).collect();
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
