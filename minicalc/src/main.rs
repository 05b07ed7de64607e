//! Mini-Rechner - add, subtract, multiply or divide two numbers

use eframe::NativeOptions;
use minicalc::app::MiniCalcApp;
use minicalc::settings::CalcSettings;
use minicore::CalcTheme;

fn main() -> eframe::Result<()> {
    minicore::logging::init();

    let settings = CalcSettings::load();
    tracing::info!(
        language = ?settings.language,
        enter_operator = ?settings.enter_operator,
        "starting minicalc"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 300.0])
            .with_resizable(false)
            .with_title(settings.language.messages().title),
        ..Default::default()
    };

    eframe::run_native(
        "minicalc",
        options,
        Box::new(move |cc| {
            CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(MiniCalcApp::new(cc, settings))
        }),
    )
}
