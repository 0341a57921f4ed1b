#![windows_subsystem = "windows"]
//! HydroTrek - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod error;
mod markdown;
mod pages;
mod settings;
mod sink;
mod theme;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use settings::{Settings, MIN_WINDOW};
use tracing::{info, warn};
use utils::{get_data_dir, rasterize_icon};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hydrotrek=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "HydroTrek starting");

    let settings = Settings::load(&data_dir);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.window_size())
        .with_min_inner_size(MIN_WINDOW)
        .with_title(APP_NAME);

    // Window/taskbar icon from the embedded SVG
    match rasterize_icon(64) {
        Ok(icon) => {
            viewport = viewport.with_icon(std::sync::Arc::new(egui::IconData {
                rgba: icon.pixels,
                width: icon.width,
                height: icon.height,
            }));
        }
        Err(e) => warn!(error = %e, "Failed to rasterize window icon"),
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &settings)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_logo(ctx);

        // Arrow keys walk the sidebar (when no text field has focus)
        if !ctx.wants_keyboard_input() {
            let delta = ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowDown) {
                    1
                } else if i.key_pressed(egui::Key::ArrowUp) {
                    -1
                } else {
                    0
                }
            });
            if delta != 0 && self.nav.step(delta) {
                self.scroll_to_top = true;
            }
        }

        // Left sidebar - page selection (must be added BEFORE CentralPanel)
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| self.render_sidebar(ui));

        // Central panel - current page (MUST be added LAST)
        egui::CentralPanel::default()
            .frame(theme::content_frame())
            .show(ctx, |ui| self.render_page(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(page = self.nav.current(), "Application shutting down");
    }
}
