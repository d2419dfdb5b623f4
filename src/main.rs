mod app;
mod components;
mod dialog;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use state::AppState;

const MIN_WINDOW_WIDTH: u32 = 360;
const WINDOW_HEIGHT: u32 = 720;

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();

    let initial_state = AppState::load();
    let width = initial_state
        .config
        .theme
        .screen_width
        .max(MIN_WINDOW_WIDTH);

    let window_builder = WindowBuilder::new()
        .with_title("Alert Dialog")
        .with_inner_size(LogicalSize::new(width as f64, WINDOW_HEIGHT as f64));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_menu(None).with_window(window_builder))
        .with_context(initial_state)
        .launch(app::App);
}
