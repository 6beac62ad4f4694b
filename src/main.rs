//#![windows_subsystem = "windows"]

mod app;

use eframe::NativeOptions;
use egui::ViewportBuilder;

use crate::app::{LaunchConfig, ResponsiveApp};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LaunchConfig::default();
    let title = config.title.clone();

    let mut viewport = ViewportBuilder::default()
        .with_title(&title)
        .with_resizable(true);
    if let Some((width, height)) = config.initial_size() {
        viewport = viewport.with_inner_size((width as f32, height as f32));
    }

    let native_options = NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(ResponsiveApp::new(cc, &config)))),
    )
}
