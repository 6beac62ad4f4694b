mod browser;
mod gui;
mod preset;
mod resizer;

use eframe::CreationContext;

use crate::app::{
    browser::Surface,
    gui::ViewportWindow,
    preset::PresetTable,
    resizer::PresetResizer,
};

pub const TARGET_URL: &str = "http://localhost:3000/reservation/app";
pub const WINDOW_TITLE: &str = "Responsive Test";

/// Everything the window is built from. There are no flags or settings files,
/// the defaults are the whole configuration.
pub struct LaunchConfig {
    pub url: String,
    pub title: String,
    pub presets: PresetTable,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            url: TARGET_URL.to_owned(),
            title: WINDOW_TITLE.to_owned(),
            presets: PresetTable::device_presets(),
        }
    }
}

impl LaunchConfig {
    pub fn initial_size(&self) -> Option<(u32, u32)> {
        self.presets.default_preset().map(|p| p.size())
    }
}

pub struct ResponsiveApp {
    resizer: PresetResizer<ViewportWindow, Surface>,
}

impl ResponsiveApp {
    pub fn new(cc: &CreationContext<'_>, config: &LaunchConfig) -> Self {
        let surface = Surface::create(cc);
        Self::with_surface(&cc.egui_ctx, config, surface)
    }

    fn with_surface(ctx: &egui::Context, config: &LaunchConfig, surface: Surface) -> Self {
        log::info!(
            "opening {} with {} presets",
            config.url,
            config.presets.len()
        );

        // keyboard zoom would change the points-per-pixel that presets are converted with
        ctx.options_mut(|o| o.zoom_with_keyboard = false);

        let window = ViewportWindow::new(ctx.clone());
        let resizer = PresetResizer::new(&config.url, &config.title, &config.presets, window, surface);

        ResponsiveApp { resizer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LaunchConfig::default();
        assert_eq!(config.url, "http://localhost:3000/reservation/app");
        assert_eq!(config.title, "Responsive Test");
        assert_eq!(config.presets.len(), 4);
        assert_eq!(config.initial_size(), Some((1366, 768)));
    }

    #[test]
    fn test_keyboard_zoom_disabled() {
        let ctx = egui::Context::default();
        let config = LaunchConfig::default();
        let _app = ResponsiveApp::with_surface(&ctx, &config, Surface::detached());
        assert!(!ctx.options(|o| o.zoom_with_keyboard));
    }

    #[test]
    fn test_empty_config_has_no_initial_size() {
        let config = LaunchConfig {
            presets: PresetTable::new(),
            ..Default::default()
        };
        assert_eq!(config.initial_size(), None);
    }
}
