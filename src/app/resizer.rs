//! Toolkit-neutral core of the resizer window.
//!
//! The window and the embedded browser are reached only through the
//! [`WindowHost`] and [`BrowserSurface`] traits, so the preset wiring can be
//! driven without a display.

use crate::app::preset::{Preset, PresetTable};

/// Area, in logical points, that the browser surface should cover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub trait WindowHost {
    fn set_title(&mut self, title: &str);
    fn resize(&mut self, width: u32, height: u32);
    fn inner_size(&self) -> (u32, u32);
}

pub trait BrowserSurface {
    /// Starts loading `url`. Whether the page loads is up to the surface.
    fn navigate(&mut self, url: &str);
    /// Lays the surface out over `bounds` inside its parent window.
    fn fill(&mut self, bounds: Bounds);
}

type ResizeAction = Box<dyn Fn(&mut dyn WindowHost)>;

pub struct PresetButton {
    label: String,
    size: (u32, u32),
    on_click: ResizeAction,
}

impl PresetButton {
    fn new(preset: &Preset) -> Self {
        // each action owns its own copy of the size
        let (width, height) = preset.size();
        PresetButton {
            label: preset.name.clone(),
            size: (width, height),
            on_click: Box::new(move |window: &mut dyn WindowHost| {
                window.resize(width, height);
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

pub struct PresetResizer<W, S> {
    window: W,
    surface: S,
    buttons: Vec<PresetButton>,
    active: Option<usize>,
}

impl<W: WindowHost, S: BrowserSurface> PresetResizer<W, S> {
    pub fn new(url: &str, title: &str, presets: &PresetTable, mut window: W, mut surface: S) -> Self {
        window.set_title(title);
        surface.navigate(url);

        let buttons: Vec<PresetButton> = presets.iter().map(PresetButton::new).collect();

        if presets.is_empty() {
            log::warn!("no presets defined, window keeps its initial size");
        }

        let mut active = None;
        if let Some(default) = presets.default_preset() {
            window.resize(default.width, default.height);
            active = buttons.iter().position(|b| b.label == default.name);
        }

        PresetResizer {
            window,
            surface,
            buttons,
            active,
        }
    }

    pub fn buttons(&self) -> &[PresetButton] {
        &self.buttons
    }

    /// Index of the preset most recently applied to the window.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn activate(&mut self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            log::warn!("ignoring activation of unknown preset button {index}");
            return;
        };
        log::debug!(
            "resizing to {} ({}x{})",
            button.label,
            button.size.0,
            button.size.1
        );
        (button.on_click)(&mut self.window);
        self.active = Some(index);
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
