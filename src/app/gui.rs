use std::time::Duration;

use eframe::App;
use eframe::Frame;
use egui::ViewportCommand;

use super::ResponsiveApp;
use crate::app::browser;
use crate::app::resizer::{Bounds, BrowserSurface, WindowHost};

// keeps the gtk loop behind the webview serviced while egui is idle
const PUMP_INTERVAL: Duration = Duration::from_millis(16);

/// [`WindowHost`] over the root eframe viewport.
///
/// Sizes are logical pixels. egui works in points, which differ from logical
/// pixels by the context's zoom factor.
pub struct ViewportWindow {
    ctx: egui::Context,
    requested: (u32, u32),
}

impl ViewportWindow {
    pub fn new(ctx: egui::Context) -> Self {
        ViewportWindow {
            ctx,
            requested: (0, 0),
        }
    }
}

impl WindowHost for ViewportWindow {
    fn set_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(ViewportCommand::Title(title.to_owned()));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.requested = (width, height);
        let zoom = self.ctx.zoom_factor();
        self.ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(
            width as f32 / zoom,
            height as f32 / zoom,
        )));
    }

    /// Size reported by the windowing system, or the last requested one
    /// before the first report arrives.
    fn inner_size(&self) -> (u32, u32) {
        let zoom = self.ctx.zoom_factor();
        self.ctx
            .input(|i| i.viewport().inner_rect)
            .map(|rect| {
                (
                    (rect.width() * zoom).round() as u32,
                    (rect.height() * zoom).round() as u32,
                )
            })
            .unwrap_or(self.requested)
    }
}

fn logical_bounds(rect: egui::Rect, zoom: f32) -> Bounds {
    Bounds {
        x: rect.min.x * zoom,
        y: rect.min.y * zoom,
        width: rect.width() * zoom,
        height: rect.height() * zoom,
    }
}

impl ResponsiveApp {
    pub(super) fn ui(&mut self, ctx: &egui::Context) {
        let mut clicked = None;
        egui::TopBottomPanel::top("presets").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, button) in self.resizer.buttons().iter().enumerate() {
                    let (width, height) = button.size();
                    let selected = self.resizer.active() == Some(index);
                    if ui
                        .add(egui::Button::new(button.label()).selected(selected))
                        .on_hover_text(format!("{width} × {height}"))
                        .clicked()
                    {
                        clicked = Some(index);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (width, height) = self.resizer.window().inner_size();
                    ui.weak(format!("{width} × {height}"));
                });
            });
        });

        if let Some(index) = clicked {
            self.resizer.activate(index);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.resizer
                    .surface_mut()
                    .fill(logical_bounds(rect, ctx.zoom_factor()));

                if let Some(url) = self.resizer.surface().detached_url() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(rect.height() / 3.0);
                        ui.label("no embedded browser available");
                        ui.monospace(url);
                        if ui.button("open in browser").clicked() {
                            if let Err(err) = opener::open(url) {
                                log::error!("failed to open {url}: {err}");
                            }
                        }
                    });
                }
            });
    }
}

impl App for ResponsiveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let pump = self.resizer.surface().needs_pumping();
        if pump {
            browser::pump_events();
        }

        self.ui(ctx);

        if pump {
            ctx.request_repaint_after(PUMP_INTERVAL);
        }
    }
}
