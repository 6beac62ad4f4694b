use std::fmt;

use eframe::CreationContext;
use wry::{
    Rect, WebView, WebViewBuilder,
    dpi::{LogicalPosition, LogicalSize},
};

use crate::app::resizer::{Bounds, BrowserSurface};

#[derive(Debug)]
pub enum SurfaceError {
    Toolkit(String),
    Webview(wry::Error),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Toolkit(msg) => write!(f, "toolkit init failed: {msg}"),
            SurfaceError::Webview(err) => write!(f, "webview creation failed: {err}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

impl From<wry::Error> for SurfaceError {
    fn from(err: wry::Error) -> Self {
        SurfaceError::Webview(err)
    }
}

/// Browser surface the app renders into: a native child webview when one
/// could be attached to the eframe window, otherwise a detached placeholder.
pub enum Surface {
    Embedded(WebviewSurface),
    Detached(DetachedSurface),
}

impl Surface {
    pub fn create(cc: &CreationContext<'_>) -> Self {
        Self::from_attach(WebviewSurface::attach(cc))
    }

    fn from_attach(attached: Result<WebviewSurface, SurfaceError>) -> Self {
        match attached {
            Ok(surface) => Surface::Embedded(surface),
            Err(err) => {
                log::error!("could not embed a webview, falling back to external browser: {err}");
                Self::detached()
            }
        }
    }

    pub fn detached() -> Self {
        Surface::Detached(DetachedSurface::default())
    }

    /// URL to offer for opening externally, when nothing is embedded.
    pub fn detached_url(&self) -> Option<&str> {
        match self {
            Surface::Embedded(_) => None,
            Surface::Detached(surface) => surface.url.as_deref(),
        }
    }

    /// Last area the surface was laid out over, in logical pixels.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Surface::Embedded(surface) => surface.bounds,
            Surface::Detached(surface) => surface.bounds,
        }
    }

    /// Whether a toolkit loop behind the webview has to be driven from egui.
    pub fn needs_pumping(&self) -> bool {
        cfg!(target_os = "linux") && matches!(self, Surface::Embedded(_))
    }
}

impl BrowserSurface for Surface {
    fn navigate(&mut self, url: &str) {
        match self {
            Surface::Embedded(surface) => surface.navigate(url),
            Surface::Detached(surface) => surface.navigate(url),
        }
    }

    fn fill(&mut self, bounds: Bounds) {
        match self {
            Surface::Embedded(surface) => surface.fill(bounds),
            Surface::Detached(surface) => surface.fill(bounds),
        }
    }
}

pub struct WebviewSurface {
    webview: WebView,
    bounds: Option<Bounds>,
}

impl WebviewSurface {
    fn attach(cc: &CreationContext<'_>) -> Result<Self, SurfaceError> {
        init_toolkit()?;
        let webview = WebViewBuilder::new().build_as_child(cc)?;
        Ok(WebviewSurface {
            webview,
            bounds: None,
        })
    }
}

impl BrowserSurface for WebviewSurface {
    fn navigate(&mut self, url: &str) {
        log::info!("loading {url}");
        // load errors surface inside the webview itself
        if let Err(err) = self.webview.load_url(url) {
            log::debug!("load_url({url}) returned {err}");
        }
    }

    fn fill(&mut self, bounds: Bounds) {
        if self.bounds == Some(bounds) {
            return;
        }
        let rect = Rect {
            position: LogicalPosition::new(bounds.x, bounds.y).into(),
            size: LogicalSize::new(bounds.width, bounds.height).into(),
        };
        match self.webview.set_bounds(rect) {
            Ok(()) => self.bounds = Some(bounds),
            Err(err) => log::warn!("failed to lay out webview: {err}"),
        }
    }
}

#[derive(Default)]
pub struct DetachedSurface {
    url: Option<String>,
    bounds: Option<Bounds>,
}

impl BrowserSurface for DetachedSurface {
    fn navigate(&mut self, url: &str) {
        self.url = Some(url.to_owned());
    }

    fn fill(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }
}

#[cfg(target_os = "linux")]
fn init_toolkit() -> Result<(), SurfaceError> {
    gtk::init().map_err(|err| SurfaceError::Toolkit(err.to_string()))
}

#[cfg(not(target_os = "linux"))]
fn init_toolkit() -> Result<(), SurfaceError> {
    Ok(())
}

/// Drives the gtk main context that the Linux webview lives on.
#[cfg(target_os = "linux")]
pub fn pump_events() {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}

#[cfg(not(target_os = "linux"))]
pub fn pump_events() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_surface_keeps_url_and_bounds() {
        let mut surface = Surface::detached();
        assert_eq!(surface.detached_url(), None);
        assert_eq!(surface.bounds(), None);

        let bounds = Bounds {
            x: 0.0,
            y: 30.0,
            width: 1366.0,
            height: 738.0,
        };
        surface.navigate("http://localhost:3000/reservation/app");
        surface.fill(bounds);
        assert_eq!(
            surface.detached_url(),
            Some("http://localhost:3000/reservation/app")
        );
        assert_eq!(surface.bounds(), Some(bounds));
        assert!(!surface.needs_pumping());
    }

    #[test]
    fn test_toolkit_failure_falls_back_to_detached() {
        let surface = Surface::from_attach(Err(SurfaceError::Toolkit(
            "cannot open display".to_string(),
        )));
        assert!(matches!(surface, Surface::Detached(_)));
        assert!(!surface.needs_pumping());
    }

    #[test]
    fn test_surface_error_display() {
        let err = SurfaceError::Toolkit("cannot open display".to_string());
        assert_eq!(err.to_string(), "toolkit init failed: cannot open display");
    }
}
