//! Standalone navigation window backed by winit.
//!
//! ```no_run
//! # use orrery::Viewer;
//! # fn main() -> Result<(), orrery::OrreryError> {
//! Viewer::builder()
//!     .with_catalog(orrery::body::solar_system()?)
//!     .build()
//!     .run()
//! # }
//! ```

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    body::BodyCatalog,
    camera::PointerCapture,
    engine::OrreryEngine,
    error::OrreryError,
    input::InputEvent,
    options::Options,
    util::frame_timing::FrameTiming,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    catalog: Option<BodyCatalog>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Orrery", empty catalog,
    /// default options).
    fn new() -> Self {
        Self {
            catalog: None,
            options: None,
            title: "Orrery".into(),
        }
    }

    /// Set the bodies to simulate.
    #[must_use]
    pub fn with_catalog(mut self, catalog: BodyCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            catalog: self.catalog,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that flies the camera through a body catalog.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    catalog: Option<BodyCatalog>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Viewer`] when the event loop cannot be
    /// created or exits abnormally.
    pub fn run(self) -> Result<(), OrreryError> {
        let event_loop = EventLoop::new()
            .map_err(|e| OrreryError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let engine = OrreryEngine::new(
            self.catalog.unwrap_or_default(),
            self.options.unwrap_or_default(),
        );

        let mut app = ViewerApp {
            window: None,
            capture: None,
            engine,
            frame_timing: FrameTiming::new(),
            last_status: Instant::now(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrreryError::Viewer(e.to_string()))
    }
}

// ── Pointer capture ──────────────────────────────────────────────────────

/// Pointer capture over a winit window.
///
/// Prefers `Locked` (relative motion, cursor pinned) and falls back to
/// `Confined` on platforms that cannot lock; either way the cursor is
/// hidden while captured.
struct WindowCapture {
    window: Arc<Window>,
}

impl PointerCapture for WindowCapture {
    fn grab(&mut self) -> Result<(), String> {
        self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
            .map_err(|e| e.to_string())?;
        self.window.set_cursor_visible(false);
        Ok(())
    }

    fn release(&mut self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("failed to release cursor grab: {e}");
        }
        self.window.set_cursor_visible(true);
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Interval between status-line log entries.
const STATUS_INTERVAL: Duration = Duration::from_secs(2);

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    capture: Option<WindowCapture>,
    engine: OrreryEngine,
    frame_timing: FrameTiming,
    last_status: Instant,
    title: String,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        #[allow(clippy::cast_precision_loss)]
        self.engine
            .set_aspect(inner.width.max(1) as f32 / inner.height.max(1) as f32);

        window.request_redraw();
        self.capture = Some(WindowCapture {
            window: Arc::clone(&window),
        });
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                #[allow(clippy::cast_precision_loss)]
                self.engine.set_aspect(
                    size.width.max(1) as f32 / size.height.max(1) as f32,
                );
            }

            WindowEvent::Focused(false) => {
                // The platform drops the grab when focus leaves; mirror
                // it so look input stops and held keys release.
                if let Some(capture) = &mut self.capture {
                    self.engine.unlock_pointer(capture);
                }
                self.engine.handle_input(&InputEvent::CaptureChanged {
                    captured: false,
                });
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                if let Some(capture) = &mut self.capture {
                    self.engine.lock_pointer(capture);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    if event.state == ElementState::Pressed {
                        if let Some(capture) = &mut self.capture {
                            self.engine.unlock_pointer(capture);
                        }
                    }
                    return;
                }
                if let Some(input) = InputEvent::from_key_event(&event) {
                    self.engine.handle_input(&input);
                }
            }

            WindowEvent::RedrawRequested => {
                let dt = self.frame_timing.tick();
                let readout = self.engine.update(dt);

                let now = Instant::now();
                if now.duration_since(self.last_status) >= STATUS_INTERVAL {
                    self.last_status = now;
                    match &readout.target {
                        Some(name) => log::info!(
                            "focused on {name} at {:.1} ({:.0} fps)",
                            readout.distance,
                            self.frame_timing.fps(),
                        ),
                        None => log::info!(
                            "free flight at {:.1} u/s ({:.0} fps)",
                            readout.speed,
                            self.frame_timing.fps(),
                        ),
                    }
                }

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (x, y) } = event {
            #[allow(clippy::cast_possible_truncation)]
            self.engine.handle_input(&InputEvent::PointerDelta {
                x: x as f32,
                y: y as f32,
            });
        }
    }
}
