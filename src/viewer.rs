//! Standalone camera window backed by winit.
//!
//! The viewer owns the event loop: it turns window events into
//! [`InputEvent`]s, ticks the [`InputProcessor`] once per frame, and hands
//! every changed pose to a [`CameraSink`]. Drawing the scene is the sink's
//! business; the window title shows the active mode and frame rate.
//!
//! ```no_run
//! # use viewcam::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("sponza")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::{CameraController, CameraPose, ManipulatorMode},
    error::ViewcamError,
    input::{InputEvent, InputProcessor, KeyAction},
    options::{Options, WindowOptions},
    util::frame_timing::FrameTiming,
};

/// How often the frame-rate readout in the title is refreshed.
const TITLE_REFRESH: Duration = Duration::from_millis(500);

/// Receives the camera pose whenever it changes, typically to re-issue the
/// renderer's camera.
pub trait CameraSink {
    /// Called at most once per frame, after input for that frame has been
    /// applied.
    fn camera_changed(&mut self, pose: &CameraPose, mode: ManipulatorMode);
}

/// Sink that only logs pose changes at debug level.
#[derive(Debug, Default)]
pub struct LogSink;

impl CameraSink for LogSink {
    fn camera_changed(&mut self, pose: &CameraPose, mode: ManipulatorMode) {
        log::debug!(
            "{mode}: eye {} looking at {} (up {})",
            pose.eye,
            pose.point_of_interest,
            pose.up
        );
    }
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
    sink: Option<Box<dyn CameraSink>>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
            sink: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding the one in the options.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Send pose changes to `sink` instead of the log.
    #[must_use]
    pub fn with_sink(mut self, sink: impl CameraSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer {
            options,
            sink: self.sink.unwrap_or_else(|| Box::new(LogSink)),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driven by the inspect/fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    sink: Box<dyn CameraSink>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), ViewcamError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewcamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let Options {
            camera,
            keybindings,
            window,
        } = self.options;

        let mut app = ViewerApp {
            window: None,
            camera: CameraController::new(&camera),
            input: InputProcessor::with_key_bindings(keybindings),
            sink: self.sink,
            timing: FrameTiming::new(window.target_fps),
            window_options: window,
            last_title_update: Instant::now(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewcamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    camera: CameraController,
    input: InputProcessor,
    sink: Box<dyn CameraSink>,
    timing: FrameTiming,
    window_options: WindowOptions,
    last_title_update: Instant,
}

impl ViewerApp {
    fn status_title(&self) -> String {
        format!(
            "{} | {} | {}",
            self.window_options.title,
            self.camera.mode(),
            self.timing.summary()
        )
    }

    fn refresh_title(&mut self) {
        if let Some(window) = &self.window {
            window.set_title(&self.status_title());
        }
        self.last_title_update = Instant::now();
    }

    /// Feed one input event through the processor and react to the
    /// actions the host owns.
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let Some(action) = self.input.handle_event(&mut self.camera, event)
        else {
            return;
        };
        match action {
            KeyAction::Quit => event_loop.exit(),
            KeyAction::EnterFlyMode | KeyAction::EnterInspectMode => {
                log::info!("Entering {}", self.camera.mode());
                self.refresh_title();
            }
            _ => {}
        }
    }

    /// Per-frame update: continuous input, then pose hand-off.
    fn redraw(&mut self) {
        if !self.timing.should_render() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            return;
        }

        let _ = self.input.tick(&mut self.camera);
        if let Some(pose) = self.camera.take_modified() {
            self.sink.camera_changed(&pose, self.camera.mode());
        }
        self.timing.end_frame();

        if self.last_title_update.elapsed() >= TITLE_REFRESH {
            self.refresh_title();
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.window_options.title.clone())
            .with_inner_size(LogicalSize::new(
                self.window_options.width,
                self.window_options.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        window.request_redraw();
        self.window = Some(window);
        self.dispatch(
            event_loop,
            InputEvent::Resized {
                width: size.width,
                height: size.height,
            },
        );
        self.refresh_title();
        log::info!("Entering {}", self.camera.mode());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.dispatch(
                    event_loop,
                    InputEvent::Resized {
                        width: size.width,
                        height: size.height,
                    },
                );
            }

            WindowEvent::Focused(false) => {
                self.input.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.dispatch(
                        event_loop,
                        InputEvent::Key {
                            code: format!("{code:?}"),
                            pressed: event.state == ElementState::Pressed,
                            repeat: event.repeat,
                        },
                    );
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(
                    event_loop,
                    InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    },
                );
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.dispatch(event_loop, InputEvent::Scroll { delta });
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => (),
        }
    }
}
