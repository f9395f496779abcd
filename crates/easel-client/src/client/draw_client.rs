use std::ffi::CString;

use crate::native::{DylibBackend, NativeBackend, NativeError};
use crate::scene::{DrawCmd, DrawList, Path, Rectangle};

use super::config::ClientConfig;
use super::error::{DrawError, InitError, WindowError};
use super::events::EventDrain;

/// Lifecycle of a [`DrawClient`].
///
/// `Uninitialized -> Initialized -> Running -> Shutdown`. `Running` is entered
/// by the first `process_events` after a successful `resize_window`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClientState {
    Uninitialized,
    Initialized,
    Running,
    Shutdown,
}

impl ClientState {
    /// Whether native calls are allowed.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, ClientState::Initialized | ClientState::Running)
    }
}

/// Mirror of the native window size, updated only by successful resizes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowState {
    pub width: u32,
    pub height: u32,
}

/// Converts a path length to the native 32-bit signed count.
pub fn path_point_count(len: usize) -> Result<i32, DrawError> {
    i32::try_from(len).map_err(|_| DrawError::TooManyPoints(len))
}

/// Typed surface over the native library.
///
/// Single-threaded by construction: every call goes through `&mut self` and
/// the native library is only touched from the owning thread.
pub struct DrawClient<B: NativeBackend = DylibBackend> {
    backend: B,
    config: ClientConfig,
    state: ClientState,
    window: Option<WindowState>,
}

impl DrawClient<DylibBackend> {
    /// Client over the dynamically loaded library at `config.library_path`.
    pub fn new(config: ClientConfig) -> Self {
        let backend = DylibBackend::new(config.library_path.clone());
        Self::with_backend(backend, config)
    }
}

impl<B: NativeBackend> DrawClient<B> {
    pub fn with_backend(backend: B, config: ClientConfig) -> Self {
        Self {
            backend,
            config,
            state: ClientState::Uninitialized,
            window: None,
        }
    }

    #[inline]
    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Last successfully requested window size.
    #[inline]
    pub fn window_state(&self) -> Option<WindowState> {
        self.window
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// One-time platform startup. May block while the display comes up.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        match self.state {
            ClientState::Uninitialized => {}
            ClientState::Initialized | ClientState::Running => {
                return Err(InitError::AlreadyInitialized);
            }
            ClientState::Shutdown => return Err(InitError::ShutDown),
        }

        self.backend.initialize(self.config.init_path)?;
        self.state = ClientState::Initialized;
        log::info!("native platform initialized via `{}`", self.config.init_path.symbol());
        Ok(())
    }

    /// Requests a new window size.
    ///
    /// The mirror is updated only once the native call has returned.
    pub fn resize_window(&mut self, width: u32, height: u32) -> Result<(), WindowError> {
        if !self.state.is_active() {
            return Err(WindowError::NotRunning);
        }

        let max = self.config.window_dimension_limit();
        if width == 0 || height == 0 || width > max || height > max {
            return Err(WindowError::InvalidSize { width, height, max });
        }

        // Both fit in i32: `max` is capped at i32::MAX.
        self.backend.resize_window(width as i32, height as i32)?;
        self.window = Some(WindowState { width, height });
        log::debug!("window resized to {width}x{height}");

        // The native side applies resizes asynchronously, so a lagging
        // read-back is expected and only reported.
        match self.backend.window_width() {
            Ok(actual) if actual != width as i32 => {
                log::debug!("native width {actual} still lags requested {width}");
            }
            Ok(_) | Err(NativeError::MissingSymbol(_)) => {}
            Err(e) => log::warn!("window width read-back failed: {e}"),
        }

        Ok(())
    }

    /// Native window width read-back, for diagnostics.
    pub fn native_window_width(&mut self) -> Result<i32, NativeError> {
        if !self.state.is_active() {
            return Err(NativeError::Unavailable);
        }
        self.backend.window_width()
    }

    pub fn set_window_title(&mut self, title: &str) -> Result<(), WindowError> {
        if !self.state.is_active() {
            return Err(WindowError::NotRunning);
        }
        let bytes: Vec<u8> = title.bytes().filter(|&b| b != 0).collect();
        let title = CString::new(bytes).unwrap_or_default();
        self.backend.set_window_title(&title)?;
        Ok(())
    }

    /// Plays a bundled sound resource by name (without extension).
    pub fn play_sound(&mut self, name: &str) -> Result<(), NativeError> {
        if !self.state.is_active() {
            return Err(NativeError::Unavailable);
        }
        let bytes: Vec<u8> = name.bytes().filter(|&b| b != 0).collect();
        let name = CString::new(bytes).unwrap_or_default();
        self.backend.play_sound(&name)
    }

    /// Submits a rectangle for the next presented frame.
    pub fn draw_rectangle(&mut self, cmd: &Rectangle) -> Result<(), DrawError> {
        if !self.state.is_active() {
            return Err(DrawError::NotRunning);
        }
        if !cmd.is_finite() {
            log::debug!("submitting rectangle with non-finite geometry: {cmd:?}");
        }
        self.backend.draw_rectangle(cmd)?;
        Ok(())
    }

    /// Submits a polygon for the next presented frame.
    ///
    /// An empty path has nothing to outline or fill and is not forwarded.
    pub fn draw_path(&mut self, cmd: &Path) -> Result<(), DrawError> {
        if !self.state.is_active() {
            return Err(DrawError::NotRunning);
        }

        let count = path_point_count(cmd.points.len())?;
        if count == 0 {
            log::trace!("skipping empty path");
            return Ok(());
        }

        self.backend.draw_path(&cmd.points, count, &cmd.style)?;
        Ok(())
    }

    pub fn draw(&mut self, cmd: &DrawCmd) -> Result<(), DrawError> {
        match cmd {
            DrawCmd::Rectangle(r) => self.draw_rectangle(r),
            DrawCmd::Path(p) => self.draw_path(p),
        }
    }

    /// Submits a recorded batch in paint order and clears it.
    ///
    /// Stops at the first failing command. The list is cleared either way.
    pub fn submit(&mut self, list: &mut DrawList) -> Result<(), DrawError> {
        let result = list.iter_in_paint_order().try_for_each(|cmd| self.draw(cmd));
        list.clear();
        result
    }

    /// Pumps the native message loop. Call at least once per frame.
    pub fn process_events(&mut self) {
        if !self.state.is_active() {
            log::trace!("process_events ignored in state {:?}", self.state);
            return;
        }

        if let Err(e) = self.backend.process_events() {
            log::warn!("process_events failed: {e}");
            return;
        }

        if self.state == ClientState::Initialized && self.window.is_some() {
            self.state = ClientState::Running;
            log::debug!("client running");
        }
    }

    /// Drains the application-visible event queue.
    ///
    /// The returned iterator is lazy and finite; see [`EventDrain`].
    pub fn poll_events(&mut self) -> EventDrain<'_, B> {
        if self.state.is_active() {
            EventDrain::new(&mut self.backend)
        } else {
            EventDrain::finished(&mut self.backend)
        }
    }

    /// Calls the optional native `update` hook.
    pub fn update(&mut self) -> Result<(), NativeError> {
        if !self.state.is_active() {
            return Err(NativeError::Unavailable);
        }
        self.backend.update()
    }

    /// Tears down the native library. Idempotent.
    pub fn shutdown(&mut self) {
        if self.state == ClientState::Shutdown {
            return;
        }
        if self.state.is_active() {
            self.backend.shutdown();
        }
        self.state = ClientState::Shutdown;
        log::info!("client shut down");
    }
}

impl<B: NativeBackend> Drop for DrawClient<B> {
    fn drop(&mut self) {
        if self.state.is_active() {
            self.shutdown();
        }
    }
}
