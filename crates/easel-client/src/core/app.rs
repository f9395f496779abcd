use std::fmt;

use crate::client::{DrawError, WindowError};
use crate::input::Event;
use crate::native::{DylibBackend, NativeBackend};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Non-fatal failure reported by a frame callback.
///
/// The run loop logs and counts these and keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    Draw(DrawError),
    Window(WindowError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Draw(e) => write!(f, "{e}"),
            FrameError::Window(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Draw(e) => Some(e),
            FrameError::Window(e) => Some(e),
        }
    }
}

impl From<DrawError> for FrameError {
    fn from(e: DrawError) -> Self {
        FrameError::Draw(e)
    }
}

impl From<WindowError> for FrameError {
    fn from(e: WindowError) -> Self {
        FrameError::Window(e)
    }
}

/// Application driven by [`Runtime`](crate::runtime::Runtime).
pub trait App<B: NativeBackend = DylibBackend> {
    /// Called for each event drained after a frame.
    fn on_event(&mut self, event: &Event) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per loop iteration. Submit everything that should be
    /// visible; nothing carries over from the previous frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, B>) -> Result<AppControl, FrameError>;
}
