//! Contracts between the run loop and application code.

mod app;
mod ctx;

pub use app::{App, AppControl, FrameError};
pub use ctx::FrameCtx;
