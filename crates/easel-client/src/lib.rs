//! Easel client crate.
//!
//! Typed, safe calling side for an external native windowing/rendering
//! library: draw-command submission, event draining and a cooperative
//! frame loop. The native library is loaded at runtime and never linked.

pub mod client;
pub mod coords;
pub mod core;
pub mod input;
pub mod logging;
pub mod native;
pub mod runtime;
pub mod scene;
pub mod time;

pub use client::{ClientConfig, ClientState, DrawClient, DrawError, InitError, WindowError};
pub use coords::{Color, Point};
pub use input::Event;
pub use scene::{DrawList, Path, Rectangle, ShapeStyle, ZIndex};
