//! The typed client over the native library.
//!
//! [`DrawClient`] owns the backend and the mirrored window size, validates
//! every call before it crosses the boundary, and drains the native event
//! queue through [`EventDrain`].

mod config;
mod draw_client;
mod error;
mod events;

pub use config::{ClientConfig, DEFAULT_LIBRARY_PATH, DEFAULT_MAX_WINDOW_DIMENSION};
pub use draw_client::{path_point_count, ClientState, DrawClient, WindowState};
pub use error::{DrawError, InitError, WindowError};
pub use events::EventDrain;
