//! Input subsystem.
//!
//! [`Event`] is the decoded form of one native event record. [`InputState`]
//! and [`InputFrame`] track held keys/buttons and per-frame transitions for
//! applications that want more than the raw event stream.

mod frame;
mod keymap;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{Event, Key, MouseButton};
