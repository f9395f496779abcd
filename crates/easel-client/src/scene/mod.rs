//! Draw command types.
//!
//! Commands are transient values: build one, hand it to
//! [`DrawClient`](crate::DrawClient), forget it. [`DrawList`] is an optional
//! per-frame batch that orders commands by z-index before submission; it is
//! cleared on submit, so nothing is retained across frames.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawList, ZIndex};
pub use shapes::{Path, Rectangle, ShapeStyle};
