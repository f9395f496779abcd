//! Native library boundary.
//!
//! Responsibilities:
//! - fixed-layout records matching the native ABI byte-for-byte
//! - the [`NativeBackend`] seam over every native entry point
//! - runtime loading of the real library ([`DylibBackend`])
//! - scoped ownership of polled event records ([`OwnedNativeEvent`])

mod backend;
mod dylib;
mod error;
mod owned;
mod records;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{InitPath, NativeBackend};
pub use dylib::DylibBackend;
pub use error::NativeError;
pub use owned::OwnedNativeEvent;
pub use records::{RawEvent, EVENT_KEY, EVENT_MOUSE_CLICK, EVENT_MOUSE_MOVE};
