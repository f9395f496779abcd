//! Value types shared by draw commands and the native boundary.
//!
//! Coordinate space is whatever the native library uses for its window
//! content view; the client forwards values untouched.
//!
//! Both types are `#[repr(C)]` and cross the boundary as-is.

mod color;
mod point;

pub use color::Color;
pub use point::Point;
