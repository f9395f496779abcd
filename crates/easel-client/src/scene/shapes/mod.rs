mod path;
mod rect;

pub use path::Path;
pub use rect::Rectangle;

use crate::coords::Color;

/// Outline/fill parameters shared by every shape command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    pub outline: Color,
    pub filled: bool,
    /// Only used when `filled` is set, but always forwarded.
    pub fill: Color,
    pub line_thickness: f32,
}

impl ShapeStyle {
    #[inline]
    pub const fn new(outline: Color, filled: bool, fill: Color, line_thickness: f32) -> Self {
        Self { outline, filled, fill, line_thickness }
    }

    /// Outline only; fill color is transparent and ignored.
    #[inline]
    pub const fn outline(outline: Color, line_thickness: f32) -> Self {
        Self::new(outline, false, Color::transparent(), line_thickness)
    }

    /// Outlined and filled.
    #[inline]
    pub const fn filled(outline: Color, fill: Color, line_thickness: f32) -> Self {
        Self::new(outline, true, fill, line_thickness)
    }
}
