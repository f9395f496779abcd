use crate::coords::Point;

use super::ShapeStyle;

/// Polygon draw command. Points are connected in order; a filled path is
/// closed by the native side.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    pub style: ShapeStyle,
}

impl Path {
    #[inline]
    pub fn new(points: Vec<Point>, style: ShapeStyle) -> Self {
        Self { points, style }
    }
}
