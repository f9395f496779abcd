use crate::scene::shapes::{Path, Rectangle};

/// A single immediate-mode draw command.
///
/// Extending:
/// - add a shape module under `scene::shapes`
/// - add a variant here
/// - add the matching native entry point and a `DrawClient::draw_*` method
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rectangle(Rectangle),
    Path(Path),
}

impl From<Rectangle> for DrawCmd {
    #[inline]
    fn from(r: Rectangle) -> Self {
        DrawCmd::Rectangle(r)
    }
}

impl From<Path> for DrawCmd {
    #[inline]
    fn from(p: Path) -> Self {
        DrawCmd::Path(p)
    }
}
