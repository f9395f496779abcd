use std::ffi::CStr;
use std::ptr::NonNull;

use crate::client::InitError;
use crate::coords::Point;
use crate::scene::{Rectangle, ShapeStyle};

use super::error::NativeError;
use super::records::RawEvent;

/// Native startup entry point.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum InitPath {
    /// `initializePlatformLayer`
    #[default]
    PlatformLayer,
    /// `startCocoaApplication`
    CocoaApplication,
}

impl InitPath {
    pub const fn symbol(self) -> &'static str {
        match self {
            InitPath::PlatformLayer => "initializePlatformLayer",
            InitPath::CocoaApplication => "startCocoaApplication",
        }
    }
}

/// Every native entry point the client uses.
///
/// Implementations forward to the library as directly as possible; all
/// validation happens in [`DrawClient`](crate::DrawClient). Methods are only
/// called after a successful `initialize` and before `shutdown`.
pub trait NativeBackend {
    /// One-time platform startup. May block on display startup.
    fn initialize(&mut self, path: InitPath) -> Result<(), InitError>;

    fn resize_window(&mut self, width: i32, height: i32) -> Result<(), NativeError>;

    /// Read-back of the native window width.
    fn window_width(&mut self) -> Result<i32, NativeError>;

    /// Pumps the native message loop.
    fn process_events(&mut self) -> Result<(), NativeError>;

    /// Fetches one queued event record. `None` means the queue is empty.
    fn poll_event(&mut self) -> Option<NonNull<RawEvent>>;

    /// Releases a record returned by [`poll_event`](Self::poll_event).
    ///
    /// # Safety
    /// `event` must come from `poll_event` on this backend and must not have
    /// been released already. It must not be read afterwards.
    unsafe fn release_event(&mut self, event: NonNull<RawEvent>);

    fn draw_rectangle(&mut self, rect: &Rectangle) -> Result<(), NativeError>;

    /// `count` equals `points.len()` and has already been range-checked.
    fn draw_path(&mut self, points: &[Point], count: i32, style: &ShapeStyle) -> Result<(), NativeError>;

    /// Optional external hook with no defined contract on the calling side.
    fn update(&mut self) -> Result<(), NativeError>;

    fn set_window_title(&mut self, title: &CStr) -> Result<(), NativeError>;

    fn play_sound(&mut self, name: &CStr) -> Result<(), NativeError>;

    /// Tears the library down. Must be idempotent.
    fn shutdown(&mut self);
}
