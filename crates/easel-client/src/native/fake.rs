//! Recording in-memory backend for tests.

use std::collections::{HashSet, VecDeque};
use std::ffi::CStr;
use std::ptr::NonNull;

use crate::client::InitError;
use crate::coords::Point;
use crate::scene::{Rectangle, ShapeStyle};

use super::backend::{InitPath, NativeBackend};
use super::error::NativeError;
use super::records::RawEvent;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Initialize(InitPath),
    Resize(i32, i32),
    WindowWidth,
    ProcessEvents,
    DrawRectangle(Rectangle),
    DrawPath { points: Vec<Point>, count: i32, style: ShapeStyle },
    Update,
    SetTitle(String),
    PlaySound(String),
    Shutdown,
}

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub calls: Vec<Call>,
    pub queue: VecDeque<RawEvent>,
    /// Symbols reported as not exported.
    pub missing: HashSet<&'static str>,
    pub refuse_startup: bool,
    /// Native-side width, updated by resize.
    pub width: i32,

    pub polled: usize,
    pub released: usize,
    pub shutdowns: usize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, raw: RawEvent) {
        self.queue.push_back(raw);
    }

    pub fn outstanding(&self) -> usize {
        self.polled - self.released
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    fn check(&self, name: &'static str) -> Result<(), NativeError> {
        if self.missing.contains(name) {
            Err(NativeError::MissingSymbol(name))
        } else {
            Ok(())
        }
    }
}

impl NativeBackend for FakeBackend {
    fn initialize(&mut self, path: InitPath) -> Result<(), InitError> {
        if self.refuse_startup {
            return Err(InitError::NoDisplay);
        }
        if self.missing.contains(path.symbol()) {
            return Err(InitError::MissingSymbol(path.symbol()));
        }
        self.calls.push(Call::Initialize(path));
        Ok(())
    }

    fn resize_window(&mut self, width: i32, height: i32) -> Result<(), NativeError> {
        self.check("resizeWindow")?;
        self.calls.push(Call::Resize(width, height));
        self.width = width;
        Ok(())
    }

    fn window_width(&mut self) -> Result<i32, NativeError> {
        self.check("getWindowWidth")?;
        self.calls.push(Call::WindowWidth);
        Ok(self.width)
    }

    fn process_events(&mut self) -> Result<(), NativeError> {
        self.calls.push(Call::ProcessEvents);
        Ok(())
    }

    fn poll_event(&mut self) -> Option<NonNull<RawEvent>> {
        let raw = self.queue.pop_front()?;
        self.polled += 1;
        Some(NonNull::from(Box::leak(Box::new(raw))))
    }

    unsafe fn release_event(&mut self, event: NonNull<RawEvent>) {
        self.released += 1;
        drop(unsafe { Box::from_raw(event.as_ptr()) });
    }

    fn draw_rectangle(&mut self, rect: &Rectangle) -> Result<(), NativeError> {
        self.check("drawRectangle")?;
        self.calls.push(Call::DrawRectangle(*rect));
        Ok(())
    }

    fn draw_path(&mut self, points: &[Point], count: i32, style: &ShapeStyle) -> Result<(), NativeError> {
        self.check("drawPath")?;
        self.calls.push(Call::DrawPath {
            points: points.to_vec(),
            count,
            style: *style,
        });
        Ok(())
    }

    fn update(&mut self) -> Result<(), NativeError> {
        self.check("update")?;
        self.calls.push(Call::Update);
        Ok(())
    }

    fn set_window_title(&mut self, title: &CStr) -> Result<(), NativeError> {
        self.check("setWindowTitle")?;
        self.calls.push(Call::SetTitle(title.to_string_lossy().into_owned()));
        Ok(())
    }

    fn play_sound(&mut self, name: &CStr) -> Result<(), NativeError> {
        self.check("playSound")?;
        self.calls.push(Call::PlaySound(name.to_string_lossy().into_owned()));
        Ok(())
    }

    fn shutdown(&mut self) {
        self.shutdowns += 1;
        self.calls.push(Call::Shutdown);
    }
}
