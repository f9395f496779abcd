use std::ffi::{c_char, c_int, CStr};
use std::path::PathBuf;
use std::ptr::NonNull;

use libloading::Library;

use crate::client::InitError;
use crate::coords::{Color, Point};
use crate::scene::{Rectangle, ShapeStyle};

use super::backend::{InitPath, NativeBackend};
use super::error::NativeError;
use super::records::RawEvent;

type VoidFn = unsafe extern "C" fn();
type ResizeFn = unsafe extern "C" fn(c_int, c_int);
type WidthFn = unsafe extern "C" fn() -> c_int;
type PollFn = unsafe extern "C" fn() -> *mut RawEvent;
type FreeFn = unsafe extern "C" fn(*mut RawEvent);
type RectFn = unsafe extern "C" fn(f32, f32, f32, f32, Color, c_int, Color, f32);
type PathFn = unsafe extern "C" fn(*const Point, c_int, Color, c_int, Color, f32);
type StrFn = unsafe extern "C" fn(*const c_char);

/// Resolved entry points. Only valid while `Loaded::_lib` is alive.
struct Symbols {
    resize_window: ResizeFn,
    process_events: VoidFn,
    poll_event: PollFn,
    draw_rectangle: RectFn,
    draw_path: PathFn,

    window_width: Option<WidthFn>,
    update: Option<VoidFn>,
    set_window_title: Option<StrFn>,
    play_sound: Option<StrFn>,
    free_event: Option<FreeFn>,
    shutdown: Option<VoidFn>,
}

struct Loaded {
    syms: Symbols,
    // Dropped last; unloading invalidates every pointer in `syms`.
    _lib: Library,
}

/// Backend that loads the native library at runtime.
///
/// Nothing is loaded until [`NativeBackend::initialize`]; a missing or
/// incompatible library surfaces there as an [`InitError`].
pub struct DylibBackend {
    path: PathBuf,
    loaded: Option<Loaded>,
}

impl DylibBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn syms(&self) -> Result<&Symbols, NativeError> {
        self.loaded
            .as_ref()
            .map(|l| &l.syms)
            .ok_or(NativeError::Unavailable)
    }

    fn load(&self) -> Result<Library, InitError> {
        // SAFETY: loading runs the library's initializers. The library is
        // trusted by configuration; there is no way to check it from here.
        unsafe { Library::new(&self.path) }.map_err(|e| InitError::LibraryLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

/// Resolves a required symbol.
///
/// # Safety
/// `T` must be the exact function pointer type of the exported symbol.
unsafe fn required<T: Copy>(lib: &Library, name: &'static str) -> Result<T, InitError> {
    unsafe { lib.get::<T>(name.as_bytes()) }
        .map(|sym| *sym)
        .map_err(|_| InitError::MissingSymbol(name))
}

/// Resolves an optional symbol.
///
/// # Safety
/// Same as [`required`].
unsafe fn optional<T: Copy>(lib: &Library, name: &'static str) -> Option<T> {
    let resolved = unsafe { lib.get::<T>(name.as_bytes()) }.ok().map(|sym| *sym);
    if resolved.is_none() {
        log::debug!("optional native symbol `{name}` not exported");
    }
    resolved
}

/// Entry points every usable library exports. The poll entry point is
/// checked separately because it has two accepted spellings.
const REQUIRED_SYMBOLS: [&str; 4] = ["resizeWindow", "processEvents", "drawRectangle", "drawPath"];

/// Poll entry point spellings, in order of preference.
const POLL_SYMBOLS: [&str; 2] = ["pollEvent", "pollEvents"];

/// Checks that `exports` covers everything the client needs and picks the
/// poll entry point spelling to bind.
fn check_exports(exports: impl Fn(&str) -> bool, init: InitPath) -> Result<&'static str, InitError> {
    if !exports(init.symbol()) {
        return Err(InitError::MissingSymbol(init.symbol()));
    }
    if let Some(missing) = REQUIRED_SYMBOLS.into_iter().find(|name| !exports(*name)) {
        return Err(InitError::MissingSymbol(missing));
    }
    POLL_SYMBOLS
        .into_iter()
        .find(|name| exports(*name))
        .ok_or(InitError::MissingSymbol(POLL_SYMBOLS[0]))
}

fn resolve(lib: &Library, init: InitPath) -> Result<(Symbols, VoidFn), InitError> {
    // SAFETY: presence check only; the looked-up address is never used.
    let exported = |name: &str| unsafe { lib.get::<*const ()>(name.as_bytes()) }.is_ok();
    let poll_name = check_exports(exported, init)?;
    if poll_name != POLL_SYMBOLS[0] {
        log::debug!("binding poll entry point as `{poll_name}`");
    }

    // SAFETY: the type aliases above mirror the native declarations.
    unsafe {
        let syms = Symbols {
            resize_window: required(lib, "resizeWindow")?,
            process_events: required(lib, "processEvents")?,
            poll_event: required(lib, poll_name)?,
            draw_rectangle: required(lib, "drawRectangle")?,
            draw_path: required(lib, "drawPath")?,

            window_width: optional(lib, "getWindowWidth"),
            update: optional(lib, "update"),
            set_window_title: optional(lib, "setWindowTitle"),
            play_sound: optional(lib, "playSound"),
            free_event: optional(lib, "freeEvent"),
            shutdown: optional(lib, "shutdownPlatformLayer"),
        };
        let init_fn = required::<VoidFn>(lib, init.symbol())?;
        Ok((syms, init_fn))
    }
}

/// Refuses startup early when there is obviously no display to talk to.
#[cfg(all(unix, not(target_os = "macos")))]
fn display_preflight() -> Result<(), InitError> {
    let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|v| std::env::var_os(v).is_some_and(|s| !s.is_empty()));
    if has_display {
        Ok(())
    } else {
        Err(InitError::NoDisplay)
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_preflight() -> Result<(), InitError> {
    Ok(())
}

#[inline]
fn c_bool(b: bool) -> c_int {
    if b { 1 } else { 0 }
}

impl NativeBackend for DylibBackend {
    fn initialize(&mut self, path: InitPath) -> Result<(), InitError> {
        if self.loaded.is_some() {
            return Err(InitError::AlreadyInitialized);
        }

        display_preflight()?;

        let lib = self.load()?;
        let (syms, init) = resolve(&lib, path)?;

        log::info!("loaded native library {}", self.path.display());

        // SAFETY: called once, before any other entry point.
        unsafe { init() };

        self.loaded = Some(Loaded { syms, _lib: lib });
        Ok(())
    }

    fn resize_window(&mut self, width: i32, height: i32) -> Result<(), NativeError> {
        let f = self.syms()?.resize_window;
        unsafe { f(width, height) };
        Ok(())
    }

    fn window_width(&mut self) -> Result<i32, NativeError> {
        let f = self.syms()?.window_width.ok_or(NativeError::MissingSymbol("getWindowWidth"))?;
        Ok(unsafe { f() })
    }

    fn process_events(&mut self) -> Result<(), NativeError> {
        let f = self.syms()?.process_events;
        unsafe { f() };
        Ok(())
    }

    fn poll_event(&mut self) -> Option<NonNull<RawEvent>> {
        let f = self.syms().ok()?.poll_event;
        NonNull::new(unsafe { f() })
    }

    unsafe fn release_event(&mut self, event: NonNull<RawEvent>) {
        match self.syms().ok().and_then(|s| s.free_event) {
            // SAFETY: caller guarantees `event` is a live record from `poll_event`.
            Some(f) => unsafe { f(event.as_ptr()) },
            // The native side allocates records with the C allocator.
            None => unsafe { libc::free(event.as_ptr().cast()) },
        }
    }

    fn draw_rectangle(&mut self, rect: &Rectangle) -> Result<(), NativeError> {
        let f = self.syms()?.draw_rectangle;
        let s = &rect.style;
        unsafe {
            f(
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                s.outline,
                c_bool(s.filled),
                s.fill,
                s.line_thickness,
            )
        };
        Ok(())
    }

    fn draw_path(&mut self, points: &[Point], count: i32, style: &ShapeStyle) -> Result<(), NativeError> {
        debug_assert_eq!(points.len(), count as usize);
        let f = self.syms()?.draw_path;
        // SAFETY: `points` outlives the call and holds exactly `count` elements.
        unsafe {
            f(
                points.as_ptr(),
                count,
                style.outline,
                c_bool(style.filled),
                style.fill,
                style.line_thickness,
            )
        };
        Ok(())
    }

    fn update(&mut self) -> Result<(), NativeError> {
        let f = self.syms()?.update.ok_or(NativeError::MissingSymbol("update"))?;
        unsafe { f() };
        Ok(())
    }

    fn set_window_title(&mut self, title: &CStr) -> Result<(), NativeError> {
        let f = self.syms()?.set_window_title.ok_or(NativeError::MissingSymbol("setWindowTitle"))?;
        // SAFETY: the native side copies the string before returning.
        unsafe { f(title.as_ptr()) };
        Ok(())
    }

    fn play_sound(&mut self, name: &CStr) -> Result<(), NativeError> {
        let f = self.syms()?.play_sound.ok_or(NativeError::MissingSymbol("playSound"))?;
        unsafe { f(name.as_ptr()) };
        Ok(())
    }

    fn shutdown(&mut self) {
        let Some(loaded) = self.loaded.take() else {
            return;
        };

        if let Some(f) = loaded.syms.shutdown {
            unsafe { f() };
        }

        drop(loaded);
        log::info!("unloaded native library {}", self.path.display());
    }
}

impl Drop for DylibBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_is_a_load_error_or_no_display() {
        let mut backend = DylibBackend::new("./definitely-not-here/libnothing.so");
        match backend.initialize(InitPath::PlatformLayer) {
            Err(InitError::LibraryLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("./definitely-not-here/libnothing.so"));
            }
            Err(InitError::NoDisplay) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!backend.is_loaded());
    }

    fn exports<'a>(names: &'a [&'a str]) -> impl Fn(&str) -> bool + 'a {
        move |name| names.iter().any(|n| *n == name)
    }

    const FULL: [&str; 6] = [
        "initializePlatformLayer",
        "resizeWindow",
        "processEvents",
        "pollEvent",
        "drawRectangle",
        "drawPath",
    ];

    #[test]
    fn export_table() {
        let cases: [(&[&str], InitPath, Result<&str, InitError>); 6] = [
            (&FULL, InitPath::PlatformLayer, Ok("pollEvent")),
            (
                &["initializePlatformLayer", "resizeWindow", "processEvents", "pollEvents", "drawRectangle", "drawPath"],
                InitPath::PlatformLayer,
                Ok("pollEvents"),
            ),
            (
                &["initializePlatformLayer", "resizeWindow", "processEvents", "pollEvent", "pollEvents", "drawRectangle", "drawPath"],
                InitPath::PlatformLayer,
                Ok("pollEvent"),
            ),
            (
                &["initializePlatformLayer", "resizeWindow", "processEvents", "drawRectangle", "drawPath"],
                InitPath::PlatformLayer,
                Err(InitError::MissingSymbol("pollEvent")),
            ),
            (
                &["initializePlatformLayer", "resizeWindow", "processEvents", "pollEvent", "drawRectangle"],
                InitPath::PlatformLayer,
                Err(InitError::MissingSymbol("drawPath")),
            ),
            (&FULL, InitPath::CocoaApplication, Err(InitError::MissingSymbol("startCocoaApplication"))),
        ];

        for (names, init, expected) in cases {
            assert_eq!(check_exports(exports(names), init), expected, "exports: {names:?}");
        }
    }

    #[test]
    fn optional_symbols_are_not_required() {
        // None of getWindowWidth, update, setWindowTitle, playSound,
        // freeEvent or shutdownPlatformLayer are in FULL.
        assert_eq!(check_exports(exports(&FULL), InitPath::PlatformLayer), Ok("pollEvent"));
    }

    #[test]
    fn calls_before_load_are_unavailable() {
        let mut backend = DylibBackend::new("unused");
        assert_eq!(backend.resize_window(1, 1), Err(NativeError::Unavailable));
        assert_eq!(backend.update(), Err(NativeError::Unavailable));
        assert!(backend.poll_event().is_none());
        backend.shutdown();
    }
}
