use std::fmt;
use std::path::PathBuf;

use crate::native::NativeError;

/// Startup failure. Fatal: the client stays unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    AlreadyInitialized,
    /// The client was shut down; it cannot be restarted.
    ShutDown,
    LibraryLoad { path: PathBuf, reason: String },
    MissingSymbol(&'static str),
    /// No display server to connect to.
    NoDisplay,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => write!(f, "client already initialized"),
            InitError::ShutDown => write!(f, "client was shut down"),
            InitError::LibraryLoad { path, reason } => {
                write!(f, "failed to load native library {}: {reason}", path.display())
            }
            InitError::MissingSymbol(name) => {
                write!(f, "native library does not export required symbol `{name}`")
            }
            InitError::NoDisplay => write!(f, "no display server available"),
        }
    }
}

impl std::error::Error for InitError {}

/// Recoverable window operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    InvalidSize { width: u32, height: u32, max: u32 },
    /// Client is not initialized or already shut down.
    NotRunning,
    Native(NativeError),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::InvalidSize { width, height, max } => {
                write!(f, "invalid window size {width}x{height} (each side must be 1..={max})")
            }
            WindowError::NotRunning => write!(f, "client is not running"),
            WindowError::Native(e) => write!(f, "window call failed: {e}"),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::Native(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NativeError> for WindowError {
    fn from(e: NativeError) -> Self {
        WindowError::Native(e)
    }
}

/// Recoverable draw failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Point count does not fit the native 32-bit signed count.
    TooManyPoints(usize),
    /// Client is not initialized or already shut down.
    NotRunning,
    Native(NativeError),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::TooManyPoints(n) => {
                write!(f, "path has {n} points, more than the native limit of {}", i32::MAX)
            }
            DrawError::NotRunning => write!(f, "client is not running"),
            DrawError::Native(e) => write!(f, "draw call failed: {e}"),
        }
    }
}

impl std::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrawError::Native(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NativeError> for DrawError {
    fn from(e: NativeError) -> Self {
        DrawError::Native(e)
    }
}
