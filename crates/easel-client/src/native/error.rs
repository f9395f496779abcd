use std::fmt;

/// Failure at the native call boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeError {
    /// The library does not export this entry point.
    MissingSymbol(&'static str),
    /// The library is not loaded (never initialized, or already torn down).
    Unavailable,
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeError::MissingSymbol(name) => {
                write!(f, "native library does not export `{name}`")
            }
            NativeError::Unavailable => write!(f, "native library is not loaded"),
        }
    }
}

impl std::error::Error for NativeError {}
