use std::path::PathBuf;

use crate::native::InitPath;

pub const DEFAULT_LIBRARY_PATH: &str = "./libswift.dylib";

/// Largest accepted width/height unless configured otherwise.
pub const DEFAULT_MAX_WINDOW_DIMENSION: u32 = 16_384;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Path handed to the dynamic loader.
    pub library_path: PathBuf,

    /// Which native startup entry point to call.
    pub init_path: InitPath,

    /// Upper bound for each window dimension. Values above `i32::MAX` are
    /// capped there, since that is what the native call can carry.
    pub max_window_dimension: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_PATH),
            init_path: InitPath::default(),
            max_window_dimension: DEFAULT_MAX_WINDOW_DIMENSION,
        }
    }
}

impl ClientConfig {
    /// Effective per-dimension limit.
    pub fn window_dimension_limit(&self) -> u32 {
        self.max_window_dimension.min(i32::MAX as u32)
    }
}
