// prefs.rs — Runtime preferences shared by the conversion and
// concatenation pipelines.
//
// Prefs is a plain value owned by the caller; nothing here is global.
// The display level lives in cli::constants.

use std::path::{Path, PathBuf};

use crate::config::{init_buffer_cap, BUFFER_CAP_DEFAULT, MIN_BUFFER_CAP};

/// Tunables that apply to every file in a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    /// Upper bound on the streaming buffer, in bytes. Default: 64 KiB.
    pub buffer_cap: usize,
    /// Where in-place conversion stages its intermediate file.
    /// `None` means the system temp directory.
    pub temp_dir: Option<PathBuf>,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            buffer_cap: BUFFER_CAP_DEFAULT,
            temp_dir: None,
        }
    }
}

impl Prefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with `KEFKA_BUFFER_SIZE` applied.
    pub fn from_env() -> Self {
        Prefs {
            buffer_cap: init_buffer_cap(),
            ..Self::default()
        }
    }

    /// Sets the buffer capacity, raised to at least [`MIN_BUFFER_CAP`].
    /// Returns the value stored.
    pub fn set_buffer_cap(&mut self, cap: usize) -> usize {
        self.buffer_cap = cap.max(MIN_BUFFER_CAP);
        self.buffer_cap
    }

    pub fn set_temp_dir(&mut self, dir: Option<&Path>) {
        self.temp_dir = dir.map(Path::to_path_buf);
    }

    /// Directory used for in-place staging files.
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
