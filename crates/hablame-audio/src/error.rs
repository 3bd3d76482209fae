//! Audio-specific error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Could not start audio player {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Audio player {program:?} failed on {clip} (exit code {code:?})")]
    PlayerFailed {
        program: String,
        clip: PathBuf,
        code: Option<i32>,
    },

    #[error("Could not read audio directory {dir}: {source}")]
    Catalog {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AudioError {
    /// Failures that stop a whole sentence rather than a single clip.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::Catalog { .. })
    }
}
