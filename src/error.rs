use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the terminal host.
///
/// Game logic itself has no failure modes: a collision is an ordinary
/// state transition.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("grid must be at most 255x255 cells with room for snake and food, got {width}x{height}")]
    InvalidGrid { width: u16, height: u16 },

    #[error("cell size must be between 1 and 1024 pixels, got {0}")]
    InvalidCellSize(u32),

    #[error("tick interval of {requested_ms}ms is below the {min_ms}ms minimum")]
    InvalidTickInterval { requested_ms: u64, min_ms: u64 },

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SnakeError>;
