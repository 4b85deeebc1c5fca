//! Error types for the disk emulator.

use thiserror::Error;

/// Errors that can occur while running disk commands.
///
/// Every variant maps onto one of the user-facing `ERRnnn` codes listed by
/// `help err`. Several variants share `ERR007`; they are all faults the
/// handlers did not anticipate as a domain condition.
#[derive(Error, Debug)]
pub enum DiskError {
    #[error("Disk not found: {0}")]
    DiskNotFound(String),

    #[error("No disk selected")]
    NoDiskSelected,

    #[error("Cursor position out of bounds: {line}x{sector}")]
    CursorOutOfBounds { line: usize, sector: usize },

    #[error("Modification out of bounds: {0}")]
    ModificationOutOfBounds(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Empty command")]
    EmptyCommand,

    #[error("Internal fault: {0}")]
    InternalFault(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Corrupt disk at line {line}: {msg}")]
    CorruptDisk { line: usize, msg: String },

    #[error("Invalid disk name: {0:?}")]
    InvalidDiskName(String),

    #[error("Copy failed: {0}")]
    CopyFailed(String),

    #[error("Rename failed: {0}")]
    RenameFailed(String),

    #[error("Value not found: {0}")]
    ValueNotFound(String),

    #[error("Replace failed: {0}")]
    ReplaceFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl DiskError {
    /// User-facing error code, as documented by `help err`.
    pub fn code(&self) -> &'static str {
        match self {
            DiskError::DiskNotFound(_) => "ERR001",
            DiskError::NoDiskSelected => "ERR002",
            DiskError::CursorOutOfBounds { .. } => "ERR003",
            DiskError::ModificationOutOfBounds(_) => "ERR004",
            DiskError::UnknownCommand(_) => "ERR005",
            DiskError::EmptyCommand => "ERR006",
            DiskError::InternalFault(_)
            | DiskError::InvalidArgument(_)
            | DiskError::CorruptDisk { .. }
            | DiskError::InvalidDiskName(_)
            | DiskError::Io(_)
            | DiskError::Config(_) => "ERR007",
            DiskError::CopyFailed(_) => "ERR008",
            DiskError::RenameFailed(_) => "ERR009",
            DiskError::ValueNotFound(_) => "ERR010",
            DiskError::ReplaceFailed(_) => "ERR011",
        }
    }

    /// True for the catch-all fault family, which gets an extra diagnostic line.
    pub fn is_fault(&self) -> bool {
        self.code() == "ERR007"
    }
}

/// Result type for disk operations.
pub type DiskResult<T> = Result<T, DiskError>;
