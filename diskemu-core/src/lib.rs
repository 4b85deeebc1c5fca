//! Virtual Sector Disk Emulator Core
//!
//! This crate provides the core components of the disk emulator:
//! - A text disk format holding a grid of single-digit sectors
//! - Named disk storage over a pluggable byte store
//! - Sector arithmetic and whole-grid transformations
//! - A line-oriented command engine with `>>` chaining and `loop(N):` macros
//!
//! # Architecture
//!
//! The engine uses a layered design:
//! - `DiskFS` trait: byte store keyed by disk name (host directory or memory)
//! - `DiskStore`: typed load/save of `SectorGrid`s on top of a `DiskFS`
//! - `mutator`: stateless grid operations
//! - `Console` trait: line output abstraction
//! - `CommandEngine`: parses input and dispatches commands against a `Session`

pub mod cancel;
pub mod command;
pub mod config;
pub mod console;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod fs;
pub mod grid;
pub mod help;
pub mod mutator;
pub mod session;
pub mod store;

pub use cancel::CancelFlag;
pub use command::{parse_line, Command, Script};
pub use config::EngineConfig;
pub use console::{Console, HeadlessConsole};
pub use cursor::Cursor;
pub use engine::{CommandEngine, Flow};
pub use error::{DiskError, DiskResult};
pub use fs::{validate_disk_name, DiskFS, HostDiskFS, MemoryDiskFS};
pub use grid::SectorGrid;
pub use session::Session;
pub use store::DiskStore;
