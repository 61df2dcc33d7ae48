//! Infrastructure adapters for `ueinit-core`.
//!
//! Implements the core's `Filesystem` port twice: [`LocalFilesystem`] over
//! `std::fs` for production, and [`MemoryFilesystem`] as a test double for
//! exercising the scaffold workflow without touching a real disk.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
