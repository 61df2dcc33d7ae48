//! ueinit Core - version resolution and scaffold orchestration
//!
//! This crate provides the domain and application layers for the ueinit
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ueinit-cli (CLI)              │
//! │   (argument parsing, terminal output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │   (select_version, ScaffoldService)     │
//! │        Orchestrates the workflow        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Filesystem Port (Trait)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ueinit-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (EngineVersion, BuildConfig, buckets)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The interactive selection flow takes its input/output streams as
//! parameters, so it is unit-testable without a real terminal; the scaffold
//! workflow writes through the filesystem port, so it is testable without a
//! real disk.
//!
//! ## Usage
//!
//! ```ignore
//! use ueinit_core::{application::scaffold::ScaffoldService, domain::config};
//!
//! let config = config::resolve("5.3")?;
//! let service = ScaffoldService::new(filesystem); // impl Filesystem
//! let report = service.scaffold(project_dir, &config)?;
//! ```

// Domain layer (pure, stable API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppError,
        ports::Filesystem,
        scaffold::{ScaffoldReport, ScaffoldService},
        selector::select_version,
    };
    pub use crate::domain::{
        DomainError,
        config::{BuildConfig, BuildSettingsVersion, IncludeOrderVersion, resolve},
        version::{CANONICAL_VERSIONS, EngineVersion},
    };
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
