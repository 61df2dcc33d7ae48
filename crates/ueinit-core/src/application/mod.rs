//! Application layer: orchestration of selection and scaffolding.
//!
//! Business logic stays in [`crate::domain`]; this layer wires it to the
//! outside world through injected streams and the filesystem port.

pub mod error;
pub mod ports;
pub mod scaffold;
pub mod selector;
pub mod templates;

pub use error::AppError;
