//! Shared library modules providing error types, locking, toolchain commands, and telemetry initialization.

pub mod errors;
pub mod lock;
pub mod paths;
pub mod telemetry;
pub mod toolchain;
