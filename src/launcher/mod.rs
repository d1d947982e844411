//! Launcher stages: configuration, argument derivation, build gate, process launch.
pub mod args;
pub mod build;
pub mod config;
pub mod process;
mod runtime;

pub use args::{derive_launch_args, encode_instance_urls};
pub use build::{ensure_artifact, BuildOutcome};
pub use process::{exit_code_for, launch};
pub use runtime::{run_launcher, LaunchStage, RuntimeExit};
