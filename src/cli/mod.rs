//! Command Line Interface (CLI) layer for LOGOGEN.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) for the fixed-size batch flow. It wires user-provided options to
//! the underlying library functionality exposed via `logogen::api`.
//!
//! If you are embedding LOGOGEN into another application, prefer using the
//! high-level `logogen::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
