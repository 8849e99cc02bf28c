//! CLI command handlers for TintScale.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! a [`common::CliResult`], so `main.rs` can map failures to exit codes.

pub mod adjust;
pub mod common;
pub mod config;
pub mod contrast;
pub mod export;
pub mod ratio;
pub mod shades;

// Re-export types used by main.rs and tests
pub use adjust::AdjustArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use export::ExportArgs;
pub use ratio::RatioArgs;
pub use shades::ShadesArgs;
