//! Command-line interface
//!
//! Argument parsing and the runner that wires credential, transport,
//! executor, engine, and renderer together for one invocation.

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;
