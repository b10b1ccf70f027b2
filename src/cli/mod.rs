//! CLI module for climblog - command-line flags.
//!
//! The program itself is an interactive menu; flags only adjust config,
//! logging and console styling.

pub mod commands;

pub use commands::Cli;
