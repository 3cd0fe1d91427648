//! CLI module for command-line argument parsing.

pub mod args;

pub use args::Args;
