//! Command line interface for text-ripper.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
