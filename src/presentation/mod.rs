//! Presentation Layer
//!
//! - `cli` - command-line arguments (clap)
//! - `output` - listings and output delivery

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{deliver, render_listing, OutputFormat};
