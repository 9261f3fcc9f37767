//! Application Layer
//!
//! Use cases that orchestrate the domain services over real inputs.
//!
//! - `BuildPipeline` - load a source document, then emit a Makefile or a prompt

pub mod pipeline;

pub use pipeline::BuildPipeline;
