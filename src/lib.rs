//! llmake - build chained LLM prompts with make
//!
//! A prompt document declares named prompts, their dependencies and the
//! commands that turn each prompt into an artifact. llmake parses the
//! document, resolves inherited commands and validators, and then either
//! assembles the full text of one prompt or emits a Makefile that builds every
//! artifact in dependency order.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::BuildPipeline;
pub use config::Config;
pub use domain::entities::{Dependency, Entry, Properties, PromptSet, SourcePosition};
pub use domain::services::{resolve, validate, MakefileEmitter, PromptAssembler};
pub use error::{AssemblyError, GraphError, LlmakeError, LlmakeResult};
pub use infrastructure::LocalFs;
pub use parser::{parse_entries, ParseError, ParseErrorKind};
