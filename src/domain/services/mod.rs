//! Domain Services
//!
//! Algorithms over the prompt graph. Only the assembler reads files, and it
//! does so through the `FileSystem` port.

mod assembler;
mod dependency_validator;
mod differ;
mod inheritance;
mod makefile;

pub use assembler::{PromptAssembler, BLOCK_SEPARATOR};
pub use dependency_validator::validate;
pub use differ::{summarize_changes, ChangeSummary};
pub use inheritance::{resolve, topological_order};
pub use makefile::{expand_template, MakefileEmitter, DEFAULT_COMMANDS};
