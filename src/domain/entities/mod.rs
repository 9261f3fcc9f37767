//! Domain Entities
//!
//! - `Entry` - one named prompt of the document
//! - `PromptSet` - all entries of a document, keyed by name

mod entry;
mod prompt_set;

pub use entry::{
    artifact_file, is_macro_name, prompt_file, Dependency, Entry, Properties, SourcePosition,
    ARTIFACT_EXTENSION, MACRO_MARKER, PROMPT_EXTENSION,
};
pub use prompt_set::PromptSet;
