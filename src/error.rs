//! Error types for llmake
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::SourcePosition;
use crate::parser::ParseError;

/// Result type alias for llmake operations
pub type LlmakeResult<T> = Result<T, LlmakeError>;

/// Semantic errors in the prompt graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Two entries share a name
    #[error("{position}: multiple definitions of prompt '{name}'")]
    DuplicateEntry {
        name: String,
        position: SourcePosition,
    },

    /// An entry lists itself as a dependency
    #[error("{position}: prompt '{name}' names itself as a dependency")]
    SelfDependency {
        name: String,
        position: SourcePosition,
    },

    /// A graph dependency names no entry
    #[error("{position}: dependency '{dependency}' in prompt '{name}' does not exist")]
    UnknownDependency {
        name: String,
        dependency: String,
        position: SourcePosition,
    },

    /// More than one parent could supply an inherited property
    #[error("multiple parents of '{prompt}' define {property}; inheritance is ambiguous")]
    AmbiguousInheritance {
        prompt: String,
        property: &'static str,
    },

    /// Entries that never became ready during topological ordering
    #[error("cyclic dependency among prompts: {}", .prompts.join(", "))]
    CyclicDependency { prompts: Vec<String> },
}

/// Errors raised while assembling a prompt.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("no known prompt '{name}'")]
    UnknownPrompt { name: String },

    /// An artifact or file dependency could not be read
    #[error("cannot read '{}' required by '{reference}': {message}", .path.display())]
    MissingArtifact {
        reference: String,
        path: PathBuf,
        message: String,
    },
}

/// Main error type for llmake operations
#[derive(Error, Debug)]
pub enum LlmakeError {
    /// Lexical or syntax error in the source document
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// Source document does not exist
    #[error("file '{}' not found", .path.display())]
    SourceNotFound { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
