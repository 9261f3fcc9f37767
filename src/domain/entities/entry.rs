//! Entry entity
//!
//! One named node of the prompt graph, as declared in the source document.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

/// Names starting with this character are macro entries.
pub const MACRO_MARKER: char = '_';

/// Extension of the file an artifact entry produces when built.
pub const ARTIFACT_EXTENSION: &str = "txt";

/// Extension of the generated prompt file an artifact entry is built from.
pub const PROMPT_EXTENSION: &str = "prompt";

/// A dependency reference, classified once at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// Another entry of the same document
    Prompt(String),
    /// External on-disk content (the reference contains a period)
    File(String),
}

impl Dependency {
    /// Classify a dotted reference: any period makes it a file reference.
    pub fn parse(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        if reference.contains('.') {
            Dependency::File(reference)
        } else {
            Dependency::Prompt(reference)
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            Dependency::Prompt(name) | Dependency::File(name) => name,
        }
    }

    pub fn prompt_name(&self) -> Option<&str> {
        match self {
            Dependency::Prompt(name) => Some(name),
            Dependency::File(_) => None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Dependency::File(_))
    }

    /// True for graph references to macro entries.
    pub fn is_macro(&self) -> bool {
        self.prompt_name().is_some_and(is_macro_name)
    }

    /// File this reference is read from: the path itself for file references,
    /// `<name>.txt` for graph references.
    pub fn file_path(&self) -> PathBuf {
        match self {
            Dependency::Prompt(name) => artifact_file(name),
            Dependency::File(path) => PathBuf::from(path),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reference())
    }
}

pub fn is_macro_name(name: &str) -> bool {
    name.starts_with(MACRO_MARKER)
}

pub fn artifact_file(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", name, ARTIFACT_EXTENSION))
}

pub fn prompt_file(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", name, PROMPT_EXTENSION))
}

/// Declaration site of an entry (1-based line, 0-based column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The inheritable build properties of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub commands: Vec<String>,
    pub validators: Vec<String>,
    /// 0 means no automatic retry
    pub retry: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub dependencies: Vec<Dependency>,
    pub text: String,
    pub position: SourcePosition,
    /// Properties as written in the document
    pub declared: Properties,
    /// Unrecognised `key: "value"` fields, in declaration order
    pub extras: IndexMap<String, Vec<String>>,
    resolved: Option<Properties>,
}

impl Entry {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            text: text.into(),
            position: SourcePosition::default(),
            declared: Properties::default(),
            extras: IndexMap::new(),
            resolved: None,
        }
    }

    pub fn with_dependencies<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = refs.into_iter().map(Dependency::parse).collect();
        self
    }

    pub fn with_position(mut self, position: SourcePosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.declared.commands.push(command.into());
        self
    }

    pub fn with_validator(mut self, validator: impl Into<String>) -> Self {
        self.declared.validators.push(validator.into());
        self
    }

    pub fn with_retry(mut self, retry: u32) -> Self {
        self.declared.retry = retry;
        self
    }

    pub fn is_macro(&self) -> bool {
        is_macro_name(&self.name)
    }

    /// Effective properties: resolved if inheritance ran, declared otherwise.
    pub fn properties(&self) -> &Properties {
        self.resolved.as_ref().unwrap_or(&self.declared)
    }

    pub fn commands(&self) -> &[String] {
        &self.properties().commands
    }

    pub fn validators(&self) -> &[String] {
        &self.properties().validators
    }

    pub fn retry(&self) -> u32 {
        self.properties().retry
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    pub(crate) fn set_resolved(&mut self, properties: Properties) {
        self.resolved = Some(properties);
    }

    /// Names of the graph (non-file) dependencies, in declaration order.
    pub fn graph_dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().filter_map(Dependency::prompt_name)
    }

    pub fn artifact_path(&self) -> PathBuf {
        artifact_file(&self.name)
    }

    pub fn prompt_path(&self) -> PathBuf {
        prompt_file(&self.name)
    }
}
