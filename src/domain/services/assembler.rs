//! Prompt Assembler
//!
//! Builds the full prompt for a requested entry by walking its dependencies
//! breadth-first:
//!
//! - the requested entry and macro entries contribute their own text;
//! - any other prompt is a build target, so its generated `<name>.txt` is read
//!   instead of its declared text;
//! - file references are read from disk as-is, every time they are reached.
//!
//! Each prompt is visited once, however many paths lead to it.
//!
//! Read content is followed by a `"<reference>:"` label. The collected blocks
//! are reversed at the end, so the deepest context comes first and the
//! requested text comes last, each label directly before its content.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::entities::{Dependency, PromptSet};
use crate::domain::ports::FileSystem;
use crate::error::AssemblyError;

/// Separator placed between blocks when rendering a prompt.
pub const BLOCK_SEPARATOR: &str = "\n\n";

pub struct PromptAssembler<'a, F: FileSystem> {
    prompts: &'a PromptSet,
    fs: &'a F,
    base_dir: PathBuf,
}

impl<'a, F: FileSystem> PromptAssembler<'a, F> {
    pub fn new(prompts: &'a PromptSet, fs: &'a F) -> Self {
        Self {
            prompts,
            fs,
            base_dir: PathBuf::new(),
        }
    }

    /// Directory artifact and file references are resolved against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Ordered text blocks for `requested`.
    pub fn assemble(&self, requested: &str) -> Result<Vec<String>, AssemblyError> {
        if !self.prompts.contains(requested) {
            return Err(AssemblyError::UnknownPrompt {
                name: requested.to_string(),
            });
        }

        let mut blocks = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<Dependency> = VecDeque::new();
        frontier.push_back(Dependency::Prompt(requested.to_string()));

        while let Some(current) = frontier.pop_front() {
            let name = match &current {
                Dependency::File(path) => {
                    self.push_file(&mut blocks, &current, Path::new(path))?;
                    continue;
                }
                Dependency::Prompt(name) => name,
            };
            if !visited.insert(name.clone()) {
                continue;
            }

            let entry = self
                .prompts
                .get(name)
                .ok_or_else(|| AssemblyError::UnknownPrompt { name: name.clone() })?;

            if name == requested || entry.is_macro() {
                trace!(prompt = %name, "inlining text");
                blocks.push(entry.text.clone());
            } else {
                self.push_file(&mut blocks, &current, &entry.artifact_path())?;
            }

            frontier.extend(entry.dependencies.iter().cloned());
        }

        blocks.reverse();
        debug!(prompt = requested, blocks = blocks.len(), "prompt assembled");
        Ok(blocks)
    }

    /// Assembled prompt as a single string, blocks separated by a blank line.
    pub fn render(&self, requested: &str) -> Result<String, AssemblyError> {
        Ok(self.assemble(requested)?.join(BLOCK_SEPARATOR))
    }

    fn push_file(
        &self,
        blocks: &mut Vec<String>,
        dependency: &Dependency,
        relative: &Path,
    ) -> Result<(), AssemblyError> {
        let path = self.base_dir.join(relative);
        trace!(reference = %dependency, path = %path.display(), "reading");

        let content = self
            .fs
            .read(&path)
            .map_err(|err| AssemblyError::MissingArtifact {
                reference: dependency.reference().to_string(),
                path: path.clone(),
                message: err.to_string(),
            })?;

        blocks.push(content);
        blocks.push(format!("{}:", dependency.reference()));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
