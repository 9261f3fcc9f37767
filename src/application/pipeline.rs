//! Build pipeline
//!
//! ## Flow
//!
//! 1. Read and parse the source document
//! 2. Reject duplicate names, then validate dependencies
//! 3. Resolve inherited properties
//! 4. Emit a Makefile or assemble one prompt
//!
//! Any failure stops the pipeline; nothing is emitted from a document that did
//! not fully resolve.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::PromptSet;
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::{self, MakefileEmitter, PromptAssembler};
use crate::error::{LlmakeError, LlmakeResult};
use crate::parser::parse_entries;

pub struct BuildPipeline<'a, F: FileSystem> {
    source: PathBuf,
    fs: &'a F,
    config: Config,
    generator: String,
    base_dir: PathBuf,
}

impl<'a, F: FileSystem> BuildPipeline<'a, F> {
    pub fn new(source: impl Into<PathBuf>, fs: &'a F, config: Config) -> Self {
        let generator = config.generator_or(|| PathBuf::from(env!("CARGO_PKG_NAME")));
        Self {
            source: source.into(),
            fs,
            config,
            generator,
            base_dir: PathBuf::new(),
        }
    }

    /// Program written into `.prompt` recipes.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Directory artifacts are read from when assembling prompts.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Parse, validate and resolve the source document.
    pub fn load(&self) -> LlmakeResult<PromptSet> {
        let text = self.fs.read(&self.source).map_err(|err| match err {
            FsError::NotFound(_) => LlmakeError::SourceNotFound {
                path: self.source.clone(),
            },
            other => LlmakeError::Io(other.into()),
        })?;

        let entries = parse_entries(&text)?;
        let mut prompts = PromptSet::from_entries(entries)?;
        services::validate(&prompts)?;
        services::resolve(&mut prompts)?;

        info!(
            source = %self.source.display(),
            prompts = prompts.len(),
            "loaded prompt document"
        );
        Ok(prompts)
    }

    pub fn makefile(&self) -> LlmakeResult<String> {
        let prompts = self.load()?;
        debug!(generator = %self.generator, "emitting makefile");

        Ok(MakefileEmitter::new(self.generator.clone())
            .with_default_commands(self.config.build.default_commands.clone())
            .emit(&prompts, &self.source))
    }

    /// Assembled text of prompt `name`.
    pub fn prompt(&self, name: &str) -> LlmakeResult<String> {
        let prompts = self.load()?;
        let text = PromptAssembler::new(&prompts, self.fs)
            .with_base_dir(self.base_dir.clone())
            .render(name)?;
        Ok(text)
    }
}
