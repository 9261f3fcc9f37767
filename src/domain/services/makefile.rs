//! Makefile emitter
//!
//! Turns a resolved [`PromptSet`] into a Makefile with two rules per artifact
//! entry: `<name>.prompt` is regenerated by llmake itself from the source
//! document, and `<name>.txt` runs the entry's commands and validators on it.

use std::path::Path;

use tracing::debug;

use crate::domain::entities::{Entry, PromptSet};

/// Commands used when an artifact entry resolves to none.
pub const DEFAULT_COMMANDS: [&str; 2] = [
    "ollama run deepseek-r1:14b < {name}.prompt | tee {name}.txt",
    "sed -i '1,/<\\/think>/d' {name}.txt",
];

#[derive(Debug, Clone)]
pub struct MakefileEmitter {
    generator: String,
    default_commands: Vec<String>,
}

impl MakefileEmitter {
    /// `generator` is the program invoked to regenerate `.prompt` files.
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            default_commands: DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_default_commands(mut self, commands: Vec<String>) -> Self {
        self.default_commands = commands;
        self
    }

    pub fn emit(&self, prompts: &PromptSet, source: &Path) -> String {
        let source = source.display().to_string();
        let targets: Vec<&Entry> = prompts.artifacts().collect();

        let mut out = String::from(".PHONY: all clean\n");
        out.push_str(&format!(
            "all: {}\n",
            targets
                .iter()
                .map(|e| e.artifact_path().display().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        ));
        out.push_str(&format!(
            "clean:\n\trm -f {}\n\n",
            targets
                .iter()
                .map(|e| format!("{} {}", e.artifact_path().display(), e.prompt_path().display()))
                .collect::<Vec<_>>()
                .join(" ")
        ));

        for entry in &targets {
            self.emit_entry(&mut out, entry, &source);
        }

        debug!(rules = targets.len() * 2, "makefile emitted");
        out
    }

    fn emit_entry(&self, out: &mut String, entry: &Entry, source: &str) {
        let name = &entry.name;

        let mut prerequisites = vec![source.to_string()];
        prerequisites.extend(
            entry
                .dependencies
                .iter()
                .filter(|dep| !dep.is_macro())
                .map(|dep| dep.file_path().display().to_string()),
        );

        out.push_str(&format!(
            "{}.prompt: {}\n",
            name,
            prerequisites.join(" ")
        ));
        out.push_str(&format!(
            "\t{} {} {} -o {}.prompt\n\n",
            self.generator, source, name, name
        ));
        out.push_str(&format!("{}.txt: {}.prompt\n", name, name));

        let commands = if entry.commands().is_empty() {
            self.default_commands.as_slice()
        } else {
            entry.commands()
        };
        let lines: Vec<String> = commands
            .iter()
            .chain(entry.validators())
            .map(|template| expand_template(template, name))
            .collect();

        if entry.retry() > 0 {
            out.push_str(&format!(
                "\t@retry=0; max_retry={}; \\\n",
                entry.retry()
            ));
            out.push_str(&format!("\tuntil ( {} ); do \\\n", lines.join(" && ")));
            out.push_str("\t\tretry=$$((retry+1)); \\\n");
            out.push_str("\t\techo \"Validation failed, retrying ($$retry/$$max_retry)\"; \\\n");
            out.push_str(
                "\t\tif [ $$retry -ge $$max_retry ]; then echo \"Maximum retry attempts reached\"; exit 1; fi; \\\n",
            );
            out.push_str("\tdone\n");
        } else {
            for line in &lines {
                out.push_str(&format!("\t{}\n", line));
            }
        }
        out.push('\n');
    }
}

/// Substitute `{name}` in a command template. `{{` and `}}` produce literal
/// braces; any other brace sequence is kept as written.
pub fn expand_template(template: &str, name: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len());
    let mut rest = template;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        if let Some(after) = rest.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = rest.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if let Some(after) = rest.strip_prefix("{name}") {
            out.push_str(name);
            rest = after;
        } else {
            out.push_str(&rest[..1]);
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    out
}
