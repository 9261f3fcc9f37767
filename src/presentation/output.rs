//! Output Rendering
//!
//! Entry listings (text or JSON lines) and delivery of generated text to
//! stdout or a file.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::entities::{Entry, PromptSet};
use crate::domain::services::summarize_changes;
use crate::error::LlmakeResult;
use crate::infrastructure::{LocalFs, WriteOutcome};

/// Output format for the entry listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

pub fn render_listing(prompts: &PromptSet, format: OutputFormat) -> String {
    let mut out = String::new();
    for entry in prompts {
        match format {
            OutputFormat::Text => render_entry_text(&mut out, entry),
            OutputFormat::Json => {
                out.push_str(&entry_json(entry).to_string());
                out.push('\n');
            }
        }
    }
    out
}

fn kind(entry: &Entry) -> &'static str {
    if entry.is_macro() {
        "macro"
    } else {
        "artifact"
    }
}

fn render_entry_text(out: &mut String, entry: &Entry) {
    out.push_str(&format!("{} ({})", entry.name, kind(entry)));
    if !entry.dependencies.is_empty() {
        let deps: Vec<&str> = entry.dependencies.iter().map(|d| d.reference()).collect();
        out.push_str(&format!(" <- {}", deps.join(", ")));
    }
    out.push('\n');

    for command in entry.commands() {
        out.push_str(&format!("  command: {}\n", command));
    }
    for validator in entry.validators() {
        out.push_str(&format!("  validator: {}\n", validator));
    }
    if entry.retry() > 0 {
        out.push_str(&format!("  retry: {}\n", entry.retry()));
    }
}

fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "name": entry.name,
        "kind": kind(entry),
        "line": entry.position.line,
        "dependencies": entry.dependencies.iter().map(|d| d.reference()).collect::<Vec<_>>(),
        "commands": entry.commands(),
        "validators": entry.validators(),
        "retry": entry.retry(),
    })
}

/// Print to stdout, or write `path` atomically when the content changed.
pub fn deliver(content: &str, path: Option<&Path>) -> LlmakeResult<()> {
    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    match LocalFs::new()
        .write_if_changed(path, content)
        .map_err(std::io::Error::from)?
    {
        WriteOutcome::Created => info!(path = %path.display(), "written"),
        WriteOutcome::Updated { previous } => info!(
            path = %path.display(),
            changes = %summarize_changes(&previous, content),
            "updated"
        ),
        WriteOutcome::Unchanged => info!(path = %path.display(), "unchanged"),
    }
    Ok(())
}
