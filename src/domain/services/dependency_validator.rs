//! Dependency validation
//!
//! Rejects entries that depend on themselves or on prompts that do not exist.
//! File references are external content and are not checked here.

use tracing::debug;

use crate::domain::entities::PromptSet;
use crate::error::GraphError;

/// Check every graph dependency of every entry.
///
/// Stops at the first failure, in declaration order, and reports it with the
/// declaring entry's position.
pub fn validate(prompts: &PromptSet) -> Result<(), GraphError> {
    for entry in prompts {
        for dependency in entry.graph_dependencies() {
            if dependency == entry.name {
                return Err(GraphError::SelfDependency {
                    name: entry.name.clone(),
                    position: entry.position,
                });
            }
            if !prompts.contains(dependency) {
                return Err(GraphError::UnknownDependency {
                    name: entry.name.clone(),
                    dependency: dependency.to_string(),
                    position: entry.position,
                });
            }
        }
    }

    debug!(entries = prompts.len(), "dependencies validated");
    Ok(())
}
