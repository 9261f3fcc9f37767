//! Inheritance Resolver
//!
//! Fills in the commands, validators and retry count an entry does not declare
//! from its graph parents, processing entries in topological order so every
//! parent is resolved before its children.
//!
//! Policy per property:
//! - commands / validators: an entry's own non-empty list wins. Otherwise the
//!   list comes from the single parent that has one; two or more such parents
//!   is an ambiguity error. Parents are counted as listed, so naming the same
//!   defining parent twice is ambiguous too.
//! - retry: an entry's own positive value wins. Otherwise it is the maximum
//!   over all parents (never ambiguous).
//!
//! Resolution only reads declared values, so running it twice gives the same
//! result as running it once.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::domain::entities::{Entry, Properties, PromptSet};
use crate::error::GraphError;

const COMMANDS: &str = "commands";
const VALIDATORS: &str = "validators";

/// Resolve inherited properties of every entry in place.
pub fn resolve(prompts: &mut PromptSet) -> Result<(), GraphError> {
    let order = topological_order(prompts)?;

    let mut resolved: HashMap<&str, Properties> = HashMap::with_capacity(order.len());
    for &name in &order {
        let Some(entry) = prompts.get(name) else {
            continue;
        };
        let parents: Vec<&Properties> = entry
            .graph_dependencies()
            .filter_map(|parent| resolved.get(parent))
            .collect();

        let properties = resolve_entry(entry, &parents)?;
        trace!(
            prompt = name,
            commands = properties.commands.len(),
            validators = properties.validators.len(),
            retry = properties.retry,
            "resolved"
        );
        resolved.insert(name, properties);
    }

    let resolved: Vec<(String, Properties)> = resolved
        .into_iter()
        .map(|(name, properties)| (name.to_string(), properties))
        .collect();
    for (name, properties) in resolved {
        if let Some(entry) = prompts.get_mut(&name) {
            entry.set_resolved(properties);
        }
    }

    debug!(entries = prompts.len(), "inheritance resolved");
    Ok(())
}

/// Kahn's algorithm over graph dependencies, seeded in declaration order.
///
/// Entries that never reach in-degree zero form (or hang off) a cycle and are
/// reported in declaration order.
pub fn topological_order(prompts: &PromptSet) -> Result<Vec<&str>, GraphError> {
    let mut in_degree: Vec<usize> = vec![0; prompts.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); prompts.len()];

    for (idx, entry) in prompts.iter().enumerate() {
        for parent in unique_parents(entry) {
            let Some(parent_idx) = prompts.index_of(parent) else {
                return Err(GraphError::UnknownDependency {
                    name: entry.name.clone(),
                    dependency: parent.to_string(),
                    position: entry.position,
                });
            };
            children[parent_idx].push(idx);
            in_degree[idx] += 1;
        }
    }

    let mut ready: VecDeque<usize> = (0..prompts.len())
        .filter(|&idx| in_degree[idx] == 0)
        .collect();
    let mut order = Vec::with_capacity(prompts.len());

    while let Some(idx) = ready.pop_front() {
        order.push(idx);
        for &child in &children[idx] {
            in_degree[child] -= 1;
            if in_degree[child] == 0 {
                ready.push_back(child);
            }
        }
    }

    let names: Vec<&str> = prompts.names().collect();
    if order.len() < names.len() {
        let stuck = (0..names.len())
            .filter(|&idx| in_degree[idx] > 0)
            .map(|idx| names[idx].to_string())
            .collect();
        return Err(GraphError::CyclicDependency { prompts: stuck });
    }

    Ok(order.into_iter().map(|idx| names[idx]).collect())
}

/// Graph parents of `entry`, de-duplicated, in declaration order.
fn unique_parents(entry: &Entry) -> Vec<&str> {
    let mut parents: Vec<&str> = Vec::new();
    for parent in entry.graph_dependencies() {
        if !parents.contains(&parent) {
            parents.push(parent);
        }
    }
    parents
}

fn resolve_entry(entry: &Entry, parents: &[&Properties]) -> Result<Properties, GraphError> {
    let declared = &entry.declared;

    let commands = inherit_list(entry, &declared.commands, parents, COMMANDS, |p| {
        &p.commands
    })?;
    let validators = inherit_list(entry, &declared.validators, parents, VALIDATORS, |p| {
        &p.validators
    })?;
    let retry = if declared.retry > 0 {
        declared.retry
    } else {
        parents.iter().map(|p| p.retry).max().unwrap_or(0)
    };

    Ok(Properties {
        commands,
        validators,
        retry,
    })
}

fn inherit_list(
    entry: &Entry,
    own: &[String],
    parents: &[&Properties],
    property: &'static str,
    select: impl Fn(&Properties) -> &Vec<String>,
) -> Result<Vec<String>, GraphError> {
    if !own.is_empty() {
        return Ok(own.to_vec());
    }

    let mut candidates = parents.iter().map(|p| select(p)).filter(|l| !l.is_empty());
    match (candidates.next(), candidates.next()) {
        (None, _) => Ok(Vec::new()),
        (Some(list), None) => Ok(list.clone()),
        (Some(_), Some(_)) => Err(GraphError::AmbiguousInheritance {
            prompt: entry.name.clone(),
            property,
        }),
    }
}
