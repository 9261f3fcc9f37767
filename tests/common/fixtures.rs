//! Prompt documents shared by the CLI tests.

#![allow(dead_code)]

/// Two independent prompts, default commands
pub const SIMPLE: &str = r#"landscape:
    "Describe a natural landscape with mountains."

sea:
    "Describe a calm sea."
"#;

/// Children inherit commands and validators through a chain
pub const INHERITANCE: &str = r#"_global:
    "You are writing a fantasy travel guide."

landscape: _global
    "Describe a natural landscape with mountains."
    command: "cat {name}.prompt > {name}.txt"
    validator: "test -s {name}.txt"

village: _global, landscape
    "Describe a small village inside the previously described landscape."

inn: village
    "Describe the inn at the center of the village."
"#;

/// Two parents define validators; the child cannot choose
pub const MULTI_PARENTS: &str = r#"forest:
    "Describe a forest."
    validator: "grep -q tree {name}.txt"

city:
    "Describe a city."
    validator: "grep -q street {name}.txt"

village: forest, city
    "Describe a village between the forest and the city."
"#;

/// Keyed form with several commands, validators and retries
pub const VALIDATOR: &str = r#"_global:
    text: "Shared context"

landscape: _global
    text: "Describe a natural landscape with mountains."
    command: "ollama run mistral < {name}.prompt | tee {name}.txt"
    command: "ollama run deepseek-r1:14b < {name}.prompt | tee {name}.alt.txt"
    validator: "grep -q 'mountains' {name}.txt || (echo 'Validation failed: No mountains mentioned.' >&2; exit 1)"
    auto_retry: "2"

village: _global, landscape
    text: "Describe a small village inside the previously described landscape."
    command: "ollama run gemma:2b < {name}.prompt | tee {name}.txt"
    validator: "grep -q 'village' {name}.txt || (echo 'Validation failed: No village mentioned.' >&2; exit 1)" retry 3
"#;

pub const MISSING_COLON: &str = r#"city:
    text: "Describe a futuristic city"
    command "ollama run deepseek-r1:14b < {name}.prompt | tee {name}.txt"  # Missing colon
    validator: "grep -q 'city' {name}.txt || (echo 'Validation failed: No city mentioned.' >&2; exit 1)"
"#;

pub const TRAILING_COMMA: &str = r#"forest: city,
    text: "Describe the nearby forest"
    command: "ollama run mistral < {name}.prompt | tee {name}.txt"
"#;
