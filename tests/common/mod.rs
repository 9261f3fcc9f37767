//! Common test utilities for llmake CLI tests.
//!
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - Fixtures: prompt documents mirroring real-world usage

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
