//! Domain Layer
//!
//! The prompt graph and the algorithms over it.
//!
//! ## Structure
//!
//! - `entities/` - `Entry`, `Dependency`, `PromptSet`
//! - `services/` - validator, inheritance resolver, assembler, Makefile emitter
//! - `ports/` - interface definitions for infrastructure
//!
//! Services never touch the disk directly; artifact reads go through the
//! `FileSystem` port.

pub mod entities;
pub mod ports;
pub mod services;
