//! Core utilities and types for the Rosetta model generator.
//!
//! This crate provides the file output primitives and the naming helpers
//! shared by the extractor, the emitters and the command line front end.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, FileWriteError, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{capitalize_first, lowercase_first, to_camel_case};
