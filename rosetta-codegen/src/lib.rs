//! Shared code generation utilities for the Rosetta model generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific emitters (e.g., `rosetta-codegen-swift`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Indent)
//! - [`config`] - Per-invocation generation settings (GenerationConfig, MappingMode)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)

pub mod builder;
pub mod config;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use config::{DEFAULT_DATE_FORMAT, GenerationConfig, MappingMode, is_valid_date_format};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
