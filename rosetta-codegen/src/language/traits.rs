//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use rosetta_core::FileWriteError;
use rosetta_model::{Keyword, TypeRef};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting models in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "swift")
    fn language(&self) -> &'static str;

    /// Render the generated file without writing to disk
    fn preview(&self) -> PreviewFile;

    /// Write the generated file into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult, FileWriteError>;
}

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the written file
    pub path: PathBuf,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping model types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map a builtin keyword (`number`, `integer`, `boolean`)
    fn map_keyword(&self, keyword: Keyword) -> String;

    /// Map a pass-through type name (`string`, `Category`, ...)
    fn map_named(&self, name: &str) -> String;

    /// Wrap an already mapped element type in the language's array syntax
    fn map_array(&self, inner: &str) -> String;

    /// Wrap an already mapped type in the language's optional syntax
    fn map_optional(&self, inner: &str) -> String;

    /// Whether a pass-through type name denotes a language builtin
    /// rather than a nested model type
    fn is_builtin(&self, name: &str) -> bool;

    /// Map a full type reference
    fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Keyword(keyword) => self.map_keyword(*keyword),
            TypeRef::Named(name) => self.map_named(name),
            TypeRef::Array(inner) => self.map_array(&self.map_type(inner)),
        }
    }

    /// Whether the type (or array element type) is a nested model type
    fn is_custom(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Keyword(_) => false,
            TypeRef::Named(name) => !self.is_builtin(name),
            TypeRef::Array(inner) => self.is_custom(inner),
        }
    }
}
