//! SwiftFile abstraction for structured Swift file generation.
//!
//! Provides a high-level API for generating Swift files with an optional
//! header comment, imports and body declarations.

use rosetta_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::{FileHeader, Import};

/// A structured representation of a Swift file.
///
/// Sections are separated by a blank line, as are body declarations.
///
/// # Example
///
/// ```
/// use rosetta_codegen_swift::{Case, Enum, Import, SwiftFile};
///
/// let code = SwiftFile::new()
///     .import(Import::new("Foundation"))
///     .add(Enum::new("Status", "String").case(Case::new("sold", "\"sold\"")))
///     .render();
///
/// assert_eq!(
///     code,
///     "import Foundation\n\nenum Status: String {\n    case sold = \"sold\"\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct SwiftFile {
    header: Option<FileHeader>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl SwiftFile {
    /// Create a new empty SwiftFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment.
    pub fn header(mut self, header: FileHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Swift indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::SWIFT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(header) = &self.header {
            builder.emit(header);
            if !self.imports.is_empty() || !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, Property};

    #[test]
    fn test_empty_file() {
        let file = SwiftFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_then_import() {
        let file = SwiftFile::new()
            .header(FileHeader::new("Tag.swift", "01/02/2020"))
            .import(Import::new("Foundation"));

        assert_eq!(
            file.render(),
            "//\n//  Tag.swift\n//\n//  Created on 01/02/2020\n//\n\nimport Foundation\n"
        );
    }

    #[test]
    fn test_body_elements_separated_by_blank_line() {
        let file = SwiftFile::new()
            .import(Import::new("Foundation"))
            .add_all([
                Class::new("A").property(Property::new("id", "Int?")),
                Class::new("B").property(Property::new("id", "Int?")),
            ]);

        assert_eq!(
            file.render(),
            "import Foundation\n\npublic class A {\n    var id: Int?\n}\n\npublic class B {\n    var id: Int?\n}\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let file = SwiftFile::new().add(Class::new("A").property(Property::new("id", "Int?")));
        let code = file.render_with_indent(Indent::spaces(2).unwrap());
        assert_eq!(code, "public class A {\n  var id: Int?\n}\n");
    }
}
