//! Generate command report data structures.

use std::path::PathBuf;

use rosetta_codegen::MappingMode;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub class_name: String,
    /// Target language of the generator.
    pub language: &'static str,
    pub field_count: usize,
    pub enum_count: usize,
    /// Requested mapping mode, possibly a reserved one.
    pub mapping: MappingMode,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to this path.
    Written(PathBuf),
    /// Dry-run preview of the file content.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.mapping.is_implemented() {
            out.warning(&format!(
                "{} is not available yet, generating manual mapping",
                self.mapping.label()
            ));
        }

        match &self.result {
            GenerationResult::Preview(content) => out.raw(content),
            GenerationResult::Written(path) => {
                out.preformatted(&format!(
                    "{} ({}, {} field{}, {} enum{})",
                    self.class_name,
                    self.language,
                    self.field_count,
                    plural(self.field_count),
                    self.enum_count,
                    plural(self.enum_count)
                ));
                out.added_item(&path.display().to_string());
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(mapping: MappingMode, result: GenerationResult) -> GenerateReport {
        GenerateReport {
            class_name: "Pet".to_string(),
            language: "swift",
            field_count: 6,
            enum_count: 1,
            mapping,
            result,
        }
    }

    #[test]
    fn test_preview_prints_code_only() {
        let mut out = BufferOutput::default();
        report(
            MappingMode::Manual,
            GenerationResult::Preview("import Foundation\n".to_string()),
        )
        .render(&mut out);

        assert_eq!(out.buffer, "import Foundation\n");
    }

    #[test]
    fn test_written_summary() {
        let mut out = BufferOutput::default();
        report(
            MappingMode::ObjectMapper,
            GenerationResult::Written(PathBuf::from("out/Pet.swift")),
        )
        .render(&mut out);

        assert_eq!(out.buffer, "Pet (swift, 6 fields, 1 enum)\n  + out/Pet.swift\n");
    }

    #[test]
    fn test_reserved_mode_warns() {
        let mut out = BufferOutput::default();
        report(
            MappingMode::Freddy,
            GenerationResult::Preview(String::new()),
        )
        .render(&mut out);

        assert_eq!(
            out.buffer,
            "warning: Freddy (coming soon) is not available yet, generating manual mapping\n"
        );
    }
}
