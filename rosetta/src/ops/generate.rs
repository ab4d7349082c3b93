//! Generate operation - Swift emission for one model.

use std::path::Path;

use rosetta_codegen::GenerationConfig;
use rosetta_codegen_swift::{Generator, LanguageCodegen};
use rosetta_core::FileWriteError;
use rosetta_model::ModelDefinition;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving `<ClassName>.swift`.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    model: &ModelDefinition,
    config: &GenerationConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport, FileWriteError> {
    let generator = Generator::new(model, config);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview().content)
    } else {
        GenerationResult::Written(generator.generate(opts.output_dir)?.path)
    };

    Ok(GenerateReport {
        class_name: model.class_name.clone(),
        language: generator.language(),
        field_count: model.fields.len(),
        enum_count: model.enum_fields().count(),
        mapping: config.mapping,
        result,
    })
}

#[cfg(test)]
mod tests {
    use rosetta_codegen::MappingMode;
    use rosetta_model::extract_model;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let model = extract_model("Pet { id(integer) \n status(string, ['a', 'b']) }").unwrap();
        let config = GenerationConfig::new();

        let report = generate(
            &model,
            &config,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(report.language, "swift");
        assert_eq!(report.field_count, 2);
        assert_eq!(report.enum_count, 1);
        assert!(matches!(report.result, GenerationResult::Preview(ref code) if code.contains("enum Status")));
        assert!(!dir.path().join("Pet.swift").exists());
    }

    #[test]
    fn test_writes_class_file() {
        let dir = TempDir::new().unwrap();
        let model = extract_model("Pet { id(integer) }").unwrap();
        let config = GenerationConfig::new().with_mapping(MappingMode::ObjectMapper);

        let report = generate(
            &model,
            &config,
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        let path = dir.path().join("Pet.swift");
        assert!(matches!(report.result, GenerationResult::Written(ref written) if written == &path));
        assert!(std::fs::read_to_string(path).unwrap().contains("import ObjectMapper"));
    }
}
