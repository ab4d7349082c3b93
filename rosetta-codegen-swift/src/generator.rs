use std::path::Path;

use rosetta_codegen::{
    GenerateResult, GenerationConfig, LanguageCodegen, PreviewFile, TypeMapper,
};
use rosetta_core::{FileWriteError, GeneratedFile};
use rosetta_model::ModelDefinition;

use crate::{
    Case, Class, Enum, FileHeader, Property, SwiftFile, SwiftTypeMapper, file_name,
    files::ModelSwift,
    mapping::{self, FieldShape, MappedField, MappingStrategy},
};

/// Render `model` as Swift source.
///
/// Pure: the same model and config always produce the same text.
pub fn emit(model: &ModelDefinition, config: &GenerationConfig) -> String {
    Generator::new(model, config).render()
}

/// Swift code generator for one model definition
pub struct Generator<'a> {
    model: &'a ModelDefinition,
    config: &'a GenerationConfig,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "swift"
    }

    fn preview(&self) -> PreviewFile {
        PreviewFile {
            path: file_name(&self.model.class_name),
            content: self.render(),
        }
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult, FileWriteError> {
        let file = ModelSwift::new(&self.model.class_name, self.render());
        file.write(output_dir)?;

        Ok(GenerateResult {
            path: file.path(output_dir),
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a ModelDefinition, config: &'a GenerationConfig) -> Self {
        Self { model, config }
    }

    /// Render the complete file with the configured indentation.
    pub fn render(&self) -> String {
        self.swift_file().render_with_indent(self.config.indent)
    }

    fn swift_file(&self) -> SwiftFile {
        let strategy = mapping::strategy(self.config.mapping);
        let fields: Vec<MappedField> = self.model.fields.iter().map(MappedField::classify).collect();

        let file = if self.config.add_header_comment {
            SwiftFile::new().header(self.header())
        } else {
            SwiftFile::new()
        };

        file.import(strategy.import())
            .add_all(self.enums(&fields))
            .add(self.class(strategy, &fields))
    }

    fn header(&self) -> FileHeader {
        FileHeader::new(
            file_name(&self.model.class_name),
            self.config.formatted_date(),
        )
        .project(&self.config.project)
        .author(&self.config.author)
        .copyright(self.config.copyright_year(), &self.config.company)
    }

    /// One enum per enumerated field, in field order.
    fn enums(&self, fields: &[MappedField]) -> Vec<Enum> {
        self.model
            .fields
            .iter()
            .zip(fields)
            .filter_map(|(field, mapped)| match &mapped.shape {
                FieldShape::Enum {
                    type_name,
                    raw_type,
                    ..
                } => Some(
                    Enum::new(type_name, raw_type).cases(
                        field
                            .enum_members()
                            .into_iter()
                            .map(|member| Case::new(member.name, member.literal)),
                    ),
                ),
                _ => None,
            })
            .collect()
    }

    fn class(&self, strategy: &dyn MappingStrategy, fields: &[MappedField]) -> Class {
        let properties = fields
            .iter()
            .map(|field| Property::new(&field.name, SwiftTypeMapper.map_optional(&field.swift_type())));

        Class::new(&self.model.class_name)
            .inherits(strategy.superclass())
            .properties(properties)
            .members(strategy.members(&self.model.class_name, fields))
    }
}
