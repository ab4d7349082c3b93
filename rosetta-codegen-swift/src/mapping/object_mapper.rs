//! Declarative binding through the ObjectMapper library.

use super::{MappedField, MappingStrategy};
use crate::{Func, Import, Param};

/// Generates a `Mappable` conformance binding every field with `<-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectMapperMapping;

impl MappingStrategy for ObjectMapperMapping {
    fn import(&self) -> Import {
        Import::new("ObjectMapper")
    }

    fn superclass(&self) -> &'static str {
        "Mappable"
    }

    fn members(&self, _class_name: &str, fields: &[MappedField]) -> Vec<Func> {
        let mapping = Func::new("mapping")
            .modifier("public")
            .param(Param::new("map", "Map"));
        let mapping = fields.iter().fold(mapping, |mapping, field| {
            mapping.body_line(format!("{} <- map[\"{}\"]", field.name, field.name))
        });

        vec![
            Func::initializer(),
            Func::failable_initializer()
                .modifier("required")
                .modifier("public")
                .param(Param::unlabeled("map", "Map")),
            mapping,
        ]
    }
}
