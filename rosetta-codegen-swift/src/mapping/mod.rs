//! Mapping strategies: how a generated class fills its properties from an
//! untyped dictionary.
//!
//! Each implemented [`MappingMode`] owns a [`MappingStrategy`]. The strategy
//! decides the import, the class' superclass or protocol and the members
//! emitted after the property declarations. Property names and types are
//! shared by every strategy.

mod manual;
mod object_mapper;

use rosetta_codegen::{MappingMode, TypeMapper};
use rosetta_model::{FieldDescriptor, TypeRef};

pub use self::{manual::ManualMapping, object_mapper::ObjectMapperMapping};
use crate::{Func, Import, SwiftTypeMapper, enum_type_name};

/// Emission strategy of one mapping mode.
pub trait MappingStrategy {
    /// Module imported at the top of the file.
    fn import(&self) -> Import;

    /// Superclass or protocol the model class inherits.
    fn superclass(&self) -> &'static str;

    /// Members emitted after the property declarations.
    fn members(&self, class_name: &str, fields: &[MappedField]) -> Vec<Func>;
}

/// The strategy generating `mode`. Reserved modes are generated manually.
pub fn strategy(mode: MappingMode) -> &'static dyn MappingStrategy {
    match mode {
        MappingMode::ObjectMapper => &ObjectMapperMapping,
        MappingMode::Manual | MappingMode::SwiftyJson | MappingMode::Freddy | MappingMode::Gloss => {
            &ManualMapping
        }
    }
}

/// How a field value is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// Inline enumeration constructed from its raw value.
    Enum {
        type_name: String,
        raw_type: String,
        is_array: bool,
    },
    /// Builtin scalar, or any array that is not a flat array of nested
    /// models. Cast directly.
    Builtin { ty: String },
    /// Array of nested model types.
    CustomArray { element: String },
    /// Nested model type.
    Custom { type_name: String },
}

/// A field after Swift type classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    pub name: String,
    pub shape: FieldShape,
}

impl MappedField {
    pub fn classify(field: &FieldDescriptor) -> Self {
        let mapper = SwiftTypeMapper;

        let shape = if field.is_enum() {
            let (raw, is_array) = match field.ty.element() {
                Some(inner) => (inner, true),
                None => (&field.ty, false),
            };
            FieldShape::Enum {
                type_name: enum_type_name(&field.name),
                raw_type: mapper.map_type(raw),
                is_array,
            }
        } else {
            match &field.ty {
                TypeRef::Array(inner) if !inner.is_array() && mapper.is_custom(inner) => {
                    FieldShape::CustomArray {
                        element: mapper.map_type(inner),
                    }
                }
                ty if !ty.is_array() && mapper.is_custom(ty) => FieldShape::Custom {
                    type_name: mapper.map_type(ty),
                },
                ty => FieldShape::Builtin {
                    ty: mapper.map_type(ty),
                },
            }
        };

        Self {
            name: field.name.clone(),
            shape,
        }
    }

    /// Property type without the optional marker.
    pub fn swift_type(&self) -> String {
        let mapper = SwiftTypeMapper;
        match &self.shape {
            FieldShape::Enum {
                type_name,
                is_array: true,
                ..
            } => mapper.map_array(type_name),
            FieldShape::Enum { type_name, .. } => type_name.clone(),
            FieldShape::Builtin { ty } => ty.clone(),
            FieldShape::CustomArray { element } => mapper.map_array(element),
            FieldShape::Custom { type_name } => type_name.clone(),
        }
    }
}
