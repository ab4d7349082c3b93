//! Swift emitter for extracted models.
//!
//! Produces one `<ClassName>.swift` file per [`ModelDefinition`]: an optional
//! header comment, the import required by the mapping strategy, one raw-value
//! enum per enumerated field and the model class itself.
//!
//! [`ModelDefinition`]: rosetta_model::ModelDefinition

mod generator;
mod naming;
mod swift_file;
mod type_mapper;

pub mod ast;
pub mod files;
pub mod mapping;

pub use ast::{Case, Class, Enum, FileHeader, Func, Import, Param, Property};
pub use generator::{Generator, emit};
pub use naming::{enum_type_name, file_name, local_name};
pub use rosetta_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use swift_file::SwiftFile;
pub use type_mapper::SwiftTypeMapper;
