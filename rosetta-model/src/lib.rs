//! Model extraction for Swagger-style data model descriptions.
//!
//! Turns text such as
//!
//! ```text
//! Pet {
//!   id (integer, optional),
//!   tags (Array[Tag], optional),
//!   status (string, optional): pet status in the store = ['available', 'pending', 'sold']
//! }
//! ```
//!
//! into a [`ModelDefinition`]: a class name plus its ordered
//! [`FieldDescriptor`]s.
//!
//! ```
//! let model = rosetta_model::extract_model("Pet { id(integer) \n name(string) }").unwrap();
//!
//! assert_eq!(model.class_name, "Pet");
//! assert_eq!(model.fields[0].resolved_type(), "Int");
//! assert_eq!(model.fields[1].resolved_type(), "string");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod extract;
mod scan;
mod types;

pub use error::{Error, LineError, ModelError, Result, SourceContext};
pub use extract::{extract_model, extract_model_with_filename, parse_field_line};
pub use types::{EnumMember, FieldDescriptor, Keyword, ModelDefinition, TypeRef};
