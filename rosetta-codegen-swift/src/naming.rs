//! Swift naming conventions for generated declarations.

use rosetta_core::{capitalize_first, lowercase_first};

/// Type name of the enum generated for an enumerated field (`status` -> `Status`).
pub fn enum_type_name(field_name: &str) -> String {
    capitalize_first(field_name)
}

/// Local variable holding a freshly constructed instance of `type_name`.
pub fn local_name(type_name: &str) -> String {
    lowercase_first(type_name)
}

/// Output file name for a model class.
pub fn file_name(class_name: &str) -> String {
    format!("{}.swift", class_name)
}
