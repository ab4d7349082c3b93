//! Swift type mapper implementation.

use rosetta_codegen::TypeMapper;
use rosetta_core::capitalize_first;
use rosetta_model::Keyword;

/// Type names Swift provides out of the box, compared case-insensitively.
const BUILTIN_TYPES: &[&str] = &[
    "int",
    "uint",
    "float",
    "double",
    "bool",
    "string",
    "character",
];

/// Swift type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftTypeMapper;

impl TypeMapper for SwiftTypeMapper {
    fn map_keyword(&self, keyword: Keyword) -> String {
        keyword.builtin_name().to_string()
    }

    fn map_named(&self, name: &str) -> String {
        capitalize_first(name)
    }

    fn map_array(&self, inner: &str) -> String {
        format!("[{}]", inner)
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("{}?", inner)
    }

    fn is_builtin(&self, name: &str) -> bool {
        BUILTIN_TYPES.iter().any(|b| b.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use rosetta_model::TypeRef;

    use super::*;

    fn map(token: &str) -> String {
        SwiftTypeMapper.map_type(&TypeRef::parse(token).unwrap())
    }

    #[test]
    fn test_keywords() {
        assert_eq!(map("integer"), "Int");
        assert_eq!(map("number"), "Double");
        assert_eq!(map("boolean"), "Bool");
    }

    #[test]
    fn test_named_types_are_capitalized() {
        assert_eq!(map("string"), "String");
        assert_eq!(map("Category"), "Category");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(map("Array[string]"), "[String]");
        assert_eq!(map("[Tag]"), "[Tag]");
        assert_eq!(map("Array[Array[integer]]"), "[[Int]]");
    }

    #[test]
    fn test_optional() {
        assert_eq!(SwiftTypeMapper.map_optional("[Tag]"), "[Tag]?");
    }

    #[test]
    fn test_builtin_table() {
        assert!(SwiftTypeMapper.is_builtin("string"));
        assert!(SwiftTypeMapper.is_builtin("String"));
        assert!(SwiftTypeMapper.is_builtin("UInt"));
        assert!(SwiftTypeMapper.is_builtin("character"));
        assert!(!SwiftTypeMapper.is_builtin("Category"));
        assert!(!SwiftTypeMapper.is_builtin("date"));
    }

    #[test]
    fn test_custom_classification() {
        let custom = |token: &str| SwiftTypeMapper.is_custom(&TypeRef::parse(token).unwrap());

        assert!(custom("Category"));
        assert!(custom("Array[Tag]"));
        assert!(!custom("Array[string]"));
        assert!(!custom("integer"));
    }
}
