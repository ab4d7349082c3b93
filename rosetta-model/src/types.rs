//! Parsed model types.

use std::fmt;

use rosetta_core::to_camel_case;
use serde::Serialize;

/// Type keywords that map onto target-language builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Number,
    Integer,
    Boolean,
}

impl Keyword {
    /// Look up a raw type token in the builtin type table.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "number" => Some(Keyword::Number),
            "integer" => Some(Keyword::Integer),
            "boolean" => Some(Keyword::Boolean),
            _ => None,
        }
    }

    /// The builtin type the keyword resolves to.
    pub fn builtin_name(&self) -> &'static str {
        match self {
            Keyword::Number => "Double",
            Keyword::Integer => "Int",
            Keyword::Boolean => "Bool",
        }
    }
}

/// A field type after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum TypeRef {
    /// `number`, `integer` or `boolean`.
    Keyword(Keyword),
    /// Any other token, passed through unchanged (`string`, `Category`, ...).
    Named(String),
    /// `Array[X]` or `[X]`.
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Classify a raw type token.
    ///
    /// Returns `None` for empty tokens and for tokens with stray brackets
    /// or parentheses.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(inner) = array_element(token) {
            return TypeRef::parse(inner).map(|ty| TypeRef::Array(Box::new(ty)));
        }

        if token.is_empty() || token.contains(['[', ']', '(', ')']) {
            return None;
        }

        Some(match Keyword::from_token(token) {
            Some(keyword) => TypeRef::Keyword(keyword),
            None => TypeRef::Named(token.to_string()),
        })
    }

    /// The resolved type name: keywords substituted, arrays bracket-wrapped.
    pub fn resolved(&self) -> String {
        self.to_string()
    }

    /// Element type of an array, `None` for scalars.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Keyword(keyword) => f.write_str(keyword.builtin_name()),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Array(inner) => write!(f, "[{}]", inner),
        }
    }
}

/// `Array[X]` and `[X]` yield `X`.
fn array_element(token: &str) -> Option<&str> {
    let rest = match token.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("array[") => &token[5..],
        _ => token,
    };
    rest.strip_prefix('[')?.strip_suffix(']')
}

/// One member of an inline enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// camelCase identifier (`PLAY_AGAIN` -> `playAgain`).
    pub name: String,
    /// The original value with single quotes turned into double quotes.
    pub literal: String,
}

impl EnumMember {
    pub fn from_raw(raw: &str) -> Self {
        let unquoted: String = raw.chars().filter(|c| !matches!(c, '\'' | '"')).collect();

        Self {
            name: to_camel_case(&unquoted),
            literal: raw.replace('\'', "\""),
        }
    }

    /// Whether the literal is a quoted string.
    pub fn is_quoted(&self) -> bool {
        self.literal.len() >= 2 && self.literal.starts_with('"') && self.literal.ends_with('"')
    }
}

/// One model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// The raw type token, e.g. `integer` or `Array[Tag]`.
    pub declared_type: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Raw values of an inline enumeration, never empty when present.
    pub enum_values: Option<Vec<String>>,
}

impl FieldDescriptor {
    pub fn resolved_type(&self) -> String {
        self.ty.resolved()
    }

    pub fn is_enum(&self) -> bool {
        self.enum_values.is_some()
    }

    /// Normalized enumeration members in declaration order.
    pub fn enum_members(&self) -> Vec<EnumMember> {
        self.enum_values
            .iter()
            .flatten()
            .map(|raw| EnumMember::from_raw(raw))
            .collect()
    }
}

/// The parsed result of one model description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDefinition {
    pub class_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDefinition {
    /// Fields carrying an inline enumeration, in declaration order.
    pub fn enum_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_enum())
    }
}
