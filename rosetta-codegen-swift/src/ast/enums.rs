//! Swift raw-value enum builder.

use rosetta_codegen::{CodeFragment, Renderable};

/// A case in a Swift enum with an explicit raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub value: String,
}

impl Case {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builder for Swift enums backed by a raw type.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    raw_type: String,
    cases: Vec<Case>,
}

impl Enum {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            cases: Vec::new(),
        }
    }

    /// Add a case. Bare values of a `String` backed enum get quoted.
    pub fn case(mut self, case: Case) -> Self {
        let case = if self.raw_type == "String" && !is_string_literal(&case.value) {
            Case::new(case.name, format!("\"{}\"", case.value))
        } else {
            case
        };
        self.cases.push(case);
        self
    }

    pub fn cases(self, cases: impl IntoIterator<Item = Case>) -> Self {
        cases.into_iter().fold(self, Enum::case)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_string_literal(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("enum {}: {} {{", self.name, self.raw_type);

        if self.cases.is_empty() {
            return vec![CodeFragment::line(format!("{}}}", header))];
        }

        let body = self
            .cases
            .iter()
            .map(|case| CodeFragment::line(format!("case {} = {}", case.name, case.value)))
            .collect();
        vec![CodeFragment::braced(header, body)]
    }
}
