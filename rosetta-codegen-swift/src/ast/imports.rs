use rosetta_codegen::{CodeFragment, Renderable};

/// A Swift import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    module: String,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("import {}", self.module))]
    }
}

#[cfg(test)]
mod tests {
    use rosetta_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_import() {
        let mut builder = CodeBuilder::swift();
        builder.emit(&Import::new("ObjectMapper"));
        assert_eq!(builder.build(), "import ObjectMapper\n");
    }
}
