//! Swift function and initializer builder.

use rosetta_codegen::{CodeFragment, Renderable};

/// A function parameter, `label name: Type` or `name: Type`.
#[derive(Debug, Clone)]
pub struct Param {
    pub label: Option<String>,
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: None,
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Parameter without an argument label (`_ map: Map`).
    pub fn unlabeled(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: Some("_".to_string()),
            ..Self::new(name, ty)
        }
    }

    fn format(&self) -> String {
        match &self.label {
            Some(label) => format!("{} {}: {}", label, self.name, self.ty),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// Builder for Swift methods and initializers.
#[derive(Debug, Clone)]
pub struct Func {
    modifiers: Vec<String>,
    declaration: String,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Func {
    /// A method, `func name(...)`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::declared(format!("func {}", name.into()))
    }

    /// A designated initializer, `init(...)`.
    pub fn initializer() -> Self {
        Self::declared("init".to_string())
    }

    /// A failable initializer, `init?(...)`.
    pub fn failable_initializer() -> Self {
        Self::declared("init?".to_string())
    }

    fn declared(declaration: String) -> Self {
        Self {
            modifiers: Vec::new(),
            declaration,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Add a declaration modifier such as `public` or `static`.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = String::new();
        for modifier in &self.modifiers {
            signature.push_str(modifier);
            signature.push(' ');
        }
        signature.push_str(&format!("{}({})", self.declaration, params));
        if let Some(ret) = &self.return_type {
            signature.push_str(&format!(" -> {}", ret));
        }
        signature
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("{} {{", self.signature()),
            self.body.clone(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use rosetta_codegen::CodeBuilder;

    use super::*;

    fn build(f: &Func) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(f);
        builder.build()
    }

    #[test]
    fn test_empty_initializer() {
        assert_eq!(build(&Func::initializer()), "init() {\n}\n");
    }

    #[test]
    fn test_failable_initializer() {
        let f = Func::failable_initializer()
            .modifier("required")
            .modifier("public")
            .param(Param::unlabeled("map", "Map"));
        assert_eq!(build(&f), "required public init?(_ map: Map) {\n}\n");
    }

    #[test]
    fn test_method_with_return_type() {
        let f = Func::new("map")
            .modifier("static")
            .param(Param::new("array", "[AnyObject]"))
            .returns("[Pet]")
            .body_line("return []");
        assert_eq!(
            build(&f),
            "static func map(array: [AnyObject]) -> [Pet] {\n    return []\n}\n"
        );
    }

    #[test]
    fn test_nested_body() {
        let f = Func::new("map")
            .param(Param::new("dictionary", "[String: Any]"))
            .body_fragment(CodeFragment::braced(
                "if let id = dictionary[\"id\"] as? Int {",
                vec![CodeFragment::line("self.id = id")],
            ));
        assert_eq!(
            build(&f),
            "func map(dictionary: [String: Any]) {\n    if let id = dictionary[\"id\"] as? Int {\n        self.id = id\n    }\n}\n"
        );
    }
}
