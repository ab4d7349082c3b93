//! Swift class builder.

use rosetta_codegen::{CodeFragment, Renderable};

/// A stored property, always declared optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// The property type including its optional marker.
    pub ty: String,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Swift classes.
///
/// Properties come first, each member after them is preceded by a blank line.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    superclass: Option<String>,
    properties: Vec<Property>,
    members: Vec<Vec<CodeFragment>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            properties: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Set the superclass or protocol listed after the class name.
    pub fn inherits(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn member<R: Renderable>(mut self, member: R) -> Self {
        self.members.push(member.to_fragments());
        self
    }

    pub fn members<R: Renderable>(self, members: impl IntoIterator<Item = R>) -> Self {
        members.into_iter().fold(self, Class::member)
    }

    fn header(&self) -> String {
        match &self.superclass {
            Some(superclass) => format!("public class {}: {} {{", self.name, superclass),
            None => format!("public class {} {{", self.name),
        }
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .properties
            .iter()
            .map(|p| CodeFragment::line(format!("var {}: {}", p.name, p.ty)))
            .collect();

        for member in &self.members {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.push(CodeFragment::sequence(member.clone()));
        }

        vec![CodeFragment::braced(self.header(), body)]
    }
}
