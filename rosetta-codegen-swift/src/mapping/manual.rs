//! Hand-written dictionary mapping on top of `NSObject`.

use rosetta_codegen::CodeFragment;

use super::{FieldShape, MappedField, MappingStrategy};
use crate::{Func, Import, Param, local_name};

/// Generates a `map(array:)` collection helper and a `map(dictionary:)`
/// instance mapper with one branch per field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualMapping;

impl MappingStrategy for ManualMapping {
    fn import(&self) -> Import {
        Import::new("Foundation")
    }

    fn superclass(&self) -> &'static str {
        "NSObject"
    }

    fn members(&self, class_name: &str, fields: &[MappedField]) -> Vec<Func> {
        vec![collection_helper(class_name), instance_mapper(fields)]
    }
}

fn collection_helper(class_name: &str) -> Func {
    let local = local_name(class_name);

    Func::new("map")
        .modifier("static")
        .param(Param::new("array", "[AnyObject]"))
        .returns(format!("[{}]", class_name))
        .body_line(format!("var mappedArray = [{}]()", class_name))
        .body_fragment(CodeFragment::braced(
            "for element in array {",
            vec![CodeFragment::braced(
                "if let dictionary = element as? [String: Any] {",
                vec![
                    CodeFragment::line(format!("let {} = {}()", local, class_name)),
                    CodeFragment::line(format!("{}.map(dictionary: dictionary)", local)),
                    CodeFragment::line(format!("mappedArray.append({})", local)),
                ],
            )],
        ))
        .body_blank()
        .body_line("return mappedArray")
}

fn instance_mapper(fields: &[MappedField]) -> Func {
    let mapper = Func::new("map").param(Param::new("dictionary", "[String: Any]"));
    fields
        .iter()
        .fold(mapper, |mapper, field| mapper.body_fragment(branch(field)))
}

fn branch(field: &MappedField) -> CodeFragment {
    let name = &field.name;
    let value = format!("dictionary[\"{}\"]", name);

    match &field.shape {
        FieldShape::Builtin { ty } => {
            CodeFragment::line(format!("self.{} = {} as? {}", name, value, ty))
        }
        FieldShape::Enum {
            type_name,
            raw_type,
            is_array: false,
        } => CodeFragment::line(format!(
            "self.{} = ({} as? {}).flatMap({}.init(rawValue:))",
            name, value, raw_type, type_name
        )),
        FieldShape::Enum {
            type_name,
            raw_type,
            is_array: true,
        } => CodeFragment::line(format!(
            "self.{} = ({} as? [{}])?.compactMap({}.init(rawValue:))",
            name, value, raw_type, type_name
        )),
        FieldShape::CustomArray { element } => CodeFragment::braced(
            format!("if let {}Array = {} as? [AnyObject] {{", name, value),
            vec![CodeFragment::line(format!(
                "self.{} = {}.map(array: {}Array)",
                name, element, name
            ))],
        ),
        FieldShape::Custom { type_name } => CodeFragment::braced(
            format!("if let {}Dictionary = {} as? [String: Any] {{", name, value),
            vec![
                CodeFragment::line(format!("let {} = {}()", name, type_name)),
                CodeFragment::line(format!("{}.map(dictionary: {}Dictionary)", name, name)),
                CodeFragment::line(format!("self.{} = {}", name, name)),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use rosetta_codegen::CodeBuilder;

    use super::*;

    fn field(name: &str, shape: FieldShape) -> MappedField {
        MappedField {
            name: name.to_string(),
            shape,
        }
    }

    fn render(fragment: CodeFragment) -> String {
        let mut builder = CodeBuilder::swift();
        builder.apply_fragment(fragment);
        builder.build()
    }

    #[test]
    fn test_builtin_branch() {
        let code = render(branch(&field("id", FieldShape::Builtin { ty: "Int".into() })));
        assert_eq!(code, "self.id = dictionary[\"id\"] as? Int\n");
    }

    #[test]
    fn test_enum_branch() {
        let code = render(branch(&field(
            "status",
            FieldShape::Enum {
                type_name: "Status".into(),
                raw_type: "String".into(),
                is_array: false,
            },
        )));
        assert_eq!(
            code,
            "self.status = (dictionary[\"status\"] as? String).flatMap(Status.init(rawValue:))\n"
        );
    }

    #[test]
    fn test_enum_array_branch() {
        let code = render(branch(&field(
            "flags",
            FieldShape::Enum {
                type_name: "Flags".into(),
                raw_type: "String".into(),
                is_array: true,
            },
        )));
        assert_eq!(
            code,
            "self.flags = (dictionary[\"flags\"] as? [String])?.compactMap(Flags.init(rawValue:))\n"
        );
    }

    #[test]
    fn test_custom_array_branch() {
        let code = render(branch(&field(
            "tags",
            FieldShape::CustomArray {
                element: "Tag".into(),
            },
        )));
        assert_eq!(
            code,
            "if let tagsArray = dictionary[\"tags\"] as? [AnyObject] {\n    self.tags = Tag.map(array: tagsArray)\n}\n"
        );
    }

    #[test]
    fn test_custom_branch() {
        let code = render(branch(&field(
            "category",
            FieldShape::Custom {
                type_name: "Category".into(),
            },
        )));
        assert_eq!(
            code,
            "if let categoryDictionary = dictionary[\"category\"] as? [String: Any] {\n    \
             let category = Category()\n    \
             category.map(dictionary: categoryDictionary)\n    \
             self.category = category\n\
             }\n"
        );
    }

    #[test]
    fn test_collection_helper() {
        let mut builder = CodeBuilder::swift();
        builder.emit(&collection_helper("OrderItem"));

        assert_eq!(
            builder.build(),
            "static func map(array: [AnyObject]) -> [OrderItem] {\n    \
             var mappedArray = [OrderItem]()\n    \
             for element in array {\n        \
             if let dictionary = element as? [String: Any] {\n            \
             let orderItem = OrderItem()\n            \
             orderItem.map(dictionary: dictionary)\n            \
             mappedArray.append(orderItem)\n        \
             }\n    \
             }\n\
             \n    \
             return mappedArray\n\
             }\n"
        );
    }
}
