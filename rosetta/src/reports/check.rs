//! Check command report data structures.

use super::output::{Output, Report};

/// Report data from model extraction.
#[derive(Debug)]
pub struct CheckReport {
    /// Where the model description came from.
    pub source: String,
    pub class_name: String,
    pub fields: Vec<FieldSummary>,
}

/// One extracted field.
#[derive(Debug)]
pub struct FieldSummary {
    pub name: String,
    pub resolved_type: String,
    /// Enum member names, empty for plain fields.
    pub enum_values: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is a valid model", self.source));
        out.newline();

        out.section(&format!("{} ({})", self.class_name, self.fields.len()));
        for field in &self.fields {
            let ty = if field.enum_values.is_empty() {
                field.resolved_type.clone()
            } else {
                format!("{} [{}]", field.resolved_type, field.enum_values.join(", "))
            };
            out.key_value_indented(&field.name, &ty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            source: "pet.txt".to_string(),
            class_name: "Pet".to_string(),
            fields: vec![
                FieldSummary {
                    name: "id".to_string(),
                    resolved_type: "Int".to_string(),
                    enum_values: vec![],
                },
                FieldSummary {
                    name: "status".to_string(),
                    resolved_type: "string".to_string(),
                    enum_values: vec!["available".to_string(), "sold".to_string()],
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.buffer,
            "✓ pet.txt is a valid model\n\nPet (2):\n  id: Int\n  status: string [available, sold]\n"
        );
    }
}
