//! Check operation - model extraction summary.

use rosetta_model::ModelDefinition;

use crate::reports::{CheckReport, FieldSummary};

/// Summarize an extracted model.
pub fn check(model: &ModelDefinition, source: &str) -> CheckReport {
    let fields = model
        .fields
        .iter()
        .map(|field| FieldSummary {
            name: field.name.clone(),
            resolved_type: field.resolved_type(),
            enum_values: field
                .enum_members()
                .into_iter()
                .map(|member| member.name)
                .collect(),
        })
        .collect();

    CheckReport {
        source: source.to_string(),
        class_name: model.class_name.clone(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use rosetta_model::extract_model;

    use super::*;

    #[test]
    fn test_summary() {
        let model =
            extract_model("Pet {\n id (integer),\n status (string): = ['AVAILABLE_NOW', 'sold']\n}")
                .unwrap();

        let report = check(&model, "pet.txt");

        assert_eq!(report.class_name, "Pet");
        assert_eq!(report.fields.len(), 2);
        assert_eq!(report.fields[0].resolved_type, "Int");
        assert!(report.fields[0].enum_values.is_empty());
        assert_eq!(report.fields[1].enum_values, vec!["availableNow", "sold"]);
    }
}
