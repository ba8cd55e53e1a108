//! Conversion of `validator` results into [`CoreError::Validation`].

use validator::{ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

/// Flatten validation failures into a single field-level message.
///
/// Fields are listed alphabetically so the message is stable across runs,
/// e.g. `"address: must not be empty; count_places: must be at least 1"`.
pub fn validation_error(errors: &ValidationErrors) -> CoreError {
    let mut parts: Vec<String> = Vec::new();

    let mut fields: Vec<(String, &ValidationErrorsKind)> = errors
        .errors()
        .iter()
        .map(|(field, kind)| (field.to_string(), kind))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, kind) in &fields {
        let ValidationErrorsKind::Field(field_errors) = kind else {
            continue;
        };
        let label = if field == SCHEMA_KEY {
            "request"
        } else {
            field.as_str()
        };
        for err in field_errors {
            let detail = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid ({})", err.code));
            parts.push(format!("{label}: {detail}"));
        }
    }

    if parts.is_empty() {
        parts.push("request: invalid".to_string());
    }

    CoreError::Validation(parts.join("; "))
}
