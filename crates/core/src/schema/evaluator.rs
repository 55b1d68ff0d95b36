//! Schema evaluator: pure logic, no database access.

use serde_json::{Map, Value};
use validator::{ValidateEmail, ValidateUrl};

use super::rules::{FieldKind, FieldSpec, FieldViolation, Format, Schema, ValidationResult};
use crate::dates::parse_date;
use crate::error::CoreError;
use crate::slug::is_valid_slug;

/// Normalize a payload against a schema.
///
/// Keeps only declared fields, trims text values (including list items) and
/// fills in declared defaults for absent or `null` fields.
pub fn normalize(schema: &Schema, data: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();

    for spec in schema.fields {
        let value = match data.get(spec.name) {
            Some(Value::String(s)) if matches!(spec.kind, FieldKind::Text | FieldKind::Date) => {
                Some(Value::String(s.trim().to_string()))
            }
            Some(Value::Array(items)) if spec.kind == FieldKind::TextList => Some(Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Value::String(s.trim().to_string()),
                        other => other.clone(),
                    })
                    .collect(),
            )),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.clone()),
        };

        match (value, spec.default) {
            (Some(v), _) => {
                out.insert(spec.name.to_string(), v);
            }
            (None, Some(default)) => {
                out.insert(spec.name.to_string(), default.to_json());
            }
            (None, None) => {}
        }
    }

    out
}

/// Evaluate every field rule of `schema` against an already normalized payload.
pub fn evaluate(schema: &Schema, data: &Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = schema
        .fields
        .iter()
        .filter_map(|spec| evaluate_field(spec, data.get(spec.name)))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Normalize and validate a raw JSON payload.
///
/// Returns the normalized object on success, or [`CoreError::Validation`]
/// carrying a summary that names every offending field.
pub fn validate_payload(schema: &Schema, payload: Value) -> Result<Map<String, Value>, CoreError> {
    let Value::Object(data) = payload else {
        return Err(CoreError::Validation(format!(
            "{} payload must be a JSON object",
            schema.entity
        )));
    };

    let normalized = normalize(schema, &data);
    let result = evaluate(schema, &normalized);
    if !result.is_valid {
        return Err(CoreError::Validation(result.summary(schema.entity)));
    }
    Ok(normalized)
}

fn violation(spec: &FieldSpec, rule: &'static str, message: String) -> Option<FieldViolation> {
    Some(FieldViolation {
        field: spec.name.to_string(),
        rule,
        message,
    })
}

/// Returns the first violation for a field; a field reports at most one.
fn evaluate_field(spec: &FieldSpec, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        None | Some(Value::Null) => {
            return if spec.required {
                violation(spec, "required", format!("{} is required", spec.name))
            } else {
                None
            };
        }
        Some(v) => v,
    };

    if !kind_matches(spec.kind, value) {
        return violation(
            spec,
            "type",
            format!("{} must be a {}", spec.name, spec.kind.describe()),
        );
    }

    if let Value::String(s) = value {
        if s.is_empty() {
            return if spec.required {
                violation(spec, "required", format!("{} is required", spec.name))
            } else {
                None
            };
        }
        return evaluate_text(spec, s);
    }

    if let (Some((min, max)), Some(n)) = (spec.range, value.as_i64()) {
        if n < min || n > max {
            return violation(
                spec,
                "range",
                format!("{} must be between {min} and {max}", spec.name),
            );
        }
    }

    None
}

fn evaluate_text(spec: &FieldSpec, s: &str) -> Option<FieldViolation> {
    if let Some(max) = spec.max_length {
        if s.chars().count() > max {
            return violation(
                spec,
                "max_length",
                format!("{} must be at most {max} characters", spec.name),
            );
        }
    }

    if let Some(allowed) = spec.one_of {
        if !allowed.contains(&s) {
            return violation(
                spec,
                "enum",
                format!(
                    "`{s}` is not a valid value for {} (expected one of: {})",
                    spec.name,
                    allowed.join(", ")
                ),
            );
        }
    }

    if spec.kind == FieldKind::Date && parse_date(s).is_none() {
        return violation(
            spec,
            "date",
            format!("{} must be a valid date", spec.name),
        );
    }

    let format_ok = match spec.format {
        Some(Format::Email) => s.validate_email(),
        Some(Format::Url) => s.validate_url(),
        Some(Format::Slug) => is_valid_slug(s),
        None => true,
    };
    if !format_ok {
        let expected = match spec.format {
            Some(Format::Email) => "a valid email address",
            Some(Format::Url) => "a valid URL",
            _ => "lowercase letters, digits and hyphens only",
        };
        return violation(spec, "format", format!("{} must be {expected}", spec.name));
    }

    None
}

fn kind_matches(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Text | FieldKind::Date => value.is_string(),
        FieldKind::Integer => value.is_i64(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::TextList => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::rules::{DefaultValue, FieldSpec};
    use serde_json::json;

    static SAMPLE: Schema = Schema {
        entity: "Sample",
        fields: &[
            FieldSpec::text("title").required().max_length(10),
            FieldSpec::text("kind")
                .one_of(&["alpha", "beta"])
                .default_value(DefaultValue::Text("alpha")),
            FieldSpec::integer("score").range(1, 5),
            FieldSpec::text("email").format(Format::Email),
            FieldSpec::text_list("tags"),
            FieldSpec::date("when"),
        ],
    };

    fn run(payload: Value) -> Result<Map<String, Value>, CoreError> {
        validate_payload(&SAMPLE, payload)
    }

    #[test]
    fn fills_defaults_and_drops_unknown_fields() {
        let data = run(json!({ "title": "  hi  ", "extra": 1 })).unwrap();
        assert_eq!(data["title"], "hi");
        assert_eq!(data["kind"], "alpha");
        assert_eq!(data["tags"], json!([]));
        assert!(!data.contains_key("extra"));
    }

    #[test]
    fn missing_required_field_is_named() {
        let err = run(json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Sample validation failed: title: title is required"
        );
    }

    #[test]
    fn blank_required_field_counts_as_missing() {
        let normalized = normalize(&SAMPLE, json!({ "title": "   " }).as_object().unwrap());
        let result = evaluate(&SAMPLE, &normalized);
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].rule, "required");
    }

    #[test]
    fn rejects_value_outside_enumeration() {
        let normalized = normalize(
            &SAMPLE,
            json!({ "title": "ok", "kind": "gamma" }).as_object().unwrap(),
        );
        let result = evaluate(&SAMPLE, &normalized);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "kind");
        assert_eq!(result.errors[0].rule, "enum");
    }

    #[test]
    fn reports_every_offending_field() {
        let normalized = normalize(
            &SAMPLE,
            json!({
                "title": "far too long a title",
                "score": 9,
                "email": "not-an-email",
                "tags": ["a", 2],
                "when": "yesterday"
            })
            .as_object()
            .unwrap(),
        );
        let result = evaluate(&SAMPLE, &normalized);
        let rules: Vec<_> = result.errors.iter().map(|v| v.rule).collect();
        assert_eq!(rules, vec!["max_length", "range", "format", "type", "date"]);
    }

    #[test]
    fn rejects_wrong_type() {
        let err = run(json!({ "title": 42 })).unwrap_err();
        assert!(err.to_string().contains("title must be a string"));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = run(json!(["title"])).unwrap_err();
        assert!(err.to_string().contains("Sample payload must be a JSON object"));
    }
}
