//! Field specification and validation result types.

use serde::Serialize;

/// JSON shape a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    TextList,
    /// RFC 3339 timestamp or `YYYY-MM-DD` string.
    Date,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::TextList => "list of strings",
            FieldKind::Date => "date",
        }
    }
}

/// Additional format constraint on a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Url,
    Slug,
}

/// Value filled in when a field is absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(i64),
    Boolean(bool),
    EmptyList,
}

impl DefaultValue {
    pub fn to_json(self) -> serde_json::Value {
        match self {
            DefaultValue::Text(s) => serde_json::Value::String(s.to_string()),
            DefaultValue::Integer(n) => serde_json::Value::from(n),
            DefaultValue::Boolean(b) => serde_json::Value::Bool(b),
            DefaultValue::EmptyList => serde_json::Value::Array(Vec::new()),
        }
    }
}

/// Constraints declared for a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub max_length: Option<usize>,
    pub one_of: Option<&'static [&'static str]>,
    pub range: Option<(i64, i64)>,
    pub format: Option<Format>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            max_length: None,
            one_of: None,
            range: None,
            format: None,
        }
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// A list of strings, defaulting to an empty list.
    pub const fn text_list(name: &'static str) -> Self {
        Self::new(name, FieldKind::TextList).default_value(DefaultValue::EmptyList)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = Some(values);
        self
    }

    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }
}

/// The full set of fields accepted for one entity type.
#[derive(Debug)]
pub struct Schema {
    /// Entity name used in validation messages (e.g. `"Gallery"`).
    pub entity: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Aggregated result of evaluating a schema against one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: &'static str,
    pub message: String,
}

impl ValidationResult {
    /// One-line summary naming every offending field, e.g.
    /// `Gallery validation failed: title: title is required`.
    pub fn summary(&self, entity: &str) -> String {
        let details: Vec<String> = self
            .errors
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        format!("{entity} validation failed: {}", details.join(", "))
    }
}
