//! Data-driven input shapes and the generic argument validator.
//!
//! Every tool declares its parameters as an [`InputShape`]. A single
//! validator interprets the shape, so the dispatcher never needs per-tool
//! validation code. The same shape renders the JSON Schema advertised in
//! `tools/list`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use super::error::ToolError;

/// Type of a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Number,
    String,
    Boolean,
    /// A string restricted to one of the listed values.
    Enum(Vec<String>),
}

impl FieldType {
    /// Build an enum type from its allowed values.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum(values.into_iter().map(Into::into).collect())
    }

    /// Short description of the expected shape, used in validation errors.
    pub fn describe(&self) -> String {
        match self {
            Self::Number => "number".to_string(),
            Self::String => "string".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Enum(values) => format!("enum({})", values.join(", ")),
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Number, Value::Number(_)) => true,
            (Self::String, Value::String(_)) => true,
            (Self::Boolean, Value::Bool(_)) => true,
            (Self::Enum(values), Value::String(s)) => values.iter().any(|v| v == s),
            _ => false,
        }
    }

    fn json_schema(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        match self {
            Self::Number => {
                schema.insert("type".into(), json!("number"));
            }
            Self::String => {
                schema.insert("type".into(), json!("string"));
            }
            Self::Boolean => {
                schema.insert("type".into(), json!("boolean"));
            }
            Self::Enum(values) => {
                schema.insert("type".into(), json!("string"));
                schema.insert("enum".into(), json!(values));
            }
        }
        schema
    }
}

/// Declaration of one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub kind: FieldType,
    pub required: bool,
    pub description: Option<String>,
}

/// Ordered mapping from parameter name to its declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputShape {
    fields: Vec<(String, FieldSpec)>,
}

impl InputShape {
    /// Create an empty shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required parameter.
    pub fn required(self, name: impl Into<String>, kind: FieldType) -> Self {
        self.field(name, kind, true, None)
    }

    /// Declare an optional parameter.
    pub fn optional(self, name: impl Into<String>, kind: FieldType) -> Self {
        self.field(name, kind, false, None)
    }

    /// Attach a description to the most recently declared parameter.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        if let Some((_, spec)) = self.fields.last_mut() {
            spec.description = Some(description.into());
        }
        self
    }

    fn field(
        mut self,
        name: impl Into<String>,
        kind: FieldType,
        required: bool,
        description: Option<String>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FieldSpec {
                kind,
                required,
                description,
            },
        ));
        self
    }

    /// Declared parameters, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Look up a parameter declaration.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Check `arguments` against this shape.
    ///
    /// `null` is treated as an empty object. Undeclared keys are dropped.
    /// The first failing field, in declaration order, is reported.
    pub fn validate(&self, arguments: &Value) -> Result<ValidatedArgs, ToolError> {
        let empty = Map::new();
        let object = match arguments {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(ToolError::validation(
                    "",
                    "object",
                    format!("Expected object, received {}", value_kind(other)),
                ));
            }
        };

        let mut validated = Map::new();
        for (name, spec) in &self.fields {
            match object.get(name) {
                None if spec.required => {
                    return Err(ToolError::validation(
                        name.as_str(),
                        spec.kind.describe(),
                        format!("{}: Required", name),
                    ));
                }
                None => {}
                Some(value) if spec.kind.accepts(value) => {
                    validated.insert(name.clone(), value.clone());
                }
                Some(value) => {
                    return Err(ToolError::validation(
                        name.as_str(),
                        spec.kind.describe(),
                        format!(
                            "{}: Expected {}, received {}",
                            name,
                            spec.kind.describe(),
                            describe_received(value)
                        ),
                    ));
                }
            }
        }

        Ok(ValidatedArgs(validated))
    }

    /// Render this shape as a JSON Schema object.
    pub fn to_json_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (name, spec) in &self.fields {
            let mut property = spec.kind.json_schema();
            if let Some(description) = &spec.description {
                property.insert("description".into(), json!(description));
            }
            properties.insert(name.clone(), Value::Object(property));
            if spec.required {
                required.push(json!(name));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), Value::Array(required));
        schema
    }
}

/// Arguments that passed validation. Only declared keys are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArgs(Map<String, Value>);

impl ValidatedArgs {
    /// Deserialize into a typed parameter struct.
    ///
    /// Failure here means the shape and the struct disagree, which is a
    /// server bug, so it is reported as an internal error.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| ToolError::internal(format!("argument decoding failed: {}", e)))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe_received(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => value_kind(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc_shape() -> InputShape {
        InputShape::new()
            .required("operation", FieldType::one_of(["add", "divide"]))
            .required("a", FieldType::Number)
            .required("b", FieldType::Number)
    }

    fn search_shape() -> InputShape {
        InputShape::new()
            .required("query", FieldType::String)
            .describe("Search term")
            .optional("inStock", FieldType::Boolean)
    }

    fn expect_validation(result: Result<ValidatedArgs, ToolError>) -> (String, String) {
        match result {
            Err(ToolError::Validation { path, expected, .. }) => (path, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_arguments() {
        let args = calc_shape()
            .validate(&json!({ "operation": "add", "a": 1, "b": 2.5 }))
            .unwrap();
        assert_eq!(args.0.get("a"), Some(&json!(1)));
        assert_eq!(args.0.get("b"), Some(&json!(2.5)));
    }

    #[test]
    fn test_missing_required_field() {
        let (path, expected) = expect_validation(calc_shape().validate(&json!({
            "operation": "add",
            "a": 1
        })));
        assert_eq!(path, "b");
        assert_eq!(expected, "number");
    }

    #[test]
    fn test_wrong_type() {
        let (path, expected) = expect_validation(calc_shape().validate(&json!({
            "operation": "add",
            "a": "1",
            "b": 2
        })));
        assert_eq!(path, "a");
        assert_eq!(expected, "number");
    }

    #[test]
    fn test_value_outside_enum() {
        let (path, expected) = expect_validation(calc_shape().validate(&json!({
            "operation": "modulo",
            "a": 1,
            "b": 2
        })));
        assert_eq!(path, "operation");
        assert_eq!(expected, "enum(add, divide)");
    }

    #[test]
    fn test_explicit_null_is_a_type_error() {
        let (path, _) = expect_validation(search_shape().validate(&json!({
            "query": "x",
            "inStock": null
        })));
        assert_eq!(path, "inStock");
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let args = search_shape().validate(&json!({ "query": "" })).unwrap();
        assert!(args.0.get("inStock").is_none());
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let args = search_shape()
            .validate(&json!({ "query": "x", "extra": true }))
            .unwrap();
        assert!(args.0.get("extra").is_none());
        assert_eq!(args.0.len(), 1);
    }

    #[test]
    fn test_null_arguments_treated_as_empty() {
        let (path, _) = expect_validation(search_shape().validate(&Value::Null));
        assert_eq!(path, "query");
        assert!(InputShape::new().validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_non_object_arguments() {
        let (path, expected) = expect_validation(search_shape().validate(&json!([1, 2])));
        assert_eq!(path, "");
        assert_eq!(expected, "object");
    }

    #[test]
    fn test_parse_into_struct() {
        #[derive(serde::Deserialize)]
        struct Params {
            a: f64,
        }
        let args = InputShape::new()
            .required("a", FieldType::Number)
            .validate(&json!({ "a": 4 }))
            .unwrap();
        let params: Params = args.parse().unwrap();
        assert_eq!(params.a, 4.0);
    }

    #[test]
    fn test_json_schema() {
        let schema = Value::Object(search_shape().to_json_schema());
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search term" },
                    "inStock": { "type": "boolean" }
                },
                "required": ["query"]
            })
        );
    }

    #[test]
    fn test_json_schema_enum() {
        let schema = calc_shape().to_json_schema();
        assert_eq!(
            schema["properties"]["operation"],
            json!({ "type": "string", "enum": ["add", "divide"] })
        );
    }
}
