//! Typed view of a task definition document
//!
//! Only the parts of the document that get edited are modelled. Every record
//! keeps the fields it does not know about in a flattened map, so a document
//! is written back with nothing lost.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{RenderError, Result};

/// Fields of a record that are carried through untouched.
pub type Fields = Map<String, Value>;

/// Top level task definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub container_definitions: Vec<ContainerDefinition>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl TaskDefinition {
    /// Validate the document shape and build the typed model.
    ///
    /// The document must be an object whose `containerDefinitions` is an
    /// array; anything else is a malformed document.
    pub fn from_value(value: Value) -> Result<Self> {
        let has_containers = value
            .get("containerDefinitions")
            .is_some_and(Value::is_array);
        if !has_containers {
            return Err(RenderError::MalformedDocument);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// First container definition whose name loosely equals `name`.
    pub fn container_mut(&mut self, name: &str) -> Result<&mut ContainerDefinition> {
        self.container_definitions
            .iter_mut()
            .find(|c| c.name.as_ref().is_some_and(|n| loose_eq(n, name)))
            .ok_or_else(|| RenderError::ContainerNotFound(name.to_string()))
    }

    /// Pretty printed JSON with two space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub environment: Field<Vec<EnvironmentVariable>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tags: Field<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub log_configuration: Field<LogConfiguration>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Entry of a container's `environment` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// Entry of a container's `tags` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Fields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_driver: Option<Value>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub options: Field<Fields>,
    #[serde(flatten)]
    pub extra: Fields,
}

/// A document field that can only be edited when it has the expected JSON
/// shape. A present value of any other shape (including `null`) is kept as
/// raw JSON and written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field<T> {
    Absent,
    Typed(T),
    Raw(Value),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Field::Typed(t) => Some(t),
            _ => None,
        }
    }

    /// The typed value, replacing an absent or differently shaped value with
    /// `T::default()` first.
    pub fn typed_or_default(&mut self) -> &mut T
    where
        T: Default,
    {
        if !matches!(self, Field::Typed(_)) {
            *self = Field::Typed(T::default());
        }
        match self {
            Field::Typed(t) => t,
            _ => unreachable!("field was just made typed"),
        }
    }
}

/// JSON shape a typed field is built from.
pub trait JsonShape {
    fn has_shape(value: &Value) -> bool;
}

impl<T> JsonShape for Vec<T> {
    fn has_shape(value: &Value) -> bool {
        value.is_array()
    }
}

impl JsonShape for Fields {
    fn has_shape(value: &Value) -> bool {
        value.is_object()
    }
}

impl JsonShape for LogConfiguration {
    fn has_shape(value: &Value) -> bool {
        value.is_object()
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: DeserializeOwned + JsonShape,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if T::has_shape(&value) {
            serde_json::from_value(value)
                .map(Field::Typed)
                .map_err(D::Error::custom)
        } else {
            Ok(Field::Raw(value))
        }
    }
}

/// Loose equality between a JSON value and a string.
///
/// Strings compare exactly. Numbers and booleans compare numerically against
/// `other` read as a number, where blank text counts as zero.
pub fn loose_eq(value: &Value, other: &str) -> bool {
    let as_number = || {
        let text = other.trim();
        if text.is_empty() {
            Some(0.0)
        } else {
            text.parse::<f64>().ok()
        }
    };

    match value {
        Value::String(s) => s == other,
        Value::Number(n) => n.as_f64().zip(as_number()).is_some_and(|(a, b)| a == b),
        Value::Bool(b) => as_number() == Some(if *b { 1.0 } else { 0.0 }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_container_definitions() {
        let err = TaskDefinition::from_value(json!({ "family": "web" })).unwrap_err();
        assert!(matches!(err, RenderError::MalformedDocument));
    }

    #[test]
    fn test_container_definitions_not_an_array() {
        let err = TaskDefinition::from_value(json!({ "containerDefinitions": {} })).unwrap_err();
        assert!(matches!(err, RenderError::MalformedDocument));

        let err = TaskDefinition::from_value(json!(["web"])).unwrap_err();
        assert!(matches!(err, RenderError::MalformedDocument));
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let doc = json!({
            "family": "svc",
            "containerDefinitions": [{
                "name": "web",
                "image": "nginx",
                "cpu": 256,
                "portMappings": [{ "containerPort": 80 }],
                "environment": [{ "name": "A", "value": "1" }],
                "logConfiguration": {
                    "logDriver": "awslogs",
                    "options": { "awslogs-group": "g" },
                    "secretOptions": []
                }
            }],
            "requiresCompatibilities": ["FARGATE"]
        });
        let task = TaskDefinition::from_value(doc.clone()).unwrap();
        assert_eq!(serde_json::to_value(&task).unwrap(), doc);
    }

    #[test]
    fn test_odd_shaped_fields_are_kept_raw() {
        let doc = json!({
            "containerDefinitions": [{
                "name": "web",
                "environment": "not-a-list",
                "tags": null,
                "logConfiguration": { "options": 5 }
            }]
        });
        let task = TaskDefinition::from_value(doc.clone()).unwrap();
        let web = &task.container_definitions[0];
        assert_eq!(web.environment, Field::Raw(json!("not-a-list")));
        assert_eq!(web.tags, Field::Raw(Value::Null));
        assert_eq!(serde_json::to_value(&task).unwrap(), doc);
    }

    #[test]
    fn test_container_lookup() {
        let mut task = TaskDefinition::from_value(json!({
            "containerDefinitions": [{ "name": "web" }, { "name": "api" }, { "name": "api", "x": 1 }]
        }))
        .unwrap();

        let api = task.container_mut("api").unwrap();
        assert!(api.extra.is_empty());

        let err = task.container_mut("worker").unwrap_err();
        assert!(matches!(err, RenderError::ContainerNotFound(ref n) if n == "worker"));
    }

    #[test]
    fn test_container_lookup_by_numeric_name() {
        let mut task = TaskDefinition::from_value(json!({
            "containerDefinitions": [{ "image": "unnamed" }, { "name": 7 }]
        }))
        .unwrap();
        assert!(task.container_mut("7").is_ok());
        assert!(task.container_mut("7.0").is_ok());
        assert!(task.container_mut("8").is_err());
    }

    #[test]
    fn test_loose_eq() {
        assert!(loose_eq(&json!("web"), "web"));
        assert!(!loose_eq(&json!("Web"), "web"));
        assert!(loose_eq(&json!(10), " 10 "));
        assert!(loose_eq(&json!(true), "1"));
        assert!(!loose_eq(&json!(true), "true"));
        assert!(!loose_eq(&Value::Null, "null"));
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let task = TaskDefinition::from_value(json!({
            "containerDefinitions": [{ "name": "web" }]
        }))
        .unwrap();
        let text = task.to_pretty_json().unwrap();
        assert!(text.contains("\n  \"containerDefinitions\": [\n    {\n      \"name\": \"web\""));
    }
}
