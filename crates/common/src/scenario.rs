// =============================================================================
// Scenario Common - Scenario Records
// =============================================================================
// Table of Contents:
// 1. Scenario Id
// 2. Scenario
// =============================================================================

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::ScenarioIdError;

// -----------------------------------------------------------------------------
// 1. Scenario Id
// -----------------------------------------------------------------------------

/// Server-assigned scenario identifier.
///
/// The server may hand out numeric or textual ids, and route parameters are
/// always text. Ids compare by their canonical text form, so `7` and `"7"`
/// are the same id. Serialization keeps whichever form was received, and any
/// JSON number is accepted (`u64` beyond `i64::MAX`, floats).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScenarioId {
    Number(Number),
    Text(String),
}

impl ScenarioId {
    /// Parse a route parameter or user input into an id.
    pub fn parse(raw: &str) -> Result<Self, ScenarioIdError> {
        if raw.is_empty() {
            return Err(ScenarioIdError::Empty);
        }
        Ok(ScenarioId::Text(raw.to_string()))
    }

    /// Canonical text form used for comparison and URLs.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            ScenarioId::Number(n) => Cow::Owned(n.to_string()),
            ScenarioId::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Prefer `known` when it is the same id, keeping the server's form.
    pub fn or_known(self, known: Option<&ScenarioId>) -> Self {
        match known {
            Some(known) if *known == self => known.clone(),
            _ => self,
        }
    }
}

impl PartialEq for ScenarioId {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for ScenarioId {}

impl Hash for ScenarioId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl FromStr for ScenarioId {
    type Err = ScenarioIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for ScenarioId {
    fn from(value: i64) -> Self {
        ScenarioId::Number(Number::from(value))
    }
}

impl From<i32> for ScenarioId {
    fn from(value: i32) -> Self {
        ScenarioId::Number(Number::from(value))
    }
}

impl From<&str> for ScenarioId {
    fn from(value: &str) -> Self {
        ScenarioId::Text(value.to_string())
    }
}

impl From<String> for ScenarioId {
    fn from(value: String) -> Self {
        ScenarioId::Text(value)
    }
}

// -----------------------------------------------------------------------------
// 2. Scenario
// -----------------------------------------------------------------------------

/// A scenario record as served by the API.
///
/// Only `id` is understood by the client. Every other field is kept verbatim
/// in `fields` and sent back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ScenarioId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Scenario {
    /// A new, not yet persisted scenario with only a name.
    pub fn draft(name: impl Into<String>) -> Self {
        Self::default().with_field("name", name.into())
    }

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<ScenarioId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(key, value);
        self
    }

    /// Set a field in place.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a raw field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Display name, if the record carries one.
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// Description, if the record carries one.
    pub fn description(&self) -> Option<&str> {
        self.field("description").and_then(Value::as_str)
    }

    /// Whether this record has the given id.
    pub fn has_id(&self, id: &ScenarioId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_text_ids_compare_equal() {
        assert_eq!(ScenarioId::from(7), ScenarioId::from("7"));
        assert_ne!(ScenarioId::from(7), ScenarioId::from("07"));
        assert_eq!(ScenarioId::parse("abc").unwrap(), ScenarioId::from("abc"));
    }

    #[test]
    fn test_route_id_takes_known_numeric_form() {
        let stored = ScenarioId::from(7);

        let id = ScenarioId::parse("7").unwrap().or_known(Some(&stored));
        assert!(matches!(id, ScenarioId::Number(_)));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(7));

        let other = ScenarioId::parse("8").unwrap().or_known(Some(&stored));
        assert_eq!(serde_json::to_value(&other).unwrap(), json!("8"));
        assert!(matches!(
            ScenarioId::parse("7").unwrap().or_known(None),
            ScenarioId::Text(_)
        ));
    }

    #[test]
    fn test_equal_ids_hash_equal() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ScenarioId::from(1));
        assert!(set.contains(&ScenarioId::from("1")));
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(ScenarioId::parse(""), Err(ScenarioIdError::Empty));
        assert!("".parse::<ScenarioId>().is_err());
    }

    #[test]
    fn test_scenario_keeps_unknown_fields() {
        let raw = json!({
            "id": "logon-basic",
            "name": "Logon",
            "sequence": [{"action": "SEND", "timeout": 500}],
            "configuration": {"initialSeqNum": 1}
        });

        let scenario: Scenario = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(scenario.id, Some(ScenarioId::from("logon-basic")));
        assert_eq!(scenario.name(), Some("Logon"));
        assert_eq!(scenario.description(), None);
        assert_eq!(serde_json::to_value(&scenario).unwrap(), raw);
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        let scenario: Scenario = serde_json::from_value(json!({"id": 1, "name": "A"})).unwrap();
        assert!(matches!(&scenario.id, Some(ScenarioId::Number(n)) if n.as_i64() == Some(1)));
        assert_eq!(
            serde_json::to_value(&scenario).unwrap(),
            json!({"id": 1, "name": "A"})
        );
    }

    #[test]
    fn test_wide_and_float_ids_are_accepted() {
        let raw = json!([
            {"id": "a"},
            {"id": 18446744073709551615u64},
            {"id": 1.5}
        ]);

        let scenarios: Vec<Scenario> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(scenarios.len(), 3);
        assert_eq!(
            scenarios[1].id.as_ref().map(|id| id.to_string()),
            Some("18446744073709551615".to_string())
        );
        assert_eq!(scenarios[2].id, Some(ScenarioId::from("1.5")));
        assert_eq!(serde_json::to_value(&scenarios).unwrap(), raw);
    }

    #[test]
    fn test_draft_has_no_id_on_the_wire() {
        let draft = Scenario::draft("A");
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({"name": "A"}));
    }

    #[test]
    fn test_null_id_reads_as_missing() {
        let scenario: Scenario = serde_json::from_value(json!({"id": null, "name": "A"})).unwrap();
        assert!(scenario.id.is_none());
    }
}
