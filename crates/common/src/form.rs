// =============================================================================
// Scenario Common - Editor Form Model
// =============================================================================

use serde_json::{Map, Value};
use thiserror::Error;

use crate::scenario::{Scenario, ScenarioId};

/// Validation errors raised when turning the editor form into a scenario.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,

    #[error("Body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Body must be a JSON object")]
    NotAnObject,
}

/// Text fields of the scenario editor.
///
/// `name` and `description` get their own inputs when they are strings; every
/// other field of the record, including a non-string name or description, is
/// edited as a raw JSON object in `body`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioForm {
    pub name: String,
    pub description: String,
    pub body: String,
}

impl ScenarioForm {
    /// Pre-fill the form from a stored scenario.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let rest: Map<String, Value> = scenario
            .fields
            .iter()
            .filter(|(key, value)| {
                !(matches!(key.as_str(), "name" | "description") && value.is_string())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let body = if rest.is_empty() {
            String::new()
        } else {
            serde_json::to_string_pretty(&Value::Object(rest)).unwrap_or_default()
        };

        Self {
            name: scenario.name().unwrap_or_default().to_string(),
            description: scenario.description().unwrap_or_default().to_string(),
            body,
        }
    }

    /// Build the record to send. `id` is `None` in create mode.
    ///
    /// A blank name input is accepted only when `body` carries its own `name`.
    pub fn into_scenario(self, id: Option<ScenarioId>) -> Result<Scenario, FormError> {
        let mut fields = parse_body(&self.body)?;

        // The caller decides the id, not the body.
        fields.remove("id");

        let name = self.name.trim();
        if !name.is_empty() {
            fields.insert("name".to_string(), Value::from(name));
        } else if !fields.contains_key("name") {
            return Err(FormError::MissingName);
        }
        let description = self.description.trim();
        if !description.is_empty() {
            fields.insert("description".to_string(), Value::from(description));
        }

        Ok(Scenario { id, fields })
    }
}

/// Parse the editor body. Blank text is an empty object.
pub fn parse_body(text: &str) -> Result<Map<String, Value>, FormError> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(FormError::NotAnObject),
        Err(e) => Err(FormError::InvalidJson(e.to_string())),
    }
}
