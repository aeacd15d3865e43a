//! Scripted in-memory [`ScenarioApi`] for store tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{endpoints, ScenarioApi};
use crate::error::ApiError;
use crate::scenario::{Scenario, ScenarioId};

/// A request the fake received.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Replays queued responses in order and records every call.
#[derive(Default)]
pub(crate) struct FakeApi {
    calls: RefCell<Vec<Call>>,
    replies: RefCell<VecDeque<Result<Value, ApiError>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn reply(&self, body: Value) -> &Self {
        self.replies.borrow_mut().push_back(Ok(body));
        self
    }

    /// Queue a failure.
    pub fn fail(&self, error: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.calls.borrow_mut().push(Call { method, path, body });
    }

    fn next<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))?;
        serde_json::from_value(reply).map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

fn to_body(scenario: &Scenario) -> Option<Value> {
    serde_json::to_value(scenario).ok()
}

#[async_trait(?Send)]
impl ScenarioApi for FakeApi {
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, ApiError> {
        self.record("GET", endpoints::SCENARIOS.to_string(), None);
        self.next()
    }

    async fn get_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        self.record("GET", endpoints::scenario(id), None);
        self.next()
    }

    async fn create_scenario(&self, scenario: &Scenario) -> Result<Scenario, ApiError> {
        self.record("POST", endpoints::SCENARIOS.to_string(), to_body(scenario));
        self.next()
    }

    async fn update_scenario(
        &self,
        id: &ScenarioId,
        scenario: &Scenario,
    ) -> Result<Scenario, ApiError> {
        self.record("PUT", endpoints::scenario(id), to_body(scenario));
        self.next()
    }

    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ApiError> {
        self.record("DELETE", endpoints::scenario(id), None);
        self.next::<Value>().map(|_| ())
    }

    async fn duplicate_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        self.record("POST", endpoints::duplicate(id), None);
        self.next()
    }

    async fn upload_scenario(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Scenario, ApiError> {
        let body = Value::from(vec![
            Value::from(file_name),
            Value::from(String::from_utf8_lossy(&contents).into_owned()),
        ]);
        self.record("POST", endpoints::UPLOAD.to_string(), Some(body));
        self.next()
    }
}
