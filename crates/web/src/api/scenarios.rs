// =============================================================================
// Scenario Web - Scenarios API
// =============================================================================
// gloo-net implementation of the scenario API port.
// =============================================================================

use async_trait::async_trait;
use scenario_common::{endpoints, Scenario, ScenarioApi, ScenarioId};

use super::{file_form, ApiClient, ApiError};

#[async_trait(?Send)]
impl ScenarioApi for ApiClient {
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, ApiError> {
        self.get(endpoints::SCENARIOS).await
    }

    async fn get_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        self.get(&endpoints::scenario(id)).await
    }

    async fn create_scenario(&self, scenario: &Scenario) -> Result<Scenario, ApiError> {
        self.post(endpoints::SCENARIOS, scenario).await
    }

    async fn update_scenario(
        &self,
        id: &ScenarioId,
        scenario: &Scenario,
    ) -> Result<Scenario, ApiError> {
        self.put(&endpoints::scenario(id), scenario).await
    }

    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ApiError> {
        self.delete(&endpoints::scenario(id)).await
    }

    async fn duplicate_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError> {
        self.post_empty(&endpoints::duplicate(id)).await
    }

    async fn upload_scenario(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Scenario, ApiError> {
        let form = file_form("file", file_name, &contents)?;
        self.post_form(endpoints::UPLOAD, form).await
    }
}
