// =============================================================================
// Scenario Common - Scenario API Port
// =============================================================================
// Table of Contents:
// 1. Endpoints
// 2. ScenarioApi Trait
// =============================================================================

use async_trait::async_trait;

use crate::error::ApiError;
use crate::scenario::{Scenario, ScenarioId};

// -----------------------------------------------------------------------------
// 1. Endpoints
// -----------------------------------------------------------------------------

/// Endpoint paths, relative to the API base URL.
pub mod endpoints {
    use crate::scenario::ScenarioId;

    /// Scenario collection.
    pub const SCENARIOS: &str = "/scenarios";

    /// Multipart upload of a scenario JSON file.
    pub const UPLOAD: &str = "/scenarios/upload";

    /// A single scenario. The id is percent-encoded.
    pub fn scenario(id: &ScenarioId) -> String {
        format!("{}/{}", SCENARIOS, urlencoding::encode(&id.as_key()))
    }

    /// Server-side copy of a scenario.
    pub fn duplicate(id: &ScenarioId) -> String {
        format!("{}/duplicate", scenario(id))
    }
}

// -----------------------------------------------------------------------------
// 2. ScenarioApi Trait
// -----------------------------------------------------------------------------

/// Remote scenario resource.
///
/// One method per HTTP call. Implementations never touch local state; that is
/// the store's job. Futures are not `Send` because browser fetch futures are
/// not.
#[async_trait(?Send)]
pub trait ScenarioApi {
    /// `GET /scenarios`
    async fn list_scenarios(&self) -> Result<Vec<Scenario>, ApiError>;

    /// `GET /scenarios/{id}`
    async fn get_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError>;

    /// `POST /scenarios`
    async fn create_scenario(&self, scenario: &Scenario) -> Result<Scenario, ApiError>;

    /// `PUT /scenarios/{id}`
    async fn update_scenario(
        &self,
        id: &ScenarioId,
        scenario: &Scenario,
    ) -> Result<Scenario, ApiError>;

    /// `DELETE /scenarios/{id}`
    async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), ApiError>;

    /// `POST /scenarios/{id}/duplicate`
    async fn duplicate_scenario(&self, id: &ScenarioId) -> Result<Scenario, ApiError>;

    /// `POST /scenarios/upload` with the file in multipart field `file`.
    async fn upload_scenario(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Scenario, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::endpoints;
    use crate::scenario::ScenarioId;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoints::scenario(&ScenarioId::from(7)), "/scenarios/7");
        assert_eq!(
            endpoints::duplicate(&ScenarioId::from("logon")),
            "/scenarios/logon/duplicate"
        );
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        assert_eq!(
            endpoints::scenario(&ScenarioId::from("a b/c")),
            "/scenarios/a%20b%2Fc"
        );
    }
}
