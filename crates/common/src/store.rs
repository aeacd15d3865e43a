// =============================================================================
// Scenario Common - Scenario Store
// =============================================================================
// Table of Contents:
// 1. Store
// 2. Reads
// 3. Actions
// =============================================================================

use std::sync::Arc;

use crate::api::ScenarioApi;
use crate::error::{Action, ApiError, Result, StoreError};
use crate::scenario::{Scenario, ScenarioId};
use crate::state::{ScenarioMutation, ScenarioState};

// -----------------------------------------------------------------------------
// 1. Store
// -----------------------------------------------------------------------------

/// Owner of the scenario list.
///
/// Every action issues exactly one request through the injected API and,
/// only when it succeeds, commits exactly one mutation. Failures are logged,
/// leave the list untouched and are returned to the caller.
pub struct ScenarioStore<A, S> {
    // Shared through Leptos context, which requires Send + Sync.
    api: Arc<A>,
    state: S,
}

impl<A, S: Clone> Clone for ScenarioStore<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

impl<A: ScenarioApi, S: ScenarioState> ScenarioStore<A, S> {
    /// Create a store over an API handle and an (usually empty) state cell.
    pub fn new(api: A, state: S) -> Self {
        Self {
            api: Arc::new(api),
            state,
        }
    }

    /// The state cell, for reactive reads.
    pub fn state(&self) -> &S {
        &self.state
    }

    fn commit(&self, mutation: ScenarioMutation) {
        log::debug!("Commit {}", mutation.name());
        self.state.commit(mutation);
    }
}

fn request_failed(action: Action, source: ApiError) -> StoreError {
    log::error!("Failed to {}: {}", action, source);
    StoreError::Request { action, source }
}

// -----------------------------------------------------------------------------
// 2. Reads
// -----------------------------------------------------------------------------

impl<A: ScenarioApi, S: ScenarioState> ScenarioStore<A, S> {
    /// Snapshot of the current list.
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.state.with_list(|list| list.as_slice().to_vec())
    }

    /// First scenario with `id`.
    pub fn find(&self, id: &ScenarioId) -> Option<Scenario> {
        self.state.with_list(|list| list.find(id).cloned())
    }

    pub fn len(&self) -> usize {
        self.state.with_list(|list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// 3. Actions
// -----------------------------------------------------------------------------

impl<A: ScenarioApi, S: ScenarioState> ScenarioStore<A, S> {
    /// Replace the list with the server's.
    pub async fn load_scenarios(&self) -> Result<()> {
        log::debug!("Loading scenarios");
        let scenarios = self
            .api
            .list_scenarios()
            .await
            .map_err(|e| request_failed(Action::Load, e))?;

        log::info!("Loaded {} scenarios", scenarios.len());
        self.commit(ScenarioMutation::Set(scenarios));
        Ok(())
    }

    /// Create a scenario and append the server's copy.
    pub async fn save_scenario(&self, scenario: &Scenario) -> Result<Scenario> {
        log::debug!("Saving scenario {:?}", scenario.name());
        let created = self
            .api
            .create_scenario(scenario)
            .await
            .map_err(|e| request_failed(Action::Save, e))?;

        self.commit(ScenarioMutation::Add(created.clone()));
        Ok(created)
    }

    /// Replace a scenario with the server's updated copy.
    ///
    /// The request is sent even when the id is not in the local list; the
    /// list is then left as is.
    pub async fn update_scenario(&self, scenario: &Scenario) -> Result<Scenario> {
        let Some(id) = scenario.id.as_ref() else {
            log::error!("Failed to {}: scenario has no id", Action::Update);
            return Err(StoreError::MissingId);
        };

        log::debug!("Updating scenario {}", id);
        let updated = self
            .api
            .update_scenario(id, scenario)
            .await
            .map_err(|e| request_failed(Action::Update, e))?;

        self.commit(ScenarioMutation::Update(updated.clone()));
        Ok(updated)
    }

    /// Delete a scenario. The local list is untouched if `id` is not in it.
    pub async fn delete_scenario(&self, id: &ScenarioId) -> Result<()> {
        log::debug!("Deleting scenario {}", id);
        self.api
            .delete_scenario(id)
            .await
            .map_err(|e| request_failed(Action::Delete, e))?;

        self.commit(ScenarioMutation::Delete(id.clone()));
        Ok(())
    }

    /// Fetch one scenario and store it, replacing any stale copy.
    pub async fn fetch_scenario(&self, id: &ScenarioId) -> Result<Scenario> {
        log::debug!("Fetching scenario {}", id);
        let scenario = self
            .api
            .get_scenario(id)
            .await
            .map_err(|e| request_failed(Action::Fetch, e))?;

        self.commit(ScenarioMutation::Upsert(scenario.clone()));
        Ok(scenario)
    }

    /// Ask the server to copy a scenario and append the copy.
    pub async fn duplicate_scenario(&self, id: &ScenarioId) -> Result<Scenario> {
        log::debug!("Duplicating scenario {}", id);
        let copy = self
            .api
            .duplicate_scenario(id)
            .await
            .map_err(|e| request_failed(Action::Duplicate, e))?;

        self.commit(ScenarioMutation::Add(copy.clone()));
        Ok(copy)
    }

    /// Upload a scenario JSON file. The server keys it by its id (or file
    /// stem), so an existing entry with that id is replaced.
    pub async fn upload_scenario(&self, file_name: &str, contents: Vec<u8>) -> Result<Scenario> {
        if let Err(reason) = check_upload(file_name, &contents) {
            log::error!("Failed to {}: {}", Action::Upload, reason);
            return Err(StoreError::InvalidUpload(reason.to_string()));
        }

        log::debug!("Uploading scenario file {}", file_name);
        let scenario = self
            .api
            .upload_scenario(file_name, contents)
            .await
            .map_err(|e| request_failed(Action::Upload, e))?;

        self.commit(ScenarioMutation::Upsert(scenario.clone()));
        Ok(scenario)
    }
}

fn check_upload(file_name: &str, contents: &[u8]) -> std::result::Result<(), &'static str> {
    if contents.is_empty() {
        return Err("file is empty");
    }
    // The server matches the suffix case-sensitively.
    if !file_name.ends_with(".json") {
        return Err("only .json files can be uploaded");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LocalState;
    use crate::testing::FakeApi;
    use serde_json::json;

    type TestStore = ScenarioStore<FakeApi, LocalState>;

    fn scenario(value: serde_json::Value) -> Scenario {
        serde_json::from_value(value).unwrap()
    }

    fn store_with(items: Vec<Scenario>) -> TestStore {
        ScenarioStore::new(FakeApi::new(), LocalState::with_scenarios(items))
    }

    fn network_down() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_load_replaces_list_in_server_order() {
        let store = store_with(vec![scenario(json!({"id": 99, "name": "stale"}))]);
        store
            .api
            .reply(json!([{"id": 2, "name": "B"}, {"id": 1, "name": "A"}]));

        store.load_scenarios().await.unwrap();

        let names: Vec<_> = store
            .scenarios()
            .iter()
            .map(|s| s.name().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(store.api.calls()[0].method, "GET");
        assert_eq!(store.api.calls()[0].path, "/scenarios");
    }

    #[tokio::test]
    async fn test_load_accepts_wide_and_float_ids() {
        let store = store_with(vec![]);
        store
            .api
            .reply(json!([{"id": "a"}, {"id": 18446744073709551615u64}, {"id": 1.5}]));

        store.load_scenarios().await.unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.find(&"18446744073709551615".into()).is_some());
        assert!(store.find(&"1.5".into()).is_some());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_stale_list() {
        let store = store_with(vec![]);
        store.api.reply(json!([{"id": 1, "name": "A"}])).fail(network_down());

        store.load_scenarios().await.unwrap();
        let after_first = store.scenarios();

        let err = store.load_scenarios().await.unwrap_err();
        assert_eq!(err.action(), Some(Action::Load));
        assert_eq!(store.scenarios(), after_first);
    }

    #[tokio::test]
    async fn test_save_appends_server_record() {
        let store = store_with(vec![]);
        store.api.reply(json!({"id": 7, "name": "A"}));

        let created = store.save_scenario(&Scenario::draft("A")).await.unwrap();

        assert_eq!(created, scenario(json!({"id": 7, "name": "A"})));
        assert_eq!(store.scenarios(), vec![created]);
        let calls = store.api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].body, Some(json!({"name": "A"})));
    }

    #[tokio::test]
    async fn test_each_save_grows_list_by_one_with_a_new_id() {
        let store = store_with(vec![]);
        for id in 1..=5 {
            store.api.reply(json!({"id": id, "name": format!("S{id}")}));
        }

        for n in 1..=5 {
            let before = store.len();
            let new_id = ScenarioId::from(n as i64);
            assert!(store.find(&new_id).is_none());

            store.save_scenario(&Scenario::draft(format!("S{n}"))).await.unwrap();

            assert_eq!(store.len(), before + 1);
            assert!(store.find(&new_id).is_some());
        }
    }

    #[tokio::test]
    async fn test_failed_save_propagates_and_leaves_list() {
        let store = store_with(vec![scenario(json!({"id": 1}))]);
        store.api.fail(ApiError::Server {
            status: 500,
            message: "disk full".into(),
        });

        let err = store.save_scenario(&Scenario::draft("A")).await.unwrap_err();

        assert_eq!(err.action(), Some(Action::Save));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place_with_server_echo() {
        let store = store_with(vec![scenario(json!({"id": 1, "name": "A"}))]);
        store.api.reply(json!({"id": 1, "name": "B"}));

        let updated = store
            .update_scenario(&scenario(json!({"id": 1, "name": "B"})))
            .await
            .unwrap();

        assert_eq!(store.scenarios(), vec![scenario(json!({"id": 1, "name": "B"}))]);
        assert_eq!(updated.name(), Some("B"));
        assert_eq!(store.api.calls()[0].method, "PUT");
        assert_eq!(store.api.calls()[0].path, "/scenarios/1");
    }

    #[tokio::test]
    async fn test_update_uses_server_fields_not_request_fields() {
        let store = store_with(vec![
            scenario(json!({"id": "a", "name": "A"})),
            scenario(json!({"id": "x", "name": "X", "steps": 1})),
        ]);
        store
            .api
            .reply(json!({"id": "x", "name": "X2", "steps": 2, "updatedBy": "server"}));

        store
            .update_scenario(&scenario(json!({"id": "x", "name": "X2", "steps": 2})))
            .await
            .unwrap();

        let list = store.scenarios();
        assert_eq!(list.len(), 2);
        let matching: Vec<_> = list.iter().filter(|s| s.has_id(&"x".into())).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].field("updatedBy"), Some(&json!("server")));
        assert_eq!(list[0].name(), Some("A"));
    }

    #[tokio::test]
    async fn test_update_of_unknown_id_sends_request_but_keeps_list() {
        let store = store_with(vec![scenario(json!({"id": 1, "name": "A"}))]);
        let before = store.scenarios();
        store.api.reply(json!({"id": 5, "name": "Y"}));

        store
            .update_scenario(&scenario(json!({"id": 5, "name": "Y"})))
            .await
            .unwrap();

        assert_eq!(store.scenarios(), before);
        assert_eq!(store.api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_update_without_id_fails_before_request() {
        let store = store_with(vec![]);

        let err = store.update_scenario(&Scenario::draft("A")).await.unwrap_err();

        assert_eq!(err, StoreError::MissingId);
        assert!(store.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_propagates() {
        let store = store_with(vec![scenario(json!({"id": 1, "name": "A"}))]);
        let before = store.scenarios();
        store.api.fail(ApiError::NotFound);

        let err = store
            .update_scenario(&scenario(json!({"id": 1, "name": "B"})))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::Request {
                action: Action::Update,
                source: ApiError::NotFound
            }
        );
        assert_eq!(store.scenarios(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = store_with(vec![
            scenario(json!({"id": 1, "name": "A"})),
            scenario(json!({"id": 2, "name": "B"})),
        ]);
        store.api.reply(json!(null));

        store.delete_scenario(&1.into()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.find(&1.into()).is_none());
        assert_eq!(store.api.calls()[0].method, "DELETE");
        assert_eq!(store.api.calls()[0].path, "/scenarios/1");
    }

    #[tokio::test]
    async fn test_delete_matches_route_string_against_numeric_id() {
        let store = store_with(vec![scenario(json!({"id": 3, "name": "C"}))]);
        store.api.reply(json!(null));

        let from_route = ScenarioId::parse("3").unwrap();
        store.delete_scenario(&from_route).await.unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_of_absent_id_keeps_list_on_success_and_failure() {
        let store = store_with(vec![scenario(json!({"id": 1, "name": "A"}))]);
        let before = store.scenarios();
        store.api.reply(json!(null)).fail(network_down());

        store.delete_scenario(&"zzz".into()).await.unwrap();
        assert_eq!(store.scenarios(), before);

        let err = store.delete_scenario(&"zzz".into()).await.unwrap_err();
        assert_eq!(err.action(), Some(Action::Delete));
        assert_eq!(store.scenarios(), before);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_existing_entry() {
        let store = store_with(vec![scenario(json!({"id": 1, "name": "A"}))]);
        store.api.fail(network_down());

        assert!(store.delete_scenario(&1.into()).await.is_err());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_upserts() {
        let store = store_with(vec![scenario(json!({"id": "s1", "name": "old"}))]);
        store
            .api
            .reply(json!({"id": "s1", "name": "new"}))
            .reply(json!({"id": "s2", "name": "other"}));

        store.fetch_scenario(&"s1".into()).await.unwrap();
        store.fetch_scenario(&"s2".into()).await.unwrap();

        let names: Vec<_> = store.scenarios().iter().map(|s| s.name().unwrap().to_string()).collect();
        assert_eq!(names, vec!["new", "other"]);
        assert_eq!(store.api.calls()[1].path, "/scenarios/s2");
    }

    #[tokio::test]
    async fn test_duplicate_appends_copy() {
        let store = store_with(vec![scenario(json!({"id": "s1", "name": "A"}))]);
        store
            .api
            .reply(json!({"id": "s1_copy_1", "name": "A (copy)"}));

        let copy = store.duplicate_scenario(&"s1".into()).await.unwrap();

        assert_eq!(copy.id, Some(ScenarioId::from("s1_copy_1")));
        assert_eq!(store.len(), 2);
        assert_eq!(store.api.calls()[0].path, "/scenarios/s1/duplicate");
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_files_without_request() {
        let store = store_with(vec![]);

        let empty = store.upload_scenario("a.json", Vec::new()).await.unwrap_err();
        let wrong_ext = store.upload_scenario("a.txt", b"{}".to_vec()).await.unwrap_err();
        let upper_ext = store.upload_scenario("a.JSON", b"{}".to_vec()).await.unwrap_err();

        assert!(matches!(empty, StoreError::InvalidUpload(_)));
        assert!(matches!(wrong_ext, StoreError::InvalidUpload(_)));
        assert!(matches!(upper_ext, StoreError::InvalidUpload(_)));
        assert!(store.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_replaces_entry_with_same_id() {
        let store = store_with(vec![scenario(json!({"id": "logon", "name": "old"}))]);
        store.api.reply(json!({"id": "logon", "name": "uploaded"}));

        let uploaded = store
            .upload_scenario("logon.json", br#"{"name": "uploaded"}"#.to_vec())
            .await
            .unwrap();

        assert_eq!(uploaded.name(), Some("uploaded"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.api.calls()[0].path, "/scenarios/upload");
    }

    #[tokio::test]
    async fn test_cloned_store_shares_state() {
        let store = store_with(vec![]);
        let handle = store.clone();
        store.api.reply(json!({"id": 1, "name": "A"}));

        store.save_scenario(&Scenario::draft("A")).await.unwrap();

        assert_eq!(handle.len(), 1);
    }
}
