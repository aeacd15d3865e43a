// =============================================================================
// Scenario Web - Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Reactive Scenario State
// 3. App State
// =============================================================================

use leptos::prelude::*;
use scenario_common::{ScenarioList, ScenarioMutation, ScenarioState, ScenarioStore};

use crate::api::ApiClient;

// -----------------------------------------------------------------------------
// 2. Reactive Scenario State
// -----------------------------------------------------------------------------

/// Scenario list held in a signal, so views re-render on every commit.
#[derive(Clone, Copy)]
pub struct SignalState {
    list: RwSignal<ScenarioList>,
}

impl SignalState {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(ScenarioList::new()),
        }
    }

    /// Read-only handle for views. Only the store writes.
    pub fn list(&self) -> ReadSignal<ScenarioList> {
        self.list.read_only()
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioState for SignalState {
    fn commit(&self, mutation: ScenarioMutation) {
        self.list.update(|list| {
            mutation.apply(list);
        });
    }

    fn with_list<R>(&self, f: impl FnOnce(&ScenarioList) -> R) -> R {
        self.list.with(f)
    }
}

/// The store used by the web app.
pub type WebStore = ScenarioStore<ApiClient, SignalState>;

// -----------------------------------------------------------------------------
// 3. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Scenario store, the only writer of the scenario list.
    pub store: WebStore,

    /// Whether a list or record load is in flight.
    pub loading: RwSignal<bool>,

    /// Global error message.
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    /// Create a new app state around an injected store.
    pub fn new(store: WebStore) -> Self {
        Self {
            store,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Set a global error message.
    pub fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    /// Clear the global error message.
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
