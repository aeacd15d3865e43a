// =============================================================================
// Scenario Common - Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================

//! Platform-neutral core of the scenario studio.
//!
//! Holds the scenario record types, the [`ScenarioApi`] port that HTTP
//! adapters implement, the [`ScenarioStore`] that owns the scenario list, and
//! the static client route table. Nothing in here touches the browser, so the
//! whole crate is exercised by native tests.

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod routes;
pub mod scenario;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use api::{endpoints, ScenarioApi};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use error::{Action, ApiError, Result, ScenarioIdError, StoreError};
pub use form::{parse_body, FormError, ScenarioForm};
pub use routes::{Route, RouteDef, View, ROUTES};
pub use scenario::{Scenario, ScenarioId};
pub use state::{LocalState, ScenarioList, ScenarioMutation, ScenarioState};
pub use store::ScenarioStore;
