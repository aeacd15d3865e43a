// =============================================================================
// Scenario Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::pages::{NotFoundPage, ScenarioEditorPage, ScenarioManagerPage};
use crate::state::{AppState, WebStore};

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
///
/// The paths mirror `scenario_common::ROUTES`.
#[component]
pub fn App(store: WebStore) -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new(store));

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=ScenarioManagerPage />
                    <Route path=path!("/editor") view=ScenarioEditorPage />
                    <Route path=path!("/editor/:id") view=ScenarioEditorPage />
                </Routes>
            </Layout>
        </Router>
    }
}
