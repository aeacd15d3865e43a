// =============================================================================
// Scenario Web - Scenario Editor Page
// =============================================================================
// Serves `/editor` (create mode) and `/editor/:id` (edit mode).
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_navigate};
use scenario_common::{Route, Scenario, ScenarioForm, ScenarioId};

use crate::components::{Card, ErrorDisplay, JsonObjectArea, LoadingSpinner, TextInput};
use crate::state::AppState;

/// Scenario editor.
#[component]
pub fn ScenarioEditorPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let location = use_location();
    let navigate = use_navigate();

    let route = Memo::new(move |_| Route::from_path(&location.pathname.get()));
    let scenario_id = Memo::new(move |_| route.get().and_then(|r| r.scenario_id().cloned()));

    // Form state
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    // Id as the server sent it, so a numeric id isn't resent as text
    let record_id = RwSignal::new(None::<ScenarioId>);

    let fill = move |scenario: Option<&Scenario>| {
        record_id.set(scenario.and_then(|s| s.id.clone()));
        let form = scenario.map(ScenarioForm::from_scenario).unwrap_or_default();
        name.set(form.name);
        description.set(form.description);
        body.set(form.body);
    };

    // Populate from the store, fetching when the record is not loaded yet.
    // Only the route is tracked, so later list commits don't clobber edits.
    let state = app_state.clone();
    Effect::new(move |_| {
        let Some(id) = scenario_id.get() else {
            fill(None);
            return;
        };

        if let Some(scenario) = untrack(|| state.store.find(&id)) {
            fill(Some(&scenario));
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            state.loading.set(true);
            match state.store.fetch_scenario(&id).await {
                Ok(scenario) => fill(Some(&scenario)),
                Err(e) => state.set_error(e.to_string()),
            }
            state.loading.set(false);
        });
    });

    let state = app_state.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let id = scenario_id
            .get_untracked()
            .map(|route_id| route_id.or_known(record_id.get_untracked().as_ref()));
        let form = ScenarioForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            body: body.get_untracked(),
        };
        let scenario = match form.into_scenario(id.clone()) {
            Ok(scenario) => scenario,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);
        saving.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match id {
                Some(_) => state.store.update_scenario(&scenario).await,
                None => state.store.save_scenario(&scenario).await,
            };
            saving.set(false);

            match result {
                Ok(saved) => {
                    log::info!("Saved scenario {:?}", saved.id);
                    navigate(&Route::Manager.href(), Default::default());
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let heading = move || match scenario_id.get() {
        Some(id) => format!("Edit Scenario {}", id),
        None => "New Scenario".to_string(),
    };
    let loading = app_state.loading;
    let error = app_state.error;

    view! {
        <Title text=heading />
        <div class="page page-scenario-editor">
            <ErrorDisplay error=error />
            <ErrorDisplay error=form_error />

            {move || loading.get().then(|| view! { <LoadingSpinner message="Loading scenario..." /> })}

            <Card title=heading()>
                <form class="scenario-form" on:submit=on_submit>
                    <TextInput label="Name" value=name placeholder="Logon and heartbeat" required=true />
                    <TextInput label="Description" value=description />
                    <JsonObjectArea label="Scenario body (JSON object)" value=body rows=16 />
                    <div class="toolbar">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <a href=Route::Manager.href() class="btn">"Cancel"</a>
                    </div>
                </form>
            </Card>
        </div>
    }
}
