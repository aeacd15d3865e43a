// =============================================================================
// Scenario Web - Scenario Manager Page
// =============================================================================
// Table of Contents:
// 1. Manager Page
// 2. Scenario Row
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use scenario_common::{Route, Scenario};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::components::{Button, ButtonVariant, Card, ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use crate::utils::{confirm, truncate};

// -----------------------------------------------------------------------------
// 1. Manager Page
// -----------------------------------------------------------------------------

/// Scenario list with create, edit, duplicate, delete and upload.
#[component]
pub fn ScenarioManagerPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let list = app_state.store.state().list();
    let loading = app_state.loading;
    let error = app_state.error;

    // Fetch scenarios from API on mount
    let state = app_state.clone();
    Effect::new(move |_| {
        let state = state.clone();
        spawn_local(async move {
            state.loading.set(true);
            if let Err(e) = state.store.load_scenarios().await {
                state.set_error(e.to_string());
            }
            state.loading.set(false);
        });
    });

    // Upload a scenario JSON file picked by the user
    let state = app_state.clone();
    let on_upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");

        let state = state.clone();
        spawn_local(async move {
            let name = file.name();
            let text = match JsFuture::from(file.text()).await {
                Ok(text) => text.as_string().unwrap_or_default(),
                Err(e) => {
                    log::warn!("Failed to read {}: {:?}", name, e);
                    state.set_error(format!("Could not read {}", name));
                    return;
                }
            };

            match state.store.upload_scenario(&name, text.into_bytes()).await {
                Ok(_) => state.clear_error(),
                Err(e) => state.set_error(e.to_string()),
            }
        });
    };

    view! {
        <Title text="Scenario Manager" />
        <div class="page page-scenario-manager">
            <ErrorDisplay error=error />

            <Card title="Scenarios">
                <div class="toolbar">
                    <a href=Route::EditorCreate.href() class="btn btn-primary">"New Scenario"</a>
                    <label class="btn">
                        "Upload JSON"
                        <input type="file" accept=".json" style="display: none" on:change=on_upload />
                    </label>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingSpinner message="Loading scenarios..." /> }
                >
                    <Show
                        when=move || list.with(|l| !l.is_empty())
                        fallback=|| view! { <p class="empty-state">"No scenarios yet."</p> }
                    >
                        <table class="scenario-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Description"</th>
                                    <th>"Id"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || list.with(|l| {
                                    l.iter()
                                        .cloned()
                                        .map(|scenario| view! { <ScenarioRow scenario=scenario /> })
                                        .collect_view()
                                })}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </Card>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Scenario Row
// -----------------------------------------------------------------------------

#[component]
fn ScenarioRow(scenario: Scenario) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let name = scenario.name().unwrap_or("(unnamed)").to_string();
    let description = truncate(scenario.description().unwrap_or_default(), 80);
    let id_label = scenario.id.as_ref().map(ToString::to_string).unwrap_or_default();

    // Records without an id cannot be addressed on the server
    let actions = scenario.id.clone().map(|id| {
        let edit_href = Route::EditorEdit { id: id.clone() }.href();

        let duplicating = RwSignal::new(false);
        let state = app_state.clone();
        let duplicate_id = id.clone();
        let on_duplicate = Callback::new(move |_: ()| {
            let state = state.clone();
            let id = duplicate_id.clone();
            duplicating.set(true);
            spawn_local(async move {
                if let Err(e) = state.store.duplicate_scenario(&id).await {
                    state.set_error(e.to_string());
                }
                duplicating.try_set(false);
            });
        });

        // The row goes away on success, so the flag may already be disposed.
        let deleting = RwSignal::new(false);
        let state = app_state.clone();
        let on_delete = Callback::new(move |_: ()| {
            if !confirm(&format!("Delete scenario {}?", id)) {
                return;
            }
            let state = state.clone();
            let id = id.clone();
            deleting.set(true);
            spawn_local(async move {
                if let Err(e) = state.store.delete_scenario(&id).await {
                    state.set_error(e.to_string());
                }
                deleting.try_set(false);
            });
        });

        view! {
            <div class="scenario-actions">
                <a href=edit_href class="btn">"Edit"</a>
                <Button
                    label="Duplicate"
                    pending_label="Duplicating..."
                    pending=duplicating
                    on_click=on_duplicate
                />
                <Button
                    label="Delete"
                    pending_label="Deleting..."
                    variant=ButtonVariant::Danger
                    pending=deleting
                    on_click=on_delete
                />
            </div>
        }
    });

    view! {
        <tr>
            <td>{name}</td>
            <td>{description}</td>
            <td><code>{id_label}</code></td>
            <td>{actions}</td>
        </tr>
    }
}
