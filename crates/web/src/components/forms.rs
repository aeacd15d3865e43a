// =============================================================================
// Scenario Web - Editor Fields
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. JsonObjectArea
// =============================================================================

use leptos::prelude::*;
use scenario_common::parse_body;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Single-line input bound to `value`.
#[component]
pub fn TextInput(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}{required.then_some(" *")}</span>
            <input
                type="text"
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        </label>
    }
}

// -----------------------------------------------------------------------------
// 2. JsonObjectArea
// -----------------------------------------------------------------------------

/// Raw JSON editor for the scenario body, flagged while it isn't an object.
#[component]
pub fn JsonObjectArea(label: &'static str, value: RwSignal<String>, rows: u32) -> impl IntoView {
    let valid = Memo::new(move |_| value.with(|text| parse_body(text).is_ok()));

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                class="form-textarea form-code"
                class:invalid=move || !valid.get()
                spellcheck="false"
                rows=rows
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
            {move || (!valid.get()).then(|| view! { <span class="form-hint">"Not a JSON object"</span> })}
        </label>
    }
}
