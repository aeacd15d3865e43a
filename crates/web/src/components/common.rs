// =============================================================================
// Scenario Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Row Action Button
// 2. Card
// 3. Loading Spinner
// 4. Error Display
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Row Action Button
// -----------------------------------------------------------------------------

/// Row action styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

/// Button for a request-backed action.
///
/// The caller raises `pending` while its request is in flight; the button is
/// disabled and shows `pending_label` until it drops again.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(into)] pending_label: String,
    #[prop(optional)] variant: ButtonVariant,
    pending: RwSignal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            disabled=move || pending.get()
            on:click=move |_| {
                if !pending.get_untracked() {
                    on_click.run(());
                }
            }
        >
            {move || if pending.get() { pending_label.clone() } else { label.clone() }}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Card
// -----------------------------------------------------------------------------

/// Titled panel.
#[component]
pub fn Card(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="card">
            <h3 class="card-title">{title}</h3>
            <div class="card-body">{children()}</div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Loading Spinner
// -----------------------------------------------------------------------------

#[component]
pub fn LoadingSpinner(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            <p class="loading-message">{message}</p>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Error Display
// -----------------------------------------------------------------------------

/// Banner for the error held in `error`, if any. Dismissing clears it.
#[component]
pub fn ErrorDisplay(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="error-display" role="alert">
                    <span class="error-message">{message}</span>
                    <button class="error-dismiss" on:click=move |_| error.set(None)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
