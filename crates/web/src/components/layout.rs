// =============================================================================
// Scenario Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Main App Frame)
// 2. Header
// =============================================================================

use leptos::prelude::*;
use scenario_common::Route;

// -----------------------------------------------------------------------------
// 1. Layout (Main App Frame)
// -----------------------------------------------------------------------------

/// Main application layout with header and content area.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <main class="layout-content">
                {children()}
            </main>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Header
// -----------------------------------------------------------------------------

/// Top navigation header.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="layout-header">
            <a href=Route::Manager.href() class="layout-logo">"Scenario Studio"</a>
            <nav class="header-nav">
                <a href=Route::Manager.href() class="nav-link">"Scenarios"</a>
                <a href=Route::EditorCreate.href() class="nav-link">"New Scenario"</a>
            </nav>
        </header>
    }
}
