// =============================================================================
// Scenario Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use scenario_common::Route;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <a href=Route::Manager.href() class="btn btn-primary">
                    "Back to Scenarios"
                </a>
            </div>
        </div>
    }
}
