// =============================================================================
// Scenario Web - Page Components
// =============================================================================

pub mod editor;
pub mod manager;
pub mod not_found;

pub use editor::ScenarioEditorPage;
pub use manager::ScenarioManagerPage;
pub use not_found::NotFoundPage;
