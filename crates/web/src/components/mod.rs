// =============================================================================
// Scenario Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod layout;
pub mod common;
pub mod forms;

pub use layout::Layout;
pub use common::{Button, ButtonVariant, Card, LoadingSpinner, ErrorDisplay};
pub use forms::{JsonObjectArea, TextInput};
