// =============================================================================
// Scenario Common - Client Route Table
// =============================================================================
// Table of Contents:
// 1. Route Table
// 2. Route
// =============================================================================

use crate::scenario::ScenarioId;

// -----------------------------------------------------------------------------
// 1. Route Table
// -----------------------------------------------------------------------------

/// View a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Manager,
    Editor,
}

/// Static route entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Every client route. The web router registers exactly these patterns.
pub const ROUTES: [RouteDef; 3] = [
    RouteDef {
        pattern: "/",
        name: "ScenarioManager",
        view: View::Manager,
    },
    RouteDef {
        pattern: "/editor",
        name: "ScenarioEditor",
        view: View::Editor,
    },
    RouteDef {
        pattern: "/editor/:id",
        name: "ScenarioEditorWithId",
        view: View::Editor,
    },
];

// -----------------------------------------------------------------------------
// 2. Route
// -----------------------------------------------------------------------------

/// A resolved client route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Manager,
    /// `/editor`, create mode.
    EditorCreate,
    /// `/editor/:id`, edit mode.
    EditorEdit { id: ScenarioId },
}

impl Route {
    /// Resolve a location path. Query string and fragment are ignored, as is
    /// a single trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.strip_suffix('/').unwrap_or(path);
        let mut segments = path.split('/');

        // Leading slash is required.
        if segments.next() != Some("") {
            return None;
        }

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Some(Route::Manager),
            (Some("editor"), None, _) => Some(Route::EditorCreate),
            (Some("editor"), Some(raw), None) => {
                let decoded = urlencoding::decode(raw).ok()?;
                let id = ScenarioId::parse(&decoded).ok()?;
                Some(Route::EditorEdit { id })
            }
            _ => None,
        }
    }

    /// Link target for this route.
    pub fn href(&self) -> String {
        match self {
            Route::Manager => "/".to_string(),
            Route::EditorCreate => "/editor".to_string(),
            Route::EditorEdit { id } => format!("/editor/{}", urlencoding::encode(&id.as_key())),
        }
    }

    /// Entry in [`ROUTES`] this route was matched by.
    pub fn def(&self) -> &'static RouteDef {
        match self {
            Route::Manager => &ROUTES[0],
            Route::EditorCreate => &ROUTES[1],
            Route::EditorEdit { .. } => &ROUTES[2],
        }
    }

    pub fn name(&self) -> &'static str {
        self.def().name
    }

    pub fn view(&self) -> View {
        self.def().view
    }

    /// Scenario being edited, if any.
    pub fn scenario_id(&self) -> Option<&ScenarioId> {
        match self {
            Route::EditorEdit { id } => Some(id),
            _ => None,
        }
    }
}
