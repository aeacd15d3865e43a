// =============================================================================
// Scenario Common - Scenario List State
// =============================================================================
// Table of Contents:
// 1. Scenario List
// 2. Mutations
// 3. State Cells
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::scenario::{Scenario, ScenarioId};

// -----------------------------------------------------------------------------
// 1. Scenario List
// -----------------------------------------------------------------------------

/// Ordered list of scenarios held by the store.
///
/// Order is the server order after a load, then append/replace/remove order.
/// Id uniqueness is not enforced; lookups act on the first match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioList {
    items: Vec<Scenario>,
}

impl ScenarioList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Scenario] {
        &self.items
    }

    /// Index of the first scenario with `id`.
    pub fn position(&self, id: &ScenarioId) -> Option<usize> {
        self.items.iter().position(|s| s.has_id(id))
    }

    /// First scenario with `id`.
    pub fn find(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.position(id).map(|index| &self.items[index])
    }
}

impl From<Vec<Scenario>> for ScenarioList {
    fn from(items: Vec<Scenario>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a ScenarioList {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// -----------------------------------------------------------------------------
// 2. Mutations
// -----------------------------------------------------------------------------

/// A local state transition, committed after a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioMutation {
    /// Replace the whole list.
    Set(Vec<Scenario>),
    /// Append one scenario.
    Add(Scenario),
    /// Replace the first scenario with the same id; no-op when absent.
    Update(Scenario),
    /// Remove the first scenario with this id; no-op when absent.
    Delete(ScenarioId),
    /// Replace the first scenario with the same id, or append it.
    Upsert(Scenario),
}

impl ScenarioMutation {
    /// Mutation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioMutation::Set(_) => "SET_SCENARIOS",
            ScenarioMutation::Add(_) => "ADD_SCENARIO",
            ScenarioMutation::Update(_) => "UPDATE_SCENARIO",
            ScenarioMutation::Delete(_) => "DELETE_SCENARIO",
            ScenarioMutation::Upsert(_) => "UPSERT_SCENARIO",
        }
    }

    /// Apply to `list`. Returns whether the list changed shape or content.
    pub fn apply(self, list: &mut ScenarioList) -> bool {
        match self {
            ScenarioMutation::Set(items) => {
                list.items = items;
                true
            }
            ScenarioMutation::Add(scenario) => {
                list.items.push(scenario);
                true
            }
            ScenarioMutation::Update(scenario) => replace_first(list, scenario).is_ok(),
            ScenarioMutation::Delete(id) => match list.position(&id) {
                Some(index) => {
                    list.items.remove(index);
                    true
                }
                None => false,
            },
            ScenarioMutation::Upsert(scenario) => {
                if let Err(scenario) = replace_first(list, scenario) {
                    list.items.push(scenario);
                }
                true
            }
        }
    }
}

/// Replace the first entry sharing `scenario`'s id, handing the scenario
/// back when there is nothing to replace.
fn replace_first(list: &mut ScenarioList, scenario: Scenario) -> Result<(), Scenario> {
    let index = match scenario.id.as_ref().and_then(|id| list.position(id)) {
        Some(index) => index,
        None => return Err(scenario),
    };
    list.items[index] = scenario;
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. State Cells
// -----------------------------------------------------------------------------

/// Cell holding the scenario list on behalf of a store.
///
/// The store is the only writer; everything else reads through `with_list`.
pub trait ScenarioState {
    /// Apply a mutation.
    fn commit(&self, mutation: ScenarioMutation);

    /// Read the current list.
    fn with_list<R>(&self, f: impl FnOnce(&ScenarioList) -> R) -> R;
}

/// Plain single-threaded state cell.
#[derive(Clone, Debug, Default)]
pub struct LocalState {
    list: Rc<RefCell<ScenarioList>>,
}

impl LocalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list.
    pub fn with_scenarios(scenarios: Vec<Scenario>) -> Self {
        Self {
            list: Rc::new(RefCell::new(ScenarioList::from(scenarios))),
        }
    }
}

impl ScenarioState for LocalState {
    fn commit(&self, mutation: ScenarioMutation) {
        mutation.apply(&mut self.list.borrow_mut());
    }

    fn with_list<R>(&self, f: impl FnOnce(&ScenarioList) -> R) -> R {
        f(&self.list.borrow())
    }
}
