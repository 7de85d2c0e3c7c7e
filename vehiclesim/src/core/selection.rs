use crate::core::vehicle::Catalog;

/// Maximum number of vehicles that can be part of one comparison.
pub const MAX_NO_SELECTED: usize = 4;

/// Selection maintains the ordered set of selected vehicle names (bounded cardinality). It is
/// owned by the embedding session and handed to the aligner on every recomputation; there is no
/// module-level state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// new creates a selection with the first catalog entry pre-selected (if the catalog is
    /// non-empty) such that the initial display is not empty.
    pub fn new(catalog: &Catalog) -> Selection {
        let mut selection = Selection::default();

        if let Some(pars) = catalog.vehicles.first() {
            selection.add(&pars.name);
        }

        selection
    }

    /// add appends the name at the end of the selection (insertion order drives the slot colors).
    /// No-op if the name is already selected or the capacity of MAX_NO_SELECTED is reached.
    pub fn add(&mut self, name: &str) {
        if self.names.len() >= MAX_NO_SELECTED || self.contains(name) {
            return;
        }

        self.names.push(name.to_owned());
    }

    /// remove deletes the name from the selection, keeping the relative order of the remaining
    /// entries. No-op if the name is not selected.
    pub fn remove(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }

    /// contains checks whether the inserted name is currently selected.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// names returns the selected vehicle names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// no_selected returns the current selection size.
    pub fn no_selected(&self) -> usize {
        self.names.len()
    }

    /// is_empty checks whether no vehicle is selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
