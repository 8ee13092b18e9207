use super::ObjectId;

/// Selection helper. Holds the currently selected objects in selection
/// order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selector {
    selected: Vec<ObjectId>,
    /// Bumped whenever the selection actually changes.
    revision: u64,
}

impl Selector {
    /// Create an empty selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single object.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, id: ObjectId) -> bool {
        if self.selected == [id] {
            return false;
        }
        self.selected.clear();
        self.selected.push(id);
        self.revision += 1;
        true
    }

    /// Add or remove an object without touching the rest of the selection.
    pub fn toggle(&mut self, id: ObjectId) {
        if let Some(idx) = self.selected.iter().position(|s| *s == id) {
            let _ = self.selected.remove(idx);
        } else {
            self.selected.push(id);
        }
        self.revision += 1;
    }

    /// Clear the selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        self.revision += 1;
        true
    }

    /// Currently selected objects.
    #[must_use]
    pub fn selection(&self) -> &[ObjectId] {
        &self.selected
    }

    /// Most recently selected object.
    #[must_use]
    pub fn primary(&self) -> Option<ObjectId> {
        self.selected.last().copied()
    }

    /// Whether an object is selected.
    #[must_use]
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected.contains(&id)
    }

    /// Revision counter for change detection.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_replaces_selection() {
        let mut sel = Selector::new();
        assert!(sel.select(ObjectId(1)));
        assert!(sel.select(ObjectId(2)));
        assert_eq!(sel.selection(), &[ObjectId(2)]);
        assert!(!sel.select(ObjectId(2)));
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut sel = Selector::new();
        sel.toggle(ObjectId(1));
        sel.toggle(ObjectId(2));
        assert_eq!(sel.primary(), Some(ObjectId(2)));
        sel.toggle(ObjectId(1));
        assert_eq!(sel.selection(), &[ObjectId(2)]);
        assert!(!sel.is_selected(ObjectId(1)));
    }

    #[test]
    fn clear_reports_change_once() {
        let mut sel = Selector::new();
        let _ = sel.select(ObjectId(3));
        let rev = sel.revision();
        assert!(sel.clear());
        assert!(!sel.clear());
        assert_eq!(sel.revision(), rev + 1);
    }
}
