use rustc_hash::FxHashMap;

/// Held-key map keyed by `KeyboardEvent.code`.
///
/// Every key-down/key-up writes straight through; there is no debouncing
/// and a released key stays in the map as `false`.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    keys: FxHashMap<String, bool>,
}

impl KeyState {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    pub fn set(&mut self, code: &str, held: bool) {
        if let Some(state) = self.keys.get_mut(code) {
            *state = held;
        } else {
            let _ = self.keys.insert(code.to_owned(), held);
        }
    }

    /// Whether a key is currently held. Unknown keys are not held.
    #[must_use]
    pub fn is_held(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Codes of all currently held keys, in no particular order.
    pub fn held(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter_map(|(code, held)| held.then_some(code.as_str()))
    }

    /// Mark every key released, e.g. when the page loses focus.
    pub fn release_all(&mut self) {
        self.keys.values_mut().for_each(|held| *held = false);
    }
}
