//! Key to action table.
//!
//! Keys are matched exactly against `KeyboardEvent.key`, so letter bindings
//! list both cases explicitly.

use crate::action::{Action, Control};
use crate::slot::Slot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the key map: every key in `keys` triggers `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub keys: Vec<String>,
    #[serde(flatten)]
    pub action: Action,
}

impl Binding {
    pub fn new(keys: &[&str], action: Action) -> Self {
        Self {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            action,
        }
    }
}

/// Ordered bindings with a lookup index.
///
/// When two bindings claim the same key, the earlier one wins.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<Binding>,
    index: HashMap<String, usize>,
}

impl KeyMap {
    /// Build a key map from bindings in priority order.
    pub fn new(bindings: Vec<Binding>) -> Self {
        let mut index = HashMap::new();
        for (i, binding) in bindings.iter().enumerate() {
            for key in &binding.keys {
                if index.contains_key(key) {
                    log::warn!("Key {:?} is bound more than once, keeping the first binding", key);
                    continue;
                }
                index.insert(key.clone(), i);
            }
        }
        Self { bindings, index }
    }

    /// Action bound to `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<Action> {
        self.index.get(key).map(|&i| self.bindings[i].action)
    }

    /// All bindings in priority order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

const SHUFFLE_KEYS: [&str; 4] = ["1", "2", "3", "4"];
const FULLSCREEN_KEYS: [[&str; 2]; 4] = [["q", "Q"], ["w", "W"], ["e", "E"], ["r", "R"]];
const FAVORITE_KEYS: [&str; 4] = ["5", "6", "7", "8"];

/// The stock deck bindings.
pub fn default_bindings() -> Vec<Binding> {
    let mut bindings = vec![Binding::new(
        &["s", "S"],
        Action::Activate { target: Control::WishMeLuck },
    )];
    for slot in Slot::ALL {
        bindings.push(Binding::new(
            &[SHUFFLE_KEYS[slot.index()]],
            Action::Activate { target: Control::Shuffle(slot) },
        ));
    }
    for slot in Slot::ALL {
        bindings.push(Binding::new(
            &FULLSCREEN_KEYS[slot.index()],
            Action::Fullscreen { slot },
        ));
    }
    bindings.push(Binding::new(&["m", "M"], Action::ToggleMute));
    bindings.push(Binding::new(&[" "], Action::PauseAll));
    bindings.push(Binding::new(&["'"], Action::Activate { target: Control::Panic }));
    bindings.push(Binding::new(&["c", "C"], Action::Activate { target: Control::ClearDeck }));
    for slot in Slot::ALL {
        bindings.push(Binding::new(
            &[FAVORITE_KEYS[slot.index()]],
            Action::ToggleFavorite { slot },
        ));
    }
    bindings
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(n: u8) -> Slot {
        Slot::new(n).unwrap()
    }

    #[test]
    fn test_default_letters_are_case_insensitive() {
        let keymap = KeyMap::default();
        for (lower, upper) in [("s", "S"), ("m", "M"), ("c", "C"), ("q", "Q"), ("r", "R")] {
            assert!(keymap.lookup(lower).is_some());
            assert_eq!(keymap.lookup(lower), keymap.lookup(upper));
        }
    }

    #[test]
    fn test_default_slot_keys() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.lookup("3"),
            Some(Action::Activate { target: Control::Shuffle(slot(3)) })
        );
        assert_eq!(keymap.lookup("W"), Some(Action::Fullscreen { slot: slot(2) }));
        assert_eq!(keymap.lookup("8"), Some(Action::ToggleFavorite { slot: slot(4) }));
        assert_eq!(keymap.lookup(" "), Some(Action::PauseAll));
        assert_eq!(
            keymap.lookup("'"),
            Some(Action::Activate { target: Control::Panic })
        );
    }

    #[test]
    fn test_unbound_keys() {
        let keymap = KeyMap::default();
        for key in ["x", "9", "0", "Enter", "Escape", "\"", "", "ss"] {
            assert_eq!(keymap.lookup(key), None, "{:?} should be unbound", key);
        }
    }

    #[test]
    fn test_first_binding_wins() {
        let keymap = KeyMap::new(vec![
            Binding::new(&["p"], Action::PauseAll),
            Binding::new(&["p", "m"], Action::ToggleMute),
        ]);
        assert_eq!(keymap.lookup("p"), Some(Action::PauseAll));
        assert_eq!(keymap.lookup("m"), Some(Action::ToggleMute));
        assert_eq!(keymap.len(), 2);
    }

    #[test]
    fn test_binding_json() {
        let json = r#"{"keys":["f","F"],"action":"fullscreen","slot":1}"#;
        let binding: Binding = serde_json::from_str(json).unwrap();
        assert_eq!(binding, Binding::new(&["f", "F"], Action::Fullscreen { slot: slot(1) }));
    }
}
