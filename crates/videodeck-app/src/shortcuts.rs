//! Keyboard shortcut listing for documentation and the CLI.

use videodeck_core::KeyMap;

/// A keyboard shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: Vec<String>,
    pub description: String,
}

impl Shortcut {
    /// Format the keys for display (e.g., "M / m", "Space").
    pub fn format(&self) -> String {
        self.keys
            .iter()
            .map(|key| match key.as_str() {
                " " => "Space",
                other => other,
            })
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Registry of the shortcuts a key map provides.
pub struct ShortcutRegistry {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutRegistry {
    pub fn from_keymap(keymap: &KeyMap) -> Self {
        let shortcuts = keymap
            .bindings()
            .iter()
            .map(|binding| Shortcut {
                keys: binding.keys.clone(),
                description: binding.action.description(),
            })
            .collect();
        Self { shortcuts }
    }

    /// Get all registered shortcuts.
    pub fn all(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Print all shortcuts to stdout.
    pub fn print_all(&self) {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in &self.shortcuts {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listing() {
        let registry = ShortcutRegistry::from_keymap(&KeyMap::default());
        let all = registry.all();

        assert_eq!(all.len(), KeyMap::default().len());
        assert_eq!(all[0].format(), "s / S");
        assert!(all.iter().any(|s| s.format() == "Space" && s.description == "Pause all players"));
        assert!(all.iter().any(|s| s.description == "Toggle favorite for player 4"));
    }
}
