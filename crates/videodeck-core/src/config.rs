//! Deck configuration: element ids, selectors, notice texts and key map.
//!
//! Every field has a default matching the stock deck page, so an empty JSON
//! object is a valid configuration.

use crate::action::Control;
use crate::favorite::DEFAULT_VIDEO_MARKER;
use crate::keymap::{Binding, KeyMap};
use crate::slot::{SLOT_COUNT, Slot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Placeholder replaced by the slot number in notice templates.
pub const SLOT_PLACEHOLDER: &str = "{slot}";

/// Ids and selectors of the page elements the deck drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub wish_me_luck: String,
    pub shuffle: [String; SLOT_COUNT],
    pub panic: String,
    pub clear_deck: String,
    /// Elements put into fullscreen, one per slot.
    pub players: [String; SLOT_COUNT],
    /// `<source>` elements holding the loaded media URL, one per slot.
    pub sources: [String; SLOT_COUNT],
    /// CSS selector matching every player container.
    pub container_selector: String,
    /// CSS selector of the media element inside a container.
    pub player_selector: String,
}

fn numbered(prefix: &str) -> [String; SLOT_COUNT] {
    Slot::ALL.map(|slot| format!("{}{}", prefix, slot))
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            wish_me_luck: "wishMeLuck".to_string(),
            shuffle: numbered("shuffle"),
            panic: "panicBtn".to_string(),
            clear_deck: "clearDeck".to_string(),
            players: numbered("player"),
            sources: numbered("source"),
            container_selector: ".video-container".to_string(),
            player_selector: ".video-player".to_string(),
        }
    }
}

impl ElementIds {
    /// Id of the element backing a control.
    pub fn control(&self, control: Control) -> &str {
        match control {
            Control::WishMeLuck => &self.wish_me_luck,
            Control::Shuffle(slot) => &self.shuffle[slot.index()],
            Control::Panic => &self.panic,
            Control::ClearDeck => &self.clear_deck,
        }
    }

    pub fn player(&self, slot: Slot) -> &str {
        &self.players[slot.index()]
    }

    pub fn source(&self, slot: Slot) -> &str {
        &self.sources[slot.index()]
    }

    fn all(&self) -> impl Iterator<Item = &String> {
        [&self.wish_me_luck, &self.panic, &self.clear_deck]
            .into_iter()
            .chain(self.shuffle.iter())
            .chain(self.players.iter())
            .chain(self.sources.iter())
            .chain([&self.container_selector, &self.player_selector])
    }
}

/// Notice texts. `{slot}` is replaced by the slot number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub fullscreen: String,
    pub sound_on: String,
    pub sound_off: String,
    pub paused_all: String,
    pub empty_slot: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            fullscreen: "Player {slot} fullscreen!".to_string(),
            sound_on: "Sound enabled!".to_string(),
            sound_off: "Sound disabled!".to_string(),
            paused_all: "All players paused!".to_string(),
            empty_slot: "No video in player {slot}!".to_string(),
        }
    }
}

impl Messages {
    /// Fill the slot placeholder of a template.
    pub fn for_slot(template: &str, slot: Slot) -> String {
        template.replace(SLOT_PLACEHOLDER, &slot.to_string())
    }
}

/// Full deck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub elements: ElementIds,
    /// Path marker preceding the file name in source URLs.
    pub video_marker: String,
    pub messages: Messages,
    /// Replaces the stock bindings when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keymap: Option<Vec<Binding>>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            video_marker: DEFAULT_VIDEO_MARKER.to_string(),
            messages: Messages::default(),
            keymap: None,
        }
    }
}

impl DeckConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.video_marker.is_empty() {
            return Err(ConfigError::Invalid("video_marker must not be empty".to_string()));
        }
        if self.elements.all().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::Invalid("element ids must not be empty".to_string()));
        }
        if let Some(bindings) = &self.keymap {
            if let Some(binding) = bindings.iter().find(|b| b.keys.is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "binding for {:?} has no keys",
                    binding.action
                )));
            }
        }
        Ok(())
    }

    /// Key map to dispatch with.
    pub fn keymap(&self) -> KeyMap {
        match &self.keymap {
            Some(bindings) => KeyMap::new(bindings.clone()),
            None => KeyMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        let config = DeckConfig::from_json("{}").unwrap();
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.elements.control(Control::Panic), "panicBtn");
        assert_eq!(config.elements.source(Slot::ALL[3]), "source4");
        assert_eq!(config.elements.player(Slot::ALL[0]), "player1");
    }

    #[test]
    fn test_json_round_trip() {
        let config = DeckConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(DeckConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_override() {
        let config = DeckConfig::from_json(
            r#"{"elements":{"panic":"stopEverything"},"messages":{"sound_on":"Audio on"}}"#,
        )
        .unwrap();
        assert_eq!(config.elements.control(Control::Panic), "stopEverything");
        assert_eq!(config.elements.clear_deck, "clearDeck");
        assert_eq!(config.messages.sound_on, "Audio on");
        assert_eq!(config.messages.sound_off, "Sound disabled!");
    }

    #[test]
    fn test_slot_template() {
        let messages = Messages::default();
        assert_eq!(
            Messages::for_slot(&messages.empty_slot, Slot::ALL[3]),
            "No video in player 4!"
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            DeckConfig::from_json(r#"{"video_marker":""}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DeckConfig::from_json(r#"{"elements":{"wish_me_luck":" "}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DeckConfig::from_json(r#"{"keymap":[{"keys":[],"action":"pause_all"}]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DeckConfig::from_json(r#"{"keymap":[{"keys":["x"],"action":"fullscreen","slot":5}]}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_custom_keymap_replaces_defaults() {
        let config = DeckConfig::from_json(
            r#"{"keymap":[{"keys":["p"],"action":"pause_all"}]}"#,
        )
        .unwrap();
        let keymap = config.keymap();
        assert_eq!(keymap.lookup("p"), Some(Action::PauseAll));
        assert_eq!(keymap.lookup(" "), None);
        assert_eq!(DeckConfig::default().keymap().lookup(" "), Some(Action::PauseAll));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"video_marker":"/media/"}}"#).unwrap();

        let config = DeckConfig::load(file.path()).unwrap();
        assert_eq!(config.video_marker, "/media/");

        let missing = DeckConfig::load(std::path::Path::new("/nonexistent/videodeck.json"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
