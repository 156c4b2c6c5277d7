//! Actions a key press can trigger.

use crate::slot::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named control element whose click handler lives in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "control", content = "slot", rename_all = "snake_case")]
pub enum Control {
    /// The "wish me luck" button.
    WishMeLuck,
    /// The shuffle button of a player slot.
    Shuffle(Slot),
    /// The panic button.
    Panic,
    /// The "clear deck" button.
    ClearDeck,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::WishMeLuck => write!(f, "wish me luck"),
            Control::Shuffle(slot) => write!(f, "shuffle {}", slot),
            Control::Panic => write!(f, "panic"),
            Control::ClearDeck => write!(f, "clear deck"),
        }
    }
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Simulate a click on a control element.
    Activate { target: Control },
    /// Put a player into fullscreen.
    Fullscreen { slot: Slot },
    /// Mute every player, or unmute them all if all are muted.
    ToggleMute,
    /// Pause every player.
    PauseAll,
    /// Toggle the favorite flag of the file loaded in a slot.
    ToggleFavorite { slot: Slot },
}

impl Action {
    /// Human readable description for shortcut listings.
    pub fn description(&self) -> String {
        match self {
            Action::Activate { target } => format!("Press {}", target),
            Action::Fullscreen { slot } => format!("Fullscreen player {}", slot),
            Action::ToggleMute => "Mute / unmute all players".to_string(),
            Action::PauseAll => "Pause all players".to_string(),
            Action::ToggleFavorite { slot } => format!("Toggle favorite for player {}", slot),
        }
    }
}

/// Fullscreen request methods, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    /// `Element.requestFullscreen`
    Standard,
    /// `Element.webkitRequestFullscreen`
    Webkit,
    /// `Element.msRequestFullscreen`
    Ms,
}

impl FullscreenApi {
    pub const FALLBACK_ORDER: [FullscreenApi; 3] =
        [FullscreenApi::Standard, FullscreenApi::Webkit, FullscreenApi::Ms];

    /// Name of the element method implementing this variant.
    pub const fn method_name(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "requestFullscreen",
            FullscreenApi::Webkit => "webkitRequestFullscreen",
            FullscreenApi::Ms => "msRequestFullscreen",
        }
    }

    /// Pick the first method in fallback order that `supports` accepts.
    pub fn first_available(mut supports: impl FnMut(FullscreenApi) -> bool) -> Option<Self> {
        Self::FALLBACK_ORDER.into_iter().find(|api| supports(*api))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullscreen_prefers_standard() {
        let api = FullscreenApi::first_available(|_| true);
        assert_eq!(api, Some(FullscreenApi::Standard));
    }

    #[test]
    fn test_fullscreen_falls_back_in_order() {
        let mut asked = Vec::new();
        let api = FullscreenApi::first_available(|api| {
            asked.push(api);
            api == FullscreenApi::Ms
        });
        assert_eq!(api, Some(FullscreenApi::Ms));
        assert_eq!(asked, FullscreenApi::FALLBACK_ORDER.to_vec());

        assert_eq!(FullscreenApi::first_available(|_| false), None);
    }

    #[test]
    fn test_action_json_shape() {
        let json = r#"{"action":"activate","target":{"control":"shuffle","slot":2}}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(
            action,
            Action::Activate { target: Control::Shuffle(Slot::ALL[1]) }
        );

        let action: Action = serde_json::from_str(r#"{"action":"pause_all"}"#).unwrap();
        assert_eq!(action, Action::PauseAll);

        let action: Action =
            serde_json::from_str(r#"{"action":"activate","target":{"control":"panic"}}"#).unwrap();
        assert_eq!(action, Action::Activate { target: Control::Panic });
    }
}
