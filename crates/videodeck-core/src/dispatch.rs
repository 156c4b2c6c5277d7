//! Key dispatch over injected page capabilities.
//!
//! The dispatcher owns no page state. Every key press looks the page up again
//! through [`PlayerRegistry`], so containers added or removed between presses
//! are picked up automatically.

use crate::action::{Action, Control, FullscreenApi};
use crate::config::{DeckConfig, Messages};
use crate::favorite::{FavoriteError, favorite_key};
use crate::keymap::KeyMap;
use crate::slot::Slot;
use thiserror::Error;

/// Dispatch errors. None of these are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
    #[error("JavaScript error: {0}")]
    Js(String),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// A playable media element.
pub trait MediaControl {
    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
    fn pause(&self);
}

/// Live view of the deck's controls and players.
///
/// Lookups of elements that must exist return
/// [`DispatchError::ElementNotFound`] instead of faulting.
pub trait PlayerRegistry {
    type Player: MediaControl;

    /// Simulate a click on a control.
    fn activate(&self, control: Control) -> DispatchResult<()>;

    /// Fullscreen methods the slot's player element exposes.
    fn fullscreen_apis(&self, slot: Slot) -> DispatchResult<Vec<FullscreenApi>>;

    /// Invoke one fullscreen method on the slot's player element.
    fn request_fullscreen(&self, slot: Slot, api: FullscreenApi) -> DispatchResult<()>;

    /// URL of the media loaded in a slot, `None` when nothing is loaded.
    fn source_url(&self, slot: Slot) -> DispatchResult<Option<String>>;

    /// The media element of every container currently in the page.
    fn players(&self) -> DispatchResult<Vec<Self::Player>>;
}

/// Page-provided notice and favorites functions.
pub trait DeckServices {
    fn show_toast(&self, message: &str, is_error: bool) -> DispatchResult<()>;
    fn toggle_favorite(&self, file: &str) -> DispatchResult<()>;
}

/// Translates key presses into deck actions.
pub struct Dispatcher<R, S> {
    registry: R,
    services: S,
    keymap: KeyMap,
    messages: Messages,
    video_marker: String,
}

impl<R: PlayerRegistry, S: DeckServices> Dispatcher<R, S> {
    pub fn new(registry: R, services: S, config: &DeckConfig) -> Self {
        Self {
            registry,
            services,
            keymap: config.keymap(),
            messages: config.messages.clone(),
            video_marker: config.video_marker.clone(),
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Handle one key press.
    ///
    /// Returns the action performed, or `None` when the key is unbound.
    pub fn handle_key(&self, key: &str) -> DispatchResult<Option<Action>> {
        let Some(action) = self.keymap.lookup(key) else {
            return Ok(None);
        };
        log::debug!("Key {:?} -> {:?}", key, action);
        self.perform(action)?;
        Ok(Some(action))
    }

    /// Run an action against the page.
    pub fn perform(&self, action: Action) -> DispatchResult<()> {
        match action {
            Action::Activate { target } => self.registry.activate(target),
            Action::Fullscreen { slot } => self.fullscreen(slot),
            Action::ToggleMute => self.toggle_mute(),
            Action::PauseAll => self.pause_all(),
            Action::ToggleFavorite { slot } => self.toggle_favorite(slot),
        }
    }

    fn fullscreen(&self, slot: Slot) -> DispatchResult<()> {
        let supported = self.registry.fullscreen_apis(slot)?;
        match FullscreenApi::first_available(|api| supported.contains(&api)) {
            Some(api) => self.registry.request_fullscreen(slot, api)?,
            None => log::debug!("Player {} has no fullscreen method", slot),
        }
        self.services
            .show_toast(&Messages::for_slot(&self.messages.fullscreen, slot), false)
    }

    fn toggle_mute(&self) -> DispatchResult<()> {
        let players = self.registry.players()?;
        // Decided before any player changes.
        let all_muted = players.iter().all(|p| p.is_muted());
        for player in &players {
            player.set_muted(!all_muted);
        }
        let message = if all_muted {
            &self.messages.sound_on
        } else {
            &self.messages.sound_off
        };
        self.services.show_toast(message, false)
    }

    fn pause_all(&self) -> DispatchResult<()> {
        for player in self.registry.players()? {
            player.pause();
        }
        self.services.show_toast(&self.messages.paused_all, false)
    }

    fn toggle_favorite(&self, slot: Slot) -> DispatchResult<()> {
        match self.registry.source_url(slot)? {
            Some(src) if !src.is_empty() => {
                let file = favorite_key(&src, &self.video_marker)?;
                self.services.toggle_favorite(&file)
            }
            _ => self
                .services
                .show_toast(&Messages::for_slot(&self.messages.empty_slot, slot), true),
        }
    }
}
