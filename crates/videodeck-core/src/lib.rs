//! VideoDeck Core Library
//!
//! Platform-agnostic key map and dispatch logic for the VideoDeck player wall.

pub mod action;
pub mod config;
pub mod dispatch;
pub mod favorite;
pub mod keymap;
pub mod slot;

pub use action::{Action, Control, FullscreenApi};
pub use config::{ConfigError, DeckConfig, ElementIds, Messages};
pub use dispatch::{DeckServices, DispatchError, DispatchResult, Dispatcher, MediaControl, PlayerRegistry};
pub use favorite::{DEFAULT_VIDEO_MARKER, FavoriteError, favorite_key};
pub use keymap::{Binding, KeyMap};
pub use slot::{InvalidSlot, SLOT_COUNT, Slot};
