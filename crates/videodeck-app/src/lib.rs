//! VideoDeck Application
//!
//! Browser shell wiring the deck dispatcher to the page's keydown events,
//! plus shortcut listings shared with the native tool.

mod error;
mod shortcuts;

pub use error::AppError;
pub use shortcuts::{Shortcut, ShortcutRegistry};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomPlayer, DomRegistry, PageServices};
#[cfg(target_arch = "wasm32")]
pub use web::{CONFIG_ELEMENT_ID, install_listener, page_config, run_wasm};
