//! WebAssembly entry point and keydown listener.

use crate::dom::{DomRegistry, PageServices};
use crate::error::AppError;
use videodeck_core::{DeckConfig, DeckServices, Dispatcher, PlayerRegistry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

/// Id of the optional `<script type="application/json">` holding a deck config.
pub const CONFIG_ELEMENT_ID: &str = "videodeck-config";

/// Read the page-provided configuration, falling back to defaults.
pub fn page_config(document: &Document) -> DeckConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return DeckConfig::default();
    };

    match DeckConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Using deck config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::error!("Ignoring invalid deck config: {}", e);
            DeckConfig::default()
        }
    }
}

/// Register the document-wide keydown handler for the page lifetime.
pub fn install_listener<R, S>(
    document: &Document,
    dispatcher: Dispatcher<R, S>,
) -> Result<(), AppError>
where
    R: PlayerRegistry + 'static,
    S: DeckServices + 'static,
{
    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let key = event.key();
        match dispatcher.handle_key(&key) {
            Ok(Some(action)) => log::debug!("Handled {:?} as {:?}", key, action),
            Ok(None) => {}
            Err(e) => log::warn!("Shortcut {:?} failed: {}", key, e),
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .map_err(|e| AppError::Js(format!("{:?}", e)))?;
    on_keydown.forget(); // Lives as long as the page

    Ok(())
}

fn start() -> Result<(), AppError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(AppError::NoDocument)?;

    let config = page_config(&document);
    let registry = DomRegistry::new(document.clone(), config.elements.clone());
    let dispatcher = Dispatcher::new(registry, PageServices, &config);
    log::info!("Installing {} deck shortcuts", dispatcher.keymap().len());

    install_listener(&document, dispatcher)
}

/// Initialize logging and install the deck shortcuts.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Starting VideoDeck shortcuts (WASM)");

    if let Err(e) = start() {
        log::error!("Failed to install shortcuts: {}", e);
    }
}
