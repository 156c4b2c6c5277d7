//! DOM-backed deck capabilities.

use videodeck_core::{
    Control, DeckServices, DispatchError, DispatchResult, ElementIds, FullscreenApi,
    MediaControl, PlayerRegistry, Slot,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlMediaElement, HtmlSourceElement};

fn js_error(e: JsValue) -> DispatchError {
    DispatchError::Js(format!("{:?}", e))
}

/// A `<video>`/`<audio>` element inside a container.
pub struct DomPlayer(HtmlMediaElement);

impl MediaControl for DomPlayer {
    fn is_muted(&self) -> bool {
        self.0.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn pause(&self) {
        if let Err(e) = self.0.pause() {
            log::warn!("Failed to pause player: {:?}", e);
        }
    }
}

/// Looks deck elements up in the live document on every call.
pub struct DomRegistry {
    document: Document,
    elements: ElementIds,
}

impl DomRegistry {
    pub fn new(document: Document, elements: ElementIds) -> Self {
        Self { document, elements }
    }

    fn element(&self, id: &str) -> DispatchResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DispatchError::ElementNotFound(format!("#{}", id)))
    }

    fn method(element: &Element, api: FullscreenApi) -> Option<js_sys::Function> {
        js_sys::Reflect::get(element, &JsValue::from_str(api.method_name()))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    }
}

impl PlayerRegistry for DomRegistry {
    type Player = DomPlayer;

    fn activate(&self, control: Control) -> DispatchResult<()> {
        let id = self.elements.control(control);
        let element: HtmlElement = self
            .element(id)?
            .dyn_into()
            .map_err(|_| DispatchError::ElementNotFound(format!("#{} is not clickable", id)))?;
        element.click();
        Ok(())
    }

    fn fullscreen_apis(&self, slot: Slot) -> DispatchResult<Vec<FullscreenApi>> {
        let player = self.element(self.elements.player(slot))?;
        Ok(FullscreenApi::FALLBACK_ORDER
            .into_iter()
            .filter(|api| Self::method(&player, *api).is_some())
            .collect())
    }

    fn request_fullscreen(&self, slot: Slot, api: FullscreenApi) -> DispatchResult<()> {
        let player = self.element(self.elements.player(slot))?;
        let method = Self::method(&player, api).ok_or_else(|| {
            DispatchError::Js(format!("{} is not available", api.method_name()))
        })?;
        // The returned promise is ignored, rejections surface in the console.
        method.call0(&player).map_err(js_error)?;
        Ok(())
    }

    fn source_url(&self, slot: Slot) -> DispatchResult<Option<String>> {
        let source = self.element(self.elements.source(slot))?;
        let src = match source.dyn_ref::<HtmlSourceElement>() {
            Some(source) => source.src(),
            None => source.get_attribute("src").unwrap_or_default(),
        };
        Ok(Some(src).filter(|src| !src.is_empty()))
    }

    fn players(&self) -> DispatchResult<Vec<DomPlayer>> {
        let containers = self
            .document
            .query_selector_all(&self.elements.container_selector)
            .map_err(js_error)?;

        let mut players = Vec::with_capacity(containers.length() as usize);
        for i in 0..containers.length() {
            let Some(container) = containers.item(i).and_then(|n| n.dyn_into::<Element>().ok())
            else {
                continue;
            };
            match container.query_selector(&self.elements.player_selector) {
                Ok(Some(player)) => match player.dyn_into::<HtmlMediaElement>() {
                    Ok(player) => players.push(DomPlayer(player)),
                    Err(_) => log::warn!("Container {} holds a non-media player element", i),
                },
                Ok(None) => log::warn!("Container {} has no player element", i),
                Err(e) => return Err(js_error(e)),
            }
        }
        Ok(players)
    }
}

/// Look up a function the page defines on the global object.
fn page_function(name: &str) -> DispatchResult<js_sys::Function> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| DispatchError::Js(format!("{} is not defined", name)))
}

/// Calls the page's global `showToast` and `toggleFavorite` functions.
pub struct PageServices;

impl PageServices {
    pub const SHOW_TOAST: &'static str = "showToast";
    pub const TOGGLE_FAVORITE: &'static str = "toggleFavorite";
}

impl DeckServices for PageServices {
    fn show_toast(&self, message: &str, is_error: bool) -> DispatchResult<()> {
        page_function(Self::SHOW_TOAST)?
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(message),
                &JsValue::from_bool(is_error),
            )
            .map_err(js_error)?;
        Ok(())
    }

    fn toggle_favorite(&self, file: &str) -> DispatchResult<()> {
        page_function(Self::TOGGLE_FAVORITE)?
            .call1(&JsValue::NULL, &JsValue::from_str(file))
            .map_err(js_error)?;
        Ok(())
    }
}
