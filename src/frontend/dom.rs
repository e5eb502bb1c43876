//! Option-chained accessors over the browser globals, plus listener
//! handles that unhook themselves on drop.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, HtmlElement, KeyboardEvent, Location, ScrollBehavior, ScrollToOptions,
};
use yew::NodeRef;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn page_location() -> Option<Location> {
    Some(window()?.location())
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn element_height(node: &NodeRef) -> f64 {
    node.cast::<HtmlElement>()
        .map(|element| f64::from(element.offset_height()))
        .unwrap_or(0.0)
}

/// Document-space top and bottom of the element carrying this id.
pub fn section_bounds(id: &str) -> Option<(f64, f64)> {
    let element = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let top = f64::from(element.offset_top());
    Some((top, top + f64::from(element.offset_height())))
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// The menu and the modals hold the page still while they are up.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Window event subscription that unhooks itself on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Document-level keydown subscription that unhooks itself on drop.
pub struct KeydownListener {
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    pub fn new(handler: impl FnMut(KeyboardEvent) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
        document()?
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        if let Some(document) = document() {
            let _ = document
                .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
        }
    }
}
