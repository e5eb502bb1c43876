//! Thin ownership wrapper over `IntersectionObserver`: the callback
//! closure lives exactly as long as the observer, and dropping the
//! wrapper disconnects it.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::behavior::reveal::RevealRepeat;

pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// `on_enter` runs for every intersecting target, with the target's
    /// position among its parent's element children. Under
    /// `RevealRepeat::Once` the target is unobserved before its first
    /// callback runs, so it can never fire twice.
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        repeat: RevealRepeat,
        on_enter: impl Fn(HtmlElement, usize) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    if repeat == RevealRepeat::Once {
                        observer.unobserve(&target);
                    }
                    let index = element_index(&target);
                    on_enter(target, index);
                }
            },
        )
            as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let inner =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        Some(Self {
            inner,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.inner.observe(element);
    }

    pub fn observe_children(&self, container: &Element) {
        let children = container.children();
        for index in 0..children.length() {
            if let Some(child) = children.item(index) {
                self.inner.observe(&child);
            }
        }
    }

    pub fn observe_matching(&self, root: &Element, selector: &str) {
        let Ok(nodes) = root.query_selector_all(selector) else {
            return;
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            self.inner.observe(&element);
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

fn element_index(element: &HtmlElement) -> usize {
    let mut index = 0;
    let mut cursor = element.previous_element_sibling();
    while let Some(previous) = cursor {
        index += 1;
        cursor = previous.previous_element_sibling();
    }
    index
}
