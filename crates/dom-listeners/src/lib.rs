//! DOM Listener Utilities
//!
//! Small helpers for binding page-lifetime event handlers to existing markup.
//! Handlers are leaked into the JS heap (`Closure::forget`) because the page
//! script never tears them down.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

/// Bind `handler` to `event` on `target` for the lifetime of the page.
///
/// The event is cast to `E` unchecked, so `E` must match what the browser
/// dispatches for `event` (e.g. `MouseEvent` for `"mousemove"`).
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    });
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Bind a handler on the window (scroll, resize, ...)
pub fn listen_window<E, F>(event: &str, handler: F)
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    if let Some(win) = web_sys::window() {
        listen(&win, event, handler);
    }
}

/// Bind a handler on the document (outside clicks, keyboard shortcuts)
pub fn listen_document<E, F>(event: &str, handler: F)
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        listen(&doc, event, handler);
    }
}

/// Whether the event target lies inside `container` (or is the container).
pub fn contains_target(container: &Element, ev: &web_sys::Event) -> bool {
    let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
    container.contains(target.as_ref())
}

/// Visibility trigger for an intersection observer
#[derive(Clone, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element that must be visible (0.0 - 1.0)
    pub threshold: f64,
    /// CSS margin applied to the root's bounding box, e.g. `"0px 0px -50px 0px"`
    pub root_margin: Option<String>,
}

/// Observe `elements` and call `on_visible` the first time each one
/// intersects the viewport. The element is unobserved right after, so the
/// callback fires at most once per element.
pub fn observe_once<F>(
    elements: &[Element],
    options: &ObserveOptions,
    mut on_visible: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Element) + 'static,
{
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();

    for el in elements {
        observer.observe(el);
    }
    Ok(observer)
}
