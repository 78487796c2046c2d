use super::EventListener;
use crate::frame::{with_loop, LoopSlot};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(window: &web::Window, slot: &LoopSlot) -> anyhow::Result<EventListener> {
    let slot = slot.clone();
    EventListener::new(window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        with_loop(&slot, |l| l.pointer_moved(x, y));
    })
}

/// The pointer left the page: drop the attraction and let the parallax rest.
///
/// Listens on the root element; `mouseleave` does not reach `window`.
pub fn wire_pointerleave(
    document: &web::Document,
    slot: &LoopSlot,
) -> anyhow::Result<EventListener> {
    let slot = slot.clone();
    let target: web::EventTarget = match document.document_element() {
        Some(root) => root.into(),
        None => document.clone().into(),
    };
    EventListener::new(&target, "mouseleave", move |_ev: web::Event| {
        with_loop(&slot, |l| l.pointer_left());
    })
}
