//! Host event wiring. Every listener is kept in an [`EventListener`] guard so
//! teardown can detach it again.

mod pointer;
mod window;

use crate::frame::LoopSlot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registered DOM listener, removed on drop.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Attach resize, pointer and page-lifecycle handlers for the loop in `slot`.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    slot: &LoopSlot,
) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        window::wire_resize(window, slot)?,
        pointer::wire_pointermove(window, slot)?,
        pointer::wire_pointerleave(document, slot)?,
        window::wire_pagehide(window)?,
    ])
}
