use super::EventListener;
use crate::core::teardown_on_pagehide;
use crate::dom;
use crate::frame::{with_loop, LoopSlot};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_resize(window: &web::Window, slot: &LoopSlot) -> anyhow::Result<EventListener> {
    let slot = slot.clone();
    let window_for_size = window.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        let vp = dom::viewport(&window_for_size);
        with_loop(&slot, |l| l.resize(vp.width, vp.height));
    })
}

/// Tear down when the page is unloaded for good.
///
/// A page parked in the back/forward cache keeps its loop: the browser
/// pauses animation frames while it is frozen and they resume on restore.
/// Teardown drops this very listener, so it runs after the handler returns.
pub fn wire_pagehide(window: &web::Window) -> anyhow::Result<EventListener> {
    EventListener::new(window, "pagehide", move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|ev| ev.persisted());
        if !teardown_on_pagehide(persisted) {
            log::debug!("[backdrop] page cached; keeping loop");
            return;
        }
        spawn_local(async {
            crate::teardown();
        });
    })
}
