#![cfg(target_arch = "wasm32")]
use crate::core::{RenderLoop, Scene, SimConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;

/// The running backdrop: the loop plus the listeners feeding it.
struct Backdrop {
    slot: frame::LoopSlot,
    listeners: Vec<events::EventListener>,
}

impl Backdrop {
    fn shutdown(self) {
        drop(self.listeners);
        if let Some(mut render_loop) = self.slot.borrow_mut().take() {
            render_loop.stop();
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Backdrop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    log::info!("zlink-backdrop starting");
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop animating and detach every listener. Safe to call more than once.
#[wasm_bindgen(js_name = stopBackdrop)]
pub fn stop_backdrop() {
    teardown();
}

pub(crate) fn teardown() {
    if let Some(backdrop) = ACTIVE.with(|a| a.borrow_mut().take()) {
        backdrop.shutdown();
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await?;

    // Decorative only: without both canvases the page simply has no backdrop.
    let Some(layers) = canvas::find_layers(&document) else {
        log::debug!("[backdrop] drawing surfaces unavailable; staying inert");
        return Ok(());
    };
    let container = canvas::ContainerStyle::find(&document);
    if container.is_none() {
        log::debug!("[backdrop] no parallax container");
    }

    let viewport = dom::viewport(&window);
    let mut rng = StdRng::from_entropy();
    let scene = Scene::new(viewport, SimConfig::default(), &mut rng);
    let population = scene.population();

    let slot: frame::LoopSlot = Rc::new(RefCell::new(None));
    let scheduler = frame::AnimationFrames::new(window.clone(), &slot);
    let Some(render_loop) = RenderLoop::start(Some(layers), container, scene, scheduler) else {
        return Ok(());
    };
    *slot.borrow_mut() = Some(render_loop);

    let listeners = match events::wire(&window, &document, &slot) {
        Ok(listeners) => listeners,
        Err(e) => {
            frame::with_loop(&slot, |l| l.stop());
            slot.borrow_mut().take();
            return Err(e);
        }
    };
    log::info!(
        "[backdrop] {}x{} {:?}: {} nodes, {} dust",
        viewport.width,
        viewport.height,
        viewport.device_class(),
        population.nodes,
        population.dust
    );
    ACTIVE.with(|a| *a.borrow_mut() = Some(Backdrop { slot, listeners }));
    Ok(())
}
