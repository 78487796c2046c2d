use crate::canvas::{CanvasLayer, ContainerStyle};
use crate::core::{FrameScheduler, RenderLoop};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type BrowserLoop = RenderLoop<CanvasLayer, ContainerStyle, AnimationFrames>;

/// Shared home of the running loop. Empty before start and after teardown.
pub type LoopSlot = Rc<RefCell<Option<BrowserLoop>>>;

/// `requestAnimationFrame` scheduling; each callback ticks the loop in the
/// slot. The callback only holds a weak reference, so clearing the slot
/// releases everything.
pub struct AnimationFrames {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
}

impl AnimationFrames {
    pub fn new(window: web::Window, slot: &LoopSlot) -> Self {
        let slot: Weak<RefCell<Option<BrowserLoop>>> = Rc::downgrade(slot);
        let callback = Closure::wrap(Box::new(move || {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            if let Some(render_loop) = slot.borrow_mut().as_mut() {
                render_loop.tick();
            }
        }) as Box<dyn FnMut()>);
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Run `f` against the loop if it is still alive.
pub fn with_loop(slot: &LoopSlot, f: impl FnOnce(&mut BrowserLoop)) {
    if let Some(render_loop) = slot.borrow_mut().as_mut() {
        f(render_loop);
    }
}
