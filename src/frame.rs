use crate::core::{CancelToken, SceneClock, SceneState, Viewport};
use crate::render::Painter;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub viewport: Rc<Cell<Viewport>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub painter: Painter,
    pub clock: SceneClock,
    pub cancel: CancelToken,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let now = self.clock.now_ms();
        let viewport = self.viewport.get();
        let mut scene = self.scene.borrow_mut();

        scene.begin_frame(now, viewport.bounds(), &mut *self.rng.borrow_mut());
        self.painter.paint(&scene, &viewport, now);
        let stats = scene.prune(now);

        self.frames += 1;
        if stats.retired > 0 {
            log::debug!(
                "[frame {}] retired={} ripples={} particles={}",
                self.frames,
                stats.retired,
                stats.ripples,
                stats.particles
            );
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle for the requestAnimationFrame loop. The loop runs until its token
/// is cancelled; dropping the handle cancels it and releases the callback.
pub struct FrameLoop {
    slot: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
    cancel: CancelToken,
}

fn request_frame(slot: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = slot.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            pending.set(Some(id));
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let cancel = frame_ctx.cancel.clone();
    let slot: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let weak_slot: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&slot);
    let pending_tick = pending.clone();
    let cancel_tick = cancel.clone();
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if cancel_tick.is_cancelled() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(slot) = weak_slot.upgrade() {
            request_frame(&slot, &pending_tick);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&slot, &pending);
    log::info!("[frame] loop started");
    FrameLoop {
        slot,
        pending,
        cancel,
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}
