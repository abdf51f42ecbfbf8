use super::EventListener;
use crate::audio::AudioEngine;
use crate::core::viewport::client_to_canvas;
use crate::core::{SceneClock, SceneState};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ClickWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
    pub audio: Rc<RefCell<AudioEngine>>,
    pub rng: Rc<RefCell<StdRng>>,
    pub clock: SceneClock,
}

/// Canvas click: resume audio, drop a ripple burst at the pointer and ring a chime.
pub fn wire_click(w: ClickWiring) -> EventListener {
    let target = w.canvas.clone();
    EventListener::new(&target, "click", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = w.canvas.get_bounding_client_rect();
        let point = client_to_canvas(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect.left(),
            rect.top(),
        );
        let now = w.clock.now_ms();
        let mut rng = w.rng.borrow_mut();
        let mut audio = w.audio.borrow_mut();
        audio.resume_if_suspended();

        w.scene.borrow_mut().spawn_burst(point, now, &mut *rng);
        match audio.play_chime(&mut *rng) {
            Some(hz) => log::debug!(
                "[click] burst at ({:.0},{:.0}) chime {:.1} Hz",
                point.x,
                point.y,
                hz
            ),
            None => log::debug!("[click] burst at ({:.0},{:.0}), silent", point.x, point.y),
        }
    })
}
