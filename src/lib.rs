#![cfg(target_arch = "wasm32")]
use crate::audio::AudioEngine;
use crate::constants::CANVAS_ID;
use crate::core::{CancelToken, SceneClock, SceneState, Viewport};
use crate::events::pointer::{wire_click, ClickWiring};
use crate::events::EventListener;
use crate::render::Painter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// Everything a mounted canvas keeps alive. Dropping it detaches every
/// listener and stops the frame loop.
struct App {
    _frame_loop: frame::FrameLoop,
    _listeners: Vec<EventListener>,
    cancel: CancelToken,
    scene: Rc<RefCell<SceneState>>,
    audio: Rc<RefCell<AudioEngine>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    painter: &Painter,
    viewport: &Rc<Cell<Viewport>>,
) -> Option<EventListener> {
    let window = web::window()?;
    let canvas = canvas.clone();
    let painter = painter.clone();
    let viewport = viewport.clone();
    Some(EventListener::new(&window, "resize", move |_| {
        let vp = dom::sync_canvas_backing_size(&canvas);
        painter.apply_viewport(&vp);
        viewport.set(vp);
        log::debug!(
            "[resize] {}x{} css @{}x",
            vp.css_width,
            vp.css_height,
            vp.dpr
        );
    }))
}

// The overlay gates the drone behind a user gesture (autoplay policy).
fn wire_overlay_dismiss(
    document: &web::Document,
    audio: &Rc<RefCell<AudioEngine>>,
) -> Option<EventListener> {
    let el = overlay::ensure(document)?;
    overlay::show(document);
    let doc = document.clone();
    let audio = audio.clone();
    Some(EventListener::new(&el, "click", move |ev: web::Event| {
        ev.stop_propagation();
        let mut audio = audio.borrow_mut();
        audio.resume_if_suspended();
        audio.start_drone();
        overlay::hide(&doc);
        log::info!("[overlay] dismissed");
    }))
}

fn build_app() -> anyhow::Result<App> {
    let (_window, document) = dom::window_document()?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let painter = Painter::new(dom::context_2d(&canvas)?);

    let vp = dom::sync_canvas_backing_size(&canvas);
    painter.apply_viewport(&vp);
    let viewport = Rc::new(Cell::new(vp));

    let scene = Rc::new(RefCell::new(SceneState::new()));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let audio = Rc::new(RefCell::new(AudioEngine::new()));
    let clock = SceneClock::start();
    let cancel = CancelToken::new();

    let mut listeners = Vec::new();
    listeners.extend(wire_canvas_resize(&canvas, &painter, &viewport));
    listeners.extend(wire_overlay_dismiss(&document, &audio));
    listeners.push(wire_click(ClickWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        audio: audio.clone(),
        rng: rng.clone(),
        clock,
    }));

    let frame_loop = frame::start_loop(frame::FrameContext {
        scene: scene.clone(),
        viewport,
        rng,
        painter,
        clock,
        cancel: cancel.clone(),
        frames: 0,
    });

    log::info!(
        "[mount] canvas {}x{} css, audio={}",
        vp.css_width,
        vp.css_height,
        audio.borrow().is_available()
    );
    Ok(App {
        _frame_loop: frame_loop,
        _listeners: listeners,
        cancel,
        scene,
        audio,
    })
}

impl App {
    fn teardown(self) {
        self.cancel.cancel();
        self.scene.borrow_mut().clear();
        self.audio.borrow_mut().close();
        // remaining fields drop here: listeners detach, frame loop releases its callback
    }
}

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-chimes starting");
    mount();
    Ok(())
}

/// Mount onto `#app-canvas`. A second call while mounted is ignored.
#[wasm_bindgen]
pub fn mount() {
    APP.with(|slot| {
        if slot.borrow().is_some() {
            log::warn!("[mount] already mounted; ignoring");
            return;
        }
        match build_app() {
            Ok(app) => *slot.borrow_mut() = Some(app),
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
}

/// Detach listeners, stop the frame loop and release audio.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if let Some(app) = app {
        app.teardown();
        log::info!("[mount] torn down");
    }
}
