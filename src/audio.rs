use crate::constants::*;
use crate::core::{ChimeEnvelope, ChimePicker};
use rand::Rng;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Long-lived drone nodes; held so they stay reachable for the session.
struct Drone {
    _osc: web::OscillatorNode,
    _gain: web::GainNode,
}

/// Owns the audio context and the pitch memory for chimes. When the browser
/// refuses to create a context every method is a silent no-op.
pub struct AudioEngine {
    ctx: Option<web::AudioContext>,
    picker: ChimePicker,
    envelope: ChimeEnvelope,
    drone: Option<Drone>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_sine(
    audio_ctx: &web::AudioContext,
    hz: f32,
    label: &str,
) -> Result<web::OscillatorNode, ()> {
    let osc = web::OscillatorNode::new(audio_ctx).map_err(|e| {
        log::error!("{} OscillatorNode error: {:?}", label, e);
    })?;
    osc.set_type(web::OscillatorType::Sine);
    _ = osc
        .frequency()
        .set_value_at_time(hz, audio_ctx.current_time());
    Ok(osc)
}

// Log once the browser settles a context state change.
fn log_settled(label: &'static str, promise: js_sys::Promise) {
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[audio] context {}", label),
            Err(e) => log::warn!("[audio] context {} rejected: {:?}", label, e),
        }
    });
}

impl AudioEngine {
    pub fn new() -> Self {
        let ctx = match web::AudioContext::new() {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("[audio] AudioContext unavailable, running silent: {:?}", e);
                None
            }
        };
        Self {
            ctx,
            picker: ChimePicker::new(),
            envelope: ChimeEnvelope::default(),
            drone: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.ctx.is_some()
    }

    /// Resume playback if the autoplay policy left the context suspended.
    pub fn resume_if_suspended(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if ctx.state() != web::AudioContextState::Suspended {
            return;
        }
        if let Ok(promise) = ctx.resume() {
            log_settled("resumed", promise);
        }
    }

    /// Start the ambient drone once; later calls do nothing.
    pub fn start_drone(&mut self) -> bool {
        if self.drone.is_some() {
            return false;
        }
        let Some(ctx) = &self.ctx else {
            return false;
        };
        let Ok(osc) = create_sine(ctx, DRONE_FREQUENCY_HZ, "Drone") else {
            return false;
        };
        let Ok(gain) = create_gain(ctx, 0.0, "Drone") else {
            return false;
        };
        _ = gain
            .gain()
            .set_value_at_time(DRONE_GAIN, ctx.current_time());
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        _ = osc.start();
        self.drone = Some(Drone {
            _osc: osc,
            _gain: gain,
        });
        log::info!("[audio] drone started at {} Hz", DRONE_FREQUENCY_HZ);
        true
    }

    /// Pick the next pitch and fire one self-terminating chime with a single
    /// echo tap. Returns the frequency played.
    pub fn play_chime<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<f32> {
        let ctx = self.ctx.as_ref()?;
        let hz = self.picker.next(rng);
        self.fire_chime(ctx, hz).ok()?;
        Some(hz)
    }

    fn fire_chime(&self, ctx: &web::AudioContext, hz: f32) -> Result<(), ()> {
        let env = self.envelope;
        let now = ctx.current_time();
        let osc = create_sine(ctx, hz, "Chime")?;
        let gain = create_gain(ctx, 0.0, "Chime")?;
        let g = gain.gain();
        _ = g.set_value_at_time(0.0, now);
        _ = g.linear_ramp_to_value_at_time(env.peak, now + env.attack_sec);
        _ = g.linear_ramp_to_value_at_time(env.floor, now + env.duration_sec);

        let delay = ctx.create_delay().map_err(|e| {
            log::error!("Echo DelayNode error: {:?}", e);
        })?;
        delay.delay_time().set_value(ECHO_DELAY_SEC as f32);
        let echo = create_gain(ctx, ECHO_GAIN, "Echo")?;

        let dst = ctx.destination();
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&dst);
        _ = gain.connect_with_audio_node(&delay);
        _ = delay.connect_with_audio_node(&echo);
        _ = echo.connect_with_audio_node(&dst);
        _ = osc.start();
        _ = osc.stop_with_when(now + env.duration_sec);
        Ok(())
    }

    /// Release the audio device. In-flight nodes are left to finish on their own.
    pub fn close(&mut self) {
        self.drone = None;
        if let Some(ctx) = self.ctx.take() {
            if let Ok(promise) = ctx.close() {
                log_settled("closed", promise);
            }
        }
    }
}
