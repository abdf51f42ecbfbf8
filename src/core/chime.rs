use crate::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Chooses chime pitches, leaning on the previous chime half of the time so
/// consecutive clicks tend to sound related.
#[derive(Clone, Debug, Default)]
pub struct ChimePicker {
    last_hz: Option<f32>,
}

impl ChimePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hz(&self) -> Option<f32> {
        self.last_hz
    }

    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        let hz = match self.last_hz {
            Some(prev) if rng.gen_bool(HARMONIC_PROBABILITY) => {
                prev * *HARMONIC_MULTIPLIERS.choose(rng).unwrap_or(&1.0)
            }
            _ => *CHIME_FREQUENCIES_HZ
                .choose(rng)
                .unwrap_or(&CHIME_FREQUENCIES_HZ[0]),
        };
        self.last_hz = Some(hz);
        hz
    }
}

/// Gain envelope of a single chime: linear attack to the peak, then a linear
/// decay to a near-silent floor at the end of the note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChimeEnvelope {
    pub peak: f32,
    pub attack_sec: f64,
    pub duration_sec: f64,
    pub floor: f32,
}

impl Default for ChimeEnvelope {
    fn default() -> Self {
        Self {
            peak: CHIME_PEAK_GAIN,
            attack_sec: CHIME_ATTACK_SEC,
            duration_sec: CHIME_DURATION_SEC,
            floor: CHIME_FLOOR_GAIN,
        }
    }
}

impl ChimeEnvelope {
    /// Gain `t` seconds after note start, matching the automation the audio
    /// graph schedules. Zero once the oscillator has stopped.
    pub fn gain_at(&self, t: f64) -> f32 {
        if t <= 0.0 || t >= self.duration_sec {
            return 0.0;
        }
        if t < self.attack_sec {
            return self.peak * (t / self.attack_sec) as f32;
        }
        let decay = (t - self.attack_sec) / (self.duration_sec - self.attack_sec);
        self.peak + (self.floor - self.peak) * decay as f32
    }
}
