use instant::Instant;

/// Monotonic millisecond clock anchored at mount time. Ripple and particle
/// timestamps are all taken from one shared clock.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    epoch: Instant,
}

impl SceneClock {
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}
