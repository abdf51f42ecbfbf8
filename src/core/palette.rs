use crate::constants::*;

/// Hue in degrees for the background's first gradient stop.
#[inline]
pub fn background_hue(now_ms: f64) -> f64 {
    (now_ms / HUE_MS_PER_DEGREE).rem_euclid(360.0)
}

/// CSS colours for the two background gradient stops at `now_ms`.
pub fn background_stops(now_ms: f64) -> (String, String) {
    let hue = background_hue(now_ms);
    let hue2 = (hue + HUE_SECOND_STOP_OFFSET).rem_euclid(360.0);
    (
        hsl(hue, BG_SATURATION_PCT, BG_LIGHTNESS_START_PCT),
        hsl(hue2, BG_SATURATION_PCT, BG_LIGHTNESS_END_PCT),
    )
}

#[inline]
pub fn hsl(hue: f64, saturation_pct: f64, lightness_pct: f64) -> String {
    format!("hsl({:.2}, {}%, {}%)", hue, saturation_pct, lightness_pct)
}

#[inline]
pub fn white_alpha(alpha: f64) -> String {
    format!("rgba(255, 255, 255, {:.4})", alpha.clamp(0.0, 1.0))
}
