use glam::Vec2;

/// Logical (CSS px) canvas size plus the device pixel ratio used for the
/// backing store. Scene coordinates are always logical, so a resize only
/// changes the backing size and the context transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(css_width: f64, css_height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            dpr,
        }
    }

    /// Backing-store size in device pixels, never zero.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.dpr) as u32;
        let h = (self.css_height * self.dpr) as u32;
        (w.max(1), h.max(1))
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.css_width as f32, self.css_height as f32)
    }
}

/// Convert client (page) coordinates into canvas-local CSS px given the
/// canvas' bounding-rect origin.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}
