use crate::constants::*;
use crate::core::palette::{background_stops, white_alpha};
use crate::core::{SceneState, Viewport};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D painter for the scene. Draws in logical CSS px; the context
/// transform carries the device pixel ratio.
#[derive(Clone)]
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Reapply the logical transform after the backing store changed size and
    /// clear to black.
    pub fn apply_viewport(&self, viewport: &Viewport) {
        let dpr = viewport.dpr;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        _ = self.ctx.set_global_composite_operation("source-over");
        self.ctx.set_fill_style_str("black");
        self.ctx
            .fill_rect(0.0, 0.0, viewport.css_width, viewport.css_height);
    }

    pub fn paint(&self, scene: &SceneState, viewport: &Viewport, now_ms: f64) {
        self.draw_background(viewport, now_ms);
        self.draw_particles(scene, now_ms);
        self.draw_ripples(scene, now_ms);
    }

    fn draw_background(&self, viewport: &Viewport, now_ms: f64) {
        let (w, h) = (viewport.css_width, viewport.css_height);
        let (start, end) = background_stops(now_ms);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        _ = gradient.add_color_stop(0.0, &start);
        _ = gradient.add_color_stop(1.0, &end);
        _ = self.ctx.set_global_composite_operation("source-over");
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        // trails
        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_particles(&self, scene: &SceneState, now_ms: f64) {
        for p in &scene.particles {
            let alpha = p.alpha(now_ms) as f64 * PARTICLE_PEAK_ALPHA;
            self.ctx.begin_path();
            _ = self.ctx.arc(
                p.position.x as f64,
                p.position.y as f64,
                p.size as f64,
                0.0,
                TAU,
            );
            self.ctx.set_fill_style_str(&white_alpha(alpha));
            self.ctx.fill();
        }
    }

    fn draw_ripples(&self, scene: &SceneState, now_ms: f64) {
        _ = self.ctx.set_global_composite_operation("lighter");
        self.ctx.set_line_width(RIPPLE_LINE_WIDTH);
        let half = RIPPLE_LINE_WIDTH / 2.0;
        for r in &scene.ripples {
            let (x, y) = (r.origin.x as f64, r.origin.y as f64);
            let radius = r.radius(now_ms) as f64;
            let opacity = r.opacity(now_ms) as f64;
            let inner = (radius - half).max(0.0);
            let outer = radius + half;
            let Ok(gradient) = self.ctx.create_radial_gradient(x, y, inner, x, y, outer) else {
                continue;
            };
            _ = gradient.add_color_stop(0.0, &white_alpha(opacity * RIPPLE_PEAK_ALPHA));
            _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
            self.ctx.set_stroke_style_canvas_gradient(&gradient);
            self.ctx.begin_path();
            _ = self.ctx.arc(x, y, radius, 0.0, TAU);
            self.ctx.stroke();
        }
    }
}
