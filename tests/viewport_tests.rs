// Host-side tests for canvas sizing and pointer conversion.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;
use viewport::*;

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(vp.backing_size(), (1600, 1200));
    assert_eq!(vp.bounds(), Vec2::new(800.0, 600.0));
}

#[test]
fn backing_size_is_never_zero() {
    assert_eq!(Viewport::new(0.0, 0.0, 1.0).backing_size(), (1, 1));
    assert_eq!(Viewport::new(-5.0, 10.0, 1.0).backing_size(), (1, 10));
}

#[test]
fn invalid_dpr_falls_back_to_one() {
    assert_eq!(Viewport::new(100.0, 50.0, 0.0).dpr, 1.0);
    assert_eq!(Viewport::new(100.0, 50.0, f64::NAN).dpr, 1.0);
    assert_eq!(Viewport::new(100.0, 50.0, 1.5).backing_size(), (150, 75));
}

#[test]
fn client_coordinates_become_canvas_local() {
    let p = client_to_canvas(130.0, 95.5, 30.0, 20.0);
    assert_eq!(p, Vec2::new(100.0, 75.5));
    assert_eq!(client_to_canvas(5.0, 5.0, 0.0, 0.0), Vec2::new(5.0, 5.0));
}

#[test]
fn resize_keeps_logical_scene_coordinates() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut scene = SceneState::new();
    let before_vp = Viewport::new(1024.0, 768.0, 1.0);
    scene.spawn_burst(Vec2::new(512.0, 384.0), 0.0, &mut rng);
    for frame in 0..500 {
        scene.maybe_spawn_particle(frame as f64, before_vp.bounds(), &mut rng);
    }
    let snapshot = scene.clone();

    let after_vp = Viewport::new(640.0, 480.0, 2.0);
    assert_eq!(after_vp.backing_size(), (1280, 960));
    assert_ne!(after_vp.backing_size(), before_vp.backing_size());

    assert_eq!(scene.ripples, snapshot.ripples);
    assert_eq!(scene.particles, snapshot.particles);
    // records outside the smaller viewport survive until their lifetime ends
    let stats = scene.prune(1.0);
    assert_eq!(stats.retired, 0);
}
