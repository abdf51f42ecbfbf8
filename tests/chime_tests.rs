// Host-side tests for chime pitch selection and envelope shape.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod chime {
    include!("../src/core/chime.rs");
}

use chime::*;
use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn in_fixed_set(hz: f32) -> bool {
    CHIME_FREQUENCIES_HZ.iter().any(|f| (f - hz).abs() < 1e-3)
}

fn is_harmonic_of(hz: f32, prev: f32) -> bool {
    HARMONIC_MULTIPLIERS
        .iter()
        .any(|m| ((prev * m) - hz).abs() <= 1e-4 * hz.abs().max(1.0))
}

#[test]
fn first_chime_comes_from_fixed_set() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picker = ChimePicker::new();
        assert_eq!(picker.last_hz(), None);
        let hz = picker.next(&mut rng);
        assert!(in_fixed_set(hz), "unexpected first chime {hz}");
        assert_eq!(picker.last_hz(), Some(hz));
    }
}

#[test]
fn every_chime_is_fixed_or_harmonic_of_previous() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut picker = ChimePicker::new();
    let mut prev = picker.next(&mut rng);
    for _ in 0..2000 {
        let hz = picker.next(&mut rng);
        assert!(
            in_fixed_set(hz) || is_harmonic_of(hz, prev),
            "{hz} is neither fixed nor harmonic of {prev}"
        );
        assert!(hz.is_finite() && hz > 0.0);
        prev = hz;
    }
}

#[test]
fn both_pitch_paths_are_taken() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut picker = ChimePicker::new();
    let mut fixed = 0;
    let mut off_set = 0;
    for _ in 0..500 {
        if in_fixed_set(picker.next(&mut rng)) {
            fixed += 1;
        } else {
            off_set += 1;
        }
    }
    assert!(fixed > 0);
    assert!(off_set > 0);
}

#[test]
fn envelope_attacks_then_decays() {
    let env = ChimeEnvelope::default();
    assert_eq!(env.gain_at(0.0), 0.0);
    assert!((env.gain_at(env.attack_sec / 2.0) - env.peak / 2.0).abs() < 1e-5);
    assert!((env.gain_at(env.attack_sec) - env.peak).abs() < 1e-6);

    let mut prev = env.gain_at(env.attack_sec);
    let mut t = env.attack_sec;
    while t + 0.05 < env.duration_sec {
        t += 0.05;
        let g = env.gain_at(t);
        assert!(g < prev, "gain did not decay at t={t}");
        prev = g;
    }
    assert!(prev < env.peak * 0.05);
    assert_eq!(env.gain_at(env.duration_sec), 0.0);
    assert_eq!(env.gain_at(env.duration_sec + 1.0), 0.0);
}

#[test]
fn envelope_defaults_match_constants() {
    let env = ChimeEnvelope::default();
    assert_eq!(env.peak, CHIME_PEAK_GAIN);
    assert_eq!(env.attack_sec, CHIME_ATTACK_SEC);
    assert_eq!(env.duration_sec, CHIME_DURATION_SEC);
    assert_eq!(env.floor, CHIME_FLOOR_GAIN);
}
