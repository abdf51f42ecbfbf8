// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn probabilities_are_valid() {
    assert!(PARTICLE_SPAWN_PROBABILITY > 0.0 && PARTICLE_SPAWN_PROBABILITY <= 1.0);
    assert!(HARMONIC_PROBABILITY >= 0.0 && HARMONIC_PROBABILITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chime_outlives_its_attack_and_matches_ripple_lifetime() {
    assert!(CHIME_ATTACK_SEC > 0.0 && CHIME_ATTACK_SEC < CHIME_DURATION_SEC);
    assert!(CHIME_FLOOR_GAIN > 0.0 && CHIME_FLOOR_GAIN < CHIME_PEAK_GAIN);
    assert!((CHIME_DURATION_SEC * 1000.0 - RIPPLE_LIFETIME_MS).abs() < 1e-9);
    assert!(ECHO_DELAY_SEC < CHIME_DURATION_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drone_stays_quiet_under_chimes() {
    assert!(DRONE_GAIN < CHIME_PEAK_GAIN);
    assert!(DRONE_FREQUENCY_HZ < CHIME_FREQUENCIES_HZ[0]);
}

#[test]
fn frequency_tables_are_sane() {
    for pair in CHIME_FREQUENCIES_HZ.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!(HARMONIC_MULTIPLIERS.iter().all(|m| *m > 0.0));
    assert!(HARMONIC_MULTIPLIERS.contains(&1.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_ranges_are_positive() {
    assert!(RIPPLES_PER_CLICK == 3);
    assert!(RIPPLE_BASE_RADIUS_MIN > 0.0 && RIPPLE_BASE_RADIUS_SPAN > 0.0);
    assert!(RIPPLE_RADIUS_STEP > 0.0);
    assert!(PARTICLE_LIFETIME_MS > RIPPLE_LIFETIME_MS);
    assert!(PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_PEAK_ALPHA > 0.0 && RIPPLE_PEAK_ALPHA > 0.0);
}
