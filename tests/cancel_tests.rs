// Host-side tests for the frame-loop cancellation token.

#![allow(dead_code)]
mod cancel {
    include!("../src/core/cancel.rs");
}

use cancel::CancelToken;

#[test]
fn token_starts_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn clones_share_cancellation() {
    let token = CancelToken::new();
    let loop_side = token.clone();
    token.cancel();
    assert!(loop_side.is_cancelled());
    assert!(token.is_cancelled());
}

#[test]
fn cancellation_is_sticky() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.clone().is_cancelled());
}
