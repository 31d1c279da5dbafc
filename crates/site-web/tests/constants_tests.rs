// Host-side tests for the browser constants.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_limits_are_sane() {
    // Never downsample below CSS resolution, and cap retina backing stores
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(MAX_DEVICE_PIXEL_RATIO <= 3.0);

    // Bloom runs at a reduced resolution
    assert!(HDR_DOWNSCALE >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn background_sits_behind_content() {
    assert!(BACKGROUND_Z_INDEX < 0);
    assert!(!BACKGROUND_ROOT_ID.is_empty());
    assert!(!BACKGROUND_ROOT_ID.contains(' '));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn illustration_ids_are_valid_selectors() {
    // Prefixes end up in `#id` selectors and element ids
    assert!(ILLUSTRATION_ID_PREFIX
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    assert!(ILLUSTRATION_ID_PREFIX
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic()));

    // The reveal waits at least one task so the hidden state paints first
    assert!(ILLUSTRATION_REVEAL_DELAY_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_transitions_fit_the_timeline() {
    // One line's transition fits inside the one-second assembly phase
    assert!(HERO_LINE_TRANSITION_S > 0.0);
    assert!(HERO_LINE_TRANSITION_S < 1.0);
    // The scanner sweep fits in the scanner and assembly phases (2 s)
    assert!(HERO_SCANNER_SWEEP_S > 0.0 && HERO_SCANNER_SWEEP_S <= 2.0);
}
