// Host-side tests for tuning constants and their relationships.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn zoom_ceilings_are_fractions_and_positive_caps() {
    assert!(ZOOM_VIEWPORT_WIDTH_FRACTION > 0.0 && ZOOM_VIEWPORT_WIDTH_FRACTION <= 1.0);
    assert!(ZOOM_VIEWPORT_HEIGHT_FRACTION > 0.0 && ZOOM_VIEWPORT_HEIGHT_FRACTION <= 1.0);
    assert!(ZOOM_MAX_WIDTH_PX > 0.0);
    assert!(ZOOM_MAX_HEIGHT_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_control_points_are_valid_css() {
    // cubic-bezier x coordinates must lie in [0, 1]
    let [x1, _, x2, _] = ZOOM_EASING;
    assert!((0.0..=1.0).contains(&x1));
    assert!((0.0..=1.0).contains(&x2));
    assert!(ZOOM_TRANSITION_MS > ZOOM_BACKDROP_FADE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_and_levels_are_sane() {
    assert!(ACTIVE_CLEAR_MS > ZOOM_TRANSITION_MS as i32);
    assert!(ENVELOPE_FLOOR > 0.0 && ENVELOPE_FLOOR < 0.01);
    assert!(ASPECT_TOLERANCE > 0.0 && ASPECT_TOLERANCE < 0.1);
    assert_eq!(DEFAULT_ASPECT, 1.0);
    assert_eq!(SPEECH_LOCALE, "ml-IN");
    assert_eq!(FLOATY_EMOJIS.len(), 5);
}

#[test]
fn dom_ids_are_distinct() {
    let mut ids = vec![
        APP_ROOT_ID,
        GRID_ID,
        RANDOM_BUTTON_ID,
        LIVE_REGION_ID,
        ZOOM_ROOT_ID,
        ZOOM_BACKDROP_ID,
        ZOOM_CLOSE_ID,
        ZOOM_BOX_ID,
        BACKGROUND_ID,
    ];
    let n = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n);
}
