// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod dom_constants {
    include!("../src/constants.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use dom_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn entrance_steps_finish_within_reasonable_frame_counts() {
    let desktop_frames = (1.0 / DESKTOP_PROGRESS_STEP).ceil() as u32;
    let mobile_frames = (1.0 / MOBILE_PROGRESS_STEP).ceil() as u32;
    assert_eq!(desktop_frames, 24);
    assert_eq!(mobile_frames, 32);
    assert!(FADE_IN_PORTION > 0.0 && FADE_IN_PORTION < 1.0);
}

#[test]
fn frame_interval_matches_target_rate() {
    assert!((FRAME_INTERVAL_MS * TARGET_FPS - 1000.0).abs() < 1e-9);
}

#[test]
fn spin_step_completes_one_turn() {
    let turn = SPIN_STEP_RAD * SPIN_FRAMES_PER_REVOLUTION;
    assert!((turn + std::f32::consts::TAU).abs() < 1e-4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cube_shrinks_during_entrance() {
    assert!(DESKTOP_END_SIZE < DESKTOP_FACE_SIZE);
    assert!(MOBILE_END_SIZE < MOBILE_FACE_SIZE);
    assert!(MOBILE_FACE_SIZE < DESKTOP_FACE_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shader_grading_stays_in_unit_range() {
    for v in [FACE_SATURATION, FACE_CONTRAST, FACE_MAX_OPACITY] {
        assert!(v > 0.0 && v <= 1.0);
    }
    assert!(FACE_BRIGHTNESS.abs() < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn final_reveal_stagger_is_ordered() {
    assert!(BUTTON_DELAY_MS < SCROLL_DELAY_MS);
    assert!(INTRO_TICK_MS > 0.0);
}

#[test]
fn every_face_has_a_distinct_image() {
    let mut urls = FACE_IMAGE_URLS.to_vec();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), FACE_COUNT);
    assert!(FACE_IMAGE_URLS.iter().all(|u| u.ends_with(".png")));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_is_cleared_transparent() {
    assert_eq!(CLEAR_COLOR[3], 0.0);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}
