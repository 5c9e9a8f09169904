//! Tests for the model layer (MarkerStyle, geometry).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use marker_dot::model::constants::*;
use marker_dot::model::geometry::centered_origin;
use marker_dot::model::MarkerStyle;
use marker_dot::{ScreenPoint, ScreenSize};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn marker_style_default_radius_is_twenty() {
    let style = MarkerStyle::default();
    assert_eq!(style.radius, 20);
    assert_eq!(style.radius, DEFAULT_RADIUS);
}

#[test]
fn marker_style_default_color_is_orange() {
    let style = MarkerStyle::default();
    assert_eq!(style.color(), (255, 128, 0));
}

#[test]
fn marker_style_default_opacity_is_half() {
    let style = MarkerStyle::default();
    assert!(approx_eq(style.opacity, 0.5));
}

#[test]
fn marker_style_default_diameter() {
    assert_eq!(MarkerStyle::default().diameter(), 2 * DEFAULT_RADIUS);
}

// === Validation Tests ===

#[test]
fn validate_keeps_reference_configuration() {
    let mut style = MarkerStyle::default();
    style.validate();
    assert_eq!(style, MarkerStyle::default());
}

#[test]
fn validate_clamps_radius_below_minimum() {
    let mut style = MarkerStyle::default();
    style.radius = 0;
    style.validate();
    assert_eq!(style.radius, MIN_RADIUS);
}

#[test]
fn validate_clamps_radius_above_maximum() {
    let mut style = MarkerStyle::default();
    style.radius = 10_000;
    style.validate();
    assert_eq!(style.radius, MAX_RADIUS);
}

#[test]
fn validate_clamps_opacity_below_minimum() {
    let mut style = MarkerStyle::default();
    style.opacity = -0.25;
    style.validate();
    assert!(approx_eq(style.opacity, MIN_OPACITY));
}

#[test]
fn validate_clamps_opacity_above_maximum() {
    let mut style = MarkerStyle::default();
    style.opacity = 1.75;
    style.validate();
    assert!(approx_eq(style.opacity, MAX_OPACITY));
}

// === Geometry Tests ===

#[test]
fn centered_origin_puts_window_in_the_middle() {
    let screen = ScreenSize::new(2560, 1440);
    let window = ScreenSize::square(40);
    let origin = centered_origin(screen, window);
    assert_eq!(origin, ScreenPoint::new(1260, 700));
    assert_eq!(origin.x * 2 + window.width, screen.width);
    assert_eq!(origin.y * 2 + window.height, screen.height);
}

#[test]
fn centered_origin_negative_when_window_is_larger() {
    let origin = centered_origin(ScreenSize::new(20, 20), ScreenSize::square(40));
    assert_eq!(origin, ScreenPoint::new(-10, -10));
}

#[test]
fn offset_round_trips_through_points() {
    let pointer = ScreenPoint::new(955, 532);
    let top_left = ScreenPoint::new(940, 520);
    let offset = pointer - top_left;
    assert_eq!(top_left + offset, pointer);
}

// === Clone and PartialEq Tests ===

#[test]
fn marker_style_equality() {
    let style1 = MarkerStyle::default();
    let mut style2 = style1.clone();
    assert_eq!(style1, style2);

    style2.radius = 30;
    assert_ne!(style1, style2);
}
