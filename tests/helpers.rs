use marker_dot::{clamp, color_to_hex};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

#[test]
fn color_to_hex_without_alpha_when_opaque() {
    assert_eq!(color_to_hex(255, 0, 128, 1.0), "#FF0080");
}

#[test]
fn color_to_hex_with_alpha_when_translucent() {
    assert_eq!(color_to_hex(255, 128, 0, 0.5), "#FF800080");
}

#[test]
fn color_to_hex_clamps_opacity() {
    assert_eq!(color_to_hex(1, 2, 3, 7.0), "#010203");
    assert_eq!(color_to_hex(1, 2, 3, -1.0), "#01020300");
}
