use super::*;

// =============================================================
// Curve
// =============================================================

#[test]
fn curve_default_is_linear() {
    assert_eq!(Curve::default(), Curve::Linear);
}

#[test]
fn linear_curve_css_name() {
    assert_eq!(Curve::Linear.css(), "linear");
}

// =============================================================
// Transition
// =============================================================

#[test]
fn css_shorthand_includes_duration_curve_and_delay() {
    let transition = Transition::new(0.5, 0.8);
    assert_eq!(transition.css("opacity"), "opacity 0.5s linear 0.8s");
}

#[test]
fn css_shorthand_with_zero_delay() {
    let transition = Transition::new(0.5, 0.0);
    assert_eq!(transition.css("opacity"), "opacity 0.5s linear 0s");
}
