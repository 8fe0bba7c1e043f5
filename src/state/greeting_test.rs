use super::*;

use crate::state::chat::Role;
use crate::util::transition::Curve;

fn message(content: &str) -> ChatMessage {
    ChatMessage {
        id: "m1".to_owned(),
        role: Role::Assistant,
        content: content.to_owned(),
        timestamp: 0.0,
    }
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn visible_when_no_messages() {
    assert_eq!(Visibility::for_messages(&[]), Visibility::Visible);
}

#[test]
fn hidden_once_a_message_arrives() {
    let messages = vec![message("hello")];
    assert_eq!(Visibility::for_messages(&messages), Visibility::Hidden);
    assert!(Visibility::for_messages(&messages).is_hidden());
}

#[test]
fn visibility_is_stable_across_re_evaluation() {
    let messages = vec![message("hello")];
    assert_eq!(
        Visibility::for_messages(&messages),
        Visibility::for_messages(&messages)
    );
    assert_eq!(Visibility::for_messages(&[]), Visibility::for_messages(&[]));
}

// =============================================================
// GreetingConfig
// =============================================================

#[test]
fn custom_message_overrides_default() {
    let config = GreetingConfig::from_value(serde_json::json!({ "customMessage": "Welcome!" }));
    assert_eq!(config.message(), "Welcome!");
}

#[test]
fn missing_config_falls_back_to_default() {
    let config = GreetingConfig::default();
    assert_eq!(config.message(), DEFAULT_GREETING);
}

#[test]
fn blank_custom_message_falls_back_to_default() {
    let config = GreetingConfig {
        custom_message: Some("   ".to_owned()),
    };
    assert_eq!(config.message(), DEFAULT_GREETING);
}

#[test]
fn unrecognized_keys_are_ignored() {
    let config = GreetingConfig::from_value(serde_json::json!({
        "customMessage": "Hi",
        "theme": "dark",
        "retries": 3
    }));
    assert_eq!(config.custom_message.as_deref(), Some("Hi"));
}

#[test]
fn malformed_config_degrades_to_default() {
    assert_eq!(
        GreetingConfig::from_value(serde_json::json!(42)),
        GreetingConfig::default()
    );
    assert_eq!(
        GreetingConfig::from_value(serde_json::json!({ "customMessage": 7 })),
        GreetingConfig::default()
    );
}

// =============================================================
// Declared transitions
// =============================================================

#[test]
fn enter_transition_is_a_delayed_linear_fade() {
    assert_eq!(ENTER_TRANSITION.curve, Curve::Linear);
    assert!((ENTER_TRANSITION.duration_secs - 0.5).abs() < f64::EPSILON);
    assert!((ENTER_TRANSITION.delay_secs - 0.8).abs() < f64::EPSILON);
}

#[test]
fn exit_transition_has_no_delay() {
    assert_eq!(EXIT_TRANSITION.curve, Curve::Linear);
    assert!((EXIT_TRANSITION.duration_secs - 0.5).abs() < f64::EPSILON);
    assert!(EXIT_TRANSITION.delay_secs.abs() < f64::EPSILON);
}

#[test]
fn visibility_declares_matching_transition() {
    assert_eq!(Visibility::Visible.transition(), ENTER_TRANSITION);
    assert_eq!(Visibility::Hidden.transition(), EXIT_TRANSITION);
}
