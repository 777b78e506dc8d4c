#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = SliderConfig::default();
    assert_eq!(cfg.interval_ms, 5000);
    assert_eq!(cfg.swipe_threshold_px, 50.0);
    assert_eq!(cfg.viewport, ViewportClass::Desktop);
}

#[test]
fn builders_override_fields() {
    let cfg = SliderConfig::default()
        .with_interval(1000)
        .with_swipe_threshold(30.0)
        .with_viewport(ViewportClass::Mobile);
    assert_eq!(cfg.interval_ms, 1000);
    assert_eq!(cfg.swipe_threshold_px, 30.0);
    assert_eq!(cfg.viewport, ViewportClass::Mobile);
}

#[test]
fn deserialize_fills_missing_fields_with_defaults() {
    let cfg: SliderConfig = serde_json::from_str(r#"{"interval_ms": 3000}"#).unwrap();
    assert_eq!(cfg.interval_ms, 3000);
    assert_eq!(cfg.swipe_threshold_px, 50.0);
    assert_eq!(cfg.viewport, ViewportClass::Desktop);
}

#[test]
fn deserialize_viewport() {
    let cfg: SliderConfig = serde_json::from_str(r#"{"viewport": "mobile"}"#).unwrap();
    assert_eq!(cfg.viewport, ViewportClass::Mobile);
}

#[test]
fn validate_accepts_defaults() {
    assert_eq!(SliderConfig::default().validate(), Ok(SliderConfig::default()));
}

#[test]
fn validate_rejects_zero_interval() {
    assert_eq!(
        SliderConfig::default().with_interval(0).validate(),
        Err(CarouselError::InvalidInterval(0))
    );
}

#[test]
fn validate_rejects_bad_threshold() {
    assert!(matches!(
        SliderConfig::default().with_swipe_threshold(0.0).validate(),
        Err(CarouselError::InvalidThreshold(_))
    ));
    assert!(matches!(
        SliderConfig::default().with_swipe_threshold(f64::NAN).validate(),
        Err(CarouselError::InvalidThreshold(_))
    ));
}
