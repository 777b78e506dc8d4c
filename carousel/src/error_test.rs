use super::*;

#[test]
fn out_of_range_message_names_index_and_length() {
    let err = CarouselError::IndexOutOfRange { index: 7, len: 4 };
    assert_eq!(err.to_string(), "index 7 out of range for a sequence of 4 images");
}

#[test]
fn not_an_index_message_includes_value() {
    assert_eq!(CarouselError::NotAnIndex(1.5).to_string(), "1.5 is not a valid image index");
}

#[test]
fn interval_and_threshold_messages() {
    assert_eq!(
        CarouselError::InvalidInterval(0).to_string(),
        "autoplay interval must be at least 1 ms, got 0"
    );
    assert!(CarouselError::InvalidThreshold(-3.0).to_string().contains("-3"));
}
