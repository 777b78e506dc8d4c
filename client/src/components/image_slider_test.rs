use std::sync::{Arc, Mutex};

use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn only_active_slide_gets_active_modifier() {
    assert!(slide_class(true).contains("image-slider__slide--active"));
    assert_eq!(slide_class(false), "image-slider__slide");
}

#[test]
fn only_active_dot_gets_active_modifier() {
    assert!(dot_class(true).ends_with("image-slider__dot--active"));
    assert_eq!(dot_class(false), "image-slider__dot");
}

#[test]
fn interval_millis_passes_small_periods_through() {
    assert_eq!(interval_millis(1_000), 1_000);
    assert_eq!(interval_millis(DEFAULT_INTERVAL_MS), 5_000);
}

#[test]
fn interval_millis_saturates() {
    assert_eq!(interval_millis(u64::MAX), u32::MAX);
}

// =============================================================
// CallbackSink
// =============================================================

type Log = Arc<Mutex<Vec<String>>>;

fn recording_sink(log: &Log) -> CallbackSink {
    let record = |prefix: &'static str| {
        let log = Arc::clone(log);
        move |value: String| {
            if let Ok(mut entries) = log.lock() {
                entries.push(format!("{prefix}:{value}"));
            }
        }
    };
    let index = record("index");
    let previous = record("previous");
    let next = record("next");
    let click = record("click");
    CallbackSink {
        on_index_change: Some(Callback::new(move |i: usize| index(i.to_string()))),
        on_previous: Some(Callback::new(move |()| previous(String::new()))),
        on_next: Some(Callback::new(move |()| next(String::new()))),
        on_image_click: Some(Callback::new(move |i: usize| click(i.to_string()))),
    }
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().map(|mut e| std::mem::take(&mut *e)).unwrap_or_default()
}

#[test]
fn sink_forwards_each_hook_to_its_callback() {
    Owner::new().with(|| {
        let log = Log::default();
        let mut sink = recording_sink(&log);
        sink.index_changed(3);
        sink.previous_requested();
        sink.next_requested();
        sink.image_clicked(1);
        assert_eq!(entries(&log), vec!["index:3", "previous:", "next:", "click:1"]);
    });
}

#[test]
fn sink_without_callbacks_drops_notifications() {
    Owner::new().with(|| {
        let log = Log::default();
        let mut sink = CallbackSink { on_next: recording_sink(&log).on_next, ..CallbackSink::default() };
        sink.index_changed(3);
        sink.previous_requested();
        sink.image_clicked(1);
        assert!(entries(&log).is_empty());
        sink.next_requested();
        assert_eq!(entries(&log), vec!["next:"]);
    });
}

#[test]
fn controlled_engine_reaches_owner_through_sink() {
    Owner::new().with(|| {
        let log = Log::default();
        let sink = recording_sink(&log);
        let mut engine = SliderEngine::new(
            ImageSequence::new(["/a.jpg", "/b.jpg", "/c.jpg"]),
            SliderConfig::default().with_viewport(ViewportClass::Desktop),
        )
        .with_navigation_sink(sink)
        .with_selection_sink(sink)
        .controlled(0);

        engine.click(250.0, 300.0);
        engine.click(10.0, 300.0);
        engine.jump_to(2);
        engine.click(150.0, 300.0);

        assert_eq!(entries(&log), vec!["next:", "previous:", "index:2", "click:0"]);
        assert_eq!(engine.current_index(), 0);
    });
}
