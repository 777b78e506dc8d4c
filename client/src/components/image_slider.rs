//! Crossfading image slider backed by a `SliderEngine`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The engine owns every navigation decision. This component only feeds it
//! DOM input (clicks, hover, touches, timer fires) and mirrors the result into
//! signals the view reads. With an `index` signal the slider is controlled:
//! it proposes moves through its callbacks and shows whatever the owner sets.
//!
//! DESIGN
//! ======
//! The engine and the browser interval live in local `StoredValue`s so event
//! handlers and `on_cleanup` can share them through `Copy` handles. Exactly
//! one `Interval` exists per live `TimerToken`; replacing the slot drops (and
//! so cancels) the previous one, and stale fires are rejected by the engine.

#[cfg(test)]
#[path = "image_slider_test.rs"]
mod image_slider_test;

use carousel::config::SliderConfig;
use carousel::consts::{CROSSFADE_MS, DEFAULT_INTERVAL_MS};
use carousel::gesture::ViewportClass;
use carousel::sequence::ImageSequence;
use carousel::sink::{NavigationSink, SelectionSink};
use carousel::slider::SliderEngine;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use carousel::gesture::Point;
#[cfg(feature = "csr")]
use carousel::timer::TimerToken;
#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;

use crate::util::clock::now_ms;
use crate::util::viewport::viewport_class;

type Engine = StoredValue<SliderEngine, LocalStorage>;

#[cfg(feature = "csr")]
type TimerSlot = StoredValue<Option<(TimerToken, Interval)>, LocalStorage>;

/// Forwards engine notifications to the component's optional callbacks.
#[derive(Clone, Copy, Default)]
struct CallbackSink {
    on_index_change: Option<Callback<usize>>,
    on_previous: Option<Callback<()>>,
    on_next: Option<Callback<()>>,
    on_image_click: Option<Callback<usize>>,
}

impl NavigationSink for CallbackSink {
    fn index_changed(&mut self, index: usize) {
        if let Some(cb) = self.on_index_change {
            cb.run(index);
        }
    }

    fn previous_requested(&mut self) {
        if let Some(cb) = self.on_previous {
            cb.run(());
        }
    }

    fn next_requested(&mut self) {
        if let Some(cb) = self.on_next {
            cb.run(());
        }
    }
}

impl SelectionSink for CallbackSink {
    fn image_clicked(&mut self, index: usize) {
        if let Some(cb) = self.on_image_click {
            cb.run(index);
        }
    }
}

/// Signal mirrors of the engine state the view renders from.
#[derive(Clone, Copy)]
struct SliderView {
    active: RwSignal<usize>,
    arrows: RwSignal<bool>,
    controls: RwSignal<bool>,
}

impl SliderView {
    fn new() -> Self {
        Self { active: RwSignal::new(0), arrows: RwSignal::new(false), controls: RwSignal::new(false) }
    }

    fn sync(self, engine: Engine) {
        let Some((active, arrows, controls)) =
            engine.try_with_value(|e| (e.current_index(), e.arrows_visible(), e.has_controls()))
        else {
            return;
        };
        if self.active.get_untracked() != active {
            self.active.set(active);
        }
        if self.arrows.get_untracked() != arrows {
            self.arrows.set(arrows);
        }
        if self.controls.get_untracked() != controls {
            self.controls.set(controls);
        }
    }

    /// Run `f` against the engine, then refresh the mirrors.
    fn act(self, engine: Engine, f: impl FnOnce(&mut SliderEngine)) {
        if engine.try_update_value(f).is_some() {
            self.sync(engine);
        }
    }
}

fn slide_class(active: bool) -> &'static str {
    if active { "image-slider__slide image-slider__slide--active" } else { "image-slider__slide" }
}

fn dot_class(active: bool) -> &'static str {
    if active { "image-slider__dot image-slider__dot--active" } else { "image-slider__dot" }
}

/// Browser intervals take a `u32` period; longer periods saturate.
fn interval_millis(period_ms: u64) -> u32 {
    u32::try_from(period_ms).unwrap_or(u32::MAX)
}

/// Keep exactly one browser interval for the engine's live timer token.
#[cfg(feature = "csr")]
fn schedule(engine: Engine, slot: TimerSlot, mirror: SliderView) {
    let wanted = engine.try_with_value(|e| e.timer().map(|token| (token, e.interval_ms()))).flatten();
    let running = slot.try_with_value(|s| s.as_ref().map(|(token, _)| *token)).flatten();
    match wanted {
        None => {
            if running.is_some() {
                log::debug!("slider autoplay stopped");
            }
            slot.try_update_value(|s| *s = None);
        }
        Some((token, _)) if running == Some(token) => {}
        Some((token, period_ms)) => {
            let interval = Interval::new(interval_millis(period_ms), move || {
                let fired = engine.try_update_value(|e| e.on_timer(token, now_ms())).unwrap_or(false);
                if fired {
                    mirror.sync(engine);
                }
            });
            slot.try_update_value(|s| *s = Some((token, interval)));
            log::debug!("slider autoplay every {period_ms} ms");
        }
    }
}

#[cfg(feature = "csr")]
fn touch_point(touches: &web_sys::TouchList) -> Option<Point> {
    touches
        .get(0)
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
}

/// Image slider with autoplay, dots, hover arrows, click zones and swipes.
///
/// Without `index` the slider drives itself and reports moves through
/// `on_index_change`. With `index` it is controlled: timer ticks and dot
/// clicks arrive as `on_index_change` proposals, arrows and swipes as
/// `on_previous` / `on_next`, and only the owner's `index` moves it.
#[component]
pub fn ImageSlider(
    #[prop(into)] images: Signal<ImageSequence>,
    #[prop(into, default = Signal::stored(DEFAULT_INTERVAL_MS))] interval_ms: Signal<u64>,
    #[prop(optional, into)] index: Option<Signal<usize>>,
    #[prop(optional)] on_index_change: Option<Callback<usize>>,
    #[prop(optional)] on_previous: Option<Callback<()>>,
    #[prop(optional)] on_next: Option<Callback<()>>,
    #[prop(optional)] on_image_click: Option<Callback<usize>>,
    #[prop(optional)] viewport: Option<ViewportClass>,
) -> impl IntoView {
    let sink = CallbackSink { on_index_change, on_previous, on_next, on_image_click };
    let config = SliderConfig::default()
        .with_interval(interval_ms.get_untracked())
        .with_viewport(viewport.unwrap_or_else(viewport_class));
    let mut initial = SliderEngine::new(images.get_untracked(), config)
        .with_navigation_sink(sink)
        .with_selection_sink(sink);
    if let Some(index) = index {
        initial = initial.controlled(index.get_untracked());
    }
    let engine: Engine = StoredValue::new_local(initial);
    let mirror = SliderView::new();
    mirror.sync(engine);

    #[cfg(feature = "csr")]
    let timer: TimerSlot = StoredValue::new_local(None);

    // Mount, then re-arm whenever the sequence identity or period changes.
    Effect::new(move || {
        let sequence = images.get();
        let period_ms = interval_ms.get();
        let now = now_ms();
        mirror.act(engine, |e| {
            if !e.is_mounted() {
                e.mount(now);
            }
            e.set_sequence(sequence, now);
            e.set_interval(period_ms, now);
        });
        #[cfg(feature = "csr")]
        {
            schedule(engine, timer, mirror);
        }
    });

    if let Some(index) = index {
        Effect::new(move || {
            let wanted = index.get();
            mirror.act(engine, |e| {
                e.reconcile_external_index(wanted);
            });
        });
    }

    on_cleanup(move || {
        #[cfg(feature = "csr")]
        {
            timer.try_update_value(|s| *s = None);
        }
        engine.try_update_value(SliderEngine::unmount);
    });

    let root = NodeRef::<leptos::html::Div>::new();

    let on_click = move |ev: MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = root.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let x = f64::from(ev.client_x()) - rect.left();
            mirror.act(engine, |e| {
                e.click(x, rect.width());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(ev);
        }
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(point) = touch_point(&ev.touches()) {
                mirror.act(engine, |e| e.touch_start(point));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(ev);
        }
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(point) = touch_point(&ev.touches()) {
                mirror.act(engine, |e| e.touch_move(point));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(ev);
        }
    };

    let on_touch_end = move |_| {
        mirror.act(engine, |e| {
            e.touch_end();
        });
    };

    let slides = move || {
        let sequence = images.get();
        let slides = sequence
            .iter()
            .enumerate()
            .map(|(i, src)| {
                let src = src.to_owned();
                let loading = if i == 0 { "eager" } else { "lazy" };
                view! {
                    <img
                        class=move || slide_class(mirror.active.get() == i)
                        style=format!("transition-duration: {CROSSFADE_MS}ms")
                        src=src
                        alt=format!("Zdjęcie {}", i + 1)
                        loading=loading
                        draggable="false"
                    />
                }
            })
            .collect_view();
        slides
    };

    let dots = move || {
        let len = images.with(ImageSequence::len);
        (0..len)
            .map(|i| {
                view! {
                    <button
                        class=move || dot_class(mirror.active.get() == i)
                        aria-label=format!("Przejdź do zdjęcia {}", i + 1)
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            mirror.act(engine, |e| {
                                e.jump_to(i);
                            });
                        }
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="image-slider"
            node_ref=root
            on:click=on_click
            on:mouseenter=move |_| mirror.act(engine, |e| e.set_hovering(true))
            on:mouseleave=move |_| mirror.act(engine, |e| e.set_hovering(false))
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=move |_| mirror.act(engine, SliderEngine::touch_cancel)
        >
            {slides}

            <Show when=move || mirror.arrows.get()>
                <button
                    class="image-slider__arrow image-slider__arrow--prev"
                    aria-label="Poprzednie zdjęcie"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        mirror.act(engine, SliderEngine::previous);
                    }
                >
                    "‹"
                </button>
                <button
                    class="image-slider__arrow image-slider__arrow--next"
                    aria-label="Następne zdjęcie"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        mirror.act(engine, SliderEngine::next);
                    }
                >
                    "›"
                </button>
            </Show>

            <Show when=move || mirror.controls.get()>
                <div class="image-slider__dots">{dots}</div>
            </Show>
        </div>
    }
}
