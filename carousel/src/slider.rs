//! Slider engine: owns the active index, autoplays, and turns gestures into navigation.
//!
//! The engine has no notion of wall-clock time. The host passes `now_ms` into
//! the calls that arm timers and reports timer fires back with
//! [`SliderEngine::on_timer`], or drives simulated time with
//! [`SliderEngine::elapse_to`]. Ticks always read the index at fire time, so
//! a user command issued between ticks is what the next tick advances from.
//!
//! Exactly one party owns the index at a time. A self-driven slider commits
//! its own moves; a controlled slider forwards every move to its
//! [`NavigationSink`] and only changes when the owner reconciles.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use std::fmt;

use crate::config::SliderConfig;
use crate::error::CarouselError;
use crate::gesture::{ClickZone, NavCommand, Point, Swipe, SwipeDetector, ViewportClass, click_zone};
use crate::sequence::ImageSequence;
use crate::sink::{NavigationSink, SelectionSink};
use crate::timer::{Autoplay, TimerToken};

/// Observable slider state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    pub current_index: usize,
    /// Pointer is over the slider. Gates arrow visibility only.
    pub is_hovering: bool,
}

/// Who owns the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    /// The engine advances and commits its own index.
    #[default]
    SelfDriven,
    /// An external owner dictates the index via reconciliation.
    Controlled,
}

pub struct SliderEngine {
    sequence: ImageSequence,
    state: SliderState,
    mode: ControlMode,
    autoplay: Autoplay,
    swipe: SwipeDetector,
    viewport: ViewportClass,
    navigation: Box<dyn NavigationSink>,
    selection: Box<dyn SelectionSink>,
    mounted: bool,
}

impl fmt::Debug for SliderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderEngine")
            .field("sequence", &self.sequence)
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("autoplay", &self.autoplay)
            .field("viewport", &self.viewport)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl SliderEngine {
    /// A self-driven, unmounted slider positioned on the first image.
    ///
    /// A config that fails [`SliderConfig::validate`] is replaced by the
    /// default timing and threshold; the viewport class is kept.
    #[must_use]
    pub fn new(sequence: ImageSequence, config: SliderConfig) -> Self {
        let config = config.validate().unwrap_or_else(|err| {
            log::debug!("slider config rejected, using defaults: {err}");
            SliderConfig::default().with_viewport(config.viewport)
        });
        Self::build(sequence, config)
    }

    /// Like [`SliderEngine::new`], but refuses an invalid config.
    ///
    /// # Errors
    ///
    /// Whatever [`SliderConfig::validate`] rejects.
    pub fn try_new(sequence: ImageSequence, config: SliderConfig) -> Result<Self, CarouselError> {
        Ok(Self::build(sequence, config.validate()?))
    }

    fn build(sequence: ImageSequence, config: SliderConfig) -> Self {
        Self {
            sequence,
            state: SliderState::default(),
            mode: ControlMode::SelfDriven,
            autoplay: Autoplay::new(config.interval_ms),
            swipe: SwipeDetector::new(config.swipe_threshold_px),
            viewport: config.viewport,
            navigation: Box::new(()),
            selection: Box::new(()),
            mounted: false,
        }
    }

    #[must_use]
    pub fn with_navigation_sink(mut self, sink: impl NavigationSink + 'static) -> Self {
        self.navigation = Box::new(sink);
        self
    }

    #[must_use]
    pub fn with_selection_sink(mut self, sink: impl SelectionSink + 'static) -> Self {
        self.selection = Box::new(sink);
        self
    }

    /// Hand index ownership to an external controller, seeded with `initial_index`.
    ///
    /// An invalid seed leaves the slider on its current image.
    #[must_use]
    pub fn controlled(mut self, initial_index: usize) -> Self {
        self.mode = ControlMode::Controlled;
        self.reconcile_external_index(initial_index);
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    #[must_use]
    pub fn state(&self) -> SliderState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.sequence.get(self.state.current_index)
    }

    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.autoplay.period_ms()
    }

    /// Token of the live autoplay timer. The host keeps exactly one real timer per token.
    #[must_use]
    pub fn timer(&self) -> Option<TimerToken> {
        self.autoplay.token()
    }

    /// Whether dots, arrows and click zones should be offered at all.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.sequence.is_navigable()
    }

    #[must_use]
    pub fn arrows_visible(&self) -> bool {
        self.state.is_hovering && self.has_controls() && self.viewport.uses_click_zones()
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index < self.sequence.len() && index == self.state.current_index
    }

    /// Target opacity of the slide at `index`: fully visible only when active.
    #[must_use]
    pub fn opacity(&self, index: usize) -> f64 {
        if self.is_active(index) { 1.0 } else { 0.0 }
    }

    // --- Lifecycle ---

    /// Start autoplay. Returns the token of the armed timer, if the sequence can advance.
    pub fn mount(&mut self, now_ms: u64) -> Option<TimerToken> {
        self.mounted = true;
        self.rearm(now_ms)
    }

    /// Stop autoplay and drop any in-flight gesture. Later ticks are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.autoplay.disarm();
        self.swipe.cancel();
        self.state.is_hovering = false;
    }

    /// Change the autoplay period. Restarts a running timer under a new token.
    ///
    /// Returns `false` when nothing changed (same period, or zero).
    pub fn set_interval(&mut self, interval_ms: u64, now_ms: u64) -> bool {
        if interval_ms == 0 {
            log::debug!("ignoring zero autoplay interval");
            return false;
        }
        self.autoplay.set_period(interval_ms, now_ms)
    }

    /// Replace the image sequence. A sequence with the same identity is a no-op.
    ///
    /// The index is kept when still valid, otherwise reset to the first image.
    /// A controlled slider reports that reset through `index_changed(0)`.
    /// Autoplay restarts, or stops if the new sequence cannot advance.
    pub fn set_sequence(&mut self, sequence: ImageSequence, now_ms: u64) -> bool {
        if sequence == self.sequence {
            return false;
        }
        self.sequence = sequence;
        if self.state.current_index >= self.sequence.len() {
            self.state.current_index = 0;
            // The owner still holds the stale index and must reconcile.
            if self.mode == ControlMode::Controlled && !self.sequence.is_empty() {
                self.navigation.index_changed(0);
            }
        }
        self.swipe.cancel();
        self.rearm(now_ms);
        true
    }

    fn rearm(&mut self, now_ms: u64) -> Option<TimerToken> {
        if self.mounted && self.sequence.is_navigable() {
            Some(self.autoplay.arm(now_ms))
        } else {
            self.autoplay.disarm();
            None
        }
    }

    // --- Timer ---

    /// A real timer fired. Stale tokens (from a replaced or cancelled timer) are ignored.
    pub fn on_timer(&mut self, token: TimerToken, now_ms: u64) -> bool {
        if !self.autoplay.fire(token, now_ms) {
            return false;
        }
        self.advance_automatically();
        true
    }

    /// Advance simulated time to `now_ms`, applying every tick that came due.
    pub fn elapse_to(&mut self, now_ms: u64) -> u64 {
        let ticks = self.autoplay.due(now_ms);
        for _ in 0..ticks {
            self.advance_automatically();
        }
        ticks
    }

    /// One autoplay step from the current index.
    pub fn advance_automatically(&mut self) {
        if !self.sequence.is_navigable() {
            return;
        }
        let next = self.sequence.next_index(self.state.current_index);
        match self.mode {
            ControlMode::SelfDriven => self.commit(next),
            ControlMode::Controlled => self.navigation.index_changed(next),
        }
    }

    // --- Navigation ---

    pub fn next(&mut self) {
        self.navigate(NavCommand::Next);
    }

    pub fn previous(&mut self) {
        self.navigate(NavCommand::Previous);
    }

    /// Apply a navigation command. A no-op for sequences of fewer than two images.
    pub fn navigate(&mut self, command: NavCommand) {
        if !self.sequence.is_navigable() {
            return;
        }
        let current = self.state.current_index;
        match (self.mode, command) {
            (ControlMode::SelfDriven, NavCommand::Next) => self.commit(self.sequence.next_index(current)),
            (ControlMode::SelfDriven, NavCommand::Previous) => self.commit(self.sequence.previous_index(current)),
            (ControlMode::Controlled, NavCommand::Next) => self.navigation.next_requested(),
            (ControlMode::Controlled, NavCommand::Previous) => self.navigation.previous_requested(),
        }
    }

    /// Jump to `index` (pagination dots). Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        match self.try_jump_to(index) {
            Ok(_) => true,
            Err(err) => {
                log::debug!("ignoring slider jump: {err}");
                false
            }
        }
    }

    /// Validating form of [`Self::jump_to`].
    ///
    /// # Errors
    ///
    /// Returns the sequence's validation error for an index it does not contain.
    pub fn try_jump_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        let index = self.sequence.validate_index(index)?;
        match self.mode {
            ControlMode::SelfDriven => self.commit(index),
            ControlMode::Controlled => self.navigation.index_changed(index),
        }
        Ok(index)
    }

    /// Adopt the owner's index in controlled mode.
    ///
    /// Ignored in self-driven mode and for indices outside the sequence; the
    /// last valid index is kept.
    pub fn reconcile_external_index(&mut self, index: usize) -> bool {
        let parsed = self.sequence.validate_index(index);
        self.apply_external(parsed)
    }

    /// Like [`Self::reconcile_external_index`] for loosely typed controllers.
    /// NaN, infinities, negatives and fractions are ignored.
    pub fn reconcile_external_value(&mut self, raw: f64) -> bool {
        let parsed = self.sequence.parse_index(raw);
        self.apply_external(parsed)
    }

    fn apply_external(&mut self, parsed: Result<usize, CarouselError>) -> bool {
        if self.mode != ControlMode::Controlled {
            log::debug!("ignoring external index on a self-driven slider");
            return false;
        }
        match parsed {
            Ok(index) => {
                self.state.current_index = index;
                true
            }
            Err(err) => {
                log::debug!("ignoring external slider index: {err}");
                false
            }
        }
    }

    fn commit(&mut self, index: usize) {
        if index == self.state.current_index {
            return;
        }
        self.state.current_index = index;
        self.navigation.index_changed(index);
    }

    // --- Pointer and touch ---

    pub fn set_hovering(&mut self, hovering: bool) {
        self.state.is_hovering = hovering;
    }

    /// A click (or tap) at `x` within a slider `width_px` wide.
    ///
    /// Desktop sliders with more than one image resolve the click through
    /// [`ClickZone`]s; everything else opens the current image. Returns the
    /// zone acted on, or `None` when there is nothing to show.
    pub fn click(&mut self, x: f64, width_px: f64) -> Option<ClickZone> {
        if self.sequence.is_empty() {
            return None;
        }
        let zone = if self.viewport.uses_click_zones() && self.has_controls() {
            click_zone(x, width_px).unwrap_or(ClickZone::Open)
        } else {
            ClickZone::Open
        };
        match zone {
            ClickZone::Previous => self.previous(),
            ClickZone::Next => self.next(),
            ClickZone::Open => self.selection.image_clicked(self.state.current_index),
        }
        Some(zone)
    }

    pub fn touch_start(&mut self, point: Point) {
        self.swipe.begin(point);
    }

    pub fn touch_move(&mut self, point: Point) {
        self.swipe.track(point);
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Resolve the touch and navigate if it was a swipe.
    pub fn touch_end(&mut self) -> Swipe {
        let swipe = self.swipe.finish();
        if let Some(command) = swipe.command() {
            self.navigate(command);
        }
        swipe
    }
}
