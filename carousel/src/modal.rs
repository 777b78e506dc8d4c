//! Modal viewer: a two-state machine over an image sequence.
//!
//! ```text
//! Closed --open(i)--> Open(i) --next/previous--> Open(j) --close/Escape/backdrop--> Closed
//! ```
//!
//! The viewer also tracks whether its keyboard binding is attached. The
//! flag goes on exactly at the Closed→Open transition and comes off exactly
//! at Open→Closed. Hosts observe [`ModalViewer::keyboard_bound`] and keep one
//! key listener attached while it is set. Keys that arrive while unbound are
//! ignored, so a listener the host failed to remove still cannot navigate.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::error::CarouselError;
use crate::sequence::ImageSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl ModalState {
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open { index } => Some(index),
        }
    }
}

/// Keys the open viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl ModalKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" | "Esc" => Some(Self::Escape),
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The dedicated close control.
    CloseButton,
    /// The image or its frame. Never closes the viewer.
    Content,
}

/// Result of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not bound, not a viewer key, or nothing to move to.
    Ignored,
    Moved(usize),
    Closed,
}

/// A user intent forwarded by a rendering host to whoever owns the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Click(ModalTarget),
    Key(ModalKey),
    Next,
    Previous,
}

#[derive(Debug, Clone, Default)]
pub struct ModalViewer {
    sequence: ImageSequence,
    state: ModalState,
    keyboard_bound: bool,
}

impl ModalViewer {
    #[must_use]
    pub fn new(sequence: ImageSequence) -> Self {
        Self { sequence, state: ModalState::Closed, keyboard_bound: false }
    }

    #[must_use]
    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.state.index().and_then(|i| self.sequence.get(i))
    }

    #[must_use]
    pub fn keyboard_bound(&self) -> bool {
        self.keyboard_bound
    }

    /// Chevron controls are offered only when there is somewhere to go.
    #[must_use]
    pub fn shows_chevrons(&self) -> bool {
        self.sequence.is_navigable()
    }

    /// Open at `index`, or move there if already open. Invalid indices are ignored.
    ///
    /// Returns `true` only on the Closed→Open transition.
    pub fn open(&mut self, index: usize) -> bool {
        match self.try_open(index) {
            Ok(opened) => opened,
            Err(err) => {
                log::debug!("ignoring modal open: {err}");
                false
            }
        }
    }

    /// Validating form of [`Self::open`].
    ///
    /// # Errors
    ///
    /// Returns the sequence's validation error for an index it does not contain.
    pub fn try_open(&mut self, index: usize) -> Result<bool, CarouselError> {
        let index = self.sequence.validate_index(index)?;
        let was_open = self.is_open();
        self.state = ModalState::Open { index };
        self.keyboard_bound = true;
        Ok(!was_open)
    }

    /// Close the viewer. Returns `true` only on an actual transition.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = ModalState::Closed;
        self.keyboard_bound = false;
        true
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step(ImageSequence::next_index)
    }

    pub fn previous(&mut self) -> Option<usize> {
        self.step(ImageSequence::previous_index)
    }

    fn step(&mut self, advance: fn(&ImageSequence, usize) -> usize) -> Option<usize> {
        let ModalState::Open { index } = self.state else {
            return None;
        };
        if !self.sequence.is_navigable() {
            return None;
        }
        let index = advance(&self.sequence, index);
        self.state = ModalState::Open { index };
        Some(index)
    }

    /// Route a click inside the overlay. Returns whether the viewer closed.
    pub fn click(&mut self, target: ModalTarget) -> bool {
        match target {
            ModalTarget::Backdrop | ModalTarget::CloseButton => self.close(),
            ModalTarget::Content => false,
        }
    }

    /// Route a key press. Only acts while the keyboard binding is attached.
    pub fn handle_key(&mut self, key: ModalKey) -> KeyOutcome {
        if !self.keyboard_bound {
            return KeyOutcome::Ignored;
        }
        let moved = match key {
            ModalKey::Escape => {
                self.close();
                return KeyOutcome::Closed;
            }
            ModalKey::ArrowRight => self.next(),
            ModalKey::ArrowLeft => self.previous(),
        };
        moved.map_or(KeyOutcome::Ignored, KeyOutcome::Moved)
    }

    /// Apply a forwarded intent. Returns the index shown afterwards, `None` once closed.
    pub fn apply(&mut self, action: ModalAction) -> Option<usize> {
        match action {
            ModalAction::Click(target) => {
                self.click(target);
            }
            ModalAction::Key(key) => {
                self.handle_key(key);
            }
            ModalAction::Next => {
                self.next();
            }
            ModalAction::Previous => {
                self.previous();
            }
        }
        self.current_index()
    }

    /// Swap in a different sequence (e.g. another gallery category).
    ///
    /// An open viewer closes if the new sequence is empty, and falls back to
    /// the first image if its index no longer exists. Returns whether it closed.
    pub fn set_sequence(&mut self, sequence: ImageSequence) -> bool {
        self.sequence = sequence;
        match self.state {
            ModalState::Open { .. } if self.sequence.is_empty() => self.close(),
            ModalState::Open { index } if index >= self.sequence.len() => {
                self.state = ModalState::Open { index: 0 };
                false
            }
            _ => false,
        }
    }
}
