//! Home page photo showcase: a controlled slider and a modal that share one index.
//!
//! DESIGN
//! ======
//! The showcase is the single owner of the slide index. The slider proposes
//! moves; the modal, once open, owns navigation and the slider follows it.
//! Autoplay proposals arriving while the modal is open are dropped so the
//! photo behind the overlay does not drift away from the one being viewed.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use carousel::modal::{ModalAction, ModalViewer};
use carousel::sequence::ImageSequence;

#[derive(Clone, Debug)]
pub struct Showcase {
    sequence: ImageSequence,
    slide: usize,
    modal: ModalViewer,
}

impl Showcase {
    pub fn new(sequence: ImageSequence) -> Self {
        Self { modal: ModalViewer::new(sequence.clone()), sequence, slide: 0 }
    }

    pub fn sequence(&self) -> &ImageSequence {
        &self.sequence
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn modal(&self) -> &ModalViewer {
        &self.modal
    }

    /// The slider proposed `index` (autoplay tick or dot click).
    pub fn propose(&mut self, index: usize) -> bool {
        if self.modal.is_open() || index >= self.sequence.len() {
            return false;
        }
        self.slide = index;
        true
    }

    pub fn step_next(&mut self) {
        self.slide = self.sequence.next_index(self.slide);
    }

    pub fn step_previous(&mut self) {
        self.slide = self.sequence.previous_index(self.slide);
    }

    /// The slider's current photo was clicked.
    pub fn open(&mut self, index: usize) {
        self.modal.open(index);
    }

    /// Apply a modal action; the slide follows the photo the modal shows.
    pub fn apply(&mut self, action: ModalAction) {
        if let Some(index) = self.modal.apply(action) {
            self.slide = index;
        }
    }
}
