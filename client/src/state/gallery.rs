//! Gallery page state: the selected category and the modal over its photos.
//!
//! DESIGN
//! ======
//! The modal always views the selected category. Selecting a different
//! category swaps the sequence and closes the modal in one update, so a
//! stale index from the previous category can never be displayed.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use carousel::modal::{ModalAction, ModalViewer};

use crate::content::gallery::{DEFAULT_CATEGORY, GalleryCategory, gallery_category};

#[derive(Clone, Debug)]
pub struct GalleryState {
    pub selected: &'static str,
    pub modal: ModalViewer,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::with_category(DEFAULT_CATEGORY)
    }
}

impl GalleryState {
    /// State showing `name`, or nothing if the category is unknown.
    pub fn with_category(name: &'static str) -> Self {
        let sequence = gallery_category(name).map(GalleryCategory::sequence).unwrap_or_default();
        Self { selected: name, modal: ModalViewer::new(sequence) }
    }

    pub fn category(&self) -> Option<&'static GalleryCategory> {
        gallery_category(self.selected)
    }

    /// Switch category, closing the modal. Reselecting the current one is a no-op.
    pub fn select(&mut self, name: &'static str) {
        if name == self.selected {
            return;
        }
        self.modal.close();
        self.selected = name;
        let sequence = gallery_category(name).map(GalleryCategory::sequence).unwrap_or_default();
        self.modal.set_sequence(sequence);
    }

    /// A grid tile was clicked.
    pub fn open(&mut self, index: usize) {
        self.modal.open(index);
    }

    /// Route a modal action to the viewer.
    pub fn apply(&mut self, action: ModalAction) -> Option<usize> {
        self.modal.apply(action)
    }
}
