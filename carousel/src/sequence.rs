//! Ordered, immutable image sequences and wraparound index arithmetic.
//!
//! A sequence is supplied once per page view and never mutated. Navigation
//! only ever changes a position within it. Each sequence carries an identity
//! so engines can tell "the same list again" apart from "a new list" when the
//! host re-renders.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CarouselError;

static NEXT_SEQUENCE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an [`ImageSequence`]. Clones share it; separately built sequences never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceId(u64);

/// An ordered list of opaque image references (URLs or site-relative paths).
#[derive(Debug, Clone)]
pub struct ImageSequence {
    id: SequenceId,
    images: Arc<[String]>,
}

impl ImageSequence {
    /// Build a sequence with a fresh identity.
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: SequenceId(NEXT_SEQUENCE_ID.fetch_add(1, Ordering::Relaxed)),
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    #[must_use]
    pub fn id(&self) -> SequenceId {
        self.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether next/previous navigation can change anything.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.images
    }

    /// Index following `current`, wrapping to the start.
    #[must_use]
    pub fn next_index(&self, current: usize) -> usize {
        wrap_next(current, self.len())
    }

    /// Index preceding `current`, wrapping to the end.
    #[must_use]
    pub fn previous_index(&self, current: usize) -> usize {
        wrap_previous(current, self.len())
    }

    /// Check that `index` addresses an image in this sequence.
    ///
    /// # Errors
    ///
    /// [`CarouselError::EmptySequence`] when there are no images,
    /// [`CarouselError::IndexOutOfRange`] when `index >= len`.
    pub fn validate_index(&self, index: usize) -> Result<usize, CarouselError> {
        if self.is_empty() {
            return Err(CarouselError::EmptySequence);
        }
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange { index, len: self.len() });
        }
        Ok(index)
    }

    /// Interpret a loosely typed index coming from an external controller.
    ///
    /// Accepts only finite, non-negative whole numbers inside the sequence.
    ///
    /// # Errors
    ///
    /// [`CarouselError::NotAnIndex`] for NaN, infinities, negatives and
    /// fractions; otherwise the errors of [`Self::validate_index`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn parse_index(&self, raw: f64) -> Result<usize, CarouselError> {
        if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
            return Err(CarouselError::NotAnIndex(raw));
        }
        if raw >= self.len() as f64 {
            if self.is_empty() {
                return Err(CarouselError::EmptySequence);
            }
            return Err(CarouselError::IndexOutOfRange { index: raw as usize, len: self.len() });
        }
        self.validate_index(raw as usize)
    }
}

impl Default for ImageSequence {
    fn default() -> Self {
        Self::empty()
    }
}

/// Identity comparison: two sequences are equal only if one is a clone of the other.
impl PartialEq for ImageSequence {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ImageSequence {}

impl<S: Into<String>> FromIterator<S> for ImageSequence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// `(current + 1) mod len`. Returns `current` unchanged for an empty sequence.
#[must_use]
pub fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 {
        return current;
    }
    (current % len + 1) % len
}

/// `(current - 1 + len) mod len`. Returns `current` unchanged for an empty sequence.
#[must_use]
pub fn wrap_previous(current: usize, len: usize) -> usize {
    if len == 0 {
        return current;
    }
    (current % len + len - 1) % len
}
