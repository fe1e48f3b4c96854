//! Immutable shared sequence with a distinct uninitialized state
//!
//! `FrozenArray::default()` holds no storage at all, while
//! [`FrozenArray::empty`] is an initialized sequence of length zero. The
//! default-value guard tells the two apart.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, cheaply cloneable sequence that may be uninitialized.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FrozenArray<T> {
    items: Option<Arc<[T]>>,
}

impl<T> FrozenArray<T> {
    /// An initialized sequence with no items.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Some(Arc::from(Vec::new())),
        }
    }

    /// Returns true if the sequence was never initialized.
    #[must_use]
    pub const fn is_uninitialized(&self) -> bool {
        self.items.is_none()
    }

    /// Number of items; zero when uninitialized.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if there are no items, initialized or not.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The items, or an empty slice when uninitialized.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }
}

impl<T> Default for FrozenArray<T> {
    fn default() -> Self {
        Self { items: None }
    }
}

impl<T> From<Vec<T>> for FrozenArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Some(Arc::from(items)),
        }
    }
}

impl<T: Clone> From<&[T]> for FrozenArray<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: Some(Arc::from(items)),
        }
    }
}

impl<T> FromIterator<T> for FrozenArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Some(iter.into_iter().collect()),
        }
    }
}

impl<T> Deref for FrozenArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.items {
            Some(items) => f.debug_list().entries(items.iter()).finish(),
            None => f.write_str("FrozenArray(uninitialized)"),
        }
    }
}
