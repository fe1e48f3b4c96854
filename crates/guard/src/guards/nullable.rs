//! Null guard
//!
//! [`Nullable`] abstracts over the shapes a nullable value can take in Rust.
//! [`Subject::present`] unwraps it or fails with [`Failure::Null`].

use std::ptr::NonNull;

use crate::foundation::{Failure, GuardResult, Subject};

/// A value that may be absent.
pub trait Nullable {
    /// The value type once presence is confirmed.
    type Present;

    /// `Some` when the value is present.
    fn into_present(self) -> Option<Self::Present>;
}

impl<T> Nullable for Option<T> {
    type Present = T;

    #[inline]
    fn into_present(self) -> Option<T> {
        self
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Present = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Present = NonNull<T>;

    #[inline]
    fn into_present(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

impl Subject {
    /// Fails if `value` is absent, otherwise returns the present value.
    ///
    /// ```
    /// use nebula_guard::prelude::*;
    ///
    /// assert_eq!(arg("owner").present(Some("root")), Ok("root"));
    /// assert_eq!(
    ///     arg("owner").present(None::<&str>).unwrap_err().kind(),
    ///     GuardErrorKind::ArgumentNull
    /// );
    /// ```
    #[inline]
    pub fn present<N: Nullable>(&self, value: N) -> GuardResult<N::Present> {
        value
            .into_present()
            .ok_or_else(|| self.reject(Failure::Null, "null", || "Value cannot be null."))
    }
}
