//! Default-value guard

use std::time::Duration;

use super::type_label;
use crate::foundation::{Failure, GuardResult, Subject};
use crate::frozen::FrozenArray;

/// Types with a recognisable default state.
///
/// Implement it for your own `Default + PartialEq` types with
/// [`defaultable!`](crate::defaultable).
pub trait Defaultable {
    /// Returns true if `self` is the default state of its type.
    fn is_default(&self) -> bool;
}

crate::defaultable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, Duration,
);

#[cfg(feature = "half")]
crate::defaultable!(half::f16);

#[cfg(feature = "decimal")]
crate::defaultable!(rust_decimal::Decimal);

#[cfg(feature = "bigint")]
crate::defaultable!(num_bigint::BigInt, num_bigint::BigUint);

impl<T> Defaultable for Option<T> {
    #[inline]
    fn is_default(&self) -> bool {
        self.is_none()
    }
}

/// Only the uninitialized array is default; [`FrozenArray::empty`] is not.
impl<T> Defaultable for FrozenArray<T> {
    #[inline]
    fn is_default(&self) -> bool {
        self.is_uninitialized()
    }
}

impl Subject {
    /// Fails if `value` is the default state of `T`.
    ///
    /// ```
    /// use nebula_guard::prelude::*;
    ///
    /// assert_eq!(arg("items").not_default(FrozenArray::<u8>::empty()).map(|a| a.len()), Ok(0));
    /// assert!(arg("items").not_default(FrozenArray::<u8>::default()).is_err());
    /// ```
    pub fn not_default<T: Defaultable>(&self, value: T) -> GuardResult<T> {
        if value.is_default() {
            Err(self.reject(Failure::DefaultValue, "default", || {
                format!(
                    "Value cannot be the default value of type {}.",
                    type_label::<T>()
                )
            }))
        } else {
            Ok(value)
        }
    }
}
