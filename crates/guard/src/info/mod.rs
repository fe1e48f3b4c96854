//! Numeric capability descriptors
//!
//! A descriptor is a stateless value that knows how to inspect one numeric
//! type. Descriptors are tiered so that a guard asks only for what it needs:
//!
//! | Tier | Trait | Types |
//! |------|-------|-------|
//! | zero | [`NumberInfo`] | unsigned integers, `BigUint` |
//! | sign | [`SignInfo`] | signed integers, `Decimal`, `BigInt` |
//! | float | [`FloatInfo`] (+ [`FiniteInfo`]) | `f32`, `f64`, `f16` |
//!
//! Unsigned descriptors never implement [`SignInfo`], so sign guards reject
//! them at compile time:
//!
//! ```compile_fail
//! use nebula_guard::guards::numeric::sign;
//! use nebula_guard::info::descriptors::U32;
//! use nebula_guard::prelude::*;
//!
//! let _ = sign::not_negative(&U32, 5_u32, &arg("n"));
//! ```
//!
//! The per-type table that picks a descriptor for a value type lives in
//! [`number`].

pub mod descriptors;
pub mod number;

pub use number::{Float, Number, Signed};

// ============================================================================
// SIGN
// ============================================================================

/// Three-way sign of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Sign {
    /// Strictly below zero.
    Negative = -1,
    /// Zero, including negative zero.
    Zero = 0,
    /// Strictly above zero.
    Positive = 1,
}

impl Sign {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Classifies a value by comparing it against its zero.
    #[inline]
    pub(crate) fn of<T: PartialOrd>(value: &T, zero: &T) -> Self {
        if value > zero {
            Self::Positive
        } else if value < zero {
            Self::Negative
        } else {
            Self::Zero
        }
    }
}

impl From<Sign> for i8 {
    fn from(sign: Sign) -> Self {
        sign.as_i8()
    }
}

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Descriptors that can tell whether a value is zero.
pub trait NumberInfo<T: ?Sized> {
    /// Returns true if `value` is zero.
    fn is_zero(&self, value: &T) -> bool;
}

/// Descriptors for types with a total three-way sign.
pub trait SignInfo<T: ?Sized>: NumberInfo<T> {
    /// The sign of `value`.
    fn sign(&self, value: &T) -> Sign;
}

/// Descriptors for types that can hold infinities.
pub trait FiniteInfo<T: ?Sized>: NumberInfo<T> {
    /// Returns true if `value` is neither infinite nor NaN.
    fn is_finite(&self, value: &T) -> bool;

    /// Returns true if `value` is positive or negative infinity.
    fn is_infinite(&self, value: &T) -> bool;
}

/// Descriptors for floating-point types.
pub trait FloatInfo<T: ?Sized>: FiniteInfo<T> {
    /// The sign of `value`, or `None` when `value` is NaN.
    fn sign_or_nan(&self, value: &T) -> Option<Sign>;

    /// Returns true if `value` is NaN.
    fn is_nan(&self, value: &T) -> bool;
}
