//! Numeric range guards
//!
//! The free functions here are the generic core: each takes a capability
//! descriptor and requires only the tier it needs. The [`Subject`] methods
//! at the bottom are the per-type surface that supplies [`Number::INFO`].
//!
//! Sign guards come in two families:
//!
//! - [`sign`] for types with a total sign ([`SignInfo`])
//! - [`float`] for floating types ([`FloatInfo`]); NaN has no sign, so it
//!   never fails a sign guard. Reject it with [`not_nan`] or [`finite`].

use std::fmt::Display;

use crate::foundation::{Failure, GuardError, GuardResult, Subject};
use crate::info::{FiniteInfo, FloatInfo, Float, Number, NumberInfo, Sign, Signed};

// ============================================================================
// SIGN RULES
// ============================================================================

/// A sign comparison a guard can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignRule {
    /// Fails when the sign is negative.
    NotNegative,
    /// Fails when the sign is zero or negative.
    Positive,
    /// Fails when the sign is zero or positive.
    Negative,
    /// Fails when the sign is positive.
    NotPositive,
}

impl SignRule {
    /// Returns true if a value with `sign` passes.
    #[must_use]
    pub const fn admits(self, sign: Sign) -> bool {
        match self {
            Self::NotNegative => !matches!(sign, Sign::Negative),
            Self::Positive => matches!(sign, Sign::Positive),
            Self::Negative => matches!(sign, Sign::Negative),
            Self::NotPositive => !matches!(sign, Sign::Positive),
        }
    }

    /// Error code reported by this rule.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotNegative => "not_negative",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::NotPositive => "not_positive",
        }
    }

    /// Message used when the subject has no override.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::NotNegative => "Value cannot be negative.",
            Self::Positive => "Value must be positive.",
            Self::Negative => "Value must be negative.",
            Self::NotPositive => "Value cannot be positive.",
        }
    }

    fn reject(self, subject: &Subject, value: &dyn Display) -> GuardError {
        subject.reject_value(Failure::OutOfRange, self.code(), value, || {
            self.default_message()
        })
    }
}

macro_rules! sign_guards {
    ($bound:ident) => {
        /// Fails if `value` is negative.
        #[inline]
        pub fn not_negative<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
        where
            I: $bound<T>,
            T: Display,
        {
            check(info, value, SignRule::NotNegative, subject)
        }

        /// Fails if `value` is zero or negative.
        #[inline]
        pub fn positive<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
        where
            I: $bound<T>,
            T: Display,
        {
            check(info, value, SignRule::Positive, subject)
        }

        /// Fails if `value` is zero or positive.
        #[inline]
        pub fn negative<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
        where
            I: $bound<T>,
            T: Display,
        {
            check(info, value, SignRule::Negative, subject)
        }

        /// Fails if `value` is positive.
        #[inline]
        pub fn not_positive<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
        where
            I: $bound<T>,
            T: Display,
        {
            check(info, value, SignRule::NotPositive, subject)
        }
    };
}

/// Sign guards for types with a total three-way sign.
pub mod sign {
    use super::{Display, GuardResult, SignRule, Subject};
    use crate::info::SignInfo;

    /// Applies `rule` to the sign of `value`.
    pub fn check<I, T>(info: &I, value: T, rule: SignRule, subject: &Subject) -> GuardResult<T>
    where
        I: SignInfo<T>,
        T: Display,
    {
        if rule.admits(info.sign(&value)) {
            Ok(value)
        } else {
            Err(rule.reject(subject, &value))
        }
    }

    sign_guards!(SignInfo);
}

/// NaN-aware sign guards for floating-point types.
pub mod float {
    use super::{Display, FloatInfo, GuardResult, SignRule, Subject};

    /// Applies `rule` to the sign of `value`; NaN always passes.
    pub fn check<I, T>(info: &I, value: T, rule: SignRule, subject: &Subject) -> GuardResult<T>
    where
        I: FloatInfo<T>,
        T: Display,
    {
        match info.sign_or_nan(&value) {
            Some(sign) if !rule.admits(sign) => Err(rule.reject(subject, &value)),
            _ => Ok(value),
        }
    }

    sign_guards!(FloatInfo);
}

// ============================================================================
// ZERO / FINITE / NAN
// ============================================================================

/// Fails if `value` is zero.
pub fn non_zero<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
where
    I: NumberInfo<T>,
    T: Display,
{
    if info.is_zero(&value) {
        Err(subject.reject_value(Failure::OutOfRange, "non_zero", &value, || {
            "Value cannot be zero."
        }))
    } else {
        Ok(value)
    }
}

/// Fails if `value` is infinite or NaN.
pub fn finite<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
where
    I: FiniteInfo<T>,
    T: Display,
{
    if info.is_finite(&value) {
        Ok(value)
    } else {
        Err(subject.reject_value(Failure::OutOfRange, "finite", &value, || {
            "Infinite values are not permitted."
        }))
    }
}

/// Fails if `value` is NaN.
pub fn not_nan<I, T>(info: &I, value: T, subject: &Subject) -> GuardResult<T>
where
    I: FloatInfo<T>,
    T: Display,
{
    if info.is_nan(&value) {
        Err(subject.reject_value(Failure::OutOfRange, "not_nan", &value, || {
            "Floating-point not-a-number values are not permitted."
        }))
    } else {
        Ok(value)
    }
}

// ============================================================================
// SUBJECT SURFACE
// ============================================================================

impl Subject {
    /// Fails if `value` is negative.
    #[inline]
    pub fn not_negative<T: Signed>(&self, value: T) -> GuardResult<T> {
        value.check_sign(SignRule::NotNegative, self)
    }

    /// Fails if `value` is zero or negative.
    #[inline]
    pub fn positive<T: Signed>(&self, value: T) -> GuardResult<T> {
        value.check_sign(SignRule::Positive, self)
    }

    /// Fails if `value` is zero or positive.
    #[inline]
    pub fn negative<T: Signed>(&self, value: T) -> GuardResult<T> {
        value.check_sign(SignRule::Negative, self)
    }

    /// Fails if `value` is positive.
    #[inline]
    pub fn not_positive<T: Signed>(&self, value: T) -> GuardResult<T> {
        value.check_sign(SignRule::NotPositive, self)
    }

    /// Fails if `value` is zero.
    #[inline]
    pub fn non_zero<T: Number>(&self, value: T) -> GuardResult<T> {
        non_zero(&T::INFO, value, self)
    }

    /// Fails if `value` is infinite or NaN.
    #[inline]
    pub fn finite<T: Float>(&self, value: T) -> GuardResult<T> {
        finite(&T::INFO, value, self)
    }

    /// Fails if `value` is NaN.
    #[inline]
    pub fn not_nan<T: Float>(&self, value: T) -> GuardResult<T> {
        not_nan(&T::INFO, value, self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
