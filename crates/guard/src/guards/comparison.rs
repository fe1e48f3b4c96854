//! Ordered comparison guards
//!
//! Generic over any `T: PartialOrd<B>` with a displayable bound. A value that
//! does not compare against the bound at all (NaN, for instance) fails every
//! comparison guard.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::foundation::{Failure, GuardResult, Subject};

/// Which side of the bound is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// `value <= bound`
    AtMost,
    /// `value < bound`
    LessThan,
    /// `value >= bound`
    AtLeast,
    /// `value > bound`
    GreaterThan,
}

impl Bound {
    /// Returns true if a value ordered `ordering` relative to the bound passes.
    #[must_use]
    pub const fn admits(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (Self::AtMost, Some(o)) => !matches!(o, Ordering::Greater),
            (Self::LessThan, Some(o)) => matches!(o, Ordering::Less),
            (Self::AtLeast, Some(o)) => !matches!(o, Ordering::Less),
            (Self::GreaterThan, Some(o)) => matches!(o, Ordering::Greater),
        }
    }

    /// Error code reported by this bound.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AtMost => "at_most",
            Self::LessThan => "less_than",
            Self::AtLeast => "at_least",
            Self::GreaterThan => "greater_than",
        }
    }

    fn default_message(self, bound: &dyn Display) -> String {
        match self {
            Self::AtMost => format!("Value cannot be greater than {bound}."),
            Self::LessThan => format!("Value must be less than {bound}."),
            Self::AtLeast => format!("Value cannot be less than {bound}."),
            Self::GreaterThan => format!("Value must be greater than {bound}."),
        }
    }
}

/// Compares `value` against `bound` and fails unless `rule` admits the result.
pub fn check<T, B>(value: T, bound: &B, rule: Bound, subject: &Subject) -> GuardResult<T>
where
    T: PartialOrd<B> + Display,
    B: Display,
{
    if rule.admits(value.partial_cmp(bound)) {
        Ok(value)
    } else {
        Err(subject.reject_value(Failure::OutOfRange, rule.code(), &value, || {
            rule.default_message(bound)
        }))
    }
}

impl Subject {
    /// Fails if `value > max`.
    #[inline]
    pub fn at_most<T, B>(&self, value: T, max: B) -> GuardResult<T>
    where
        T: PartialOrd<B> + Display,
        B: Display,
    {
        check(value, &max, Bound::AtMost, self)
    }

    /// Fails if `value >= max`.
    #[inline]
    pub fn less_than<T, B>(&self, value: T, max: B) -> GuardResult<T>
    where
        T: PartialOrd<B> + Display,
        B: Display,
    {
        check(value, &max, Bound::LessThan, self)
    }

    /// Fails if `value < min`.
    #[inline]
    pub fn at_least<T, B>(&self, value: T, min: B) -> GuardResult<T>
    where
        T: PartialOrd<B> + Display,
        B: Display,
    {
        check(value, &min, Bound::AtLeast, self)
    }

    /// Fails if `value <= min`.
    #[inline]
    pub fn greater_than<T, B>(&self, value: T, min: B) -> GuardResult<T>
    where
        T: PartialOrd<B> + Display,
        B: Display,
    {
        check(value, &min, Bound::GreaterThan, self)
    }
}
