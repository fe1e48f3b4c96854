//! Named-enumeration guards
//!
//! A Rust enum cannot hold an undeclared discriminant, so these guards sit
//! at the boundary where a raw representation (wire value, config integer,
//! FFI field) becomes a typed member. [`Subject::named`] accepts the raw
//! value and returns the member it names.
//!
//! Flag enumerations are [`bitflags`] types: any combination of declared
//! flags is named, and any unknown bit is not.

use std::fmt;

use super::type_label;
use crate::foundation::{Failure, GuardError, GuardResult, Subject};

/// An enumeration with a closed, declared set of members.
///
/// Usually implemented with [`named_enum!`](crate::named_enum).
pub trait NamedEnum: Sized + Copy + 'static {
    /// The underlying representation.
    type Repr: Copy + PartialEq + fmt::Display + 'static;

    /// Every declared member, in declaration order.
    const MEMBERS: &'static [Self];

    /// The raw representation of this member.
    fn repr(self) -> Self::Repr;

    /// The declared name of this member.
    fn name(self) -> &'static str;

    /// The member whose representation is `repr`.
    fn from_repr(repr: Self::Repr) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.repr() == repr)
    }
}

fn unnamed<T: ?Sized>(subject: &Subject, raw: &dyn fmt::Display, or_none: bool) -> GuardError {
    subject.reject_value(Failure::UnnamedEnum, "unnamed_enum", raw, || {
        let label = type_label::<T>();
        if or_none {
            format!("Value must be either none or a named, defined value of type {label}.")
        } else {
            format!("Value must be a named, defined value of type {label}.")
        }
    })
}

impl Subject {
    /// Fails unless `raw` is the representation of a declared member of `E`.
    ///
    /// ```
    /// use nebula_guard::prelude::*;
    ///
    /// named_enum! {
    ///     pub enum Mode: u8 { Read = 1, Write = 2 }
    /// }
    ///
    /// assert_eq!(arg("mode").named::<Mode>(2), Ok(Mode::Write));
    /// assert!(arg("mode").named::<Mode>(3).is_err());
    /// ```
    pub fn named<E: NamedEnum>(&self, raw: E::Repr) -> GuardResult<E> {
        E::from_repr(raw).ok_or_else(|| unnamed::<E>(self, &raw, false))
    }

    /// Like [`named`](Self::named), but `None` passes through.
    pub fn named_or_none<E: NamedEnum>(&self, raw: Option<E::Repr>) -> GuardResult<Option<E>> {
        match raw {
            None => Ok(None),
            Some(raw) => E::from_repr(raw)
                .map(Some)
                .ok_or_else(|| unnamed::<E>(self, &raw, true)),
        }
    }
}

#[cfg(feature = "flags")]
impl Subject {
    /// Fails if `bits` sets any bit not covered by a declared flag of `F`.
    pub fn named_flags<F>(&self, bits: F::Bits) -> GuardResult<F>
    where
        F: bitflags::Flags,
        F::Bits: fmt::Display,
    {
        F::from_bits(bits).ok_or_else(|| unnamed::<F>(self, &bits, false))
    }

    /// Like [`named_flags`](Self::named_flags), but `None` passes through.
    pub fn named_flags_or_none<F>(&self, bits: Option<F::Bits>) -> GuardResult<Option<F>>
    where
        F: bitflags::Flags,
        F::Bits: fmt::Display,
    {
        match bits {
            None => Ok(None),
            Some(bits) => F::from_bits(bits)
                .map(Some)
                .ok_or_else(|| unnamed::<F>(self, &bits, true)),
        }
    }
}
