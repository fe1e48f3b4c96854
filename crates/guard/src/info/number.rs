//! Type-keyed descriptor table
//!
//! [`Number::INFO`] maps each value type to its descriptor, which lets the
//! [`Subject`] guard methods infer everything from the value alone:
//!
//! ```
//! use nebula_guard::prelude::*;
//!
//! assert_eq!(arg("n").non_zero(7_u16), Ok(7));
//! assert_eq!(arg("n").not_negative(-0.0_f32).map(f32::is_sign_negative), Ok(true));
//! ```

use std::fmt;

use super::descriptors::*;
use super::{FloatInfo, NumberInfo};
use crate::foundation::{GuardResult, Subject};
use crate::guards::numeric::{SignRule, float, sign};

/// A numeric value type with a known descriptor.
pub trait Number: Sized + fmt::Display {
    /// The descriptor type.
    type Info: NumberInfo<Self> + Copy + 'static;

    /// The descriptor singleton.
    const INFO: Self::Info;
}

/// Numbers whose sign can be guarded.
///
/// Integral types route through [`sign`], floating types through the
/// NaN-aware [`float`] family.
pub trait Signed: Number {
    /// Applies `rule` with this type's sign guard family.
    fn check_sign(self, rule: SignRule, subject: &Subject) -> GuardResult<Self>;
}

/// Floating-point numbers.
pub trait Float: Signed + Number<Info: FloatInfo<Self>> {}

macro_rules! number {
    ($($t:ty => $info:ident = $konst:ident;)+) => {$(
        impl Number for $t {
            type Info = $info;
            const INFO: Self::Info = $konst;
        }
    )+};
}

macro_rules! signed_via {
    ($family:ident: $($t:ty),+ $(,)?) => {$(
        impl Signed for $t {
            #[inline]
            fn check_sign(self, rule: SignRule, subject: &Subject) -> GuardResult<Self> {
                $family::check(&Self::INFO, self, rule, subject)
            }
        }
    )+};
}

number! {
    u8 => U8Info = U8;
    u16 => U16Info = U16;
    u32 => U32Info = U32;
    u64 => U64Info = U64;
    u128 => U128Info = U128;
    usize => UsizeInfo = USIZE;
    i8 => I8Info = I8;
    i16 => I16Info = I16;
    i32 => I32Info = I32;
    i64 => I64Info = I64;
    i128 => I128Info = I128;
    isize => IsizeInfo = ISIZE;
    f32 => F32Info = F32;
    f64 => F64Info = F64;
}

signed_via!(sign: i8, i16, i32, i64, i128, isize);
signed_via!(float: f32, f64);

impl Float for f32 {}
impl Float for f64 {}

#[cfg(feature = "half")]
number! { half::f16 => F16Info = F16; }
#[cfg(feature = "half")]
signed_via!(float: half::f16);
#[cfg(feature = "half")]
impl Float for half::f16 {}

#[cfg(feature = "decimal")]
number! { rust_decimal::Decimal => DecimalInfo = DECIMAL; }
#[cfg(feature = "decimal")]
signed_via!(sign: rust_decimal::Decimal);

#[cfg(feature = "bigint")]
number! {
    num_bigint::BigInt => BigIntInfo = BIG_INT;
    num_bigint::BigUint => BigUintInfo = BIG_UINT;
}
#[cfg(feature = "bigint")]
signed_via!(sign: num_bigint::BigInt);
