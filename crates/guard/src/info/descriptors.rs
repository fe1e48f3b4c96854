//! Descriptor singletons for the concrete numeric types
//!
//! Each descriptor is a zero-sized unit struct with a matching `const`
//! (`U8Info` / [`U8`], `F64Info` / [`F64`], ...), so the table is immutable
//! and needs no initialization.

use super::{FiniteInfo, FloatInfo, NumberInfo, Sign, SignInfo};

// ============================================================================
// DESCRIPTOR MACROS
// ============================================================================

macro_rules! descriptor {
    ($name:ident, $konst:ident, $t:ty, $tier:literal) => {
        #[doc = concat!("The ", $tier, " descriptor for [`", stringify!($t), "`].")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        #[doc = concat!("The [`", stringify!($t), "`] descriptor instance.")]
        pub const $konst: $name = $name;
    };
}

macro_rules! zero_info {
    ($($name:ident, $konst:ident, $t:ty;)+) => {$(
        descriptor!($name, $konst, $t, "zero-only");

        impl NumberInfo<$t> for $name {
            #[inline]
            fn is_zero(&self, value: &$t) -> bool {
                *value == 0
            }
        }
    )+};
}

macro_rules! sign_info {
    ($($name:ident, $konst:ident, $t:ty;)+) => {$(
        descriptor!($name, $konst, $t, "signed");

        impl NumberInfo<$t> for $name {
            #[inline]
            fn is_zero(&self, value: &$t) -> bool {
                *value == 0
            }
        }

        impl SignInfo<$t> for $name {
            #[inline]
            fn sign(&self, value: &$t) -> Sign {
                Sign::of(value, &0)
            }
        }
    )+};
}

macro_rules! float_info {
    ($($name:ident, $konst:ident, $t:ty, $zero:expr;)+) => {$(
        descriptor!($name, $konst, $t, "floating-point");

        impl NumberInfo<$t> for $name {
            #[inline]
            fn is_zero(&self, value: &$t) -> bool {
                *value == $zero
            }
        }

        impl FiniteInfo<$t> for $name {
            #[inline]
            fn is_finite(&self, value: &$t) -> bool {
                !(self.is_infinite(value) || self.is_nan(value))
            }

            #[inline]
            fn is_infinite(&self, value: &$t) -> bool {
                value.is_infinite()
            }
        }

        impl FloatInfo<$t> for $name {
            #[inline]
            fn sign_or_nan(&self, value: &$t) -> Option<Sign> {
                if self.is_nan(value) {
                    None
                } else {
                    Some(Sign::of(value, &$zero))
                }
            }

            #[inline]
            fn is_nan(&self, value: &$t) -> bool {
                value.is_nan()
            }
        }
    )+};
}

// ============================================================================
// PRIMITIVES
// ============================================================================

zero_info! {
    U8Info, U8, u8;
    U16Info, U16, u16;
    U32Info, U32, u32;
    U64Info, U64, u64;
    U128Info, U128, u128;
    UsizeInfo, USIZE, usize;
}

sign_info! {
    I8Info, I8, i8;
    I16Info, I16, i16;
    I32Info, I32, i32;
    I64Info, I64, i64;
    I128Info, I128, i128;
    IsizeInfo, ISIZE, isize;
}

float_info! {
    F32Info, F32, f32, 0.0;
    F64Info, F64, f64, 0.0;
}

#[cfg(feature = "half")]
float_info! {
    F16Info, F16, half::f16, half::f16::ZERO;
}

// ============================================================================
// DECIMAL
// ============================================================================

#[cfg(feature = "decimal")]
descriptor!(DecimalInfo, DECIMAL, rust_decimal::Decimal, "signed");

#[cfg(feature = "decimal")]
impl NumberInfo<rust_decimal::Decimal> for DecimalInfo {
    #[inline]
    fn is_zero(&self, value: &rust_decimal::Decimal) -> bool {
        value.is_zero()
    }
}

#[cfg(feature = "decimal")]
impl SignInfo<rust_decimal::Decimal> for DecimalInfo {
    #[inline]
    fn sign(&self, value: &rust_decimal::Decimal) -> Sign {
        Sign::of(value, &rust_decimal::Decimal::ZERO)
    }
}

// ============================================================================
// ARBITRARY PRECISION
// ============================================================================

#[cfg(feature = "bigint")]
descriptor!(BigIntInfo, BIG_INT, num_bigint::BigInt, "signed");

#[cfg(feature = "bigint")]
impl NumberInfo<num_bigint::BigInt> for BigIntInfo {
    #[inline]
    fn is_zero(&self, value: &num_bigint::BigInt) -> bool {
        value.sign() == num_bigint::Sign::NoSign
    }
}

#[cfg(feature = "bigint")]
impl SignInfo<num_bigint::BigInt> for BigIntInfo {
    fn sign(&self, value: &num_bigint::BigInt) -> Sign {
        match value.sign() {
            num_bigint::Sign::Minus => Sign::Negative,
            num_bigint::Sign::NoSign => Sign::Zero,
            num_bigint::Sign::Plus => Sign::Positive,
        }
    }
}

#[cfg(feature = "bigint")]
descriptor!(BigUintInfo, BIG_UINT, num_bigint::BigUint, "zero-only");

#[cfg(feature = "bigint")]
impl NumberInfo<num_bigint::BigUint> for BigUintInfo {
    #[inline]
    fn is_zero(&self, value: &num_bigint::BigUint) -> bool {
        value.bits() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
