use nebula_guard::guards::numeric::{float, sign};
use nebula_guard::info::descriptors;
use nebula_guard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(SignRule::NotNegative, -1, false)]
#[case(SignRule::NotNegative, 0, true)]
#[case(SignRule::NotNegative, 1, true)]
#[case(SignRule::Positive, -1, false)]
#[case(SignRule::Positive, 0, false)]
#[case(SignRule::Positive, 1, true)]
#[case(SignRule::Negative, -1, true)]
#[case(SignRule::Negative, 0, false)]
#[case(SignRule::Negative, 1, false)]
#[case(SignRule::NotPositive, -1, true)]
#[case(SignRule::NotPositive, 0, true)]
#[case(SignRule::NotPositive, 1, false)]
fn sign_rules_over_i64(#[case] rule: SignRule, #[case] value: i64, #[case] passes: bool) {
    let result = value.check_sign(rule, &arg("v"));
    assert_eq!(result.is_ok(), passes, "{rule:?} on {value}");
    match result {
        Ok(v) => assert_eq!(v, value),
        Err(err) => {
            assert_eq!(err.code(), rule.code());
            assert_eq!(err.message(), rule.default_message());
            assert_eq!(err.value(), Some(value.to_string().as_str()));
        }
    }
}

#[rstest]
#[case(-2.5, false)]
#[case(-0.0, true)]
#[case(0.0, true)]
#[case(f64::INFINITY, true)]
#[case(f64::NEG_INFINITY, false)]
#[case(f64::NAN, true)]
fn not_negative_over_f64(#[case] value: f64, #[case] passes: bool) {
    assert_eq!(arg("v").not_negative(value).is_ok(), passes);
}

#[rstest]
#[case(f32::NAN)]
#[case(-f32::NAN)]
fn nan_passes_every_sign_guard(#[case] value: f32) {
    let s = arg("v");
    assert!(s.not_negative(value).is_ok());
    assert!(s.positive(value).is_ok());
    assert!(s.negative(value).is_ok());
    assert!(s.not_positive(value).is_ok());
    assert!(s.non_zero(value).is_ok());
    assert!(s.finite(value).is_err());
    assert!(s.not_nan(value).is_err());
}

#[test]
fn non_zero_across_widths() {
    let s = arg("v");
    assert!(s.non_zero(0_u8).is_err());
    assert!(s.non_zero(0_u128).is_err());
    assert!(s.non_zero(0_isize).is_err());
    assert!(s.non_zero(-0.0_f64).is_err());
    assert_eq!(s.non_zero(u64::MAX), Ok(u64::MAX));
    assert_eq!(s.non_zero(i8::MIN), Ok(i8::MIN));
}

#[test]
fn generic_families_accept_explicit_descriptors() {
    let s = prop("Balance");
    assert_eq!(sign::not_negative(&descriptors::I16, 12_i16, &s), Ok(12));
    assert!(sign::positive(&descriptors::ISIZE, -1_isize, &s).is_err());
    assert!(float::negative(&descriptors::F32, 0.5_f32, &s).is_err());
    assert_eq!(
        nebula_guard::guards::numeric::non_zero(&descriptors::USIZE, 9_usize, &s),
        Ok(9)
    );
}

#[test]
fn descriptor_table_matches_module_constants() {
    assert_eq!(<u32 as Number>::INFO, descriptors::U32);
    assert_eq!(<i8 as Number>::INFO, descriptors::I8);
    assert_eq!(<f64 as Number>::INFO, descriptors::F64);
}

#[test]
fn property_flavor_reports_property_kind() {
    let err = prop("Temperature").finite(f64::INFINITY).unwrap_err();
    assert_eq!(err.kind(), GuardErrorKind::PropertyOutOfRange);
    assert_eq!(err.name(), "Temperature");
    assert_eq!(err.value(), Some("inf"));
    assert_eq!(
        err.to_string(),
        "Infinite values are not permitted. (property 'Temperature', actual value: inf)"
    );
}

#[cfg(feature = "half")]
#[test]
fn half_precision() {
    use half::f16;

    let s = arg("h");
    assert!(s.positive(f16::from_f32(0.25)).is_ok());
    assert!(s.positive(f16::NEG_ONE).is_err());
    assert!(s.negative(f16::NAN).is_ok());
    assert!(s.finite(f16::INFINITY).is_err());
    assert!(s.non_zero(f16::NEG_ZERO).is_err());
}

#[cfg(feature = "decimal")]
#[test]
fn decimal_sign_and_zero() {
    use rust_decimal::Decimal;

    let s = arg("price");
    assert_eq!(s.not_negative(Decimal::new(1999, 2)), Ok(Decimal::new(1999, 2)));
    let err = s.not_negative(Decimal::new(-5, 1)).unwrap_err();
    assert_eq!(err.value(), Some("-0.5"));
    assert!(s.non_zero(Decimal::ZERO).is_err());
}

#[cfg(feature = "bigint")]
#[test]
fn big_integers() {
    use num_bigint::{BigInt, BigUint};

    let s = arg("big");
    let huge: BigInt = BigInt::from(u128::MAX) * BigInt::from(u128::MAX);
    assert_eq!(s.positive(huge.clone()), Ok(huge.clone()));
    assert!(s.negative(huge).is_err());
    assert!(s.not_positive(BigInt::from(0)).is_ok());
    assert!(s.non_zero(BigUint::from(0_u8)).is_err());
}
