use nebula_guard::prelude::*;
use pretty_assertions::assert_eq;

named_enum! {
    /// Retry strategies.
    pub enum Strategy: u16 {
        /// Give up immediately.
        Never = 0,
        Linear = 10,
        Exponential = 20,
    }
}

#[test]
fn declared_members_pass() {
    for member in Strategy::MEMBERS {
        assert_eq!(arg("strategy").named::<Strategy>(member.repr()), Ok(*member));
    }
}

#[test]
fn undeclared_value_fails_with_value() {
    let err = prop("Strategy").named::<Strategy>(15).unwrap_err();
    assert_eq!(err.kind(), GuardErrorKind::PropertyUnnamedEnum);
    assert_eq!(err.failure(), Failure::UnnamedEnum);
    assert_eq!(err.value(), Some("15"));
    assert_eq!(
        err.message(),
        "Value must be a named, defined value of type Strategy."
    );
}

#[test]
fn or_none_variants() {
    let s = arg("strategy");
    assert_eq!(s.named_or_none::<Strategy>(None), Ok(None));
    assert_eq!(s.named_or_none::<Strategy>(Some(20)), Ok(Some(Strategy::Exponential)));
    let err = s.named_or_none::<Strategy>(Some(1)).unwrap_err();
    assert_eq!(
        err.message(),
        "Value must be either none or a named, defined value of type Strategy."
    );
}

#[test]
fn member_names_follow_declaration() {
    let names: Vec<_> = Strategy::MEMBERS.iter().map(|m| m.name()).collect();
    assert_eq!(names, ["Never", "Linear", "Exponential"]);
}

#[cfg(feature = "flags")]
mod flags {
    use super::*;
    use pretty_assertions::assert_eq;

    bitflags::bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct Permissions: u32 {
            const READ = 1;
            const WRITE = 1 << 1;
            const ADMIN = 1 << 7;
        }
    }

    #[test]
    fn combinations_of_declared_flags_pass() {
        let s = arg("perms");
        assert_eq!(s.named_flags::<Permissions>(0b11), Ok(Permissions::READ | Permissions::WRITE));
        assert_eq!(s.named_flags::<Permissions>(0x83), Ok(Permissions::all()));
        assert_eq!(s.named_flags::<Permissions>(0), Ok(Permissions::empty()));
    }

    #[test]
    fn unknown_bits_fail() {
        let err = arg("perms").named_flags::<Permissions>(0b100).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::ArgumentUnnamedEnum);
        assert_eq!(
            err.message(),
            "Value must be a named, defined value of type Permissions."
        );
    }

    #[test]
    fn or_none_passes_none() {
        let s = prop("Permissions");
        assert_eq!(s.named_flags_or_none::<Permissions>(None), Ok(None));
        assert_eq!(s.named_flags_or_none::<Permissions>(Some(1)), Ok(Some(Permissions::READ)));
        assert!(s.named_flags_or_none::<Permissions>(Some(1 << 20)).is_err());
    }
}
