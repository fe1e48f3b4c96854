use std::ptr::{self, NonNull};

use nebula_guard::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn option_unwraps_present_value() {
    let owner = arg("owner").present(Some(String::from("ops"))).unwrap();
    assert_eq!(owner, "ops");
}

#[test]
fn option_none_is_null() {
    let err = arg("owner").present(None::<String>).unwrap_err();
    assert_eq!(err.kind(), GuardErrorKind::ArgumentNull);
    assert_eq!(err.failure(), Failure::Null);
    assert_eq!(err.code(), "null");
    assert_eq!(err.to_string(), "Value cannot be null. (parameter 'owner')");
}

#[test]
fn references_inside_options() {
    let config = vec![1, 2, 3];
    let borrowed = Some(&config);
    assert_eq!(prop("Config").present(borrowed).map(Vec::len), Ok(3));
}

#[test]
fn raw_pointers_become_non_null() {
    let mut slot = [0_u8; 4];
    let p: *mut [u8] = &mut slot[..];
    let non_null: NonNull<[u8]> = arg("buf").present(p).unwrap();
    assert_eq!(non_null.len(), 4);

    let err = prop("Handle").present(ptr::null::<u64>()).unwrap_err();
    assert_eq!(err.kind(), GuardErrorKind::PropertyNull);
}
