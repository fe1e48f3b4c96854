use nebula_guard::prelude::*;

#[test]
fn display_snapshot() {
    let err = arg("n").positive(0).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Value must be positive. (parameter 'n', actual value: 0)"
    );
}

#[test]
fn json_value_snapshot() {
    let err = arg("n").positive(0).unwrap_err();
    insta::assert_snapshot!(
        err.to_json_value().to_string(),
        @r#"{"code":"positive","kind":"argument_out_of_range","message":"Value must be positive.","name":"n","value":"0"}"#
    );
}

#[test]
fn json_without_value_is_null() {
    let err = prop("Owner").present(None::<u8>).unwrap_err();
    let json = err.to_json_value();
    assert_eq!(json["kind"], "property_null");
    assert!(json["value"].is_null());
}

#[test]
fn serialize_skips_absent_value() {
    let err = prop("Owner").present(None::<u8>).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["site"], "property");
    assert_eq!(json["failure"], "null");
    assert!(json.get("value").is_none());
}
