use error_trail::{make_typed_error, ErrorChain, ErrorKind};

#[test]
fn test_kinds_serialize_as_names() {
    let json = serde_json::to_string(&ErrorKind::AlreadyExists).unwrap();
    assert_eq!(json, "\"already_exists\"");

    let kind: ErrorKind = serde_json::from_str("\"timed_out\"").unwrap();
    assert_eq!(kind, ErrorKind::TimedOut);

    assert!(serde_json::from_str::<ErrorKind>("\"no_such_kind\"").is_err());
}

#[test]
fn test_chains_keep_entry_order_through_json() {
    let mut err = make_typed_error!(ErrorKind::NullPointer, "x={}", 5);
    err.append(format_args!("validating input"));

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["entries"][0]["kind"], "null_pointer");
    assert_eq!(json["entries"][0]["message"], "x=5");
    assert_eq!(json["entries"][1]["kind"], "generic_error");

    let back: ErrorChain = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn test_empty_chains_are_rejected() {
    let err = serde_json::from_str::<ErrorChain>(r#"{"entries":[]}"#).unwrap_err();
    assert!(err.to_string().contains("at least one entry"), "{err}");
    assert!(serde_json::from_str::<ErrorChain>("{}").is_err());

    let one: ErrorChain =
        serde_json::from_str(r#"{"entries":[{"kind":"timed_out","message":"slow"}]}"#).unwrap();
    assert_eq!(one.first_kind(), ErrorKind::TimedOut);
}
