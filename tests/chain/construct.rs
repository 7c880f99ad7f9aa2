use error_trail::{
    code_location, make_error, make_sized_error, make_typed_error, make_typed_sized_error,
    ErrorChain, ErrorKind, DEFAULT_MESSAGE_SIZE,
};

#[test]
fn test_basic_error_embeds_the_call_site() {
    let err = make_error!("{} - some problem: {}", code_location!(), "ops");
    let msg = err.first_message();

    assert_eq!(err.first_kind(), ErrorKind::GenericError);
    assert!(msg.contains("basic_error_embeds_the_call_site"));
    assert!(msg.contains("construct.rs"));
    assert!(msg.ends_with(" - some problem: ops"));
}

#[test]
fn test_sized_error_truncates_to_size_minus_one() {
    let err = make_sized_error!(18, "some problem: {}", "ops");
    assert_eq!(err.first_message(), "some problem: ops");
    assert_eq!(err.first_kind(), ErrorKind::GenericError);

    let err = make_sized_error!(8, "some problem: {}", "ops");
    assert_eq!(err.first_message(), "some pr");
    assert_eq!(err.first_kind(), ErrorKind::GenericError);
}

#[test]
fn test_sized_error_is_a_prefix_of_the_full_text() {
    let full = format!("value {} of {}", 123_456, "an unusually long description");
    for size in 0..full.len() + 4 {
        let err = make_sized_error!(size, "value {} of {}", 123_456, "an unusually long description");
        let msg = err.first_message();
        assert_eq!(err.len(), 1);
        assert!(msg.len() <= size.saturating_sub(1));
        assert!(full.starts_with(msg));
        if full.len() >= size.saturating_sub(1) {
            assert_eq!(msg.len(), size.saturating_sub(1));
        }
    }
}

#[test]
fn test_typed_error_keeps_its_kind() {
    let err = make_typed_error!(ErrorKind::NullPointer, "some problem: {}", "ops");
    assert_eq!(err.first_message(), "some problem: ops");
    assert_eq!(err.first_kind(), ErrorKind::NullPointer);

    let err = make_typed_error!(ErrorKind::AlreadyExists, "some problem: {}", "blah");
    assert_eq!(err.first_message(), "some problem: blah");
    assert_eq!(err.first_kind(), ErrorKind::AlreadyExists);

    let err = make_typed_error!(ErrorKind::NullPointer, "x={}", 5);
    assert_eq!(err.first_kind(), ErrorKind::NullPointer);
    assert_eq!(err.first_message(), "x=5");
}

#[test]
fn test_typed_sized_error_applies_both_policies() {
    let err = make_typed_sized_error!(ErrorKind::NullPointer, 18, "some problem: {}", "ops");
    assert_eq!(err.first_message(), "some problem: ops");
    assert_eq!(err.first_kind(), ErrorKind::NullPointer);

    let err = make_typed_sized_error!(ErrorKind::AlreadyExists, 8, "some problem: {}", "blah");
    assert_eq!(err.first_message(), "some pr");
    assert_eq!(err.first_kind(), ErrorKind::AlreadyExists);
}

#[test]
fn test_default_budget_caps_long_messages() {
    let long = "x".repeat(DEFAULT_MESSAGE_SIZE * 2);
    let err = make_error!("{long}");
    assert_eq!(err.first_message().len(), DEFAULT_MESSAGE_SIZE - 1);
}

#[test]
fn test_functions_and_macros_build_the_same_chain() {
    let from_fn = error_trail::make_typed_sized_error(
        ErrorKind::TimedOut,
        32,
        format_args!("waited {}ms", 250),
    );
    let from_macro = make_typed_sized_error!(ErrorKind::TimedOut, 32, "waited {}ms", 250);
    assert_eq!(from_fn, from_macro);

    let direct = ErrorChain::new(ErrorKind::TimedOut, 32, format_args!("waited {}ms", 250));
    assert_eq!(direct, from_macro);
}

#[test]
fn test_unallocatable_budget_yields_an_empty_chain() {
    let err = make_sized_error!(usize::MAX, "never stored");
    assert!(err.is_empty());
    assert_eq!(err.first_message(), "");
    assert_eq!(err.first_kind(), ErrorKind::GenericError);
}
