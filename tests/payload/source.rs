use checked_rail::FailureSource;
use std::borrow::Cow;
use std::io;

#[test]
fn message_source_renders_verbatim() {
    let static_msg = FailureSource::from("timed out");
    assert!(!static_msg.is_fault());
    assert_eq!(static_msg.detail(), "timed out");
    assert!(matches!(static_msg, FailureSource::Message(Cow::Borrowed(_))));

    let owned = FailureSource::from(format!("retry {}", 3));
    assert_eq!(owned.to_string(), "retry 3");
    assert!(owned.as_fault().is_none());
}

#[test]
fn fault_source_renders_display_of_fault() {
    let fault = io::Error::new(io::ErrorKind::TimedOut, "socket timed out");
    let source = FailureSource::fault(fault);

    assert!(source.is_fault());
    assert_eq!(source.detail(), "socket timed out");
    assert_eq!(source.as_fault().unwrap().to_string(), "socket timed out");
}

#[test]
fn explain_as_prefixes_category() {
    let source = FailureSource::message("eof");
    assert_eq!(source.explain_as("Json Parse Error"), "Json Parse Error: eof");
}

#[test]
fn boxed_fault_converts_into_source() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "nope".parse::<u8>().unwrap_err().into();
    let source = FailureSource::from(boxed);
    assert!(source.is_fault());
}

#[test]
fn debug_names_the_shape() {
    assert_eq!(format!("{:?}", FailureSource::from("m")), "Message(\"m\")");
    let fault = FailureSource::fault(io::Error::new(io::ErrorKind::Other, "x"));
    assert!(format!("{fault:?}").starts_with("Fault("));
}
