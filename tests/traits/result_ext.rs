use checked_rail::traits::ResultExt;
use checked_rail::{attempt, failure_payload, Checked, FailurePayload};
use std::num::ParseIntError;

failure_payload! {
    pub struct ConfigError => "Config Error";
}

#[test]
fn into_checked_keeps_error_type() {
    assert_eq!(Ok::<i32, &str>(1).into_checked(), Checked::Ok(1));
    assert_eq!(Err::<i32, &str>("e").into_checked(), Checked::Err("e"));
}

#[test]
fn checked_as_wraps_fault_into_payload() {
    let port: Checked<u16, ConfigError> = "x80".parse::<u16>().checked_as();
    let err = port.unwrap_err();

    assert_eq!(err.explain(), "Config Error: invalid digit found in string");
    let fault = err.failure_source().as_fault().unwrap();
    assert!(fault.downcast_ref::<ParseIntError>().is_some());
}

#[test]
fn checked_as_passes_success_through() {
    let port: Checked<u16, ConfigError> = "8080".parse::<u16>().checked_as();
    assert_eq!(port.ok(), Some(8080));
}

#[test]
fn attempt_runs_closure_once() {
    let mut runs = 0;
    let value: Checked<i32, ConfigError> = attempt(|| {
        runs += 1;
        "-4".parse::<i32>()
    });

    assert_eq!(runs, 1);
    assert_eq!(value.unwrap_explained(), -4);
}

#[test]
fn attempt_wraps_failure() {
    let value: Checked<u8, ConfigError> = attempt(|| "300".parse::<u8>());
    assert_eq!(
        value.explain_err().as_deref(),
        Some("Config Error: number too large to fit in target type")
    );
}
