use checked_rail::Checked;
use std::cell::Cell;

#[test]
fn map_transforms_ok_and_carries_err() {
    assert_eq!(Checked::<i32, &str>::success(4).map(|x| x + 1), Checked::Ok(5));
    assert_eq!(Checked::<i32, &str>::failure("e").map(|x| x + 1), Checked::Err("e"));
}

#[test]
fn map_err_transforms_err_exactly_once() {
    let calls = Cell::new(0);
    let coded = Checked::<(), i32>::failure(13).map_err(|x| {
        calls.set(calls.get() + 1);
        format!("code:{x}")
    });
    assert_eq!(coded, Checked::Err("code:13".to_string()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn map_err_leaves_ok_untouched() {
    let calls = Cell::new(0);
    let ok = Checked::<i32, i32>::success(5).map_err(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });
    assert_eq!(ok, Checked::Ok(5));
    assert_eq!(calls.get(), 0);
}

#[test]
fn if_ok_runs_only_on_ok() {
    let calls = Cell::new(0);
    let bump = |x: i32| {
        calls.set(calls.get() + 1);
        x * 10
    };

    assert_eq!(Checked::<i32, &str>::success(2).if_ok(bump), Some(20));
    assert_eq!(calls.get(), 1);

    assert_eq!(Checked::<i32, &str>::failure("e").if_ok(bump), None);
    assert_eq!(calls.get(), 1);
}

#[test]
fn if_err_runs_only_on_err() {
    let calls = Cell::new(0);
    let bump = |e: &str| {
        calls.set(calls.get() + 1);
        e.to_uppercase()
    };

    assert_eq!(Checked::<i32, &str>::success(2).if_err(bump), None);
    assert_eq!(calls.get(), 0);

    assert_eq!(Checked::<i32, &str>::failure("e").if_err(bump), Some("E".to_string()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn and_then_changes_success_type() {
    let len: Checked<usize, &str> =
        Checked::success("four").and_then(|s: &str| Checked::success(s.len()));
    assert_eq!(len, Checked::Ok(4));
}

#[test]
fn and_then_skips_continuation_on_err() {
    let calls = Cell::new(0);
    let out: Checked<i32, &str> = Checked::failure("stop").and_then(|x: i32| {
        calls.set(calls.get() + 1);
        Checked::success(x)
    });
    assert_eq!(out, Checked::Err("stop"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_changes_failure_type() {
    let out: Checked<i32, String> =
        Checked::<i32, i32>::failure(3).or_else(|code| Checked::failure(format!("E{code}")));
    assert_eq!(out, Checked::Err("E3".to_string()));
}

#[test]
fn or_else_skips_recovery_on_ok() {
    let calls = Cell::new(0);
    let out: Checked<i32, ()> = Checked::<i32, &str>::success(1).or_else(|_| {
        calls.set(calls.get() + 1);
        Checked::success(0)
    });
    assert_eq!(out, Checked::Ok(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn carriers_build_the_matching_variant() {
    use checked_rail::{Failure, Success};

    assert_eq!(Checked::<_, ()>::from(Success::new(1)), Checked::success(1));
    assert_eq!(Checked::<(), _>::from(Failure::new("e")), Checked::failure("e"));
}
