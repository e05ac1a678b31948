//! Algebraic laws every `Checked` chain obeys.

use checked_rail::Checked;

fn sq(x: i64) -> Checked<i64, i64> {
    Checked::success(x * x)
}

fn err(x: i64) -> Checked<i64, i64> {
    Checked::failure(x)
}

fn samples() -> Vec<Checked<i64, i64>> {
    vec![
        Checked::success(0),
        Checked::success(-7),
        Checked::success(12),
        Checked::failure(0),
        Checked::failure(3),
    ]
}

#[test]
fn map_identity_is_observationally_equal() {
    for r in samples() {
        assert_eq!(r.map(|x| x), r);
        assert_eq!(r.map_err(|e| e), r);
    }
}

#[test]
fn map_composes() {
    let f = |x: i64| x + 3;
    let g = |x: i64| x * 2;
    for r in samples() {
        assert_eq!(r.map(f).map(g), r.map(|x| g(f(x))));
    }
}

#[test]
fn and_then_short_circuits_on_first_err() {
    assert_eq!(Checked::success(2).and_then(sq).and_then(sq), Checked::Ok(16));
    assert_eq!(Checked::success(2).and_then(sq).and_then(err), Checked::Err(4));
    assert_eq!(Checked::success(2).and_then(err).and_then(sq), Checked::Err(2));
    assert_eq!(Checked::failure(3).and_then(sq).and_then(sq), Checked::Err(3));
}

#[test]
fn or_else_short_circuits_on_first_ok() {
    assert_eq!(Checked::success(2).or_else(sq).or_else(sq), Checked::Ok(2));
    assert_eq!(Checked::failure(3).or_else(sq).or_else(err), Checked::Ok(9));
    assert_eq!(Checked::failure(3).or_else(err).or_else(err), Checked::Err(3));
}

#[test]
fn and_then_left_and_right_identity() {
    for x in [-2, 0, 5] {
        assert_eq!(Checked::success(x).and_then(sq), sq(x));
    }
    for r in samples() {
        assert_eq!(r.and_then(Checked::success), r);
    }
}

#[test]
fn and_then_is_associative() {
    let plus_one = |x: i64| -> Checked<i64, i64> { Checked::success(x + 1) };
    for r in samples() {
        assert_eq!(
            r.and_then(sq).and_then(plus_one),
            r.and_then(|x| sq(x).and_then(plus_one))
        );
    }
}

#[test]
fn unwrap_or_ignores_payloads() {
    for r in samples() {
        let expected = match r {
            Checked::Ok(x) => x,
            Checked::Err(_) => 42,
        };
        assert_eq!(r.unwrap_or(42), expected);
    }
}
