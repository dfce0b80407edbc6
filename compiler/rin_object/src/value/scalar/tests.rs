use super::*;

#[test]
fn set_and_get() {
    let cell = ScalarCell::new(1i64);
    cell.set(5);
    assert_eq!(cell.get(), 5);
}

#[test]
fn update_returns_closure_result() {
    let cell = ScalarCell::new(String::from("ab"));
    let len = cell.update(|s| {
        s.push('c');
        s.len()
    });
    assert_eq!(len, 3);
    assert_eq!(cell.with(String::clone), "abc");
}

#[test]
fn clone_is_an_independent_snapshot() {
    let cell = ScalarCell::new(2.5f64);
    let copy = cell.clone();
    cell.set(7.0);
    assert!((copy.get() - 2.5).abs() < f64::EPSILON);
    assert!((cell.get() - 7.0).abs() < f64::EPSILON);
}
