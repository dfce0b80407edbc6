use super::*;
use crate::cast::cast;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn raw(value: &Value) -> i64 {
    cast::<kind::Int>(value).unwrap().raw()
}

#[test]
fn arithmetic() {
    let a = Value::int(7);
    let b = Value::int(2);
    assert_eq!(raw(&a.binary_add(&b).unwrap()), 9);
    assert_eq!(raw(&a.binary_sub(&b).unwrap()), 5);
    assert_eq!(raw(&a.binary_multiply(&b).unwrap()), 14);
}

#[test]
fn true_division_yields_float() {
    let q = Value::int(7).binary_divide(&Value::int(2)).unwrap();
    assert_eq!(q, Value::float(3.5));
    let inf = Value::int(1).binary_divide(&Value::int(0)).unwrap();
    assert_eq!(inf.to_string(), "inf");
}

#[test]
fn integer_division_and_modulo_truncate() {
    assert_eq!(Value::int(7).binary_int_divide(&Value::int(2)).unwrap(), Value::int(3));
    assert_eq!(Value::int(7).binary_modulo(&Value::int(2)).unwrap(), Value::int(1));
    assert_eq!(Value::int(-7).binary_int_divide(&Value::int(2)).unwrap(), Value::int(-3));
    assert_eq!(Value::int(-7).binary_modulo(&Value::int(2)).unwrap(), Value::int(-1));
    assert_eq!(Value::int(7).binary_modulo(&Value::int(-2)).unwrap(), Value::int(1));
}

#[test]
fn zero_divisor_fails() {
    let err = Value::int(1).binary_int_divide(&Value::int(0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    let err = Value::int(1).binary_modulo(&Value::int(0)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
}

#[test]
fn overflow_fails() {
    let max = Value::int(i64::MAX);
    let min = Value::int(i64::MIN);
    let one = Value::int(1);
    let err = max.binary_add(&one).unwrap_err();
    assert_eq!(err.message, "integer overflow in addition");
    assert!(min.binary_sub(&one).is_err());
    assert!(max.binary_multiply(&Value::int(2)).is_err());
    assert!(min.unary_minus().is_err());
    assert!(min.binary_int_divide(&Value::int(-1)).is_err());
}

#[test]
fn unary_operators() {
    assert_eq!(Value::int(5).unary_plus().unwrap(), Value::int(5));
    assert_eq!(Value::int(5).unary_minus().unwrap(), Value::int(-5));
    assert_eq!(Value::int(0).unary_complement().unwrap(), Value::int(-1));
    assert!(Value::int(1).unary_negate().is_err());
}

#[test]
fn unary_plus_returns_a_fresh_object() {
    let n = Value::int(5);
    assert!(!n.unary_plus().unwrap().ptr_eq(&n));
}

#[test]
fn comparisons_return_singletons() {
    let t = Value::bool(true);
    let f = Value::bool(false);
    let a = Value::int(1);
    let b = Value::int(2);
    assert!(a.binary_less(&b).unwrap().ptr_eq(&t));
    assert!(a.binary_greater(&b).unwrap().ptr_eq(&f));
    assert!(a.binary_less_equals(&a).unwrap().ptr_eq(&t));
    assert!(a.binary_greater_equals(&b).unwrap().ptr_eq(&f));
    assert!(a.binary_equals(&Value::int(1)).unwrap().ptr_eq(&t));
    assert!(a.binary_not_equals(&Value::int(1)).unwrap().ptr_eq(&f));
}

#[test]
fn ranges_are_unimplemented() {
    let err = Value::int(1).binary_range(&Value::int(3)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnimplementedFeature {
            feature: "ranges".to_string()
        }
    );
    assert!(Value::int(1).binary_incrange(&Value::int(3)).is_err());
}

#[test]
fn assign_mutates_every_holder() {
    let x = Value::int(40);
    let alias = x.clone();
    let result = x.assign_plus(&Value::int(2)).unwrap();
    assert!(result.ptr_eq(&Value::none()));
    assert_eq!(raw(&alias), 42);
}

#[test]
fn assign_with_self() {
    let x = Value::int(21);
    x.assign_plus(&x).unwrap();
    assert_eq!(raw(&x), 42);
}

#[test]
fn failed_assign_leaves_receiver_unchanged() {
    let x = Value::int(i64::MAX);
    assert!(x.assign_plus(&Value::int(1)).is_err());
    assert_eq!(raw(&x), i64::MAX);
    let y = Value::int(9);
    assert!(y.assign_modulo(&Value::int(0)).is_err());
    assert_eq!(raw(&y), 9);
}

#[test]
fn to_string_is_decimal() {
    assert_eq!(Value::int(-5).to_string(), "-5");
    assert_eq!(
        crate::dispatch::to_display_string(&Value::int(i64::MIN)).unwrap(),
        "-9223372036854775808"
    );
}

#[test]
fn table_contents() {
    let table = table();
    for name in [member::UNARY_NEGATE, member::ASSIGN_DIVIDE, member::AND] {
        assert!(!table.contains(name), "{name}");
    }
    assert_eq!(table.len(), 23);
}
