use super::*;
use crate::errors::EvalErrorKind;
use crate::types::registry;
use pretty_assertions::assert_eq;

#[test]
fn checked_cast_to_exact_type() {
    let s = cast::<kind::Str>(&Value::string("hello")).unwrap();
    assert_eq!(s.text(), "hello");
    assert_eq!(cast::<kind::Int>(&Value::int(-3)).unwrap().raw(), -3);
    assert!(cast::<kind::Bool>(&Value::bool(true)).unwrap().raw());
    assert!((cast::<kind::Float>(&Value::float(0.5)).unwrap().raw() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn checked_cast_rejects_other_types() {
    let err = cast::<kind::Str>(&Value::int(1)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidCast {
            from: "Int".to_string(),
            to: "Str".to_string(),
        }
    );
    assert!(cast::<kind::Int>(&Value::float(1.0)).is_err());
    assert!(cast::<kind::NoneType>(&Value::bool(false)).is_err());
}

#[test]
fn everything_casts_to_object() {
    for value in [Value::none(), Value::int(1), Value::string("x")] {
        let typed = cast::<kind::Object>(&value).unwrap();
        assert!(typed.value().ptr_eq(&value));
    }
}

#[test]
fn checked_cast_accepts_subtypes() {
    let ty = registry().declare("Percent", TypeId::INT).unwrap();
    let pct = Value::int(50).specialize(ty).unwrap();
    let typed = cast::<kind::Int>(&pct).unwrap();
    assert_eq!(typed.raw(), 50);
    assert_eq!(typed.type_name(), "Percent");
}

#[test]
fn cast_shares_the_object() {
    let n = Value::int(1);
    let typed = cast::<kind::Int>(&n).unwrap();
    typed.set(99);
    assert_eq!(n, Value::int(99));
    assert!(typed.clone().into_value().ptr_eq(&n));
}

#[test]
fn str_set_mutates_in_place() {
    let s = Value::string("a");
    cast::<kind::Str>(&s).unwrap().set("b");
    assert_eq!(s.to_string(), "b");
}

#[test]
fn function_and_type_accessors() {
    let f = FunctionValue::new(&[], |_| Ok(Value::none()));
    let value = Value::function(f.clone());
    assert!(cast::<kind::Function>(&value).unwrap().function().ptr_eq(&f));

    let ty = Value::type_object(TypeId::FLOAT);
    assert_eq!(cast::<kind::Type>(&ty).unwrap().target(), TypeId::FLOAT);
}

#[test]
fn unchecked_cast_reads_validated_values() {
    let n = Value::int(12);
    assert_eq!(cast_unchecked::<kind::Int>(&n).raw(), 12);
}

#[test]
#[should_panic(expected = "unchecked cast of Str to Int")]
#[cfg(debug_assertions)]
fn unchecked_cast_is_verified_in_debug_builds() {
    let _ = cast_unchecked::<kind::Int>(&Value::string("x"));
}
