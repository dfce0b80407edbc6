use super::*;
use pretty_assertions::assert_eq;

#[test]
fn division_by_zero_has_correct_kind() {
    let err = division_by_zero();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.message, "division by zero");
}

#[test]
fn modulo_by_zero_has_correct_kind() {
    let err = modulo_by_zero();
    assert_eq!(err.kind, EvalErrorKind::ModuloByZero);
    assert_eq!(err.message, "modulo by zero");
}

#[test]
fn integer_overflow_has_correct_kind() {
    let err = integer_overflow("addition");
    assert_eq!(
        err.kind,
        EvalErrorKind::IntegerOverflow {
            operation: "addition".to_string()
        }
    );
    assert_eq!(err.message, "integer overflow in addition");
}

#[test]
fn method_not_found_message() {
    let err = method_not_found("__add__", "Bool");
    assert_eq!(err.message, "no method '__add__' on type Bool");
}

#[test]
fn unsupported_operator_names_the_symbol() {
    let err = unsupported_operator("+", "__add__", "Bool");
    assert_eq!(
        err.kind,
        EvalErrorKind::MethodNotFound {
            method: "__add__".to_string(),
            type_name: "Bool".to_string(),
        }
    );
    assert_eq!(err.message, "unsupported operator '+' (__add__) on type Bool");
    assert!(!err.is_recoverable());
}

#[test]
fn not_callable_message() {
    let err = not_callable("answer", "Widget");
    assert_eq!(err.message, "member 'answer' of Widget is not callable");
}

#[test]
fn arity_mismatch_with_name() {
    let err = arity_mismatch("print", 1, 2);
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "print".to_string(),
            expected: 1,
            got: 2,
        }
    );
    assert_eq!(err.message, "print expects 1 argument, got 2");
}

#[test]
fn arity_mismatch_without_name() {
    let err = arity_mismatch("", 2, 0);
    assert_eq!(err.message, "expected 2 arguments, got 0");
}

#[test]
fn argument_type_mismatch_message() {
    let err = argument_type_mismatch("__add__", 0, "Int", "Str");
    assert_eq!(
        err.message,
        "__add__: argument 0 expects Int, got Str"
    );
    let anonymous = argument_type_mismatch("", 1, "Float", "Bool");
    assert_eq!(anonymous.message, "argument 1 expects Float, got Bool");
}

#[test]
fn invalid_cast_message() {
    assert_eq!(
        invalid_cast("Str", "Int").message,
        "invalid cast from Str to Int"
    );
}

#[test]
fn custom_error_uses_message_as_kind() {
    let err = EvalError::new("boom");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "boom".to_string()
        }
    );
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn io_errors_convert() {
    let err: EvalError = std::io::Error::other("pipe closed").into();
    assert_eq!(
        err.kind,
        EvalErrorKind::Io {
            message: "pipe closed".to_string()
        }
    );
}

#[test]
fn only_consistency_failures_are_unrecoverable() {
    assert!(!method_not_found("x", "Int").is_recoverable());
    assert!(!not_callable("x", "Int").is_recoverable());
    assert!(division_by_zero().is_recoverable());
    assert!(arity_mismatch("f", 1, 0).is_recoverable());
    assert!(invalid_cast("Str", "Int").is_recoverable());
    assert!(unimplemented_feature("ranges").is_recoverable());
    assert!(duplicate_type("Widget").is_recoverable());
}
