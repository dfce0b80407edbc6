use super::*;
use crate::input::buffer_source;
use crate::output::{buffer_handler, silent_handler};
use pretty_assertions::assert_eq;
use rin_object::{construct, member, registry, EvalErrorKind, MethodTable};

fn captured() -> Runtime {
    Runtime::new(buffer_handler(), buffer_source(Vec::<String>::new()))
}

#[test]
fn print_writes_display_forms() {
    let rt = captured();
    rt.print_value(&Value::none()).unwrap();
    rt.print_value(&Value::bool(true)).unwrap();
    rt.print_value(&Value::int(-5)).unwrap();
    rt.print_value(&Value::float(2.5)).unwrap();
    rt.print_value(&Value::string("hi")).unwrap();
    assert_eq!(
        rt.print_handler().output(),
        "none\ntrue\n-5\n2.500000\nhi\n"
    );
}

#[test]
fn print_returns_none_singleton() {
    let rt = captured();
    let result = rt.print_value(&Value::int(1)).unwrap();
    assert!(result.ptr_eq(&Value::none()));
}

#[test]
fn print_rejects_non_str_to_string() {
    let ty = registry().declare("Fibber", TypeId::OBJECT).unwrap();
    registry()
        .install(
            ty,
            MethodTable::new().method(member::TO_STRING, &[], |_, _| Ok(Value::float(0.5))),
        )
        .unwrap();
    let rt = captured();
    let err = rt.print_value(&construct(ty, &[]).unwrap()).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidCast {
            from: "Float".to_string(),
            to: "Str".to_string(),
        }
    );
    assert_eq!(rt.print_handler().output(), "");
}

#[test]
fn print_falls_back_to_object_to_string() {
    let ty = registry().declare("Blank", TypeId::OBJECT).unwrap();
    let rt = captured();
    rt.print_value(&construct(ty, &[]).unwrap()).unwrap();
    assert_eq!(rt.print_handler().output(), "<Blank object>\n");
}

#[test]
fn silent_handler_discards() {
    let rt = Runtime::new(silent_handler(), buffer_source(Vec::<String>::new()));
    rt.print_value(&Value::string("gone")).unwrap();
    assert_eq!(rt.print_handler().output(), "");
}

#[test]
fn read_line_returns_fresh_str() {
    let rt = Runtime::new(buffer_handler(), buffer_source(["alpha", "beta\n"]));
    let first = rt.read_line().unwrap();
    assert_eq!(first.type_id(), TypeId::STR);
    assert_eq!(first, Value::string("alpha"));
    assert_eq!(rt.read_line().unwrap(), Value::string("beta"));
}

#[test]
fn read_line_at_eof_is_empty() {
    let rt = captured();
    assert_eq!(rt.read_line().unwrap(), Value::string(""));
}

#[test]
fn globals_expose_print_and_input() {
    let rt = Runtime::new(buffer_handler(), buffer_source(["typed"]));
    let globals = rt.globals();
    assert_eq!(globals.len(), 2);

    let input = &globals[&names().intern(INPUT)];
    let print = &globals[&names().intern(PRINT)];

    let line = input.call(&[]).unwrap();
    print.call(&[line]).unwrap();
    print.call(&[Value::bool(false)]).unwrap();
    assert_eq!(rt.print_handler().output(), "typed\nfalse\n");
}

#[test]
fn globals_check_arity() {
    let rt = captured();
    let globals = rt.globals();

    let err = globals[&names().intern(PRINT)].call(&[]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: PRINT.to_string(),
            expected: 1,
            got: 0,
        }
    );

    let err = globals[&names().intern(INPUT)]
        .call(&[Value::int(1)])
        .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: INPUT.to_string(),
            expected: 0,
            got: 1,
        }
    );
    assert_eq!(rt.print_handler().output(), "");
}

#[test]
fn globals_display_their_names() {
    let globals = captured().globals();
    assert_eq!(
        globals[&names().intern(PRINT)].to_string(),
        "<function print>"
    );
}
