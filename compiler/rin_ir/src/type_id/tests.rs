use super::*;

#[test]
fn builtins_are_dense_and_ordered() {
    for (i, ty) in TypeId::BUILTINS.iter().enumerate() {
        assert_eq!(ty.index(), i);
        assert!(ty.is_builtin());
    }
    assert_eq!(TypeId::BUILTINS.len(), TypeId::FIRST_DECLARED as usize);
}

#[test]
fn declared_ids_are_not_builtin() {
    let declared = TypeId::from_raw(TypeId::FIRST_DECLARED);
    assert!(!declared.is_builtin());
    assert_eq!(declared.builtin_name(), None);
}

#[test]
fn builtin_names() {
    assert_eq!(TypeId::OBJECT.builtin_name(), Some("Object"));
    assert_eq!(TypeId::NONE.builtin_name(), Some("NoneType"));
    assert_eq!(TypeId::STR.builtin_name(), Some("Str"));
}

#[test]
fn debug_uses_builtin_name() {
    assert_eq!(format!("{:?}", TypeId::INT), "TypeId(Int)");
    assert_eq!(format!("{:?}", TypeId::from_raw(42)), "TypeId(42)");
}
