use super::*;
use pretty_assertions::assert_eq;

#[test]
fn interning_is_idempotent() {
    let interner = StringInterner::new();
    let hello = interner.intern("hello");
    let world = interner.intern("world");

    assert_eq!(interner.intern("hello"), hello);
    assert_ne!(hello, world);
    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn empty_string_is_the_empty_name() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn member_names_are_preinterned() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(before, member::ALL.len() + 1);

    let add = interner.intern(member::ADD);
    assert_eq!(interner.len(), before);
    assert_eq!(interner.lookup(add), "__add__");
}

#[test]
fn get_never_inserts() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("not_interned_yet"), None);
    assert_eq!(interner.len(), before);

    let name = interner.intern("not_interned_yet");
    assert_eq!(interner.get("not_interned_yet"), Some(name));
    assert_eq!(interner.get(member::ADD), Some(interner.intern(member::ADD)));
    assert_eq!(interner.get(""), Some(Name::EMPTY));
}

#[test]
fn len_counts_distinct_strings() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("fresh_name");
    interner.intern("fresh_name");
    assert_eq!(interner.len(), before + 1);
    assert!(!interner.is_empty());
}

#[test]
fn concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let words: Vec<String> = (0..64).map(|i| format!("word{i}")).collect();
    let per_thread: Vec<Vec<Name>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| words.iter().map(|w| interner.intern(w)).collect::<Vec<Name>>()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });
    for names in &per_thread[1..] {
        assert_eq!(names, &per_thread[0]);
    }
    for (word, name) in words.iter().zip(&per_thread[0]) {
        assert_eq!(interner.lookup(*name), word);
    }
}

#[test]
fn global_interner_is_shared() {
    let a = names().intern("shared_member");
    assert_eq!(names().intern("shared_member"), a);
    assert_eq!(names().lookup(a), "shared_member");
}
