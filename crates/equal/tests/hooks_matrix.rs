//! Extension-hook matrix: tree-node fast path, symbol-keyed properties,
//! cross-realm classification, and the coercion fallback.

use std::rc::Rc;

use dynval::{Arr, ClassDef, ElemNode, Exotic, Obj, Sym, Value};
use dynval_equal::{equals, equals_with, EqualError, Options};
use serde_json::json;

fn j(value: serde_json::Value) -> Value {
    Value::from(value)
}

// ---------------------------------------------------------------------------
// Tree-node fast path
// ---------------------------------------------------------------------------

fn button(label: &str, on_click: Value) -> Value {
    let props = Obj::new();
    props.set("label", label);
    props.set("onClick", on_click);
    Value::Node(ElemNode::new(
        Value::str("button"),
        Value::Null,
        Value::Null,
        Value::Object(props),
    ))
}

#[test]
fn equal_nodes_with_recreated_handlers() {
    let a = button("ok", Value::function("() => log('click')"));
    let b = button("ok", Value::function("() => log('click')"));
    // The handlers are distinct allocations: only the source-text rule of
    // the tree-node mode can equate them.
    assert!(equals_with(&a, &b, Options::default().tree_node(true)).unwrap());
    assert!(!equals(&a, &b).unwrap());
}

#[test]
fn node_identity_slots_do_not_recurse() {
    let props = j(json!({}));
    let a = Value::Node(ElemNode::new(j(json!("a")), Value::Null, Value::Null, props.clone()));
    // Keys are identity-compared: two equal-but-distinct composite keys
    // fail the fast path.
    let key_a = j(json!({"k": 1}));
    let key_b = j(json!({"k": 1}));
    let b = Value::Node(ElemNode::new(j(json!("a")), key_a, Value::Null, props.clone()));
    let c = Value::Node(ElemNode::new(j(json!("a")), key_b, Value::Null, props));
    assert!(!equals_with(&b, &c, Options::default().tree_node(true)).unwrap());
    assert!(equals_with(&a, &a.clone(), Options::default().tree_node(true)).unwrap());
}

#[test]
fn node_children_recurse_through_props() {
    let child = |text: &str| {
        Value::Node(ElemNode::new(
            Value::str("span"),
            Value::Null,
            Value::Null,
            j(json!({ "text": text })),
        ))
    };
    let parent = |text: &str| {
        let props = Obj::new();
        props.set("children", Value::Array(Arr::from_values([child(text)])));
        Value::Node(ElemNode::new(
            Value::str("div"),
            Value::Null,
            Value::Null,
            Value::Object(props),
        ))
    };
    let options = Options::default().tree_node(true);
    assert!(equals_with(&parent("x"), &parent("x"), options).unwrap());
    assert!(!equals_with(&parent("x"), &parent("y"), options).unwrap());
}

#[test]
fn functions_compare_by_source_only_in_tree_node_mode() {
    let a = Value::function("x => x");
    let b = Value::function("x => x");
    let c = Value::function("x => x + 1");
    assert!(equals_with(&a, &b, Options::default().tree_node(true)).unwrap());
    assert!(!equals_with(&a, &c, Options::default().tree_node(true)).unwrap());
    assert!(!equals(&a, &b).unwrap());
}

// ---------------------------------------------------------------------------
// Symbol-keyed properties
// ---------------------------------------------------------------------------

#[test]
fn symbol_props_are_ignored_by_default() {
    let sym = Sym::new("b");
    let a = Obj::from_pairs([("a", 1)]);
    a.set_symbol(&sym, j(json!([2, 3])));
    let b = Obj::from_pairs([("a", 1)]);
    assert!(equals(&Value::Object(a), &Value::Object(b)).unwrap());
}

#[test]
fn shared_symbol_keys_compare_values() {
    let sym = Sym::new("b");
    let a = Obj::from_pairs([("a", 1)]);
    a.set_symbol(&sym, j(json!([2, 3])));
    let b = Obj::from_pairs([("a", 1)]);
    b.set_symbol(&sym, j(json!([2, 3])));
    let options = Options::default().include_symbol_keys(true);
    assert!(equals_with(&Value::Object(a.clone()), &Value::Object(b.clone()), options).unwrap());

    b.set_symbol(&sym, j(json!([2, 4])));
    assert!(!equals_with(&Value::Object(a), &Value::Object(b), options).unwrap());
}

#[test]
fn distinct_symbols_never_match() {
    let a = Obj::new();
    a.set_symbol(&Sym::new("k"), 1);
    let b = Obj::new();
    b.set_symbol(&Sym::new("k"), 1);
    let options = Options::default().include_symbol_keys(true);
    assert!(!equals_with(&Value::Object(a), &Value::Object(b), options).unwrap());
}

#[test]
fn symbol_count_must_match() {
    let sym = Sym::new("k");
    let a = Obj::new();
    a.set_symbol(&sym, 1);
    a.set_symbol(&Sym::new("extra"), 2);
    let b = Obj::new();
    b.set_symbol(&sym, 1);
    let options = Options::default().include_symbol_keys(true);
    assert!(!equals_with(&Value::Object(a), &Value::Object(b), options).unwrap());
}

// ---------------------------------------------------------------------------
// Cross-realm classification
// ---------------------------------------------------------------------------

#[test]
fn same_named_brands_unify_across_realms() {
    let a = Obj::with_class(ClassDef::new("Point"));
    a.set("x", 1);
    let b = Obj::with_class(ClassDef::new("Point"));
    b.set("x", 1);
    let pair = (Value::Object(a), Value::Object(b));
    assert!(!equals(&pair.0, &pair.1).unwrap());
    assert!(equals_with(&pair.0, &pair.1, Options::default().cross_realm(true)).unwrap());
}

#[test]
fn subclassed_array_unifies_with_plain_array() {
    let extended = Arr::with_class(ClassDef::new("ExtendedArray"));
    for value in [1, 2, 3] {
        extended.push(value);
    }
    let plain = Value::from(json!([1, 2, 3]));
    let extended = Value::Array(extended);
    assert!(!equals(&plain, &extended).unwrap());
    assert!(equals_with(&plain, &extended, Options::default().cross_realm(true)).unwrap());
}

#[test]
fn branded_instance_unifies_with_plain_object() {
    let instance = Obj::with_class(ClassDef::new("Foo"));
    instance.set("a", 1);
    let plain = j(json!({"a": 1}));
    let instance = Value::Object(instance);
    assert!(!equals(&plain, &instance).unwrap());
    assert!(equals_with(&plain, &instance, Options::default().cross_realm(true)).unwrap());
}

#[test]
fn cross_realm_still_requires_matching_tags() {
    let object = j(json!({"0": 1}));
    let array = j(json!([1]));
    assert!(!equals_with(&object, &array, Options::default().cross_realm(true)).unwrap());
}

// ---------------------------------------------------------------------------
// Coercion fallback
// ---------------------------------------------------------------------------

fn fallback() -> Options {
    Options::default().coercion_fallback(true)
}

#[test]
fn informative_value_of_resolves() {
    let a = Value::Exotic(Exotic::with_value("Temperature", Value::Number(21.5)));
    let b = Value::Exotic(Exotic::with_value("Temperature", Value::Number(21.5)));
    let c = Value::Exotic(Exotic::with_value("Temperature", Value::Number(19.0)));
    assert!(equals_with(&a, &b, fallback()).unwrap());
    assert!(!equals_with(&a, &c, fallback()).unwrap());
}

#[test]
fn composite_value_of_recurses() {
    let a = Value::Exotic(Exotic::with_value("Wrapper", j(json!([1, 2]))));
    let b = Value::Exotic(Exotic::with_value("Wrapper", j(json!([1, 2]))));
    assert!(equals_with(&a, &b, fallback()).unwrap());
}

#[test]
fn textual_conversion_is_string_equality() {
    let a = Value::Exotic(Exotic::with_text("URLSearchParams", "foo=1&bar=2"));
    let b = Value::Exotic(Exotic::with_text("URLSearchParams", "foo=1&bar=2"));
    let c = Value::Exotic(Exotic::with_text("URLSearchParams", "foo=1"));
    assert!(equals_with(&a, &b, fallback()).unwrap());
    assert!(!equals_with(&a, &c, fallback()).unwrap());
}

#[test]
fn one_sided_value_of_falls_through_to_text() {
    let a = Value::Exotic(Exotic::new(None, "Mixed", Some(Value::Number(1.0)), Some("same")));
    let b = Value::Exotic(Exotic::new(None, "Mixed", None, Some("same")));
    assert!(equals_with(&a, &b, fallback()).unwrap());
}

#[test]
fn uninformative_exotics_raise_even_with_the_hook() {
    let a = Value::Exotic(Exotic::opaque("custom"));
    let b = Value::Exotic(Exotic::opaque("custom"));
    let err = equals_with(&a, &b, fallback()).unwrap_err();
    assert!(matches!(err, EqualError::IncomparableType(tag) if tag == "custom"));
}

#[test]
fn hook_disabled_raises_immediately() {
    let a = Value::Exotic(Exotic::with_value("Wrapper", Value::Number(1.0)));
    let b = Value::Exotic(Exotic::with_value("Wrapper", Value::Number(1.0)));
    assert!(matches!(
        equals(&a, &b),
        Err(EqualError::IncomparableType(_))
    ));
}

#[test]
fn exotic_with_conversion_never_equals_the_bare_primitive() {
    let exotic = Value::Exotic(Exotic::with_text("Stringish", "a"));
    for primitive in [j(json!(true)), Value::Null, j(json!(1)), j(json!("a")), Value::Undefined] {
        assert!(!equals_with(&exotic, &primitive, fallback()).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Hook independence
// ---------------------------------------------------------------------------

#[test]
fn hooks_compose_without_interfering() {
    let sym = Sym::new("meta");
    let build = || {
        let props = Obj::from_pairs([("label", "ok")]);
        props.set_symbol(&sym, j(json!({"x": 1})));
        let cell = Obj::new();
        cell.set("node", button_like(Value::Object(props)));
        cell.set("self", Value::Object(cell.clone()));
        Value::Object(cell)
    };
    let options = Options::default()
        .circular(true)
        .tree_node(true)
        .include_symbol_keys(true);
    assert!(equals_with(&build(), &build(), options).unwrap());
}

fn button_like(props: Value) -> Value {
    Value::Node(ElemNode::new(
        Value::str("button"),
        Value::Null,
        Value::Null,
        props,
    ))
}

#[test]
fn node_generic_walk_sees_composite_keys_structurally() {
    // Without the fast path the key slot is walked recursively, so
    // equal-but-distinct composite keys pass.
    let a = Value::Node(ElemNode::new(
        Value::str("a"),
        j(json!({"k": 1})),
        Value::Null,
        j(json!({})),
    ));
    let b = Value::Node(ElemNode::new(
        Value::str("a"),
        j(json!({"k": 1})),
        Value::Null,
        j(json!({})),
    ));
    assert!(equals(&a, &b).unwrap());
    assert!(!equals_with(&a, &b, Options::default().tree_node(true)).unwrap());
}

#[test]
fn symbol_keys_shared_across_objects_compare() {
    // set_symbol keys by identity; sharing one symbol is what makes the
    // two objects' symbol props line up.
    let a = Obj::new();
    let b = Obj::new();
    let shared = Sym::new("s");
    a.set_symbol(&shared, 1);
    b.set_symbol(&shared, 1);
    assert!(Rc::ptr_eq(&a.sym_props()[0].0, &b.sym_props()[0].0));
    let options = Options::default().include_symbol_keys(true);
    assert!(equals_with(&Value::Object(a), &Value::Object(b), options).unwrap());
}
