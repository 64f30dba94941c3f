//! Value domain tests: canonical representation, lengths, ordering.

use dotlog::foundation::{Table, TypeTag, Value};

#[test]
fn canonical_repr_is_unambiguous() {
    // Strings quoted, sets sigiled, one-tuples trailing-comma'd: each repr
    // identifies its variant.
    assert_eq!(Value::from("a").repr(), "\"a\"");
    assert_eq!(Value::set([Value::Int(1)]).repr(), "#{1}");
    assert_eq!(Value::map([]).repr(), "{}");
    assert_eq!(Value::tuple([Value::Int(1)]).repr(), "(1,)");
    assert_eq!(Value::list([Value::Int(1)]).repr(), "[1]");
}

#[test]
fn display_differs_from_repr_only_for_strings() {
    let s = Value::from("bare");
    assert_eq!(s.to_string(), "bare");
    assert_eq!(s.repr(), "\"bare\"");

    let n = Value::Int(5);
    assert_eq!(n.to_string(), n.repr());
}

#[test]
fn nested_values_render_canonically_inside_collections() {
    let nested = Value::list([
        Value::from("x"),
        Value::tuple([Value::Int(1), Value::Int(2)]),
    ]);
    assert_eq!(nested.repr(), "[\"x\", (1, 2)]");
}

#[test]
fn scalars_have_no_length() {
    assert_eq!(Value::Nil.length(), None);
    assert_eq!(Value::Bool(true).length(), None);
    assert_eq!(Value::Int(0).length(), None);
    assert_eq!(Value::Float(0.0).length(), None);
}

#[test]
fn collection_lengths() {
    assert_eq!(Value::from("héllo").length(), Some(5));
    assert_eq!(
        Value::map([(Value::Int(1), Value::Int(2))]).length(),
        Some(1)
    );
    assert_eq!(
        Value::from(Table::new(["a"]).with_row([Value::Int(1)])).length(),
        Some(1)
    );
}

#[test]
fn type_tag_matches_variant() {
    assert_eq!(Value::Int(1).type_tag(), TypeTag::Int);
    assert_eq!(Value::map([]).type_tag(), TypeTag::Map);
    assert_eq!(Value::from("s").type_tag(), TypeTag::Str);
}

#[test]
fn values_key_ordered_collections() {
    let map = Value::map([
        (Value::from("b"), Value::Int(2)),
        (Value::from("a"), Value::Int(1)),
    ]);
    // OrdMap iterates in key order regardless of insertion order.
    assert_eq!(map.repr(), "{\"a\": 1, \"b\": 2}");
}

#[test]
fn float_keys_are_totally_ordered() {
    let set = Value::set([
        Value::Float(f64::NAN),
        Value::Float(1.0),
        Value::Float(f64::NAN),
    ]);
    // NaN deduplicates under the total order.
    assert_eq!(set.length(), Some(2));
}
