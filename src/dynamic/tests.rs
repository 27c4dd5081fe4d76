#![cfg(test)]

use std::collections::HashSet;

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::collections::set::unique_with_hasher;
use crate::collections::slice::{
    CapacityOverflowError, IndexOutOfRangeError, Position, RangeError,
};
use crate::util::hash::{hash_stream, Colliding};

fn strings(items: &[&str]) -> Value {
    Value::of(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
}

fn ints(items: &[i64]) -> Value {
    Value::of(items.to_vec())
}

fn map_of(entries: &[(&str, i64)]) -> Value {
    let mut map = DynMap::new(Kind::Str, Kind::Int);
    for (key, value) in entries {
        map.insert(Value::from(*key), Value::Int(*value)).expect("matching kinds");
    }
    Value::Map(map)
}

fn any_slice(items: Vec<Value>) -> Value {
    Value::Slice(DynSlice::from_values(Kind::Any, items).expect("any accepts everything"))
}

fn to_ints(value: &Value) -> Vec<i64> {
    value.to_typed().expect("slice of int")
}

fn to_strings(value: &Value) -> Vec<String> {
    value.to_typed().expect("slice of str")
}

#[test]
fn test_kinds_and_zero_values() {
    assert_eq!(Value::of(1_u8).kind(), Kind::Uint);
    assert_eq!(Value::of(vec![1_i32]).kind(), Kind::slice(Kind::Int));
    assert_eq!(Value::of(Box::new(1.5_f64)).kind(), Kind::ptr(Kind::Float));
    assert_eq!(Value::Nil.kind(), Kind::Any);

    assert_eq!(Kind::Str.zero(), Value::from(""));
    assert_eq!(Kind::Any.zero(), Value::Nil);
    assert!(matches!(Kind::ptr(Kind::Int).zero(), Value::Ptr(ptr) if ptr.is_nil()));
    assert_eq!(Kind::slice(Kind::Bool).zero().kind(), Kind::slice(Kind::Bool));

    assert_eq!(Kind::map(Kind::Str, Kind::ptr(Kind::Int)).to_string(), "map[str]*int");
    assert_eq!(Kind::slice(Kind::Any).to_string(), "[any]");
}

#[test]
fn test_deep_equality() {
    assert_eq!(ints(&[1, 2]), ints(&[1, 2]));
    assert_ne!(ints(&[1, 2]), ints(&[2, 1]));
    assert_ne!(
        Value::Int(1),
        Value::Uint(1),
        "Values of different kinds should never be equal."
    );
    assert_eq!(Value::of(Box::new(3_i64)), Value::of(Box::new(3_i64)), "Pointers compare targets.");
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_eq!(Value::Float(0.0), Value::Float(-0.0));

    let set: HashSet<Value> = [Value::Float(0.0), Value::Float(-0.0), Value::Float(f64::NAN)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2, "Hashing should agree with equality.");
}

#[test]
fn test_hashing_agrees_with_equality() {
    assert_eq!(hash_stream(&Value::Float(0.0)), hash_stream(&Value::Float(-0.0)));
    assert_eq!(
        hash_stream(&Value::Float(f64::NAN)),
        hash_stream(&Value::Float(-f64::NAN)),
        "Every NaN should hash the same way."
    );
    assert_ne!(hash_stream(&Value::Int(1)), hash_stream(&Value::Uint(1)));

    let forwards = map_of(&[("x", 1), ("y", 2), ("z", 3)]);
    let backwards = map_of(&[("z", 3), ("y", 2), ("x", 1)]);
    assert_eq!(forwards, backwards);
    assert_eq!(
        hash_stream(&forwards),
        hash_stream(&backwards),
        "Maps shouldn't hash differently because of insertion order."
    );
}

#[test]
fn test_unique_values_under_collisions() {
    let items = [
        Value::Float(0.0),
        Value::Float(-0.0),
        Value::Float(f64::NAN),
        Value::Float(f64::NAN),
        Value::Int(0),
        Value::Uint(0),
        Value::from("0"),
        Value::Nil,
        Value::Unit,
        Value::of(Box::new(0_i64)),
        Value::Ptr(DynPtr::nil(Kind::Int)),
        map_of(&[("x", 1)]),
        map_of(&[("x", 2)]),
        map_of(&[("x", 1)]),
    ];

    let set = unique_with_hasher(&items, Colliding);
    assert_eq!(
        set.len(),
        11,
        "With every hash equal, only equality should decide which values are duplicates."
    );
    assert!(set.contains(&Value::Float(-0.0)));
    assert!(set.contains(&map_of(&[("x", 2)])));
    assert!(!set.contains(&map_of(&[("y", 1)])));
}

#[test]
fn test_introspection() {
    let mut container = strings(&["a", "b"]);

    assert_eq!(
        Value::Int(1).as_slice(),
        Err(InvalidKindError { expected: Shape::Slice, found: Kind::Int })
    );
    assert!(container.as_map().is_err());

    let slice = container.as_slice_mut().expect("a slice");
    assert_eq!(*slice.elem(), Kind::Str);
    assert_eq!(slice.len(), 2);
    assert_eq!(slice.get(1), Some(&Value::from("b")));
    assert_eq!(slice.get(2), None);

    assert_eq!(slice.set(0, Value::from("z")), Ok(Value::from("a")));
    assert!(slice.set(0, Value::Int(1)).unwrap_err().is_type_mismatch());
    assert_eq!(
        slice.set(5, Value::from("z")),
        Err(SetError::IndexOutOfRange(IndexOutOfRangeError { position: Position::Index(5), len: 2 }))
    );
    assert!(slice.push(Value::Bool(true)).is_err());
    assert_eq!(slice.len(), 2, "A rejected push shouldn't change the length.");

    let like = slice.make_like(3);
    assert_eq!(*like.elem(), Kind::Str);
    assert_eq!(like.to_typed::<String>().expect("strings"), ["", "", ""]);

    assert!(slice.to_typed::<i64>().is_err());
}

#[test]
fn test_typed_round_trip_limits() {
    let wide = DynSlice::of(vec![300_i64, 1]);
    assert!(
        wide.to_typed::<i8>().is_err(),
        "Values that don't fit in the target type should be rejected."
    );
    assert_eq!(wide.to_typed::<i16>().expect("fits"), [300, 1]);
}

#[test]
fn test_index_and_contains() {
    let container = strings(&["a", "b", "c", "b"]);

    assert_eq!(index(&container, &Value::from("b")), Ok(Some(1)));
    assert_eq!(index(&container, &Value::from("x")), Ok(None));
    assert_eq!(contains(&container, &Value::from("c")), Ok(true));
    assert_eq!(contains(&container, &Value::from("x")), Ok(false));

    assert_eq!(
        index(&container, &Value::Int(1)),
        Err(SearchError::TypeMismatch(TypeMismatchError { expected: Kind::Str, found: Kind::Int }))
    );
    assert!(index(&Value::from("abc"), &Value::from("a")).unwrap_err().is_invalid_kind());

    let nested = Value::of(vec![vec![1_i64, 2], vec![3], vec![1, 2]]);
    assert_eq!(
        index(&nested, &ints(&[3])),
        Ok(Some(1)),
        "Nested slices should be compared deeply."
    );

    let mixed = any_slice(vec![Value::Int(1), Value::from("b"), Value::Nil]);
    assert_eq!(index(&mixed, &Value::from("b")), Ok(Some(1)));
    assert_eq!(index(&mixed, &Value::Nil), Ok(Some(2)));
    assert_eq!(index(&mixed, &Value::Uint(1)), Ok(None), "Kinds still matter for equality.");

    let floats = Value::of(vec![1.0_f64, f64::NAN, -0.0]);
    assert_eq!(index(&floats, &Value::Float(f64::NAN)), Ok(Some(1)));
    assert_eq!(index(&floats, &Value::Float(0.0)), Ok(Some(2)));
}

#[test]
fn test_delete_at() {
    let container = strings(&["1", "2", "3"]);

    assert_eq!(to_strings(&delete_at(&container, 2).expect("in range")), ["1", "2"]);
    assert_eq!(to_strings(&delete_at(&container, 1).expect("in range")), ["1", "3"]);
    assert_eq!(to_strings(&container), ["1", "2", "3"], "The input should be left alone.");

    assert_eq!(
        delete_at(&container, 3),
        Err(SpliceError::Range(RangeError::IndexOutOfRange(IndexOutOfRangeError {
            position: Position::Index(3),
            len: 3,
        })))
    );
    assert!(matches!(
        delete_at(&container, -1),
        Err(SpliceError::Range(RangeError::IndexNegative(_)))
    ));
    assert!(delete_at(&Value::Nil, 0).unwrap_err().is_invalid_kind());
}

#[rstest]
#[case(1, 3, &[0, 3, 4])]
#[case(0, 5, &[])]
#[case(3, 3, &[0, 1, 2, 3, 4])]
#[case(5, 5, &[0, 1, 2, 3, 4])]
fn test_cut(#[case] i: i64, #[case] j: i64, #[case] expected: &[i64]) {
    let container = ints(&[0, 1, 2, 3, 4]);
    let result = cut(&container, i, j).expect("valid range");

    assert_eq!(result.kind(), Kind::slice(Kind::Int), "The element kind should be kept.");
    assert_eq!(to_ints(&result), expected);
}

#[rstest]
#[case(3, 1, "range_inverted")]
#[case(-3, -1, "index_negative")]
#[case(-1, 2, "index_negative")]
#[case(5, 6, "index_out_of_range")]
#[case(2, 6, "index_out_of_range")]
// An inverted range takes precedence over a negative index.
#[case(1, -1, "range_inverted")]
fn test_cut_errors(#[case] i: i64, #[case] j: i64, #[case] expected: &str) {
    let container = ints(&[0, 1, 2, 3, 4]);
    let error = match cut(&container, i, j) {
        Err(SpliceError::Range(error)) => error,
        other => panic!("expected a range error, got {:?}", other),
    };

    let matched = match expected {
        "range_inverted" => error.is_range_inverted(),
        "index_negative" => error.is_index_negative(),
        "index_out_of_range" => error.is_index_out_of_range(),
        _ => unreachable!(),
    };
    assert!(matched, "cut({}, {}) gave {:?}", i, j, error);
}

#[test]
fn test_expand() {
    let container = strings(&["a", "b", "c"]);

    let expanded = expand(&container, 0, 6).expect("valid index");
    assert_eq!(to_strings(&expanded), ["", "", "", "", "", "", "a", "b", "c"]);

    let expanded = expand(&container, 2, 2).expect("valid index");
    assert_eq!(to_strings(&expanded), ["a", "b", "", "", "c"]);

    let pointers = Value::of(vec![Box::new(1_i64)]);
    let expanded = expand(&pointers, 0, 1).expect("valid index");
    let first = expanded.as_slice().expect("a slice")[0].clone();
    assert!(
        matches!(first, Value::Ptr(ptr) if ptr.is_nil() && *ptr.pointee() == Kind::Int),
        "The zero value of a pointer should be a nil pointer of the same kind."
    );

    assert!(matches!(
        expand(&container, 1, -1),
        Err(SpliceError::Range(RangeError::NegativeExpansion(_)))
    ));
    assert!(matches!(
        expand(&container, -1, -1),
        Err(SpliceError::Range(RangeError::IndexNegative(_))),
    ));
    assert!(matches!(
        expand(&container, 3, 1),
        Err(SpliceError::Range(RangeError::IndexOutOfRange(_)))
    ));
    assert!(expand(&Value::Int(0), 0, 1).unwrap_err().is_invalid_kind());

    assert!(
        matches!(
            expand(&container, 0, i64::MAX),
            Err(SpliceError::Range(RangeError::CapacityOverflow(CapacityOverflowError { len: 3, .. })))
        ),
        "A count too large to allocate should be reported, not abort."
    );
}

#[test]
fn test_retain_and_pop_where() {
    let container = strings(&["a", "b", "", "c"]);
    let kept = retain(&container, |v| *v != Value::from("")).expect("a slice");
    assert_eq!(to_strings(&kept), ["a", "b", "c"]);

    let numbers = ints(&[0, 0, 0, -1]);
    let (rest, popped) = pop_where(&numbers, |v| *v != Value::Int(0)).expect("a slice");
    assert_eq!(to_ints(&rest), [0, 0, 0]);
    assert_eq!(to_ints(&popped), [-1]);

    assert!(retain(&Value::Unit, |_| true).is_err());
}

#[test]
fn test_unique() {
    let set = unique(&strings(&["a", "b", "a"])).expect("a slice");

    assert_eq!(*set.key(), Kind::Str);
    assert_eq!(*set.value(), Kind::Unit);
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(&Value::from("a")), Some(&Value::Unit));
    assert!(set.contains_key(&Value::from("b")));

    assert_eq!(
        unique(&Value::Bool(true)),
        Err(InvalidKindError { expected: Shape::Slice, found: Kind::Bool })
    );
}

#[test]
fn test_unify() {
    let unified = unify(&strings(&["a", "b"]), &strings(&["b", "c", "a"])).expect("same kinds");
    let members: HashSet<String> = to_strings(&unified).into_iter().collect();
    assert_eq!(to_strings(&unified).len(), 3);
    assert_eq!(members, HashSet::from(["a", "b", "c"].map(String::from)));

    assert_eq!(
        unify(&Value::Int(1), &Value::Int(2)),
        Err(UnifyError::InvalidOperand(InvalidOperandError {
            operand: Operand::First,
            source: InvalidKindError { expected: Shape::Slice, found: Kind::Int },
        })),
        "The first operand should be checked first."
    );
    assert!(matches!(
        unify(&strings(&["a"]), &Value::Nil),
        Err(UnifyError::InvalidOperand(InvalidOperandError { operand: Operand::Second, .. }))
    ));
    assert_eq!(
        unify(&strings(&["a"]), &ints(&[1])),
        Err(UnifyError::TypeMismatch(TypeMismatchError {
            expected: Kind::Str,
            found: Kind::Int,
        }))
    );
}

#[test]
fn test_map_keys_and_any_slice() {
    let mut map = DynMap::new(Kind::Str, Kind::Int);
    map.insert(Value::from("x"), Value::Int(1)).expect("matching kinds");
    map.insert(Value::from("y"), Value::Int(2)).expect("matching kinds");
    assert!(map.insert(Value::Int(1), Value::Int(1)).is_err());

    let keys = map_keys(&Value::Map(map)).expect("a map");
    assert_eq!(*keys.elem(), Kind::Str);
    let keys: HashSet<String> = keys.to_typed::<String>().expect("strings").into_iter().collect();
    assert_eq!(keys, HashSet::from(["x".to_string(), "y".to_string()]));

    assert_eq!(
        map_keys(&ints(&[1])),
        Err(InvalidKindError { expected: Shape::Map, found: Kind::slice(Kind::Int) })
    );

    let any = to_any_slice(&ints(&[1, 2])).expect("a slice").expect("not nil");
    assert_eq!(*any.elem(), Kind::Any);
    assert_eq!(any.as_slice(), [Value::Int(1), Value::Int(2)]);
    assert_eq!(to_any_slice(&Value::Nil), Ok(None));
}

#[test]
fn test_sort_by_value() {
    let mut container = ints(&[3, 1, 2]);
    let less = DynFunc::from_less(|a: &i64, b: &i64| a < b);

    sort(&mut container, &less).expect("valid comparator");
    assert_eq!(to_ints(&container), [1, 2, 3]);

    sort(&mut container, &less).expect("valid comparator");
    assert_eq!(to_ints(&container), [1, 2, 3], "Sorting sorted input should change nothing.");

    let mut long = Value::of((0..100_i64).rev().collect::<Vec<_>>());
    sort(&mut long, &less).expect("valid comparator");
    assert_eq!(to_ints(&long), (0..100).collect::<Vec<_>>());
}

#[test]
fn test_sort_signature_errors() {
    let mut container = ints(&[3, 1, 2]);
    let body = |_: &[&Value]| vec![Value::Bool(false)];

    let three = DynFunc::new(Signature::new([Kind::Int, Kind::Int, Kind::Int], [Kind::Bool]), body);
    assert_eq!(
        sort(&mut container, &three),
        Err(SortError::Signature(SignatureError::Arity { found: 3 }))
    );

    let mismatched = DynFunc::new(Signature::new([Kind::Int, Kind::Uint], [Kind::Bool]), body);
    assert!(matches!(
        sort(&mut container, &mismatched),
        Err(SortError::Signature(SignatureError::ParamMismatch { .. }))
    ));

    let two_results =
        DynFunc::new(Signature::new([Kind::Int, Kind::Int], [Kind::Bool, Kind::Bool]), body);
    assert_eq!(
        sort(&mut container, &two_results),
        Err(SortError::Signature(SignatureError::ResultCount { found: 2 }))
    );

    let not_bool = DynFunc::new(Signature::new([Kind::Int, Kind::Int], [Kind::Int]), body);
    assert_eq!(
        sort(&mut container, &not_bool),
        Err(SortError::Signature(SignatureError::ResultKind { found: Kind::Int }))
    );

    assert_eq!(to_ints(&container), [3, 1, 2], "Rejected sorts shouldn't touch the container.");
    assert!(sort(&mut Value::Int(1), &three).unwrap_err().is_invalid_kind());
}

#[test]
fn test_sort_incompatible_elements() {
    let mut container = strings(&["b", "a"]);
    let less = DynFunc::from_less(|a: &i64, b: &i64| a < b);

    assert_eq!(
        sort(&mut container, &less),
        Err(SortError::ElementTypeIncompatible(ElementTypeIncompatibleError {
            param: Kind::Int,
            elem: Kind::Str,
            index: None,
        }))
    );

    let mut mixed = any_slice(vec![Value::Int(2), Value::from("x"), Value::Int(1)]);
    assert_eq!(
        sort(&mut mixed, &less),
        Err(SortError::ElementTypeIncompatible(ElementTypeIncompatibleError {
            param: Kind::Int,
            elem: Kind::Str,
            index: Some(1),
        })),
        "Elements of an any slice should be checked individually, before sorting."
    );
    assert_eq!(mixed.as_slice().expect("a slice")[0], Value::Int(2));
}

#[test]
fn test_sort_pointer_adjustment() {
    // Comparator takes pointers, elements are values.
    let mut values = ints(&[3, 1, 2]);
    let by_ptr = DynFunc::from_less(|a: &Box<i64>, b: &Box<i64>| a < b);
    let binding = ComparatorBinding::bind(values.as_slice().expect("a slice"), &by_ptr)
        .expect("compatible");
    assert_eq!(*binding.indirection(), Indirection::AddressOf);
    sort(&mut values, &by_ptr).expect("compatible");
    assert_eq!(to_ints(&values), [1, 2, 3]);

    // Comparator takes values, elements are pointers.
    let mut pointers = Value::of(vec![Box::new(3_i64), Box::new(1), Box::new(2)]);
    let by_value = DynFunc::from_less(|a: &i64, b: &i64| a < b);
    let binding = ComparatorBinding::bind(pointers.as_slice().expect("a slice"), &by_value)
        .expect("compatible");
    assert_eq!(*binding.indirection(), Indirection::Deref);
    sort(&mut pointers, &by_value).expect("compatible");
    assert_eq!(
        pointers.to_typed::<Vec<Box<i64>>>().expect("pointers"),
        [Box::new(1), Box::new(2), Box::new(3)]
    );
}

#[test]
fn test_sort_nil_pointers() {
    let items = [
        Value::of(Box::new(3_i64)),
        Value::Ptr(DynPtr::nil(Kind::Int)),
        Value::of(Box::new(-1_i64)),
        Value::of(Box::new(1_i64)),
    ];
    let mut pointers =
        Value::Slice(DynSlice::from_values(Kind::ptr(Kind::Int), items).expect("all *int"));

    sort(&mut pointers, &DynFunc::from_less(|a: &i64, b: &i64| a < b)).expect("compatible");
    let sorted = pointers.as_slice().expect("a slice");
    assert_eq!(sorted[0], Value::of(Box::new(-1_i64)));
    assert!(
        matches!(&sorted[1], Value::Ptr(ptr) if ptr.is_nil()),
        "A nil pointer should compare as the zero value of its pointee."
    );
    assert_eq!(sorted[2], Value::of(Box::new(1_i64)));
    assert_eq!(sorted[3], Value::of(Box::new(3_i64)));
}

#[test]
fn test_bind_erased_comparator() {
    let natural = DynFunc::natural_less();

    let container = ints(&[2, 1]);
    let binding = ComparatorBinding::bind(container.as_slice().expect("a slice"), &natural)
        .expect("any accepts everything");
    assert_eq!(*binding.param(), Kind::Any);
    assert_eq!(*binding.indirection(), Indirection::Erase);

    let mixed = any_slice(vec![Value::Int(1), Value::from("a")]);
    let binding = ComparatorBinding::bind(mixed.as_slice().expect("a slice"), &natural)
        .expect("any accepts everything");
    assert_eq!(*binding.indirection(), Indirection::PerElement);
}

#[test]
fn test_sort_natural_less_checks_elements() {
    let mut mixed = any_slice(vec![Value::Int(2), Value::from("a"), Value::Int(1)]);

    assert_eq!(
        sort(&mut mixed, &DynFunc::natural_less()),
        Err(SortError::ElementTypeIncompatible(ElementTypeIncompatibleError {
            param: Kind::Any,
            elem: Kind::Str,
            index: Some(1),
        })),
        "Sorting with the natural ordering should reject mixed classes like sort_natural does."
    );
    assert_eq!(
        mixed.as_slice().expect("a slice").as_slice(),
        [Value::Int(2), Value::from("a"), Value::Int(1)]
    );

    let less = DynFunc::natural_less();
    assert_eq!(
        less.call(&[&Value::Int(1), &Value::from("a")]),
        [Value::Bool(false)],
        "Called directly, incomparable arguments should compare as not less."
    );
}

#[test]
fn test_sort_any_elements() {
    let mut mixed = any_slice(vec![Value::Int(3), Value::of(Box::new(1_i64)), Value::Int(2)]);
    let less = DynFunc::from_less(|a: &i64, b: &i64| a < b);

    sort(&mut mixed, &less).expect("every element is an int or a pointer to one");
    let sorted = mixed.as_slice().expect("a slice");
    assert_eq!(sorted[0], Value::of(Box::new(1_i64)));
    assert_eq!(sorted[1], Value::Int(2));
    assert_eq!(sorted[2], Value::Int(3));

    let mut words = strings(&["pear", "fig", "apple"]);
    sort(&mut words, &DynFunc::natural_less()).expect("any accepts strings");
    assert_eq!(to_strings(&words), ["apple", "fig", "pear"]);
}

#[test]
fn test_sort_natural() {
    let mut numbers = any_slice(vec![Value::Uint(5), Value::Int(-2), Value::Float(0.5)]);
    sort_natural(&mut numbers).expect("all numbers");
    assert_eq!(
        numbers.as_slice().expect("a slice").as_slice(),
        [Value::Int(-2), Value::Float(0.5), Value::Uint(5)]
    );

    let mut bools = Value::of(vec![true, false]);
    sort_natural(&mut bools).expect("all bools");
    assert_eq!(bools.to_typed::<Vec<bool>>(), Some(vec![false, true]));

    let mut mixed = any_slice(vec![Value::Int(1), Value::from("a")]);
    assert!(matches!(
        sort_natural(&mut mixed),
        Err(SortError::ElementTypeIncompatible(ElementTypeIncompatibleError { index: Some(1), .. }))
    ));

    let mut units = Value::of(vec![(), ()]);
    assert!(sort_natural(&mut units).unwrap_err().is_element_type_incompatible());
}

#[rstest]
#[case(Value::Bool(false), Value::Bool(true), true)]
#[case(Value::Bool(true), Value::Bool(false), false)]
#[case(Value::from("a"), Value::from("b"), true)]
#[case(Value::Int(-1), Value::Uint(0), true)]
#[case(Value::Uint(u64::MAX), Value::Int(i64::MAX), false)]
#[case(Value::Float(1.5), Value::Int(2), true)]
#[case(Value::Uint(3), Value::Float(2.5), false)]
#[case(Value::Float(f64::NAN), Value::Float(1.0), false)]
fn test_natural_less(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
    assert_eq!(compare::less(&a, &b), Ok(expected));
}

#[test]
fn test_natural_less_incomparable() {
    assert_eq!(
        compare::less(&Value::Int(1), &Value::Nil),
        Err(IncomparableError { left: Kind::Int, right: Kind::Any })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InvalidKindError { expected: Shape::Slice, found: Kind::Int }.to_string(),
        "not a slice: int"
    );
    assert_eq!(
        SignatureError::Arity { found: 3 }.to_string(),
        "comparator must take two arguments, got 3"
    );
    assert_eq!(
        SpliceError::from(RangeError::from(IndexOutOfRangeError {
            position: Position::Range(2, 9),
            len: 3,
        }))
        .to_string(),
        "index out of range [2:9] with length 3"
    );
}

proptest! {
    #[test]
    fn prop_sort_orders_ints(items in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut container = ints(&items);
        sort(&mut container, &DynFunc::from_less(|a: &i64, b: &i64| a < b)).expect("valid");

        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(to_ints(&container), expected);
    }

    #[test]
    fn prop_unify_is_deduplicated_union(
        a in prop::collection::vec(0_i64..10, 0..20),
        b in prop::collection::vec(0_i64..10, 0..20),
    ) {
        let unified = to_ints(&unify(&ints(&a), &ints(&b)).expect("same kinds"));
        let members: HashSet<i64> = unified.iter().copied().collect();

        prop_assert_eq!(members.len(), unified.len());
        prop_assert!(a.iter().chain(&b).all(|item| members.contains(item)));
        prop_assert!(unified.iter().all(|item| a.contains(item) || b.contains(item)));
    }

    #[test]
    fn prop_cut_then_expand_restores_len(
        items in prop::collection::vec(any::<i64>(), 1..40),
        a in 0_usize..40,
        b in 0_usize..40,
    ) {
        let len = items.len();
        let (i, j) = ((a % len).min(b % len), (a % len).max(b % len));
        let container = ints(&items);

        let cut_items = cut(&container, i as i64, j as i64).expect("in bounds");
        let restored = expand(&cut_items, i as i64, (j - i) as i64).expect("i is still in bounds");
        prop_assert_eq!(restored.as_slice().expect("a slice").len(), len);
    }

    #[test]
    fn prop_index_agrees_with_contains(items in prop::collection::vec(0_i64..6, 0..15), item in 0_i64..6) {
        let container = ints(&items);
        let item = Value::Int(item);
        let found = index(&container, &item).expect("matching kinds");
        prop_assert_eq!(found.is_none(), !contains(&container, &item).expect("matching kinds"));
    }
}
