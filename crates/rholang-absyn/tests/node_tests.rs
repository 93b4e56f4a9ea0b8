//! Equality, hashing and immutability of the node family

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;
use rholang_absyn::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn samples() -> Vec<Value> {
    vec![
        Value::string("abc"),
        Value::string(""),
        Value::var("abc"),
        Value::char('a'),
        Value::int(0),
        Value::int(-1),
        Value::double(0.0),
        Value::double(-0.0),
        Value::double(f64::NAN),
        Value::bool(false),
        Value::tuple(vec![]),
        Value::array(vec![]),
        Value::tuple(vec![Value::string("abc")]),
        Value::array(vec![Value::string("abc")]),
        Value::array(vec![Value::tuple(vec![Value::int(1), Value::char('x')])]),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// Equality Laws
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_equality_is_reflexive() {
    for value in samples() {
        assert_eq!(value, value.clone());
        #[allow(clippy::eq_op)]
        let same = value == value;
        assert!(same, "{} not equal to itself", show(&value));
    }
}

#[test]
fn test_equality_is_symmetric() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(a == b, b == a, "{} vs {}", show(a), show(b));
        }
    }
}

#[test]
fn test_samples_are_pairwise_distinct() {
    let values = samples();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn test_equal_implies_equal_hash() {
    let left = samples();
    let right = samples();
    for (a, b) in left.iter().zip(&right) {
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b), "{}", show(a));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// String Literal Scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_independent_string_literals_are_equal() {
    let n1 = CString::new("abc");
    let n2 = CString::new("abc");

    assert_eq!(n1, n2);
    assert_eq!(hash_of(&n1), hash_of(&n2));
    assert!(!std::ptr::eq(&n1, &n2));
}

#[test]
fn test_string_literal_hash_is_payload_hash() {
    let node = CString::new("foo");
    assert_eq!(hash_of(&node), hash_of(&"foo".to_string()));
}

#[test]
fn test_empty_string_literal_is_distinct() {
    let empty = CString::new("");
    assert_eq!(empty.as_str(), "");
    assert_eq!(empty, CString::new(String::new()));
    for text in ["a", " ", "\0", "\"\""] {
        assert_ne!(empty, CString::new(text));
    }
}

#[test]
fn test_string_literal_never_equals_other_variant() {
    // Same payload, different production
    let n3 = Value::string("abc");
    let n4 = Value::var("abc");
    assert_ne!(n3, n4);

    let as_array = Value::array(vec![Value::string("abc")]);
    assert_ne!(n3, as_array);

    let chars = Value::tuple("abc".chars().map(Value::char).collect());
    assert_ne!(n3, chars);
}

#[test]
fn test_string_literal_is_immutable_through_accessors() {
    let node = CString::new("frozen");
    let text: &str = node.as_str();
    assert_eq!(text, "frozen");

    // Rewriting produces a new node and leaves the old one alone
    let replaced = CString::new(format!("{}!", node.as_str()));
    assert_eq!(node.as_str(), "frozen");
    assert_eq!(replaced.as_str(), "frozen!");
}

// ═══════════════════════════════════════════════════════════════════════
// Collections Keyed By Nodes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_nodes_as_set_members() {
    let mut set = HashSet::new();
    assert!(set.insert(Value::string("abc")));
    assert!(!set.insert(Value::string("abc")));
    assert!(set.insert(Value::var("abc")));
    assert!(set.insert(Value::string("")));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_subtrees_as_map_keys() {
    let mut map = HashMap::new();
    let key = Value::tuple(vec![Value::int(1), Value::double(2.5)]);
    map.insert(key, "cached");

    let rebuilt = Value::tuple(vec![Value::int(1), Value::double(2.5)]);
    assert_eq!(map.get(&rebuilt), Some(&"cached"));
    assert_eq!(map.get(&Value::tuple(vec![Value::int(1)])), None);
}

#[test]
fn test_nan_doubles_are_usable_as_keys() {
    let mut set = HashSet::new();
    set.insert(Value::double(f64::NAN));
    assert!(set.contains(&Value::double(f64::NAN)));
    assert!(!set.contains(&Value::double(0.0)));
}

// ═══════════════════════════════════════════════════════════════════════
// Accessors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_composite_accessors() {
    let tuple = ETuple::new(vec![Value::int(1), Value::string("a")]);
    assert_eq!(tuple.len(), 2);
    assert_eq!(tuple.elems()[0], Value::int(1));
    assert_eq!(
        tuple.into_elems(),
        vec![Value::int(1), Value::string("a")]
    );

    let vquant = VQuant::new(Quantity::from(QInt::new(9)));
    assert_eq!(vquant.quantity(), &Quantity::QInt(QInt::new(9)));

    let vcollect = VCollect::new(Collect::from(CString::new("s")));
    assert_eq!(vcollect.into_collect(), Collect::CString(CString::new("s")));

    let var = EVar::new("x");
    assert_eq!(var.name(), "x");
    assert_eq!(var.into_name(), "x");

    assert_eq!(EChar::new('q').value(), 'q');
}

// ═══════════════════════════════════════════════════════════════════════
// Sharing And Serialization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_nodes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<CString>();
    assert_send_sync::<Interner<Value>>();
    assert_send_sync::<Memo<Value, String>>();
}

#[test]
fn test_shared_tree_read_from_many_threads() {
    let tree = Value::array(vec![Value::string("abc"), Value::int(7)]);
    let expected = tree.to_string();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (tree.to_string(), census(&tree).len())))
            .collect();
        for handle in handles {
            let (printed, kinds) = handle.join().unwrap();
            assert_eq!(printed, expected);
            assert_eq!(kinds, 5);
        }
    });
}

#[test]
fn test_serde_json_shape() {
    let node = Value::string("abc");
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "VCollect": { "collect": { "CString": { "string": "abc" } } } })
    );
}

#[test]
fn test_serde_preserves_structure() {
    let tree = Value::tuple(vec![
        Value::string(""),
        Value::double(1.5),
        Value::array(vec![Value::var("x"), Value::char('c')]),
    ]);
    let json = serde_json::to_string(&tree).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert_eq!(hash_of(&back), hash_of(&tree));
}

#[test]
fn test_serde_preserves_special_doubles() {
    let specials = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0];
    for value in specials {
        let node = Value::double(value);
        let json = serde_json::to_string(&node).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node, "round trip of {:?} through {}", value, json);
        assert_eq!(hash_of(&back), hash_of(&node));
    }

    let tree = Value::array(vec![Value::double(f64::NAN), Value::double(-0.0)]);
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json["VCollect"]["collect"]["CArray"]["elems"][0]["VQuant"]["quantity"]["QDouble"]
            ["value"],
        serde_json::json!("NaN")
    );
    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back, tree);
    assert_ne!(back, Value::array(vec![Value::double(f64::NAN), Value::double(0.0)]));
}
