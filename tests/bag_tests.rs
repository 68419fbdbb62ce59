use parameter_bag::{params, Error, ParamMap, ParameterBag, PathMode, Value};

fn sample() -> ParameterBag {
    ParameterBag::try_from(params!({
        "foo": "bar",
        "null": null,
        "number": "0123abc",
        "word": "a-b_c 9!",
        "nested": { "port": "8080", "list": ["x1", "y2"] }
    }))
    .unwrap()
}

#[test]
fn test_all_returns_backing_map() {
    let bag = sample();
    assert_eq!(bag.all().len(), 5);
    assert_eq!(bag.all().get("foo"), Some(&Value::from("bar")));
}

#[test]
fn test_all_mut_changes_are_visible() {
    let mut bag = sample();
    if let Some(Value::Object(nested)) = bag.all_mut().get_mut("nested") {
        nested.insert("port".to_string(), Value::from(9090));
    }
    assert_eq!(
        bag.lookup("nested[port]", PathMode::Deep).unwrap(),
        Some(&Value::from(9090))
    );
}

#[test]
fn test_keys_snapshot() {
    let mut bag = sample();
    let keys = bag.keys();
    bag.set("later", 1);
    assert_eq!(keys, vec!["foo", "null", "number", "word", "nested"]);
    assert_eq!(bag.keys().len(), 6);
}

#[test]
fn test_replace() {
    let mut bag = sample();
    let mut map = ParamMap::new();
    map.insert("only".to_string(), Value::from(1));
    bag.replace(map);
    assert_eq!(bag.keys(), vec!["only"]);
    assert!(!bag.has("foo"));
}

#[test]
fn test_replace_value_type_error() {
    let mut bag = sample();
    let err = bag.replace_value(Value::from(5)).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(bag.len(), 5);

    bag.replace_value(params!({ "x": 1 })).unwrap();
    assert_eq!(bag.keys(), vec!["x"]);
}

#[test]
fn test_add_merges_and_overwrites() {
    let mut bag = sample();
    let mut map = ParamMap::new();
    map.insert("foo".to_string(), Value::from("baz"));
    map.insert("bar".to_string(), Value::from("qux"));
    bag.add(map);

    assert_eq!(bag.get("foo"), Some(&Value::from("baz")));
    assert_eq!(bag.get("bar"), Some(&Value::from("qux")));
    assert_eq!(bag.len(), 6);
    assert_eq!(bag.keys().last().map(String::as_str), Some("bar"));
}

#[test]
fn test_add_value_type_error() {
    let mut bag = sample();
    let err = bag.add_value(params!([1, 2])).unwrap_err();
    assert_eq!(err, Error::type_mismatch("object", "array"));
    assert_eq!(bag.len(), 5);
}

#[test]
fn test_try_from_non_object() {
    assert!(ParameterBag::try_from(Value::Null).is_err());
    assert!(ParameterBag::try_from(params!({})).unwrap().is_empty());
}

#[test]
fn test_get_and_defaults() {
    let bag = sample();
    assert_eq!(bag.get("foo"), Some(&Value::from("bar")));
    assert_eq!(bag.get("unknown"), None);
    assert_eq!(bag.get("null"), Some(&Value::Null));

    let default = Value::from("default");
    assert_eq!(bag.get_or("unknown", &default), &default);
    assert_eq!(
        bag.lookup_or("unknown", &default, PathMode::Shallow).unwrap(),
        &default
    );
}

#[test]
fn test_shallow_lookup_ignores_brackets() {
    let mut bag = sample();
    assert_eq!(bag.lookup("nested[port]", PathMode::Shallow).unwrap(), None);
    assert_eq!(bag.lookup("foo]", PathMode::Shallow).unwrap(), None);

    bag.set("nested[port]", "literal");
    assert_eq!(
        bag.lookup("nested[port]", PathMode::Shallow).unwrap(),
        Some(&Value::from("literal"))
    );
}

#[test]
fn test_set_and_has() {
    let mut bag = ParameterBag::new();
    assert!(!bag.has("foo"));
    bag.set("foo", "bar");
    assert!(bag.has("foo"));
    bag.set("foo", 2);
    assert_eq!(bag.get("foo"), Some(&Value::from(2)));
    assert_eq!(bag.len(), 1);

    let nested = sample();
    assert!(!nested.has("nested[port]"));
}

#[test]
fn test_remove() {
    let mut bag = sample();
    assert!(bag.remove("foo").is_some());
    assert!(!bag.has("foo"));

    let before = bag.clone();
    assert_eq!(bag.remove("absent"), None);
    assert_eq!(bag.remove("absent"), None);
    assert_eq!(bag, before);
}

#[test]
fn test_get_alpha() {
    let bag = sample();
    assert_eq!(bag.get_alpha("word", "", PathMode::Shallow).unwrap(), "abc");
    assert_eq!(bag.get_alpha("number", "", PathMode::Shallow).unwrap(), "abc");
    assert_eq!(bag.get_alpha("unknown", "", PathMode::Shallow).unwrap(), "");
    assert_eq!(bag.get_alpha("null", "x", PathMode::Shallow).unwrap(), "None");
}

#[test]
fn test_filters_read_null_and_booleans_as_words() {
    let mut bag = sample();
    bag.set("t", true);
    bag.set("f", false);
    assert_eq!(bag.get_alpha("null", "", PathMode::Shallow).unwrap(), "None");
    assert_eq!(bag.get_alnum("t", "", PathMode::Shallow).unwrap(), "True");
    assert_eq!(bag.get_alpha("f", "", PathMode::Shallow).unwrap(), "False");
    assert_eq!(bag.get_digits("t", "", PathMode::Shallow).unwrap(), "");
    assert_eq!(bag.get_int("t", 0, PathMode::Shallow).unwrap(), 1);
    assert_eq!(bag.get_int("f", 7, PathMode::Shallow).unwrap(), 0);
}

#[test]
fn test_get_alnum_keeps_underscore() {
    let bag = sample();
    assert_eq!(bag.get_alnum("word", "", PathMode::Shallow).unwrap(), "ab_c9");
    assert_eq!(
        bag.get_alnum("number", "", PathMode::Shallow).unwrap(),
        "0123abc"
    );
}

#[test]
fn test_get_digits() {
    let bag = sample();
    assert_eq!(bag.get_digits("number", "", PathMode::Shallow).unwrap(), "0123");
    assert_eq!(bag.get_digits("word", "", PathMode::Shallow).unwrap(), "9");
    assert_eq!(
        bag.get_digits("nested[list][1]", "", PathMode::Deep).unwrap(),
        "2"
    );
}

#[test]
fn test_get_int() {
    let mut bag = sample();
    assert_eq!(bag.get_int("number", 0, PathMode::Shallow).unwrap(), 123);
    assert_eq!(bag.get_int("foo", 5, PathMode::Shallow).unwrap(), 0);
    assert_eq!(bag.get_int("unknown", 5, PathMode::Shallow).unwrap(), 5);
    assert_eq!(bag.get_int("null", 5, PathMode::Shallow).unwrap(), 0);
    assert_eq!(
        bag.get_int("nested[port]", 0, PathMode::Deep).unwrap(),
        8080
    );

    bag.set("n", "42abc");
    bag.set("m", 7);
    bag.set("f", -3.9);
    bag.set("t", true);
    assert_eq!(bag.get_int("n", 0, PathMode::Shallow).unwrap(), 42);
    assert_eq!(bag.get_int("m", 0, PathMode::Shallow).unwrap(), 7);
    assert_eq!(bag.get_int("f", 0, PathMode::Shallow).unwrap(), -3);
    assert_eq!(bag.get_int("t", 0, PathMode::Shallow).unwrap(), 1);
}

#[test]
fn test_typed_accessors_propagate_path_errors() {
    let bag = sample();
    assert!(bag.get_int("nested[port", 0, PathMode::Deep).is_err());
    assert!(bag.get_alpha("nested]", "", PathMode::Deep).is_err());
    assert!(bag.get_digits("nested[[port]]", "", PathMode::Deep).is_err());
}

#[test]
fn test_iteration_and_len() {
    let bag = sample();
    let keys: Vec<&String> = bag.iter().collect();
    assert_eq!(keys.len(), bag.len());

    let mut count = 0;
    for key in &bag {
        assert!(bag.has(key));
        count += 1;
    }
    assert_eq!(count, 5);
    assert_eq!(bag.iter().count(), 5);
}
