use parameter_bag::{params, ParameterBag, PathMode, Value};

#[test]
fn test_json_keeps_key_order() {
    let json = r#"{"zeta": 1, "alpha": {"y": 2, "b": 3}, "mid": [1, 2]}"#;
    let bag: ParameterBag = serde_json::from_str(json).unwrap();

    assert_eq!(bag.keys(), vec!["zeta", "alpha", "mid"]);
    let nested: Vec<_> = bag
        .get("alpha")
        .and_then(Value::as_object)
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(nested, vec!["y", "b"]);
}

#[test]
fn test_json_values_map_to_variants() {
    let json = r#"{"i": -3, "f": 2.5, "s": "x", "b": true, "n": null, "big": 18446744073709551615}"#;
    let bag: ParameterBag = serde_json::from_str(json).unwrap();

    assert_eq!(bag.get("i"), Some(&Value::from(-3)));
    assert_eq!(bag.get("f"), Some(&Value::from(2.5)));
    assert_eq!(bag.get("s"), Some(&Value::from("x")));
    assert_eq!(bag.get("b"), Some(&Value::from(true)));
    assert_eq!(bag.get("n"), Some(&Value::Null));
    assert!(bag.get("big").map_or(false, |v| v.as_f64().is_some()));
}

#[test]
fn test_bag_requires_json_object() {
    assert!(serde_json::from_str::<ParameterBag>("[1, 2]").is_err());
    assert!(serde_json::from_str::<ParameterBag>("\"text\"").is_err());
}

#[test]
fn test_serialize_bag() {
    let bag = ParameterBag::try_from(params!({ "b": 1, "a": [true, null] })).unwrap();
    let json = serde_json::to_string(&bag).unwrap();
    assert_eq!(json, r#"{"b":1,"a":[true,null]}"#);

    let back: ParameterBag = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bag);
}

#[test]
fn test_decoded_bag_supports_deep_lookup() {
    let bag: ParameterBag =
        serde_json::from_str(r#"{"db": {"replicas": [{"port": "6432"}]}}"#).unwrap();
    assert_eq!(
        bag.get_int("db[replicas][0][port]", 0, PathMode::Deep).unwrap(),
        6432
    );
}
