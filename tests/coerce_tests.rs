use parameter_bag::coerce::{filter_alnum, filter_alpha, filter_digits};
use parameter_bag::{str_to_int, value_to_int, Value};

#[test]
fn test_reference_conversions() {
    assert_eq!(str_to_int("42"), 42);
    assert_eq!(str_to_int("42abc"), 42);
    assert_eq!(str_to_int("3.14"), 3);
    assert_eq!(str_to_int("1e3"), 1000);
    assert_eq!(str_to_int("abc"), 0);
    assert_eq!(str_to_int("-5"), -5);
    assert_eq!(str_to_int(""), 0);
}

#[test]
fn test_signs() {
    assert_eq!(str_to_int("+7"), 7);
    assert_eq!(str_to_int("-0"), 0);
    assert_eq!(str_to_int("-3.99"), -3);
    assert_eq!(str_to_int("+"), 0);
    assert_eq!(str_to_int("-"), 0);
    assert_eq!(str_to_int("--1"), 0);
}

#[test]
fn test_decimal_forms() {
    assert_eq!(str_to_int(".5"), 0);
    assert_eq!(str_to_int("7."), 7);
    assert_eq!(str_to_int("0.999"), 0);
    assert_eq!(str_to_int("007"), 7);
    assert_eq!(str_to_int("."), 0);
}

#[test]
fn test_positive_exponents() {
    assert_eq!(str_to_int("1.5e1"), 15);
    assert_eq!(str_to_int("1.25E1"), 12);
    assert_eq!(str_to_int(".5e1"), 5);
    assert_eq!(str_to_int("2e+2"), 200);
    assert_eq!(str_to_int("1.23456e3"), 1234);
    assert_eq!(str_to_int("-2.5e3"), -2500);
}

#[test]
fn test_negative_exponents_truncate() {
    assert_eq!(str_to_int("12e-1"), 1);
    assert_eq!(str_to_int("19e-1"), 1);
    assert_eq!(str_to_int("12345e-2"), 123);
    assert_eq!(str_to_int("5e-1"), 0);
    assert_eq!(str_to_int("5e-0"), 5);
    assert_eq!(str_to_int("99.9e-1"), 9);
}

#[test]
fn test_prefix_stops_at_first_foreign_character() {
    assert_eq!(str_to_int("12 monkeys"), 12);
    assert_eq!(str_to_int("1e5 lines"), 100000);
    assert_eq!(str_to_int("3,000"), 3);
    assert_eq!(str_to_int("x12"), 0);
    assert_eq!(str_to_int(" 12"), 0);
}

#[test]
fn test_numeric_characters_that_do_not_form_a_number() {
    assert_eq!(str_to_int("1.2.3"), 0);
    assert_eq!(str_to_int("12-5"), 0);
    assert_eq!(str_to_int("1e"), 0);
    assert_eq!(str_to_int("e5"), 0);
    assert_eq!(str_to_int("1e5e"), 0);
}

#[test]
fn test_saturation() {
    assert_eq!(str_to_int("1e100"), i64::MAX);
    assert_eq!(str_to_int("-1e100"), i64::MIN);
    assert_eq!(str_to_int("99999999999999999999"), i64::MAX);
}

#[test]
fn test_value_to_int() {
    assert_eq!(value_to_int(&Value::from(7)), 7);
    assert_eq!(value_to_int(&Value::from(i64::MIN)), i64::MIN);
    assert_eq!(value_to_int(&Value::from(2.99)), 2);
    assert_eq!(value_to_int(&Value::from(f64::NAN)), 0);
    assert_eq!(value_to_int(&Value::from("1e3")), 1000);
    assert_eq!(value_to_int(&Value::from(false)), 0);
    assert_eq!(value_to_int(&Value::from(true)), 1);
    assert_eq!(value_to_int(&Value::Null), 0);
    assert_eq!(value_to_int(&Value::Array(vec![Value::from(1)])), 0);
}

#[test]
fn test_filters() {
    assert_eq!(filter_alpha("Hello, World! 2024"), "HelloWorld");
    assert_eq!(filter_alnum("user_name-01@host"), "user_name01host");
    assert_eq!(filter_digits("2024-01-31"), "20240131");
}
