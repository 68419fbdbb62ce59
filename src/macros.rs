/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use parameter_bag::{params, ParameterBag};
///
/// let bag = ParameterBag::try_from(params!({
///     "name": "api",
///     "ports": [80, 443],
///     "tls": { "enabled": true, "cert": null }
/// }))
/// .unwrap();
///
/// assert_eq!(bag.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::params!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::ParamMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ParamMap::new();
        $(
            object.insert($key.to_string(), $crate::params!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything convertible with `Value::from`
    ($s:expr) => {
        $crate::Value::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, ParamMap, Value};

    #[test]
    fn test_params_macro_primitives() {
        assert_eq!(params!(null), Value::Null);
        assert_eq!(params!(true), Value::Bool(true));
        assert_eq!(params!(false), Value::Bool(false));
        assert_eq!(params!(42), Value::Number(Number::Integer(42)));
        assert_eq!(params!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(params!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_params_macro_arrays() {
        assert_eq!(params!([]), Value::Array(vec![]));

        let arr = params!([1, "two", null]);
        match arr {
            Value::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], Value::Number(Number::Integer(1)));
                assert_eq!(vec[1], Value::String("two".to_string()));
                assert_eq!(vec[2], Value::Null);
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_params_macro_objects() {
        assert_eq!(params!({}), Value::Object(ParamMap::new()));

        let obj = params!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }
}
