/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Array elements and object values are
/// single token trees, so a negative number or other compound expression in
/// that position needs parentheses: `json!([(-1), 2])`. Anything that is not
/// a literal, array, or object is converted with `Value::from`.
///
/// # Examples
///
/// ```rust
/// use jsontree::json;
///
/// let value = json!({
///     "name": "Alice",
///     "tags": ["admin", "dev"],
///     "active": true,
///     "manager": null
/// });
/// assert_eq!(value["tags"][1].as_string().unwrap(), "dev");
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::Array(::std::vec![$($crate::json!($elem)),+])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert(::std::string::String::from($key), $crate::json!($value));
        )+
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
