//! # jsontree
//!
//! An in-memory JSON document library: a dynamically typed [`Value`] tree, a
//! strict recursive-descent parser, and a serializer with optional
//! pretty-printing. Serde support comes on top for typed data.
//!
//! ## Key Features
//!
//! - **Document model**: [`Value`] holds null, booleans, numbers, strings,
//!   arrays, and objects, with checked accessors and auto-growing builders
//! - **Strict parser**: no comments, trailing commas, or leading zeros, and
//!   every error reports the line and column it was found at
//! - **Bounded nesting**: deep input fails with an error instead of
//!   overflowing the stack
//! - **Predictable output**: compact or indented text, numbers never in
//!   scientific notation
//! - **Serde Compatible**: any `#[derive(Serialize, Deserialize)]` type can be
//!   written and read through the same parser and serializer
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use jsontree::{parse, stringify, StringifyOptions};
//!
//! let doc = parse(r#"{"name": "Alice", "scores": [90, 85.5]}"#).unwrap();
//!
//! assert_eq!(doc["name"].as_string().unwrap(), "Alice");
//! assert_eq!(doc["scores"][0].as_int().unwrap(), 90);
//! assert_eq!(doc["scores"][1].as_number().unwrap(), 85.5);
//!
//! let text = stringify(&doc, &StringifyOptions::new());
//! assert_eq!(text, r#"{"name":"Alice","scores":[90,85.5]}"#);
//! ```
//!
//! ### Building Documents
//!
//! Builders create missing containers and members as they go:
//!
//! ```rust
//! use jsontree::{stringify_pretty, Value};
//!
//! let mut doc = Value::Null;
//! doc.field_mut("tags").push("new");
//! doc.field_mut("user").set_field("id", 7);
//!
//! assert_eq!(
//!     stringify_pretty(&doc),
//!     "{\n  \"tags\": [\n    \"new\"\n  ],\n  \"user\": {\n    \"id\": 7\n  }\n}"
//! );
//! ```
//!
//! ### Typed Data with Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use jsontree::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert!(text.contains(r#""name":"Alice""#));
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Dynamic Values with the json! Macro
//!
//! ```rust
//! use jsontree::json;
//!
//! let data = json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! assert_eq!(data["age"].as_int().unwrap(), 30);
//! assert_eq!(data["tags"].len(), Some(2));
//! ```
//!
//! ## Numbers
//!
//! Every number is stored as an `f64`. Integer literals that fit an `i32` are
//! read exactly; larger ones go through the float path and keep full
//! precision up to 2^53. [`Value::as_int`] and [`Value::as_i64`] refuse
//! fractional or out-of-range numbers instead of truncating.
//!
//! ## Object Order
//!
//! Object members are kept sorted by key. Enable the `preserve_order` feature
//! to keep them in insertion order instead.
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n), single pass, one byte of lookahead
//! - **Serialization**: O(n) over the tree
//! - **Memory**: strings are copied once into the tree, no intermediate tokens

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, ErrorKind, Result};
pub use map::Map;
pub use options::{ParseOptions, StringifyOptions};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Kind, Value};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;

/// Parses JSON text into a [`Value`] with the default [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use jsontree::parse;
///
/// let value = parse(r#"{"key": "value"}"#).unwrap();
/// assert_eq!(value["key"].as_string().unwrap(), "value");
///
/// assert!(parse("01").is_err());
/// ```
///
/// # Errors
///
/// Returns a syntax, end-of-input, or recursion-limit error carrying the line
/// and column of the failure.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses JSON text into a [`Value`] with custom options.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    Deserializer::with_options(text, options.clone()).parse_document()
}

/// Parses UTF-8 encoded JSON bytes into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use jsontree::{parse_slice, ErrorKind};
///
/// assert!(parse_slice(b"[true]").unwrap().is_array());
///
/// let err = parse_slice(b"[\"\xFF\"]").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Syntax);
/// ```
///
/// # Errors
///
/// Invalid UTF-8 is a syntax error at the first bad byte. Otherwise the same
/// as [`parse`].
pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
    parse(utf8(bytes)?)
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let (line, col) = de::line_col(&bytes[..e.valid_up_to()]);
        Error::syntax(line, col, "invalid UTF-8")
    })
}

/// Renders a [`Value`] as JSON text.
///
/// # Examples
///
/// ```rust
/// use jsontree::{json, stringify, StringifyOptions};
///
/// let value = json!({"a": 1, "b": 2});
/// assert_eq!(stringify(&value, &StringifyOptions::new()), r#"{"a":1,"b":2}"#);
/// assert_eq!(
///     stringify(&value, &StringifyOptions::pretty()),
///     "{\n  \"a\": 1,\n  \"b\": 2\n}"
/// );
/// ```
#[must_use]
pub fn stringify(value: &Value, options: &StringifyOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize_value(value);
    serializer.into_inner()
}

/// Renders a [`Value`] as pretty-printed JSON with 2-space indentation.
#[must_use]
pub fn stringify_pretty(value: &Value) -> String {
    stringify(value, &StringifyOptions::pretty())
}

/// Writes a [`Value`] as JSON text to `writer`.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_value<W>(mut writer: W, value: &Value, options: &StringifyOptions) -> Result<()>
where
    W: io::Write,
{
    writer.write_all(stringify(value, options).as_bytes())?;
    Ok(())
}

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use jsontree::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl fails or produces an
/// object key that is not a string, number, or boolean.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &StringifyOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &StringifyOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use jsontree::{to_string_with_options, StringifyOptions};
///
/// let options = StringifyOptions::pretty().with_indent(4);
/// let text = to_string_with_options(&vec![1, 2], &options).unwrap();
/// assert_eq!(text, "[\n    1,\n    2\n]");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &StringifyOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(stringify(&to_value(value)?, options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use jsontree::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// assert_eq!(value["y"].as_int().unwrap(), 2);
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Convert a [`Value`] into any `T: Deserialize`.
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_value, json};
///
/// let pair: (String, Vec<u8>) = from_value(json!(["id", [1, 2]])).unwrap();
/// assert_eq!(pair, ("id".to_string(), vec![1, 2]));
/// ```
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(de::ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` to a writer as compact JSON.
///
/// # Examples
///
/// ```rust
/// use jsontree::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[true, false]).unwrap();
/// assert_eq!(buffer, b"[true,false]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &StringifyOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: &StringifyOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    write_value(writer, &to_value(value)?, options)
}

/// Deserialize an instance of type `T` from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use jsontree::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or cannot be deserialized
/// to type `T`. Parse errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// # Examples
///
/// ```rust
/// use jsontree::from_reader;
/// use std::io::Cursor;
///
/// let numbers: Vec<i64> = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8 or JSON,
/// or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str(utf8(v)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
        manager: Option<Box<User>>,
    }

    fn alice() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
            manager: None,
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: -2 };
        let text = to_string(&point).unwrap();
        assert_eq!(text, r#"{"x":1,"y":-2}"#);
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_nested_user() {
        let mut user = alice();
        user.manager = Some(Box::new(User {
            id: 1,
            name: "Bob".to_string(),
            active: false,
            tags: vec![],
            manager: None,
        }));

        let text = to_string(&user).unwrap();
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);

        let pretty = to_string_pretty(&user).unwrap();
        assert!(pretty.contains("\n  \"manager\": {\n"));
        let user_back: User = from_str(&pretty).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_value_round_trip_through_serde() {
        let value = parse(r#"{"a":[1,2.5,"x",null,true],"b":{}}"#).unwrap();
        let back: Value = from_str(&to_string(&value).unwrap()).unwrap();
        assert_eq!(value, back);
        assert_eq!(from_value::<Value>(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(
            from_str::<Point>(r#"{"x":1,"y":2"#).unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
        assert_eq!(
            from_str::<Point>(r#"{"x":1,"y":2} extra"#).unwrap_err().kind(),
            ErrorKind::Syntax
        );
        assert_eq!(
            from_str::<Point>(r#"{"x":1.5,"y":2}"#).unwrap_err().kind(),
            ErrorKind::Custom
        );
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Command {
        Stop,
        Move { dx: i32, dy: i32 },
        Say(String),
        Pair(u8, u8),
    }

    #[test]
    fn test_enums_round_trip() {
        for command in [
            Command::Stop,
            Command::Move { dx: 1, dy: -1 },
            Command::Say("hi".to_string()),
            Command::Pair(3, 4),
        ] {
            let text = to_string(&command).unwrap();
            let back: Command = from_str(&text).unwrap();
            assert_eq!(command, back);
        }
        assert_eq!(to_string(&Command::Stop).unwrap(), r#""Stop""#);
        assert_eq!(
            to_string(&Command::Say("hi".to_string())).unwrap(),
            r#"{"Say":"hi"}"#
        );
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Meters(f64);

    #[test]
    fn test_newtype_and_option() {
        let m: Meters = from_str("2.5").unwrap();
        assert_eq!(m, Meters(2.5));

        let none: Option<i32> = from_str("null").unwrap();
        assert_eq!(none, None);
        let some: Option<i32> = from_str(" 7 ").unwrap();
        assert_eq!(some, Some(7));
    }

    #[test]
    fn test_maps_and_large_integers() {
        let mut scores = HashMap::new();
        scores.insert("a".to_string(), 4_000_000_000u64);
        let text = to_string(&scores).unwrap();
        assert_eq!(text, r#"{"a":4000000000}"#);
        let back: HashMap<String, u64> = from_str(&text).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn test_writer_and_reader() {
        let mut buffer = Vec::new();
        to_writer_with_options(&mut buffer, &alice(), &StringifyOptions::pretty()).unwrap();
        let back: User = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(back, alice());

        let mut buffer = Vec::new();
        write_value(&mut buffer, &json!([1, 2]), &StringifyOptions::new()).unwrap();
        assert_eq!(buffer, b"[1,2]");
    }

    #[test]
    fn test_writer_failure_is_io_error() {
        let mut full = [0u8; 3];
        let err = write_value(&mut full[..], &json!([1, 2]), &StringifyOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_from_slice_reports_invalid_utf8_position() {
        let err = from_slice::<Value>(b"[1,\n \"\xC3\"]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.position(), Some((2, 3)));
    }

    #[test]
    fn test_parse_with_options() {
        let options = ParseOptions::new().with_max_depth(1);
        assert!(parse_with_options("[1, 2]", &options).is_ok());
        assert_eq!(
            parse_with_options("[[1]]", &options).unwrap_err().kind(),
            ErrorKind::RecursionLimitExceeded
        );
    }
}
