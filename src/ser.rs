//! JSON serialization.
//!
//! This module provides the [`Serializer`], which walks a [`Value`] tree and
//! emits JSON text, and the [`ValueSerializer`], which turns any
//! `Serialize` type into a [`Value`].
//!
//! ## Overview
//!
//! - **Compact mode**: no whitespace at all, `{"a":[1,2]}`
//! - **Pretty mode**: one member per line, `indent` spaces per level, a space
//!   after every `:`
//! - **Numbers**: whole numbers in the `i32` range print as integers, every
//!   other finite number prints in shortest fixed-point form, never in
//!   scientific notation
//! - **Strings**: `"`, `\`, `/` and control characters are escaped, all other
//!   text is copied verbatim
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use jsontree::{to_string, to_string_pretty};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! assert_eq!(to_string(&data).unwrap(), r#"{"x":1,"y":2}"#);
//! assert_eq!(to_string_pretty(&data).unwrap(), "{\n  \"x\": 1,\n  \"y\": 2\n}");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use jsontree::{json, Serializer, StringifyOptions};
//!
//! let mut serializer = Serializer::new(StringifyOptions::new());
//! serializer.serialize_value(&json!([1, "two", null]));
//! assert_eq!(serializer.into_inner(), r#"[1,"two",null]"#);
//! ```

use crate::{Error, Map, Result, StringifyOptions, Value};
use serde::{ser, Serialize};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The JSON text emitter.
///
/// Appends the text for one or more [`Value`] trees to an internal buffer.
/// Created via [`Serializer::new`]; the buffer is taken back with
/// [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: StringifyOptions,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: StringifyOptions) -> Self {
        Serializer {
            output: String::with_capacity(128),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `value` to the output.
    pub fn serialize_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(true) => self.output.push_str("true"),
            Value::Bool(false) => self.output.push_str("false"),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(s),
            Value::Array(elements) => self.write_array(elements),
            Value::Object(map) => self.write_object(map),
        }
    }

    fn write_number(&mut self, n: f64) {
        if !n.is_finite() {
            self.output.push_str("null");
        } else if n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
            // Also folds -0.0 into 0.
            self.output.push_str(&(n as i32).to_string());
        } else {
            self.output.push_str(&n.to_string());
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');

        let mut start = 0;
        for (i, byte) in s.bytes().enumerate() {
            let escape = match byte {
                b'"' => Some("\\\""),
                b'\\' => Some("\\\\"),
                b'/' => Some("\\/"),
                0x08 => Some("\\b"),
                0x0C => Some("\\f"),
                b'\n' => Some("\\n"),
                b'\r' => Some("\\r"),
                b'\t' => Some("\\t"),
                0x00..=0x1F => None,
                _ => continue,
            };

            // Escaped bytes are ASCII, so `i` is a character boundary.
            self.output.push_str(&s[start..i]);
            match escape {
                Some(escape) => self.output.push_str(escape),
                None => {
                    self.output.push_str("\\u00");
                    self.output.push(HEX_DIGITS[(byte >> 4) as usize] as char);
                    self.output.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
                }
            }
            start = i + 1;
        }
        self.output.push_str(&s[start..]);

        self.output.push('"');
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    fn write_array(&mut self, elements: &[Value]) {
        if elements.is_empty() {
            self.output.push_str("[]");
            return;
        }

        self.output.push('[');
        self.indent_level += 1;
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.serialize_value(element);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
    }

    fn write_object(&mut self, map: &Map) {
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }

        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_string(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.serialize_value(value);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push('}');
    }
}

/// Serializes any `Serialize` type into a [`Value`].
///
/// Enum variants are externally tagged: unit variants become strings, every
/// other variant becomes a one-member object keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<Value>,
}

pub struct SerializeStructVariant {
    name: String,
    map: Map,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(v as f64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = Map::new();
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Map::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: Map::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = Map::new();
        map.insert(self.name, Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_to_string(to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = Map::new();
        outer.insert(self.name, Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

/// Object keys must be strings; numbers and booleans are accepted in their
/// JSON spelling.
fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(_) | Value::Bool(_) => Ok(key.to_string()),
        other => Err(Error::custom(format!(
            "object keys must be strings, found {}",
            other.kind()
        ))),
    }
}

pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;
    use std::collections::BTreeMap;

    fn compact(value: &Value) -> String {
        let mut serializer = Serializer::new(StringifyOptions::new());
        serializer.serialize_value(value);
        serializer.into_inner()
    }

    fn pretty(value: &Value, indent: usize) -> String {
        let mut serializer = Serializer::new(StringifyOptions::pretty().with_indent(indent));
        serializer.serialize_value(value);
        serializer.into_inner()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&Value::Null), "null");
        assert_eq!(compact(&Value::Bool(true)), "true");
        assert_eq!(compact(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(compact(&Value::Number(0.0)), "0");
        assert_eq!(compact(&Value::Number(-0.0)), "0");
        assert_eq!(compact(&Value::Number(42.0)), "42");
        assert_eq!(compact(&Value::Number(-2147483648.0)), "-2147483648");
        assert_eq!(compact(&Value::Number(2147483648.0)), "2147483648");
        assert_eq!(compact(&Value::Number(3.5)), "3.5");
        assert_eq!(compact(&Value::Number(0.1)), "0.1");
        assert_eq!(compact(&Value::Number(1e21)), "1000000000000000000000");
        assert_eq!(compact(&Value::Number(1.5e-7)), "0.00000015");
    }

    #[test]
    fn test_fractions_keep_full_precision() {
        let third = 1.0 / 3.0;
        let text = compact(&Value::Number(third));
        assert_eq!(text, "0.3333333333333333");
        assert_eq!(text.parse::<f64>().unwrap(), third);
    }

    #[test]
    fn test_non_finite_numbers_become_null() {
        assert_eq!(compact(&Value::Number(f64::NAN)), "null");
        assert_eq!(compact(&Value::Number(f64::INFINITY)), "null");
        assert_eq!(compact(&Value::Number(f64::NEG_INFINITY)), "null");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(compact(&Value::from("plain")), r#""plain""#);
        assert_eq!(compact(&Value::from("a\"b\\c/d")), r#""a\"b\\c\/d""#);
        assert_eq!(
            compact(&Value::from("\u{8}\u{c}\n\r\t")),
            r#""\b\f\n\r\t""#
        );
        assert_eq!(compact(&Value::from("\u{1}\u{1f}")), r#""\u0001\u001f""#);
        assert_eq!(compact(&Value::from("é ✓ 😀")), "\"é ✓ 😀\"");
        assert_eq!(compact(&Value::from("\u{7f}")), "\"\u{7f}\"");
    }

    #[test]
    fn test_empty_containers_in_both_modes() {
        let value = json!({"a": [], "b": {}});
        assert_eq!(compact(&value), r#"{"a":[],"b":{}}"#);
        assert_eq!(pretty(&value, 2), "{\n  \"a\": [],\n  \"b\": {}\n}");
        assert_eq!(pretty(&json!([]), 2), "[]");
    }

    #[test]
    fn test_pretty_object() {
        let value = json!({"a": 1, "b": 2});
        assert_eq!(pretty(&value, 2), "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_pretty_nested() {
        let value = json!({"list": [true, {"x": null}]});
        let expected = "{\n    \"list\": [\n        true,\n        {\n            \"x\": null\n        }\n    ]\n}";
        assert_eq!(pretty(&value, 4), expected);
    }

    #[test]
    fn test_pretty_zero_indent_keeps_newlines() {
        assert_eq!(pretty(&json!([1, 2]), 0), "[\n1,\n2\n]");
    }

    #[test]
    fn test_serializer_appends() {
        let mut serializer = Serializer::new(StringifyOptions::new());
        serializer.serialize_value(&json!(1));
        serializer.serialize_value(&json!([2]));
        assert_eq!(serializer.into_inner(), "1[2]");
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Pair(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_value_serializer_enums_are_externally_tagged() {
        assert_eq!(to_value(&Shape::Empty).unwrap(), json!("Empty"));
        assert_eq!(to_value(&Shape::Circle(1.5)).unwrap(), json!({"Circle": 1.5}));
        assert_eq!(to_value(&Shape::Pair(1, 2)).unwrap(), json!({"Pair": [1, 2]}));
        assert_eq!(
            to_value(&Shape::Rect { w: 3, h: 4 }).unwrap(),
            json!({"Rect": {"w": 3, "h": 4}})
        );
    }

    #[test]
    fn test_value_serializer_map_keys() {
        let mut numbers = BTreeMap::new();
        numbers.insert(1, "one");
        numbers.insert(2, "two");
        assert_eq!(to_value(&numbers).unwrap(), json!({"1": "one", "2": "two"}));

        let mut bad = BTreeMap::new();
        bad.insert(vec![1], 1);
        assert!(to_value(&bad).is_err());
    }

    #[test]
    fn test_non_string_map_keys_round_trip() {
        let mut numbers = BTreeMap::new();
        numbers.insert(-3, "minus three".to_string());
        numbers.insert(1, "one".to_string());
        let text = crate::to_string(&numbers).unwrap();
        assert_eq!(text, r#"{"-3":"minus three","1":"one"}"#);
        let back: BTreeMap<i32, String> = crate::from_str(&text).unwrap();
        assert_eq!(back, numbers);

        let mut flags = BTreeMap::new();
        flags.insert(false, 0);
        flags.insert(true, 1);
        let text = crate::to_string(&flags).unwrap();
        assert_eq!(text, r#"{"false":0,"true":1}"#);
        let back: BTreeMap<bool, i32> = crate::from_str(&text).unwrap();
        assert_eq!(back, flags);

        let back: BTreeMap<String, i32> = crate::from_str(r#"{"1":2}"#).unwrap();
        assert_eq!(back.get("1"), Some(&2));
        assert!(crate::from_str::<BTreeMap<i32, i32>>(r#"{"x":1}"#).is_err());
    }

    #[test]
    fn test_value_serializer_options_and_bytes() {
        assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(5)).unwrap(), json!(5));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
        assert_eq!(to_value(&'x').unwrap(), json!("x"));
        assert_eq!(to_value(&vec![1u8, 2]).unwrap(), json!([1, 2]));
    }
}
