//! JSON parsing.
//!
//! This module provides the [`Deserializer`], a single-pass recursive-descent
//! parser that turns JSON text into a [`Value`] tree, and the serde plumbing
//! that feeds a parsed tree into any `Deserialize` type.
//!
//! ## Overview
//!
//! - **Single pass**: one byte of lookahead picks the production, nothing is
//!   ever re-scanned
//! - **Strict grammar**: no comments, trailing commas, unquoted keys, or
//!   leading zeros
//! - **Error reporting**: every error carries the line and column it was found at
//! - **Bounded nesting**: arrays and objects deeper than
//!   [`ParseOptions::max_depth`] are rejected before the stack is at risk
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use jsontree::parse;
//!
//! let value = parse(r#"{"x": 1, "y": [true, null]}"#).unwrap();
//! assert_eq!(value["x"].as_int().unwrap(), 1);
//! assert!(value["y"][1].is_null());
//! ```
//!
//! Typed deserialization goes through the same parser:
//!
//! ```rust
//! use jsontree::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str(r#"{"x": 1, "y": 2}"#).unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```

use crate::{Error, Map, ParseOptions, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// The JSON parser.
///
/// Walks an immutable text buffer with a byte cursor, tracking the line and
/// column for error messages. Created via [`Deserializer::from_str`] or
/// [`Deserializer::with_options`].
pub struct Deserializer<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'de str, options: ParseOptions) -> Self {
        Deserializer {
            input,
            position: 0,
            line: 1,
            column: 1,
            depth: 0,
            options,
        }
    }

    /// Parses one complete document.
    ///
    /// Unless trailing characters are allowed by the options, anything other
    /// than whitespace after the value is an error.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, end-of-input, or depth error encountered. No
    /// partial value is ever returned.
    pub fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        if !self.options.allow_trailing_characters {
            self.end()?;
        }
        Ok(value)
    }

    /// Checks that only whitespace remains.
    pub fn end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    #[inline]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            // Continuation bytes belong to the character already counted.
            self.column += 1;
        }
        Some(byte)
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.next_byte();
        }
    }

    fn syntax_error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    fn eof_error(&self, expected: &str) -> Error {
        Error::unexpected_eof(self.line, self.column, expected)
    }

    /// Error for the character under the cursor, or end of input if there is none.
    fn unexpected(&self, expected: &str) -> Error {
        match self.peek_char() {
            Some(ch) => self.syntax_error(&format!(
                "expected {}, found {}",
                expected,
                describe_char(ch)
            )),
            None => self.eof_error(expected),
        }
    }

    fn expect_byte(&mut self, byte: u8, expected: &str) -> Result<()> {
        if self.peek() == Some(byte) {
            self.next_byte();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        self.depth += 1;
        match self.options.max_depth {
            Some(limit) if self.depth > limit => {
                Err(Error::recursion_limit(self.line, self.column, limit))
            }
            _ => Ok(()),
        }
    }

    fn leave_container(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();

        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => Ok(Value::Number(self.parse_number()?)),
            _ => Err(self.unexpected("value")),
        }
    }

    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value> {
        if self.input.as_bytes()[self.position..].starts_with(literal.as_bytes()) {
            for _ in 0..literal.len() {
                self.next_byte();
            }
            Ok(value)
        } else {
            Err(self.syntax_error(&format!("invalid literal, expected '{}'", literal)))
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect_byte(b'"', "'\"'")?;
        let mut result = String::new();

        loop {
            let start = self.position;
            while let Some(byte) = self.peek() {
                if byte == b'"' || byte == b'\\' {
                    break;
                }
                self.next_byte();
            }
            // Both ends sit on ASCII bytes or the end of input, so this is a
            // character boundary.
            result.push_str(&self.input[start..self.position]);

            match self.next_byte() {
                Some(b'"') => return Ok(result),
                Some(b'\\') => self.parse_escape(&mut result)?,
                _ => return Err(self.eof_error("closing '\"'")),
            }
        }
    }

    fn parse_escape(&mut self, result: &mut String) -> Result<()> {
        match self.next_byte() {
            Some(b'"') => result.push('"'),
            Some(b'\\') => result.push('\\'),
            Some(b'/') => result.push('/'),
            Some(b'b') => result.push('\u{0008}'),
            Some(b'f') => result.push('\u{000C}'),
            Some(b'n') => result.push('\n'),
            Some(b'r') => result.push('\r'),
            Some(b't') => result.push('\t'),
            Some(b'u') => result.push(self.parse_unicode_escape()?),
            Some(_) => {
                let escaped = self.input[self.position - 1..]
                    .chars()
                    .next()
                    .unwrap_or('?');
                return Err(self.syntax_error(&format!(
                    "invalid escape sequence '\\{}'",
                    escaped
                )));
            }
            None => return Err(self.eof_error("escape sequence")),
        }
        Ok(())
    }

    /// Decodes the code point after `\u`, combining a UTF-16 surrogate pair
    /// when a low surrogate escape follows a high one.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let code_point = self.parse_hex4()?;

        let code_point = match code_point {
            0xD800..=0xDBFF => {
                if self.input.as_bytes()[self.position..].starts_with(b"\\u") {
                    self.next_byte();
                    self.next_byte();
                } else {
                    return Err(self.syntax_error("unpaired surrogate in unicode escape"));
                }
                let low = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.syntax_error("invalid low surrogate in unicode escape"));
                }
                0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.syntax_error("unpaired surrogate in unicode escape"));
            }
            _ => code_point,
        };

        char::from_u32(code_point)
            .ok_or_else(|| self.syntax_error("invalid unicode code point"))
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let mut code_point = 0u32;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(byte) => match (byte as char).to_digit(16) {
                    Some(digit) => digit,
                    None => {
                        return Err(self.syntax_error(
                            "invalid unicode escape sequence (expected 4 hex digits)",
                        ))
                    }
                },
                None => return Err(self.eof_error("4 hex digits")),
            };
            self.next_byte();
            code_point = code_point * 16 + digit;
        }
        Ok(code_point)
    }

    fn parse_number(&mut self) -> Result<f64> {
        let start = self.position;

        if self.peek() == Some(b'-') {
            self.next_byte();
        }

        // Integer part: a lone zero, or a non-zero digit followed by any digits
        match self.peek() {
            Some(b'0') => {
                self.next_byte();
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(self.syntax_error("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.unexpected("digit")),
        }

        let mut integral = true;

        if self.peek() == Some(b'.') {
            integral = false;
            self.next_byte();
            self.expect_digits()?;
        }

        if let Some(b'e' | b'E') = self.peek() {
            integral = false;
            self.next_byte();
            if let Some(b'+' | b'-') = self.peek() {
                self.next_byte();
            }
            self.expect_digits()?;
        }

        let number_str = &self.input[start..self.position];

        if integral {
            if let Ok(i) = number_str.parse::<i32>() {
                return Ok(f64::from(i));
            }
        }

        match number_str.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(self.syntax_error(&format!("number out of range: {}", number_str))),
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.next_byte();
        }
    }

    fn expect_digits(&mut self) -> Result<()> {
        match self.peek() {
            Some(b'0'..=b'9') => {
                self.skip_digits();
                Ok(())
            }
            _ => Err(self.unexpected("digit")),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.expect_byte(b'[', "'['")?;

        let mut elements = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.next_byte();
            self.leave_container();
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);
            self.skip_whitespace();

            match self.peek() {
                Some(b',') => {
                    self.next_byte();
                }
                Some(b']') => {
                    self.next_byte();
                    break;
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }

        self.leave_container();
        Ok(Value::Array(elements))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.expect_byte(b'{', "'{'")?;

        let mut map = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.next_byte();
            self.leave_container();
            return Ok(Value::Object(map));
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected("string key"));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            self.expect_byte(b':', "':' after key")?;

            let value = self.parse_value()?;
            // Duplicate keys: the last one wins.
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.next_byte();
                }
                Some(b'}') => {
                    self.next_byte();
                    break;
                }
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }

        self.leave_container();
        Ok(Value::Object(map))
    }
}

fn describe_char(ch: char) -> String {
    if ch.is_control() {
        format!("'{}'", ch.escape_default())
    } else {
        format!("'{}'", ch)
    }
}

/// Returns the 1-based `(line, column)` just past `prefix`, which must be valid UTF-8.
pub(crate) fn line_col(prefix: &[u8]) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for &byte in prefix {
        if byte == b'\n' {
            line += 1;
            column = 1;
        } else if byte & 0xC0 != 0x80 {
            column += 1;
        }
    }
    (line, column)
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_document()?).deserialize_any(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_document()?).deserialize_option(visitor)
    }

    fn deserialize_newtype_struct<V>(self, name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_document()?).deserialize_newtype_struct(name, visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(self.parse_document()?).deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: crate::map::IntoIter,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(MapKeyDeserializer { key }).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer {
            variant,
            value: Some(value),
        }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        let visitor = VariantDeserializer { value: self.value };
        Ok((variant, visitor))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}

/// Feeds an owned [`Value`] tree to a serde visitor.
pub(crate) struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub(crate) fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => match self.value.as_i64() {
                Ok(i) => visitor.visit_i64(i),
                Err(_) => visitor.visit_f64(n),
            },
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) => {
                let mut iter = obj.into_iter();
                match (iter.next(), iter.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    _ => Err(Error::custom(
                        "expected an object with exactly one key for an enum variant",
                    )),
                }
            }
            other => Err(Error::type_mismatch("string or object", other.kind().as_str())),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

/// Feeds an object key to a serde visitor. Numeric and boolean targets are
/// read back from their JSON spelling.
struct MapKeyDeserializer {
    key: String,
}

macro_rules! deserialize_key_from_str {
    ($($method:ident => $visit:ident,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                match self.key.parse() {
                    Ok(parsed) => visitor.$visit(parsed),
                    Err(_) => Err(de::Error::invalid_type(
                        de::Unexpected::Str(&self.key),
                        &visitor,
                    )),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for MapKeyDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key)
    }

    deserialize_key_from_str! {
        deserialize_bool => visit_bool,
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.key.into_deserializer())
    }

    forward_to_deserialize_any! {
        char str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
