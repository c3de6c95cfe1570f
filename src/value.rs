//! The JSON document value.
//!
//! This module provides the [`Value`] enum, a closed representation of any JSON
//! document node, together with its accessors and builder operations.
//!
//! ## Core Types
//!
//! - [`Value`]: null, boolean, number, string, array, or object
//! - [`Kind`]: the variant of a value without its payload
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jsontree::{json, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Reading Values
//!
//! Checked accessors return an error when the variant does not match:
//!
//! ```rust
//! use jsontree::{parse, ErrorKind};
//!
//! let value = parse(r#"{"n": 7, "s": "x"}"#).unwrap();
//! assert_eq!(value["n"].as_int().unwrap(), 7);
//! assert_eq!(value["s"].as_int().unwrap_err().kind(), ErrorKind::TypeMismatch);
//!
//! // Indexing never panics and never inserts; missing paths read as null.
//! assert!(value["missing"][3].is_null());
//! ```
//!
//! ### Building Values
//!
//! Mutation goes through explicitly named operations. `field_mut` and
//! `element_mut` turn the value into an object or array first when it is
//! something else, dropping what it held:
//!
//! ```rust
//! use jsontree::Value;
//!
//! let mut doc = Value::Null;
//! doc.field_mut("items").set_element(2, 3);
//! doc.set_field("name", "test");
//!
//! assert_eq!(doc.to_string(), r#"{"items":[null,null,3],"name":"test"}"#);
//! ```

use crate::{Error, Map, Result, StringifyOptions};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

static NULL: Value = Value::Null;

/// A JSON document node.
///
/// Exactly one variant is active at a time. Containers own their children, so
/// cloning is a deep copy and a tree can never contain a cycle.
///
/// Numbers are always stored as `f64`; whether a number is an integer is
/// decided when it is read (see [`Value::as_int`]).
///
/// # Examples
///
/// ```rust
/// use jsontree::Value;
///
/// let null = Value::Null;
/// let num = Value::Number(42.0);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// The variant of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the variant of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a finite number with no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// assert!(Value::from(3).is_integer());
    /// assert!(Value::from(3.0).is_integer());
    /// assert!(!Value::from(3.5).is_integer());
    /// assert!(!Value::from("3").is_integer());
    /// ```
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::type_mismatch(expected.as_str(), self.kind().as_str())
    }

    /// Returns the boolean payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a boolean.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Kind::Boolean)),
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a number.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    /// Returns the number as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a number, and
    /// [`Error::RangeOrPrecision`] if it has a fractional part or lies outside
    /// the `i32` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::{Value, ErrorKind};
    ///
    /// assert_eq!(Value::from(42).as_int().unwrap(), 42);
    /// assert_eq!(Value::from(4.5).as_int().unwrap_err().kind(), ErrorKind::RangeOrPrecision);
    /// assert_eq!(Value::from(3e9).as_int().unwrap_err().kind(), ErrorKind::RangeOrPrecision);
    /// ```
    pub fn as_int(&self) -> Result<i32> {
        let n = self.as_number()?;
        if n.fract() != 0.0 || n < i32::MIN as f64 || n > i32::MAX as f64 {
            return Err(Error::range_or_precision(n, "i32"));
        }
        Ok(n as i32)
    }

    /// Returns the number as an `i64`.
    ///
    /// # Errors
    ///
    /// Same as [`Value::as_int`], over the `i64` range.
    pub fn as_i64(&self) -> Result<i64> {
        let n = self.as_number()?;
        // i64::MAX is not representable; 2^63 is the first value out of range.
        if n.fract() != 0.0 || n < i64::MIN as f64 || n >= -(i64::MIN as f64) {
            return Err(Error::range_or_precision(n, "i64"));
        }
        Ok(n as i64)
    }

    /// Returns the string payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a string.
    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Returns the array payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array.
    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Returns the array payload mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array.
    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Returns the object payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an object.
    pub fn as_object(&self) -> Result<&Map> {
        match self {
            Value::Object(obj) => Ok(obj),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    /// Returns the object payload mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an object.
    pub fn as_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(obj) => Ok(obj),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    /// Looks up an array element without modifying anything.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Looks up an object member without modifying anything.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    /// Returns the number of elements, members, or bytes for arrays, objects,
    /// and strings; `None` for scalars.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.len()),
            Value::Array(arr) => Some(arr.len()),
            Value::Object(obj) => Some(obj.len()),
            _ => None,
        }
    }

    /// Returns a mutable reference to array slot `index`.
    ///
    /// If the value is not an array it is replaced by an empty array first,
    /// discarding the previous content. Slots between the current length and
    /// `index` are filled with `Null`.
    ///
    /// # Panics
    ///
    /// Panics if the padded array cannot be allocated, as [`Vec::resize`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// let mut value = Value::from("discarded");
    /// *value.element_mut(1) = Value::from(true);
    /// assert_eq!(value, Value::Array(vec![Value::Null, Value::Bool(true)]));
    /// ```
    pub fn element_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Value::Array(arr) => {
                if index >= arr.len() {
                    arr.resize(index, Value::Null);
                    arr.push(Value::Null);
                }
                &mut arr[index]
            }
            _ => {
                *self = Value::Array(Vec::new());
                self.element_mut(index)
            }
        }
    }

    /// Returns a mutable reference to object member `key`, inserting `Null`
    /// when it is absent.
    ///
    /// If the value is not an object it is replaced by an empty object first,
    /// discarding the previous content. Because of the insertion, use
    /// [`Value::get_key`] for pure reads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// let mut value = Value::from(1);
    /// assert!(value.field_mut("a").is_null());
    /// assert_eq!(value.as_object().unwrap().len(), 1);
    /// ```
    pub fn field_mut(&mut self, key: &str) -> &mut Value {
        match self {
            Value::Object(obj) => obj.get_or_insert_null(key),
            _ => {
                *self = Value::Object(Map::new());
                self.field_mut(key)
            }
        }
    }

    /// Stores `value` at array slot `index`, see [`Value::element_mut`].
    pub fn set_element<V: Into<Value>>(&mut self, index: usize, value: V) {
        *self.element_mut(index) = value.into();
    }

    /// Stores `value` under `key`, see [`Value::field_mut`].
    pub fn set_field<V: Into<Value>>(&mut self, key: &str, value: V) {
        *self.field_mut(key) = value.into();
    }

    /// Appends `value`, turning this value into an array first if needed.
    pub fn push<V: Into<Value>>(&mut self, value: V) {
        if !self.is_array() {
            *self = Value::Array(Vec::new());
        }
        if let Value::Array(arr) = self {
            arr.push(value.into());
        }
    }

    /// Removes object member `key`. Returns `None` if the value is not an
    /// object or has no such member.
    pub fn remove_key(&mut self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.remove(key),
            _ => None,
        }
    }

    /// Resets the value to `Null`, dropping any payload.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// Moves the value out, leaving `Null` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// let mut source = Value::from(vec![1, 2]);
    /// let moved = source.take();
    /// assert!(source.is_null());
    /// assert_eq!(moved.as_array().unwrap().len(), 2);
    /// ```
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Returns the element at `index`, or a shared `Null` when the value is not
    /// an array or the index is out of range.
    fn index(&self, index: usize) -> &Value {
        self.get(index).unwrap_or(&NULL)
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Returns the member `key`, or a shared `Null` when the value is not an
    /// object or has no such member.
    fn index(&self, key: &str) -> &Value {
        self.get_key(key).unwrap_or(&NULL)
    }
}

impl fmt::Display for Value {
    /// Formats the value as compact JSON, or pretty JSON with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = if f.alternate() {
            StringifyOptions::pretty()
        } else {
            StringifyOptions::default()
        };
        f.write_str(&crate::stringify(self, &options))
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match self.as_i64() {
                Ok(i) => serializer.serialize_i64(i),
                Err(_) => serializer.serialize_f64(*n),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting payloads from a Value
impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_i64()
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_int()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_number()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_boolean()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }
}

// From implementations for creating a Value from native data
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_constructors_set_variant() {
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(42.0));
        assert_eq!(Value::from(42u64), Value::Number(42.0));
        assert_eq!(Value::from(3.5f64), Value::Number(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::String("test".to_string())
        );
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        );
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Map::new()), Value::Object(Map::new()));
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let num = Value::from(1);
        let err = num.as_string().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "Type mismatch: expected string, found number");

        assert!(Value::Null.as_boolean().is_err());
        assert!(Value::from("x").as_number().is_err());
        assert!(Value::from(true).as_array().is_err());
        assert!(Value::from(vec![1]).as_object().is_err());
        assert_eq!(
            Value::from("1").as_int().unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_as_int_bounds() {
        assert_eq!(Value::from(i32::MAX).as_int().unwrap(), i32::MAX);
        assert_eq!(Value::from(i32::MIN).as_int().unwrap(), i32::MIN);
        assert_eq!(Value::from(-0.0).as_int().unwrap(), 0);

        for bad in [2147483648.0, -2147483649.0, 0.5, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Value::from(bad).as_int().unwrap_err().kind(),
                ErrorKind::RangeOrPrecision,
                "{} should not narrow",
                bad
            );
        }
    }

    #[test]
    fn test_as_i64_bounds() {
        assert_eq!(Value::from(2147483648.0).as_i64().unwrap(), 2147483648);
        assert_eq!(Value::from(i64::MIN as f64).as_i64().unwrap(), i64::MIN);
        assert!(Value::from(9223372036854775808.0).as_i64().is_err());
        assert!(Value::from(1.25).as_i64().is_err());
    }

    #[test]
    fn test_index_never_mutates() {
        let value = Value::from(vec![1, 2]);
        assert_eq!(value[1], Value::from(2));
        assert!(value[10].is_null());
        assert!(value["key"].is_null());
        assert_eq!(value.as_array().unwrap().len(), 2);

        let scalar = Value::from(5);
        assert!(scalar[0].is_null());
        assert_eq!(scalar, Value::from(5));
    }

    #[test]
    fn test_element_mut_vivifies_and_pads() {
        let mut value = Value::from(true);
        value.set_element(2, "x");
        assert_eq!(
            value,
            Value::Array(vec![Value::Null, Value::Null, Value::from("x")])
        );

        // In-range access leaves the length alone.
        value.set_element(0, 1);
        assert_eq!(value.len(), Some(3));
        assert_eq!(value[0], Value::from(1));
    }

    #[test]
    fn test_element_mut_pads_to_last_slot() {
        let mut value = Value::Array(vec![Value::from(1)]);
        *value.element_mut(1) = Value::from(2);
        assert_eq!(value, Value::Array(vec![Value::from(1), Value::from(2)]));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_element_mut_at_max_index_fails_allocation() {
        let mut value = Value::Null;
        let _ = value.element_mut(usize::MAX);
    }

    #[test]
    fn test_field_mut_vivifies_and_inserts() {
        let mut value = Value::from(vec![1, 2, 3]);
        value.set_field("a", 1);
        assert_eq!(value.len(), Some(1));

        // A read through the mutable accessor inserts the key.
        let _ = value.field_mut("b");
        assert!(value.get_key("b").is_some());
        assert!(value["b"].is_null());

        value.set_field("a", 2);
        assert_eq!(value["a"], Value::from(2));
        assert_eq!(value.len(), Some(2));
    }

    #[test]
    fn test_push_remove_clear_take() {
        let mut value = Value::Null;
        value.push(1);
        value.push("two");
        assert_eq!(value.len(), Some(2));

        let mut obj = Value::Null;
        obj.set_field("k", 1);
        assert_eq!(obj.remove_key("k"), Some(Value::from(1)));
        assert_eq!(obj.remove_key("k"), None);
        assert_eq!(value.remove_key("k"), None);

        let taken = value.take();
        assert!(value.is_null());
        assert_eq!(taken.len(), Some(2));

        obj.clear();
        assert!(obj.is_null());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Value::Null;
        original.field_mut("list").push(1);
        let copy = original.clone();
        original.field_mut("list").push(2);

        assert_eq!(copy["list"].len(), Some(1));
        assert_eq!(original["list"].len(), Some(2));
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(i32::try_from(Value::from(42.0)).unwrap(), 42);
        assert_eq!(f64::try_from(Value::from(3.5)).unwrap(), 3.5);
        assert!(bool::try_from(Value::from(true)).unwrap());
        assert_eq!(String::try_from(Value::from("hi")).unwrap(), "hi");
        assert!(String::try_from(Value::from(1)).is_err());
    }

    #[test]
    fn test_from_iterators() {
        let arr: Value = (1..=3).collect();
        assert_eq!(arr.len(), Some(3));

        let obj: Value = vec![("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(obj["a"], Value::from(1));
        assert_eq!(obj["b"], Value::from(2));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind().to_string(), "null");
        assert_eq!(Value::from(false).kind(), Kind::Boolean);
        assert_eq!(Value::from(Map::new()).kind().as_str(), "object");
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &Value) -> bool {
            v.is_null()
        }

        assert!(check_null(&Value::Null));
    }
}
