// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Values carried in key/value pairs of a log record.

use std::error::Error as StdError;
use std::fmt;

/// A single key or value in a log record.
///
/// The variants rank the stringification capabilities: plain text is used
/// verbatim, [`Display`](fmt::Display) types render themselves, errors render
/// their message, and anything else falls back to its [`Debug`](fmt::Debug)
/// form. Primitive numbers and booleans render as their plain decimal text.
///
/// Common types convert with `From`; the [`kvs!`](crate::kvs) macro applies
/// the conversion element-wise.
///
/// # Examples
///
/// ```
/// use logfmtr::Value;
///
/// let values = [Value::from("user"), Value::from(42), Value::from(true)];
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Borrowed text, used verbatim.
    Str(&'a str),
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating point number.
    Float(f64),
    /// A type that renders itself via [`fmt::Display`].
    Display(&'a dyn fmt::Display),
    /// An error, rendered as its message. `None` renders as the literal
    /// `None` rather than failing.
    Error(Option<&'a (dyn StdError + 'static)>),
    /// Fallback rendering via [`fmt::Debug`].
    Debug(&'a dyn fmt::Debug),
}

impl<'a> Value<'a> {
    /// Wraps a [`Display`](fmt::Display) type.
    pub fn display<T: fmt::Display>(value: &'a T) -> Value<'a> {
        Value::Display(value)
    }

    /// Wraps an error.
    pub fn error<E: StdError + 'static>(err: &'a E) -> Value<'a> {
        Value::Error(Some(err))
    }

    /// Wraps any [`Debug`](fmt::Debug) type, the rendering of last resort.
    pub fn debug<T: fmt::Debug>(value: &'a T) -> Value<'a> {
        Value::Debug(value)
    }

    pub(crate) fn stringify(&self) -> String {
        match *self {
            Value::Str(s) => s.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Uint(u) => u.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Display(v) => v.to_string(),
            Value::Error(Some(err)) => err.to_string(),
            Value::Error(None) => "None".to_string(),
            Value::Debug(v) => format!("{v:?}"),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Str(value)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(impl From<$t> for Value<'_> {
            fn from(value: $t) -> Self {
                Value::Int(value as i64)
            }
        })+
    };
}

macro_rules! impl_from_uint {
    ($($t:ty),+) => {
        $(impl From<$t> for Value<'_> {
            fn from(value: $t) -> Self {
                Value::Uint(value as u64)
            }
        })+
    };
}

impl_from_int!(i8, i16, i32, i64, isize);
impl_from_uint!(u8, u16, u32, u64, usize);

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

/// Builds a key/value slice for [`Logger::info`](crate::Logger::info) and
/// friends, converting each element with [`Value::from`].
///
/// # Examples
///
/// ```
/// let logger = logfmtr::new();
/// logger.info("hello", logfmtr::kvs!["user", "you", "val1", 1]);
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        &[] as &[$crate::Value<'_>]
    };
    ($($item:expr),+ $(,)?) => {
        &[$($crate::Value::from($item)),+]
    };
}
