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

//! Flattens alternating key/value sequences into logfmt tokens.

use crate::color::KeyPalette;
use crate::value::Value;

/// Stringifies and quotes an alternating key/value sequence into text
/// pairs, in input order. An odd-length sequence pairs the trailing key
/// with an empty value.
pub(crate) fn pairs(kvs: &[Value]) -> Vec<(String, String)> {
    let mut out = Vec::with_capacity(kvs.len().div_ceil(2));
    for chunk in kvs.chunks(2) {
        let key = quote(chunk[0].stringify());
        let value = match chunk.get(1) {
            Some(v) => quote(v.stringify()),
            None => String::new(),
        };
        out.push((key, value));
    }
    out
}

/// Joins pairs as `key=value` tokens separated by single spaces, running
/// each key through the palette. Empty input yields an empty string.
pub(crate) fn join(pairs: &[(String, String)], palette: &KeyPalette) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&palette.key(key));
        out.push('=');
        out.push_str(value);
    }
    out
}

/// Wraps text containing a space in double quotes with debug-style
/// escaping. Anything else passes through untouched, so tokens like
/// `{"k": 1}` stay as-is only when they carry no spaces.
pub(crate) fn quote(s: String) -> String {
    if s.contains(' ') { format!("{s:?}") } else { s }
}
