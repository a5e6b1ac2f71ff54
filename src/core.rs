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

use std::sync::Arc;

use crate::caller;
use crate::color::KeyPalette;
use crate::dest::Destination;
use crate::flatten;
use crate::layout;
use crate::layout::Kind;
use crate::options::Options;
use crate::registry::Registry;
use crate::value::Value;

/// The materialized configuration snapshot behind a logger handle.
///
/// A `Core` is immutable once built: every derivation clones it and edits
/// the clone, so two handles share one only when one handle is an
/// un-derived alias of the other.
#[derive(Debug, Clone)]
pub(crate) struct Core {
    pub(crate) registry: Arc<Registry>,
    pub(crate) destination: Arc<dyn Destination>,
    /// Accumulated verbosity offset from `v` derivations.
    pub(crate) level: i32,
    /// Composed display name, segments joined by the configured delimiter.
    pub(crate) name: String,
    /// Context pairs accumulated by `with_values`, already stringified
    /// and quoted. Key colorization happens at write time.
    pub(crate) values: Vec<(String, String)>,
    pub(crate) humanize: bool,
    pub(crate) colorize: bool,
    pub(crate) timestamp_format: String,
    pub(crate) name_delimiter: String,
    pub(crate) add_caller: bool,
    pub(crate) caller_skip: i32,
}

impl Core {
    /// Builds a root core from an options snapshot.
    ///
    /// Panics if the options carry no destination: a logger with nowhere
    /// to write would silently drop every record, which is a fatal
    /// misconfiguration rather than a recoverable condition.
    pub(crate) fn from_options(opts: Options, registry: Arc<Registry>) -> Core {
        let Some(destination) = opts.destination else {
            panic!("logfmtr: logger options carry no destination");
        };
        Core {
            registry,
            destination,
            level: 0,
            name: String::new(),
            values: Vec::new(),
            humanize: opts.humanize,
            colorize: opts.colorize && opts.humanize,
            timestamp_format: opts.timestamp_format,
            name_delimiter: opts.name_delimiter,
            add_caller: opts.add_caller,
            caller_skip: opts.caller_skip,
        }
    }

    pub(crate) fn append_name(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if self.name.is_empty() {
            self.name = name.to_string();
        } else {
            self.name = format!("{}{}{}", self.name, self.name_delimiter, name);
        }
    }

    pub(crate) fn append_values(&mut self, pairs: &[(String, String)]) {
        self.values.extend_from_slice(pairs);
    }

    pub(crate) fn bump_level(&mut self, delta: i32) {
        self.level += delta;
    }

    pub(crate) fn bump_caller_skip(&mut self, delta: i32) {
        self.caller_skip += delta;
    }

    /// Whether a record at this core's accumulated offset would emit:
    /// the offset must not exceed the global threshold and, when named,
    /// the exact composed name must not be disabled.
    pub(crate) fn enabled(&self) -> bool {
        if self.level > self.registry.verbosity() {
            return false;
        }
        if self.name.is_empty() {
            return true;
        }
        !self.registry.is_disabled(&self.name)
    }

    pub(crate) fn palette(&self) -> KeyPalette {
        KeyPalette::new(self.colorize)
    }

    /// Formats one record and writes it as a single newline-terminated
    /// line. Failures never surface; logging must not alter the caller's
    /// control flow.
    pub(crate) fn write(&self, level: i32, kind: Kind, msg: &str, extras: &[Value], kvs: &[Value]) {
        let palette = self.palette();
        let extras = flatten::join(&flatten::pairs(extras), &palette);
        let context = flatten::join(&self.values, &palette);
        let kvs = flatten::join(&flatten::pairs(kvs), &palette);
        let caller = self.add_caller.then(|| caller::resolve(self.caller_skip));

        let line = if self.humanize {
            layout::human_line(self, level, kind, msg, caller.as_deref(), &extras, &context, &kvs)
        } else {
            layout::logfmt_line(self, level, msg, caller.as_deref(), &extras, &context, &kvs)
        };
        if let Ok(line) = line {
            let _ = self.destination.write_line(&line);
        }
    }
}
