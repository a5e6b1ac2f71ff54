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

use crate::dest::Destination;
use crate::dest::Stdout;

/// Configuration applied to a logger when it materializes.
///
/// `Options::default()` writes logfmt lines to stdout with nanosecond UTC
/// timestamps and `.`-delimited names. Adjust individual fields with the
/// builder methods, then pass the result to [`use_options`](crate::use_options)
/// or [`with_options`](crate::with_options).
///
/// # Examples
///
/// ```
/// use logfmtr::Options;
///
/// let opts = Options::default().humanize(true).colorize(true);
/// logfmtr::use_options(opts);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) destination: Option<Arc<dyn Destination>>,
    pub(crate) humanize: bool,
    pub(crate) colorize: bool,
    pub(crate) timestamp_format: String,
    pub(crate) name_delimiter: String,
    pub(crate) add_caller: bool,
    pub(crate) caller_skip: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            destination: Some(Arc::new(Stdout)),
            humanize: false,
            colorize: false,
            timestamp_format: "%Y-%m-%dT%H:%M:%S.%9fZ".to_string(),
            name_delimiter: ".".to_string(),
            add_caller: false,
            caller_skip: 0,
        }
    }
}

impl Options {
    /// Options with nothing configured, not even a destination. A logger
    /// materialized from these panics; set a destination first.
    pub fn empty() -> Self {
        Self {
            destination: None,
            humanize: false,
            colorize: false,
            timestamp_format: String::new(),
            name_delimiter: String::new(),
            add_caller: false,
            caller_skip: 0,
        }
    }

    /// Sets where log lines are written.
    pub fn destination(mut self, destination: impl Destination + 'static) -> Self {
        self.destination = Some(Arc::new(destination));
        self
    }

    /// Switches output to the human-friendly columnar format.
    pub fn humanize(mut self, humanize: bool) -> Self {
        self.humanize = humanize;
        self
    }

    /// Adds color to the output. Only applies if `humanize` is also set.
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Sets the strftime format for log timestamps. Set to empty to disable
    /// timestamping. The humanized format uses a fixed short timestamp.
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Sets the delimiter placed between appended logger name segments.
    pub fn name_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.name_delimiter = delimiter.into();
        self
    }

    /// Includes the file and line of the logging call site in each record.
    pub fn add_caller(mut self, add_caller: bool) -> Self {
        self.add_caller = add_caller;
        self
    }

    /// Adds stack frames to skip when resolving the caller. Useful when
    /// this logger is wrapped by another logging layer.
    pub fn caller_skip(mut self, skip: i32) -> Self {
        self.caller_skip = skip;
        self
    }
}
