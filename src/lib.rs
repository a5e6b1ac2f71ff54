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

//! Logfmtr is a structured logging facade that writes logfmt-style
//! `key=value` lines, or a human-friendly columnar form, and defers logger
//! configuration until first use.
//!
//! # Overview
//!
//! Loggers created by [`new`] record nothing up front: the first `info`,
//! `error` or `enabled` call materializes the composed configuration from
//! the process-wide defaults. A module-level logger can therefore be
//! constructed before `main` has called [`use_options`] and still pick up
//! the configuration set later, as long as nothing logged through it in
//! between. Derivations ([`Logger::with_name`], [`Logger::with_values`],
//! [`Logger::v`], [`Logger::with_call_depth`]) never mutate their parent;
//! each returns a new deferred handle.
//!
//! # Examples
//!
//! Simple logging with default options:
//!
//! ```
//! let logger = logfmtr::new();
//! logger.info("the sun is shining", logfmtr::kvs!["sky", "blue"]);
//! ```
//!
//! Deferred configuration:
//!
//! ```
//! use logfmtr::Options;
//!
//! // Created early, e.g. as a module-level logger.
//! let logger = logfmtr::named("app");
//!
//! // Configured later, before first use.
//! logfmtr::use_options(Options::default().humanize(true).colorize(true));
//!
//! // Materializes here, with the humanized options.
//! logger.info("the sun is shining", &[]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod context;

mod caller;
mod color;
mod core;
mod dest;
mod flatten;
mod layout;
mod logger;
mod options;
mod registry;
mod sink;
mod value;

pub use dest::Buffer;
pub use dest::Destination;
pub use dest::Stderr;
pub use dest::Stdout;
pub use logger::Logger;
pub use options::Options;
pub use registry::Registry;
pub use value::Value;

use crate::core::Core;
use crate::sink::Sink;

/// Returns a deferred logger that writes logfmt lines using the default
/// options. Configuration is resolved on the first `info`, `error` or
/// `enabled` call, on this handle or any handle derived from it.
pub fn new() -> Logger {
    Logger::from_sink(Sink::root(registry::global()))
}

/// Returns a deferred logger with the given name.
pub fn named(name: &str) -> Logger {
    new().with_name(name)
}

/// Returns an immediately materialized logger using the supplied options,
/// bypassing deferral. Panics if the options carry no destination.
pub fn with_options(opts: Options) -> Logger {
    Logger::from_sink(Sink::materialized(Core::from_options(
        opts,
        registry::global(),
    )))
}

/// The no-op logger. See [`Logger::null`].
pub fn null() -> Logger {
    Logger::null()
}

/// The options [`new`] loggers materialize with unless overridden by
/// [`use_options`]. Tweak fields with the builder methods and pass the
/// result back.
pub fn default_options() -> Options {
    Options::default()
}

/// Sets the options that loggers will use when they materialize. Loggers
/// that already materialized keep the configuration they froze.
pub fn use_options(opts: Options) {
    registry::global().use_options(opts);
}

/// Sets the global verbosity threshold, returning the previous value.
/// Only loggers with an accumulated `v` offset less than or equal to this
/// value emit `info` records.
pub fn set_verbosity(verbosity: i32) -> i32 {
    registry::global().set_verbosity(verbosity)
}

/// Disables every logger whose composed name is exactly `name`. Loggers
/// derived with a further name segment are unaffected.
pub fn disable_logger(name: &str) {
    registry::global().disable(name);
}

/// Re-enables a previously disabled logger name.
pub fn enable_logger(name: &str) {
    registry::global().enable(name);
}
