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

use std::error::Error as StdError;
use std::sync::Arc;

use crate::core::Core;
use crate::flatten;
use crate::layout::Kind;
use crate::options::Options;
use crate::registry::Registry;
use crate::sink::Derivation;
use crate::sink::Sink;
use crate::value::Value;

/// A logger handle.
///
/// Handles are cheap to clone and safe to share across threads. A handle
/// created by [`new`](crate::new) or by any derivation records only its
/// recipe; the first [`info`](Logger::info), [`error`](Logger::error) or
/// [`enabled`](Logger::enabled) call freezes the composed configuration
/// for the handle and everything later derived from it. Registry options
/// set before that first use are picked up; options set after are not.
///
/// # Examples
///
/// ```
/// let logger = logfmtr::new().with_name("app").with_values(logfmtr::kvs!["user", "you"]);
/// logger.info("the sun is shining", &[]);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Inner,
}

#[derive(Debug, Clone)]
enum Inner {
    Deferred(Arc<Sink>),
    Null,
}

impl Logger {
    pub(crate) fn from_sink(sink: Sink) -> Logger {
        Logger {
            inner: Inner::Deferred(Arc::new(sink)),
        }
    }

    /// The no-op logger. It emits nothing, reports disabled, and panics if
    /// asked to derive: it carries no configuration to derive from, so a
    /// derivation is a programming error.
    pub fn null() -> Logger {
        Logger { inner: Inner::Null }
    }

    /// Reports whether [`info`](Logger::info) would emit, materializing
    /// the handle on first call. The accumulated `v` offset must not
    /// exceed the global verbosity threshold and the composed name must
    /// not be disabled.
    pub fn enabled(&self) -> bool {
        match &self.inner {
            Inner::Deferred(sink) => sink.core().enabled(),
            Inner::Null => false,
        }
    }

    /// Logs a message with key/value context at the handle's verbosity
    /// offset. Suppressed when [`enabled`](Logger::enabled) is false.
    pub fn info(&self, msg: &str, kvs: &[Value]) {
        let Inner::Deferred(sink) = &self.inner else {
            return;
        };
        let core = sink.core();
        if core.enabled() {
            core.write(core.level, Kind::Info, msg, &[], kvs);
        }
    }

    /// Logs an error with a message and key/value context. Emits
    /// regardless of the verbosity threshold. A `None` error renders as
    /// the literal absent-error text instead of failing.
    pub fn error(&self, err: Option<&(dyn StdError + 'static)>, msg: &str, kvs: &[Value]) {
        let Inner::Deferred(sink) = &self.inner else {
            return;
        };
        let extras = [Value::Str("error"), Value::Error(err)];
        sink.core().write(0, Kind::Error, msg, &extras, kvs);
    }

    /// Returns a handle whose verbosity offset is shifted by `delta`.
    /// Offsets compose additively across derivations and may be negative.
    /// `v(0)` returns an un-derived alias of this handle.
    pub fn v(&self, delta: i32) -> Logger {
        if delta == 0 && matches!(self.inner, Inner::Deferred(_)) {
            return self.clone();
        }
        self.derive(Derivation::Verbosity(delta))
    }

    /// Returns a handle with a name segment appended using the configured
    /// delimiter. An empty `name` appends nothing.
    pub fn with_name(&self, name: &str) -> Logger {
        self.derive(Derivation::Name(name.to_string()))
    }

    /// Returns a handle with additional key/value context. The values are
    /// stringified now, so later mutations of the source data do not
    /// affect the recorded text.
    pub fn with_values(&self, kvs: &[Value]) -> Logger {
        self.derive(Derivation::Values(flatten::pairs(kvs)))
    }

    /// Returns a handle that skips `delta` additional stack frames when
    /// resolving the caller. Useful when this logger is wrapped by
    /// another logging layer.
    pub fn with_call_depth(&self, delta: i32) -> Logger {
        self.derive(Derivation::CallDepth(delta))
    }

    fn derive(&self, derivation: Derivation) -> Logger {
        match &self.inner {
            Inner::Deferred(sink) => Logger::from_sink(sink.derive(derivation)),
            Inner::Null => panic!("logfmtr: the null logger cannot be derived from"),
        }
    }
}

impl Registry {
    /// A deferred root logger bound to this registry rather than the
    /// process-global one.
    pub fn logger(self: &Arc<Self>) -> Logger {
        Logger::from_sink(Sink::root(self.clone()))
    }

    /// A deferred root logger with a name, bound to this registry.
    pub fn named(self: &Arc<Self>, name: &str) -> Logger {
        self.logger().with_name(name)
    }

    /// An immediately materialized logger bound to this registry,
    /// bypassing deferral. Panics if `opts` carry no destination.
    pub fn with_options(self: &Arc<Self>, opts: Options) -> Logger {
        Logger::from_sink(Sink::materialized(Core::from_options(opts, self.clone())))
    }
}
