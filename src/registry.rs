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

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

use arc_swap::ArcSwap;

use crate::options::Options;

/// Process-wide logger configuration: the default options picked up by
/// newly materializing root loggers, the global verbosity threshold, and
/// the set of disabled logger names.
///
/// One global instance backs the crate-level free functions, which is what
/// most programs want. Tests construct their own registries so that
/// configuration does not leak between cases.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use logfmtr::Registry;
///
/// let registry = Arc::new(Registry::new());
/// registry.set_verbosity(1);
/// let logger = registry.logger();
/// ```
pub struct Registry {
    options: Mutex<Options>,
    verbosity: AtomicI32,
    disabled: ArcSwap<HashSet<String>>,
    // Fast path checked before any set lookup on log emission.
    any_disabled: AtomicBool,
    // Serializes writers of `disabled`; readers stay lock-free.
    disabled_writers: Mutex<()>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry with default options, verbosity 0 and no
    /// disabled loggers.
    pub fn new() -> Self {
        Self {
            options: Mutex::new(Options::default()),
            verbosity: AtomicI32::new(0),
            disabled: ArcSwap::from_pointee(HashSet::new()),
            any_disabled: AtomicBool::new(false),
            disabled_writers: Mutex::new(()),
        }
    }

    /// Sets the options that root loggers will use when they materialize.
    /// Loggers that have already materialized keep their configuration.
    pub fn use_options(&self, opts: Options) {
        let mut current = self.options.lock().unwrap_or_else(PoisonError::into_inner);
        *current = opts;
    }

    /// Sets the global verbosity threshold, returning the previous value.
    /// Only loggers whose accumulated `v` offset is less than or equal to
    /// this value emit `info` records.
    pub fn set_verbosity(&self, verbosity: i32) -> i32 {
        self.verbosity.swap(verbosity, Ordering::SeqCst)
    }

    /// The current global verbosity threshold.
    pub fn verbosity(&self) -> i32 {
        self.verbosity.load(Ordering::Relaxed)
    }

    /// Disables every logger whose composed name is exactly `name`.
    /// Loggers deriving a longer name stay enabled. Idempotent.
    pub fn disable(&self, name: &str) {
        self.set_disabled(name, true);
    }

    /// Re-enables a previously disabled logger name. Idempotent.
    pub fn enable(&self, name: &str) {
        self.set_disabled(name, false);
    }

    fn set_disabled(&self, name: &str, disabled: bool) {
        let _guard = self
            .disabled_writers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let current = self.disabled.load();
        let mut next: HashSet<String> = current
            .iter()
            .filter(|n| n.as_str() != name)
            .cloned()
            .collect();
        if disabled {
            next.insert(name.to_string());
        }
        let any = !next.is_empty();
        self.disabled.store(Arc::new(next));
        self.any_disabled.store(any, Ordering::SeqCst);
    }

    pub(crate) fn is_disabled(&self, name: &str) -> bool {
        if !self.any_disabled.load(Ordering::Relaxed) {
            return false;
        }
        self.disabled.load().contains(name)
    }

    /// A consistent copy of the current default options.
    pub(crate) fn options_snapshot(&self) -> Options {
        self.options
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("verbosity", &self.verbosity())
            .field("any_disabled", &self.any_disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

static GLOBAL: LazyLock<Arc<Registry>> = LazyLock::new(|| Arc::new(Registry::new()));

/// The process-global registry backing the crate-level functions.
pub(crate) fn global() -> Arc<Registry> {
    GLOBAL.clone()
}
