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
use std::sync::OnceLock;

use crate::core::Core;
use crate::registry::Registry;

/// One derivation step recorded by a deferred sink, applied to a copy of
/// the parent's core when the sink materializes.
#[derive(Debug, Clone)]
pub(crate) enum Derivation {
    /// Append a name segment using the configured delimiter.
    Name(String),
    /// Append context pairs. Stringification already happened at the
    /// `with_values` call site; only key colorization is still pending.
    Values(Vec<(String, String)>),
    /// Shift the accumulated verbosity offset.
    Verbosity(i32),
    /// Shift the accumulated caller-frame skip.
    CallDepth(i32),
}

impl Derivation {
    fn apply(&self, core: &mut Core) {
        match self {
            Derivation::Name(name) => core.append_name(name),
            Derivation::Values(pairs) => core.append_values(pairs),
            Derivation::Verbosity(delta) => core.bump_level(*delta),
            Derivation::CallDepth(delta) => core.bump_caller_skip(*delta),
        }
    }
}

/// A deferred logger sink.
///
/// Holds only its configuration recipe (a parent reference plus one
/// derivation) until first use, then materializes a [`Core`] exactly once
/// and caches it. Configuration supplied to the registry after a sink was
/// created but before its first use is therefore still picked up; a sink
/// used earlier keeps whatever was in effect at that moment, permanently,
/// for itself and everything later derived from it.
#[derive(Debug)]
pub(crate) struct Sink {
    cell: OnceLock<Core>,
    parent: Option<Arc<Sink>>,
    derivation: Option<Derivation>,
    registry: Arc<Registry>,
    #[cfg(test)]
    materializations: std::sync::atomic::AtomicUsize,
}

impl Sink {
    /// A deferred root sink bound to `registry`.
    pub(crate) fn root(registry: Arc<Registry>) -> Sink {
        Sink {
            cell: OnceLock::new(),
            parent: None,
            derivation: None,
            registry,
            #[cfg(test)]
            materializations: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// A sink that is already materialized, bypassing deferral.
    pub(crate) fn materialized(core: Core) -> Sink {
        let registry = core.registry.clone();
        let cell = OnceLock::new();
        let _ = cell.set(core);
        Sink {
            cell,
            parent: None,
            derivation: None,
            registry,
            #[cfg(test)]
            materializations: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// A new deferred sink recording one derivation on top of `self`.
    /// The receiver is untouched whether or not it has materialized.
    pub(crate) fn derive(self: &Arc<Self>, derivation: Derivation) -> Sink {
        Sink {
            cell: OnceLock::new(),
            parent: Some(self.clone()),
            derivation: Some(derivation),
            registry: self.registry.clone(),
            #[cfg(test)]
            materializations: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Materializes this sink, memoized.
    ///
    /// Roots snapshot the registry's default options; derived sinks copy
    /// their parent's core by value (materializing the parent first, also
    /// memoized) and apply their own derivation to the copy. Concurrent
    /// first use funnels through the `OnceLock` gate, so every caller
    /// observes the same fully-built core. The parent chain is acyclic by
    /// construction, so the recursion cannot deadlock.
    pub(crate) fn core(&self) -> &Core {
        self.cell.get_or_init(|| {
            #[cfg(test)]
            self.materializations
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            let mut core = match &self.parent {
                Some(parent) => parent.core().clone(),
                None => Core::from_options(self.registry.options_snapshot(), self.registry.clone()),
            };
            if let Some(derivation) = &self.derivation {
                derivation.apply(&mut core);
            }
            core
        })
    }
}
