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

//! Ambient logger propagation.
//!
//! A handle can be installed as the current logger for a lexical scope on
//! the current thread and retrieved by code that has no way to receive it
//! as a parameter. The storage is a private thread-local, so foreign code
//! can neither collide with it nor forge an entry. The handle travels with
//! its materialized-or-pending state: a deferred handle stays deferred
//! until someone logs through it.
//!
//! # Examples
//!
//! ```
//! use logfmtr::context;
//!
//! let root = logfmtr::new().with_name("request").v(2);
//! context::scope(root, || {
//!     let logger = context::current();
//!     logger.info("the sun is shining", &[]);
//! });
//! ```

use std::cell::RefCell;

use crate::Logger;

thread_local! {
    static STACK: RefCell<Vec<Logger>> = const { RefCell::new(Vec::new()) };
}

/// Runs `f` with `logger` as the ambient logger for the current thread.
/// Scopes nest; the innermost one wins. The previous ambient logger is
/// restored when `f` returns or unwinds.
pub fn scope<F, R>(logger: Logger, f: F) -> R
where
    F: FnOnce() -> R,
{
    STACK.with(|stack| stack.borrow_mut().push(logger));
    let _guard = PopGuard;
    f()
}

/// Returns the ambient logger for the current thread, or a fresh deferred
/// logger when no scope is active.
pub fn current() -> Logger {
    STACK
        .with(|stack| stack.borrow().last().cloned())
        .unwrap_or_else(crate::new)
}

struct PopGuard;

impl Drop for PopGuard {
    fn drop(&mut self) {
        let _ = STACK.try_with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
