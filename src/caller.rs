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

//! Call-site resolution by walking the stack.

use std::path::Path;

use backtrace::Backtrace;

// How many raw frames from the top of the stack to inspect before giving
// up. Capture internals, the write path and runtime adapters all sit above
// the first user frame.
const SEARCH_WINDOW: usize = 64;

/// Resolves the logging call site as `file.rs:line`.
///
/// Walks the stack from the top, discarding frames that belong to this
/// crate, the backtrace machinery or the Rust runtime, and returns the
/// first remaining frame. `extra_skip` counts frames that survive the
/// filter, so a wrapping layer skips exactly one frame per level of
/// wrapping regardless of how the intervening runtime frames fall.
/// Capturing and resolving a backtrace is expensive; this only runs when
/// `add_caller` is configured.
pub(crate) fn resolve(extra_skip: i32) -> String {
    let mut remaining = extra_skip.max(0) as usize;
    let bt = Backtrace::new();
    for frame in bt.frames().iter().take(SEARCH_WINDOW) {
        for symbol in frame.symbols() {
            let Some(name) = symbol.name() else {
                continue;
            };
            let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                continue;
            };
            if is_runtime(&name.to_string(), file) {
                continue;
            }
            if remaining > 0 {
                remaining -= 1;
                continue;
            }
            let base = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("unknown");
            return format!("{base}:{line}");
        }
    }
    "unknown".to_string()
}

// A frame nobody would call their call site: this crate, the capture
// machinery, or std/core/alloc (closure adapters such as `bool::then`
// sit between the write path and the user frame).
fn is_runtime(name: &str, file: &Path) -> bool {
    if name.contains("logfmtr::") || name.contains("backtrace::") {
        return true;
    }
    if ["core::", "std::", "alloc::", "<core::", "<std::", "<alloc::"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
    {
        return true;
    }
    let file = file.to_string_lossy();
    file.starts_with("/rustc/")
        || file.contains("/library/std/")
        || file.contains("/library/core/")
        || file.contains("/library/alloc/")
}
