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

//! Destinations for formatted log lines.

use std::fmt;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// A destination for formatted log lines.
///
/// Implementations receive one complete, newline-terminated line per call
/// and must tolerate concurrent use. Write errors never reach the logging
/// caller; the line is dropped.
pub trait Destination: fmt::Debug + Send + Sync {
    /// Writes one complete line.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

/// A destination that prints log lines to stdout.
///
/// # Examples
///
/// ```
/// use logfmtr::{Options, Stdout};
///
/// let opts = Options::default().destination(Stdout);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Destination for Stdout {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stdout().write_all(line)
    }
}

/// A destination that prints log lines to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Destination for Stderr {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        io::stderr().write_all(line)
    }
}

/// An in-memory destination that captures everything written to it.
///
/// Clones share the same underlying buffer, so a test can keep one clone
/// for assertions while the logger owns the other.
///
/// # Examples
///
/// ```
/// use logfmtr::{Buffer, Options};
///
/// let buffer = Buffer::new();
/// let logger = logfmtr::with_options(Options::default().destination(buffer.clone()));
/// logger.info("hello", &[]);
/// assert!(buffer.contents().contains("msg=hello"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything captured so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&inner).into_owned()
    }

    /// Returns the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Destination for Buffer {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(line);
        Ok(())
    }
}
