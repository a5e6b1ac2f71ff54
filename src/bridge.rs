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

//! Integration with the `log` facade.
//!
//! [`install`] registers a [`Logger`] as the process-wide backend for the
//! `log` crate. `error!` records map to [`Logger::error`]; `warn!` and
//! `info!` emit at verbosity offset 0, `debug!` at 1 and `trace!` at 2,
//! so the global verbosity threshold controls them like any other
//! derived handle.
//!
//! # Examples
//!
//! ```
//! logfmtr::bridge::install(logfmtr::new()).expect("no other logger installed");
//!
//! log::info!("the sun is shining");
//! ```

use log::Level;

use crate::Logger;
use crate::Value;

/// Error returned when the global `log` backend is already claimed.
#[derive(Debug, thiserror::Error)]
#[error("failed to install the log bridge: {0}")]
pub struct SetupError(#[from] log::SetLoggerError);

#[derive(Debug)]
struct Bridge {
    base: Logger,
    debug: Logger,
    trace: Logger,
}

impl Bridge {
    fn handle(&self, level: Level) -> &Logger {
        match level {
            Level::Error | Level::Warn | Level::Info => &self.base,
            Level::Debug => &self.debug,
            Level::Trace => &self.trace,
        }
    }
}

impl log::Log for Bridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.handle(metadata.level()).enabled()
    }

    fn log(&self, record: &log::Record) {
        let msg = record.args().to_string();
        let kvs = [Value::Str("module"), Value::Str(record.target())];
        match record.level() {
            Level::Error => self.base.error(None, &msg, &kvs),
            level => self.handle(level).info(&msg, &kvs),
        }
    }

    fn flush(&self) {}
}

/// Installs `logger` as the backend for the global `log` facade.
///
/// The verbosity handles are derived once, up front, so installing a
/// still-deferred logger freezes its configuration on the first record.
/// Panics if `logger` is the null logger, which cannot be derived from.
pub fn install(logger: Logger) -> Result<(), SetupError> {
    let bridge = Bridge {
        debug: logger.v(1),
        trace: logger.v(2),
        base: logger,
    };
    log::set_boxed_logger(Box::new(bridge))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
