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

use std::fmt::Write;

use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::core::Core;
use crate::layout::Kind;

// The humanized format always uses a fixed short UTC timestamp.
const TIMESTAMP_FORMAT: &str = "%H:%M:%S.%6f";

/// The human-friendly columnar layout.
///
/// Output format:
///
/// ```text
/// 1 info  | 14:44:57.172105 | hello                          logger=europa user=you
/// ```
///
/// The kind token is colored red (error) or green (info) when colorize is
/// set; logger and caller appear unquoted, followed by extras, the
/// accumulated context and the call-site pairs.
pub(crate) fn human_line(
    core: &Core,
    level: i32,
    kind: Kind,
    msg: &str,
    caller: Option<&str>,
    extras: &str,
    context: &str,
    kvs: &str,
) -> anyhow::Result<Vec<u8>> {
    let kind_token = if core.colorize {
        match kind {
            Kind::Error => kind.as_str().red().bold().to_string(),
            Kind::Info => format!("{} ", kind.as_str().green().bold()),
        }
    } else {
        kind.as_str().to_string()
    };
    let now = Timestamp::now().to_zoned(TimeZone::UTC);
    let ts = jiff::fmt::strtime::format(TIMESTAMP_FORMAT, &now)?;

    let mut line = String::new();
    write!(line, "{level} {kind_token:<5} | {ts:>15} | {msg:<30}")?;
    if !core.name.is_empty() {
        write!(line, " {}={}", core.palette().key("logger"), core.name)?;
    }
    if let Some(caller) = caller {
        write!(line, " {}={}", core.palette().key("caller"), caller)?;
    }
    for part in [extras, context, kvs] {
        if !part.is_empty() {
            write!(line, " {part}")?;
        }
    }
    line.push('\n');
    Ok(line.into_bytes())
}
