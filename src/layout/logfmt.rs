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

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::core::Core;
use crate::flatten::quote;

/// The machine layout.
///
/// Output format:
///
/// ```text
/// level=0 logger=europa ts=2024-08-11T14:44:57.172105000Z msg=hello user=you val1=1
/// ```
///
/// Field order is `level`, `logger` (if named), `ts` (if a timestamp
/// format is configured), `msg`, `caller` (if enabled), extras, the
/// accumulated `with_values` context, and the call-site pairs. One
/// newline-terminated line.
pub(crate) fn logfmt_line(
    core: &Core,
    level: i32,
    msg: &str,
    caller: Option<&str>,
    extras: &str,
    context: &str,
    kvs: &str,
) -> anyhow::Result<Vec<u8>> {
    let mut line = String::new();
    write!(line, "level={level}")?;
    if !core.name.is_empty() {
        write!(line, " logger={}", quote(core.name.clone()))?;
    }
    if !core.timestamp_format.is_empty() {
        let now = Timestamp::now().to_zoned(TimeZone::UTC);
        // A malformed format drops the record rather than panicking.
        let ts = jiff::fmt::strtime::format(&core.timestamp_format, &now)?;
        write!(line, " ts={}", quote(ts))?;
    }
    write!(line, " msg={}", quote(msg.to_string()))?;
    if let Some(caller) = caller {
        write!(line, " caller={caller}")?;
    }
    for part in [extras, context, kvs] {
        if !part.is_empty() {
            write!(line, " {part}")?;
        }
    }
    line.push('\n');
    Ok(line.into_bytes())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dest::Buffer;
    use crate::options::Options;
    use crate::registry::Registry;

    fn core(opts: Options) -> Core {
        Core::from_options(opts.destination(Buffer::new()), Arc::new(Registry::new()))
    }

    fn render(core: &Core, level: i32, msg: &str) -> String {
        let bytes = logfmt_line(core, level, msg, None, "", "", "").unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn minimal_line() {
        let core = core(Options::default().timestamp_format(""));
        assert_eq!(render(&core, 0, "hello"), "level=0 msg=hello\n");
    }

    #[test]
    fn message_with_spaces_is_quoted() {
        let core = core(Options::default().timestamp_format(""));
        assert_eq!(
            render(&core, 0, "the sun is shining"),
            "level=0 msg=\"the sun is shining\"\n"
        );
    }

    #[test]
    fn named_logger_precedes_message() {
        let mut core = core(Options::default().timestamp_format(""));
        core.append_name("europa");
        assert_eq!(render(&core, 1, "hello"), "level=1 logger=europa msg=hello\n");
    }

    #[test]
    fn timestamp_token_present_when_configured() {
        let core = core(Options::default());
        let line = render(&core, 0, "hello");
        assert!(line.contains(" ts="), "missing ts token: {line}");
        assert!(line.contains("msg=hello"));
    }

    #[test]
    fn trailing_parts_in_order() {
        let core = core(Options::default().timestamp_format(""));
        let bytes = logfmt_line(&core, 0, "m", None, "error=boom", "user=you", "val1=1").unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "level=0 msg=m error=boom user=you val1=1\n"
        );
    }

    #[test]
    fn caller_token_after_message() {
        let core = core(Options::default().timestamp_format(""));
        let bytes = logfmt_line(&core, 0, "m", Some("main.rs:10"), "", "", "").unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "level=0 msg=m caller=main.rs:10\n"
        );
    }
}
