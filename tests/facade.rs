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
use std::thread;

use logfmtr::Buffer;
use logfmtr::Options;
use logfmtr::Registry;
use logfmtr::Value;
use logfmtr::kvs;

fn quiet_options(buffer: &Buffer) -> Options {
    Options::default()
        .destination(buffer.clone())
        .timestamp_format("")
}

#[test]
fn info_line_field_order() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));
    registry.set_verbosity(1);

    let logger = registry
        .logger()
        .with_name("MyName")
        .with_values(kvs!["user", "you"])
        .v(1);
    logger.info("hello", kvs!["val1", 1]);

    let contents = buffer.contents();
    assert!(contents.ends_with('\n'));
    let tokens = ["level=1", "logger=MyName", "msg=hello", "user=you", "val1=1"];
    let mut at = 0;
    for token in tokens {
        let found = contents[at..]
            .find(token)
            .unwrap_or_else(|| panic!("token {token} out of order in: {contents}"));
        at += found + token.len();
    }
}

#[test]
fn info_above_threshold_emits_nothing() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));
    registry.set_verbosity(1);

    let logger = registry.logger().with_name("MyName").v(2);
    assert!(!logger.enabled());
    logger.info("hello", kvs!["val1", 1]);
    assert_eq!(buffer.contents(), "");
}

#[test]
fn negative_v_offsets_reenable() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));
    registry.set_verbosity(-1);

    let logger = registry.logger();
    assert!(!logger.enabled());
    // v offsets compose additively and may go negative.
    let quieter = logger.v(2).v(-3);
    assert!(quieter.enabled());
    quieter.info("whisper", &[]);
    assert!(buffer.contents().contains("level=-1 msg=whisper"));
}

#[test]
fn error_with_absent_error_does_not_panic() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));

    let logger = registry.logger();
    logger.error(None, "uh oh", kvs!["trouble", true]);

    let contents = buffer.contents();
    assert!(contents.contains("level=0"), "{contents}");
    assert!(contents.contains("msg=\"uh oh\""), "{contents}");
    assert!(contents.contains("error=None"), "{contents}");
    assert!(contents.contains("trouble=true"), "{contents}");
}

#[test]
fn error_renders_the_message_and_ignores_verbosity() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));
    registry.set_verbosity(-10);

    let err = std::io::Error::other("an error occurred");
    let logger = registry.logger().v(5);
    assert!(!logger.enabled());
    logger.error(Some(&err), "goodbye", kvs!["code", -1]);

    let contents = buffer.contents();
    assert!(contents.contains("error=\"an error occurred\""), "{contents}");
    assert!(contents.contains("code=-1"), "{contents}");
}

#[test]
fn options_set_before_first_use_are_picked_up() {
    let registry = Arc::new(Registry::new());
    let old_buffer = Buffer::new();
    registry.use_options(quiet_options(&old_buffer));

    let early = registry.named("before");
    let root = registry.named("after");
    let derived = root.with_values(kvs!["some", "value"]);

    // First use freezes the early options for this subtree, permanently.
    early.info("logged with the old options", &[]);

    let new_buffer = Buffer::new();
    registry.use_options(quiet_options(&new_buffer));

    root.info("logged with the new options", &[]);
    derived.info("also new options", &[]);
    early.info("still the old options", &[]);

    let old = old_buffer.contents();
    let new = new_buffer.contents();
    assert!(old.contains("msg=\"logged with the old options\""), "{old}");
    assert!(old.contains("msg=\"still the old options\""), "{old}");
    assert!(new.contains("msg=\"logged with the new options\""), "{new}");
    assert!(new.contains("msg=\"also new options\""), "{new}");
    assert!(!new.contains("old options"), "{new}");
}

#[test]
fn disabling_matches_exact_composed_name() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));

    let europa = registry.named("europa");
    europa.info("enabled", &[]);

    registry.disable("europa");
    assert!(!europa.enabled());
    europa.info("dropped", &[]);

    // A child logger composes a different name and stays enabled.
    let moon = europa.with_name("moon");
    assert!(moon.enabled());
    moon.info("child unaffected", &[]);

    registry.enable("europa");
    assert!(europa.enabled());
    europa.info("enabled again", &[]);

    let lines = buffer.lines();
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert!(lines[0].contains("msg=enabled"));
    assert!(lines[1].contains("logger=europa.moon"));
    assert!(lines[2].contains("msg=\"enabled again\""));
}

#[test]
fn odd_length_pairs_get_an_empty_value() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));

    registry.logger().info("m", kvs!["lonely"]);
    assert!(buffer.contents().contains("msg=m lonely=\n"));
}

#[test]
fn values_accumulate_across_derivations() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));

    let logger = registry
        .logger()
        .with_values(kvs!["a", 1])
        .with_values(kvs!["b", 2]);
    logger.info("m", kvs!["c", 3]);

    assert!(buffer.contents().contains("msg=m a=1 b=2 c=3"));
}

#[test]
fn humanized_output_uses_columns() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(
        Options::default()
            .destination(buffer.clone())
            .humanize(true),
    );

    let logger = registry.named("europa");
    logger.info("hello", kvs!["user", "you"]);

    let contents = buffer.contents();
    assert!(contents.starts_with("0 info  | "), "{contents}");
    assert!(contents.contains(" logger=europa "), "{contents}");
    assert!(contents.contains("user=you"), "{contents}");
}

// Logs through one extra stack frame and returns the line of the call,
// so tests can pin the caller token to an exact location.
fn emit_through_helper(logger: &logfmtr::Logger) -> u32 {
    let line = line!() + 1;
    logger.info("m", &[]);
    line
}

#[test]
fn caller_token_names_the_call_site() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer).add_caller(true));

    let line = line!() + 1;
    registry.logger().info("m", &[]);
    assert!(
        buffer.contents().contains(&format!(" caller=facade.rs:{line}")),
        "{}",
        buffer.contents()
    );
}

#[test]
fn call_depth_skips_one_wrapping_frame() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer).add_caller(true));

    let logger = registry.logger();
    let helper_line = emit_through_helper(&logger);
    assert!(
        buffer.contents().contains(&format!(" caller=facade.rs:{helper_line}")),
        "{}",
        buffer.contents()
    );
    buffer.clear();

    // Skipping one frame attributes the record to the helper's caller.
    let wrapped = logger.with_call_depth(1);
    let call_line = line!() + 1;
    emit_through_helper(&wrapped);
    assert!(
        buffer.contents().contains(&format!(" caller=facade.rs:{call_line}")),
        "{}",
        buffer.contents()
    );
}

#[test]
fn shared_handle_survives_concurrent_first_use() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));

    let logger = registry.named("shared");
    let mut handles = Vec::new();
    for i in 0..8 {
        let logger = logger.clone();
        handles.push(thread::spawn(move || {
            logger.info("hello", kvs!["thread", i]);
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), 8, "{lines:?}");
    for line in lines {
        // Every thread observed the same composed configuration.
        assert!(line.starts_with("level=0 logger=shared msg=hello"), "{line}");
    }
}

#[test]
fn with_options_bypasses_deferral() {
    let registry = Arc::new(Registry::new());
    let deferred_buffer = Buffer::new();
    registry.use_options(quiet_options(&deferred_buffer));

    let eager_buffer = Buffer::new();
    let logger = registry.with_options(quiet_options(&eager_buffer));

    // Later registry updates do not affect the materialized logger.
    registry.use_options(quiet_options(&deferred_buffer).humanize(true));
    logger.info("eager", &[]);

    assert!(eager_buffer.contents().contains("msg=eager"));
    assert_eq!(deferred_buffer.contents(), "");
}

#[test]
#[should_panic(expected = "no destination")]
fn with_options_without_destination_panics() {
    let registry = Arc::new(Registry::new());
    let _ = registry.with_options(Options::empty());
}

#[test]
fn custom_name_delimiter() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer).name_delimiter("/"));

    registry.named("a").with_name("b").with_name("c").info("m", &[]);
    assert!(buffer.contents().contains("logger=a/b/c"));
}

#[test]
fn display_and_debug_values_render() {
    let registry = Arc::new(Registry::new());
    let buffer = Buffer::new();
    registry.use_options(quiet_options(&buffer));

    let reasons = vec![0.1, 0.11, 3.14];
    registry.logger().info(
        "m",
        &[Value::from("reasons"), Value::debug(&reasons)],
    );
    assert!(
        buffer.contents().contains("reasons=\"[0.1, 0.11, 3.14]\""),
        "{}",
        buffer.contents()
    );
}
