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

use logfmtr::Logger;
use logfmtr::Value;
use logfmtr::kvs;

fn main() {
    logfmtr::set_verbosity(1);

    demo(logfmtr::new());

    let opts = logfmtr::default_options().humanize(true).colorize(true);
    demo(logfmtr::with_options(opts));

    disable_demo();
}

fn demo(base: Logger) {
    let log = base.with_name("MyName").with_values(kvs!["user", "you"]);
    log.info("hello", kvs!["val1", 1, "val2", 2]);
    log.v(1).info("you should see this", &[]);
    log.v(1).v(1).info("you should NOT see this", &[]);

    let reasons = vec![0.1, 0.11, 3.14];
    log.error(
        None,
        "uh oh",
        &[
            Value::from("trouble"),
            Value::from(true),
            Value::from("reasons"),
            Value::debug(&reasons),
        ],
    );

    let err = std::io::Error::other("an error occurred");
    log.error(Some(&err), "goodbye", kvs!["code", -1]);
}

fn disable_demo() {
    let log = logfmtr::named("europa");
    log.info("hello, this logger is enabled", &[]);

    logfmtr::disable_logger("europa");
    log.info("you should NOT see this, the logger is disabled", &[]);

    let log2 = log.with_name("moon");
    log2.info("you should see this, a child does not inherit the disable", &[]);

    logfmtr::enable_logger("europa");
    log.info("you should see this now, the logger was enabled again", &[]);
}
