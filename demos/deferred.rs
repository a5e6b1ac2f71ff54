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

use logfmtr::kvs;

fn main() {
    let l1 = logfmtr::new().with_name("before");
    let l2 = logfmtr::named("after");
    let l3 = l2.with_values(kvs!["some", "value"]);

    // First use freezes the defaults for l1's subtree.
    l1.info("this is logged with the default options", &[]);

    let opts = logfmtr::default_options().humanize(true).colorize(true);
    logfmtr::use_options(opts);

    l2.info("this is logged with the new options, first use was deferred", &[]);
    l3.info("this also picks up the new options", &[]);
    l1.info("this keeps the old options, first use came before the update", &[]);
}
