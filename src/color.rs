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

//! Color utilities.

use colored::Colorize;

/// Colors for record keys in the humanized, colorized output mode.
///
/// The `error` key is red, the structural `logger` and `caller` keys are
/// blue, and every other key is yellow. Values are never colorized.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyPalette {
    enabled: bool,
}

impl KeyPalette {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colorizes a key, or passes it through when the palette is disabled.
    pub(crate) fn key(&self, key: &str) -> String {
        if !self.enabled {
            return key.to_string();
        }
        match key {
            "error" => key.red().bold().to_string(),
            "logger" | "caller" => key.blue().bold().to_string(),
            _ => key.yellow().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_palette_passes_through() {
        let palette = KeyPalette::new(false);
        assert_eq!(palette.key("error"), "error");
        assert_eq!(palette.key("anything"), "anything");
    }
}
