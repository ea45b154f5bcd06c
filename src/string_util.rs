// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::phonefield::helper_constants::VALID_PUNCTUATION;

static VISUAL_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]+", VALID_PUNCTUATION)).expect("punctuation class is a valid regex")
});

/// Returns true for a non-empty string made of ASCII digits only.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Removes grouping punctuation ("555-123 4567", "(555) 123.4567").
///
/// Returns `Cow::Borrowed` when nothing had to be removed.
pub fn strip_visual_separators(s: &str) -> Cow<'_, str> {
    VISUAL_SEPARATORS.replace_all(s, "")
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{is_ascii_digits, strip_visual_separators};

    #[test]
    fn test_strip_visual_separators() {
        assert_eq!(strip_visual_separators("5551234567"), Cow::Borrowed("5551234567"));
        assert!(matches!(strip_visual_separators("5551234567"), Cow::Borrowed(_)));
        assert_eq!(strip_visual_separators("(555) 123-45.67"), "5551234567");
        assert_eq!(strip_visual_separators("555\u{2013}123\u{00A0}4567"), "5551234567");
        assert_eq!(strip_visual_separators("555x12"), "555x12");
    }

    #[test]
    fn test_is_ascii_digits() {
        assert!(is_ascii_digits("0123456789"));
        assert!(!is_ascii_digits(""));
        assert!(!is_ascii_digits("12a"));
        assert!(!is_ascii_digits("１２"));
    }
}
