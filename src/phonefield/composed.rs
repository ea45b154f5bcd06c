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

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    macros::owned_from_cow_or,
    phonefield::{
        errors::ValueError,
        helper_constants::{CALLING_CODE_TERMINATOR, EXTENSION_MARKER, REGION_CODE_SEPARATOR},
        phone_value::PhoneValue,
    },
    regex_util::RegexFullMatch,
    string_util::{is_ascii_digits, strip_visual_separators},
};

// [REGION:]+CODE-NUMBER[xEXTENSION]
static COMPOSED_TEXT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "^(?:(?P<region>[A-Za-z]{{2,3}}){})?(?:\\+(?P<code>[0-9]{{1,3}}){})?(?P<number>[^{}]*)(?:{}(?P<extension>.*))?$",
        regex::escape(REGION_CODE_SEPARATOR),
        regex::escape(CALLING_CODE_TERMINATOR),
        EXTENSION_MARKER,
        regex::escape(EXTENSION_MARKER),
    );
    Regex::new(&pattern).expect("composed text pattern is a valid regex")
});

/// Composed text split back into its pieces. Slices borrow the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposedNumber<'a> {
    pub region_code: Option<&'a str>,
    pub calling_code: Option<&'a str>,
    pub national_number: &'a str,
    pub extension: Option<&'a str>,
}

impl<'a> ComposedNumber<'a> {
    pub fn parse(text: &'a str) -> Result<Self, ValueError> {
        let captures = COMPOSED_TEXT_PATTERN
            .full_captures(text)
            .ok_or_else(|| ValueError::Malformed(text.to_owned()))?;
        let non_empty = |name: &str| {
            captures
                .name(name)
                .map(|matched| matched.as_str())
                .filter(|s| !s.is_empty())
        };
        Ok(Self {
            region_code: non_empty("region"),
            calling_code: non_empty("code"),
            national_number: captures.name("number").map_or("", |matched| matched.as_str()),
            extension: non_empty("extension"),
        })
    }

    /// Builds the canonical value. The region code wins over the calling code
    /// as country identity; grouping punctuation is dropped from the number.
    pub fn to_value(&self) -> Result<PhoneValue, ValueError> {
        let national_number = owned_from_cow_or!(
            strip_visual_separators(self.national_number),
            self.national_number.to_owned()
        );
        if !national_number.is_empty() && !is_ascii_digits(&national_number) {
            return Err(ValueError::Malformed(self.national_number.to_owned()));
        }
        if let Some(extension) = self.extension {
            if !is_ascii_digits(extension) {
                return Err(ValueError::Malformed(extension.to_owned()));
            }
        }
        let country_id = self
            .region_code
            .map(|code| code.to_ascii_uppercase())
            .or_else(|| self.calling_code.map(str::to_owned));
        Ok(PhoneValue::new(country_id.as_deref(), national_number).with_extension(self.extension))
    }
}

/// Turns composed text into the canonical value.
pub fn parse_composed(text: &str) -> Result<PhoneValue, ValueError> {
    ComposedNumber::parse(text)?.to_value()
}
