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

use log::trace;
use regex::Regex;

use crate::{
    phonefield::helper_constants::{
        CALLING_CODE_TERMINATOR, EXTENSION_MARKER, MAX_LENGTH_FOR_EXTENSION, MAX_LENGTH_FOR_NSN,
        MIN_LENGTH_FOR_NSN, REGION_CODE_SEPARATOR, VALID_PUNCTUATION,
    },
    regex_util::RegexFullMatch,
};

/// Decides whether composed text is an acceptable international phone
/// number. Any `Fn(&str) -> bool` qualifies.
pub trait PhoneNumberValidator: Send + Sync {
    fn is_valid(&self, composed: &str) -> bool;
}

impl<F> PhoneNumberValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, composed: &str) -> bool {
        self(composed)
    }
}

static VALID_INTERNATIONAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "^(?:[A-Za-z]{{2,3}}{})?\\+[1-9][0-9]{{0,2}}{}[{}]*(?:[0-9][{}]*){{{},{}}}(?:{}[0-9]{{1,{}}})?$",
        regex::escape(REGION_CODE_SEPARATOR),
        regex::escape(CALLING_CODE_TERMINATOR),
        VALID_PUNCTUATION,
        VALID_PUNCTUATION,
        MIN_LENGTH_FOR_NSN,
        MAX_LENGTH_FOR_NSN,
        regex::escape(EXTENSION_MARKER),
        MAX_LENGTH_FOR_EXTENSION,
    );
    Regex::new(&pattern).expect("international number pattern is a valid regex")
});

/// Structural check only: a `+<code>-` prefix, an optional region before it,
/// 2 to 17 national digits possibly grouped with punctuation and an optional
/// `x` extension. No numbering-plan metadata is consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternationalNumberValidator;

impl PhoneNumberValidator for InternationalNumberValidator {
    fn is_valid(&self, composed: &str) -> bool {
        let valid = VALID_INTERNATIONAL_NUMBER.full_match(composed);
        if !valid {
            trace!("Composed text '{}' is not an international phone number", composed);
        }
        valid
    }
}
