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

use std::sync::Arc;

use log::{debug, trace};

use crate::phonefield::{
    catalog::{CountryCodeCatalog, CountryCodeEntry, parse_calling_code},
    errors::InvalidEntryError,
    helper_constants::{CALLING_CODE_TERMINATOR, EXTENSION_MARKER, PLUS_SIGN, REGION_CODE_SEPARATOR},
    phone_value::PhoneValue,
};

/// The three presentation parts of a phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedParts {
    /// `None` displays as "no selection".
    pub country: Option<CountryCodeEntry>,
    pub national_number: String,
    pub extension: String,
}

/// Raw values of one form submission. A part that is `None` was not
/// submitted at all and is taken from the remembered state; `Some("")` is an
/// input the user left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Choice key of the country selector.
    pub country: Option<String>,
    pub national_number: Option<String>,
    pub extension: Option<String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, choice_key: impl Into<String>) -> Self {
        self.country = Some(choice_key.into());
        self
    }

    pub fn national_number(mut self, national_number: impl Into<String>) -> Self {
        self.national_number = Some(national_number.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// Parts remembered between submissions of one form instance.
///
/// Owned by the form; pass it into [`CompositeCodec::recompose`] and keep the
/// state it hands back. Only non-empty parts are ever remembered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecomposeState {
    country: Option<CountryCodeEntry>,
    national_number: Option<String>,
    extension: Option<String>,
}

impl RecomposeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(&self) -> Option<&CountryCodeEntry> {
        self.country.as_ref()
    }

    pub fn national_number(&self) -> Option<&str> {
        self.national_number.as_deref()
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.national_number.is_none() && self.extension.is_none()
    }

    /// Replaces decomposed parts with the remembered ones, where there are any.
    pub fn overlay(&self, parts: DecomposedParts) -> DecomposedParts {
        DecomposedParts {
            country: self.country.clone().or(parts.country),
            national_number: self
                .national_number
                .clone()
                .unwrap_or(parts.national_number),
            extension: self.extension.clone().unwrap_or(parts.extension),
        }
    }
}

/// Two-way transform between a [`PhoneValue`] and its three presentation
/// parts.
///
/// Cheap to clone; the catalog is shared, never modified.
#[derive(Clone)]
pub struct CompositeCodec {
    catalog: Arc<dyn CountryCodeCatalog>,
    /// Dialing code assumed when a number is typed without picking a country.
    fallback_calling_code: Option<u16>,
}

impl CompositeCodec {
    pub fn new(catalog: Arc<dyn CountryCodeCatalog>) -> Self {
        Self {
            catalog,
            fallback_calling_code: None,
        }
    }

    pub fn with_fallback_calling_code(mut self, calling_code: &str) -> Result<Self, InvalidEntryError> {
        self.fallback_calling_code = Some(parse_calling_code(calling_code.trim())?);
        Ok(self)
    }

    pub fn catalog(&self) -> &dyn CountryCodeCatalog {
        self.catalog.as_ref()
    }

    pub fn fallback_calling_code(&self) -> Option<u16> {
        self.fallback_calling_code
    }

    /// Splits a value into presentation parts. A country id the catalog no
    /// longer knows displays as "no selection".
    pub fn decompose(&self, value: &PhoneValue) -> DecomposedParts {
        let country = value.country_id().and_then(|country_id| {
            let found = self.catalog.lookup(country_id);
            if found.is_none() {
                debug!("Country id '{}' is not selectable, showing it as unresolved", country_id);
            }
            found
        });
        DecomposedParts {
            country,
            national_number: value.national_number().to_owned(),
            extension: value.extension().unwrap_or_default().to_owned(),
        }
    }

    /// Resolves a submitted choice key. Any failure means "no country".
    pub fn resolve_choice(&self, choice_key: &str) -> Option<CountryCodeEntry> {
        if choice_key.is_empty() {
            return None;
        }
        match self.catalog.resolve(choice_key) {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Ignoring country choice: {}", err);
                None
            }
        }
    }

    /// Joins three parts into composed text:
    /// `[REGION:]+CODE-` (or `+FALLBACK-`), the national number verbatim, then
    /// `x` and the extension if there is one.
    ///
    /// Never fails; whatever cannot be resolved is left out and it is up to
    /// validation to reject the result.
    pub fn compose(
        &self,
        country: Option<&CountryCodeEntry>,
        national_number: &str,
        extension: &str,
    ) -> String {
        let mut buf = itoa::Buffer::new();
        let prefix = match (country, self.fallback_calling_code) {
            (Some(entry), _) => {
                let calling_code = buf.format(entry.calling_code());
                match entry.region_code() {
                    Some(region_code) => fast_cat::concat_str!(
                        region_code,
                        REGION_CODE_SEPARATOR,
                        PLUS_SIGN,
                        calling_code,
                        CALLING_CODE_TERMINATOR
                    ),
                    None => fast_cat::concat_str!(PLUS_SIGN, calling_code, CALLING_CODE_TERMINATOR),
                }
            }
            (None, Some(fallback)) if !national_number.is_empty() => {
                fast_cat::concat_str!(PLUS_SIGN, buf.format(fallback), CALLING_CODE_TERMINATOR)
            }
            _ => String::new(),
        };
        let extension_marker = if extension.is_empty() { "" } else { EXTENSION_MARKER };
        fast_cat::concat_str!(&prefix, national_number, extension_marker, extension)
    }

    /// Recomposes one submission, filling parts that were not submitted from
    /// `state`. Returns the composed text and the state to keep for the next
    /// submission of the same form.
    pub fn recompose(
        &self,
        state: RecomposeState,
        submission: &Submission,
    ) -> (String, RecomposeState) {
        let country = match submission.country.as_deref() {
            Some(choice_key) => self.resolve_choice(choice_key),
            // Remembered entries are re-resolved, the catalog may have changed.
            None => state
                .country
                .as_ref()
                .and_then(|entry| self.resolve_choice(&entry.choice_key())),
        };
        let national_number = submission
            .national_number
            .as_deref()
            .or(state.national_number.as_deref())
            .unwrap_or("");
        let extension = submission
            .extension
            .as_deref()
            .or(state.extension.as_deref())
            .unwrap_or("");

        let composed = self.compose(country.as_ref(), national_number, extension);
        trace!("Recomposed submission into '{}'", composed);

        let remember = |part: &str, previous: Option<String>| {
            if part.is_empty() { previous } else { Some(part.to_owned()) }
        };
        let next_state = RecomposeState {
            national_number: remember(national_number, state.national_number.clone()),
            extension: remember(extension, state.extension.clone()),
            country: country.or(state.country),
        };
        (composed, next_state)
    }
}
