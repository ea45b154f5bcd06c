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

use std::fmt;

use crate::phonefield::{errors::ValueError, helper_constants::FLAT_SEPARATOR};

/// A raw value arriving from storage or from application code, before it is
/// known to be a phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Null,
    Text(String),
    /// Column drivers may hand text over as bytes; only UTF-8 is accepted.
    Bytes(Vec<u8>),
    Value(PhoneValue),
}

/// Canonical phone number value: country identity, national number and an
/// optional extension.
///
/// Values are never changed in place, every `with_*` call builds a new one.
/// The extension lives only in the presentation parts, the flat string
/// produced by [`PhoneValue::serialize`] does not carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneValue {
    country_id: Option<String>,
    national_number: String,
    extension: Option<String>,
}

impl PhoneValue {
    /// An empty `country_id` means "no country resolved yet".
    pub fn new(country_id: Option<&str>, national_number: impl Into<String>) -> Self {
        Self {
            country_id: country_id.filter(|id| !id.is_empty()).map(str::to_owned),
            national_number: national_number.into(),
            extension: None,
        }
    }

    pub fn with_country_id(&self, country_id: Option<&str>) -> Self {
        Self {
            country_id: country_id.filter(|id| !id.is_empty()).map(str::to_owned),
            ..self.clone()
        }
    }

    pub fn with_extension(&self, extension: Option<&str>) -> Self {
        Self {
            extension: extension.filter(|ext| !ext.is_empty()).map(str::to_owned),
            ..self.clone()
        }
    }

    pub fn country_id(&self) -> Option<&str> {
        self.country_id.as_deref()
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.country_id.is_none() && self.national_number.is_empty() && self.extension.is_none()
    }

    /// A country is resolved, the national number is digits and so is the
    /// extension if there is one.
    pub fn is_complete(&self) -> bool {
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        self.country_id.is_some()
            && is_digits(&self.national_number)
            && self.extension.as_deref().map_or(true, is_digits)
    }

    /// Parses the flat stored string `<country_id>,<national_number>`.
    ///
    /// Never fails: text without a comma is a bare national number, the empty
    /// string is the empty value.
    pub fn parse(text: &str) -> Self {
        match text.split_once(FLAT_SEPARATOR) {
            Some((country_id, national_number)) => Self::new(Some(country_id), national_number),
            None => Self::new(None, text),
        }
    }

    /// Flat string for storage. The comma is written whenever a country id is
    /// present, even before an empty national number, so that
    /// `parse(serialize(v)) == v` holds for every parsed `v`.
    pub fn serialize(&self) -> String {
        match &self.country_id {
            Some(country_id) => {
                fast_cat::concat_str!(country_id, FLAT_SEPARATOR, &self.national_number)
            }
            None => self.national_number.clone(),
        }
    }

    /// Normalizes whatever the storage layer or the application hands over.
    /// Empty input of any shape yields `None`.
    pub fn from_input(input: FieldInput) -> Result<Option<Self>, ValueError> {
        let value = match input {
            FieldInput::Null => return Ok(None),
            FieldInput::Value(value) => value,
            FieldInput::Text(text) => Self::parse(&text),
            FieldInput::Bytes(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Self::parse(&text),
                Err(err) => {
                    return Err(ValueError::Malformed(
                        String::from_utf8_lossy(err.as_bytes()).into_owned(),
                    ));
                }
            },
        };
        Ok((!value.is_empty()).then_some(value))
    }
}

impl From<&str> for PhoneValue {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for PhoneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
