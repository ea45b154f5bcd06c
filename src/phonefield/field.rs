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

use std::collections::HashMap;

use log::{debug, warn};
use strum::IntoEnumIterator;

use crate::phonefield::{
    FieldPart,
    catalog::SelectOption,
    codec::{CompositeCodec, DecomposedParts, RecomposeState, Submission},
    composed::parse_composed,
    errors::FieldError,
    helper_constants::MAX_STORAGE_LENGTH,
    phone_value::{FieldInput, PhoneValue},
    validator::{InternationalNumberValidator, PhoneNumberValidator},
};

/// Bridges the codec to a host framework: storage column on one side, three
/// form inputs on the other.
pub struct PhoneNumberField {
    codec: CompositeCodec,
    validator: Box<dyn PhoneNumberValidator>,
    max_length: usize,
    required: bool,
}

impl PhoneNumberField {
    pub fn new(codec: CompositeCodec) -> Self {
        Self {
            codec,
            validator: Box::new(InternationalNumberValidator),
            max_length: MAX_STORAGE_LENGTH,
            required: true,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_validator(mut self, validator: impl PhoneNumberValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn codec(&self) -> &CompositeCodec {
        &self.codec
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Options of the country selector.
    pub fn select_options(&self) -> Vec<SelectOption> {
        self.codec.catalog().list_selectable()
    }

    pub fn to_value(&self, input: FieldInput) -> Result<Option<PhoneValue>, FieldError> {
        Ok(PhoneValue::from_input(input)?)
    }

    /// Flat string to write into the column, `None` for an empty value.
    pub fn get_prep_value(&self, input: FieldInput) -> Result<Option<String>, FieldError> {
        let Some(value) = self.to_value(input)? else {
            return Ok(None);
        };
        let flat = value.serialize();
        self.check_length(&flat)?;
        Ok(Some(flat))
    }

    /// Reads a column value back. Stored text is trusted: it was written by
    /// [`PhoneNumberField::get_prep_value`].
    pub fn from_db_value(&self, stored: Option<&str>) -> Option<PhoneValue> {
        stored
            .map(PhoneValue::parse)
            .filter(|value| !value.is_empty())
    }

    /// Collects the three submitted parts of the field called `name`.
    /// Missing keys stay `None`.
    pub fn value_from_datadict(&self, data: &HashMap<String, String>, name: &str) -> Submission {
        let mut submission = Submission::new();
        for part in FieldPart::iter() {
            let raw = data.get(&part.widget_name(name)).cloned();
            match part {
                FieldPart::Country => submission.country = raw,
                FieldPart::NationalNumber => submission.national_number = raw,
                FieldPart::Extension => submission.extension = raw,
            }
        }
        submission
    }

    /// Recomposes and validates one submission.
    ///
    /// The returned state must be kept by the form and passed to the next
    /// call, whatever the outcome.
    pub fn clean(
        &self,
        state: RecomposeState,
        submission: &Submission,
    ) -> (Result<Option<PhoneValue>, FieldError>, RecomposeState) {
        let (composed, state) = self.codec.recompose(state, submission);
        (self.clean_composed(&composed), state)
    }

    /// Validates composed text and turns it into the value to store.
    pub fn clean_composed(&self, composed: &str) -> Result<Option<PhoneValue>, FieldError> {
        if composed.is_empty() {
            return if self.required {
                Err(FieldError::Required)
            } else {
                Ok(None)
            };
        }
        if !self.validator.is_valid(composed) {
            debug!("Rejecting composed phone number '{}'", composed);
            return Err(FieldError::InvalidNumber(composed.to_owned()));
        }
        let value = parse_composed(composed)?;
        self.check_length(&value.serialize())?;
        Ok(Some(value))
    }

    /// Initial parts of the three inputs: the stored value, overridden by
    /// whatever the user submitted earlier in this interaction. The generic
    /// entry of the fallback calling code shows as "no selection".
    pub fn widget_parts(&self, value: Option<&PhoneValue>, state: &RecomposeState) -> DecomposedParts {
        let decomposed = value
            .map(|value| self.codec.decompose(value))
            .unwrap_or_default();
        let mut parts = state.overlay(decomposed);
        let shows_fallback = match (&parts.country, self.codec.fallback_calling_code()) {
            (Some(entry), Some(fallback)) => {
                entry.region_code().is_none() && entry.calling_code() == fallback
            }
            _ => false,
        };
        if shows_fallback {
            parts.country = None;
        }
        parts
    }

    fn check_length(&self, flat: &str) -> Result<(), FieldError> {
        let length = flat.chars().count();
        if length > self.max_length {
            warn!(
                "Phone number '{}' does not fit the column ({} > {})",
                flat, length, self.max_length
            );
            return Err(FieldError::OutOfRange {
                length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}
