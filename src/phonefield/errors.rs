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

use thiserror::Error;

/// Coarse classification shared by every error of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input has the wrong shape: an unsplittable choice key, a stored value
    /// that is not text, composed text that cannot be taken apart.
    Malformed,
    /// A choice key that matches no active catalog entry.
    NotFound,
    /// A value longer than the storage column admits.
    OutOfRange,
    /// Nothing was submitted for a required field.
    Required,
    /// The validator rejected the composed text.
    Invalid,
}

#[derive(Debug, PartialEq, Error)]
pub enum InvalidEntryError {
    #[error("Invalid calling code '{0}': expected 1 to 3 digits without a leading zero")]
    InvalidCallingCode(String),
    #[error("Invalid region code '{0}': expected 2 or 3 letters")]
    InvalidRegionCode(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidEntry(#[from] InvalidEntryError),
    #[error("Region '{region_code}' is already used by active entry '{existing_key}'")]
    DuplicateRegion {
        region_code: String,
        existing_key: String,
    },
}

#[derive(Debug, PartialEq, Error)]
pub enum ResolveError {
    #[error("Choice key '{0}' is not a pair of region code and calling code")]
    Malformed(String),
    #[error("No active country code matches choice key '{0}'")]
    NotFound(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum ValueError {
    #[error("'{0}' is an invalid value.")]
    Malformed(String),
}

#[derive(Debug, PartialEq, Error)]
pub enum FieldError {
    #[error("{0}")]
    Value(#[from] ValueError),
    #[error("This field is required.")]
    Required,
    #[error("Enter a valid phone number: '{0}'")]
    InvalidNumber(String),
    #[error("Ensure this value has at most {max} characters (it has {length}).")]
    OutOfRange { length: usize, max: usize },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Malformed(_) => ErrorKind::Malformed,
            ResolveError::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl ValueError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Malformed
    }
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Value(err) => err.kind(),
            FieldError::Required => ErrorKind::Required,
            FieldError::InvalidNumber(_) => ErrorKind::Invalid,
            FieldError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
