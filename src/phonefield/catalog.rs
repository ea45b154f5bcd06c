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

use std::{
    borrow::Cow,
    sync::{Mutex, MutexGuard},
};

use dashmap::DashMap;
use log::{trace, warn};

use crate::{
    i18n::RegionCode,
    phonefield::{
        errors::{CatalogError, InvalidEntryError, ResolveError},
        helper_constants::{
            CHOICE_KEY_SEPARATOR, EMPTY_CHOICE_LABEL, MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN,
        },
    },
    string_util::is_ascii_digits,
};

/// Parses a calling code: 1 to 3 ASCII digits, no leading zero.
pub fn parse_calling_code(code: &str) -> Result<u16, InvalidEntryError> {
    if !is_ascii_digits(code) || code.len() > MAX_LENGTH_COUNTRY_CODE || code.starts_with('0') {
        return Err(InvalidEntryError::InvalidCallingCode(code.to_owned()));
    }
    code.parse()
        .map_err(|_| InvalidEntryError::InvalidCallingCode(code.to_owned()))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    code: String,
    name: String,
}

impl Region {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One row of the calling-code catalog.
///
/// Several entries may share a calling code (regions under NANPA share 1,
/// Russia and Kazakhstan share 7), told apart by their region. An entry with
/// no region is the generic entry for its calling code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCodeEntry {
    calling_code: u16,
    region: Option<Region>,
    active: bool,
}

impl CountryCodeEntry {
    /// Creates the generic, region-less entry for a calling code.
    pub fn generic(calling_code: &str) -> Result<Self, InvalidEntryError> {
        Ok(Self {
            calling_code: parse_calling_code(calling_code.trim())?,
            region: None,
            active: true,
        })
    }

    pub fn regional(
        calling_code: &str,
        region_code: &str,
        region_name: impl Into<String>,
    ) -> Result<Self, InvalidEntryError> {
        let calling_code = parse_calling_code(calling_code.trim())?;
        let region_code = region_code.trim();
        if !RegionCode::is_valid(region_code) {
            return Err(InvalidEntryError::InvalidRegionCode(region_code.to_owned()));
        }
        Ok(Self {
            calling_code,
            region: Some(Region {
                code: RegionCode::normalize(region_code).into_owned(),
                name: region_name.into(),
            }),
            active: true,
        })
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region.as_ref().map(Region::code)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Human readable label the selector is ordered by: the region name, or
    /// `+<calling code>` for a generic entry.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.region {
            Some(region) => Cow::Borrowed(region.name()),
            None => {
                let mut buf = itoa::Buffer::new();
                Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, buf.format(self.calling_code)))
            }
        }
    }

    /// Identity stored in the flat string: the region code, or the calling
    /// code digits for a generic entry.
    pub fn country_id(&self) -> String {
        match &self.region {
            Some(region) => region.code.clone(),
            None => itoa::Buffer::new().format(self.calling_code).to_owned(),
        }
    }

    /// Encodes the entry as a selector choice key, `<region>,<calling code>`
    /// with an empty region part for a generic entry.
    pub fn choice_key(&self) -> String {
        let mut buf = itoa::Buffer::new();
        fast_cat::concat_str!(
            self.region_code().unwrap_or(""),
            CHOICE_KEY_SEPARATOR,
            buf.format(self.calling_code)
        )
    }

    pub(crate) fn matches(&self, calling_code: u16, region_code: &str) -> bool {
        self.calling_code == calling_code
            && match self.region_code() {
                Some(code) => code == region_code,
                // An empty region part only ever selects the generic entry.
                None => region_code.is_empty(),
            }
    }
}

/// Splits a choice key into its trimmed, upper-cased region part and its
/// calling code. `Ok(None)` means the key splits but names no calling code.
fn split_choice_key(key: &str) -> Result<Option<(Cow<'_, str>, u16)>, ResolveError> {
    let mut parts = key.split(CHOICE_KEY_SEPARATOR);
    let (Some(region_part), Some(code_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ResolveError::Malformed(key.to_owned()));
    };
    let Ok(calling_code) = parse_calling_code(code_part.trim()) else {
        return Ok(None);
    };
    Ok(Some((RegionCode::normalize(region_part.trim()), calling_code)))
}

/// An entry together with the activation state of its calling code and
/// region, as the data source reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub entry: CountryCodeEntry,
    pub calling_code_active: bool,
    pub region_active: bool,
}

impl CatalogRow {
    /// Regions and calling codes can be deactivated on their own, hiding
    /// every entry that refers to them.
    pub fn is_selectable(&self) -> bool {
        self.entry.active
            && self.calling_code_active
            && (self.entry.region.is_none() || self.region_active)
    }
}

/// One option of the country selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
    /// `None` for the "no selection" option.
    pub entry: Option<CountryCodeEntry>,
}

impl SelectOption {
    pub fn empty() -> Self {
        Self {
            key: String::new(),
            label: EMPTY_CHOICE_LABEL.to_owned(),
            entry: None,
        }
    }

    fn from_entry(entry: CountryCodeEntry) -> Self {
        Self {
            key: entry.choice_key(),
            label: entry.label().into_owned(),
            entry: Some(entry),
        }
    }
}

/// Read interface over whatever stores calling-code rows.
///
/// Implementors only supply [`CountryCodeCatalog::rows`]; listing and
/// resolution are shared. Rows are re-read on every call, so activation
/// changes made between two calls are honored.
pub trait CountryCodeCatalog: Send + Sync {
    fn rows(&self) -> Vec<CatalogRow>;

    /// Selectable entries ordered by label, preceded by the empty choice.
    fn list_selectable(&self) -> Vec<SelectOption> {
        let mut options = self
            .rows()
            .into_iter()
            .filter(CatalogRow::is_selectable)
            .map(|row| SelectOption::from_entry(row.entry))
            .collect::<Vec<_>>();
        options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.key.cmp(&b.key)));
        options.insert(0, SelectOption::empty());
        options
    }

    /// Resolves a choice key produced by [`CountryCodeEntry::choice_key`]
    /// back to its selectable entry.
    fn resolve(&self, key: &str) -> Result<CountryCodeEntry, ResolveError> {
        let not_found = || ResolveError::NotFound(key.to_owned());
        let (region_code, calling_code) = split_choice_key(key)?.ok_or_else(not_found)?;
        self.rows()
            .into_iter()
            .filter(CatalogRow::is_selectable)
            .map(|row| row.entry)
            .find(|entry| entry.matches(calling_code, &region_code))
            .ok_or_else(not_found)
    }

    /// Finds the selectable entry a stored `country_id` refers to.
    fn lookup(&self, country_id: &str) -> Option<CountryCodeEntry> {
        let country_id = country_id.trim();
        if country_id.is_empty() {
            return None;
        }
        let found = if is_ascii_digits(country_id) {
            let calling_code = parse_calling_code(country_id).ok()?;
            self.rows()
                .into_iter()
                .filter(CatalogRow::is_selectable)
                .map(|row| row.entry)
                .find(|entry| entry.matches(calling_code, ""))
        } else {
            let region_code = RegionCode::normalize(country_id);
            self.rows()
                .into_iter()
                .filter(CatalogRow::is_selectable)
                .map(|row| row.entry)
                .find(|entry| entry.region_code() == Some(region_code.as_ref()))
        };
        if found.is_none() {
            trace!("Country id '{}' does not match any selectable entry", country_id);
        }
        found
    }
}

/// Process-wide catalog kept in memory.
///
/// Readers never block each other; an administrator may toggle activation
/// while forms keep resolving against it.
pub struct InMemoryCatalog {
    /// Entries by choice key.
    entries: DashMap<String, CountryCodeEntry>,
    /// Calling codes and regions absent from these maps are active.
    calling_code_activity: DashMap<u16, bool>,
    region_activity: DashMap<String, bool>,
    /// Held by writers for a whole check-then-write; readers never take it.
    write_lock: Mutex<()>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            calling_code_activity: DashMap::new(),
            region_activity: DashMap::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = CountryCodeEntry>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds or replaces the entry with the same choice key.
    ///
    /// Fails if the entry is active and another active entry already uses its
    /// region.
    pub fn insert(&self, entry: CountryCodeEntry) -> Result<(), CatalogError> {
        let _guard = self.lock_writes();
        let key = entry.choice_key();
        if entry.active {
            self.check_region_free(&entry, &key)?;
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Accepts keys in any form [`CountryCodeCatalog::resolve`] does.
    /// Returns `Ok(false)` when no entry has this choice key.
    pub fn set_entry_active(&self, key: &str, active: bool) -> Result<bool, CatalogError> {
        let Ok(Some((region_code, calling_code))) = split_choice_key(key) else {
            return Ok(false);
        };
        let _guard = self.lock_writes();
        let Some(entry) = self
            .entries
            .iter()
            .find(|item| item.value().matches(calling_code, &region_code))
            .map(|item| item.value().clone())
        else {
            return Ok(false);
        };
        let key = entry.choice_key();
        if active {
            self.check_region_free(&entry, &key)?;
        }
        if let Some(mut stored) = self.entries.get_mut(&key) {
            stored.active = active;
        }
        Ok(true)
    }

    pub fn set_calling_code_active(&self, calling_code: u16, active: bool) {
        self.calling_code_activity.insert(calling_code, active);
    }

    pub fn set_region_active(&self, region_code: &str, active: bool) {
        self.region_activity
            .insert(RegionCode::normalize(region_code.trim()).into_owned(), active);
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // Guards no data, a poisoned lock is still usable.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_region_free(&self, entry: &CountryCodeEntry, key: &str) -> Result<(), CatalogError> {
        let Some(region_code) = entry.region_code() else {
            return Ok(());
        };
        // Collect first, the map must not be borrowed when the caller inserts.
        let existing_key = self
            .entries
            .iter()
            .find(|other| {
                other.key() != key && other.active && other.region_code() == Some(region_code)
            })
            .map(|other| other.key().clone());
        match existing_key {
            Some(existing_key) => {
                warn!(
                    "Refusing second active entry for region {} (already used by '{}')",
                    region_code, existing_key
                );
                Err(CatalogError::DuplicateRegion {
                    region_code: region_code.to_owned(),
                    existing_key,
                })
            }
            None => Ok(()),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryCodeCatalog for InMemoryCatalog {
    fn rows(&self) -> Vec<CatalogRow> {
        self.entries
            .iter()
            .map(|item| {
                let entry = item.value().clone();
                let calling_code_active = self
                    .calling_code_activity
                    .get(&entry.calling_code)
                    .map_or(true, |active| *active);
                let region_active = entry
                    .region_code()
                    .and_then(|code| self.region_activity.get(code).map(|active| *active))
                    .unwrap_or(true);
                CatalogRow {
                    entry,
                    calling_code_active,
                    region_active,
                }
            })
            .collect()
    }
}
