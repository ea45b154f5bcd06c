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

use strum::EnumIter;

/// The three independently editable inputs of a phone number field, in
/// presentation order.
///
/// Each part is addressed by its position: submitted data for a field named
/// `phone` arrives as `phone_0`, `phone_1` and `phone_2`.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPart {
    /// **Country selector.**
    /// Carries a choice key built from region code and calling code, or an
    /// empty string for "no selection".
    Country,
    /// **National number.**
    /// Free text the user typed, digits optionally grouped with punctuation.
    NationalNumber,
    /// **Extension.**
    /// Optional digits dialed after the connection is established.
    Extension,
}

impl FieldPart {
    pub fn index(self) -> usize {
        match self {
            FieldPart::Country => 0,
            FieldPart::NationalNumber => 1,
            FieldPart::Extension => 2,
        }
    }

    /// Name under which the part's value is submitted.
    pub fn widget_name(self, field_name: &str) -> String {
        let mut buf = itoa::Buffer::new();
        fast_cat::concat_str!(field_name, "_", buf.format(self.index()))
    }

    /// Id of the part's input element, derived from the id given to the
    /// whole field. A trailing `_0` is dropped first, so both `id_phone` and
    /// `id_phone_0` yield `id_phone_1` for the national number.
    pub fn id_for_label(self, base_id: &str) -> String {
        if base_id.is_empty() {
            return String::new();
        }
        let base_id = base_id.strip_suffix("_0").unwrap_or(base_id);
        self.widget_name(base_id)
    }
}
