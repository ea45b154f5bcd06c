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

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Region codes are short alphabetic identifiers ("US", "CA", "KZ").
pub const MIN_LENGTH_REGION_CODE: usize = 2;
pub const MAX_LENGTH_REGION_CODE: usize = 3;

// The minimum and maximum length of the national significant number accepted
// by the structural validator. The ITU says the maximum length should be 15,
// but longer numbers exist in Germany.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
pub const MAX_LENGTH_FOR_NSN: usize = 17;
pub const MAX_LENGTH_FOR_EXTENSION: usize = 20;

/// 128 for the longest admissible national number, 1 for the comma and 2 for
/// the country identity of the legacy encoding.
pub const MAX_STORAGE_LENGTH: usize = 131;

/// Separates region code and calling code inside a selector choice key.
pub const CHOICE_KEY_SEPARATOR: &'static str = ",";
/// Separates country identity and national number in the flat stored string.
pub const FLAT_SEPARATOR: &'static str = ",";
/// Separates the region code from the rest of the composed text.
pub const REGION_CODE_SEPARATOR: &'static str = ":";

pub const PLUS_SIGN: &'static str = "+";
pub const CALLING_CODE_TERMINATOR: &'static str = "-";
pub const EXTENSION_MARKER: &'static str = "x";

/// Label of the synthetic "no selection" option of the country selector.
pub const EMPTY_CHOICE_LABEL: &'static str = "---------";

// Punctuation users type between digit groups of a national number. Stripped
// when composed text becomes a stored value. No 'x' here, it introduces the
// extension.
pub const VALID_PUNCTUATION: &'static str = "-\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";
