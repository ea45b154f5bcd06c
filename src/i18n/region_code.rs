use std::borrow::Cow;

use crate::phonefield::helper_constants::{MAX_LENGTH_REGION_CODE, MIN_LENGTH_REGION_CODE};

pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Checks shape only: 2 or 3 ASCII letters, any case. The unknown region
    /// is not a valid catalog region.
    pub fn is_valid(code: &str) -> bool {
        (MIN_LENGTH_REGION_CODE..=MAX_LENGTH_REGION_CODE).contains(&code.len())
            && code.bytes().all(|b| b.is_ascii_alphabetic())
            && !code.eq_ignore_ascii_case(Self::get_unknown())
    }

    /// Region codes are compared upper-cased.
    pub fn normalize(code: &str) -> Cow<'_, str> {
        if code.bytes().any(|b| b.is_ascii_lowercase()) {
            Cow::Owned(code.to_ascii_uppercase())
        } else {
            Cow::Borrowed(code)
        }
    }
}
