mod phonefield;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Boilerplate that reads better as a named macro than as a few lines of
/// code at every call site.
mod macros;

#[cfg(test)]
mod tests;

pub use phonefield::{
    FieldPart, MAX_STORAGE_LENGTH,
    catalog::{
        CatalogRow, CountryCodeCatalog, CountryCodeEntry, InMemoryCatalog, Region, SelectOption,
        parse_calling_code,
    },
    codec::{CompositeCodec, DecomposedParts, RecomposeState, Submission},
    composed::{ComposedNumber, parse_composed},
    errors,
    field::PhoneNumberField,
    phone_value::{FieldInput, PhoneValue},
    validator::{InternationalNumberValidator, PhoneNumberValidator},
};
