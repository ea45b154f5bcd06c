use crate::{
    CountryCodeCatalog, DecomposedParts, PhoneValue, RecomposeState, Submission,
    errors::InvalidEntryError,
};

use super::{region_code::RegionCode, test_catalog, test_codec};

#[test]
fn compose_with_regional_country() {
    let catalog = test_catalog();
    let codec = test_codec(catalog.clone());
    let us = catalog.resolve("US,1").unwrap();

    assert_eq!(codec.compose(Some(&us), "5551234567", ""), "US:+1-5551234567");
    assert_eq!(codec.compose(Some(&us), "5551234567", "123"), "US:+1-5551234567x123");
}

#[test]
fn compose_with_generic_country() {
    let catalog = test_catalog();
    let codec = test_codec(catalog.clone());
    let generic = catalog.resolve(",7").unwrap();

    assert_eq!(codec.compose(Some(&generic), "9161234567", ""), "+7-9161234567");
    // A resolved country is kept even before a number is typed.
    assert_eq!(codec.compose(Some(&generic), "", ""), "+7-");
}

#[test]
fn compose_falls_back_to_default_calling_code() {
    let codec = test_codec(test_catalog())
        .with_fallback_calling_code("1")
        .unwrap();

    assert_eq!(codec.compose(None, "5551234567", "123"), "+1-5551234567x123");
    assert_eq!(codec.compose(None, "5551234567", ""), "+1-5551234567");
    // No number, no fallback prefix.
    assert_eq!(codec.compose(None, "", ""), "");
    assert_eq!(codec.compose(None, "", "12"), "x12");
}

#[test]
fn compose_without_country_or_fallback() {
    let codec = test_codec(test_catalog());
    assert_eq!(codec.fallback_calling_code(), None);

    assert_eq!(codec.compose(None, "", ""), "");
    assert_eq!(codec.compose(None, "5551234567", ""), "5551234567");
    assert_eq!(codec.compose(None, "5551234567", "9"), "5551234567x9");
}

#[test]
fn fallback_calling_code_is_validated() {
    assert!(matches!(
        test_codec(test_catalog()).with_fallback_calling_code("01"),
        Err(InvalidEntryError::InvalidCallingCode(_))
    ));
    let codec = test_codec(test_catalog())
        .with_fallback_calling_code(" 44 ")
        .unwrap();
    assert_eq!(codec.fallback_calling_code(), Some(44));
}

#[test]
fn recompose_submission() {
    let codec = test_codec(test_catalog());
    let submission = Submission::new()
        .country("CA,1")
        .national_number("6135550123")
        .extension("");

    let (composed, state) = codec.recompose(RecomposeState::new(), &submission);
    assert_eq!(composed, "CA:+1-6135550123");
    assert_eq!(state.country().and_then(|entry| entry.region_code()), Some(RegionCode::ca()));
    assert_eq!(state.national_number(), Some("6135550123"));
    assert_eq!(state.extension(), None);
}

#[test]
fn recompose_degrades_on_unknown_choice() {
    let codec = test_codec(test_catalog())
        .with_fallback_calling_code("7")
        .unwrap();

    for choice in ["XX,1", "garbage", "DE,49", ",1"] {
        let submission = Submission::new().country(choice).national_number("9161234567");
        let (composed, state) = codec.recompose(RecomposeState::new(), &submission);
        assert_eq!(composed, "+7-9161234567", "choice {:?}", choice);
        assert!(state.country().is_none());
    }
}

#[test]
fn recompose_fills_missing_parts_from_state() {
    let codec = test_codec(test_catalog());
    let first = Submission::new()
        .country("GB,44")
        .national_number("2087654321")
        .extension("55");
    let (composed, state) = codec.recompose(RecomposeState::new(), &first);
    assert_eq!(composed, "GB:+44-2087654321x55");

    // Only the number is edited.
    let second = Submission::new().national_number("2087650000");
    let (composed, state) = codec.recompose(state, &second);
    assert_eq!(composed, "GB:+44-2087650000x55");
    assert_eq!(state.national_number(), Some("2087650000"));

    // Parts left empty compose as empty but the remembered ones stay.
    let third = Submission::new().country("").national_number("2087650000").extension("");
    let (composed, state) = codec.recompose(state, &third);
    assert_eq!(composed, "2087650000");
    assert_eq!(state.extension(), Some("55"));
    assert_eq!(state.country().and_then(|entry| entry.region_code()), Some(RegionCode::gb()));
}

#[test]
fn recompose_forgets_country_removed_from_catalog() {
    let catalog = test_catalog();
    let codec = test_codec(catalog.clone());
    let first = Submission::new().country("KZ,7").national_number("7011234567");
    let (composed, state) = codec.recompose(RecomposeState::new(), &first);
    assert_eq!(composed, "KZ:+7-7011234567");

    catalog.set_region_active(RegionCode::kz(), false);
    let (composed, _) = codec.recompose(state, &Submission::new());
    assert_eq!(composed, "7011234567");
}

#[test]
fn recompose_of_nothing_is_empty() {
    let codec = test_codec(test_catalog());
    let submission = Submission::new().country("").national_number("").extension("");
    let (composed, state) = codec.recompose(RecomposeState::new(), &submission);
    assert_eq!(composed, "");
    assert!(state.is_empty());
}

#[test]
fn decompose_value() {
    let catalog = test_catalog();
    let codec = test_codec(catalog.clone());

    let value = PhoneValue::parse("RU,9161234567").with_extension(Some("12"));
    let parts = codec.decompose(&value);
    assert_eq!(parts.country, catalog.resolve("RU,7").ok());
    assert_eq!(parts.national_number, "9161234567");
    assert_eq!(parts.extension, "12");

    let generic = codec.decompose(&PhoneValue::parse("800,12345678"));
    assert_eq!(generic.country, catalog.resolve(",800").ok());
}

#[test]
fn decompose_swallows_unknown_country() {
    let catalog = test_catalog();
    let codec = test_codec(catalog.clone());

    assert_eq!(
        codec.decompose(&PhoneValue::parse("FR,123456789")),
        DecomposedParts {
            country: None,
            national_number: "123456789".to_owned(),
            extension: String::new(),
        }
    );
    assert_eq!(codec.decompose(&PhoneValue::parse("5551234567")).country, None);

    catalog.set_calling_code_active(44, false);
    assert_eq!(codec.decompose(&PhoneValue::parse("GB,2087654321")).country, None);
}

#[test]
fn state_overlays_decomposed_parts() {
    let codec = test_codec(test_catalog());
    let decomposed = codec.decompose(&PhoneValue::parse("US,5551234567"));

    assert_eq!(RecomposeState::new().overlay(decomposed.clone()), decomposed);

    let (_, state) = codec.recompose(
        RecomposeState::new(),
        &Submission::new().national_number("5550000000").extension("7"),
    );
    let parts = state.overlay(decomposed.clone());
    assert_eq!(parts.country, decomposed.country);
    assert_eq!(parts.national_number, "5550000000");
    assert_eq!(parts.extension, "7");
}
