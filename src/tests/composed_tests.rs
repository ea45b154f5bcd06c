use crate::{ComposedNumber, PhoneValue, errors::ValueError, parse_composed};

#[test]
fn split_composed_text() {
    let composed = ComposedNumber::parse("US:+1-555-123-4567x89").unwrap();
    assert_eq!(composed.region_code, Some("US"));
    assert_eq!(composed.calling_code, Some("1"));
    assert_eq!(composed.national_number, "555-123-4567");
    assert_eq!(composed.extension, Some("89"));

    let bare = ComposedNumber::parse("5551234567").unwrap();
    assert_eq!(bare.region_code, None);
    assert_eq!(bare.calling_code, None);
    assert_eq!(bare.national_number, "5551234567");
    assert_eq!(bare.extension, None);
}

#[test]
fn composed_text_to_value() {
    assert_eq!(
        parse_composed("US:+1-(555) 123-4567x89"),
        Ok(PhoneValue::new(Some("US"), "5551234567").with_extension(Some("89")))
    );
    assert_eq!(
        parse_composed("+7-916 123 45 67"),
        Ok(PhoneValue::new(Some("7"), "9161234567"))
    );
    assert_eq!(
        parse_composed("kz:+7-7011234567"),
        Ok(PhoneValue::new(Some("KZ"), "7011234567"))
    );
    assert_eq!(parse_composed("5551234567"), Ok(PhoneValue::new(None, "5551234567")));
    assert_eq!(parse_composed(""), Ok(PhoneValue::default()));
}

#[test]
fn composed_text_with_letters_is_malformed() {
    assert_eq!(
        parse_composed("+1-555FLOWERS"),
        Err(ValueError::Malformed("555FLOWERS".to_owned()))
    );
    assert_eq!(
        parse_composed("+1-5551234567x1a"),
        Err(ValueError::Malformed("1a".to_owned()))
    );
    assert!(parse_composed("+1-555x12x3").is_err());
}
