use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn year_suffix_parses_as_years() {
    assert_eq!("1a".parse::<ExpiresIn>(), Ok(ExpiresIn::years(1)));
    assert_eq!("3a".parse::<ExpiresIn>(), Ok(ExpiresIn::years(3)));
}

#[test]
fn other_suffixes_parse_as_days() {
    assert_eq!("7d".parse::<ExpiresIn>(), Ok(ExpiresIn::days(7)));
    assert_eq!("30x".parse::<ExpiresIn>(), Ok(ExpiresIn::days(30)));
}

#[test]
fn bare_number_parses_as_days() {
    assert_eq!("14".parse::<ExpiresIn>(), Ok(ExpiresIn::days(14)));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!("  2a ".parse::<ExpiresIn>(), Ok(ExpiresIn::years(2)));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!("".parse::<ExpiresIn>(), Err(ExpiryParseError::Empty));
    assert_eq!("   ".parse::<ExpiresIn>(), Err(ExpiryParseError::Empty));
}

#[test]
fn missing_magnitude_is_rejected() {
    assert_eq!("a".parse::<ExpiresIn>(), Err(ExpiryParseError::MissingMagnitude));
    assert_eq!("d7d".parse::<ExpiresIn>(), Err(ExpiryParseError::MissingMagnitude));
    assert_eq!("1 a".parse::<ExpiresIn>(), Err(ExpiryParseError::MissingMagnitude));
}

#[test]
fn zero_magnitude_is_rejected() {
    assert_eq!("0d".parse::<ExpiresIn>(), Err(ExpiryParseError::Zero));
}

#[test]
fn oversized_magnitudes_are_rejected() {
    assert_eq!("99999999999d".parse::<ExpiresIn>(), Err(ExpiryParseError::Overflow));
    assert_eq!("20000000a".parse::<ExpiresIn>(), Err(ExpiryParseError::Overflow));
}

#[test]
fn multibyte_unit_character_is_accepted_as_days() {
    assert_eq!("5é".parse::<ExpiresIn>(), Ok(ExpiresIn::days(5)));
}

// =============================================================
// Conversion
// =============================================================

#[test]
fn days_convert_to_same_magnitude() {
    assert_eq!(ExpiresIn::days(7).as_days(), 7);
}

#[test]
fn years_convert_to_365_days_each() {
    assert_eq!(ExpiresIn::years(1).as_days(), 365);
    assert_eq!(ExpiresIn::years(2).as_days(), 730);
}

#[test]
fn display_uses_compact_form() {
    assert_eq!(ExpiresIn::years(1).to_string(), "1a");
    assert_eq!(ExpiresIn::days(10).to_string(), "10d");
}
