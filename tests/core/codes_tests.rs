//! Tests for ISO alpha-2 codes
//!
//! Tests cover:
//! - Parsing and display
//! - Serialization
//! - Use as lookup input

use nameorder::{Iso2Code, NameOrderLookup};
use strum::IntoEnumIterator;

#[test]
fn test_code_parse_any_case() {
    assert_eq!("gb".parse::<Iso2Code>().unwrap(), Iso2Code::GB);
    assert_eq!("Gb".parse::<Iso2Code>().unwrap(), Iso2Code::GB);
    assert!("XX".parse::<Iso2Code>().is_err());
}

#[test]
fn test_code_serialize() {
    assert_eq!(serde_json::to_string(&Iso2Code::KR).unwrap(), r#""KR""#);
    let code: Iso2Code = serde_json::from_str(r#""KR""#).unwrap();
    assert_eq!(code, Iso2Code::KR);
}

#[test]
fn test_codes_sorted() {
    let codes: Vec<Iso2Code> = Iso2Code::iter().collect();
    let mut sorted = codes.clone();
    sorted.sort_by_key(|c| c.as_str());
    assert_eq!(codes, sorted);
}

#[test]
fn test_not_every_code_in_dataset() {
    let lookup = NameOrderLookup::bundled();
    let present = Iso2Code::iter().filter(|c| lookup.contains(c)).count();
    assert_eq!(present, lookup.len());
    assert!(present < Iso2Code::iter().count());
    // Antarctica has no naming conventions
    assert!(lookup.names(Iso2Code::AQ).is_empty());
}
