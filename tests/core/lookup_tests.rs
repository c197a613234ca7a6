//! Tests for naming order lookups
//!
//! Tests cover:
//! - Component lists from the bundled dataset
//! - Case-insensitive primary lookups
//! - Fallback handling in both fallback-taking lookups
//! - Strict record lookups and their error reasons
//! - Agreement between the split and unsplit lookups

use crate::common::{fixtures, lookup_from};
use nameorder::{
    names, names_enum, names_with_fallback, record, Iso2Code, LookupError, NameOrderLookup,
    NotFoundReason,
};
use serde_json::json;

// ============================================
// names
// ============================================

#[test]
fn test_names_japan_prefers_localized() {
    assert_eq!(names("JP"), vec!["姓", "名"]);
}

#[test]
fn test_names_english_only_country() {
    assert_eq!(names("US"), vec!["Given Name", "Middle Name", "Family Name"]);
}

#[test]
fn test_names_single_component() {
    assert_eq!(names("ID"), vec!["Nama"]);
}

#[test]
fn test_names_skips_null_and_empty_labels() {
    // Sri Lanka has only null/empty localized labels
    assert_eq!(names("LK"), vec!["Given Name", "Family Name"]);
    // Singapore's first localized label is null, the next one wins
    assert_eq!(names("SG"), vec!["姓", "名"]);
}

#[test]
fn test_names_follows_authored_label_order() {
    // The first localized label as written in the data wins, not the
    // alphabetically first one
    assert_eq!(names("CH"), vec!["Vorname", "Nachname"]);
    assert_eq!(names("IL"), vec!["שם פרטי", "שם משפחה"]);
    assert_eq!(names("AF"), vec!["نوم", "تخلص"]);
    assert_eq!(names_enum("BE", None).other, Some("Voornaam + Achternaam"));
}

#[test]
fn test_names_accepts_typed_codes() {
    assert_eq!(names(Iso2Code::VN), vec!["Họ", "Tên đệm", "Tên"]);
}

#[test]
fn test_names_non_empty_for_every_record() {
    let lookup = NameOrderLookup::bundled();
    for record in lookup.records() {
        let components = lookup.names(&record.code);
        assert!(!components.is_empty(), "{} has no components", record.code);
        assert!(
            components.iter().all(|c| !c.is_empty()),
            "{} has an empty component",
            record.code
        );
    }
}

#[test]
fn test_names_unknown_code_is_empty() {
    assert!(names("ZZ").is_empty());
    assert!(names("").is_empty());
    assert!(names("USA").is_empty());
}

#[test]
fn test_names_ignores_case() {
    assert_eq!(names("jp"), names("JP"));
    assert_eq!(names("hU"), names("HU"));
}

#[test]
fn test_names_with_fixture_english_fallback() {
    let lookup = lookup_from(fixtures::SMALL);
    assert_eq!(lookup.names("JP"), vec!["given", "family"]);
    assert_eq!(lookup.names("HU"), vec!["Vezetéknév", "Keresztnév"]);
}

// ============================================
// names_with_fallback
// ============================================

#[test]
fn test_names_with_fallback_uses_primary_when_found() {
    assert_eq!(names_with_fallback("jp", "US"), names("JP"));
}

#[test]
fn test_names_with_fallback_uses_fallback_on_miss() {
    assert_eq!(names_with_fallback("ZZ", "US"), names("US"));
}

#[test]
fn test_names_with_fallback_matches_fallback_exactly() {
    assert!(names_with_fallback("ZZ", "us").is_empty());
    assert!(names_with_fallback("ZZ", "YY").is_empty());
}

#[test]
fn test_names_with_fallback_typed_codes() {
    assert_eq!(names_with_fallback("ZZ", Iso2Code::FR), vec!["Prénom", "Nom"]);
}

// ============================================
// record
// ============================================

#[test]
fn test_record_returns_full_record() {
    let japan = record("JP").unwrap();
    assert_eq!(japan.code, "JP");
    assert_eq!(japan.name.as_deref(), Some("Japan"));
    assert_eq!(japan.naming_order.english(), "Family Name + Given Name");
    assert_eq!(japan.naming_order.get("Japanese"), Some("姓 + 名"));
}

#[test]
fn test_record_ignores_case() {
    for record_ in NameOrderLookup::bundled().records() {
        let upper = record(record_.code.to_uppercase()).unwrap();
        let lower = record(record_.code.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, record_);
    }
}

#[test]
fn test_record_malformed_code() {
    let err = record("XYZ").unwrap_err();
    assert_eq!(
        err,
        LookupError::NotFound {
            code: "XYZ".to_string(),
            reason: NotFoundReason::MalformedCode,
        }
    );
}

#[test]
fn test_record_absent_code() {
    match record("ZZ") {
        Err(LookupError::NotFound { reason, .. }) => {
            assert_eq!(reason, NotFoundReason::NotInDataset)
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_record_for_value_requires_string() {
    let lookup = NameOrderLookup::bundled();
    assert!(matches!(
        lookup.record_for_value(&json!(123)),
        Err(LookupError::InvalidArgument(_))
    ));
    assert!(matches!(
        lookup.record_for_value(&json!(["JP"])),
        Err(LookupError::InvalidArgument(_))
    ));
    assert!(matches!(
        lookup.record_for_value(&json!("XYZ")),
        Err(LookupError::NotFound { .. })
    ));
    assert_eq!(lookup.record_for_value(&json!("de")).unwrap().code, "DE");
}

// ============================================
// names_enum
// ============================================

#[test]
fn test_names_enum_returns_unsplit_forms() {
    let forms = names_enum("JP", None);
    assert_eq!(forms.english, "Family Name + Given Name");
    assert_eq!(forms.other, Some("姓 + 名"));
}

#[test]
fn test_names_enum_without_localized_form() {
    let forms = names_enum("US", None);
    assert_eq!(forms.english, "Given Name + Middle Name + Family Name");
    assert_eq!(forms.other, None);
}

#[test]
fn test_names_enum_miss_without_fallback() {
    assert_eq!(names_enum("ZZ", None).as_tuple(), ("", None));
}

#[test]
fn test_names_enum_fallback_ignores_case() {
    assert_eq!(names_enum("ZZ", Some("jp")), names_enum("JP", None));
    assert_eq!(names_enum("ZZ", Some("YY")).as_tuple(), ("", None));
}

#[test]
fn test_names_enum_into_tuple() {
    let (english, other): (&str, Option<&str>) = names_enum("CA", None).into();
    assert_eq!(english, "Given Name + Family Name");
    assert_eq!(other, Some("Prénom + Nom"));
}

#[test]
fn test_names_enum_consistent_with_names() {
    let lookup = NameOrderLookup::bundled();
    for record in lookup.records() {
        let forms = lookup.names_enum(&record.code, None);
        let split: Vec<String> = forms
            .preferred()
            .split('+')
            .map(|s| s.trim().to_string())
            .collect();
        assert_eq!(split, lookup.names(&record.code), "{}", record.code);
    }
}

// ============================================
// Duplicates
// ============================================

#[test]
fn test_duplicate_codes_resolve_to_first() {
    let lookup = lookup_from(fixtures::DUPLICATE);
    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.names("aa"), vec!["First"]);
    assert_eq!(lookup.record("AA").unwrap().code, "AA");
}
