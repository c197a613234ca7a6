//! Naming order lookups by country code.
//!
//! [`NameOrderLookup`] wraps an immutable list of [`CountryRecord`]s and answers
//! four questions about it. Three of them are soft: a miss degrades to an empty
//! result. [`NameOrderLookup::record`] is strict and reports why it missed.
//!
//! The two fallback-taking lookups compare the fallback code differently:
//! [`NameOrderLookup::names_with_fallback`] matches it exactly, while
//! [`NameOrderLookup::names_enum`] ignores case. Callers that pass mixed-case
//! fallbacks will see different results from the two.

use serde::Serialize;

use crate::dataset::registry;
use crate::dataset::types::{split_template, CountryRecord};
use crate::error::{DatasetError, LookupError};

/// English and localized naming templates for one country, unsplit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NamingForms<'a> {
    /// The English template, or `""` when no record matched
    pub english: &'a str,
    /// The first non-English template with a value
    pub other: Option<&'a str>,
}

impl<'a> NamingForms<'a> {
    /// The localized form if present, else the English one
    pub fn preferred(&self) -> &'a str {
        self.other.unwrap_or(self.english)
    }

    /// The preferred form split into trimmed components
    pub fn components(&self) -> Vec<String> {
        split_template(self.preferred())
    }

    /// The forms as an `(english, other)` pair
    pub fn as_tuple(&self) -> (&'a str, Option<&'a str>) {
        (self.english, self.other)
    }
}

impl<'a> From<NamingForms<'a>> for (&'a str, Option<&'a str>) {
    fn from(forms: NamingForms<'a>) -> Self {
        forms.as_tuple()
    }
}

/// Read-only lookups over a naming order dataset
#[derive(Clone, Debug, Default)]
pub struct NameOrderLookup {
    records: Vec<CountryRecord>,
}

impl NameOrderLookup {
    /// Wrap records that have already been loaded
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    /// Build a lookup from JSON, rejecting any malformed record
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(Self::new(registry::parse_records(json)?))
    }

    /// The lookup over the dataset bundled with the crate
    pub fn bundled() -> &'static NameOrderLookup {
        registry::bundled()
    }

    /// All records in dataset order
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record exists for `code`, ignoring case
    pub fn contains(&self, code: impl AsRef<str>) -> bool {
        self.find_by_code(code.as_ref()).is_some()
    }

    pub(crate) fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.matches_code(code))
    }

    fn find_by_code_exact(&self, code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.matches_code_exact(code))
    }

    /// Name components for a country, in conventional order.
    ///
    /// Uses the first localized template if the record has one, otherwise the
    /// English template. Returns an empty list for unknown codes.
    pub fn names(&self, code: impl AsRef<str>) -> Vec<String> {
        let code = code.as_ref();
        match self.find_by_code(code) {
            Some(record) => record.components(),
            None => {
                tracing::debug!("No naming order record for {:?}", code);
                Vec::new()
            }
        }
    }

    /// Like [`names`](Self::names), retrying with `fallback` on a miss.
    ///
    /// The fallback must match a record's code exactly, case included.
    pub fn names_with_fallback(
        &self,
        code: impl AsRef<str>,
        fallback: impl AsRef<str>,
    ) -> Vec<String> {
        let code = code.as_ref();
        let fallback = fallback.as_ref();
        let record = self.find_by_code(code).or_else(|| {
            tracing::debug!("No record for {:?}, trying fallback {:?}", code, fallback);
            self.find_by_code_exact(fallback)
        });
        match record {
            Some(record) => record.components(),
            None => Vec::new(),
        }
    }

    /// The full record for a country.
    ///
    /// Fails with [`LookupError::NotFound`] when nothing matches; the error's
    /// reason tells a malformed code apart from one missing in the data.
    pub fn record(&self, code: impl AsRef<str>) -> Result<&CountryRecord, LookupError> {
        let code = code.as_ref();
        self.find_by_code(code)
            .ok_or_else(|| LookupError::not_found(code))
    }

    /// [`record`](Self::record) for untyped input such as a JSON request body.
    ///
    /// Fails with [`LookupError::InvalidArgument`] unless `value` is a string.
    pub fn record_for_value(
        &self,
        value: &serde_json::Value,
    ) -> Result<&CountryRecord, LookupError> {
        match value.as_str() {
            Some(code) => self.record(code),
            None => Err(LookupError::InvalidArgument(value.to_string())),
        }
    }

    /// The English and localized templates for a country, unsplit.
    ///
    /// On a miss, retries with `fallback` ignoring case. Returns `("", None)`
    /// when neither matches.
    pub fn names_enum(&self, code: impl AsRef<str>, fallback: Option<&str>) -> NamingForms<'_> {
        let code = code.as_ref();
        let record = self.find_by_code(code).or_else(|| {
            fallback.and_then(|fallback| {
                tracing::debug!("No record for {:?}, trying fallback {:?}", code, fallback);
                self.find_by_code(fallback)
            })
        });
        match record {
            Some(record) => NamingForms {
                english: record.naming_order.english(),
                other: record.naming_order.localized().map(|(_, t)| t),
            },
            None => NamingForms::default(),
        }
    }
}
