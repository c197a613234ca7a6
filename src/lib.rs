//! nameorder - personal-name ordering conventions by country
//!
//! Given an ISO 3166-1 alpha-2 country code, this library returns how
//! personal names are conventionally ordered there: an English template such
//! as `"Family Name + Given Name"` and, where the data has one, a localized
//! template such as `"姓 + 名"`.
//!
//! ## Module Structure
//!
//! - [`codes`] - The closed set of ISO alpha-2 codes
//! - [`dataset`] - Record types and the bundled naming order table
//! - [`lookup`] - Lookups over a dataset
//! - [`error`] - Lookup and dataset errors
//! - [`settings`] - Command-line preferences persistence
//!
//! ## Usage
//!
//! ```rust
//! assert_eq!(nameorder::names("jp"), vec!["姓", "名"]);
//! assert!(nameorder::names("ZZ").is_empty());
//!
//! let forms = nameorder::names_enum("JP", None);
//! assert_eq!(forms.english, "Family Name + Given Name");
//! ```

pub mod codes;
pub mod dataset;
pub mod error;
pub mod lookup;
pub mod settings;

pub use codes::Iso2Code;
pub use dataset::{CountryRecord, NamingOrder};
pub use error::{DatasetError, LookupError, NotFoundReason};
pub use lookup::{NameOrderLookup, NamingForms};

/// Name components for `code` from the bundled dataset.
///
/// See [`NameOrderLookup::names`].
pub fn names(code: impl AsRef<str>) -> Vec<String> {
    NameOrderLookup::bundled().names(code)
}

/// Name components for `code`, or for `fallback` (matched exactly) on a miss.
///
/// See [`NameOrderLookup::names_with_fallback`].
pub fn names_with_fallback(code: impl AsRef<str>, fallback: impl AsRef<str>) -> Vec<String> {
    NameOrderLookup::bundled().names_with_fallback(code, fallback)
}

/// The bundled record for `code`.
///
/// See [`NameOrderLookup::record`].
pub fn record(code: impl AsRef<str>) -> Result<&'static CountryRecord, LookupError> {
    NameOrderLookup::bundled().record(code)
}

/// English and localized templates for `code`, or for `fallback` (ignoring
/// case) on a miss.
///
/// See [`NameOrderLookup::names_enum`].
pub fn names_enum(code: impl AsRef<str>, fallback: Option<&str>) -> NamingForms<'static> {
    NameOrderLookup::bundled().names_enum(code, fallback)
}
