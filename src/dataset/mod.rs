//! Bundled naming order dataset.
//!
//! ## Usage
//!
//! ```rust
//! use nameorder::dataset::bundled;
//!
//! let lookup = bundled();
//! let japan = lookup.record("JP").unwrap();
//! println!("{}", japan.naming_order.english()); // "Family Name + Given Name"
//! ```

pub mod registry;
pub mod types;

// Re-export commonly used types and functions
pub use registry::{bundled, bundled_json, parse_bundled_records, parse_records};
pub use types::{split_template, CountryRecord, NamingOrder, ENGLISH_LABEL, TEMPLATE_SEPARATOR};
