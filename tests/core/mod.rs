//! Core module tests
//!
//! Tests for:
//! - Lookups against the bundled dataset
//! - Dataset loading from JSON
//! - ISO alpha-2 codes
//! - Settings persistence

pub mod codes_tests;
pub mod lookup_tests;
pub mod settings_tests;
