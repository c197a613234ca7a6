//! Naming order record types.
//!
//! These types mirror the bundled JSON data: an array of country objects,
//! each with a `code` and a `Naming Order` object mapping a label to an
//! optional template string.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label that every record carries
pub const ENGLISH_LABEL: &str = "English";

/// Separator between name components inside a template
pub const TEMPLATE_SEPARATOR: char = '+';

/// Split a `+`-joined template into trimmed name components
pub fn split_template(template: &str) -> Vec<String> {
    template
        .split(TEMPLATE_SEPARATOR)
        .map(|part| part.trim().to_string())
        .collect()
}

// ============================================================================
// Naming Order Mapping
// ============================================================================

/// Labeled naming templates for one country, in the order they were authored.
///
/// Lookups depend on the first non-English label that has a value, so this
/// keeps its entries as a list instead of a hash map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamingOrder {
    entries: Vec<(String, Option<String>)>,
}

impl NamingOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label. Empty strings are stored as absent.
    pub fn push(&mut self, label: impl Into<String>, template: Option<String>) {
        let template = template.filter(|t| !t.is_empty());
        self.entries.push((label.into(), template));
    }

    /// The English template, or an empty string if the label is missing
    pub fn english(&self) -> &str {
        self.get(ENGLISH_LABEL).unwrap_or("")
    }

    /// The template for a label, if present and non-empty
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .and_then(|(_, t)| t.as_deref())
    }

    /// The first non-English label with a value, as `(label, template)`
    pub fn localized(&self) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .filter(|(label, _)| label != ENGLISH_LABEL)
            .find_map(|(label, t)| t.as_deref().map(|t| (label.as_str(), t)))
    }

    /// The template lookups prefer: the localized one, else English
    pub fn preferred(&self) -> &str {
        self.localized()
            .map(|(_, template)| template)
            .unwrap_or_else(|| self.english())
    }

    /// Iterate labels and templates in authored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(label, t)| (label.as_str(), t.as_deref()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, Option<String>)> for NamingOrder {
    fn from_iter<I: IntoIterator<Item = (L, Option<String>)>>(iter: I) -> Self {
        let mut order = NamingOrder::new();
        for (label, template) in iter {
            order.push(label, template);
        }
        order
    }
}

impl Serialize for NamingOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, template) in &self.entries {
            map.serialize_entry(label, template)?;
        }
        map.end()
    }
}

struct NamingOrderVisitor;

impl<'de> Visitor<'de> for NamingOrderVisitor {
    type Value = NamingOrder;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of label to naming order template")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut order = NamingOrder::new();
        while let Some((label, template)) = access.next_entry::<String, Option<String>>()? {
            order.push(label, template);
        }
        Ok(order)
    }
}

impl<'de> Deserialize<'de> for NamingOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(NamingOrderVisitor)
    }
}

// ============================================================================
// Country Record
// ============================================================================

/// Naming conventions for one country
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code, compared case-insensitively
    pub code: String,
    /// English country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Labeled naming templates
    #[serde(rename = "Naming Order")]
    pub naming_order: NamingOrder,
}

impl CountryRecord {
    /// Whether this record's code equals `code`, ignoring ASCII case
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    /// Whether this record's code equals `code` exactly
    pub fn matches_code_exact(&self, code: &str) -> bool {
        self.code == code
    }

    /// Name components from the preferred template
    pub fn components(&self) -> Vec<String> {
        split_template(self.naming_order.preferred())
    }
}
