//! Filter criteria: the caller's current selection.
//!
//! Three independent dimensions:
//! - connector type: all, or one exact label
//! - gender: all, or one exact label
//! - search: lower-cased substring matched against product names

use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Text that selects the "match all" sentinel when parsed
pub const MATCH_ALL: &str = "all";

/// Selection on one exact-match dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// Do not filter on this dimension
    #[default]
    All,
    /// Keep only products whose label equals this one (case-sensitive)
    Exact(String),
}

impl Selector {
    pub fn exact(label: impl Into<String>) -> Self {
        Self::Exact(label.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Does `label` pass this selector?
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == label,
        }
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    /// `"all"` (any case) or blank text is the sentinel; anything else is an
    /// exact label, trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(MATCH_ALL) {
            Ok(Self::All)
        } else {
            Ok(Self::Exact(s.to_string()))
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(MATCH_ALL),
            Self::Exact(label) => f.write_str(label),
        }
    }
}

/// The caller's selection across type, gender and search.
///
/// `Default` is the identity filter: every product passes, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    #[serde(rename = "type")]
    pub connector_type: Selector,
    pub gender: Selector,
    /// Always stored lower-cased and trimmed
    #[serde(deserialize_with = "deserialize_search")]
    search: String,
}

fn deserialize_search<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_lowercase())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type(&mut self, selector: Selector) {
        self.connector_type = selector;
    }

    pub fn set_gender(&mut self, selector: Selector) {
        self.gender = selector;
    }

    /// Set the search text. Normalized here once so matching never has to
    /// lower-case the pattern per product.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_lowercase();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Back to "all / all / empty"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_identity(&self) -> bool {
        self.connector_type.is_all() && self.gender.is_all() && self.search.is_empty()
    }

    // Builder-style helpers, mostly for tests and one-shot queries

    pub fn with_type(mut self, selector: Selector) -> Self {
        self.set_type(selector);
        self
    }

    pub fn with_gender(mut self, selector: Selector) -> Self {
        self.set_gender(selector);
        self
    }

    pub fn with_search(mut self, text: &str) -> Self {
        self.set_search(text);
        self
    }
}
