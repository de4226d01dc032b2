//! Quote submission types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which services the customer asked about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelection {
    pub landscaping: bool,
    pub outdoor_construction: bool,
}

impl ServiceSelection {
    pub fn new(landscaping: bool, outdoor_construction: bool) -> Self {
        Self {
            landscaping,
            outdoor_construction,
        }
    }

    /// At least one service selected
    pub fn any(&self) -> bool {
        self.landscaping || self.outdoor_construction
    }

    /// Display labels for the selected services, in form order
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::with_capacity(2);
        if self.landscaping {
            labels.push("Landscaping Services");
        }
        if self.outdoor_construction {
            labels.push("Outdoor Construction");
        }
        labels
    }

    /// Labels joined for subject lines, e.g. `Landscaping Services & Outdoor Construction`
    pub fn summary(&self) -> String {
        self.labels().join(" & ")
    }
}

/// A validated, normalized quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub name: String,
    /// Lower-cased and trimmed
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(flatten)]
    pub services: ServiceSelection,
    pub details: String,
}

/// Validation failures keyed by field path
///
/// Ordered so responses and logs are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
