//! Plain-text process narratives.

use serde::{Deserialize, Serialize};

/// Plain-text description of a business process.
///
/// Produced by content extraction (or supplied directly) and consumed by the
/// section structurer. Lives only for the duration of one run.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Narrative(String);

impl Narrative {
    /// Wrap narrative text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the narrative text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the narrative holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Narrative {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
