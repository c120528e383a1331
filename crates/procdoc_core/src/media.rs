//! Media source types for multimodal content.

use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
///
/// # Examples
///
/// ```
/// use procdoc_core::MediaSource;
///
/// let base64 = MediaSource::Base64("iVBORw0KGgo...".to_string());
/// let binary = MediaSource::Binary(vec![0xFF, 0xD8, 0xFF]);
/// assert_ne!(base64, binary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}
