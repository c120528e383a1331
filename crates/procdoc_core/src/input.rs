//! Input types for generative requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input types to generative backends.
///
/// # Examples
///
/// ```
/// use procdoc_core::{Input, MediaSource};
///
/// let text = Input::Text("Describe this screen".to_string());
/// let frame = Input::Image {
///     mime: Some("image/jpeg".to_string()),
///     source: MediaSource::Binary(vec![0xFF, 0xD8]),
/// };
/// assert_ne!(text, frame);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (sampled video frames).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },
}
