//! Described video frames.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A sampled video frame after description.
///
/// `index` is the sampling order (1-based) and is the only ordering that
/// matters once descriptions have been collected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Frame {
    /// Sampling order of the frame
    index: usize,
    /// Textual description of what the frame shows
    description: String,
}

impl Frame {
    /// Create a described frame.
    pub fn new(index: usize, description: impl Into<String>) -> Self {
        Self {
            index,
            description: description.into(),
        }
    }
}
