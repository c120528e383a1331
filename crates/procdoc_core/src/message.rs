//! Message types for generative requests.

use crate::{Input, Role};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A multimodal message.
///
/// # Examples
///
/// ```
/// use procdoc_core::{Input, Message, MessageBuilder, Role};
///
/// let message = MessageBuilder::default()
///     .role(Role::User)
///     .content(vec![Input::Text("Hello!".to_string())])
///     .build()
///     .unwrap();
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The content of the message (can be multimodal)
    content: Vec<Input>,
}

impl Message {
    /// Create a message directly from its parts.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }

    /// Create a single-part user text message.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Input::Text(text.into())])
    }
}
