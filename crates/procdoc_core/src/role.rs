//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message.
///
/// # Examples
///
/// ```
/// use procdoc_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages carry the prompt
    User,
    /// Assistant messages are model replies
    Assistant,
}
