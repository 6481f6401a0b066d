//! Chat fragment assembly
//!
//! Streaming chat APIs deliver a response as a sequence of partial messages.
//! Each partial carries a slice of text, optional "thinking" text, optional
//! images, optional tool calls and a role tag. This crate folds such a
//! sequence back into one complete message.
//!
//! ## Usage
//!
//! ```rust
//! use chat_fragments::{Fragment, MessageAccumulator, MessageDelta, Role};
//!
//! let mut acc = MessageAccumulator::new();
//! acc.append(Some(Fragment::from(MessageDelta::text("Hel").with_role(Role::Assistant))));
//! acc.append(Some(Fragment::from(MessageDelta::text("lo!"))));
//!
//! let message = acc.to_message();
//! assert_eq!(message.content, "Hello!");
//! assert_eq!(message.role, Some(Role::Assistant));
//! ```
//!
//! ## Features
//!
//! - `streaming`: enables `accumulate_stream`, which drains a
//!   `futures` stream of fragments into an [`AggregatedMessage`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod error;
pub use error::{Error, Result};

// ============================================================================
// ChatML Support
// ============================================================================

pub mod chatml;

// ============================================================================
// Streaming Support
// ============================================================================

pub mod streaming;
pub use streaming::{AggregatedMessage, Fragment, MessageAccumulator, MessageDelta};

#[cfg(feature = "streaming")]
pub use streaming::accumulate_stream;

// ============================================================================
// Core Value Types
// ============================================================================

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-level instructions
    System,
    /// User input
    User,
    /// Assistant response
    Assistant,
    /// Tool execution result
    Tool,
}

impl Role {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Tool => "tool",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            "tool" => Ok(Self::Tool),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

/// An image attached to a message.
///
/// The payload is kept exactly as the server sent it (usually base64) and is
/// never decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Image(String);

impl Image {
    /// Wrap an encoded image payload
    pub fn new(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    /// The encoded payload
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the encoded payload
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Image {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<String> for Image {
    fn from(data: String) -> Self {
        Self(data)
    }
}

/// Function invoked by a tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the function to call
    pub name: String,
    /// Arguments as sent by the model
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// A tool call requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Call identifier, when the server assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The function being called
    pub function: FunctionCall,
}

impl ToolCall {
    /// Create a tool call without an identifier
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            id: None,
            function: FunctionCall {
                name: name.into(),
                arguments,
            },
        }
    }

    /// Attach a call identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_conversion() {
        assert_eq!(Role::System.as_str(), "system");
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Assistant.as_str(), "assistant");
        assert_eq!(Role::Tool.as_str(), "tool");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("tool".parse::<Role>().unwrap(), Role::Tool);

        let err = "narrator".parse::<Role>().unwrap_err();
        assert!(matches!(err, Error::UnknownRole(ref r) if r == "narrator"));
        assert_eq!(err.to_string(), "unknown role: narrator");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(Role::Assistant).unwrap();
        assert_eq!(json, "assistant");
    }

    #[test]
    fn test_image_is_transparent() {
        let image = Image::new("aGVsbG8=");
        assert_eq!(serde_json::to_value(&image).unwrap(), "aGVsbG8=");
        assert_eq!(image.as_str(), "aGVsbG8=");
        assert_eq!(image.into_inner(), "aGVsbG8=");
    }

    #[test]
    fn test_tool_call_shape() {
        let call = ToolCall::new("get_weather", serde_json::json!({"city": "Paris"}));
        let json = serde_json::to_value(&call).unwrap();

        // No id key unless one was assigned
        assert!(json.get("id").is_none());
        assert_eq!(json["function"]["name"], "get_weather");
        assert_eq!(json["function"]["arguments"]["city"], "Paris");

        let call = call.with_id("call_1");
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["id"], "call_1");
    }

    #[test]
    fn test_tool_call_without_arguments() {
        let call: ToolCall = serde_json::from_str(r#"{"function":{"name":"ping"}}"#).unwrap();
        assert_eq!(call.function.name, "ping");
        assert!(call.function.arguments.is_null());
    }
}
