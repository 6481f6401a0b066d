//! Type definitions for streamed chat fragments.

use serde::{Deserialize, Serialize};

use crate::{Image, Role, ToolCall};

/// The message payload of one streamed fragment.
///
/// Every field is optional; an absent field contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDelta {
    /// Role tag, when this fragment sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Content text delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Thinking text delta
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    /// Images carried by this fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    /// Tool calls carried by this fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl MessageDelta {
    /// Delta carrying only content text
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Delta carrying only thinking text
    pub fn thinking(thinking: impl Into<String>) -> Self {
        Self {
            thinking: Some(thinking.into()),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_images(mut self, images: Vec<Image>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = Some(tool_calls);
        self
    }
}

/// One streamed response line.
///
/// `model`, `created_at` and `done` are envelope fields; only `message`
/// feeds the accumulator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Message payload; `None` makes the fragment a no-op
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageDelta>,
    /// Set on the final line of a response
    #[serde(default)]
    pub done: bool,
}

impl Fragment {
    /// Decode one NDJSON line.
    ///
    /// Blank lines decode to an empty fragment so keep-alives can be fed
    /// straight into an accumulator.
    pub fn from_json(line: &str) -> crate::Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(line)?)
    }

    /// Mark this fragment as the last one of the response
    pub fn done(mut self) -> Self {
        self.done = true;
        self
    }
}

impl From<MessageDelta> for Fragment {
    fn from(message: MessageDelta) -> Self {
        Self {
            message: Some(message),
            ..Self::default()
        }
    }
}

/// A complete message assembled from fragments.
///
/// Owns all of its data; later appends to the accumulator do not affect it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMessage {
    /// Concatenated content
    pub content: String,
    /// Concatenated thinking text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thinking: String,
    /// Last role seen, if any fragment set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Images in arrival order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    /// Tool calls in arrival order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}
