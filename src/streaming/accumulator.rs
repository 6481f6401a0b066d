//! Streaming message accumulator.

use super::types::{AggregatedMessage, Fragment};
use crate::{Image, Role, ToolCall};

/// Accumulates streamed fragments into a complete message.
///
/// Text buffers only grow, the role is last-write-wins, and images and tool
/// calls are concatenated in arrival order without de-duplication. There is
/// no completion state: the caller decides when the stream is over.
#[derive(Debug, Clone, Default)]
pub struct MessageAccumulator {
    content: String,
    thinking: String,
    role: Option<Role>,
    images: Vec<Image>,
    tool_calls: Vec<ToolCall>,
}

impl MessageAccumulator {
    /// Create a new accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one fragment into the accumulated state.
    ///
    /// `None`, or a fragment without a message, leaves the state untouched.
    pub fn append(&mut self, fragment: Option<Fragment>) {
        let Some(message) = fragment.and_then(|f| f.message) else {
            return;
        };

        if let Some(content) = message.content {
            self.content.push_str(&content);
        }
        if let Some(thinking) = message.thinking {
            self.thinking.push_str(&thinking);
        }
        if let Some(role) = message.role {
            self.role = Some(role);
        }
        if let Some(images) = message.images {
            self.images.extend(images);
        }
        if let Some(tool_calls) = message.tool_calls {
            self.tool_calls.extend(tool_calls);
        }
    }

    /// Whether there is anything worth emitting.
    ///
    /// Thinking text alone does not count.
    pub fn has_value(&self) -> bool {
        !self.content.is_empty() || !self.images.is_empty() || !self.tool_calls.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thinking(&self) -> &str {
        &self.thinking
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    /// Snapshot the current state without consuming the accumulator
    pub fn to_message(&self) -> AggregatedMessage {
        AggregatedMessage {
            content: self.content.clone(),
            thinking: self.thinking.clone(),
            role: self.role,
            images: self.images.clone(),
            tool_calls: self.tool_calls.clone(),
        }
    }

    /// Get the accumulated message, consuming the accumulator
    pub fn into_message(self) -> AggregatedMessage {
        AggregatedMessage {
            content: self.content,
            thinking: self.thinking,
            role: self.role,
            images: self.images,
            tool_calls: self.tool_calls,
        }
    }
}
