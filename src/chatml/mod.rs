//! ChatML rendering for assembled messages.

use tiktoken_rs::cl100k_base;

use crate::{AggregatedMessage, Role, ToolCall};

/// Role used when no fragment carried one.
const DEFAULT_ROLE: Role = Role::Assistant;

impl AggregatedMessage {
    /// Convert message to ChatML string format.
    ///
    /// Thinking text goes into a leading `<think>` block and each tool call
    /// into its own `<tool_call>` line after the content.
    pub fn to_chatml_string(&self) -> String {
        let role = self.role.unwrap_or(DEFAULT_ROLE);

        let mut body = String::new();
        if !self.thinking.is_empty() {
            body.push_str("<think>\n");
            body.push_str(&self.thinking);
            body.push_str("\n</think>\n");
        }
        body.push_str(&self.content);
        for call in &self.tool_calls {
            body.push('\n');
            body.push_str(&tool_call_line(call));
        }

        format!("<|im_start|>{}\n{}\n<|im_end|>", role, body)
    }

    /// Count the tokens of the ChatML rendering.
    ///
    /// # Returns
    /// Number of tokens, or 0 if tokenization fails.
    pub fn count_tokens(&self) -> usize {
        match cl100k_base() {
            Ok(bpe) => bpe
                .encode_with_special_tokens(&self.to_chatml_string())
                .len(),
            Err(_) => 0,
        }
    }
}

fn tool_call_line(call: &ToolCall) -> String {
    let json = serde_json::to_string(call).unwrap_or_default();
    format!("<tool_call>{}</tool_call>", json)
}

#[cfg(test)]
mod tests;
