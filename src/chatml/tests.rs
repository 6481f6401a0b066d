use super::*;
use crate::{MessageAccumulator, MessageDelta};

#[test]
fn test_chatml_string_format() {
    let message = AggregatedMessage {
        content: "Hello!".to_string(),
        role: Some(Role::User),
        ..AggregatedMessage::default()
    };

    assert_eq!(message.to_chatml_string(), "<|im_start|>user\nHello!\n<|im_end|>");
}

#[test]
fn test_missing_role_renders_as_assistant() {
    let message = AggregatedMessage {
        content: "Hi".to_string(),
        ..AggregatedMessage::default()
    };

    assert!(message.to_chatml_string().starts_with("<|im_start|>assistant\n"));
}

#[test]
fn test_thinking_block() {
    let mut acc = MessageAccumulator::new();
    acc.append(Some(MessageDelta::thinking("2+2=4").with_role(Role::Assistant).into()));
    acc.append(Some(MessageDelta::text("Four.").into()));

    let expected = "<|im_start|>assistant\n<think>\n2+2=4\n</think>\nFour.\n<|im_end|>";
    assert_eq!(acc.to_message().to_chatml_string(), expected);
}

#[test]
fn test_tool_call_lines() {
    let message = AggregatedMessage {
        role: Some(Role::Assistant),
        tool_calls: vec![ToolCall::new("search", serde_json::json!({"q": "rust"}))],
        ..AggregatedMessage::default()
    };

    let expected = "<|im_start|>assistant\n\n<tool_call>{\"function\":{\"name\":\"search\",\"arguments\":{\"q\":\"rust\"}}}</tool_call>\n<|im_end|>";
    assert_eq!(message.to_chatml_string(), expected);
}

#[test]
fn test_count_tokens() {
    let short = AggregatedMessage {
        content: "Hi".to_string(),
        ..AggregatedMessage::default()
    };
    let long = AggregatedMessage {
        content: "Hi there, this message is considerably longer than the first one.".to_string(),
        ..AggregatedMessage::default()
    };

    assert!(short.count_tokens() > 0);
    assert!(long.count_tokens() > short.count_tokens());
}
