//! Draining a fragment stream into a message.

use futures_util::{Stream, StreamExt};

use super::accumulator::MessageAccumulator;
use super::types::{AggregatedMessage, Fragment};

/// Accumulate an entire stream into a message
///
/// Stops after the first fragment marked `done`, or when the stream ends.
/// The first stream error is returned unchanged.
pub async fn accumulate_stream<S, E>(mut stream: S) -> Result<AggregatedMessage, E>
where
    S: Stream<Item = Result<Fragment, E>> + Unpin,
{
    let mut accumulator = MessageAccumulator::new();
    let mut fragments = 0usize;
    let mut saw_done = false;

    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;
        fragments += 1;
        let done = fragment.done;
        tracing::trace!(fragment = fragments, done, "appending fragment");
        accumulator.append(Some(fragment));
        if done {
            saw_done = true;
            break;
        }
    }

    tracing::debug!(
        fragments,
        saw_done,
        has_value = accumulator.has_value(),
        "stream accumulated"
    );
    Ok(accumulator.into_message())
}
