//! Streamed message assembly.
//!
//! [`MessageAccumulator`] folds [`Fragment`]s into an [`AggregatedMessage`].
//! With the `streaming` feature, [`accumulate_stream`] drives it from a
//! `futures` stream.

mod accumulator;
#[cfg(feature = "streaming")]
mod stream;
mod types;

pub use accumulator::MessageAccumulator;
#[cfg(feature = "streaming")]
pub use stream::accumulate_stream;
pub use types::{AggregatedMessage, Fragment, MessageDelta};
