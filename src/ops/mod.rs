//! Consumers of the pixel visitor: negation and comparison.

pub mod compare;
pub mod negate;

pub use compare::{Comparison, MAX_REPORTED_MISMATCHES, compare_buffers, compare_buffers_with_cap};
pub use negate::{Negate, NegateOutcome, negate_buffer, negate_file, negate_palette, negate_stream};
