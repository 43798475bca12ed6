//! Path accumulation.
//!
//! Responsibilities:
//! - hold at most one open path per canvas (`path_begin_from` starts it)
//! - append line / curve segments in call order
//! - hand the finished geometry to a stroke or fill flush, which closes the path

mod builder;
mod segment;

pub use builder::PathBuilder;
pub use segment::{Path, PathSegment};
