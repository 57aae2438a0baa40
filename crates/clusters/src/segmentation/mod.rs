//! Request-scoped interview segmentation pipeline
//!
//! Pure post-processing around the external clustering call: chunking raw
//! submissions into interview records, labeling returned clusters, and
//! rebalancing display percentages. Nothing here persists or retries; every
//! value lives for one request.

pub mod chunker;
pub mod labeler;
pub mod percentages;
