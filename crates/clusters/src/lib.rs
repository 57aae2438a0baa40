//! Clusters - Customer Interview Segmentation Service
//!
//! Splits pasted customer interview text into discrete records, groups them
//! through an external clustering service, and shapes the grouped result into
//! labeled, percentage-weighted segments for display.

pub mod clustering;
pub mod segmentation;
pub mod server;
