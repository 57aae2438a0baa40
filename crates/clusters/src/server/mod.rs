//! REST API module for the interview segmentation service
//!
//! Provides the HTTP surface: the analyze pipeline endpoint plus status and
//! version endpoints for operational checks.

pub mod error;
pub mod handlers;
pub mod routing;
pub mod startup;
pub mod state;
pub mod types;
