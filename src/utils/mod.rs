//! Utility modules for the Taskboard application.
//!
//! - [`datetime`] - Due date parsing and human-readable formatting

pub mod datetime;
