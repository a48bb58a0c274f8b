//! Foundation module - math types and logging utilities
//!
//! Small shared layer used by both the pooling core and its consumers:
//! - Math types and the `Placement` pose
//! - Logging utilities

pub mod logging;
pub mod math;
