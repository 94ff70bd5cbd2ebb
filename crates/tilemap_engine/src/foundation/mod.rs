//! Foundation module - Core utilities shared by the engine
//!
//! - Logging setup

pub mod logging;
