//! # Core Engine Module
//!
//! Shared configuration types used by the bootstrap and the backends.

pub mod config;

pub use config::{BootstrapConfig, ContextHints, GlProfile, WindowConfig};
