//! # Tilemap Engine
//!
//! Windowing and OpenGL bootstrap for the tilemap renderer.
//!
//! The engine opens a single GLFW window with an OpenGL 3.3 core context,
//! keeps the viewport in sync with the framebuffer, and runs a clear/swap
//! loop until the window is closed. Every acquired resource (context, window,
//! windowing subsystem) is released on every exit path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tilemap_engine::prelude::*;
//!
//! fn main() {
//!     foundation::logging::init();
//!     let result = bootstrap::run(GlfwPlatform::init, BootstrapConfig::default());
//!     std::process::exit(i32::from(bootstrap::exit_status(&result)));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod bootstrap;
pub mod config;
pub mod core;
pub mod foundation;
pub mod render;

pub use bootstrap::{BootstrapError, BootstrapResult, RenderLoop};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        bootstrap::{self, BootstrapError, BootstrapResult, RenderLoop},
        core::config::{BootstrapConfig, ContextHints, GlProfile, WindowConfig},
        config::{Config, ConfigError},
        foundation,
        render::{
            backend::{GraphicsApi, Platform, PlatformWindow},
            glfw_platform::{GlfwPlatform, GlfwWindow},
            gl_api::GlGraphics,
            viewport::Viewport,
        },
    };
}
