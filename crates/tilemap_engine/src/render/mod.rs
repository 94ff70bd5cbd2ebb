//! # Rendering System
//!
//! Platform abstraction for the render loop and its production backends.
//!
//! - **`backend`**: traits the bootstrap is written against
//! - **`glfw_platform`**: GLFW windowing subsystem and window/context
//! - **`gl_api`**: OpenGL function table loaded through the current context
//! - **`viewport`**: framebuffer-to-drawing-coordinates mapping

pub mod backend;
pub mod gl_api;
pub mod glfw_platform;
pub mod viewport;

pub use backend::{GraphicsApi, Platform, PlatformWindow};
pub use gl_api::GlGraphics;
pub use glfw_platform::{GlfwPlatform, GlfwWindow};
pub use viewport::Viewport;
