//! Platform abstraction for the render loop
//!
//! The bootstrap only talks to these traits. Production code uses the GLFW
//! and OpenGL implementations; tests drive a scripted platform instead.
//!
//! Resource release is tied to `Drop`: dropping a [`PlatformWindow`] destroys
//! the native window (releasing its context first if it is still current) and
//! dropping a [`Platform`] shuts the windowing subsystem down.

use crate::bootstrap::BootstrapResult;
use crate::core::config::{ContextHints, WindowConfig};
use crate::render::viewport::Viewport;

/// Initialized windowing subsystem
pub trait Platform {
    /// Window type created by this platform
    type Window: PlatformWindow;

    /// Record context version/profile hints for the next window creation
    fn apply_context_hints(&mut self, hints: &ContextHints);

    /// Create a window together with its graphics context
    ///
    /// Fails with [`crate::BootstrapError::WindowCreation`] when the platform
    /// cannot satisfy the context hints or allocate the native window.
    fn create_window(&mut self, config: &WindowConfig) -> BootstrapResult<Self::Window>;
}

/// Native window with an attached graphics context
pub trait PlatformWindow {
    /// Graphics function table resolved through this window's context
    type Graphics: GraphicsApi;

    /// Make the context current on the calling thread
    fn make_current(&mut self);

    /// Start delivering framebuffer size changes to [`Self::poll_events`]
    fn enable_framebuffer_size_events(&mut self);

    /// Resolve the graphics entry points through the current context
    ///
    /// Must be called after [`Self::make_current`]. Fails with
    /// [`crate::BootstrapError::GraphicsLoader`] when required entry points
    /// are missing.
    fn load_graphics(&mut self) -> BootstrapResult<Self::Graphics>;

    /// Set the number of screen refreshes to wait for on each swap
    fn set_swap_interval(&mut self, interval: u32);

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (i32, i32);

    /// Whether closing the window has been requested
    fn should_close(&self) -> bool;

    /// Request (or cancel a request) to close the window
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending platform events
    ///
    /// `on_framebuffer_resize` is invoked synchronously, in delivery order,
    /// once per framebuffer size change.
    fn poll_events(&mut self, on_framebuffer_resize: &mut dyn FnMut(i32, i32));

    /// Detach the context from the calling thread
    fn release_context(&mut self);
}

/// Graphics calls issued by the render loop
pub trait GraphicsApi {
    /// Set the active viewport
    fn set_viewport(&mut self, viewport: Viewport);

    /// Set the color used by [`Self::clear_color_buffer`]
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Clear the color buffer
    fn clear_color_buffer(&mut self);

    /// Driver version string, when the driver reports one
    fn version_string(&self) -> Option<String>;
}
