//! Window management using GLFW
//!
//! Provides the windowing subsystem, window creation with an OpenGL context
//! and event polling for the render loop.
//!
//! GLFW terminates once the last `glfw::Glfw` handle is dropped. Every
//! [`GlfwWindow`] keeps a handle for event polling, so the subsystem outlives
//! its window no matter which is dropped first.

use glfw::Context;

use crate::bootstrap::{BootstrapError, BootstrapResult};
use crate::core::config::{ContextHints, GlProfile, WindowConfig};
use crate::render::backend::{Platform, PlatformWindow};
use crate::render::gl_api::GlGraphics;

/// Initialized GLFW library
pub struct GlfwPlatform {
    glfw: glfw::Glfw,
}

impl GlfwPlatform {
    /// Initialize GLFW
    ///
    /// Fails with [`BootstrapError::PlatformInit`] when no display server can
    /// be reached.
    pub fn init() -> BootstrapResult<Self> {
        let glfw = glfw::init(report_glfw_error)
            .map_err(|e| BootstrapError::PlatformInit(e.to_string()))?;
        log::info!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

impl Platform for GlfwPlatform {
    type Window = GlfwWindow;

    fn apply_context_hints(&mut self, hints: &ContextHints) {
        let profile = match hints.profile {
            GlProfile::Core => glfw::OpenGlProfileHint::Core,
            GlProfile::Compat => glfw::OpenGlProfileHint::Compat,
            GlProfile::Any => glfw::OpenGlProfileHint::Any,
        };

        self.glfw
            .window_hint(glfw::WindowHint::ContextVersion(hints.major, hints.minor));
        self.glfw.window_hint(glfw::WindowHint::OpenGlProfile(profile));
        self.glfw
            .window_hint(glfw::WindowHint::OpenGlForwardCompat(hints.forward_compatible));
        log::debug!("Requested OpenGL {}.{} {:?} context", hints.major, hints.minor, hints.profile);
    }

    fn create_window(&mut self, config: &WindowConfig) -> BootstrapResult<GlfwWindow> {
        self.glfw
            .window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (window, events) = self
            .glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| {
                BootstrapError::WindowCreation(format!(
                    "{}x{} window \"{}\"",
                    config.width, config.height, config.title
                ))
            })?;

        Ok(GlfwWindow {
            window,
            events,
            glfw: self.glfw.clone(),
        })
    }
}

impl Drop for GlfwPlatform {
    fn drop(&mut self) {
        log::debug!("Releasing GLFW");
    }
}

/// GLFW window with its OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
}

impl PlatformWindow for GlfwWindow {
    type Graphics = GlGraphics;

    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn enable_framebuffer_size_events(&mut self) {
        self.window.set_framebuffer_size_polling(true);
    }

    fn load_graphics(&mut self) -> BootstrapResult<GlGraphics> {
        let window = &mut self.window;
        GlGraphics::load(|symbol| window.get_proc_address(symbol) as *const _)
    }

    fn set_swap_interval(&mut self, interval: u32) {
        let interval = match interval {
            0 => glfw::SwapInterval::None,
            n => glfw::SwapInterval::Sync(n),
        };
        self.glfw.set_swap_interval(interval);
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self, on_framebuffer_resize: &mut dyn FnMut(i32, i32)) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::FramebufferSize(width, height) = event {
                on_framebuffer_resize(width, height);
            }
        }
    }

    fn release_context(&mut self) {
        if self.window.is_current() {
            glfw::make_context_current(None);
        }
    }
}

impl Drop for GlfwWindow {
    fn drop(&mut self) {
        self.release_context();
        log::debug!("Destroying window");
    }
}

#[allow(clippy::needless_pass_by_value)]
fn report_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}
