//! Render loop bootstrap
//!
//! Acquires a window with a current OpenGL context, keeps the viewport in sync
//! with the framebuffer and clears/presents frames until the window is asked
//! to close.
//!
//! Initialization is strictly ordered:
//!
//! 1. initialize the windowing subsystem
//! 2. apply context hints
//! 3. create the window and its context
//! 4. make the context current
//! 5. register for framebuffer resize events
//! 6. load the graphics function table
//! 7. set the initial viewport to the framebuffer size
//!
//! A failing step drops everything acquired before it, newest first, so the
//! windowing subsystem is never left initialized behind an error.

mod error;

pub use error::{exit_status, BootstrapError, BootstrapResult};

use crate::core::config::BootstrapConfig;
use crate::render::backend::{GraphicsApi, Platform, PlatformWindow};
use crate::render::viewport::Viewport;

type GraphicsOf<P> = <<P as Platform>::Window as PlatformWindow>::Graphics;

/// Owns the windowing subsystem, the window and its context for one run
///
/// Fields are released in declaration order: graphics functions, window
/// (context first), then the windowing subsystem.
pub struct RenderLoop<P: Platform> {
    graphics: Option<GraphicsOf<P>>,
    window: Option<P::Window>,
    platform: Option<P>,
    viewport: Viewport,
    config: BootstrapConfig,
    frames_presented: u64,
}

impl<P: Platform> RenderLoop<P> {
    /// Run the initialization sequence
    ///
    /// `init_platform` brings up the windowing subsystem, e.g.
    /// [`crate::render::GlfwPlatform::init`]. The configuration is validated
    /// first; values that cannot produce a window fail with
    /// [`BootstrapError::WindowCreation`] before anything is acquired.
    pub fn initialize<F>(init_platform: F, config: BootstrapConfig) -> BootstrapResult<Self>
    where
        F: FnOnce() -> BootstrapResult<P>,
    {
        config
            .validate()
            .map_err(|e| BootstrapError::WindowCreation(e.to_string()))?;

        log::info!("Initializing windowing subsystem...");
        let mut platform = init_platform()?;

        platform.apply_context_hints(&config.context);

        log::info!(
            "Creating {}x{} window \"{}\"...",
            config.window.width,
            config.window.height,
            config.window.title
        );
        let mut window = platform.create_window(&config.window)?;

        window.make_current();
        window.enable_framebuffer_size_events();

        let mut graphics = window.load_graphics()?;
        match graphics.version_string() {
            Some(version) => log::info!("OpenGL {version}"),
            None => log::warn!("Driver did not report an OpenGL version"),
        }

        if let Some(interval) = config.swap_interval {
            window.set_swap_interval(interval);
        }
        if let Some(color) = config.clear_color {
            graphics.set_clear_color(color);
        }

        let (width, height) = window.framebuffer_size();
        let viewport = Viewport::from_framebuffer_size(width, height);
        graphics.set_viewport(viewport);
        log::debug!("Initial viewport {viewport}");

        Ok(Self {
            graphics: Some(graphics),
            window: Some(window),
            platform: Some(platform),
            viewport,
            config,
            frames_presented: 0,
        })
    }

    /// Clear and present frames until the window is asked to close
    ///
    /// The close flag is checked once per iteration, before the clear. Resize
    /// events delivered while polling update the viewport before the next
    /// frame is drawn. Returns the number of frames presented by this call.
    pub fn run(&mut self) -> u64 {
        let (Some(window), Some(graphics)) = (self.window.as_mut(), self.graphics.as_mut()) else {
            log::warn!("Render loop started after shutdown");
            return 0;
        };
        let viewport = &mut self.viewport;
        let mut frames = 0;

        log::info!("Entering render loop");
        while !window.should_close() {
            graphics.clear_color_buffer();
            window.swap_buffers();
            frames += 1;
            log::trace!("Presented frame {frames}");

            window.poll_events(&mut |width, height| {
                on_framebuffer_resize(graphics, viewport, width, height);
            });
        }

        self.frames_presented += frames;
        log::info!("Close requested after {frames} frames");
        frames
    }

    /// Ask the loop to stop at the next iteration boundary
    pub fn request_close(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.set_should_close(true);
        }
    }

    /// Release the context, destroy the window and shut the windowing
    /// subsystem down
    ///
    /// Steps whose resource is already gone are skipped, so calling this more
    /// than once is harmless. Also runs on drop.
    pub fn shutdown(&mut self) {
        self.graphics = None;

        if let Some(mut window) = self.window.take() {
            window.release_context();
            drop(window);
            log::debug!("Window destroyed");
        }

        if let Some(platform) = self.platform.take() {
            drop(platform);
            log::info!("Windowing subsystem shut down");
        }
    }

    /// Viewport currently applied to the framebuffer
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total frames presented so far
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Configuration the loop was initialized with
    pub const fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Whether [`Self::shutdown`] has released the windowing subsystem
    pub const fn is_shut_down(&self) -> bool {
        self.platform.is_none()
    }
}

impl<P: Platform> Drop for RenderLoop<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Framebuffer resize handler
///
/// Runs on the loop thread between frames. Zero-sized framebuffers are
/// applied as-is.
fn on_framebuffer_resize<G: GraphicsApi>(
    graphics: &mut G,
    viewport: &mut Viewport,
    width: i32,
    height: i32,
) {
    *viewport = Viewport::from_framebuffer_size(width, height);
    graphics.set_viewport(*viewport);
    match viewport.aspect_ratio() {
        Some(aspect) => log::debug!("Framebuffer resized, viewport {viewport}, aspect {aspect:.3}"),
        None => log::debug!("Framebuffer resized to an empty viewport"),
    }
}

/// Initialize, run until closed, then shut down
///
/// This is the whole lifetime of the application window.
pub fn run<P, F>(init_platform: F, config: BootstrapConfig) -> BootstrapResult<()>
where
    P: Platform,
    F: FnOnce() -> BootstrapResult<P>,
{
    let mut render_loop = RenderLoop::initialize(init_platform, config)?;
    render_loop.run();
    render_loop.shutdown();
    Ok(())
}
