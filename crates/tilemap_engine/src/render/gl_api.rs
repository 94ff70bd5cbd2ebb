//! OpenGL function table
//!
//! Entry points are resolved with `gl::load_with` through the context that is
//! current on the calling thread. The table is process-wide, so a
//! [`GlGraphics`] is only handed out after every function the render loop
//! calls has been resolved.

#![allow(unsafe_code)]

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;

use crate::bootstrap::{BootstrapError, BootstrapResult};
use crate::render::backend::GraphicsApi;
use crate::render::viewport::Viewport;

/// Loaded OpenGL entry points for the current context
///
/// Not `Send`: the context is current on exactly one thread.
pub struct GlGraphics {
    _not_send: PhantomData<*const ()>,
}

impl GlGraphics {
    /// Resolve the OpenGL entry points through `loader`
    pub fn load<F>(loader: F) -> BootstrapResult<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        let missing: Vec<&str> = [
            ("glViewport", gl::Viewport::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glGetString", gl::GetString::is_loaded()),
        ]
        .into_iter()
        .filter_map(|(name, loaded)| (!loaded).then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(BootstrapError::GraphicsLoader(format!(
                "unresolved entry points: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { _not_send: PhantomData })
    }
}

impl GraphicsApi for GlGraphics {
    fn set_viewport(&mut self, viewport: Viewport) {
        unsafe { gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height) };
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe { gl::ClearColor(r, g, b, a) };
    }

    fn clear_color_buffer(&mut self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn version_string(&self) -> Option<String> {
        let version = unsafe { gl::GetString(gl::VERSION) };
        if version.is_null() {
            return None;
        }
        let version = unsafe { CStr::from_ptr(version.cast()) };
        Some(version.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_entry_points_are_reported() {
        let result = GlGraphics::load(|_| std::ptr::null());

        let Err(BootstrapError::GraphicsLoader(message)) = result else {
            panic!("loading with a null resolver must fail");
        };
        assert!(message.starts_with("unresolved entry points: "), "{message}");
        assert!(message.contains("glViewport"), "{message}");
        assert!(message.contains("glClear"), "{message}");
    }
}
