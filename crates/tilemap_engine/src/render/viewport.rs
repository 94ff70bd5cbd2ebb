//! Viewport tracking
//!
//! The viewport always covers the whole framebuffer, so it is fully described
//! by the framebuffer size. Zero-sized viewports are valid (minimized windows
//! report a 0x0 framebuffer on some platforms).

/// Rectangle mapping normalized device coordinates to framebuffer pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: i32,
    /// Bottom edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a framebuffer of the given size
    ///
    /// Negative sizes reported by the platform are clamped to zero.
    pub const fn from_framebuffer_size(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    /// True when nothing can be drawn into the viewport
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height, `None` for an empty viewport
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_full_framebuffer() {
        let viewport = Viewport::from_framebuffer_size(800, 600);
        assert_eq!(viewport, Viewport { x: 0, y: 0, width: 800, height: 600 });
        assert_eq!(viewport.aspect_ratio(), Some(800.0 / 600.0));
    }

    #[test]
    fn test_zero_area_is_valid() {
        let viewport = Viewport::from_framebuffer_size(0, 0);
        assert!(viewport.is_empty());
        assert_eq!(viewport.aspect_ratio(), None);
        assert!(Viewport::from_framebuffer_size(640, 0).is_empty());
    }

    #[test]
    fn test_negative_sizes_clamp_to_zero() {
        let viewport = Viewport::from_framebuffer_size(-5, 300);
        assert_eq!(viewport.width, 0);
        assert_eq!(viewport.height, 300);
    }

    #[test]
    fn test_display() {
        assert_eq!(Viewport::from_framebuffer_size(400, 300).to_string(), "(0, 0, 400x300)");
    }
}
