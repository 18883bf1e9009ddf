//! Viewport dimensions and layout breakpoint.

/// Widths below this (CSS px) use the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(Viewport::new(767.0, 900.0).is_mobile());
        assert!(!Viewport::new(768.0, 900.0).is_mobile());
        assert!(!Viewport::new(1440.0, 900.0).is_mobile());
    }
}
