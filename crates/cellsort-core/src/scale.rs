use crate::grid::Point;

/// Uniform downscale applied to an image so it fits the display cap.
///
/// Always in `(0.0, 1.0]`; images smaller than the cap keep their native size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayScale(f64);

impl DisplayScale {
    pub const NATIVE: Self = Self(1.0);

    /// `min(1, max_w / width, max_h / height)`.
    pub fn compute(width: u32, height: u32, max_w: u32, max_h: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::NATIVE;
        }
        let fit_w = f64::from(max_w) / f64::from(width);
        let fit_h = f64::from(max_h) / f64::from(height);
        Self(fit_w.min(fit_h).min(1.0))
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Original-space point to display space, truncating.
    pub fn to_display(&self, p: Point) -> Point {
        Point::new(
            (f64::from(p.x) * self.0) as i32,
            (f64::from(p.y) * self.0) as i32,
        )
    }

    /// Display-space point to original space, truncating. Not an exact
    /// inverse of [`to_display`](Self::to_display).
    pub fn to_original(&self, p: Point) -> Point {
        Point::new(
            (f64::from(p.x) / self.0) as i32,
            (f64::from(p.y) / self.0) as i32,
        )
    }

    /// Size of the rendered image in display pixels (at least 1x1).
    pub fn display_size(&self, width: u32, height: u32) -> (u32, u32) {
        let w = (f64::from(width) * self.0) as u32;
        let h = (f64::from(height) * self.0) as u32;
        (w.max(1), h.max(1))
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self::NATIVE
    }
}
