use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, TOLERANCE};

use super::WorldToScreen;

/// Which world axes become screen x and y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAxes {
    /// Looking down -Z: screen `(x, y)` = world `(x, y)`.
    #[default]
    Xy,
    /// Looking down -X: screen `(x, y)` = world `(y, z)`.
    Yz,
    /// Looking down -Y: screen `(x, y)` = world `(z, x)`.
    Zx,
}

/// Axis-aligned orthographic projection.
///
/// Drops one world axis and scales the remaining two uniformly.
#[derive(Debug, Clone, Copy)]
pub struct Orthographic {
    axes: ScreenAxes,
    scale: f64,
}

impl Orthographic {
    /// Creates a unit-scale projection onto the given axes.
    #[must_use]
    pub fn new(axes: ScreenAxes) -> Self {
        Self { axes, scale: 1.0 }
    }

    /// Sets the world-to-screen scale factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not a finite positive number.
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "orthographic scale must be positive, got {scale}"
            ))
            .into());
        }
        self.scale = scale;
        Ok(self)
    }

    /// Returns the projected axes.
    #[must_use]
    pub fn axes(&self) -> ScreenAxes {
        self.axes
    }

    /// Returns the scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for Orthographic {
    fn default() -> Self {
        Self::new(ScreenAxes::Xy)
    }
}

impl WorldToScreen for Orthographic {
    fn world_to_screen(&self, point: &Point3) -> Result<Point2> {
        let (x, y) = match self.axes {
            ScreenAxes::Xy => (point.x, point.y),
            ScreenAxes::Yz => (point.y, point.z),
            ScreenAxes::Zx => (point.z, point.x),
        };
        Ok(Point2::new(x * self.scale, y * self.scale))
    }
}
