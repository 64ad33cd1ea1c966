//! Capabilities a host supplies to the outline computation, plus reference
//! implementations that need no host at all.
//!
//! A host application owns the scene, the viewport camera and the mesh data.
//! The outline code only ever sees them through these traits.

mod orthographic;
mod perspective;

pub use orthographic::{Orthographic, ScreenAxes};
pub use perspective::PerspectiveView;

use crate::error::Result;
use crate::math::{Point2, Point3};

/// Maps a world-space point to a 2D screen-space point under the current view.
pub trait WorldToScreen {
    /// Projects `point` onto the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the point cannot be projected under this view
    /// (for example, it lies behind a perspective camera).
    fn world_to_screen(&self, point: &Point3) -> Result<Point2>;
}

impl<F> WorldToScreen for F
where
    F: Fn(&Point3) -> Point2,
{
    fn world_to_screen(&self, point: &Point3) -> Result<Point2> {
        Ok(self(point))
    }
}

/// Supplies the world-space vertex positions of a mesh, in a stable order.
pub trait VertexSource {
    /// Returns a snapshot of the vertex positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot read the mesh.
    fn vertices(&self) -> Result<Vec<Point3>>;
}

impl VertexSource for [Point3] {
    fn vertices(&self) -> Result<Vec<Point3>> {
        Ok(self.to_vec())
    }
}

impl VertexSource for Vec<Point3> {
    fn vertices(&self) -> Result<Vec<Point3>> {
        Ok(self.clone())
    }
}

/// Supplies the position of the active viewpoint.
pub trait EyeSource {
    /// Returns the eye position in world space.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no active camera.
    fn eye_point(&self) -> Result<Point3>;
}

impl EyeSource for Point3 {
    fn eye_point(&self) -> Result<Point3> {
        Ok(*self)
    }
}
