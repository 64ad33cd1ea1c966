use nalgebra::Isometry3;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::{EyeSource, WorldToScreen};

/// A pinhole viewport camera projecting into pixel coordinates.
///
/// Right-handed look-at camera: it sits at `eye`, looks towards `target` and
/// keeps `up` pointing up on screen. Screen coordinates are viewport pixels
/// with the origin at the bottom-left corner and y pointing up, so a
/// counter-clockwise loop in the world stays counter-clockwise on screen.
#[derive(Debug, Clone)]
pub struct PerspectiveView {
    eye: Point3,
    view: Isometry3<f64>,
    fov_y: f64,
    width: f64,
    height: f64,
    snap_to_pixels: bool,
}

impl PerspectiveView {
    /// Creates a new perspective view.
    ///
    /// # Arguments
    ///
    /// * `eye` - Camera position
    /// * `target` - Point the camera looks at
    /// * `up` - Approximate up direction (must not be parallel to the view direction)
    /// * `fov_y` - Vertical field of view in radians, in `(0, pi)`
    /// * `width`, `height` - Viewport size in pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the eye coincides with the target, `up` is zero or
    /// parallel to the view direction, or the lens/viewport values are out of range.
    pub fn new(
        eye: Point3,
        target: Point3,
        up: Vector3,
        fov_y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        let forward = target - eye;
        let forward_len = forward.norm();
        if forward_len < TOLERANCE || up.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        if forward.cross(&up).norm() < TOLERANCE * forward_len * up.norm() {
            return Err(GeometryError::Degenerate(
                "up direction is parallel to the view direction".into(),
            )
            .into());
        }
        if !(fov_y > 0.0 && fov_y < std::f64::consts::PI) {
            return Err(GeometryError::Degenerate(format!(
                "field of view must be in (0, pi), got {fov_y}"
            ))
            .into());
        }
        if !(width >= 1.0 && height >= 1.0) {
            return Err(GeometryError::Degenerate(format!(
                "viewport must be at least 1x1 pixels, got {width}x{height}"
            ))
            .into());
        }

        Ok(Self {
            eye,
            view: Isometry3::look_at_rh(&eye, &target, &up),
            fov_y,
            width,
            height,
            snap_to_pixels: false,
        })
    }

    /// Rounds projected coordinates to whole pixels, like viewports that
    /// report integer screen positions.
    #[must_use]
    pub fn with_pixel_snapping(mut self, snap: bool) -> Self {
        self.snap_to_pixels = snap;
        self
    }

    /// Returns the camera position.
    #[must_use]
    pub fn eye(&self) -> &Point3 {
        &self.eye
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Returns the vertical field of view in radians.
    #[must_use]
    pub fn fov_y(&self) -> f64 {
        self.fov_y
    }
}

impl WorldToScreen for PerspectiveView {
    fn world_to_screen(&self, point: &Point3) -> Result<Point2> {
        let cam = self.view.transform_point(point);
        // Camera looks down -Z.
        let depth = -cam.z;
        if depth < TOLERANCE {
            return Err(GeometryError::BehindCamera.into());
        }

        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.width / self.height;
        let ndc_x = cam.x / (depth * half_w);
        let ndc_y = cam.y / (depth * half_h);

        let x = (ndc_x + 1.0) * 0.5 * self.width;
        let y = (ndc_y + 1.0) * 0.5 * self.height;
        if self.snap_to_pixels {
            Ok(Point2::new(x.round(), y.round()))
        } else {
            Ok(Point2::new(x, y))
        }
    }
}

impl EyeSource for PerspectiveView {
    fn eye_point(&self) -> Result<Point3> {
        Ok(self.eye)
    }
}
