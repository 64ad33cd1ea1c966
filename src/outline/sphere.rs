use crate::error::{GeometryError, OutlineError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A sphere centered on the eye point.
///
/// Outline points are pushed onto it along their line of sight, so the
/// silhouette keeps its screen shape while every point sits at the same
/// distance from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeSphere {
    center: Point3,
    radius: f64,
}

impl EyeSphere {
    /// Creates a new eye sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a finite positive number.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "eye sphere radius must be positive, got {radius}"
            ))
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Fits the sphere around `eye` whose radius is the mean distance from
    /// `eye` to `points`.
    ///
    /// # Errors
    ///
    /// - `OutlineError::MissingInput` if `points` is empty
    /// - `OutlineError::ZeroDistanceToEye` if any point coincides with `eye`
    /// - `GeometryError::InvalidPoint` if a point or the eye is not finite
    /// - `GeometryError::Degenerate` if the mean distance overflows
    pub fn fit(eye: Point3, points: &[Point3]) -> Result<Self> {
        if points.is_empty() {
            return Err(OutlineError::MissingInput("no points to project".into()).into());
        }
        let mut sum = 0.0;
        for (index, p) in points.iter().enumerate() {
            let dist = (p - eye).norm();
            if !dist.is_finite() {
                return Err(GeometryError::InvalidPoint(format!(
                    "distance from eye to point {index} is not finite"
                ))
                .into());
            }
            if dist < TOLERANCE {
                return Err(OutlineError::ZeroDistanceToEye { index }.into());
            }
            sum += dist;
        }
        #[allow(clippy::cast_precision_loss)]
        let radius = sum / points.len() as f64;
        if !radius.is_finite() {
            return Err(GeometryError::Degenerate(format!(
                "mean eye distance is not finite: {radius}"
            ))
            .into());
        }
        Ok(Self {
            center: eye,
            radius,
        })
    }

    /// Returns the center (eye point).
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Moves `point` onto the sphere along the ray from the center through it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the point coincides with the center.
    pub fn project(&self, point: &Point3) -> Result<Point3> {
        let d: Vector3 = point - self.center;
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.center + d * (self.radius / len))
    }

    /// Returns `true` if `point` lies on the sphere within `tolerance`
    /// (relative to the radius).
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        ((point - self.center).norm() - self.radius).abs() <= tolerance * self.radius
    }
}

/// Re-projects `points` in place onto the sphere around `eye` whose radius is
/// their mean distance from `eye`, returning that radius.
///
/// The mean is taken over all points before any point moves.
///
/// # Errors
///
/// - `OutlineError::MissingInput` if `points` is empty
/// - `OutlineError::ZeroDistanceToEye` if any point coincides with `eye`
/// - `GeometryError::InvalidPoint` / `Degenerate` for non-finite distances
pub fn project_to_sphere(points: &mut [Point3], eye: Point3) -> Result<f64> {
    let sphere = EyeSphere::fit(eye, points)?;
    for p in points.iter_mut() {
        *p = sphere.project(p)?;
    }
    Ok(sphere.radius())
}
