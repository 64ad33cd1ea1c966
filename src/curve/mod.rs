//! Degree-1 curves built from outline points, and the host that draws them.

use tracing::debug;

use crate::error::{CurveError, Result};
use crate::math::Point3;

/// A degree-1 (polyline) curve through outline points.
///
/// A closed curve repeats its first point at the end and is marked periodic.
/// The knot vector is uniform: `0, 1, ..., n - 1` for `n` control points.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCurve {
    points: Vec<Point3>,
    periodic: bool,
    knots: Vec<f64>,
}

impl OutlineCurve {
    /// Curve degree.
    pub const DEGREE: usize = 1;

    /// Builds a curve through `points`, closing it back to the first point
    /// when `close` is set.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::TooFewPoints` if fewer than 2 points are given.
    pub fn from_outline(points: &[Point3], close: bool) -> Result<Self> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                found: points.len(),
            }
            .into());
        }

        let mut cvs = Vec::with_capacity(points.len() + 1);
        cvs.extend_from_slice(points);
        if close {
            cvs.push(points[0]);
        }

        #[allow(clippy::cast_precision_loss)]
        let knots = (0..cvs.len()).map(|k| k as f64).collect();
        debug!(points = cvs.len(), periodic = close, "assembled outline curve");

        Ok(Self {
            points: cvs,
            periodic: close,
            knots,
        })
    }

    /// Returns the control points, including the closing duplicate if any.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns whether the curve is periodic (closed).
    #[must_use]
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Returns the knot vector.
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Returns the degree (always 1).
    #[must_use]
    pub fn degree(&self) -> usize {
        Self::DEGREE
    }

    /// Returns the total length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

/// The application that turns an [`OutlineCurve`] into a scene object.
pub trait CurveHost {
    /// Host-side reference to the created curve (a node name, an id, ...).
    type Handle;

    /// Creates the curve in the host scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the curve; hosts should report
    /// their own failures as `CurveError::Host`.
    fn create_curve(&mut self, curve: &OutlineCurve) -> Result<Self::Handle>;
}
