mod sphere;

pub use sphere::{project_to_sphere, EyeSphere};

use tracing::debug;

use crate::error::{GeometryError, OutlineError, OutlinerError, Result};
use crate::hull::ConvexHull2d;
use crate::math::{Point2, Point3};
use crate::projection::WorldToScreen;

/// Parameters controlling outline construction.
#[derive(Debug, Clone, Copy)]
pub struct OutlineParams {
    /// Push outline points onto a sphere around the eye at their mean distance.
    pub project_to_sphere: bool,
    /// Close the curve built from the outline.
    pub close_curve: bool,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            project_to_sphere: true,
            close_curve: true,
        }
    }
}

/// The silhouette loop of a vertex cloud.
///
/// `points[k]` comes from input vertex `indices[k]`. The loop is open: the
/// first point is not repeated at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Outline points in hull traversal order.
    pub points: Vec<Point3>,
    /// Input vertex index of each outline point.
    pub indices: Vec<usize>,
    /// Sphere radius when the points were re-projected.
    pub radius: Option<f64>,
}

impl Outline {
    /// Returns the number of outline points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the outline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Computes the silhouette outline of a vertex cloud seen from an eye point.
pub struct ComputeOutline {
    eye: Point3,
    params: OutlineParams,
}

impl ComputeOutline {
    /// Creates a new `ComputeOutline` operation.
    #[must_use]
    pub fn new(eye: Point3, params: OutlineParams) -> Self {
        Self { eye, params }
    }

    /// Executes the operation.
    ///
    /// Projects `vertices` through `projector`, takes the convex hull on
    /// screen and returns the matching 3D vertices in hull order (see
    /// [`ConvexHull2d`] for the order), optionally re-projected onto the eye
    /// sphere.
    ///
    /// # Errors
    ///
    /// - `OutlineError::MissingInput` if `vertices` is empty
    /// - `OutlineError::InsufficientPoints` for fewer than 3 vertices or 3 distinct projections
    /// - `OutlineError::DegenerateProjection` if all projections are collinear
    /// - `OutlineError::ZeroDistanceToEye` if an outline point sits on the eye;
    ///   `index` is the input vertex index
    /// - `GeometryError::InvalidPoint` if a vertex has a non-finite coordinate
    /// - any error returned by `projector`
    pub fn execute<P>(&self, vertices: &[Point3], projector: &P) -> Result<Outline>
    where
        P: WorldToScreen + ?Sized,
    {
        if vertices.is_empty() {
            return Err(OutlineError::MissingInput("empty vertex list".into()).into());
        }
        if vertices.len() < 3 {
            return Err(OutlineError::InsufficientPoints {
                found: vertices.len(),
            }
            .into());
        }
        if let Some(i) = vertices
            .iter()
            .position(|v| !v.coords.iter().all(|c| c.is_finite()))
        {
            return Err(GeometryError::InvalidPoint(format!(
                "vertex {i} is not finite: {}",
                vertices[i]
            ))
            .into());
        }

        let screen = vertices
            .iter()
            .map(|v| projector.world_to_screen(v))
            .collect::<Result<Vec<Point2>>>()?;

        let indices = ConvexHull2d::compute(&screen)?.into_indices();
        let mut points: Vec<Point3> = indices.iter().map(|&i| vertices[i]).collect();
        debug!(
            vertices = vertices.len(),
            hull = indices.len(),
            "computed screen-space hull"
        );

        let radius = if self.params.project_to_sphere {
            let r = project_to_sphere(&mut points, self.eye).map_err(|e| match e {
                OutlinerError::Outline(OutlineError::ZeroDistanceToEye { index }) => {
                    OutlineError::ZeroDistanceToEye {
                        index: indices[index],
                    }
                    .into()
                }
                other => other,
            })?;
            debug!(radius = r, "re-projected outline onto eye sphere");
            Some(r)
        } else {
            None
        };

        Ok(Outline {
            points,
            indices,
            radius,
        })
    }
}

/// Computes the silhouette outline of `vertices` seen from `eye`.
///
/// Shorthand for [`ComputeOutline`] with only the sphere re-projection flag set.
///
/// # Errors
///
/// See [`ComputeOutline::execute`].
pub fn compute_outline<P>(
    vertices: &[Point3],
    eye: Point3,
    projector: &P,
    project_to_sphere: bool,
) -> Result<Outline>
where
    P: WorldToScreen + ?Sized,
{
    let params = OutlineParams {
        project_to_sphere,
        ..OutlineParams::default()
    };
    ComputeOutline::new(eye, params).execute(vertices, projector)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area;
    use crate::projection::{Orthographic, PerspectiveView};
    use crate::math::Vector3;
    use approx::assert_relative_eq;

    fn cube() -> Vec<Point3> {
        let mut pts = Vec::new();
        for &x in &[-1.0, 1.0] {
            for &y in &[-1.0, 1.0] {
                for &z in &[-1.0, 1.0] {
                    pts.push(Point3::new(x, y, z));
                }
            }
        }
        pts
    }

    fn drop_z(p: &Point3) -> Point2 {
        Point2::new(p.x, p.y)
    }

    #[test]
    fn cube_orthographic_outline() {
        let eye = Point3::new(0.0, 0.0, 10.0);
        let verts = cube();
        let outline = compute_outline(&verts, eye, &drop_z, true).unwrap();

        assert_eq!(outline.len(), 4);
        // Depth duplicates collapse onto the first (z = -1) corner.
        assert_eq!(outline.indices, vec![0, 4, 6, 2]);

        let r = outline.radius.unwrap();
        for p in &outline.points {
            assert_relative_eq!((p - eye).norm(), r, max_relative = 1e-9);
        }
        // All four picked corners are at z = -1: sqrt(1 + 1 + 121).
        assert_relative_eq!(r, 123.0_f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn cube_corners_cover_the_square() {
        let verts = cube();
        let outline = compute_outline(&verts, Point3::origin(), &drop_z, false).unwrap();
        let mut corners: Vec<(i64, i64)> = outline
            .points
            .iter()
            .map(|p| (p.x as i64, p.y as i64))
            .collect();
        corners.sort_unstable();
        assert_eq!(corners, vec![(-1, -1), (-1, 1), (1, -1), (1, 1)]);
    }

    #[test]
    fn without_sphere_points_are_input_vertices() {
        let verts = vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(3.0, 0.0, 2.0),
            Point3::new(1.0, 1.0, 5.0),
            Point3::new(0.0, 3.0, -1.0),
        ];
        let outline = compute_outline(&verts, Point3::new(0.0, 0.0, 10.0), &drop_z, false).unwrap();
        assert!(outline.radius.is_none());
        assert!(outline.len() <= verts.len());
        for (p, &i) in outline.points.iter().zip(&outline.indices) {
            assert!(i < verts.len());
            assert_eq!(*p, verts[i]);
        }
        assert_eq!(outline.indices, vec![0, 1, 3]);
    }

    #[test]
    fn sphere_radius_is_mean_of_original_distances() {
        let eye = Point3::new(0.5, 0.5, 10.0);
        let verts = vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(3.0, 0.0, 2.0),
            Point3::new(0.0, 3.0, -1.0),
        ];
        let mean = verts.iter().map(|v| (v - eye).norm()).sum::<f64>() / 3.0;
        let outline = compute_outline(&verts, eye, &drop_z, true).unwrap();
        assert_relative_eq!(outline.radius.unwrap(), mean, max_relative = 1e-12);
        for (p, &i) in outline.points.iter().zip(&outline.indices) {
            assert_relative_eq!((p - eye).norm(), mean, max_relative = 1e-9);
            let before = (verts[i] - eye).normalize();
            let after = (p - eye).normalize();
            assert!((before - after).norm() < 1e-12);
        }
    }

    #[test]
    fn outline_is_counter_clockwise_on_screen() {
        let verts: Vec<Point3> = (0..12)
            .map(|k| {
                let a = f64::from(k) * std::f64::consts::TAU / 12.0;
                Point3::new(a.cos() * 2.0, a.sin(), f64::from(k % 3))
            })
            .collect();
        let outline = compute_outline(&verts, Point3::new(0.0, 0.0, 20.0), &drop_z, false).unwrap();
        let screen: Vec<Point2> = outline.points.iter().map(drop_z).collect();
        assert!(signed_area(&screen) > 0.0);
        // Leftmost point of the ellipse is k = 6.
        assert_eq!(outline.indices[0], 6);
    }

    #[test]
    fn collinear_input_fails() {
        let verts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ];
        let err = compute_outline(&verts, Point3::new(0.0, 0.0, 10.0), &drop_z, true).unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Outline(OutlineError::DegenerateProjection)
        ));
    }

    #[test]
    fn too_few_vertices_fail() {
        let eye = Point3::new(0.0, 0.0, 10.0);
        let err = compute_outline(&[], eye, &drop_z, true).unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Outline(OutlineError::MissingInput(_))
        ));

        let two = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let err = compute_outline(&two, eye, &drop_z, true).unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Outline(OutlineError::InsufficientPoints { found: 2 })
        ));
    }

    #[test]
    fn stacked_projections_fail() {
        // Three vertices, but only two distinct screen points.
        let verts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        let err = compute_outline(&verts, Point3::new(0.0, 0.0, 10.0), &drop_z, true).unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Outline(OutlineError::InsufficientPoints { found: 2 })
        ));
    }

    #[test]
    fn hull_vertex_at_eye_fails() {
        let eye = Point3::new(0.0, 0.0, 0.0);
        let verts = vec![eye, Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        let err = compute_outline(&verts, eye, &drop_z, true).unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Outline(OutlineError::ZeroDistanceToEye { index: 0 })
        ));
    }

    #[test]
    fn eye_error_reports_input_index() {
        // Hull order is [2, 0, 1]: the vertex on the eye is outline point 0
        // but input vertex 2.
        let eye = Point3::origin();
        let verts = vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0), eye];
        let err = compute_outline(&verts, eye, &drop_z, true).unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Outline(OutlineError::ZeroDistanceToEye { index: 2 })
        ));
    }

    #[test]
    fn non_finite_vertex_fails() {
        // The projector drops z, so the NaN never reaches the hull.
        let verts = vec![
            Point3::new(0.0, 0.0, f64::NAN),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let eye = Point3::new(0.0, 0.0, 10.0);
        for sphere in [true, false] {
            let err = compute_outline(&verts, eye, &drop_z, sphere).unwrap_err();
            assert!(matches!(
                err,
                OutlinerError::Geometry(GeometryError::InvalidPoint(_))
            ));
        }
    }

    #[test]
    fn projector_errors_propagate() {
        let view = PerspectiveView::new(
            Point3::new(0.0, 0.0, 10.0),
            Point3::origin(),
            Vector3::y(),
            1.0,
            640.0,
            480.0,
        )
        .unwrap();
        let mut verts = cube();
        verts.push(Point3::new(0.0, 0.0, 11.0));
        let err = ComputeOutline::new(*view.eye(), OutlineParams::default())
            .execute(&verts, &view)
            .unwrap_err();
        assert!(matches!(
            err,
            OutlinerError::Geometry(GeometryError::BehindCamera)
        ));
    }

    #[test]
    fn perspective_cube_outline() {
        // Looking at a cube corner-on from the front, slightly above.
        let eye = Point3::new(0.0, 3.0, 10.0);
        let view = PerspectiveView::new(eye, Point3::origin(), Vector3::y(), 0.8, 640.0, 480.0)
            .unwrap()
            .with_pixel_snapping(true);
        let outline = ComputeOutline::new(eye, OutlineParams::default())
            .execute(&cube(), &view)
            .unwrap();
        // Front face and the top back edge are visible: a hexagon.
        assert_eq!(outline.len(), 6);
        let r = outline.radius.unwrap();
        for p in &outline.points {
            assert_relative_eq!((p - eye).norm(), r, max_relative = 1e-9);
        }
    }

    #[test]
    fn orthographic_projector_struct() {
        let outline = ComputeOutline::new(
            Point3::new(0.0, 0.0, 10.0),
            OutlineParams {
                project_to_sphere: false,
                close_curve: false,
            },
        )
        .execute(&cube(), &Orthographic::default())
        .unwrap();
        assert_eq!(outline.indices, vec![0, 4, 6, 2]);
    }
}
