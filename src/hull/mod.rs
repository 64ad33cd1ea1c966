//! Convex hull of a screen-space point set.
//!
//! The hull comes from `spade`'s Delaunay triangulation. Its result is
//! normalized to one fixed order so that callers building closed curves
//! always see the same loop:
//!
//! - counter-clockwise in the screen frame (x right, y up)
//! - starting at the leftmost hull vertex, ties broken by lowest y
//! - points lying on a hull edge are not hull vertices
//! - duplicate screen points are reported under the lowest input index

use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};
use tracing::trace;

use crate::error::{GeometryError, OutlineError, Result};
use crate::math::polygon_2d::{is_collinear, leftmost_bottom, signed_area};
use crate::math::Point2;

/// Indices of the convex hull vertices of a 2D point set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexHull2d {
    indices: Vec<usize>,
}

impl ConvexHull2d {
    /// Computes the convex hull of `points`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidPoint` if a coordinate is not finite or cannot be triangulated
    /// - `OutlineError::InsufficientPoints` if there are fewer than 3 distinct points
    /// - `OutlineError::DegenerateProjection` if all distinct points are collinear
    pub fn compute(points: &[Point2]) -> Result<Self> {
        let mut tri: DelaunayTriangulation<SpadePoint2<f64>> = DelaunayTriangulation::new();
        // owner[vertex handle] = first input index inserted at that position
        let mut owner: Vec<usize> = Vec::with_capacity(points.len());

        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(GeometryError::InvalidPoint(format!(
                    "screen point {i} is not finite: ({}, {})",
                    p.x, p.y
                ))
                .into());
            }
            let handle = tri.insert(SpadePoint2::new(p.x, p.y)).map_err(|e: InsertionError| {
                GeometryError::InvalidPoint(format!("screen point {i}: {e}"))
            })?;
            if handle.index() == owner.len() {
                owner.push(i);
            }
        }

        let distinct = tri.num_vertices();
        if distinct < 3 {
            return Err(OutlineError::InsufficientPoints { found: distinct }.into());
        }
        if tri.all_vertices_on_line() {
            return Err(OutlineError::DegenerateProjection.into());
        }

        let mut cycle: Vec<(usize, Point2)> = tri
            .convex_hull()
            .map(|edge| {
                let from = edge.from();
                let pos = from.position();
                (owner[from.fix().index()], Point2::new(pos.x, pos.y))
            })
            .collect();
        trace!(raw = cycle.len(), distinct, "triangulated screen points");

        cycle = drop_edge_points(&cycle);
        if cycle.len() < 3 {
            return Err(OutlineError::DegenerateProjection.into());
        }

        let positions: Vec<Point2> = cycle.iter().map(|&(_, p)| p).collect();
        if signed_area(&positions) < 0.0 {
            cycle.reverse();
        }

        let positions: Vec<Point2> = cycle.iter().map(|&(_, p)| p).collect();
        let start = leftmost_bottom(&positions).unwrap_or(0);
        cycle.rotate_left(start);

        Ok(Self {
            indices: cycle.into_iter().map(|(i, _)| i).collect(),
        })
    }

    /// Returns the hull vertex indices in traversal order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consumes the hull, returning the vertex indices.
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Returns the number of hull vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the hull has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Removes vertices that lie on the straight segment between their neighbors.
fn drop_edge_points(cycle: &[(usize, Point2)]) -> Vec<(usize, Point2)> {
    let n = cycle.len();
    if n < 3 {
        return cycle.to_vec();
    }
    (0..n)
        .filter(|&i| {
            let prev = &cycle[(i + n - 1) % n].1;
            let next = &cycle[(i + 1) % n].1;
            !is_collinear(prev, &cycle[i].1, next)
        })
        .map(|i| cycle[i])
        .collect()
}
