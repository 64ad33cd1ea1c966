use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Cross product of `(b - a)` and `(c - b)`.
///
/// Positive for a left (counter-clockwise) turn at `b`, negative for a right turn.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

/// Returns `true` if `b` lies on the straight line through `a` and `c`.
///
/// The tolerance is relative to the lengths of both legs so that the test
/// behaves the same for normalized and pixel coordinates.
#[must_use]
pub fn is_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let scale = (b - a).norm() * (c - b).norm();
    turn(a, b, c).abs() <= TOLERANCE * scale.max(TOLERANCE)
}

/// Returns the position of the leftmost point, breaking ties by smallest y.
///
/// x values within [`TOLERANCE`] of each other count as a tie. Returns `None`
/// for an empty slice.
#[must_use]
pub fn leftmost_bottom(points: &[Point2]) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || ((pt.x - b.x).abs() < TOLERANCE && pt.y < b.y) {
            best = i;
        }
    }
    Some(best)
}
