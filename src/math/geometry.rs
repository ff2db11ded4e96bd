//! Triangle containment tests used by the raster export
//!
//! Sign-based edge functions tolerate both vertex windings, which matters
//! because jitter can flip the orientation of individual mesh triangles.

use num_traits::Float;

/// Signed area-like edge function for point `p` against edge `a -> b`
fn edge_sign<T: Float>(p: [T; 2], a: [T; 2], b: [T; 2]) -> T {
    (p[0] - b[0]) * (a[1] - b[1]) - (a[0] - b[0]) * (p[1] - b[1])
}

/// Check whether `point` lies inside the triangle `a`, `b`, `c`
///
/// Points exactly on an edge count as inside, so adjacent triangles both
/// claim their shared boundary and scan filling leaves no gaps.
pub fn point_in_triangle<T: Float>(point: [T; 2], a: [T; 2], b: [T; 2], c: [T; 2]) -> bool {
    let d1 = edge_sign(point, a, b);
    let d2 = edge_sign(point, b, c);
    let d3 = edge_sign(point, c, a);

    let has_negative = d1 < T::zero() || d2 < T::zero() || d3 < T::zero();
    let has_positive = d1 > T::zero() || d2 > T::zero() || d3 > T::zero();

    !(has_negative && has_positive)
}
