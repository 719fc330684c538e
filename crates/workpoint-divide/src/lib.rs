#![warn(missing_docs)]

//! Straight-edge subdivision for the workpoint feature set.
//!
//! The one computation every point feature shares: cut a straight edge
//! into `parts` equal pieces and evaluate the point at cut boundary
//! `index`, i.e. at the fraction `index/parts` along the edge. The index
//! is deliberately unbounded: negative values and values past `parts`
//! place the point beyond the endpoints on the same infinite line.

use workpoint_math::{Point3, Tolerance, Vec3};

// =============================================================================
// Segment
// =============================================================================

/// A straight edge between two 3D points.
///
/// Parameterization: `P(t) = start + t * (end - start)`, so `t=0` gives
/// `start` and `t=1` gives `end`. `t` is not restricted to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Starting point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Segment {
    /// Create a segment from two endpoints.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end. Not normalized; zero for a
    /// degenerate segment.
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Whether both endpoints coincide within `tol`.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        tol.points_equal(&self.start, &self.end)
    }

    /// Evaluate the segment at parameter `t`.
    ///
    /// `t` outside `[0, 1]` extrapolates beyond the endpoints. A degenerate
    /// segment returns `start` for every `t`. Coordinates are interpolated
    /// as-is; non-finite input propagates into the result.
    pub fn point_at(&self, t: f64) -> Point3 {
        self.start + t * self.direction()
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3 {
        self.point_at(0.5)
    }
}

// =============================================================================
// Division
// =============================================================================

/// How an edge is cut up and which cut boundary to report.
///
/// The part count is clamped on construction: a requested count of 1 or
/// less becomes [`Division::MIN_PARTS`], anything above
/// [`Division::MAX_PARTS`] becomes [`Division::MAX_PARTS`]. Out-of-range
/// counts are never an error. The index is not clamped at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    parts: u32,
    index: i64,
}

impl Division {
    /// Smallest accepted part count.
    pub const MIN_PARTS: i64 = 2;
    /// Largest accepted part count.
    pub const MAX_PARTS: i64 = 100;

    /// Create a division, clamping `parts` into `[MIN_PARTS, MAX_PARTS]`.
    pub fn new(parts: i64, index: i64) -> Self {
        Self {
            parts: parts.clamp(Self::MIN_PARTS, Self::MAX_PARTS) as u32,
            index,
        }
    }

    /// Part count after clamping. Always in `[2, 100]`.
    pub fn parts(&self) -> u32 {
        self.parts
    }

    /// Requested cut boundary. Never clamped.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// The interpolation fraction `index / parts`.
    ///
    /// The clamped part count is never zero, so this is always defined.
    pub fn fraction(&self) -> f64 {
        self.index as f64 / f64::from(self.parts)
    }

    /// Divisions for every cut boundary `0..=parts`, in order.
    pub fn boundaries(self) -> impl Iterator<Item = Division> {
        (0..=i64::from(self.parts)).map(move |index| Self {
            parts: self.parts,
            index,
        })
    }
}

// =============================================================================
// Subdivision entry points
// =============================================================================

/// Point at the fraction `index/parts` along `segment`.
///
/// Plain affine interpolation, computed componentwise. An index outside
/// `[0, parts]` yields a point outside the segment on the same infinite
/// line (extrapolation), which is an intended use.
pub fn point_at_division(segment: &Segment, division: Division) -> Point3 {
    segment.point_at(division.fraction())
}

/// One point per cut boundary of `segment`, sweeping the index `0..=parts`.
///
/// Returns `parts + 1` points, endpoints included.
pub fn points_at_all_divisions(segment: &Segment, division: Division) -> Vec<Point3> {
    division
        .boundaries()
        .map(|d| point_at_division(segment, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn x_axis_segment() -> Segment {
        Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0))
    }

    fn skew_segment() -> Segment {
        Segment::new(Point3::new(1.5, -2.0, 4.25), Point3::new(-3.0, 7.5, 0.125))
    }

    #[test]
    fn test_segment_queries() {
        let seg = x_axis_segment();
        assert!((seg.length() - 10.0).abs() < 1e-12);
        let mid = seg.midpoint();
        assert!((mid.x - 5.0).abs() < 1e-12);
        assert!(!seg.is_degenerate(&Tolerance::DEFAULT));

        let p = Point3::new(2.0, 3.0, 4.0);
        assert!(Segment::new(p, p).is_degenerate(&Tolerance::DEFAULT));
    }

    #[test]
    fn test_endpoints_at_zero_and_parts() {
        for seg in [x_axis_segment(), skew_segment()] {
            for parts in [2, 3, 7, 100] {
                let at_start = point_at_division(&seg, Division::new(parts, 0));
                let at_end = point_at_division(&seg, Division::new(parts, parts));
                assert_relative_eq!(at_start, seg.start, epsilon = 1e-12);
                assert_relative_eq!(at_end, seg.end, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_midpoint_law() {
        let seg = skew_segment();
        let mid = point_at_division(&seg, Division::new(2, 1));
        assert_relative_eq!(mid.x, (seg.start.x + seg.end.x) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, (seg.start.y + seg.end.y) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(mid.z, (seg.start.z + seg.end.z) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_half_of_two_parts() {
        let p = point_at_division(&x_axis_segment(), Division::new(2, 1));
        assert_relative_eq!(p, Point3::new(5.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_three_quarters_of_four_parts() {
        let p = point_at_division(&x_axis_segment(), Division::new(4, 3));
        assert_relative_eq!(p, Point3::new(7.5, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_negative_index_extrapolates_backward() {
        let p = point_at_division(&x_axis_segment(), Division::new(2, -1));
        assert_relative_eq!(p, Point3::new(-5.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_part_count_clamped_low() {
        let seg = skew_segment();
        let reference = point_at_division(&seg, Division::new(2, 1));
        for requested in [1, 0, -5] {
            let div = Division::new(requested, 1);
            assert_eq!(div.parts(), 2);
            assert_eq!(point_at_division(&seg, div), reference);
        }
    }

    #[test]
    fn test_part_count_clamped_high() {
        let seg = skew_segment();
        let reference = point_at_division(&seg, Division::new(100, 7));
        for requested in [101, 150, 500] {
            let div = Division::new(requested, 7);
            assert_eq!(div.parts(), 100);
            assert_eq!(point_at_division(&seg, div), reference);
        }
    }

    #[test]
    fn test_in_range_count_unchanged() {
        assert_eq!(Division::new(2, 0).parts(), 2);
        assert_eq!(Division::new(37, 0).parts(), 37);
        assert_eq!(Division::new(100, 0).parts(), 100);
    }

    #[test]
    fn test_affine_in_index() {
        // Consecutive boundaries are spaced by direction/parts, for indices
        // far outside [0, parts] too.
        let seg = skew_segment();
        let parts = 8;
        let step = seg.direction() / parts as f64;
        for k in [-12i64, -1, 0, 3, 8, 40] {
            let p0 = point_at_division(&seg, Division::new(parts, k));
            let p1 = point_at_division(&seg, Division::new(parts, k + 1));
            assert_relative_eq!(p1 - p0, step, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_degenerate_segment_returns_start() {
        let p = Point3::new(-1.0, 2.0, 9.0);
        let seg = Segment::new(p, p);
        for (parts, index) in [(2, 0), (2, 1), (5, -3), (100, 250)] {
            assert_eq!(point_at_division(&seg, Division::new(parts, index)), p);
        }
    }

    #[test]
    fn test_non_finite_coordinates_propagate() {
        let seg = Segment::new(
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        );
        let p = point_at_division(&seg, Division::new(2, 1));
        assert!(p.x.is_nan());
        assert!((p.y - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_sweep() {
        let seg = x_axis_segment();
        let points = points_at_all_divisions(&seg, Division::new(4, 1));
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0], seg.start, epsilon = 1e-12);
        assert_relative_eq!(points[2], seg.midpoint(), epsilon = 1e-12);
        assert_relative_eq!(points[4], seg.end, epsilon = 1e-12);
    }
}
