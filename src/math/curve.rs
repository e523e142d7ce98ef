use cgmath::prelude::*;
use cgmath::Zero;
use smallvec::SmallVec;
use crate::error::{BezierError, Result};
use crate::util::Interval;
use super::bernstein::bernstein_basis;
use super::{Point2d, Point3d};
pub use reverse::ReversedCurve;

mod reverse;

/// A parametric curve.
pub trait ParametricCurve {
    /// The type of point the curve passes through.
    type Point;

    /// Samples the parametric curve.
    fn sample(&self, t: f64) -> Self::Point;

    /// Returns the minimum and maximum t-values that define the bounds of the curve.
    fn bounds(&self) -> Interval<f64>;
}

impl<T: ParametricCurve + ?Sized> ParametricCurve for &T {
    type Point = T::Point;

    fn sample(&self, t: f64) -> Self::Point {
        (**self).sample(t)
    }

    fn bounds(&self) -> Interval<f64> {
        (**self).bounds()
    }
}

/// Blends a control polygon of any degree with the Bernstein basis at `t`.
///
/// An empty polygon blends to the origin.
pub(crate) fn blend<P>(t: f64, points: &[P]) -> P
where
    P: EuclideanSpace<Scalar = f64>,
{
    let Some(degree) = points.len().checked_sub(1) else {
        return P::origin();
    };
    let sum = bernstein_basis(degree, t)
        .zip(points)
        .fold(<P::Diff as Zero>::zero(), |acc, (a, point)| acc + point.to_vec() * a);
    P::from_vec(sum)
}

/// Evaluates the 2D Bézier curve of degree `points.len() - 1` at `t`.
///
/// No validation is performed: `t` outside `[0, 1]` extrapolates, and an empty
/// slice yields the origin. See [try_curve_2d] for a checked version.
pub fn curve_2d(t: f64, points: &[Point2d]) -> Point2d {
    blend(t, points)
}

/// Evaluates the 3D Bézier curve of degree `points.len() - 1` at `t`.
///
/// See [curve_2d] for the handling of unusual input.
pub fn curve_3d(t: f64, points: &[Point3d]) -> Point3d {
    blend(t, points)
}

/// Like [curve_2d], but fails if `points` is empty.
pub fn try_curve_2d(t: f64, points: &[Point2d]) -> Result<Point2d> {
    check_polygon(points)?;
    Ok(curve_2d(t, points))
}

/// Like [curve_3d], but fails if `points` is empty.
pub fn try_curve_3d(t: f64, points: &[Point3d]) -> Result<Point3d> {
    check_polygon(points)?;
    Ok(curve_3d(t, points))
}

fn check_polygon<P>(points: &[P]) -> Result<()> {
    if points.is_empty() {
        log::debug!("rejecting Bézier curve without control points");
        return Err(BezierError::NoControlPoints);
    }
    Ok(())
}

/// A Bézier curve of arbitrary degree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawCurve<P>", bound(deserialize = "P: serde::Deserialize<'de>"))
)]
pub struct BezierCurve<P> {
    points: SmallVec<[P; 8]>,
}

/// The serialized form of a [BezierCurve], checked before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurve<P> {
    points: Vec<P>,
}

#[cfg(feature = "serde")]
impl<P> TryFrom<RawCurve<P>> for BezierCurve<P> {
    type Error = BezierError;

    fn try_from(raw: RawCurve<P>) -> Result<Self> {
        check_polygon(&raw.points)?;
        Ok(Self {
            points: SmallVec::from_vec(raw.points),
        })
    }
}

/// A Bézier curve in the plane
pub type BezierCurve2d = BezierCurve<Point2d>;

/// A Bézier curve in space
pub type BezierCurve3d = BezierCurve<Point3d>;

impl<P: Copy> BezierCurve<P> {
    /// Creates a curve from its control polygon, which must not be empty.
    pub fn new(points: &[P]) -> Result<Self> {
        check_polygon(points)?;
        Ok(Self {
            points: SmallVec::from_slice(points),
        })
    }

    /// The degree of the curve, one less than the number of control points.
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P> ParametricCurve for BezierCurve<P>
where
    P: EuclideanSpace<Scalar = f64>,
{
    type Point = P;

    fn sample(&self, t: f64) -> P {
        blend(t, &self.points)
    }

    fn bounds(&self) -> Interval<f64> {
        Interval::UNIT
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn single_point_is_constant() {
        let p = Point2d::new(3.5, -2.0);
        for t in [-1.0, 0.0, 0.3, 1.0, 4.0] {
            assert_eq!(curve_2d(t, &[p]), p);
        }
        let q = Point3d::new(1.0, 2.0, 3.0);
        assert_eq!(curve_3d(0.7, &[q]), q);
    }

    #[test]
    fn endpoints() {
        let points = [
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 4.0, -2.0),
            Point3d::new(3.0, -1.0, 5.0),
            Point3d::new(6.0, 2.0, 1.0),
            Point3d::new(-2.0, 7.0, 3.0),
        ];
        assert_eq!(curve_3d(0.0, &points), points[0]);
        let end = curve_3d(1.0, &points);
        assert_approx_eq!(end.x, -2.0);
        assert_approx_eq!(end.y, 7.0);
        assert_approx_eq!(end.z, 3.0);
    }

    #[test]
    fn quadratic_midpoint() {
        let points = [
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 2.0),
            Point2d::new(2.0, 0.0),
        ];
        let p = curve_2d(0.5, &points);
        assert_approx_eq!(p.x, 1.0);
        assert_approx_eq!(p.y, 1.0);
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let points = [Point2d::new(0.0, 0.0), Point2d::new(1.0, 2.0)];
        let p = curve_2d(2.0, &points);
        assert_approx_eq!(p.x, 2.0);
        assert_approx_eq!(p.y, 4.0);
        let p = curve_2d(-1.0, &points);
        assert_approx_eq!(p.x, -1.0);
        assert_approx_eq!(p.y, -2.0);
    }

    #[test]
    fn empty_polygon() {
        assert_eq!(curve_2d(0.5, &[]), Point2d::origin());
        assert_eq!(try_curve_2d(0.5, &[]), Err(BezierError::NoControlPoints));
        assert_eq!(try_curve_3d(0.5, &[]), Err(BezierError::NoControlPoints));
        assert_eq!(
            BezierCurve2d::new(&[]).unwrap_err(),
            BezierError::NoControlPoints
        );
    }

    #[test]
    fn checked_matches_unchecked() {
        let points = [
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(1.0, 0.0),
        ];
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(try_curve_2d(t, &points), Ok(curve_2d(t, &points)));
        }
    }

    #[test]
    fn owned_curve() {
        let points = [
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 2.0),
            Point3d::new(1.0, 1.0, 2.0),
            Point3d::new(1.0, 0.0, 0.0),
        ];
        let curve = BezierCurve3d::new(&points).unwrap();
        assert_eq!(curve.degree(), 3);
        assert_eq!(curve.points(), &points);
        assert_eq!(curve.bounds(), Interval::new(0.0, 1.0));
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            assert_eq!(curve.sample(t), curve_3d(t, &points));
            assert_eq!((&curve).sample(t), curve.sample(t));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_points() {
        let points = [Point2d::new(0.0, 0.0), Point2d::new(1.0, 2.0), Point2d::new(3.0, 1.0)];
        let curve = BezierCurve2d::new(&points).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        let decoded: BezierCurve2d = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, curve);
        assert_eq!(decoded.degree(), 2);

        let err = serde_json::from_str::<BezierCurve2d>(r#"{"points":[]}"#).unwrap_err();
        assert!(err.to_string().contains("at least one control point"));
    }
}
