use cgmath::prelude::*;
use crate::error::BezierError;
use crate::util::Interval;
use super::Point2d;
use super::curve::ParametricCurve;

/// Evaluates the quadratic Bézier curve through `points` at `t`.
pub fn curve_quadratic(t: f64, points: &[Point2d; 3]) -> Point2d {
    let [p1, p2, p3] = points.map(|p| p.to_vec());
    let u = 1.0 - t;

    let a = u * u;
    let b = 2.0 * u * t;
    let c = t * t;

    Point2d::from_vec(a * p1 + b * p2 + c * p3)
}

/// Evaluates the cubic Bézier curve through `points` at `t`.
pub fn curve_cubic(t: f64, points: &[Point2d; 4]) -> Point2d {
    let [p1, p2, p3, p4] = points.map(|p| p.to_vec());
    let u = 1.0 - t;

    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;

    Point2d::from_vec(a * p1 + b * p2 + c * p3 + d * p4)
}

/// Evaluates the quartic Bézier curve through `points` at `t`.
pub fn curve_quartic(t: f64, points: &[Point2d; 5]) -> Point2d {
    let [p1, p2, p3, p4, p5] = points.map(|p| p.to_vec());
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;

    let a = u2 * u2;
    let b = 4.0 * u * u2 * t;
    let c = 6.0 * u2 * t2;
    let d = 4.0 * u * t2 * t;
    let e = t2 * t2;

    Point2d::from_vec(a * p1 + b * p2 + c * p3 + d * p4 + e * p5)
}

/// Evaluates the quintic Bézier curve through `points` at `t`.
pub fn curve_quintic(t: f64, points: &[Point2d; 6]) -> Point2d {
    let [p1, p2, p3, p4, p5, p6] = points.map(|p| p.to_vec());
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;

    let a = u2 * u2 * u;
    let b = 5.0 * u2 * u2 * t;
    let c = 10.0 * u * u2 * t2;
    let d = 10.0 * u2 * t2 * t;
    let e = 5.0 * u * t2 * t2;
    let f = t2 * t2 * t;

    Point2d::from_vec(a * p1 + b * p2 + c * p3 + d * p4 + e * p5 + f * p6)
}

/// Evaluates the sextic Bézier curve through `points` at `t`.
pub fn curve_sextic(t: f64, points: &[Point2d; 7]) -> Point2d {
    let [p1, p2, p3, p4, p5, p6, p7] = points.map(|p| p.to_vec());
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;

    let a = u2 * u2 * u2;
    let b = 6.0 * u2 * u2 * u * t;
    let c = 15.0 * u2 * u2 * t2;
    let d = 20.0 * u * u2 * t2 * t;
    let e = 15.0 * u2 * t2 * t2;
    let f = 6.0 * u * t2 * t2 * t;
    let g = t2 * t2 * t2;

    Point2d::from_vec(a * p1 + b * p2 + c * p3 + d * p4 + e * p5 + f * p6 + g * p7)
}

/// Declares a `Copy` curve type holding exactly `$n` control points, evaluated with `$eval`.
macro_rules! fixed_bezier {
    ($(#[$attr:meta])* $name:ident, $n:literal, $eval:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            points: [Point2d; $n],
        }

        impl $name {
            pub const fn new(points: &[Point2d; $n]) -> Self {
                Self { points: *points }
            }

            pub fn points(&self) -> &[Point2d; $n] {
                &self.points
            }
        }

        impl ParametricCurve for $name {
            type Point = Point2d;

            fn sample(&self, t: f64) -> Point2d {
                $eval(t, &self.points)
            }

            fn bounds(&self) -> Interval<f64> {
                Interval::UNIT
            }
        }

        impl TryFrom<&[Point2d]> for $name {
            type Error = BezierError;

            fn try_from(points: &[Point2d]) -> Result<Self, BezierError> {
                match <[Point2d; $n]>::try_from(points) {
                    Ok(points) => Ok(Self { points }),
                    Err(_) => {
                        log::debug!(
                            "rejecting {} control points for {}",
                            points.len(),
                            stringify!($name)
                        );
                        Err(BezierError::PointCount {
                            expected: $n,
                            found: points.len(),
                        })
                    }
                }
            }
        }
    };
}

fixed_bezier!(
    /// A quadratic bezier curve
    QuadraticBezier2d, 3, curve_quadratic
);
fixed_bezier!(
    /// A cubic bezier curve
    CubicBezier2d, 4, curve_cubic
);
fixed_bezier!(
    /// A quartic bezier curve
    QuarticBezier2d, 5, curve_quartic
);
fixed_bezier!(
    /// A quintic bezier curve
    QuinticBezier2d, 6, curve_quintic
);
fixed_bezier!(
    /// A sextic bezier curve
    SexticBezier2d, 7, curve_sextic
);

impl CubicBezier2d {
    /// A cubic whose control points are evenly spaced along a straight line.
    pub fn line(start: Point2d, end: Point2d) -> Self {
        let s = start.to_vec();
        let e = end.to_vec();
        let ps = [s, s.lerp(e, 1. / 3.), s.lerp(e, 2. / 3.), e];
        Self {
            points: ps.map(Point2d::from_vec),
        }
    }
}
