//! Evaluation of Bézier curves and tensor-product Bézier surfaces.
//!
//! Every evaluator is a pure function of its parameter(s) and control points.
//! The plain functions perform no validation; the `try_*` variants and the
//! owned curve/surface types check the shape of their input first.

pub use cgmath;
pub use error::{BezierError, Result};
pub use math::{
    basis_values, bernstein_basis, binomial, curve_2d, curve_3d, curve_cubic, curve_quadratic,
    curve_quartic, curve_quintic, curve_sextic, surface_2d, surface_3d, try_curve_2d,
    try_curve_3d, try_surface_2d, try_surface_3d, BezierCurve, BezierCurve2d, BezierCurve3d,
    BezierSurface, BezierSurface2d, BezierSurface3d, CubicBezier2d, ParametricCurve,
    ParametricSurface, Point2d, Point3d, QuadraticBezier2d, QuarticBezier2d, QuinticBezier2d,
    ReversedCurve, SexticBezier2d,
};
pub use util::Interval;

mod error;
pub mod math;
mod util;
