//! Mathematical structs and functions.

use cgmath::{Point2, Point3};
pub use bernstein::{basis_values, bernstein_basis, binomial, BernsteinBasis};
pub use bezier::{
    curve_cubic, curve_quadratic, curve_quartic, curve_quintic, curve_sextic, CubicBezier2d,
    QuadraticBezier2d, QuarticBezier2d, QuinticBezier2d, SexticBezier2d,
};
pub use curve::{
    curve_2d, curve_3d, try_curve_2d, try_curve_3d, BezierCurve, BezierCurve2d, BezierCurve3d,
    ParametricCurve, ReversedCurve,
};
pub use surface::{
    surface_2d, surface_3d, try_surface_2d, try_surface_3d, BezierSurface, BezierSurface2d,
    BezierSurface3d, ParametricSurface,
};

mod bernstein;
mod bezier;
mod curve;
mod surface;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 3D point
pub type Point3d = Point3<f64>;
