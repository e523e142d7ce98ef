use cgmath::prelude::*;
use cgmath::Zero;
use crate::error::{BezierError, Result};
use crate::util::Interval;
use super::bernstein::basis_values;
use super::{Point2d, Point3d};

/// A surface parameterised over two variables.
pub trait ParametricSurface {
    /// The type of point the surface passes through.
    type Point;

    /// Samples the surface at `(t, u)`.
    fn sample(&self, t: f64, u: f64) -> Self::Point;

    /// The bounds of `t` and `u` respectively.
    fn bounds(&self) -> (Interval<f64>, Interval<f64>);
}

/// Blends a grid of control points with the tensor product of two Bernstein bases.
///
/// `t` runs down the rows, `u` along them. Each row contributes at most
/// `cols` points.
fn blend_rows<'a, P, I>(t: f64, u: f64, rows: I, cols: usize) -> P
where
    P: EuclideanSpace<Scalar = f64> + 'a,
    I: ExactSizeIterator<Item = &'a [P]>,
{
    let (Some(n1), Some(n2)) = (rows.len().checked_sub(1), cols.checked_sub(1)) else {
        return P::origin();
    };

    let basis1 = basis_values(n1, t);
    let basis2 = basis_values(n2, u);

    let mut sum = <P::Diff as Zero>::zero();
    for (b1, row) in basis1.iter().zip(rows) {
        for (b2, point) in basis2.iter().zip(row) {
            sum = sum + point.to_vec() * (b1 * b2);
        }
    }
    P::from_vec(sum)
}

fn blend_grid<'a, P, R>(t: f64, u: f64, grid: &'a [R]) -> P
where
    P: EuclideanSpace<Scalar = f64> + 'a,
    R: AsRef<[P]>,
{
    let cols = grid.first().map_or(0, |row| row.as_ref().len());
    blend_rows(t, u, grid.iter().map(|row| row.as_ref()), cols)
}

/// Checks that `grid` is non-empty and rectangular, returning its row length.
fn check_grid<P, R: AsRef<[P]>>(grid: &[R]) -> Result<usize> {
    let Some(first) = grid.first() else {
        log::debug!("rejecting Bézier surface without control points");
        return Err(BezierError::EmptyGrid);
    };
    let cols = first.as_ref().len();
    if cols == 0 {
        log::debug!("rejecting Bézier surface with an empty first row");
        return Err(BezierError::EmptyRow { row: 0 });
    }
    for (row, points) in grid.iter().enumerate().skip(1) {
        let found = points.as_ref().len();
        if found != cols {
            log::debug!("rejecting ragged Bézier surface: row {row} has {found} of {cols} points");
            return Err(match found {
                0 => BezierError::EmptyRow { row },
                _ => BezierError::RaggedGrid {
                    row,
                    expected: cols,
                    found,
                },
            });
        }
    }
    Ok(cols)
}

/// Evaluates the 2D tensor-product Bézier surface over `grid` at `(t, u)`.
///
/// `grid` holds `n1 + 1` rows of `n2 + 1` points; `t` selects along the rows'
/// direction and `u` within each row. Both dimensions are taken from the first
/// row. Nothing is validated: a shorter row only contributes the points it
/// has, and an empty grid yields the origin. See [try_surface_2d].
pub fn surface_2d<R: AsRef<[Point2d]>>(t: f64, u: f64, grid: &[R]) -> Point2d {
    blend_grid(t, u, grid)
}

/// Evaluates the 3D tensor-product Bézier surface over `grid` at `(t, u)`.
///
/// See [surface_2d] for the layout of `grid`.
pub fn surface_3d<R: AsRef<[Point3d]>>(t: f64, u: f64, grid: &[R]) -> Point3d {
    blend_grid(t, u, grid)
}

/// Like [surface_2d], but fails unless `grid` is non-empty and rectangular.
pub fn try_surface_2d<R: AsRef<[Point2d]>>(t: f64, u: f64, grid: &[R]) -> Result<Point2d> {
    check_grid(grid)?;
    Ok(surface_2d(t, u, grid))
}

/// Like [surface_3d], but fails unless `grid` is non-empty and rectangular.
pub fn try_surface_3d<R: AsRef<[Point3d]>>(t: f64, u: f64, grid: &[R]) -> Result<Point3d> {
    check_grid(grid)?;
    Ok(surface_3d(t, u, grid))
}

/// A tensor-product Bézier surface with its control grid stored row-major.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawSurface<P>", bound(deserialize = "P: serde::Deserialize<'de>"))
)]
pub struct BezierSurface<P> {
    points: Vec<P>,
    cols: usize,
}

/// The serialized form of a [BezierSurface], checked before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSurface<P> {
    points: Vec<P>,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<P> TryFrom<RawSurface<P>> for BezierSurface<P> {
    type Error = BezierError;

    fn try_from(raw: RawSurface<P>) -> Result<Self> {
        let RawSurface { points, cols } = raw;
        if points.is_empty() {
            log::debug!("rejecting serialized Bézier surface without control points");
            return Err(BezierError::EmptyGrid);
        }
        if cols == 0 {
            log::debug!("rejecting serialized Bézier surface with empty rows");
            return Err(BezierError::EmptyRow { row: 0 });
        }
        let found = points.len() % cols;
        if found != 0 {
            log::debug!(
                "rejecting serialized Bézier surface: {} points in rows of {cols}",
                points.len()
            );
            return Err(BezierError::RaggedGrid {
                row: points.len() / cols,
                expected: cols,
                found,
            });
        }
        Ok(Self { points, cols })
    }
}

/// A Bézier surface in the plane
pub type BezierSurface2d = BezierSurface<Point2d>;

/// A Bézier surface in space
pub type BezierSurface3d = BezierSurface<Point3d>;

impl<P: Copy> BezierSurface<P> {
    /// Creates a surface from a rectangular, non-empty grid of control points.
    pub fn new<R: AsRef<[P]>>(grid: &[R]) -> Result<Self> {
        let cols = check_grid(grid)?;
        let points = grid
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Ok(Self { points, cols })
    }

    /// The degrees `(n1, n2)` in the `t` and `u` directions.
    pub fn degree(&self) -> (usize, usize) {
        (self.points.len() / self.cols - 1, self.cols - 1)
    }

    /// Returns row `i` of the control grid.
    pub fn row(&self, i: usize) -> Option<&[P]> {
        self.rows().nth(i)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[P]> + '_ {
        self.points.chunks_exact(self.cols)
    }
}

impl<P> ParametricSurface for BezierSurface<P>
where
    P: EuclideanSpace<Scalar = f64>,
{
    type Point = P;

    fn sample(&self, t: f64, u: f64) -> P {
        blend_rows(t, u, self.points.chunks_exact(self.cols), self.cols)
    }

    fn bounds(&self) -> (Interval<f64>, Interval<f64>) {
        (Interval::UNIT, Interval::UNIT)
    }
}
