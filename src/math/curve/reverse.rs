use super::ParametricCurve;
use crate::Interval;

/// Traverses a curve backwards over the same bounds.
pub struct ReversedCurve<C>
where
    C: ParametricCurve,
{
    inner: C,
}

impl<C> ReversedCurve<C>
where
    C: ParametricCurve,
{
    /// Wraps `curve`; the start of the result is the end of `curve`.
    pub fn new(curve: C) -> Self {
        Self { inner: curve }
    }

    /// Mirrors `t` across the midpoint of the inner curve's bounds.
    fn map_t(&self, t: f64) -> f64 {
        let Interval { min, max } = self.inner.bounds();
        max - (t - min)
    }
}

impl<C> ParametricCurve for ReversedCurve<C>
where
    C: ParametricCurve,
{
    type Point = C::Point;

    fn sample(&self, t: f64) -> C::Point {
        self.inner.sample(self.map_t(t))
    }

    fn bounds(&self) -> Interval<f64> {
        self.inner.bounds()
    }
}
