use smallvec::SmallVec;

/// Inline storage for the basis of a low-degree polynomial.
pub(crate) type VecF = SmallVec<[f64; 8]>;

/// Iterator over the Bernstein basis polynomials of a given degree, evaluated at `t`.
///
/// Yields `C(n, p) * (1 - t)^(n - p) * t^p` for `p = 0..=n`. The binomial
/// coefficient is carried from one term to the next as `C(n, p + 1) = C(n, p) * (n - p) / (p + 1)`,
/// so no factorials are formed.
#[derive(Clone, Debug)]
pub struct BernsteinBasis {
    degree: usize,
    p: usize,
    t: f64,
    s: f64,
    term: f64,
}

impl Iterator for BernsteinBasis {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.p > self.degree {
            return None;
        }
        let (n, p) = (self.degree, self.p);
        // `powi(0)` is 1 for every base, including 0.
        let value = self.term * self.s.powi((n - p) as i32) * self.t.powi(p as i32);
        self.term *= (n - p) as f64 / (p + 1) as f64;
        self.p += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.degree + 1).saturating_sub(self.p);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BernsteinBasis {}

/// Returns an iterator over the `degree + 1` Bernstein basis values at `t`.
pub fn bernstein_basis(degree: usize, t: f64) -> BernsteinBasis {
    BernsteinBasis {
        degree,
        p: 0,
        t,
        s: 1.0 - t,
        term: 1.0,
    }
}

/// Collects the Bernstein basis values of `degree` at `t`.
pub fn basis_values(degree: usize, t: f64) -> VecF {
    bernstein_basis(degree, t).collect()
}

/// Computes the binomial coefficient `C(n, k)` with the same recurrence the basis uses.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    (0..k).fold(1.0, |term, p| term * (n - p) as f64 / (p + 1) as f64)
}
