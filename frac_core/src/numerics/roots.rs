//! Bracketed scalar root finding.
//!
//! False-position steps inside a sign-changing bracket, with a bisection
//! step whenever the candidate leaves the bracket or the previous step
//! failed to halve it. The bracket therefore shrinks at least geometrically,
//! and the iteration cap turns a pathological function into a
//! `NonConvergence` error rather than a hang.

use log::debug;

use crate::errors::{CalcError, CalcResult};

/// Settings for the bracketed root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFinder {
    /// Stop when |f(x)| / scale falls below this value
    pub rel_tol: f64,
    /// Maximum number of function evaluations after the two bracket ends
    pub max_iter: usize,
}

impl Default for RootFinder {
    fn default() -> Self {
        RootFinder {
            rel_tol: 1e-6,
            max_iter: 200,
        }
    }
}

/// Converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa
    pub x: f64,
    /// Residual f(x)
    pub residual: f64,
    /// Iterations used (0 when a bracket end already satisfied the tolerance)
    pub iterations: usize,
}

impl RootFinder {
    pub fn new(rel_tol: f64, max_iter: usize) -> Self {
        RootFinder { rel_tol, max_iter }
    }

    /// Find x in [lower, upper] with |f(x)| / scale < rel_tol.
    ///
    /// `f` must change sign over the bracket. `scale` is the magnitude the
    /// residual is measured against (e.g. K_IC when solving K(a) − K_IC = 0).
    ///
    /// # Errors
    /// * `InvalidInput` if the bracket is empty or does not change sign
    /// * `NonConvergence` if `max_iter` is exhausted
    /// * Any error returned by `f`
    pub fn solve<F>(&self, procedure: &str, mut f: F, lower: f64, upper: f64, scale: f64) -> CalcResult<Root>
    where
        F: FnMut(f64) -> CalcResult<f64>,
    {
        if !(lower < upper) {
            return Err(CalcError::invalid_input(
                "bracket",
                format!("[{}, {}]", lower, upper),
                format!("{}: lower bound must be below upper bound", procedure),
            ));
        }
        let scale = scale.abs().max(f64::MIN_POSITIVE);
        let converged = |residual: f64| residual.abs() / scale < self.rel_tol;

        let (mut lo, mut hi) = (lower, upper);
        let mut f_lo = f(lo)?;
        if converged(f_lo) {
            return Ok(Root { x: lo, residual: f_lo, iterations: 0 });
        }
        let mut f_hi = f(hi)?;
        if converged(f_hi) {
            return Ok(Root { x: hi, residual: f_hi, iterations: 0 });
        }
        if f_lo.signum() == f_hi.signum() {
            return Err(CalcError::invalid_input(
                "bracket",
                format!("[{}, {}]", lower, upper),
                format!("{}: function does not change sign over the bracket", procedure),
            ));
        }

        let mut bisect_next = false;
        for iteration in 1..=self.max_iter {
            let width = hi - lo;
            let secant = hi - f_hi * width / (f_hi - f_lo);
            let x = if bisect_next || !secant.is_finite() || secant <= lo || secant >= hi {
                0.5 * (lo + hi)
            } else {
                secant
            };

            let fx = f(x)?;
            if converged(fx) {
                debug!("{}: converged to {:.9e} in {} iterations", procedure, x, iteration);
                return Ok(Root { x, residual: fx, iterations: iteration });
            }

            if fx.signum() == f_lo.signum() {
                lo = x;
                f_lo = fx;
            } else {
                hi = x;
                f_hi = fx;
            }

            // Bracket collapsed to adjacent floats: the residual cannot improve
            if hi - lo <= 4.0 * f64::EPSILON * x.abs().max(f64::MIN_POSITIVE) {
                debug!("{}: bracket collapsed at {:.9e} after {} iterations", procedure, x, iteration);
                return Ok(Root { x, residual: fx, iterations: iteration });
            }

            bisect_next = hi - lo > 0.5 * width;
        }

        Err(CalcError::non_convergence(procedure, self.max_iter))
    }
}
