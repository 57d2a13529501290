//! Adaptive Simpson quadrature.
//!
//! The interval is pre-split into a few equal panels, then each panel is
//! bisected until the Richardson error estimate |S_left + S_right − S| / 15
//! meets its share of the global tolerance. Work is held on an explicit
//! stack, so deep refinement cannot overflow the call stack, and both the
//! number of subdivisions and the recursion depth are capped.

use log::debug;

use crate::errors::{CalcError, CalcResult};

/// Equal panels the interval is split into before adaptive refinement
const INITIAL_PANELS: usize = 8;

/// Maximum bisection depth below an initial panel
const MAX_DEPTH: usize = 48;

/// Settings for adaptive Simpson integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSimpson {
    /// Target error relative to the magnitude of the integral
    pub rel_tol: f64,
    /// Maximum number of interval bisections
    pub max_subdivisions: usize,
}

impl Default for AdaptiveSimpson {
    fn default() -> Self {
        AdaptiveSimpson {
            rel_tol: 1e-8,
            max_subdivisions: 200_000,
        }
    }
}

/// Converged integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral {
    pub value: f64,
    /// Interval bisections performed
    pub subdivisions: usize,
}

struct Segment {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    eps: f64,
    depth: usize,
}

#[inline]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

impl AdaptiveSimpson {
    pub fn new(rel_tol: f64, max_subdivisions: usize) -> Self {
        AdaptiveSimpson {
            rel_tol,
            max_subdivisions,
        }
    }

    /// Integrate `f` from `a` to `b`.
    ///
    /// `a == b` gives exactly zero without evaluating `f`; `b < a` gives the
    /// negated integral from `b` to `a`.
    ///
    /// # Errors
    /// * `NonConvergence` if the subdivision or depth cap is hit, or the
    ///   integrand is not finite
    /// * Any error returned by `f`
    pub fn integrate<F>(&self, procedure: &str, mut f: F, a: f64, b: f64) -> CalcResult<Integral>
    where
        F: FnMut(f64) -> CalcResult<f64>,
    {
        if a == b {
            return Ok(Integral {
                value: 0.0,
                subdivisions: 0,
            });
        }
        if b < a {
            let reversed = self.integrate(procedure, f, b, a)?;
            return Ok(Integral {
                value: -reversed.value,
                ..reversed
            });
        }

        let mut eval = |x: f64| -> CalcResult<f64> {
            let y = f(x)?;
            if y.is_finite() {
                Ok(y)
            } else {
                debug!("{}: integrand is {} at x = {:.9e}", procedure, y, x);
                Err(CalcError::non_convergence(format!("{} (non-finite integrand)", procedure), 0))
            }
        };

        let panel_width = (b - a) / INITIAL_PANELS as f64;
        let mut stack: Vec<Segment> = Vec::with_capacity(INITIAL_PANELS + 2 * MAX_DEPTH);
        let mut estimate = 0.0;
        let mut f_left = eval(a)?;
        for i in 0..INITIAL_PANELS {
            let lo = a + i as f64 * panel_width;
            let hi = if i + 1 == INITIAL_PANELS { b } else { lo + panel_width };
            let f_mid = eval(0.5 * (lo + hi))?;
            let f_right = eval(hi)?;
            let whole = simpson(lo, hi, f_left, f_mid, f_right);
            estimate += whole;
            stack.push(Segment {
                a: lo,
                b: hi,
                fa: f_left,
                fm: f_mid,
                fb: f_right,
                whole,
                eps: 0.0,
                depth: 0,
            });
            f_left = f_right;
        }

        let tolerance = self.rel_tol * estimate.abs().max(f64::MIN_POSITIVE);
        for segment in &mut stack {
            segment.eps = tolerance / INITIAL_PANELS as f64;
        }

        let mut total = 0.0;
        let mut subdivisions = 0;
        while let Some(seg) = stack.pop() {
            let m = 0.5 * (seg.a + seg.b);
            let f_lm = eval(0.5 * (seg.a + m))?;
            let f_rm = eval(0.5 * (m + seg.b))?;
            let left = simpson(seg.a, m, seg.fa, f_lm, seg.fm);
            let right = simpson(m, seg.b, seg.fm, f_rm, seg.fb);
            let delta = left + right - seg.whole;

            if delta.abs() <= 15.0 * seg.eps {
                total += left + right + delta / 15.0;
                continue;
            }

            subdivisions += 1;
            if subdivisions > self.max_subdivisions {
                return Err(CalcError::non_convergence(procedure, self.max_subdivisions));
            }
            if seg.depth >= MAX_DEPTH {
                return Err(CalcError::non_convergence(format!("{} (depth limit)", procedure), subdivisions));
            }

            stack.push(Segment {
                a: seg.a,
                b: m,
                fa: seg.fa,
                fm: f_lm,
                fb: seg.fm,
                whole: left,
                eps: 0.5 * seg.eps,
                depth: seg.depth + 1,
            });
            stack.push(Segment {
                a: m,
                b: seg.b,
                fa: seg.fm,
                fm: f_rm,
                fb: seg.fb,
                whole: right,
                eps: 0.5 * seg.eps,
                depth: seg.depth + 1,
            });
        }

        debug!("{}: {:.9e} after {} subdivisions", procedure, total, subdivisions);
        Ok(Integral {
            value: total,
            subdivisions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(value: f64, exact: f64) -> f64 {
        (value - exact).abs() / exact.abs()
    }

    #[test]
    fn test_polynomial_is_exact() {
        let simpson = AdaptiveSimpson::default();
        let result = simpson.integrate("cubic", |x| Ok(x * x * x), 0.0, 2.0).unwrap();
        assert!(relative_error(result.value, 4.0) < 1e-14);
        assert_eq!(result.subdivisions, 0);
    }

    #[test]
    fn test_exponential() {
        let simpson = AdaptiveSimpson::new(1e-10, 10_000);
        let result = simpson.integrate("exp", |x| Ok(x.exp()), 0.0, 1.0).unwrap();
        assert!(relative_error(result.value, std::f64::consts::E - 1.0) < 1e-9);
    }

    #[test]
    fn test_steep_integrand() {
        // ∫ dx / (1.001 - x)^3 from 0 to 1: steep near the upper end, like da/dN near a_c
        let exact = 0.5 * (1.0 / 0.001f64.powi(2) - 1.0 / 1.001f64.powi(2));
        let simpson = AdaptiveSimpson::default();
        let result = simpson.integrate("steep", |x| Ok((1.001 - x).powi(-3)), 0.0, 1.0).unwrap();
        assert!(relative_error(result.value, exact) < 1e-6);
        assert!(result.subdivisions > 0);
    }

    #[test]
    fn test_empty_interval_is_zero() {
        let simpson = AdaptiveSimpson::default();
        let result = simpson
            .integrate("empty", |_| Err(CalcError::non_convergence("never called", 0)), 0.3, 0.3)
            .unwrap();
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_reversed_interval() {
        let simpson = AdaptiveSimpson::default();
        let result = simpson.integrate("reversed", |x| Ok(x), 1.0, 0.0).unwrap();
        assert!((result.value + 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_subdivision_cap() {
        let simpson = AdaptiveSimpson::new(1e-12, 1);
        let err = simpson
            .integrate("oscillating", |x| Ok((50.0 * x).sin()), 0.0, 10.0)
            .unwrap_err();
        assert_eq!(err, CalcError::non_convergence("oscillating", 1));
    }

    #[test]
    fn test_non_finite_integrand() {
        let simpson = AdaptiveSimpson::default();
        let err = simpson.integrate("pole", |x| Ok(1.0 / x), 0.0, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "NON_CONVERGENCE");
    }
}
