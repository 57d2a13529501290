//! # Static Fracture Assessment
//!
//! K_I(a) = Y(a)·σ·√(πa) for the crack at its location radius, the safety
//! factor of the initial crack against K_IC, and the critical crack size
//! where K_I reaches K_IC.
//!
//! The opening stress σ is evaluated once, at the crack location r_a, and
//! held constant as the crack grows; only Y(a) and √a vary with size.
//!
//! ## Critical crack size
//!
//! K_I(a) is sampled from a0 to the correlation validity limit a_max and
//! must be non-decreasing there, otherwise the analysis stops with
//! `NonMonotonicStress`. The root of K_I(a) = K_IC is then found in
//! (a0, a_max) with the bracketed root finder. Three outcomes:
//!
//! | Outcome           | Condition             | Search interval     |
//! |-------------------|-----------------------|---------------------|
//! | `Reached`         | K(a0) < K_IC ≤ K(a_max) | [a0, a_max]       |
//! | `AlreadyCritical` | K(a0) ≥ K_IC          | below a0            |
//! | `NotReached`      | K(a_max) < K_IC       | none                |
//!
//! For an already-critical crack the lower end starts at 10⁻⁶·a0 and
//! shrinks by a further 10⁻⁶ until K_I falls below K_IC, at most 10 times.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::equations::crack_factors::{correlation_for, factor_within_limit, stress_intensity, GeometryFactor};
use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{Crack, RotorGeometry};
use crate::numerics::RootFinder;

/// Lower end of the search bracket for an already-critical crack, as a
/// fraction of the previous lower end (a0 to start)
const ALREADY_CRITICAL_BRACKET: f64 = 1e-6;

/// Times the already-critical lower end may shrink before giving up
const MAX_BRACKET_SHRINKS: usize = 10;

/// Relative slack allowed between successive monotonicity samples
const MONOTONIC_SLACK: f64 = 1e-12;

/// K_I as a function of crack size for one crack in one stressed rotor.
///
/// Holds the selected geometry-factor correlation so it is chosen once per
/// analysis rather than once per evaluation.
pub struct CrackDriver {
    correlation: Box<dyn GeometryFactor + Send + Sync>,
    ligament_m: f64,
    /// Opening stress at the crack location (MPa)
    pub opening_stress_mpa: f64,
}

impl CrackDriver {
    /// Driver for `crack` in `geometry` under opening stress `opening_stress_mpa`.
    ///
    /// The crack is assumed validated against the geometry.
    pub fn new(geometry: &RotorGeometry, crack: &Crack, opening_stress_mpa: f64) -> Self {
        CrackDriver {
            correlation: correlation_for(crack),
            ligament_m: crack.ligament_m(geometry),
            opening_stress_mpa,
        }
    }

    /// Name of the geometry-factor correlation in use
    pub fn correlation_name(&self) -> &'static str {
        self.correlation.name()
    }

    /// Registry entry of the correlation in use
    pub fn correlation_equation(&self) -> Equation {
        self.correlation.equation()
    }

    /// Remaining ligament W = r_o − r_a (m)
    pub fn ligament_m(&self) -> f64 {
        self.ligament_m
    }

    /// Largest crack size the correlation is valid for, α_max·W (m)
    pub fn search_limit_m(&self) -> f64 {
        self.correlation.max_relative_depth() * self.ligament_m
    }

    /// Geometry factor Y(a)
    pub fn geometry_factor(&self, a: f64) -> CalcResult<f64> {
        factor_within_limit(self.correlation.as_ref(), self.ligament_m, a)
    }

    /// Stress intensity at crack size `a` for an arbitrary stress (MPa·√m)
    pub fn stress_intensity_for(&self, stress_mpa: f64, a: f64) -> CalcResult<f64> {
        Ok(stress_intensity(self.geometry_factor(a)?, stress_mpa, a))
    }

    /// K_I(a) under the opening stress (MPa·√m)
    pub fn k_max(&self, a: f64) -> CalcResult<f64> {
        self.stress_intensity_for(self.opening_stress_mpa, a)
    }
}

/// Outcome of the critical crack size search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CriticalCrack {
    /// K_I reaches K_IC at `size_m` within the validity range
    Reached { size_m: f64, iterations: usize },
    /// K_I(a0) already exceeds K_IC; `size_m` < a0 is where it first did
    AlreadyCritical { size_m: f64, iterations: usize },
    /// K_I stays below K_IC up to the validity limit
    NotReached { search_limit_m: f64, k_at_limit: f64 },
}

impl CriticalCrack {
    /// Critical size when one was found
    pub fn size_m(&self) -> Option<f64> {
        match self {
            CriticalCrack::Reached { size_m, .. } | CriticalCrack::AlreadyCritical { size_m, .. } => Some(*size_m),
            CriticalCrack::NotReached { .. } => None,
        }
    }

    /// Crack size fatigue growth is followed to: a_c, or the search limit
    pub fn growth_end_m(&self) -> f64 {
        match self {
            CriticalCrack::Reached { size_m, .. } | CriticalCrack::AlreadyCritical { size_m, .. } => *size_m,
            CriticalCrack::NotReached { search_limit_m, .. } => *search_limit_m,
        }
    }

    pub fn is_reached(&self) -> bool {
        !matches!(self, CriticalCrack::NotReached { .. })
    }
}

/// Static fracture assessment of the initial crack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractureAssessment {
    /// Y(a0)
    pub geometry_factor_initial: f64,
    /// K_I(a0) (MPa·√m)
    pub k_initial: f64,
    /// K_IC / K_I(a0)
    pub safety_factor: f64,
    /// Plane-stress energy release rate at a0 (kJ/m²)
    pub energy_release_rate_kj_m2: f64,
    /// Critical crack size search outcome
    pub critical: CriticalCrack,
}

/// Plane-stress energy release rate G = K²/E in kJ/m².
///
/// K in MPa·√m over E in MPa gives MPa·m = 10³ kJ/m².
pub fn energy_release_rate(k_mpa_sqrt_m: f64, elastic_modulus_mpa: f64) -> f64 {
    k_mpa_sqrt_m * k_mpa_sqrt_m / elastic_modulus_mpa * 1000.0
}

/// Check that K_I(a) does not decrease on [a_start, a_end].
///
/// # Errors
/// * `NonMonotonicStress` at the first sample where K_I drops
pub fn check_monotonic(driver: &CrackDriver, a_start: f64, a_end: f64, samples: usize) -> CalcResult<()> {
    let samples = samples.max(1);
    let step = (a_end - a_start) / samples as f64;
    let mut previous = driver.k_max(a_start)?;
    for i in 1..=samples {
        let a = if i == samples { a_end } else { a_start + i as f64 * step };
        let k = driver.k_max(a)?;
        if k < previous * (1.0 - MONOTONIC_SLACK) {
            debug!("K_I decreases from {:.6} to {:.6} at a = {:.6e} m", previous, k, a);
            return Err(CalcError::NonMonotonicStress { crack_size_m: a });
        }
        previous = k;
    }
    Ok(())
}

/// Solve K_I(a) = K_IC.
///
/// # Errors
/// * `NonMonotonicStress` if K_I decreases between a0 and the search limit
/// * `NonConvergence` if the root finder exhausts its iterations
/// * `GeometryOutOfRange` if a0 itself lies beyond the correlation limit
pub fn critical_crack_size(
    driver: &CrackDriver,
    toughness: f64,
    initial_size_m: f64,
    finder: &RootFinder,
    monotonicity_samples: usize,
) -> CalcResult<CriticalCrack> {
    let residual = |a: f64| -> CalcResult<f64> { Ok(driver.k_max(a)? - toughness) };

    let k_initial = driver.k_max(initial_size_m)?;
    if k_initial >= toughness {
        warn!(
            "Initial crack is already critical: K_I(a0) = {:.3} >= K_IC = {:.3}",
            k_initial, toughness
        );
        // K_I → 0 as a → 0, so shrinking the lower end eventually brackets the root
        let mut upper = initial_size_m;
        let mut lower = ALREADY_CRITICAL_BRACKET * initial_size_m;
        let mut shrinks = 0;
        while residual(lower)? >= 0.0 {
            if shrinks == MAX_BRACKET_SHRINKS {
                return Err(CalcError::non_convergence("critical crack size bracket (below a0)", shrinks));
            }
            upper = lower;
            lower *= ALREADY_CRITICAL_BRACKET;
            shrinks += 1;
        }
        debug!("Already-critical bracket [{:.3e}, {:.3e}] m after {} shrinks", lower, upper, shrinks);
        let root = finder.solve("critical crack size (below a0)", residual, lower, upper, toughness)?;
        return Ok(CriticalCrack::AlreadyCritical {
            size_m: root.x,
            iterations: root.iterations,
        });
    }

    let search_limit = driver.search_limit_m();
    check_monotonic(driver, initial_size_m, search_limit, monotonicity_samples)?;

    let k_at_limit = driver.k_max(search_limit)?;
    if k_at_limit < toughness {
        return Ok(CriticalCrack::NotReached {
            search_limit_m: search_limit,
            k_at_limit,
        });
    }

    let root = finder.solve("critical crack size", residual, initial_size_m, search_limit, toughness)?;
    Ok(CriticalCrack::Reached {
        size_m: root.x,
        iterations: root.iterations,
    })
}

/// Full static assessment of the initial crack.
pub fn assess(
    driver: &CrackDriver,
    toughness: f64,
    elastic_modulus_mpa: f64,
    initial_size_m: f64,
    finder: &RootFinder,
    monotonicity_samples: usize,
) -> CalcResult<FractureAssessment> {
    let geometry_factor_initial = driver.geometry_factor(initial_size_m)?;
    let k_initial = stress_intensity(geometry_factor_initial, driver.opening_stress_mpa, initial_size_m);
    let critical = critical_crack_size(driver, toughness, initial_size_m, finder, monotonicity_samples)?;

    Ok(FractureAssessment {
        geometry_factor_initial,
        k_initial,
        safety_factor: toughness / k_initial,
        energy_release_rate_kj_m2: energy_release_rate(k_initial, elastic_modulus_mpa),
        critical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CrackOrientation, CrackType};

    const SIGMA: f64 = 48.47;

    fn driver(crack_type: CrackType, sigma: f64) -> CrackDriver {
        let geometry = RotorGeometry::solid_disk(0.15, 0.02);
        let crack = Crack::new(0.10, 0.0005, crack_type, CrackOrientation::Radial);
        CrackDriver::new(&geometry, &crack, sigma)
    }

    #[test]
    fn test_k_initial() {
        let d = driver(CrackType::Edge, SIGMA);
        // Y(0.01) ≈ 1.1187 → K ≈ 1.1187 × 48.47 × 0.03963 ≈ 2.149
        let k = d.k_max(0.0005).unwrap();
        assert!((k - 2.149).abs() < 0.01, "K = {}", k);
    }

    #[test]
    fn test_safety_factor_identity() {
        let d = driver(CrackType::Edge, SIGMA);
        let result = assess(&d, 25.0, 70_000.0, 0.0005, &RootFinder::default(), 64).unwrap();
        assert!((result.safety_factor - 25.0 / result.k_initial).abs() < 1e-12);
    }

    #[test]
    fn test_critical_size_root() {
        let d = driver(CrackType::Edge, SIGMA);
        let finder = RootFinder::default();
        let critical = critical_crack_size(&d, 25.0, 0.0005, &finder, 64).unwrap();
        let a_c = critical.size_m().unwrap();
        assert!(matches!(critical, CriticalCrack::Reached { .. }));
        assert!(a_c > 0.0005 && a_c < d.search_limit_m());
        let k = d.k_max(a_c).unwrap();
        assert!((k - 25.0).abs() / 25.0 < 1e-6);
    }

    #[test]
    fn test_not_reached_for_tough_material() {
        let d = driver(CrackType::Edge, SIGMA);
        let critical = critical_crack_size(&d, 500.0, 0.0005, &RootFinder::default(), 64).unwrap();
        match critical {
            CriticalCrack::NotReached {
                search_limit_m,
                k_at_limit,
            } => {
                assert!((search_limit_m - 0.03).abs() < 1e-12);
                assert!(k_at_limit < 500.0);
            }
            other => panic!("expected NotReached, got {:?}", other),
        }
        assert_eq!(critical.size_m(), None);
        assert!((critical.growth_end_m() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_already_critical() {
        // Ten times the stress: K(a0) ≈ 21.5, above a K_IC of 15
        let d = driver(CrackType::Edge, 10.0 * SIGMA);
        let critical = critical_crack_size(&d, 15.0, 0.0005, &RootFinder::default(), 64).unwrap();
        match critical {
            CriticalCrack::AlreadyCritical { size_m, .. } => {
                assert!(size_m < 0.0005);
                assert!((d.k_max(size_m).unwrap() - 15.0).abs() / 15.0 < 1e-6);
            }
            other => panic!("expected AlreadyCritical, got {:?}", other),
        }
    }

    #[test]
    fn test_already_critical_far_below_a0() {
        // K(a0) ≈ 2.1e5, still ≈ 215 at 1e-6·a0, so the bracket must shrink again
        let d = driver(CrackType::Edge, 1e5 * SIGMA);
        let critical = critical_crack_size(&d, 15.0, 0.0005, &RootFinder::default(), 64).unwrap();
        match critical {
            CriticalCrack::AlreadyCritical { size_m, .. } => {
                assert!(size_m < 1e-6 * 0.0005);
                assert!((d.k_max(size_m).unwrap() - 15.0).abs() / 15.0 < 1e-6);
            }
            other => panic!("expected AlreadyCritical, got {:?}", other),
        }
    }

    #[test]
    fn test_decreasing_k_is_non_monotonic() {
        // Compressive opening stress: K_I falls as the crack grows
        let d = driver(CrackType::Edge, -SIGMA);
        let err = check_monotonic(&d, 0.0005, d.search_limit_m(), 64).unwrap_err();
        match err {
            CalcError::NonMonotonicStress { crack_size_m } => {
                assert!(crack_size_m > 0.0005 && crack_size_m <= d.search_limit_m());
            }
            other => panic!("expected NonMonotonicStress, got {:?}", other),
        }
    }

    #[test]
    fn test_monotonic_for_all_correlations() {
        for crack_type in CrackType::ALL {
            let d = driver(crack_type, SIGMA);
            assert!(check_monotonic(&d, 0.0005, d.search_limit_m(), 64).is_ok(), "{}", crack_type);
        }
    }

    #[test]
    fn test_energy_release_rate() {
        // 2.0² / 70 000 MPa = 5.714e-5 MPa·m = 57.14 J/m²
        let g = energy_release_rate(2.0, 70_000.0);
        assert!((g - 0.05714).abs() < 1e-5);
    }
}
