//! # Fatigue Crack Growth
//!
//! Paris-law growth da/dN = C·ΔK^m with ΔK(a) = Y(a)·Δσ·√(πa), integrated
//! from the initial crack size to the critical size. A crack that never
//! becomes critical is followed to the design life, or to the correlation
//! validity limit if it gets there first:
//!
//! ```text
//! N = ∫ da / (C·ΔK(a)^m),  a0 → a_f
//! ```
//!
//! The integrand is largest at a0 and falls steeply as the crack grows, so
//! it is integrated with adaptive Simpson quadrature to a relative
//! tolerance, never with a fixed step.
//!
//! ## Stress range
//!
//! Only the tensile part of a cycle drives growth:
//! - R ≥ 0: Δσ = σ_max·(1 − R)
//! - R < 0: Δσ = σ_max (the compressive part closes the crack)
//! - R ≥ 1: Δσ = 0, no finite-life growth

use log::debug;
use serde::{Deserialize, Serialize};

use crate::calculations::fracture::{CrackDriver, CriticalCrack};
use crate::errors::{CalcError, CalcResult};
use crate::materials::ParisLaw;
use crate::numerics::{AdaptiveSimpson, Root, RootFinder};

/// Stress ranges at or below this fraction of the peak stress drive no growth
pub const NO_GROWTH_THRESHOLD: f64 = 1e-6;

/// Effective (tensile) stress range per cycle
pub fn effective_stress_range(sigma_max: f64, stress_ratio: f64) -> f64 {
    if stress_ratio >= 1.0 {
        0.0
    } else if stress_ratio < 0.0 {
        sigma_max
    } else {
        sigma_max * (1.0 - stress_ratio)
    }
}

/// Whether the stress range is large enough to predict a finite life
pub fn has_finite_growth(stress_range_mpa: f64, sigma_max_mpa: f64) -> bool {
    stress_range_mpa > NO_GROWTH_THRESHOLD * sigma_max_mpa.abs()
}

/// Paris-law growth model for one crack.
pub struct FatigueModel<'a> {
    driver: &'a CrackDriver,
    paris: ParisLaw,
    /// Δσ (MPa)
    pub stress_range_mpa: f64,
    quadrature: AdaptiveSimpson,
}

impl<'a> FatigueModel<'a> {
    pub fn new(driver: &'a CrackDriver, paris: ParisLaw, stress_range_mpa: f64, quadrature: AdaptiveSimpson) -> Self {
        FatigueModel {
            driver,
            paris,
            stress_range_mpa,
            quadrature,
        }
    }

    /// ΔK(a) (MPa·√m)
    pub fn delta_k(&self, a: f64) -> CalcResult<f64> {
        self.driver.stress_intensity_for(self.stress_range_mpa, a)
    }

    /// da/dN at crack size `a` (m/cycle)
    pub fn growth_rate(&self, a: f64) -> CalcResult<f64> {
        Ok(self.paris.growth_rate(self.delta_k(a)?))
    }

    /// Cycles to grow the crack from `a_start` to `a_end`.
    ///
    /// Exactly zero when `a_end <= a_start`.
    pub fn cycles_between(&self, a_start: f64, a_end: f64) -> CalcResult<f64> {
        if a_end <= a_start {
            return Ok(0.0);
        }
        let integral = self.quadrature.integrate(
            "Paris-law life integral",
            |a| Ok(1.0 / self.growth_rate(a)?),
            a_start,
            a_end,
        )?;
        Ok(integral.value)
    }

    /// Crack size reached after `cycles` starting from `a_start`.
    ///
    /// The crack must pass that many cycles before `a_end`, i.e.
    /// N(a_start, a_end) > cycles.
    pub fn size_after_cycles(&self, a_start: f64, a_end: f64, cycles: f64, finder: &RootFinder) -> CalcResult<Root> {
        finder.solve(
            "crack size at design life",
            |a| Ok(self.cycles_between(a_start, a)? - cycles),
            a_start,
            a_end,
            cycles,
        )
    }
}

/// Where the life integration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeEndpoint {
    /// Crack reached the critical size
    Fracture,
    /// Crack reached the correlation validity limit without becoming critical
    SearchLimit,
}

/// Predicted fatigue life.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LifePrediction {
    /// Cycles to grow from a0 to `end_size_m`
    Finite {
        cycles: f64,
        end_size_m: f64,
        endpoint: LifeEndpoint,
    },
    /// The crack never becomes critical and is still inside the correlation
    /// range when the design life is used up
    DesignLifeReached {
        design_life_cycles: f64,
        crack_size_m: f64,
    },
    /// Stress range is effectively zero
    NoFiniteGrowth,
}

impl LifePrediction {
    /// Cycles integrated to the end of growth, when growth ended before the
    /// design life
    pub fn cycles(&self) -> Option<f64> {
        match self {
            LifePrediction::Finite { cycles, .. } => Some(*cycles),
            LifePrediction::DesignLifeReached { .. } | LifePrediction::NoFiniteGrowth => None,
        }
    }

    /// Cycles until K_I reaches K_IC
    pub fn cycles_to_failure(&self) -> Option<f64> {
        match self {
            LifePrediction::Finite {
                cycles,
                endpoint: LifeEndpoint::Fracture,
                ..
            } => Some(*cycles),
            _ => None,
        }
    }

    /// Last crack size the life covers
    pub fn end_size_m(&self) -> Option<f64> {
        match self {
            LifePrediction::Finite { end_size_m, .. } => Some(*end_size_m),
            LifePrediction::DesignLifeReached { crack_size_m, .. } => Some(*crack_size_m),
            LifePrediction::NoFiniteGrowth => None,
        }
    }
}

/// Integrate the Paris law from a0 to the end of growth.
///
/// Growth ends at a_c when the crack becomes critical. Otherwise it ends at
/// the design life, or at the correlation limit if the crack gets there
/// first. An already-critical crack has a life of exactly zero cycles.
pub fn predict_life(
    model: &FatigueModel<'_>,
    sigma_max_mpa: f64,
    initial_size_m: f64,
    critical: &CriticalCrack,
    design_life_cycles: f64,
    finder: &RootFinder,
) -> CalcResult<LifePrediction> {
    if !has_finite_growth(model.stress_range_mpa, sigma_max_mpa) {
        debug!(
            "Stress range {:.3e} MPa is negligible against {:.3} MPa; no finite-life growth",
            model.stress_range_mpa, sigma_max_mpa
        );
        return Ok(LifePrediction::NoFiniteGrowth);
    }

    let end_size_m = critical.growth_end_m();
    let cycles = model.cycles_between(initial_size_m, end_size_m)?;
    if !cycles.is_finite() {
        return Err(CalcError::non_convergence("Paris-law life integral", 0));
    }
    debug!("Life from {:.6e} m to {:.6e} m: {:.4e} cycles", initial_size_m, end_size_m, cycles);

    if critical.is_reached() {
        return Ok(LifePrediction::Finite {
            cycles,
            end_size_m,
            endpoint: LifeEndpoint::Fracture,
        });
    }

    if cycles > design_life_cycles {
        let crack_size_m = model
            .size_after_cycles(initial_size_m, end_size_m, design_life_cycles, finder)?
            .x;
        debug!(
            "Design life of {} cycles ends at a = {:.6e} m without criticality",
            design_life_cycles, crack_size_m
        );
        return Ok(LifePrediction::DesignLifeReached {
            design_life_cycles,
            crack_size_m,
        });
    }

    Ok(LifePrediction::Finite {
        cycles,
        end_size_m,
        endpoint: LifeEndpoint::SearchLimit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Crack, CrackOrientation, CrackType, RotorGeometry};
    use std::f64::consts::PI;

    const SIGMA: f64 = 48.47;

    fn cfrp_paris() -> ParisLaw {
        ParisLaw {
            coefficient: 1e-11,
            exponent: 3.0,
        }
    }

    fn driver() -> CrackDriver {
        let geometry = RotorGeometry::solid_disk(0.15, 0.02);
        let crack = Crack::new(0.10, 0.0005, CrackType::Edge, CrackOrientation::Radial);
        CrackDriver::new(&geometry, &crack, SIGMA)
    }

    #[test]
    fn test_effective_stress_range() {
        assert!((effective_stress_range(100.0, 0.1) - 90.0).abs() < 1e-12);
        assert_eq!(effective_stress_range(100.0, -1.0), 100.0);
        assert_eq!(effective_stress_range(100.0, -0.5), 100.0);
        assert_eq!(effective_stress_range(100.0, 1.0), 0.0);
        assert!(!has_finite_growth(effective_stress_range(100.0, 1.0 - 1e-9), 100.0));
        assert!(has_finite_growth(effective_stress_range(100.0, 0.99), 100.0));
    }

    #[test]
    fn test_zero_length_interval() {
        let d = driver();
        let model = FatigueModel::new(&d, cfrp_paris(), 0.9 * SIGMA, AdaptiveSimpson::default());
        assert_eq!(model.cycles_between(0.01, 0.01).unwrap(), 0.0);
        assert_eq!(model.cycles_between(0.01, 0.005).unwrap(), 0.0);
    }

    #[test]
    fn test_constant_y_bound() {
        // With Y held at its smallest value (≈1.118 near a0) the closed form
        // N = 2 / (C (YΔσ√π)^m (m−2)) · (a0^(1−m/2) − a_f^(1−m/2)) overestimates life.
        let d = driver();
        let delta_sigma = 0.9 * SIGMA;
        let model = FatigueModel::new(&d, cfrp_paris(), delta_sigma, AdaptiveSimpson::default());
        let (a0, af) = (0.0005, 0.01);
        let n = model.cycles_between(a0, af).unwrap();

        let y = d.geometry_factor(a0).unwrap();
        let bound = 2.0 / (1e-11 * (y * delta_sigma * PI.sqrt()).powi(3)) * (a0.powf(-0.5) - af.powf(-0.5));
        assert!(n > 0.0 && n < bound, "N = {}, bound = {}", n, bound);
        assert!(n > 0.5 * bound);
    }

    #[test]
    fn test_doubling_c_halves_life() {
        let d = driver();
        let base = FatigueModel::new(&d, cfrp_paris(), 0.9 * SIGMA, AdaptiveSimpson::default());
        let doubled = FatigueModel::new(
            &d,
            ParisLaw {
                coefficient: 2e-11,
                exponent: 3.0,
            },
            0.9 * SIGMA,
            AdaptiveSimpson::default(),
        );
        let n1 = base.cycles_between(0.0005, 0.02).unwrap();
        let n2 = doubled.cycles_between(0.0005, 0.02).unwrap();
        assert!((n1 / n2 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_size_after_cycles() {
        let d = driver();
        let model = FatigueModel::new(&d, cfrp_paris(), 0.9 * SIGMA, AdaptiveSimpson::default());
        let total = model.cycles_between(0.0005, 0.02).unwrap();
        let half = model
            .size_after_cycles(0.0005, 0.02, 0.5 * total, &RootFinder::default())
            .unwrap();
        assert!(half.x > 0.0005 && half.x < 0.02);
        let reached = model.cycles_between(0.0005, half.x).unwrap();
        assert!((reached / (0.5 * total) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_predict_life_outcomes() {
        let d = driver();
        let finder = RootFinder::default();
        let critical = CriticalCrack::Reached {
            size_m: 0.012,
            iterations: 7,
        };

        let no_range = FatigueModel::new(&d, cfrp_paris(), 0.0, AdaptiveSimpson::default());
        assert_eq!(
            predict_life(&no_range, SIGMA, 0.0005, &critical, 1e5, &finder).unwrap(),
            LifePrediction::NoFiniteGrowth
        );

        let model = FatigueModel::new(&d, cfrp_paris(), 0.9 * SIGMA, AdaptiveSimpson::default());
        let life = predict_life(&model, SIGMA, 0.0005, &critical, 1e5, &finder).unwrap();
        match life {
            LifePrediction::Finite {
                cycles,
                end_size_m,
                endpoint,
            } => {
                assert!(cycles > 0.0);
                assert_eq!(end_size_m, 0.012);
                assert_eq!(endpoint, LifeEndpoint::Fracture);
                assert_eq!(life.cycles_to_failure(), Some(cycles));
            }
            other => panic!("expected finite life, got {:?}", other),
        }

        let already = CriticalCrack::AlreadyCritical {
            size_m: 0.0003,
            iterations: 5,
        };
        let life = predict_life(&model, SIGMA, 0.0005, &already, 1e5, &finder).unwrap();
        assert_eq!(life.cycles_to_failure(), Some(0.0));
    }

    #[test]
    fn test_not_reached_stops_at_design_life() {
        let d = driver();
        let finder = RootFinder::default();
        let model = FatigueModel::new(&d, cfrp_paris(), 0.9 * SIGMA, AdaptiveSimpson::default());
        let limit = d.search_limit_m();
        let not_reached = CriticalCrack::NotReached {
            search_limit_m: limit,
            k_at_limit: 20.0,
        };
        let to_limit = model.cycles_between(0.0005, limit).unwrap();

        let design_life = 0.25 * to_limit;
        let life = predict_life(&model, SIGMA, 0.0005, &not_reached, design_life, &finder).unwrap();
        match life {
            LifePrediction::DesignLifeReached {
                design_life_cycles,
                crack_size_m,
            } => {
                assert_eq!(design_life_cycles, design_life);
                assert!(crack_size_m > 0.0005 && crack_size_m < limit);
                let grown = model.cycles_between(0.0005, crack_size_m).unwrap();
                assert!((grown / design_life - 1.0).abs() < 1e-5);
            }
            other => panic!("expected DesignLifeReached, got {:?}", other),
        }
        assert_eq!(life.cycles(), None);
        assert_eq!(life.cycles_to_failure(), None);

        // Limit reached inside the design life: reported, but not as a failure
        let life = predict_life(&model, SIGMA, 0.0005, &not_reached, 4.0 * to_limit, &finder).unwrap();
        match life {
            LifePrediction::Finite { endpoint, end_size_m, .. } => {
                assert_eq!(endpoint, LifeEndpoint::SearchLimit);
                assert_eq!(end_size_m, limit);
            }
            other => panic!("expected limit-bounded life, got {:?}", other),
        }
        assert_eq!(life.cycles(), Some(to_limit));
        assert_eq!(life.cycles_to_failure(), None);
    }
}
