//! # Result Assembly
//!
//! Status classification, advisories, recommendations, derivation steps and
//! the sampled crack-growth curve that accompany a rotor fracture result.
//!
//! ## Status
//!
//! Each safety factor is classified against its own required value:
//!
//! | Safety factor       | Status         |
//! |---------------------|----------------|
//! | SF ≥ required       | `Acceptable`   |
//! | 1 ≤ SF < required   | `Marginal`     |
//! | SF < 1              | `Unacceptable` |
//!
//! The overall status is the worse of the fracture and life statuses. The
//! governing criterion is the one with the smaller SF / SF_required ratio.

use serde::{Deserialize, Serialize};

use crate::calculations::fatigue::FatigueModel;
use crate::calculations::fracture::CrackDriver;
use crate::equations::registry::Equation;
use crate::errors::CalcResult;

/// Design status of one criterion or of the whole assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStatus {
    Acceptable,
    Marginal,
    Unacceptable,
}

impl DesignStatus {
    /// Classify a safety factor against its required value
    pub fn classify(safety_factor: f64, required: f64) -> Self {
        if safety_factor >= required {
            DesignStatus::Acceptable
        } else if safety_factor >= 1.0 {
            DesignStatus::Marginal
        } else {
            DesignStatus::Unacceptable
        }
    }

    /// The more severe of two statuses
    pub fn worse(self, other: DesignStatus) -> DesignStatus {
        self.max(other)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DesignStatus::Acceptable => "ACCEPTABLE",
            DesignStatus::Marginal => "MARGINAL",
            DesignStatus::Unacceptable => "UNACCEPTABLE",
        }
    }
}

impl std::fmt::Display for DesignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which safety factor governs the design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoverningCriterion {
    Fracture,
    Life,
}

/// Criterion with the smaller margin relative to its requirement.
///
/// Life never governs when no finite life is predicted.
pub fn governing_criterion(
    fracture_sf: f64,
    required_fracture_sf: f64,
    life_sf: Option<f64>,
    required_life_sf: f64,
) -> GoverningCriterion {
    match life_sf {
        Some(life) if life / required_life_sf < fracture_sf / required_fracture_sf => GoverningCriterion::Life,
        _ => GoverningCriterion::Fracture,
    }
}

/// Valid but noteworthy conditions. These never abort an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// K_I stays below K_IC up to the correlation validity limit
    CriticalSizeNotReached { search_limit_m: f64, k_at_limit: f64 },
    /// Design life used up before the crack becomes critical
    DesignLifeWithoutCriticality { design_life_cycles: f64, crack_size_m: f64 },
    /// Crack reaches the correlation validity limit inside the design life
    CorrelationLimitBeforeDesignLife { cycles: f64 },
    /// Effective stress range is negligible
    NoFiniteLifeGrowth,
    /// K_I(a0) ≥ K_IC
    AlreadyCritical,
    /// R < 0: the compressive part of the cycle is ignored
    CompressivePortionIgnored { stress_ratio: f64 },
    /// Ring wall too thick for the thin-ring stress formula
    ThinRingIdealization { wall_ratio: f64 },
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::CriticalSizeNotReached {
                search_limit_m,
                k_at_limit,
            } => format!(
                "Critical crack size not reached: K_I = {:.2} MPa√m at the correlation limit a = {:.2} mm",
                k_at_limit,
                search_limit_m * 1000.0
            ),
            Advisory::DesignLifeWithoutCriticality {
                design_life_cycles,
                crack_size_m,
            } => format!(
                "Design life of {:.0} cycles completes without fracture; the crack grows to {:.3} mm",
                design_life_cycles,
                crack_size_m * 1000.0
            ),
            Advisory::CorrelationLimitBeforeDesignLife { cycles } => format!(
                "Crack reaches the correlation validity limit after {:.4e} cycles, before the design life; growth beyond it is not assessed",
                cycles
            ),
            Advisory::NoFiniteLifeGrowth => {
                "No finite-life growth predicted: the effective stress range is negligible".to_string()
            }
            Advisory::AlreadyCritical => {
                "Initial crack is already critical (K_I(a0) >= K_IC); no fatigue life remains".to_string()
            }
            Advisory::CompressivePortionIgnored { stress_ratio } => format!(
                "R = {:.2} < 0: only the tensile portion of the cycle is used for the stress range",
                stress_ratio
            ),
            Advisory::ThinRingIdealization { wall_ratio } => format!(
                "Ring wall is {:.0}% of the outer radius; thin-ring stresses are approximate above 20%",
                wall_ratio * 100.0
            ),
        }
    }
}

/// Design recommendation, most important first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Recommendation {
    /// Crack is already critical
    RemoveFromService,
    /// Speed that restores the required fracture safety factor
    ReduceSpeed { allowable_speed_rpm: f64 },
    /// Toughness that meets the required fracture safety factor
    IncreaseToughness { required_toughness_mpa_sqrt_m: f64 },
    /// Lower the cyclic stress range or use a material with a lower Paris C
    ReduceStressRange,
    /// Inspect at this interval
    ScheduleInspection { interval_cycles: f64 },
}

impl Recommendation {
    pub fn message(&self) -> String {
        match self {
            Recommendation::RemoveFromService => {
                "Remove the rotor from service: the initial crack exceeds the critical size".to_string()
            }
            Recommendation::ReduceSpeed { allowable_speed_rpm } => format!(
                "Reduce rotational speed to {:.0} rpm or below to meet the required fracture safety factor",
                allowable_speed_rpm
            ),
            Recommendation::IncreaseToughness {
                required_toughness_mpa_sqrt_m,
            } => format!(
                "Select a material with K_IC >= {:.1} MPa√m",
                required_toughness_mpa_sqrt_m
            ),
            Recommendation::ReduceStressRange => {
                "Reduce the cyclic stress range (speed or load amplitude) or select a material with a lower Paris coefficient C"
                    .to_string()
            }
            Recommendation::ScheduleInspection { interval_cycles } => {
                format!("Schedule crack inspections every {:.0} cycles", interval_cycles)
            }
        }
    }
}

/// Speed that restores the required fracture safety factor.
///
/// Stress scales with ω², so K_I does too and n_allow = n·√(SF/SF_req).
pub fn allowable_speed_rpm(speed_rpm: f64, fracture_sf: f64, required_fracture_sf: f64) -> f64 {
    speed_rpm * (fracture_sf / required_fracture_sf).sqrt()
}

/// Quantities the recommendations are derived from
#[derive(Debug, Clone, Copy)]
pub struct RecommendationBasis {
    pub speed_rpm: f64,
    pub k_initial: f64,
    pub fracture_sf: f64,
    pub required_fracture_sf: f64,
    pub fracture_status: DesignStatus,
    pub life_status: DesignStatus,
    pub inspection_interval_cycles: Option<f64>,
    pub already_critical: bool,
    pub governing: GoverningCriterion,
}

/// Recommendations ordered by the governing criterion.
pub fn recommendations(basis: &RecommendationBasis) -> Vec<Recommendation> {
    let mut fracture = Vec::new();
    if basis.fracture_status != DesignStatus::Acceptable {
        fracture.push(Recommendation::ReduceSpeed {
            allowable_speed_rpm: allowable_speed_rpm(basis.speed_rpm, basis.fracture_sf, basis.required_fracture_sf),
        });
        fracture.push(Recommendation::IncreaseToughness {
            required_toughness_mpa_sqrt_m: basis.required_fracture_sf * basis.k_initial,
        });
    }

    let mut life = Vec::new();
    if basis.life_status != DesignStatus::Acceptable && !basis.already_critical {
        life.push(Recommendation::ReduceStressRange);
    }
    if let Some(interval_cycles) = basis.inspection_interval_cycles.filter(|n| *n > 0.0) {
        life.push(Recommendation::ScheduleInspection { interval_cycles });
    }

    let mut all = Vec::new();
    if basis.already_critical {
        all.push(Recommendation::RemoveFromService);
    }
    match basis.governing {
        GoverningCriterion::Fracture => {
            all.extend(fracture);
            all.extend(life);
        }
        GoverningCriterion::Life => {
            all.extend(life);
            all.extend(fracture);
        }
    }
    all
}

/// One line of the derivation panel: a reported quantity, its formula, and
/// the formula with numbers substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Quantity name (e.g., "Stress intensity at a0")
    pub quantity: String,
    /// Symbol (e.g., "K_I(a0)")
    pub symbol: String,
    /// Registry equation
    pub equation: Equation,
    /// Plain formula from the registry
    pub formula: String,
    /// Formula with numbers substituted
    pub substituted: String,
    pub value: f64,
    pub units: String,
}

impl DerivationStep {
    pub fn new(
        equation: Equation,
        quantity: impl Into<String>,
        symbol: impl Into<String>,
        substituted: impl Into<String>,
        value: f64,
        units: impl Into<String>,
    ) -> Self {
        DerivationStep {
            quantity: quantity.into(),
            symbol: symbol.into(),
            equation,
            formula: equation.metadata().formula_plain.to_string(),
            substituted: substituted.into(),
            value,
            units: units.into(),
        }
    }
}

/// One sample of the crack-growth curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackGrowthPoint {
    pub crack_size_m: f64,
    /// Cumulative cycles from a0, None when no finite-life growth is predicted
    pub cycles: Option<f64>,
    /// K_I at peak stress (MPa·√m)
    pub k_max: f64,
    /// ΔK (MPa·√m)
    pub delta_k: f64,
}

/// Sample K_max, ΔK and cumulative cycles at `points` equally spaced crack
/// sizes from `a_start` to `a_end`.
///
/// Cycles accumulate by integrating between successive samples with the
/// same quadrature as the life. When `a_end <= a_start` the curve is the
/// single point at `a_start`.
pub fn growth_curve(
    driver: &CrackDriver,
    model: &FatigueModel<'_>,
    finite_life: bool,
    a_start: f64,
    a_end: f64,
    points: usize,
) -> CalcResult<Vec<CrackGrowthPoint>> {
    let sample = |a: f64, cycles: Option<f64>| -> CalcResult<CrackGrowthPoint> {
        Ok(CrackGrowthPoint {
            crack_size_m: a,
            cycles,
            k_max: driver.k_max(a)?,
            delta_k: model.delta_k(a)?,
        })
    };
    let start_cycles = finite_life.then_some(0.0);

    if a_end <= a_start || points < 2 {
        return Ok(vec![sample(a_start, start_cycles)?]);
    }

    let step = (a_end - a_start) / (points - 1) as f64;
    let mut curve = Vec::with_capacity(points);
    curve.push(sample(a_start, start_cycles)?);
    let mut previous = a_start;
    let mut cumulative = 0.0;
    for i in 1..points {
        let a = if i == points - 1 { a_end } else { a_start + i as f64 * step };
        let cycles = if finite_life {
            cumulative += model.cycles_between(previous, a)?;
            Some(cumulative)
        } else {
            None
        };
        curve.push(sample(a, cycles)?);
        previous = a;
    }
    Ok(curve)
}
