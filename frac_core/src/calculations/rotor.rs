//! # Rotor Fracture and Fatigue Analysis
//!
//! Static LEFM assessment and Paris-law life prediction for a pre-existing
//! crack in a spinning disk or ring.
//!
//! ## Pipeline
//!
//! 1. Validate every input (no computation on invalid input)
//! 2. Resolve the material (preset or custom)
//! 3. Centrifugal stress at the crack location, σ(r_a, ω)
//! 4. Geometry factor Y(a) for the crack type
//! 5. K_I(a0), fracture safety factor, critical crack size a_c
//! 6. Paris-law life from a0 to a_c (or to the design life when a_c is not reached)
//! 7. Status, recommendations, derivation steps and growth curve
//!
//! Each call is independent: the same input always gives the same result.
//!
//! ## Assumptions
//!
//! - Linear elastic fracture mechanics, mode I only
//! - Plane-stress rotating-disk stresses, evaluated at r_a and held constant
//!   as the crack grows
//! - Constant-amplitude loading between σ_min = R·σ_max and σ_max
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use frac_core::calculations::rotor::{calculate, AnalysisConfig, LoadCase, RotorFractureInput};
//! use frac_core::geometry::{Crack, CrackOrientation, CrackType, RotorGeometry};
//! use frac_core::materials::MaterialSource;
//!
//! let input = RotorFractureInput {
//!     label: "Flywheel rim".to_string(),
//!     material: MaterialSource::preset("CFRP"),
//!     geometry: RotorGeometry::solid_disk(0.15, 0.02),
//!     crack: Crack::new(0.10, 0.0005, CrackType::Edge, CrackOrientation::Radial),
//!     load: LoadCase { speed_rpm: 20_000.0 },
//!     config: AnalysisConfig::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("K_I(a0) = {:.2} MPa√m", result.k_initial);
//! println!("SF fracture = {:.2}", result.fracture_safety_factor);
//! println!("Status: {}", result.status);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::fatigue::{effective_stress_range, predict_life, FatigueModel, LifeEndpoint, LifePrediction};
use crate::calculations::fracture::{assess, CrackDriver, CriticalCrack};
use crate::calculations::report::{
    allowable_speed_rpm, governing_criterion, growth_curve, recommendations, Advisory, CrackGrowthPoint,
    DerivationStep, DesignStatus, GoverningCriterion, Recommendation, RecommendationBasis,
};
use crate::equations::registry::Equation;
use crate::equations::rotating_disk::{peak_hoop_stress, stress_at, PeakStress, StressState};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{Crack, CrackOrientation, GeometryType, RotorGeometry};
use crate::materials::{validate_poisson_ratio, FractureMaterial, MaterialSource};
use crate::numerics::{AdaptiveSimpson, RootFinder};
use crate::units::{RadiansPerSecond, Rpm};

// =============================================================================
// INPUT
// =============================================================================

/// Operating load: steady rotational speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Rotational speed (rev/min)
    pub speed_rpm: f64,
}

impl LoadCase {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.speed_rpm.is_finite() || self.speed_rpm <= 0.0 {
            return Err(CalcError::invalid_input(
                "load.speed_rpm",
                self.speed_rpm.to_string(),
                "Rotational speed must be positive",
            ));
        }
        Ok(())
    }

    /// ω (rad/s)
    pub fn angular_velocity(&self) -> RadiansPerSecond {
        Rpm(self.speed_rpm).into()
    }
}

/// Upper bound on iteration and subdivision caps
pub const MAX_SOLVER_BUDGET: usize = 10_000_000;

/// Upper bound on monotonicity samples and growth-curve points
pub const MAX_SAMPLES: usize = 10_000;

/// Tolerances and work caps for the iterative procedures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Root finder: stop when |residual| / scale < tol
    pub root_rel_tol: f64,
    /// Root finder iteration cap
    pub root_max_iter: usize,
    /// Quadrature relative tolerance
    pub quad_rel_tol: f64,
    /// Quadrature subdivision cap
    pub quad_max_subdivisions: usize,
    /// K_I samples for the monotonicity check
    pub monotonicity_samples: usize,
    /// Points on the crack-growth curve
    pub curve_points: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            root_rel_tol: 1e-6,
            root_max_iter: 200,
            quad_rel_tol: 1e-8,
            quad_max_subdivisions: 200_000,
            monotonicity_samples: 64,
            curve_points: 25,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, tol) in [
            ("config.solver.root_rel_tol", self.root_rel_tol),
            ("config.solver.quad_rel_tol", self.quad_rel_tol),
        ] {
            if !tol.is_finite() || tol <= 0.0 || tol >= 1.0 {
                return Err(CalcError::invalid_input(
                    field,
                    tol.to_string(),
                    "Tolerance must lie between 0 and 1",
                ));
            }
        }
        for (field, cap, max) in [
            ("config.solver.root_max_iter", self.root_max_iter, MAX_SOLVER_BUDGET),
            ("config.solver.quad_max_subdivisions", self.quad_max_subdivisions, MAX_SOLVER_BUDGET),
            ("config.solver.monotonicity_samples", self.monotonicity_samples, MAX_SAMPLES),
        ] {
            if cap == 0 {
                return Err(CalcError::invalid_input(field, "0", "Must be at least 1"));
            }
            if cap > max {
                return Err(CalcError::invalid_input(
                    field,
                    cap.to_string(),
                    format!("Must not exceed {}", max),
                ));
            }
        }
        if self.curve_points < 2 || self.curve_points > MAX_SAMPLES {
            return Err(CalcError::invalid_input(
                "config.solver.curve_points",
                self.curve_points.to_string(),
                format!("The growth curve needs between 2 and {} points", MAX_SAMPLES),
            ));
        }
        Ok(())
    }

    pub fn root_finder(&self) -> RootFinder {
        RootFinder::new(self.root_rel_tol, self.root_max_iter)
    }

    pub fn quadrature(&self) -> AdaptiveSimpson {
        AdaptiveSimpson::new(self.quad_rel_tol, self.quad_max_subdivisions)
    }
}

/// Analysis options ("expert mode"). Every field has a default, so `{}` is
/// a valid configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stress_ratio": 0.1,
///   "required_fracture_sf": 2.0,
///   "required_life_sf": 3.0,
///   "design_life_cycles": 100000,
///   "poisson_override": null
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// R = σ_min/σ_max, −1 ≤ R < 1
    pub stress_ratio: f64,
    /// Required K_IC / K_I(a0)
    pub required_fracture_sf: f64,
    /// Required N / design life
    pub required_life_sf: f64,
    /// Design life (cycles)
    pub design_life_cycles: f64,
    /// Replaces the material's Poisson ratio in the stress solution
    pub poisson_override: Option<f64>,
    /// Numerical settings
    pub solver: SolverSettings,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            stress_ratio: 0.1,
            required_fracture_sf: 2.0,
            required_life_sf: 3.0,
            design_life_cycles: 100_000.0,
            poisson_override: None,
            solver: SolverSettings::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.stress_ratio.is_finite() || self.stress_ratio < -1.0 || self.stress_ratio >= 1.0 {
            return Err(CalcError::invalid_input(
                "config.stress_ratio",
                self.stress_ratio.to_string(),
                "Stress ratio R must satisfy -1 <= R < 1",
            ));
        }
        for (field, value) in [
            ("config.required_fracture_sf", self.required_fracture_sf),
            ("config.required_life_sf", self.required_life_sf),
            ("config.design_life_cycles", self.design_life_cycles),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
            }
        }
        if let Some(nu) = self.poisson_override {
            validate_poisson_ratio("config.poisson_override", nu)?;
        }
        self.solver.validate()
    }
}

/// Input for a rotor fracture analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Flywheel rim",
///   "material": { "source": "preset", "name": "CFRP" },
///   "geometry": { "geometry_type": "solid_disk", "outer_radius_m": 0.15, "thickness_m": 0.02 },
///   "crack": {
///     "location_radius_m": 0.10,
///     "initial_size_m": 0.0005,
///     "crack_type": "edge",
///     "orientation": "radial"
///   },
///   "load": { "speed_rpm": 20000 },
///   "config": { "stress_ratio": 0.1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotorFractureInput {
    /// User label (e.g., "Flywheel rim")
    #[serde(default)]
    pub label: String,
    /// Preset name or custom properties
    pub material: MaterialSource,
    pub geometry: RotorGeometry,
    pub crack: Crack,
    pub load: LoadCase,
    #[serde(default)]
    pub config: AnalysisConfig,
}

impl RotorFractureInput {
    /// Validate geometry, crack, load and configuration.
    ///
    /// Material properties are validated when the material is resolved.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.crack.validate(&self.geometry)?;
        self.load.validate()?;
        self.config.validate()
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Result of a rotor fracture analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotorFractureResult {
    pub label: String,
    /// Resolved material
    pub material: FractureMaterial,
    /// ω (rad/s)
    pub angular_velocity_rad_s: f64,
    /// ν used in the stress solution
    pub poisson_ratio: f64,

    // Stresses
    /// Stresses at the crack location
    pub stress_at_crack: StressState,
    /// Peak hoop stress in the rotor
    pub peak_stress: PeakStress,
    /// σ_max opening the crack (MPa)
    pub opening_stress_mpa: f64,
    /// Δσ (MPa)
    pub stress_range_mpa: f64,

    // Fracture
    /// Geometry-factor correlation
    pub correlation: String,
    /// Y(a0)
    pub geometry_factor_initial: f64,
    /// K_I(a0) (MPa·√m)
    pub k_initial: f64,
    /// ΔK(a0) (MPa·√m)
    pub delta_k_initial: f64,
    /// G(a0) (kJ/m²)
    pub energy_release_rate_kj_m2: f64,
    /// K_IC / K_I(a0)
    pub fracture_safety_factor: f64,
    pub critical_crack: CriticalCrack,

    // Fatigue
    pub life: LifePrediction,
    /// N / design life, None when no finite-life growth is predicted or the
    /// design life ends before growth does
    pub life_safety_factor: Option<f64>,
    /// N / required life SF
    pub inspection_interval_cycles: Option<f64>,
    /// Crack size after the design life, when the crack gets that far
    pub crack_size_at_design_life_m: Option<f64>,

    // Assessment
    pub fracture_status: DesignStatus,
    pub life_status: DesignStatus,
    pub status: DesignStatus,
    pub governing: GoverningCriterion,
    pub advisories: Vec<Advisory>,
    pub recommendations: Vec<Recommendation>,
    pub derivation: Vec<DerivationStep>,
    pub growth_curve: Vec<CrackGrowthPoint>,
}

impl RotorFractureResult {
    /// Both criteria meet their required safety factors
    pub fn passes(&self) -> bool {
        self.status == DesignStatus::Acceptable
    }

    pub fn critical_crack_size_m(&self) -> Option<f64> {
        self.critical_crack.size_m()
    }

    /// Cycles until the crack becomes critical, when that happens within
    /// the analysed growth
    pub fn cycles_to_failure(&self) -> Option<f64> {
        self.life.cycles_to_failure()
    }
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Run the analysis.
///
/// # Errors
/// * `InvalidInput` / `MaterialNotFound` - raised before any computation
/// * `GeometryOutOfRange` - a0 beyond the correlation's validity limit
/// * `NonMonotonicStress` - K_I(a) decreases over the search range
/// * `NonConvergence` - root finder or quadrature exhausted its budget
pub fn calculate(input: &RotorFractureInput) -> CalcResult<RotorFractureResult> {
    input.validate()?;
    let material = input.material.resolve()?;

    let RotorFractureInput {
        geometry,
        crack,
        load,
        config,
        ..
    } = input;
    let solver = &config.solver;
    let finder = solver.root_finder();
    let a0 = crack.initial_size_m;

    let mut advisories = Vec::new();
    if geometry.exceeds_thin_ring_proportions() {
        warn!(
            "Thin ring wall ratio {:.2} exceeds the thin-ring idealization",
            geometry.wall_ratio()
        );
        advisories.push(Advisory::ThinRingIdealization {
            wall_ratio: geometry.wall_ratio(),
        });
    }

    // Stresses
    let omega = load.angular_velocity().value();
    let nu = config.poisson_override.unwrap_or(material.poisson_ratio);
    let stress = stress_at(geometry, material.density_kg_m3, nu, omega, crack.location_radius_m)?;
    let peak = peak_hoop_stress(geometry, material.density_kg_m3, nu, omega);
    let sigma = stress.opening_stress(crack.orientation);
    if sigma <= 0.0 {
        return Err(CalcError::invalid_input(
            "crack.orientation",
            crack.orientation.display_name(),
            format!(
                "Opening stress at r = {} m is {:.3} MPa; a non-tensile stress does not open a mode-I crack",
                crack.location_radius_m, sigma
            ),
        ));
    }
    debug!(
        "{}: omega = {:.2} rad/s, sigma_theta = {:.3} MPa, sigma_r = {:.3} MPa at r = {} m",
        input.label, omega, stress.hoop_mpa, stress.radial_mpa, crack.location_radius_m
    );

    // Fracture
    let driver = CrackDriver::new(geometry, crack, sigma);
    let fracture = assess(
        &driver,
        material.fracture_toughness_mpa_sqrt_m,
        material.elastic_modulus_mpa(),
        a0,
        &finder,
        solver.monotonicity_samples,
    )?;
    debug!(
        "K_I(a0) = {:.4} MPa√m, SF = {:.4}, critical: {:?}",
        fracture.k_initial, fracture.safety_factor, fracture.critical
    );
    let already_critical = matches!(fracture.critical, CriticalCrack::AlreadyCritical { .. });
    match fracture.critical {
        CriticalCrack::NotReached {
            search_limit_m,
            k_at_limit,
        } => {
            warn!(
                "Critical crack size not reached: K_I({:.4e} m) = {:.3} < K_IC",
                search_limit_m, k_at_limit
            );
            advisories.push(Advisory::CriticalSizeNotReached {
                search_limit_m,
                k_at_limit,
            });
        }
        CriticalCrack::AlreadyCritical { .. } => advisories.push(Advisory::AlreadyCritical),
        CriticalCrack::Reached { .. } => {}
    }

    // Fatigue
    if config.stress_ratio < 0.0 {
        advisories.push(Advisory::CompressivePortionIgnored {
            stress_ratio: config.stress_ratio,
        });
    }
    let stress_range = effective_stress_range(sigma, config.stress_ratio);
    let model = FatigueModel::new(&driver, material.paris, stress_range, solver.quadrature());
    let life = predict_life(
        &model,
        sigma,
        a0,
        &fracture.critical,
        config.design_life_cycles,
        &finder,
    )?;
    let delta_k_initial = model.delta_k(a0)?;

    let (life_safety_factor, inspection_interval_cycles, crack_size_at_design_life_m) = match life {
        LifePrediction::Finite {
            cycles,
            end_size_m,
            endpoint,
        } => {
            if endpoint == LifeEndpoint::SearchLimit {
                warn!(
                    "Crack leaves the correlation range after {:.4e} cycles, inside the design life",
                    cycles
                );
                advisories.push(Advisory::CorrelationLimitBeforeDesignLife { cycles });
            }
            let at_design_life = if cycles > config.design_life_cycles {
                Some(
                    model
                        .size_after_cycles(a0, end_size_m, config.design_life_cycles, &finder)?
                        .x,
                )
            } else {
                None
            };
            (
                Some(cycles / config.design_life_cycles),
                Some(cycles / config.required_life_sf),
                at_design_life,
            )
        }
        LifePrediction::DesignLifeReached {
            design_life_cycles,
            crack_size_m,
        } => {
            advisories.push(Advisory::DesignLifeWithoutCriticality {
                design_life_cycles,
                crack_size_m,
            });
            (None, None, Some(crack_size_m))
        }
        LifePrediction::NoFiniteGrowth => {
            warn!("No finite-life growth: stress range {:.3e} MPa", stress_range);
            advisories.push(Advisory::NoFiniteLifeGrowth);
            (None, None, None)
        }
    };

    // Assessment
    let fracture_status = DesignStatus::classify(fracture.safety_factor, config.required_fracture_sf);
    let life_status = life_safety_factor
        .map(|sf| DesignStatus::classify(sf, config.required_life_sf))
        .unwrap_or(DesignStatus::Acceptable);
    let status = fracture_status.worse(life_status);
    let governing = governing_criterion(
        fracture.safety_factor,
        config.required_fracture_sf,
        life_safety_factor,
        config.required_life_sf,
    );
    let recommendations = recommendations(&RecommendationBasis {
        speed_rpm: load.speed_rpm,
        k_initial: fracture.k_initial,
        fracture_sf: fracture.safety_factor,
        required_fracture_sf: config.required_fracture_sf,
        fracture_status,
        life_status,
        inspection_interval_cycles,
        already_critical,
        governing,
    });

    let growth_curve = growth_curve(
        &driver,
        &model,
        life != LifePrediction::NoFiniteGrowth,
        a0,
        life.end_size_m().unwrap_or_else(|| fracture.critical.growth_end_m()),
        solver.curve_points,
    )?;

    let mut result = RotorFractureResult {
        label: input.label.clone(),
        material,
        angular_velocity_rad_s: omega,
        poisson_ratio: nu,
        stress_at_crack: stress,
        peak_stress: peak,
        opening_stress_mpa: sigma,
        stress_range_mpa: stress_range,
        correlation: driver.correlation_name().to_string(),
        geometry_factor_initial: fracture.geometry_factor_initial,
        k_initial: fracture.k_initial,
        delta_k_initial,
        energy_release_rate_kj_m2: fracture.energy_release_rate_kj_m2,
        fracture_safety_factor: fracture.safety_factor,
        critical_crack: fracture.critical,
        life,
        life_safety_factor,
        inspection_interval_cycles,
        crack_size_at_design_life_m,
        fracture_status,
        life_status,
        status,
        governing,
        advisories,
        recommendations,
        derivation: Vec::new(),
        growth_curve,
    };
    result.derivation = derivation_steps(input, &driver, &result)?;

    debug!("{}: status {} (governing {:?})", result.label, result.status, result.governing);
    Ok(result)
}

/// Registry equation for the opening stress of this geometry and orientation
fn stress_equation(geometry_type: GeometryType, orientation: CrackOrientation) -> Equation {
    match (geometry_type, orientation) {
        (GeometryType::SolidDisk, CrackOrientation::Radial) => Equation::SolidDiskHoopStress,
        (GeometryType::SolidDisk, CrackOrientation::Circumferential) => Equation::SolidDiskRadialStress,
        (GeometryType::AnnularDisk, CrackOrientation::Radial) => Equation::AnnularDiskHoopStress,
        (GeometryType::AnnularDisk, CrackOrientation::Circumferential) => Equation::AnnularDiskRadialStress,
        (GeometryType::ThinRing, _) => Equation::ThinRingHoopStress,
    }
}

fn derivation_steps(
    input: &RotorFractureInput,
    driver: &CrackDriver,
    result: &RotorFractureResult,
) -> CalcResult<Vec<DerivationStep>> {
    let RotorFractureInput {
        geometry,
        crack,
        load,
        config,
        ..
    } = input;
    let material = &result.material;
    let a0 = crack.initial_size_m;
    let k_ic = material.fracture_toughness_mpa_sqrt_m;
    let mut steps = Vec::with_capacity(16);

    steps.push(DerivationStep::new(
        Equation::AngularVelocity,
        "Angular velocity",
        "ω",
        format!("2π × {} / 60", load.speed_rpm),
        result.angular_velocity_rad_s,
        "rad/s",
    ));

    let stress_symbol = match crack.orientation {
        CrackOrientation::Radial => "σ_θ(r_a)",
        CrackOrientation::Circumferential => "σ_r(r_a)",
    };
    steps.push(DerivationStep::new(
        stress_equation(geometry.geometry_type, crack.orientation),
        "Opening stress at the crack",
        stress_symbol,
        format!(
            "ρ = {} kg/m³, ω = {:.2} rad/s, ν = {:.3}, r_i = {} m, r_o = {} m, r = {} m",
            material.density_kg_m3,
            result.angular_velocity_rad_s,
            result.poisson_ratio,
            geometry.inner_radius_m,
            geometry.outer_radius_m,
            crack.location_radius_m
        ),
        result.opening_stress_mpa,
        "MPa",
    ));

    steps.push(DerivationStep::new(
        driver.correlation_equation(),
        "Geometry factor at a0",
        "Y(a0)",
        format!(
            "α = a0 / W = {:.6} / {:.6} = {:.4}",
            a0,
            driver.ligament_m(),
            a0 / driver.ligament_m()
        ),
        result.geometry_factor_initial,
        "-",
    ));

    steps.push(DerivationStep::new(
        Equation::StressIntensityFactor,
        "Stress intensity at a0",
        "K_I(a0)",
        format!(
            "{:.4} × {:.3} × √(π × {:.6})",
            result.geometry_factor_initial, result.opening_stress_mpa, a0
        ),
        result.k_initial,
        "MPa√m",
    ));

    steps.push(DerivationStep::new(
        Equation::FractureSafetyFactor,
        "Fracture safety factor",
        "SF_fracture",
        format!("{:.3} / {:.4}", k_ic, result.k_initial),
        result.fracture_safety_factor,
        "-",
    ));

    let critical_text = match result.critical_crack {
        CriticalCrack::Reached { size_m, iterations } => format!(
            "K_I(a) = {:.3} solved on [{:.6}, {:.6}] m in {} iterations; K_I(a_c) = {:.4}",
            k_ic,
            a0,
            driver.search_limit_m(),
            iterations,
            driver.k_max(size_m)?
        ),
        CriticalCrack::AlreadyCritical { size_m, iterations } => format!(
            "K_I(a0) ≥ K_IC; K_I(a) = {:.3} solved below a0 in {} iterations; K_I(a_c) = {:.4}",
            k_ic,
            iterations,
            driver.k_max(size_m)?
        ),
        CriticalCrack::NotReached {
            search_limit_m,
            k_at_limit,
        } => format!(
            "not reached: K_I({:.6}) = {:.3} < {:.3}; value is the search limit",
            search_limit_m, k_at_limit, k_ic
        ),
    };
    steps.push(DerivationStep::new(
        Equation::CriticalCrackSize,
        "Critical crack size",
        "a_c",
        critical_text,
        result.critical_crack.growth_end_m(),
        "m",
    ));

    steps.push(DerivationStep::new(
        Equation::EnergyReleaseRate,
        "Energy release rate at a0",
        "G",
        format!("{:.4}² / {:.0} MPa", result.k_initial, material.elastic_modulus_mpa()),
        result.energy_release_rate_kj_m2,
        "kJ/m²",
    ));

    let range_text = if config.stress_ratio < 0.0 {
        format!("R = {} < 0, tensile portion only: Δσ = {:.3}", config.stress_ratio, result.opening_stress_mpa)
    } else {
        format!("{:.3} × (1 − {})", result.opening_stress_mpa, config.stress_ratio)
    };
    steps.push(DerivationStep::new(
        Equation::StressRange,
        "Effective stress range",
        "Δσ",
        range_text,
        result.stress_range_mpa,
        "MPa",
    ));

    steps.push(DerivationStep::new(
        Equation::StressIntensityRange,
        "Stress intensity range at a0",
        "ΔK(a0)",
        format!(
            "{:.4} × {:.3} × √(π × {:.6})",
            result.geometry_factor_initial, result.stress_range_mpa, a0
        ),
        result.delta_k_initial,
        "MPa√m",
    ));

    steps.push(DerivationStep::new(
        Equation::ParisLaw,
        "Growth rate at a0",
        "da/dN",
        format!(
            "{:e} × {:.4}^{}",
            material.paris.coefficient, result.delta_k_initial, material.paris.exponent
        ),
        material.paris.growth_rate(result.delta_k_initial),
        "m/cycle",
    ));

    if let LifePrediction::Finite {
        cycles,
        end_size_m,
        endpoint,
    } = result.life
    {
        let quantity = match endpoint {
            LifeEndpoint::Fracture => "Cycles to failure",
            LifeEndpoint::SearchLimit => "Cycles to the correlation limit",
        };
        steps.push(DerivationStep::new(
            Equation::CyclesToFailure,
            quantity,
            "N",
            format!("∫ da / (C·ΔK^m) from {:.6} m to {:.6} m", a0, end_size_m),
            cycles,
            "cycles",
        ));
        steps.push(DerivationStep::new(
            Equation::LifeSafetyFactor,
            "Life safety factor",
            "SF_life",
            format!("{:.4e} / {}", cycles, config.design_life_cycles),
            cycles / config.design_life_cycles,
            "-",
        ));
        steps.push(DerivationStep::new(
            Equation::InspectionInterval,
            "Inspection interval",
            "N_insp",
            format!("{:.4e} / {}", cycles, config.required_life_sf),
            cycles / config.required_life_sf,
            "cycles",
        ));
    }

    if let Some(size) = result.crack_size_at_design_life_m {
        steps.push(DerivationStep::new(
            Equation::CrackSizeAtDesignLife,
            "Crack size at design life",
            "a(N_design)",
            format!("N({:.6}, a) = {}", a0, config.design_life_cycles),
            size,
            "m",
        ));
    }

    if result.fracture_status != DesignStatus::Acceptable {
        steps.push(DerivationStep::new(
            Equation::AllowableSpeed,
            "Allowable speed",
            "n_allow",
            format!(
                "{} × √({:.4} / {})",
                load.speed_rpm, result.fracture_safety_factor, config.required_fracture_sf
            ),
            allowable_speed_rpm(load.speed_rpm, result.fracture_safety_factor, config.required_fracture_sf),
            "rpm",
        ));
    }

    Ok(steps)
}
