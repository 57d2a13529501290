//! # Equation Registry
//!
//! Central registry of every formula the fracture and fatigue assessment uses.
//! Each equation has metadata including references, formulas, and variable
//! definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for derivation panels and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use frac_core::equations::registry::Equation;
//!
//! let meta = Equation::StressIntensityFactor.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Reference to a textbook, handbook, or paper.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Timoshenko & Goodier, Theory of Elasticity
    TimoshenkoGoodier { edition: u8, section: &'static str },
    /// Tada, Paris & Irwin, The Stress Analysis of Cracks Handbook
    Tada { edition: u8, page: &'static str },
    /// Newman & Raju stress-intensity equations for elliptical cracks
    NewmanRaju { year: u16, report: &'static str },
    /// Paris & Erdogan crack growth law
    ParisErdogan { year: u16 },
    /// Anderson, Fracture Mechanics: Fundamentals and Applications
    Anderson { edition: u8, chapter: u8 },
    /// Fundamental mechanics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::TimoshenkoGoodier { edition, section } => {
                format!("Timoshenko & Goodier {}ed, §{}", edition, section)
            }
            CodeReference::Tada { edition, page } => {
                format!("Tada, Paris & Irwin {}ed, p. {}", edition, page)
            }
            CodeReference::NewmanRaju { year, report } => {
                format!("Newman & Raju ({}), {}", year, report)
            }
            CodeReference::ParisErdogan { year } => format!("Paris & Erdogan ({})", year),
            CodeReference::Anderson { edition, chapter } => {
                format!("Anderson {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::TimoshenkoGoodier { .. } => "Timoshenko",
            CodeReference::Tada { .. } => "Tada",
            CodeReference::NewmanRaju { .. } => "Newman-Raju",
            CodeReference::ParisErdogan { .. } => "Paris",
            CodeReference::Anderson { .. } => "Anderson",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in reports and the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Speed conversion and centrifugal stresses
    RotorStresses,
    /// Crack geometry corrections Y
    GeometryFactors,
    /// Static LEFM assessment
    FractureMechanics,
    /// Paris-law crack growth
    FatigueLife,
    /// Safety factors, inspection intervals, allowable speed
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::RotorStresses => "Rotor Stresses",
            EquationCategory::GeometryFactors => "Geometry Factors",
            EquationCategory::FractureMechanics => "Fracture Mechanics",
            EquationCategory::FatigueLife => "Fatigue Crack Growth",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for reports (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::RotorStresses => 1,
            EquationCategory::GeometryFactors => 2,
            EquationCategory::FractureMechanics => 3,
            EquationCategory::FatigueLife => 4,
            EquationCategory::DesignChecks => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "K_I", "a", "ω")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "MPa√m", "m", "rad/s")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Stress Intensity Factor")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in the rotor fracture and fatigue assessment.
///
/// Each variant maps to a specific formula with full metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Rotor stresses
    // -------------------------------------------------------------------------
    /// ω = 2πn/60
    AngularVelocity,
    /// σ_θ = (ρω²/8)[(3+ν)r_o² − (1+3ν)r²]
    SolidDiskHoopStress,
    /// σ_r = (ρω²/8)(3+ν)(r_o² − r²)
    SolidDiskRadialStress,
    /// Annular disk hoop stress
    AnnularDiskHoopStress,
    /// Annular disk radial stress
    AnnularDiskRadialStress,
    /// σ_θ = ρω²R²
    ThinRingHoopStress,

    // -------------------------------------------------------------------------
    // Geometry factors
    // -------------------------------------------------------------------------
    /// Tada single edge crack polynomial
    EdgeCrackFactor,
    /// Tada finite-width centre crack
    ThroughCrackFactor,
    /// Newman-Raju surface crack, deepest point
    SurfaceCrackFactor,
    /// Newman-Raju embedded crack
    EmbeddedCrackFactor,
    /// Q = 1 + 1.464(a/c)^1.65
    EllipticalShapeFactor,

    // -------------------------------------------------------------------------
    // Fracture mechanics
    // -------------------------------------------------------------------------
    /// K_I = Yσ√(πa)
    StressIntensityFactor,
    /// SF = K_IC / K_I(a0)
    FractureSafetyFactor,
    /// K_I(a_c) = K_IC
    CriticalCrackSize,
    /// G = K_I²/E
    EnergyReleaseRate,

    // -------------------------------------------------------------------------
    // Fatigue crack growth
    // -------------------------------------------------------------------------
    /// Δσ = σ(1−R) for R ≥ 0, σ for R < 0
    StressRange,
    /// ΔK = YΔσ√(πa)
    StressIntensityRange,
    /// da/dN = CΔK^m
    ParisLaw,
    /// N = ∫ da / (CΔK^m)
    CyclesToFailure,
    /// N(a0, a) = N_design
    CrackSizeAtDesignLife,

    // -------------------------------------------------------------------------
    // Design checks
    // -------------------------------------------------------------------------
    /// SF_life = N / N_design
    LifeSafetyFactor,
    /// N_insp = N / SF_life,req
    InspectionInterval,
    /// n_allow = n √(SF / SF_req)
    AllowableSpeed,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        const TIMOSHENKO: CodeReference = CodeReference::TimoshenkoGoodier {
            edition: 3,
            section: "32",
        };

        match self {
            Equation::AngularVelocity => EquationMetadata {
                name: "Angular Velocity",
                description: "Conversion of rotational speed to angular velocity",
                formula_plain: "omega = 2*pi*n/60",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("n", "Rotational speed", "rev/min"),
                    Variable::new("omega", "Angular velocity", "rad/s"),
                ],
                assumptions: vec!["Steady speed"],
                category: EquationCategory::RotorStresses,
                source_module: "units.rs",
                source_function: "RadiansPerSecond::from",
            },

            Equation::SolidDiskHoopStress => EquationMetadata {
                name: "Solid Disk Hoop Stress",
                description: "Tangential stress at radius r in a solid rotating disk",
                formula_plain: "sigma_theta = (rho*omega^2/8) * [(3+nu)*r_o^2 - (1+3nu)*r^2]",
                reference: TIMOSHENKO,
                variables: vec![
                    Variable::new("rho", "Density", "kg/m^3"),
                    Variable::new("omega", "Angular velocity", "rad/s"),
                    Variable::new("nu", "Poisson ratio", "-"),
                    Variable::new("r_o", "Outer radius", "m"),
                    Variable::new("r", "Evaluation radius", "m"),
                ],
                assumptions: vec!["Plane stress (thin disk)", "Uniform thickness", "Isotropic, linear elastic"],
                category: EquationCategory::RotorStresses,
                source_module: "equations/rotating_disk.rs",
                source_function: "solid_disk_hoop_stress",
            },

            Equation::SolidDiskRadialStress => EquationMetadata {
                name: "Solid Disk Radial Stress",
                description: "Radial stress at radius r in a solid rotating disk",
                formula_plain: "sigma_r = (rho*omega^2/8) * (3+nu) * (r_o^2 - r^2)",
                reference: TIMOSHENKO,
                variables: vec![
                    Variable::new("rho", "Density", "kg/m^3"),
                    Variable::new("omega", "Angular velocity", "rad/s"),
                    Variable::new("r", "Evaluation radius", "m"),
                ],
                assumptions: vec!["Plane stress (thin disk)", "Free outer rim (sigma_r = 0 at r_o)"],
                category: EquationCategory::RotorStresses,
                source_module: "equations/rotating_disk.rs",
                source_function: "solid_disk_radial_stress",
            },

            Equation::AnnularDiskHoopStress => EquationMetadata {
                name: "Annular Disk Hoop Stress",
                description: "Tangential stress at radius r in a rotating disk with a central bore",
                formula_plain: "sigma_theta = ((3+nu)/8)*rho*omega^2 * [r_i^2 + r_o^2 + r_i^2*r_o^2/r^2 - ((1+3nu)/(3+nu))*r^2]",
                reference: TIMOSHENKO,
                variables: vec![
                    Variable::new("r_i", "Bore radius", "m"),
                    Variable::new("r_o", "Outer radius", "m"),
                    Variable::new("r", "Evaluation radius", "m"),
                ],
                assumptions: vec!["Plane stress (thin disk)", "Free bore and rim"],
                category: EquationCategory::RotorStresses,
                source_module: "equations/rotating_disk.rs",
                source_function: "annular_disk_hoop_stress",
            },

            Equation::AnnularDiskRadialStress => EquationMetadata {
                name: "Annular Disk Radial Stress",
                description: "Radial stress at radius r in a rotating disk with a central bore",
                formula_plain: "sigma_r = ((3+nu)/8)*rho*omega^2 * [r_i^2 + r_o^2 - r_i^2*r_o^2/r^2 - r^2]",
                reference: TIMOSHENKO,
                variables: vec![
                    Variable::new("r_i", "Bore radius", "m"),
                    Variable::new("r_o", "Outer radius", "m"),
                ],
                assumptions: vec!["sigma_r = 0 at r_i and r_o"],
                category: EquationCategory::RotorStresses,
                source_module: "equations/rotating_disk.rs",
                source_function: "annular_disk_radial_stress",
            },

            Equation::ThinRingHoopStress => EquationMetadata {
                name: "Thin Ring Hoop Stress",
                description: "Uniform hoop stress in a thin rotating ring",
                formula_plain: "sigma_theta = rho*omega^2*R^2",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("R", "Mean radius (r_i + r_o)/2", "m")],
                assumptions: vec!["Wall thin relative to radius", "Radial stress neglected"],
                category: EquationCategory::RotorStresses,
                source_module: "equations/rotating_disk.rs",
                source_function: "thin_ring_hoop_stress",
            },

            Equation::EdgeCrackFactor => EquationMetadata {
                name: "Edge Crack Geometry Factor",
                description: "Single edge crack in a finite-width strip under tension",
                formula_plain: "Y = 1.12 - 0.231*alpha + 10.55*alpha^2 - 21.72*alpha^3 + 30.39*alpha^4",
                reference: CodeReference::Tada { edition: 3, page: "2.10" },
                variables: vec![
                    Variable::new("alpha", "Relative depth a/W", "-"),
                    Variable::new("W", "Remaining ligament r_o - r_a", "m"),
                ],
                assumptions: vec!["Valid for alpha <= 0.6", "Remote uniform tension"],
                category: EquationCategory::GeometryFactors,
                source_module: "equations/crack_factors.rs",
                source_function: "EdgeCrack::factor",
            },

            Equation::ThroughCrackFactor => EquationMetadata {
                name: "Through Crack Geometry Factor",
                description: "Centre through-crack with finite-width correction",
                formula_plain: "Y = (1 - 0.025*alpha^2 + 0.06*alpha^4) * sqrt(sec(pi*alpha/2))",
                reference: CodeReference::Tada { edition: 3, page: "2.1" },
                variables: vec![Variable::new("alpha", "Relative half-length a/W", "-")],
                assumptions: vec!["Valid for alpha <= 0.8"],
                category: EquationCategory::GeometryFactors,
                source_module: "equations/crack_factors.rs",
                source_function: "ThroughCrack::factor",
            },

            Equation::SurfaceCrackFactor => EquationMetadata {
                name: "Surface Crack Geometry Factor",
                description: "Semi-elliptical surface crack at the deepest point",
                formula_plain: "Y = (M1 + M2*alpha^2 + M3*alpha^4) / sqrt(Q)",
                reference: CodeReference::NewmanRaju {
                    year: 1981,
                    report: "Eng. Fract. Mech. 15",
                },
                variables: vec![
                    Variable::new("M1", "1.13 - 0.09(a/c)", "-"),
                    Variable::new("M2", "-0.54 + 0.89/(0.2 + a/c)", "-"),
                    Variable::new("M3", "0.5 - 1/(0.65 + a/c) + 14(1 - a/c)^24", "-"),
                    Variable::new("Q", "Elliptical shape factor", "-"),
                ],
                assumptions: vec!["0 < a/c <= 1", "Valid for alpha <= 0.8", "Finite-width term taken as 1"],
                category: EquationCategory::GeometryFactors,
                source_module: "equations/crack_factors.rs",
                source_function: "SurfaceCrack::factor",
            },

            Equation::EmbeddedCrackFactor => EquationMetadata {
                name: "Embedded Crack Geometry Factor",
                description: "Buried elliptical crack at the end of the minor axis",
                formula_plain: "Y = (1 + M2*alpha^2 + M3*alpha^4) / sqrt(Q)",
                reference: CodeReference::NewmanRaju {
                    year: 1984,
                    report: "NASA TM-85793",
                },
                variables: vec![
                    Variable::new("M2", "0.05/(0.11 + (a/c)^1.5)", "-"),
                    Variable::new("M3", "0.29/(0.23 + (a/c)^1.5)", "-"),
                ],
                assumptions: vec!["0 < a/c <= 1", "Valid for alpha <= 0.8"],
                category: EquationCategory::GeometryFactors,
                source_module: "equations/crack_factors.rs",
                source_function: "EmbeddedCrack::factor",
            },

            Equation::EllipticalShapeFactor => EquationMetadata {
                name: "Elliptical Crack Shape Factor",
                description: "Approximate square of the complete elliptic integral of the second kind",
                formula_plain: "Q = 1 + 1.464*(a/c)^1.65",
                reference: CodeReference::NewmanRaju {
                    year: 1981,
                    report: "Eng. Fract. Mech. 15",
                },
                variables: vec![Variable::new("a/c", "Crack aspect ratio", "-")],
                assumptions: vec!["a/c <= 1"],
                category: EquationCategory::GeometryFactors,
                source_module: "equations/crack_factors.rs",
                source_function: "shape_factor_q",
            },

            Equation::StressIntensityFactor => EquationMetadata {
                name: "Stress Intensity Factor",
                description: "Mode-I stress intensity at crack size a",
                formula_plain: "K_I = Y * sigma * sqrt(pi*a)",
                reference: CodeReference::Anderson { edition: 4, chapter: 2 },
                variables: vec![
                    Variable::new("K_I", "Stress intensity factor", "MPa*sqrt(m)"),
                    Variable::new("Y", "Geometry factor", "-"),
                    Variable::new("sigma", "Opening stress at the crack location", "MPa"),
                    Variable::new("a", "Crack size", "m"),
                ],
                assumptions: vec!["LEFM, small-scale yielding", "Stress at the crack location is uniform over the crack"],
                category: EquationCategory::FractureMechanics,
                source_module: "equations/crack_factors.rs",
                source_function: "stress_intensity",
            },

            Equation::FractureSafetyFactor => EquationMetadata {
                name: "Fracture Safety Factor",
                description: "Margin against unstable fracture of the initial crack",
                formula_plain: "SF_fracture = K_IC / K_I(a0)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("K_IC", "Fracture toughness", "MPa*sqrt(m)"),
                    Variable::new("K_I(a0)", "Stress intensity at the initial crack size", "MPa*sqrt(m)"),
                ],
                assumptions: vec![],
                category: EquationCategory::FractureMechanics,
                source_module: "calculations/fracture.rs",
                source_function: "assess",
            },

            Equation::CriticalCrackSize => EquationMetadata {
                name: "Critical Crack Size",
                description: "Crack size at which K_I reaches the fracture toughness, solved by bracketed root-finding",
                formula_plain: "K_I(a_c) = K_IC, a0 < a_c < a_max",
                reference: CodeReference::Anderson { edition: 4, chapter: 2 },
                variables: vec![
                    Variable::new("a_c", "Critical crack size", "m"),
                    Variable::new("a_max", "Correlation validity limit alpha_max*W", "m"),
                ],
                assumptions: vec!["K_I(a) increasing on the search interval (checked)"],
                category: EquationCategory::FractureMechanics,
                source_module: "calculations/fracture.rs",
                source_function: "critical_crack_size",
            },

            Equation::EnergyReleaseRate => EquationMetadata {
                name: "Energy Release Rate",
                description: "Plane-stress strain energy release rate at the initial crack",
                formula_plain: "G = K_I^2 / E",
                reference: CodeReference::Anderson { edition: 4, chapter: 2 },
                variables: vec![
                    Variable::new("G", "Energy release rate", "kJ/m^2"),
                    Variable::new("E", "Elastic modulus", "MPa"),
                ],
                assumptions: vec!["Plane stress"],
                category: EquationCategory::FractureMechanics,
                source_module: "calculations/fracture.rs",
                source_function: "energy_release_rate",
            },

            Equation::StressRange => EquationMetadata {
                name: "Effective Stress Range",
                description: "Stress range per cycle driving fatigue growth (tensile portion only)",
                formula_plain: "delta_sigma = sigma_max*(1-R) for R >= 0; delta_sigma = sigma_max for R < 0",
                reference: CodeReference::Anderson { edition: 4, chapter: 10 },
                variables: vec![
                    Variable::new("R", "Stress ratio sigma_min/sigma_max", "-"),
                    Variable::new("sigma_max", "Peak opening stress", "MPa"),
                ],
                assumptions: vec!["Compressive part of the cycle closes the crack and does not drive growth"],
                category: EquationCategory::FatigueLife,
                source_module: "calculations/fatigue.rs",
                source_function: "effective_stress_range",
            },

            Equation::StressIntensityRange => EquationMetadata {
                name: "Stress Intensity Range",
                description: "Stress intensity range over one load cycle",
                formula_plain: "delta_K = Y * delta_sigma * sqrt(pi*a)",
                reference: CodeReference::Anderson { edition: 4, chapter: 10 },
                variables: vec![Variable::new("delta_K", "Stress intensity range", "MPa*sqrt(m)")],
                assumptions: vec![],
                category: EquationCategory::FatigueLife,
                source_module: "calculations/fatigue.rs",
                source_function: "FatigueModel::delta_k",
            },

            Equation::ParisLaw => EquationMetadata {
                name: "Paris Law",
                description: "Stable fatigue crack growth rate",
                formula_plain: "da/dN = C * delta_K^m",
                reference: CodeReference::ParisErdogan { year: 1963 },
                variables: vec![
                    Variable::new("C", "Paris coefficient", "(m/cycle)/(MPa*sqrt(m))^m"),
                    Variable::new("m", "Paris exponent", "-"),
                ],
                assumptions: vec!["Constant amplitude loading", "No threshold or R-ratio correction"],
                category: EquationCategory::FatigueLife,
                source_module: "materials/mod.rs",
                source_function: "ParisLaw::growth_rate",
            },

            Equation::CyclesToFailure => EquationMetadata {
                name: "Cycles to Failure",
                description: "Paris law integrated from the initial to the final crack size by adaptive Simpson quadrature",
                formula_plain: "N = integral from a0 to a_f of da / (C * delta_K(a)^m)",
                reference: CodeReference::Anderson { edition: 4, chapter: 10 },
                variables: vec![
                    Variable::new("N", "Cycles", "cycles"),
                    Variable::new("a_f", "Final crack size (a_c, or a_max when a_c is not reached)", "m"),
                ],
                assumptions: vec!["Integration error controlled to a relative tolerance"],
                category: EquationCategory::FatigueLife,
                source_module: "calculations/fatigue.rs",
                source_function: "FatigueModel::cycles_between",
            },

            Equation::CrackSizeAtDesignLife => EquationMetadata {
                name: "Crack Size at Design Life",
                description: "Crack size reached after the design number of cycles",
                formula_plain: "N(a0, a_design) = N_design",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("N_design", "Design life", "cycles")],
                assumptions: vec!["Solved by bracketed root-finding on the life integral"],
                category: EquationCategory::FatigueLife,
                source_module: "calculations/fatigue.rs",
                source_function: "FatigueModel::size_after_cycles",
            },

            Equation::LifeSafetyFactor => EquationMetadata {
                name: "Life Safety Factor",
                description: "Predicted life relative to design life",
                formula_plain: "SF_life = N / N_design",
                reference: CodeReference::Mechanics,
                variables: vec![],
                assumptions: vec![],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/report.rs",
                source_function: "assemble",
            },

            Equation::InspectionInterval => EquationMetadata {
                name: "Inspection Interval",
                description: "Conservative fraction of the predicted life between inspections",
                formula_plain: "N_insp = N / SF_life,req",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("SF_life,req", "Required life safety factor", "-")],
                assumptions: vec!["Reporting granularity is applied by the caller"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/report.rs",
                source_function: "assemble",
            },

            Equation::AllowableSpeed => EquationMetadata {
                name: "Allowable Speed",
                description: "Speed restoring the required fracture safety factor (stress scales with omega^2)",
                formula_plain: "n_allow = n * sqrt(SF_fracture / SF_fracture,req)",
                reference: CodeReference::Mechanics,
                variables: vec![],
                assumptions: vec!["Same crack size and geometry factor"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/report.rs",
                source_function: "allowable_speed_rpm",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![RotorStresses, GeometryFactors, FractureMechanics, FatigueLife, DesignChecks];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Rotor stresses
    Equation::AngularVelocity,
    Equation::SolidDiskHoopStress,
    Equation::SolidDiskRadialStress,
    Equation::AnnularDiskHoopStress,
    Equation::AnnularDiskRadialStress,
    Equation::ThinRingHoopStress,
    // Geometry factors
    Equation::EdgeCrackFactor,
    Equation::ThroughCrackFactor,
    Equation::SurfaceCrackFactor,
    Equation::EmbeddedCrackFactor,
    Equation::EllipticalShapeFactor,
    // Fracture
    Equation::StressIntensityFactor,
    Equation::FractureSafetyFactor,
    Equation::CriticalCrackSize,
    Equation::EnergyReleaseRate,
    // Fatigue
    Equation::StressRange,
    Equation::StressIntensityRange,
    Equation::ParisLaw,
    Equation::CyclesToFailure,
    Equation::CrackSizeAtDesignLife,
    // Design checks
    Equation::LifeSafetyFactor,
    Equation::InspectionInterval,
    Equation::AllowableSpeed,
];

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the EQUATIONS.md reference document from the registry.
///
/// # Example
///
/// ```rust
/// use frac_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Paris Law"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Spinfrac Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the rotor fracture and fatigue assessment.
Each equation includes its formula, reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Length, crack size | m |
| Stress | MPa |
| Stress intensity | MPa*sqrt(m) |
| Crack growth rate | m/cycle |
| Speed | rev/min (rad/s internally) |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 23);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} has no source module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} has no source function", eq);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let tada = CodeReference::Tada { edition: 3, page: "2.10" };
        assert_eq!(tada.citation(), "Tada, Paris & Irwin 3ed, p. 2.10");
        assert_eq!(CodeReference::ParisErdogan { year: 1963 }.citation(), "Paris & Erdogan (1963)");
    }

    #[test]
    fn test_every_category_populated() {
        for category in Equation::all_categories() {
            assert!(
                !Equation::in_category(category).is_empty(),
                "Category {:?} is empty",
                category
            );
        }
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        for pair in cats.windows(2) {
            assert!(pair[0].sort_order() < pair[1].sort_order());
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");
        for category in Equation::all_categories() {
            assert!(markdown.contains(category.display_name()));
        }
        assert!(markdown.contains("K_I = Y * sigma * sqrt(pi*a)"));
        assert!(markdown.contains("**Total Equations:** 23"));
    }
}
