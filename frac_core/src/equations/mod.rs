//! # Fracture Mechanics Equations
//!
//! Closed-form formulas used by the assessment, kept in one place so they can
//! be checked against their references:
//!
//! - [`rotating_disk`] - Centrifugal stresses in disks and rings
//! - [`crack_factors`] - Crack geometry factors Y and K_I = Yσ√(πa)
//! - [`registry`] - Equation metadata for derivation panels and EQUATIONS.md
//!
//! ## Sign Conventions
//!
//! - **Stress**: Tensile positive
//! - **Crack size**: Measured from the crack location radius toward the rim
//! - **Stress ratio**: R = σ_min/σ_max
//!
//! ## References
//!
//! - Timoshenko & Goodier, Theory of Elasticity, 3rd Edition
//! - Tada, Paris & Irwin, The Stress Analysis of Cracks Handbook, 3rd Edition
//! - Newman & Raju, Eng. Fract. Mech. 15 (1981); NASA TM-85793 (1984)
//! - Anderson, Fracture Mechanics: Fundamentals and Applications, 4th Edition

pub mod crack_factors;
pub mod registry;
pub mod rotating_disk;

pub use crack_factors::{
    correlation_for,
    factor_within_limit,
    geometry_factor,
    shape_factor_q,
    stress_intensity,
    validity_limit_m,
    EdgeCrack,
    EmbeddedCrack,
    GeometryFactor,
    SurfaceCrack,
    ThroughCrack,
};

pub use rotating_disk::{
    annular_disk_bore_stress,
    annular_disk_hoop_stress,
    annular_disk_radial_stress,
    peak_hoop_stress,
    solid_disk_hoop_stress,
    solid_disk_peak_stress,
    solid_disk_radial_stress,
    stress_at,
    thin_ring_hoop_stress,
    PeakStress,
    StressState,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
