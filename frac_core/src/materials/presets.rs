//! Fiber-Reinforced and Polymer Rotor Materials
//!
//! Built-in fracture and fatigue property sets for the rotor materials the
//! assessment supports out of the box. Values are representative room
//! temperature, dry-as-moulded data for quasi-isotropic laminates and
//! short-fibre compounds; project work should use coupon data through the
//! custom material path.
//!
//! Paris constants are for crack growth rate in m/cycle with ΔK in MPa·√m.

use serde::{Deserialize, Serialize};

use super::{FractureMaterial, ParisLaw};

/// Built-in material presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialPreset {
    /// Carbon fibre / epoxy, quasi-isotropic layup
    #[serde(rename = "CFRP")]
    Cfrp,
    /// E-glass / epoxy, quasi-isotropic layup
    #[serde(rename = "GFRP")]
    Gfrp,
    /// Aramid (para-aramid) / epoxy
    #[serde(rename = "Aramid")]
    Aramid,
    /// Polyamide 6 with 30% short glass fibre
    #[serde(rename = "PA6-GF30")]
    Pa6Gf30,
    /// PEEK with 30% short carbon fibre
    #[serde(rename = "PEEK-CF30")]
    PeekCf30,
    /// Unfilled engineering thermoplastic
    #[serde(rename = "Generic polymer")]
    GenericPolymer,
}

impl MaterialPreset {
    /// All presets for UI selection
    pub const ALL: [MaterialPreset; 6] = [
        MaterialPreset::Cfrp,
        MaterialPreset::Gfrp,
        MaterialPreset::Aramid,
        MaterialPreset::Pa6Gf30,
        MaterialPreset::PeekCf30,
        MaterialPreset::GenericPolymer,
    ];

    /// Library name used for lookup (exact match)
    pub fn name(&self) -> &'static str {
        match self {
            MaterialPreset::Cfrp => "CFRP",
            MaterialPreset::Gfrp => "GFRP",
            MaterialPreset::Aramid => "Aramid",
            MaterialPreset::Pa6Gf30 => "PA6-GF30",
            MaterialPreset::PeekCf30 => "PEEK-CF30",
            MaterialPreset::GenericPolymer => "Generic polymer",
        }
    }

    /// Find a preset by its exact library name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|preset| preset.name() == name)
    }

    /// Property set for this preset
    pub fn properties(&self) -> FractureMaterial {
        // (K_IC MPa√m, C, m, E GPa, ν, ρ kg/m³)
        let (k_ic, c, m, e, nu, rho) = match self {
            MaterialPreset::Cfrp => (25.0, 1.0e-11, 3.0, 70.0, 0.30, 1600.0),
            MaterialPreset::Gfrp => (15.0, 5.0e-10, 4.0, 25.0, 0.28, 1900.0),
            MaterialPreset::Aramid => (20.0, 2.0e-10, 3.5, 30.0, 0.34, 1380.0),
            MaterialPreset::Pa6Gf30 => (6.5, 3.0e-8, 4.2, 9.5, 0.35, 1360.0),
            MaterialPreset::PeekCf30 => (7.5, 1.0e-9, 5.0, 22.0, 0.38, 1410.0),
            MaterialPreset::GenericPolymer => (2.5, 5.0e-7, 4.0, 3.0, 0.38, 1200.0),
        };

        FractureMaterial {
            name: self.name().to_string(),
            fracture_toughness_mpa_sqrt_m: k_ic,
            paris: ParisLaw {
                coefficient: c,
                exponent: m,
            },
            elastic_modulus_gpa: e,
            poisson_ratio: nu,
            density_kg_m3: rho,
        }
    }
}

impl std::fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
