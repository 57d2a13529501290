//! # Materials Library
//!
//! Fracture and fatigue properties for rotor materials. A material is
//! immutable reference data: it is selected by name from the preset table
//! or supplied whole by the caller ("custom"), and never mutated.
//!
//! ## Example
//!
//! ```rust
//! use frac_core::materials::{lookup, MaterialSource};
//!
//! let cfrp = lookup("CFRP").unwrap();
//! println!("K_IC = {} MPa√m", cfrp.fracture_toughness_mpa_sqrt_m);
//!
//! // Names are matched exactly
//! assert!(lookup("cfrp").is_err());
//!
//! let source = MaterialSource::preset("GFRP");
//! assert_eq!(source.resolve().unwrap().name, "GFRP");
//! ```

pub mod presets;

pub use presets::MaterialPreset;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Paris-law crack growth constants: da/dN = C·ΔK^m
///
/// da/dN in m/cycle, ΔK in MPa·√m.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParisLaw {
    /// Coefficient C
    pub coefficient: f64,
    /// Exponent m
    pub exponent: f64,
}

impl ParisLaw {
    /// Crack growth rate da/dN (m/cycle) for a stress-intensity range ΔK
    #[inline]
    pub fn growth_rate(&self, delta_k: f64) -> f64 {
        self.coefficient * delta_k.powf(self.exponent)
    }
}

/// Fracture and fatigue properties of a rotor material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "CFRP",
///   "fracture_toughness_mpa_sqrt_m": 25.0,
///   "paris": { "coefficient": 1e-11, "exponent": 3.0 },
///   "elastic_modulus_gpa": 70.0,
///   "poisson_ratio": 0.3,
///   "density_kg_m3": 1600.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractureMaterial {
    /// Material name
    pub name: String,
    /// Plane-strain fracture toughness K_IC (MPa·√m)
    pub fracture_toughness_mpa_sqrt_m: f64,
    /// Paris-law constants
    pub paris: ParisLaw,
    /// Elastic modulus E (GPa)
    pub elastic_modulus_gpa: f64,
    /// Poisson ratio ν
    pub poisson_ratio: f64,
    /// Density ρ (kg/m³)
    pub density_kg_m3: f64,
}

impl FractureMaterial {
    /// Validate material properties.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("fracture_toughness_mpa_sqrt_m", self.fracture_toughness_mpa_sqrt_m),
            ("paris.coefficient", self.paris.coefficient),
            ("paris.exponent", self.paris.exponent),
            ("elastic_modulus_gpa", self.elastic_modulus_gpa),
            ("density_kg_m3", self.density_kg_m3),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Material property must be a positive number",
                ));
            }
        }
        validate_poisson_ratio("poisson_ratio", self.poisson_ratio)
    }

    /// Elastic modulus in MPa
    pub fn elastic_modulus_mpa(&self) -> f64 {
        self.elastic_modulus_gpa * 1000.0
    }
}

/// Check that a Poisson ratio lies in the isotropic range (−1, 0.5).
pub fn validate_poisson_ratio(field: &str, nu: f64) -> CalcResult<()> {
    if !nu.is_finite() || nu <= -1.0 || nu >= 0.5 {
        return Err(CalcError::invalid_input(
            field,
            nu.to_string(),
            "Poisson ratio must lie between -1 and 0.5",
        ));
    }
    Ok(())
}

/// Look up a preset by exact name.
///
/// No fuzzy matching: anything other than an exact preset name is
/// `MaterialNotFound`.
pub fn lookup(name: &str) -> CalcResult<FractureMaterial> {
    MaterialPreset::from_name(name)
        .map(|preset| preset.properties())
        .ok_or_else(|| CalcError::material_not_found(name))
}

/// Where the analysis gets its material from.
///
/// ## JSON Serialization
///
/// ```json
/// { "source": "preset", "name": "CFRP" }
///
/// { "source": "custom", "name": "Coupon batch 7", "fracture_toughness_mpa_sqrt_m": 22.0,
///   "paris": { "coefficient": 2e-11, "exponent": 3.2 },
///   "elastic_modulus_gpa": 65.0, "poisson_ratio": 0.31, "density_kg_m3": 1580.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MaterialSource {
    /// Built-in preset, selected by name
    Preset { name: String },
    /// Caller-supplied properties, bypassing the table
    Custom(FractureMaterial),
}

impl MaterialSource {
    /// Convenience constructor for a preset reference
    pub fn preset(name: impl Into<String>) -> Self {
        MaterialSource::Preset { name: name.into() }
    }

    /// Resolve to a validated material
    pub fn resolve(&self) -> CalcResult<FractureMaterial> {
        let material = match self {
            MaterialSource::Preset { name } => lookup(name)?,
            MaterialSource::Custom(material) => material.clone(),
        };
        material.validate()?;
        Ok(material)
    }
}
