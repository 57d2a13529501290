//! # frac_core - Rotor Fracture and Fatigue Engine
//!
//! `frac_core` assesses a pre-existing crack in a spinning fiber-reinforced
//! disk or ring: a static linear-elastic fracture check (K_I against K_IC,
//! critical crack size) and a Paris-law fatigue life prediction. All inputs
//! and outputs are JSON-serializable, so results can be stored, diffed, or
//! handed to other tools unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from input to result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Bounded**: Every iterative procedure has a hard work cap
//! - **Auditable**: Each reported number carries its formula and substitution
//!
//! ## Quick Start
//!
//! ```rust
//! use frac_core::calculations::rotor::{calculate, AnalysisConfig, LoadCase, RotorFractureInput};
//! use frac_core::geometry::{Crack, CrackOrientation, CrackType, RotorGeometry};
//! use frac_core::materials::MaterialSource;
//!
//! let input = RotorFractureInput {
//!     label: "Demo".to_string(),
//!     material: MaterialSource::preset("CFRP"),
//!     geometry: RotorGeometry::solid_disk(0.15, 0.02),
//!     crack: Crack::new(0.10, 0.0005, CrackType::Edge, CrackOrientation::Radial),
//!     load: LoadCase { speed_rpm: 20_000.0 },
//!     config: AnalysisConfig::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("fracture_safety_factor"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Fracture assessment, fatigue life, result assembly
//! - [`equations`] - Closed-form stress and geometry-factor formulas, equation registry
//! - [`geometry`] - Rotor and crack descriptions
//! - [`materials`] - Material presets and custom materials
//! - [`numerics`] - Root finding and adaptive quadrature
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Input loading and atomic report saves
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade (`debug!` for solver progress,
//! `warn!` for advisories). The library never installs a logger.

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod materials;
pub mod numerics;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::rotor::{calculate, AnalysisConfig, LoadCase, RotorFractureInput, RotorFractureResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, load_report, save_report, SavedReport};
