//! # Fracture Calculations
//!
//! The rotor analysis follows the pattern:
//!
//! - `RotorFractureInput` - Input parameters (JSON-serializable)
//! - `RotorFractureResult` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<RotorFractureResult, CalcError>` - Pure calculation function
//!
//! ## Stages
//!
//! - [`fracture`] - K_I(a), fracture safety factor, critical crack size
//! - [`fatigue`] - Paris-law life integration
//! - [`report`] - Status, advisories, recommendations, derivation, growth curve
//! - [`rotor`] - Inputs, configuration, and the `calculate` pipeline

pub mod fatigue;
pub mod fracture;
pub mod report;
pub mod rotor;

// Re-export commonly used types
pub use fatigue::{LifeEndpoint, LifePrediction};
pub use fracture::{CrackDriver, CriticalCrack};
pub use report::{Advisory, CrackGrowthPoint, DerivationStep, DesignStatus, GoverningCriterion, Recommendation};
pub use rotor::{calculate, AnalysisConfig, LoadCase, RotorFractureInput, RotorFractureResult, SolverSettings};
