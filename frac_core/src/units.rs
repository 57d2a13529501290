//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the engine converts between.
//! These are just f64 newtypes with `#[serde(transparent)]`, so JSON stays
//! plain numbers.
//!
//! ## Internal Unit System
//!
//! Calculations run in a fixed SI-based system:
//! - Length: metres (m); crack sizes are often displayed in millimetres
//! - Stress: megapascals (MPa); the disk formulas produce pascals
//! - Stress intensity: MPa·√m
//! - Rotational speed: supplied in rev/min, converted to rad/s
//! - Density: kg/m³, modulus: GPa
//!
//! ## Example
//!
//! ```rust
//! use frac_core::units::{Rpm, RadiansPerSecond, Meters, Millimeters};
//!
//! let omega: RadiansPerSecond = Rpm(60.0).into();
//! assert!((omega.0 - 2.0 * std::f64::consts::PI).abs() < 1e-12);
//!
//! let a0: Meters = Millimeters(0.5).into();
//! assert!((a0.0 - 0.0005).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Angular Velocity
// ============================================================================

/// Rotational speed in revolutions per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f64);

/// Angular velocity in radians per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiansPerSecond(pub f64);

impl From<Rpm> for RadiansPerSecond {
    fn from(rpm: Rpm) -> Self {
        RadiansPerSecond(rpm.0 * 2.0 * PI / 60.0)
    }
}

impl From<RadiansPerSecond> for Rpm {
    fn from(omega: RadiansPerSecond) -> Self {
        Rpm(omega.0 * 60.0 / (2.0 * PI))
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Pascals> for MegaPascals {
    fn from(pa: Pascals) -> Self {
        MegaPascals(pa.0 / 1.0e6)
    }
}

impl From<MegaPascals> for Pascals {
    fn from(mpa: MegaPascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Rpm);
impl_arithmetic!(RadiansPerSecond);
impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(MegaPascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpm_to_rad_per_sec() {
        let omega: RadiansPerSecond = Rpm(20_000.0).into();
        assert!((omega.0 - 2094.395).abs() < 0.001);

        let back: Rpm = omega.into();
        assert!((back.0 - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(0.0125).into();
        assert!((mm.0 - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_pascals_to_megapascals() {
        let mpa: MegaPascals = Pascals(48.5e6).into();
        assert!((mpa.0 - 48.5).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(0.10);
        let b = Meters(0.04);
        assert!(((a - b).value() - 0.06).abs() < 1e-15);
        assert!(((a + b).value() - 0.14).abs() < 1e-15);
        assert_eq!((a * 2.0).value(), 0.20);
        assert_eq!((a / 2.0).value(), 0.05);
    }

    #[test]
    fn test_serialization() {
        let speed = Rpm(12_500.0);
        let json = serde_json::to_string(&speed).unwrap();
        assert_eq!(json, "12500.0");

        let roundtrip: Rpm = serde_json::from_str(&json).unwrap();
        assert_eq!(speed, roundtrip);
    }
}
