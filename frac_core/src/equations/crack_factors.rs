//! # Crack Geometry Factors
//!
//! Dimensionless correction Y in K_I = Y·σ·√(πa) for each supported crack
//! shape. Every correlation is written in terms of the relative depth
//! α = a/W, where W = r_o − r_a is the remaining ligament in the direction of
//! growth, and carries its own validity limit α_max. Asking for Y beyond that
//! limit is a `GeometryOutOfRange` error, never an extrapolation.
//!
//! ## Correlations
//!
//! | Crack    | Source                              | α_max |
//! |----------|-------------------------------------|-------|
//! | Edge     | Tada, single edge crack             | 0.6   |
//! | Through  | Tada, centre crack (finite width)   | 0.8   |
//! | Surface  | Newman-Raju, deepest point          | 0.8   |
//! | Embedded | Newman-Raju, minor-axis end         | 0.8   |
//!
//! Y is not bounded below by 1. An embedded crack far from the surfaces has
//! Y(0) = 1/√Q, about 0.64 for a penny-shaped crack (2/π exactly).

use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{Crack, CrackType, RotorGeometry};

use super::registry::Equation;

/// One crack-shape correlation: "compute Y(α)".
pub trait GeometryFactor {
    /// Short name used in error messages and reports
    fn name(&self) -> &'static str;

    /// Largest relative depth α = a/W the correlation is valid for
    fn max_relative_depth(&self) -> f64;

    /// Y at relative depth α (caller guarantees 0 ≤ α ≤ α_max)
    fn factor(&self, alpha: f64) -> f64;

    /// Registry entry documenting the correlation
    fn equation(&self) -> Equation;
}

/// Edge crack, Tada single-edge-crack polynomial
#[derive(Debug, Clone, Copy)]
pub struct EdgeCrack;

impl GeometryFactor for EdgeCrack {
    fn name(&self) -> &'static str {
        "Edge crack (Tada SEC)"
    }

    fn max_relative_depth(&self) -> f64 {
        0.6
    }

    fn factor(&self, alpha: f64) -> f64 {
        1.12 - 0.231 * alpha + 10.55 * alpha.powi(2) - 21.72 * alpha.powi(3) + 30.39 * alpha.powi(4)
    }

    fn equation(&self) -> Equation {
        Equation::EdgeCrackFactor
    }
}

/// Through-thickness crack, Tada finite-width centre-crack form
#[derive(Debug, Clone, Copy)]
pub struct ThroughCrack;

impl GeometryFactor for ThroughCrack {
    fn name(&self) -> &'static str {
        "Through crack (Tada CCT)"
    }

    fn max_relative_depth(&self) -> f64 {
        0.8
    }

    fn factor(&self, alpha: f64) -> f64 {
        let secant = 1.0 / (PI * alpha / 2.0).cos();
        (1.0 - 0.025 * alpha.powi(2) + 0.06 * alpha.powi(4)) * secant.sqrt()
    }

    fn equation(&self) -> Equation {
        Equation::ThroughCrackFactor
    }
}

/// Elliptical crack shape factor Q ≈ 1 + 1.464(a/c)^1.65
#[inline]
pub fn shape_factor_q(aspect_ratio: f64) -> f64 {
    1.0 + 1.464 * aspect_ratio.powf(1.65)
}

/// Semi-elliptical surface crack, Newman-Raju deepest point (φ = π/2)
#[derive(Debug, Clone, Copy)]
pub struct SurfaceCrack {
    /// a/c
    pub aspect_ratio: f64,
}

impl GeometryFactor for SurfaceCrack {
    fn name(&self) -> &'static str {
        "Surface crack (Newman-Raju)"
    }

    fn max_relative_depth(&self) -> f64 {
        0.8
    }

    fn factor(&self, alpha: f64) -> f64 {
        let ac = self.aspect_ratio;
        let m1 = 1.13 - 0.09 * ac;
        let m2 = -0.54 + 0.89 / (0.2 + ac);
        let m3 = 0.5 - 1.0 / (0.65 + ac) + 14.0 * (1.0 - ac).powi(24);
        (m1 + m2 * alpha.powi(2) + m3 * alpha.powi(4)) / shape_factor_q(ac).sqrt()
    }

    fn equation(&self) -> Equation {
        Equation::SurfaceCrackFactor
    }
}

/// Embedded elliptical crack, Newman-Raju at the minor-axis end
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCrack {
    /// a/c
    pub aspect_ratio: f64,
}

impl GeometryFactor for EmbeddedCrack {
    fn name(&self) -> &'static str {
        "Embedded crack (Newman-Raju)"
    }

    fn max_relative_depth(&self) -> f64 {
        0.8
    }

    fn factor(&self, alpha: f64) -> f64 {
        let ac15 = self.aspect_ratio.powf(1.5);
        let m2 = 0.05 / (0.11 + ac15);
        let m3 = 0.29 / (0.23 + ac15);
        (1.0 + m2 * alpha.powi(2) + m3 * alpha.powi(4)) / shape_factor_q(self.aspect_ratio).sqrt()
    }

    fn equation(&self) -> Equation {
        Equation::EmbeddedCrackFactor
    }
}

/// Correlation for a crack's type (and shape, where it matters)
pub fn correlation_for(crack: &Crack) -> Box<dyn GeometryFactor + Send + Sync> {
    match crack.crack_type {
        CrackType::Edge => Box::new(EdgeCrack),
        CrackType::Through => Box::new(ThroughCrack),
        CrackType::Surface => Box::new(SurfaceCrack {
            aspect_ratio: crack.aspect_ratio,
        }),
        CrackType::Embedded => Box::new(EmbeddedCrack {
            aspect_ratio: crack.aspect_ratio,
        }),
    }
}

/// Largest crack size (m) for which the crack's correlation is valid
pub fn validity_limit_m(crack: &Crack, geometry: &RotorGeometry) -> f64 {
    correlation_for(crack).max_relative_depth() * crack.ligament_m(geometry)
}

/// Y(crack, geometry, a)
///
/// # Errors
/// * `InvalidInput` if `a` is not a positive number
/// * `GeometryOutOfRange` if a/W exceeds the correlation's validity limit
pub fn geometry_factor(crack: &Crack, geometry: &RotorGeometry, a: f64) -> CalcResult<f64> {
    let correlation = correlation_for(crack);
    factor_within_limit(correlation.as_ref(), crack.ligament_m(geometry), a)
}

/// Y for an already-selected correlation and ligament W, checking a
/// against the correlation's validity limit α_max·W.
pub fn factor_within_limit(correlation: &dyn GeometryFactor, ligament_m: f64, a: f64) -> CalcResult<f64> {
    if !a.is_finite() || a <= 0.0 {
        return Err(CalcError::invalid_input("a", a.to_string(), "Crack size must be positive"));
    }
    let alpha_max = correlation.max_relative_depth();
    // Compared in metres against the same product as the search limit, so
    // a = α_max·W is always inside the range
    if a > alpha_max * ligament_m {
        return Err(CalcError::geometry_out_of_range(
            correlation.name(),
            a / ligament_m,
            alpha_max,
        ));
    }
    Ok(correlation.factor((a / ligament_m).min(alpha_max)))
}

/// Mode-I stress intensity K = Y·σ·√(πa)
///
/// σ in MPa and a in m give K in MPa·√m.
#[inline]
pub fn stress_intensity(y: f64, sigma: f64, a: f64) -> f64 {
    y * sigma * (PI * a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CrackOrientation;

    fn disk() -> RotorGeometry {
        RotorGeometry::solid_disk(0.15, 0.02)
    }

    fn crack(crack_type: CrackType) -> Crack {
        Crack::new(0.10, 0.0005, crack_type, CrackOrientation::Radial)
    }

    #[test]
    fn test_small_crack_limits() {
        assert!((EdgeCrack.factor(0.0) - 1.12).abs() < 1e-12);
        assert!((ThroughCrack.factor(0.0) - 1.0).abs() < 1e-12);

        // Shallow surface crack a/c = 0.2: (1.13 - 0.018)/√1.1029 ≈ 1.059
        let surface = SurfaceCrack { aspect_ratio: 0.2 };
        assert!((surface.factor(0.0) - 1.0588).abs() < 1e-3);

        // Embedded penny crack: 1/√Q(1) = 1/√2.464 ≈ 0.637 (= 2/π for the exact solution)
        let penny = EmbeddedCrack { aspect_ratio: 1.0 };
        assert!((penny.factor(0.0) - 0.637).abs() < 0.01);
    }

    #[test]
    fn test_factors_grow_toward_boundary() {
        let correlations: Vec<Box<dyn GeometryFactor + Send + Sync>> = vec![
            Box::new(EdgeCrack),
            Box::new(ThroughCrack),
            Box::new(SurfaceCrack { aspect_ratio: 0.2 }),
            Box::new(SurfaceCrack { aspect_ratio: 1.0 }),
            Box::new(EmbeddedCrack { aspect_ratio: 0.2 }),
        ];
        for correlation in correlations {
            let near_zero = correlation.factor(0.05);
            let near_limit = correlation.factor(correlation.max_relative_depth());
            assert!(near_limit > near_zero, "{} does not increase", correlation.name());
        }
    }

    #[test]
    fn test_geometry_factor_uses_ligament() {
        // Ligament 0.05 m; a = 0.01 → α = 0.2
        let y = geometry_factor(&crack(CrackType::Edge), &disk(), 0.01).unwrap();
        assert!((y - EdgeCrack.factor(0.2)).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_raises() {
        // α = 0.035/0.05 = 0.7 > 0.6
        let err = geometry_factor(&crack(CrackType::Edge), &disk(), 0.035).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_OUT_OF_RANGE");

        // Same size is inside the through-crack range
        assert!(geometry_factor(&crack(CrackType::Through), &disk(), 0.035).is_ok());
    }

    #[test]
    fn test_validity_limit() {
        assert!((validity_limit_m(&crack(CrackType::Edge), &disk()) - 0.03).abs() < 1e-12);
        assert!((validity_limit_m(&crack(CrackType::Embedded), &disk()) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_limit_itself_is_in_range() {
        // W = 0.10 − 0.05; 0.8·W / W rounds above 0.8
        let disk = RotorGeometry::solid_disk(0.10, 0.02);
        for crack_type in CrackType::ALL {
            let crack = Crack::new(0.05, 0.0005, crack_type, CrackOrientation::Radial);
            let limit = validity_limit_m(&crack, &disk);
            let correlation = correlation_for(&crack);
            let y = geometry_factor(&crack, &disk, limit).unwrap();
            assert!((y - correlation.factor(correlation.max_relative_depth())).abs() < 1e-9);
            assert!(geometry_factor(&crack, &disk, limit * (1.0 + 1e-9)).is_err());
        }
    }

    #[test]
    fn test_stress_intensity() {
        // 1.12 × 48.5 × √(π × 0.0005) ≈ 2.153
        let k = stress_intensity(1.12, 48.5, 0.0005);
        assert!((k - 2.153).abs() < 1e-3);
    }

    #[test]
    fn test_non_positive_size_rejected() {
        assert!(geometry_factor(&crack(CrackType::Edge), &disk(), 0.0).is_err());
        assert!(geometry_factor(&crack(CrackType::Edge), &disk(), f64::NAN).is_err());
    }
}
