//! # Rotating Disk Stresses
//!
//! Closed-form centrifugal stresses in a disk or ring of uniform thickness
//! spinning about its axis. All formulas are the plane-stress solutions
//! (thin disk, σ_z = 0) of Timoshenko & Goodier, Theory of Elasticity,
//! §32. The generalized plane-strain variant (long cylinders) replaces ν by
//! ν/(1−ν) and is not used here.
//!
//! ## Notation
//!
//! - `ρ` = Density (kg/m³)
//! - `ω` = Angular velocity (rad/s)
//! - `ν` = Poisson ratio
//! - `r_o`, `r_i` = Outer and inner radius (m)
//! - `r` = Radius at which the stress is evaluated (m)
//! - `σ_θ` = Hoop (tangential) stress, `σ_r` = Radial stress (Pa)
//!
//! ## Boundary Conditions
//!
//! σ_r = 0 at every free edge: r = r_o for all shapes and r = r_i for the
//! annular disk.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{CrackOrientation, GeometryType, RotorGeometry};
use crate::units::{MegaPascals, Pascals};

// =============================================================================
// SOLID DISK
// =============================================================================

/// Hoop stress in a solid rotating disk
///
/// # Formula (Timoshenko & Goodier §32)
/// σ_θ(r) = (ρω²/8)·[(3+ν)r_o² − (1+3ν)r²]
#[inline]
pub fn solid_disk_hoop_stress(rho: f64, omega: f64, nu: f64, r_o: f64, r: f64) -> f64 {
    rho * omega * omega / 8.0 * ((3.0 + nu) * r_o * r_o - (1.0 + 3.0 * nu) * r * r)
}

/// Radial stress in a solid rotating disk
///
/// # Formula (Timoshenko & Goodier §32)
/// σ_r(r) = (ρω²/8)·(3+ν)(r_o² − r²)
#[inline]
pub fn solid_disk_radial_stress(rho: f64, omega: f64, nu: f64, r_o: f64, r: f64) -> f64 {
    rho * omega * omega / 8.0 * (3.0 + nu) * (r_o * r_o - r * r)
}

/// Peak stress in a solid disk, at the centre where σ_θ = σ_r
///
/// σ_max = (3+ν)ρω²r_o²/8
#[inline]
pub fn solid_disk_peak_stress(rho: f64, omega: f64, nu: f64, r_o: f64) -> f64 {
    (3.0 + nu) * rho * omega * omega * r_o * r_o / 8.0
}

// =============================================================================
// ANNULAR DISK
// =============================================================================

/// Hoop stress in a rotating annular disk
///
/// # Formula (Timoshenko & Goodier §32)
/// ```text
/// σ_θ(r) = ((3+ν)/8)·ρω²·[r_i² + r_o² + r_i²r_o²/r² − ((1+3ν)/(3+ν))·r²]
/// ```
#[inline]
pub fn annular_disk_hoop_stress(rho: f64, omega: f64, nu: f64, r_i: f64, r_o: f64, r: f64) -> f64 {
    let (ri2, ro2, r2) = (r_i * r_i, r_o * r_o, r * r);
    (3.0 + nu) / 8.0 * rho * omega * omega
        * (ri2 + ro2 + ri2 * ro2 / r2 - (1.0 + 3.0 * nu) / (3.0 + nu) * r2)
}

/// Radial stress in a rotating annular disk
///
/// # Formula (Timoshenko & Goodier §32)
/// ```text
/// σ_r(r) = ((3+ν)/8)·ρω²·[r_i² + r_o² − r_i²r_o²/r² − r²]
/// ```
/// Vanishes at both r = r_i and r = r_o.
#[inline]
pub fn annular_disk_radial_stress(rho: f64, omega: f64, nu: f64, r_i: f64, r_o: f64, r: f64) -> f64 {
    let (ri2, ro2, r2) = (r_i * r_i, r_o * r_o, r * r);
    (3.0 + nu) / 8.0 * rho * omega * omega * (ri2 + ro2 - ri2 * ro2 / r2 - r2)
}

/// Peak hoop stress in an annular disk, at the bore
///
/// σ_θ(r_i) = ((3+ν)/4)·ρω²·[r_o² + ((1−ν)/(3+ν))·r_i²]
#[inline]
pub fn annular_disk_bore_stress(rho: f64, omega: f64, nu: f64, r_i: f64, r_o: f64) -> f64 {
    (3.0 + nu) / 4.0 * rho * omega * omega * (r_o * r_o + (1.0 - nu) / (3.0 + nu) * r_i * r_i)
}

// =============================================================================
// THIN RING
// =============================================================================

/// Hoop stress in a thin rotating ring of mean radius R
///
/// σ_θ = ρω²R² (uniform through the wall, σ_r ≈ 0)
#[inline]
pub fn thin_ring_hoop_stress(rho: f64, omega: f64, r_mean: f64) -> f64 {
    rho * omega * omega * r_mean * r_mean
}

// =============================================================================
// STRESS STATE AT A RADIUS
// =============================================================================

/// In-plane stresses at one radius of the rotor (MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    /// Radius at which the stresses were evaluated (m)
    pub radius_m: f64,
    /// Hoop stress σ_θ (MPa)
    pub hoop_mpa: f64,
    /// Radial stress σ_r (MPa)
    pub radial_mpa: f64,
}

impl StressState {
    /// Stress component opening a crack of the given orientation
    pub fn opening_stress(&self, orientation: CrackOrientation) -> f64 {
        match orientation {
            CrackOrientation::Radial => self.hoop_mpa,
            CrackOrientation::Circumferential => self.radial_mpa,
        }
    }
}

/// Peak hoop stress anywhere in the rotor and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakStress {
    /// Peak hoop stress (MPa)
    pub stress_mpa: f64,
    /// Radius of the peak (m)
    pub radius_m: f64,
}

/// Evaluate the centrifugal stress state at `radius_m`.
///
/// # Arguments
/// * `geometry` - Rotor geometry (validated)
/// * `density` - ρ (kg/m³)
/// * `poisson` - ν
/// * `omega` - Angular velocity (rad/s)
/// * `radius_m` - Evaluation radius, r_i ≤ r ≤ r_o
pub fn stress_at(
    geometry: &RotorGeometry,
    density: f64,
    poisson: f64,
    omega: f64,
    radius_m: f64,
) -> CalcResult<StressState> {
    let (r_i, r_o) = (geometry.inner_radius_m, geometry.outer_radius_m);
    if !radius_m.is_finite() || radius_m < r_i || radius_m > r_o {
        return Err(CalcError::invalid_input(
            "radius_m",
            radius_m.to_string(),
            format!("Stress radius must lie within the rotor ({} m to {} m)", r_i, r_o),
        ));
    }

    let (hoop_pa, radial_pa) = match geometry.geometry_type {
        GeometryType::SolidDisk => (
            solid_disk_hoop_stress(density, omega, poisson, r_o, radius_m),
            solid_disk_radial_stress(density, omega, poisson, r_o, radius_m),
        ),
        GeometryType::AnnularDisk => (
            annular_disk_hoop_stress(density, omega, poisson, r_i, r_o, radius_m),
            annular_disk_radial_stress(density, omega, poisson, r_i, r_o, radius_m),
        ),
        GeometryType::ThinRing => (
            thin_ring_hoop_stress(density, omega, geometry.mean_radius_m()),
            0.0,
        ),
    };

    Ok(StressState {
        radius_m,
        hoop_mpa: MegaPascals::from(Pascals(hoop_pa)).value(),
        radial_mpa: MegaPascals::from(Pascals(radial_pa)).value(),
    })
}

/// Peak hoop stress for the rotor geometry
pub fn peak_hoop_stress(geometry: &RotorGeometry, density: f64, poisson: f64, omega: f64) -> PeakStress {
    let (r_i, r_o) = (geometry.inner_radius_m, geometry.outer_radius_m);
    let (stress_pa, radius_m) = match geometry.geometry_type {
        GeometryType::SolidDisk => (solid_disk_peak_stress(density, omega, poisson, r_o), 0.0),
        GeometryType::AnnularDisk => (annular_disk_bore_stress(density, omega, poisson, r_i, r_o), r_i),
        GeometryType::ThinRing => (
            thin_ring_hoop_stress(density, omega, geometry.mean_radius_m()),
            geometry.mean_radius_m(),
        ),
    };
    PeakStress {
        stress_mpa: MegaPascals::from(Pascals(stress_pa)).value(),
        radius_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RHO: f64 = 1600.0;
    const NU: f64 = 0.3;
    // 20,000 rpm
    const OMEGA: f64 = 2094.3951023931954;

    fn approx(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1e-12)
    }

    #[test]
    fn test_solid_disk_center_is_equibiaxial() {
        let hoop = solid_disk_hoop_stress(RHO, OMEGA, NU, 0.15, 0.0);
        let radial = solid_disk_radial_stress(RHO, OMEGA, NU, 0.15, 0.0);
        assert!(approx(hoop, radial, 1e-12));
        assert!(approx(hoop, solid_disk_peak_stress(RHO, OMEGA, NU, 0.15), 1e-12));
    }

    #[test]
    fn test_solid_disk_rim_radial_free() {
        assert!(solid_disk_radial_stress(RHO, OMEGA, NU, 0.15, 0.15).abs() < 1e-6);
        // σ_θ(r_o) = (1-ν)/4 ρω² r_o²
        let rim = solid_disk_hoop_stress(RHO, OMEGA, NU, 0.15, 0.15);
        let expected = (1.0 - NU) / 4.0 * RHO * OMEGA * OMEGA * 0.15 * 0.15;
        assert!(approx(rim, expected, 1e-12));
    }

    #[test]
    fn test_solid_disk_hand_value() {
        // ρω²/8 = 8.773e8; [(3.3)(0.0225) - (1.9)(0.01)] = 0.05525 → 48.47 MPa
        let state = stress_at(&RotorGeometry::solid_disk(0.15, 0.02), RHO, NU, OMEGA, 0.10).unwrap();
        assert!((state.hoop_mpa - 48.47).abs() < 0.05);
        assert!(state.radial_mpa > 0.0 && state.radial_mpa < state.hoop_mpa);
    }

    #[test]
    fn test_annular_disk_free_edges() {
        let (ri, ro) = (0.03, 0.15);
        assert!(annular_disk_radial_stress(RHO, OMEGA, NU, ri, ro, ri).abs() < 1e-3);
        assert!(annular_disk_radial_stress(RHO, OMEGA, NU, ri, ro, ro).abs() < 1e-3);
        let bore = annular_disk_hoop_stress(RHO, OMEGA, NU, ri, ro, ri);
        assert!(approx(bore, annular_disk_bore_stress(RHO, OMEGA, NU, ri, ro), 1e-12));
    }

    #[test]
    fn test_small_bore_doubles_center_stress() {
        // Pin-hole bore: bore hoop stress → 2× solid-disk centre stress
        let solid = solid_disk_peak_stress(RHO, OMEGA, NU, 0.15);
        let bore = annular_disk_bore_stress(RHO, OMEGA, NU, 1e-6, 0.15);
        assert!(approx(bore, 2.0 * solid, 1e-6));
    }

    #[test]
    fn test_thin_ring() {
        let ring = RotorGeometry::thin_ring(0.14, 0.15, 0.01);
        let state = stress_at(&ring, RHO, NU, OMEGA, 0.145).unwrap();
        let expected = RHO * OMEGA * OMEGA * 0.145 * 0.145 / 1.0e6;
        assert!(approx(state.hoop_mpa, expected, 1e-12));
        assert_eq!(state.radial_mpa, 0.0);
    }

    #[test]
    fn test_opening_stress_follows_orientation() {
        let state = StressState {
            radius_m: 0.1,
            hoop_mpa: 40.0,
            radial_mpa: 25.0,
        };
        assert_eq!(state.opening_stress(CrackOrientation::Radial), 40.0);
        assert_eq!(state.opening_stress(CrackOrientation::Circumferential), 25.0);
    }

    #[test]
    fn test_radius_outside_rotor_rejected() {
        let disk = RotorGeometry::annular_disk(0.03, 0.15, 0.02);
        assert!(stress_at(&disk, RHO, NU, OMEGA, 0.01).is_err());
        assert!(stress_at(&disk, RHO, NU, OMEGA, 0.20).is_err());
    }

    #[test]
    fn test_peak_location() {
        let disk = RotorGeometry::annular_disk(0.03, 0.15, 0.02);
        let peak = peak_hoop_stress(&disk, RHO, NU, OMEGA);
        assert_eq!(peak.radius_m, 0.03);
        let at_mid = stress_at(&disk, RHO, NU, OMEGA, 0.09).unwrap();
        assert!(peak.stress_mpa > at_mid.hoop_mpa);
    }
}
