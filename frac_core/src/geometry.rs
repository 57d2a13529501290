//! # Rotor and Crack Geometry
//!
//! Input descriptions of the spinning component and of the pre-existing
//! crack. Both are plain data with `validate()` methods; all dimensions are
//! in metres.
//!
//! ```text
//!        r_i        r_a   a0 →      r_o
//!   ──────┼──────────┼━━━━━┼─────────┼──
//!   bore  │          │crack│ ligament│ rim
//!                    └─ r_o − r_a ───┘
//! ```
//!
//! The crack starts at the location radius r_a and grows outward toward the
//! rim, so the remaining ligament r_o − r_a bounds every crack size.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Wall-to-radius ratio above which the thin-ring idealization is questionable
pub const THIN_RING_MAX_WALL_RATIO: f64 = 0.2;

/// Default crack depth-to-half-length ratio a/c for surface and embedded cracks
pub const DEFAULT_ASPECT_RATIO: f64 = 0.2;

/// Rotor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryType {
    /// Solid disk (no bore)
    SolidDisk,
    /// Disk with a central bore
    AnnularDisk,
    /// Thin rotating ring (rim)
    ThinRing,
}

impl GeometryType {
    pub const ALL: [GeometryType; 3] = [
        GeometryType::SolidDisk,
        GeometryType::AnnularDisk,
        GeometryType::ThinRing,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GeometryType::SolidDisk => "Solid disk",
            GeometryType::AnnularDisk => "Annular disk",
            GeometryType::ThinRing => "Thin ring",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rotor geometry.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry_type": "annular_disk",
///   "outer_radius_m": 0.15,
///   "inner_radius_m": 0.03,
///   "thickness_m": 0.02
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotorGeometry {
    /// Solid disk, annular disk, or thin ring
    pub geometry_type: GeometryType,
    /// Outer radius r_o (m)
    pub outer_radius_m: f64,
    /// Inner (bore) radius r_i (m), 0 for a solid disk
    #[serde(default)]
    pub inner_radius_m: f64,
    /// Axial thickness (m)
    pub thickness_m: f64,
}

impl RotorGeometry {
    /// Solid disk of the given outer radius and thickness
    pub fn solid_disk(outer_radius_m: f64, thickness_m: f64) -> Self {
        Self {
            geometry_type: GeometryType::SolidDisk,
            outer_radius_m,
            inner_radius_m: 0.0,
            thickness_m,
        }
    }

    /// Annular disk with a central bore
    pub fn annular_disk(inner_radius_m: f64, outer_radius_m: f64, thickness_m: f64) -> Self {
        Self {
            geometry_type: GeometryType::AnnularDisk,
            outer_radius_m,
            inner_radius_m,
            thickness_m,
        }
    }

    /// Thin ring between two radii
    pub fn thin_ring(inner_radius_m: f64, outer_radius_m: f64, thickness_m: f64) -> Self {
        Self {
            geometry_type: GeometryType::ThinRing,
            outer_radius_m,
            inner_radius_m,
            thickness_m,
        }
    }

    /// Validate dimensions. Requires 0 ≤ r_i < r_o and positive thickness.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.outer_radius_m.is_finite() || self.outer_radius_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.outer_radius_m",
                self.outer_radius_m.to_string(),
                "Outer radius must be positive",
            ));
        }
        if !self.inner_radius_m.is_finite() || self.inner_radius_m < 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.inner_radius_m",
                self.inner_radius_m.to_string(),
                "Inner radius cannot be negative",
            ));
        }
        if self.inner_radius_m >= self.outer_radius_m {
            return Err(CalcError::invalid_input(
                "geometry.inner_radius_m",
                self.inner_radius_m.to_string(),
                "Inner radius must be smaller than the outer radius",
            ));
        }
        if !self.thickness_m.is_finite() || self.thickness_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.thickness_m",
                self.thickness_m.to_string(),
                "Thickness must be positive",
            ));
        }
        match self.geometry_type {
            GeometryType::SolidDisk if self.inner_radius_m != 0.0 => Err(CalcError::invalid_input(
                "geometry.inner_radius_m",
                self.inner_radius_m.to_string(),
                "A solid disk has no bore; use annular_disk for r_i > 0",
            )),
            GeometryType::AnnularDisk | GeometryType::ThinRing if self.inner_radius_m == 0.0 => {
                Err(CalcError::invalid_input(
                    "geometry.inner_radius_m",
                    "0",
                    "Annular disks and rings need a positive inner radius",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Mean radius (r_i + r_o)/2
    pub fn mean_radius_m(&self) -> f64 {
        0.5 * (self.inner_radius_m + self.outer_radius_m)
    }

    /// Radial wall (r_o − r_i) as a fraction of the outer radius
    pub fn wall_ratio(&self) -> f64 {
        (self.outer_radius_m - self.inner_radius_m) / self.outer_radius_m
    }

    /// True when a thin ring is too thick for the thin-ring stress idealization
    pub fn exceeds_thin_ring_proportions(&self) -> bool {
        self.geometry_type == GeometryType::ThinRing && self.wall_ratio() > THIN_RING_MAX_WALL_RATIO
    }
}

/// Crack shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackType {
    /// Edge crack breaking a free surface, depth a
    Edge,
    /// Through-thickness crack, half-length a
    Through,
    /// Semi-elliptical surface crack, depth a
    Surface,
    /// Embedded elliptical crack, half-depth a
    Embedded,
}

impl CrackType {
    pub const ALL: [CrackType; 4] = [
        CrackType::Edge,
        CrackType::Through,
        CrackType::Surface,
        CrackType::Embedded,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CrackType::Edge => "Edge crack",
            CrackType::Through => "Through crack",
            CrackType::Surface => "Surface crack",
            CrackType::Embedded => "Embedded crack",
        }
    }

    /// Whether the crack-front shape (a/c) enters the correlation
    pub fn uses_aspect_ratio(&self) -> bool {
        matches!(self, CrackType::Surface | CrackType::Embedded)
    }
}

impl std::fmt::Display for CrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Crack plane orientation
///
/// A radial crack lies in a plane containing the rotation axis and is opened
/// by hoop stress. A circumferential crack lies on a cylinder of constant
/// radius and is opened by radial stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackOrientation {
    Radial,
    Circumferential,
}

impl CrackOrientation {
    pub fn display_name(&self) -> &'static str {
        match self {
            CrackOrientation::Radial => "Radial",
            CrackOrientation::Circumferential => "Circumferential",
        }
    }
}

fn default_aspect_ratio() -> f64 {
    DEFAULT_ASPECT_RATIO
}

/// Pre-existing crack.
///
/// ## JSON Example
///
/// ```json
/// {
///   "location_radius_m": 0.10,
///   "initial_size_m": 0.0005,
///   "crack_type": "edge",
///   "orientation": "radial"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crack {
    /// Radius r_a at which the crack sits (m)
    pub location_radius_m: f64,
    /// Initial crack size a0 (m): depth for edge/surface, half-length for
    /// through, half-depth for embedded
    pub initial_size_m: f64,
    /// Crack shape
    pub crack_type: CrackType,
    /// Crack plane orientation
    pub orientation: CrackOrientation,
    /// Depth-to-half-length ratio a/c (surface and embedded cracks only)
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
}

impl Crack {
    /// Crack with the default aspect ratio
    pub fn new(
        location_radius_m: f64,
        initial_size_m: f64,
        crack_type: CrackType,
        orientation: CrackOrientation,
    ) -> Self {
        Self {
            location_radius_m,
            initial_size_m,
            crack_type,
            orientation,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }

    /// Remaining ligament r_o − r_a (m)
    pub fn ligament_m(&self, geometry: &RotorGeometry) -> f64 {
        geometry.outer_radius_m - self.location_radius_m
    }

    /// Validate against the rotor geometry.
    ///
    /// The initial size must be strictly smaller than the remaining
    /// ligament; a crack that already spans the ligament is an input error,
    /// never a computed result.
    pub fn validate(&self, geometry: &RotorGeometry) -> CalcResult<()> {
        let r_a = self.location_radius_m;
        if !r_a.is_finite() || r_a < geometry.inner_radius_m || r_a > geometry.outer_radius_m {
            return Err(CalcError::invalid_input(
                "crack.location_radius_m",
                r_a.to_string(),
                format!(
                    "Crack location must lie between r_i = {} m and r_o = {} m",
                    geometry.inner_radius_m, geometry.outer_radius_m
                ),
            ));
        }
        if !self.initial_size_m.is_finite() || self.initial_size_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "crack.initial_size_m",
                self.initial_size_m.to_string(),
                "Initial crack size must be positive",
            ));
        }
        let ligament = self.ligament_m(geometry);
        if self.initial_size_m >= ligament {
            return Err(CalcError::invalid_input(
                "crack.initial_size_m",
                self.initial_size_m.to_string(),
                format!("Initial crack size must be smaller than the remaining ligament ({} m)", ligament),
            ));
        }
        if self.crack_type.uses_aspect_ratio()
            && (!self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 || self.aspect_ratio > 1.0)
        {
            return Err(CalcError::invalid_input(
                "crack.aspect_ratio",
                self.aspect_ratio.to_string(),
                "Aspect ratio a/c must satisfy 0 < a/c <= 1",
            ));
        }
        Ok(())
    }
}
