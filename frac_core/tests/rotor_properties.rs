use std::f64::consts::PI;

use frac_core::calculations::fatigue::{FatigueModel, LifeEndpoint, LifePrediction};
use frac_core::calculations::fracture::{CrackDriver, CriticalCrack};
use frac_core::calculations::report::{Advisory, Recommendation};
use frac_core::equations::geometry_factor;
use frac_core::geometry::{Crack, CrackOrientation, CrackType, GeometryType, RotorGeometry};
use frac_core::materials::{FractureMaterial, MaterialSource, ParisLaw};
use frac_core::{calculate, AnalysisConfig, CalcError, LoadCase, RotorFractureInput};

fn cfrp_disk() -> RotorFractureInput {
    RotorFractureInput {
        label: "CFRP flywheel".to_string(),
        material: MaterialSource::preset("CFRP"),
        geometry: RotorGeometry::solid_disk(0.15, 0.02),
        crack: Crack::new(0.10, 0.0005, CrackType::Edge, CrackOrientation::Radial),
        load: LoadCase { speed_rpm: 20_000.0 },
        config: AnalysisConfig::default(),
    }
}

fn cfrp_like(toughness: f64, coefficient: f64) -> MaterialSource {
    MaterialSource::Custom(FractureMaterial {
        name: "CFRP coupon".to_string(),
        fracture_toughness_mpa_sqrt_m: toughness,
        paris: ParisLaw {
            coefficient,
            exponent: 3.0,
        },
        elastic_modulus_gpa: 70.0,
        poisson_ratio: 0.3,
        density_kg_m3: 1600.0,
    })
}

fn geometry_for(geometry_type: GeometryType) -> (RotorGeometry, f64) {
    match geometry_type {
        GeometryType::SolidDisk => (RotorGeometry::solid_disk(0.15, 0.02), 0.10),
        GeometryType::AnnularDisk => (RotorGeometry::annular_disk(0.03, 0.15, 0.02), 0.05),
        GeometryType::ThinRing => (RotorGeometry::thin_ring(0.13, 0.15, 0.02), 0.135),
    }
}

fn relative_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs()
}

#[test]
fn cfrp_disk_reference_case() {
    let result = calculate(&cfrp_disk()).expect("reference case");

    assert!(relative_diff(result.stress_at_crack.hoop_mpa, 48.47) < 1e-3);
    assert!(relative_diff(result.k_initial, 2.149) < 2e-3);
    assert!(result.fracture_safety_factor > 11.0 && result.fracture_safety_factor < 12.0);

    let a_c = result.critical_crack_size_m().expect("critical size");
    assert!(a_c > 0.0005 && a_c < 0.03, "a_c = {}", a_c);
    assert!(matches!(result.critical_crack, CriticalCrack::Reached { .. }));

    match result.life {
        LifePrediction::Finite { cycles, endpoint, .. } => {
            assert!(cycles > 0.0);
            assert_eq!(endpoint, LifeEndpoint::Fracture);
        }
        other => panic!("expected finite life, got {:?}", other),
    }
    assert!(result.passes());
}

#[test]
fn fracture_safety_factor_is_toughness_over_initial_k() {
    for speed_rpm in [5_000.0, 20_000.0, 35_000.0] {
        let mut input = cfrp_disk();
        input.load.speed_rpm = speed_rpm;
        let result = calculate(&input).expect("calc");
        let expected = result.material.fracture_toughness_mpa_sqrt_m / result.k_initial;
        assert!(relative_diff(result.fracture_safety_factor, expected) < 1e-12);
    }
}

#[test]
fn stress_intensity_at_critical_size_equals_toughness() {
    let toughness = 10.0;
    for geometry_type in GeometryType::ALL {
        let (geometry, location) = geometry_for(geometry_type);
        for crack_type in CrackType::ALL {
            for orientation in [CrackOrientation::Radial, CrackOrientation::Circumferential] {
                // No radial stress across a thin ring
                if geometry_type == GeometryType::ThinRing && orientation == CrackOrientation::Circumferential {
                    continue;
                }
                let input = RotorFractureInput {
                    label: String::new(),
                    material: cfrp_like(toughness, 1e-11),
                    geometry: geometry.clone(),
                    crack: Crack::new(location, 0.0005, crack_type, orientation),
                    load: LoadCase { speed_rpm: 20_000.0 },
                    config: AnalysisConfig::default(),
                };
                let result = calculate(&input).expect("calc");

                let a_c = match result.critical_crack {
                    CriticalCrack::Reached { size_m, .. } => size_m,
                    other => panic!("{:?} {:?} {:?}: {:?}", geometry_type, crack_type, orientation, other),
                };
                let y = geometry_factor(&input.crack, &input.geometry, a_c).expect("Y(a_c)");
                let k = y * result.opening_stress_mpa * (PI * a_c).sqrt();
                assert!(
                    relative_diff(k, toughness) < 1e-5,
                    "{:?} {:?} {:?}: K(a_c) = {}",
                    geometry_type,
                    crack_type,
                    orientation,
                    k
                );
            }
        }
    }
}

#[test]
fn life_decreases_with_initial_size() {
    let mut previous = f64::INFINITY;
    for a0 in [0.0003, 0.0005, 0.001, 0.002, 0.004] {
        let mut input = cfrp_disk();
        input.crack.initial_size_m = a0;
        let cycles = calculate(&input).expect("calc").cycles_to_failure().expect("finite life");
        assert!(cycles < previous, "a0 = {}: {} >= {}", a0, cycles, previous);
        previous = cycles;
    }
}

#[test]
fn doubling_paris_coefficient_halves_life() {
    let mut input = cfrp_disk();
    input.material = cfrp_like(25.0, 1e-11);
    let base = calculate(&input).expect("calc").cycles_to_failure().expect("finite");

    input.material = cfrp_like(25.0, 2e-11);
    let doubled = calculate(&input).expect("calc").cycles_to_failure().expect("finite");

    assert!(relative_diff(base / doubled, 2.0) < 1e-9);
}

#[test]
fn life_stays_within_constant_geometry_factor_bounds() {
    let input = cfrp_disk();
    let result = calculate(&input).expect("calc");
    let a0 = input.crack.initial_size_m;
    let a_c = result.critical_crack_size_m().expect("a_c");
    let cycles = result.cycles_to_failure().expect("finite");

    // N = 2 / (C (Y Δσ √π)^3) (a0^-1/2 − a_c^-1/2) for constant Y, m = 3
    let bound = |y: f64| {
        let k_coeff = y * result.stress_range_mpa * PI.sqrt();
        2.0 / (1e-11 * k_coeff.powi(3)) * (a0.powf(-0.5) - a_c.powf(-0.5))
    };
    let y_min = 0.99 * result.geometry_factor_initial;
    let y_max = geometry_factor(&input.crack, &input.geometry, a_c).expect("Y(a_c)");

    assert!(cycles < bound(y_min), "{} >= {}", cycles, bound(y_min));
    assert!(cycles > bound(y_max), "{} <= {}", cycles, bound(y_max));
}

#[test]
fn crack_at_critical_size_has_no_remaining_life() {
    let input = cfrp_disk();
    let result = calculate(&input).expect("calc");
    let a_c = result.critical_crack_size_m().expect("a_c");
    let full_life = result.cycles_to_failure().expect("finite");

    let driver = CrackDriver::new(&input.geometry, &input.crack, result.opening_stress_mpa);
    let model = FatigueModel::new(
        &driver,
        result.material.paris,
        result.stress_range_mpa,
        input.config.solver.quadrature(),
    );
    assert_eq!(model.cycles_between(a_c, a_c).expect("integral"), 0.0);

    let mut at_critical = input.clone();
    at_critical.crack.initial_size_m = a_c;
    let rerun = calculate(&at_critical).expect("calc");
    assert!(full_life > 0.0);
    assert_eq!(rerun.cycles_to_failure(), Some(0.0));
}

#[test]
fn stress_ratio_near_one_predicts_no_growth() {
    let mut input = cfrp_disk();
    input.config.stress_ratio = 1.0 - 1e-9;
    let result = calculate(&input).expect("calc");

    assert_eq!(result.life, LifePrediction::NoFiniteGrowth);
    assert_eq!(result.cycles_to_failure(), None);
    assert_eq!(result.life_safety_factor, None);
    assert!(result.advisories.contains(&Advisory::NoFiniteLifeGrowth));

    input.config.stress_ratio = 0.9;
    let high_r = calculate(&input).expect("calc").cycles_to_failure().expect("finite");
    let default_r = calculate(&cfrp_disk()).expect("calc").cycles_to_failure().expect("finite");
    assert!(high_r > default_r);
}

#[test]
fn calculation_is_idempotent() {
    let input = cfrp_disk();
    let first = calculate(&input).expect("calc");
    let second = calculate(&input).expect("calc");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("json"),
        serde_json::to_string(&second).expect("json")
    );
}

#[test]
fn crack_longer_than_ligament_is_rejected() {
    let mut input = cfrp_disk();
    input.crack.initial_size_m = 0.06;
    assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
}

#[test]
fn crack_beyond_correlation_limit_is_out_of_range() {
    let mut input = cfrp_disk();
    input.crack.initial_size_m = 0.035;
    let err = calculate(&input).unwrap_err();
    assert_eq!(err.error_code(), "GEOMETRY_OUT_OF_RANGE");
}

#[test]
fn exhausted_root_budget_reports_non_convergence() {
    let mut input = cfrp_disk();
    input.config.solver.root_rel_tol = 1e-14;
    input.config.solver.root_max_iter = 1;
    let err = calculate(&input).unwrap_err();
    assert!(matches!(err, CalcError::NonConvergence { .. }), "{:?}", err);
}

#[test]
fn error_serializes_with_type_tag() {
    let mut input = cfrp_disk();
    input.material = MaterialSource::preset("Unobtainium");
    let err = calculate(&input).unwrap_err();
    let json = serde_json::to_value(&err).expect("json");
    assert_eq!(json["type"], "MaterialNotFound");
    assert_eq!(json["details"]["material_name"], "Unobtainium");
}

#[test]
fn search_limit_on_round_ligament_is_in_range() {
    // W = 0.10 − 0.05 m: the search limit 0.8·W must itself be a valid size
    for crack_type in [CrackType::Through, CrackType::Surface, CrackType::Embedded] {
        let input = RotorFractureInput {
            label: String::new(),
            material: MaterialSource::preset("CFRP"),
            geometry: RotorGeometry::solid_disk(0.10, 0.02),
            crack: Crack::new(0.05, 0.0005, crack_type, CrackOrientation::Radial),
            load: LoadCase { speed_rpm: 20_000.0 },
            config: AnalysisConfig::default(),
        };
        let result = calculate(&input).unwrap_or_else(|e| panic!("{:?}: {}", crack_type, e));
        assert!(result.fracture_safety_factor > 1.0);
    }
}

#[test]
fn extreme_overspeed_is_already_critical() {
    let mut input = cfrp_disk();
    input.load.speed_rpm = 5.0e6;
    let result = calculate(&input).expect("calc");

    let a_c = match result.critical_crack {
        CriticalCrack::AlreadyCritical { size_m, .. } => size_m,
        other => panic!("expected AlreadyCritical, got {:?}", other),
    };
    assert!(a_c < 1e-6 * input.crack.initial_size_m);
    assert_eq!(result.cycles_to_failure(), Some(0.0));
    assert_eq!(result.recommendations.first(), Some(&Recommendation::RemoveFromService));
}

#[test]
fn uncritical_crack_is_followed_to_design_life() {
    let mut input = cfrp_disk();
    input.load.speed_rpm = 5_000.0;
    let result = calculate(&input).expect("calc");

    assert!(matches!(result.critical_crack, CriticalCrack::NotReached { .. }));
    let crack_size_m = match result.life {
        LifePrediction::DesignLifeReached {
            design_life_cycles,
            crack_size_m,
        } => {
            assert_eq!(design_life_cycles, input.config.design_life_cycles);
            crack_size_m
        }
        other => panic!("expected DesignLifeReached, got {:?}", other),
    };
    assert!(crack_size_m > input.crack.initial_size_m);
    assert_eq!(result.crack_size_at_design_life_m, Some(crack_size_m));
    assert_eq!(result.cycles_to_failure(), None);
    assert_eq!(result.life_safety_factor, None);
    assert_eq!(result.inspection_interval_cycles, None);
    assert!(!result
        .recommendations
        .iter()
        .any(|r| matches!(r, Recommendation::ScheduleInspection { .. })));
    assert!(result
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::DesignLifeWithoutCriticality { .. })));
    assert!(result.passes());

    let last = result.growth_curve.last().expect("curve");
    assert_eq!(last.crack_size_m, crack_size_m);
    let cycles = last.cycles.expect("cycles");
    assert!((cycles / input.config.design_life_cycles - 1.0).abs() < 1e-4);
}

#[test]
fn correlation_limit_inside_design_life_is_not_a_failure() {
    let mut input = cfrp_disk();
    input.load.speed_rpm = 5_000.0;
    input.config.design_life_cycles = 1.0e13;
    let result = calculate(&input).expect("calc");

    match result.life {
        LifePrediction::Finite { cycles, endpoint, .. } => {
            assert_eq!(endpoint, LifeEndpoint::SearchLimit);
            assert!(cycles < input.config.design_life_cycles);
        }
        other => panic!("expected limit-bounded life, got {:?}", other),
    }
    assert_eq!(result.cycles_to_failure(), None);
    assert_eq!(result.crack_size_at_design_life_m, None);
    assert!(result
        .advisories
        .iter()
        .any(|a| matches!(a, Advisory::CorrelationLimitBeforeDesignLife { .. })));
    assert!(!result.passes());
}
