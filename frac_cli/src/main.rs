//! # Spinfrac CLI Application
//!
//! Command-line front end for the rotor fracture and fatigue engine.
//!
//! ```text
//! frac_cli                          # built-in demo: CFRP disk at 20,000 rpm
//! frac_cli --input rotor.json       # analyse a JSON input file
//! frac_cli --input rotor.json --json --save report.json
//! frac_cli --list-materials
//! RUST_LOG=debug frac_cli           # solver traces
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use frac_core::calculations::fatigue::{LifeEndpoint, LifePrediction};
use frac_core::calculations::fracture::CriticalCrack;
use frac_core::calculations::rotor::{calculate, AnalysisConfig, LoadCase, RotorFractureInput, RotorFractureResult};
use frac_core::errors::{CalcError, CalcResult};
use frac_core::file_io::{load_input, save_report, SavedReport};
use frac_core::geometry::{Crack, CrackOrientation, CrackType, RotorGeometry};
use frac_core::materials::{MaterialPreset, MaterialSource};
use frac_core::units::{Meters, Millimeters};

/// Fracture and fatigue assessment of a cracked spinning disk or ring
#[derive(Parser, Debug)]
#[command(name = "frac_cli", version, about)]
struct Cli {
    /// Analysis input (JSON). Runs the built-in demo when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Save input and result to a report file
    #[arg(short, long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// List the built-in material presets and exit
    #[arg(long)]
    list_materials: bool,
}

/// CFRP solid disk, r_o = 150 mm, 20,000 rpm, 0.5 mm radial edge crack at r = 100 mm
fn demo_input() -> RotorFractureInput {
    RotorFractureInput {
        label: "Demo: CFRP flywheel disk".to_string(),
        material: MaterialSource::preset("CFRP"),
        geometry: RotorGeometry::solid_disk(0.15, 0.02),
        crack: Crack::new(0.10, 0.0005, CrackType::Edge, CrackOrientation::Radial),
        load: LoadCase { speed_rpm: 20_000.0 },
        config: AnalysisConfig::default(),
    }
}

fn mm(meters: f64) -> f64 {
    Millimeters::from(Meters(meters)).value()
}

fn list_materials() {
    println!(
        "{:<16} {:>10} {:>10} {:>6} {:>8} {:>6} {:>8}",
        "Material", "K_IC", "C", "m", "E (GPa)", "nu", "rho"
    );
    for preset in MaterialPreset::ALL {
        let p = preset.properties();
        println!(
            "{:<16} {:>10.1} {:>10.1e} {:>6.1} {:>8.1} {:>6.2} {:>8.0}",
            p.name,
            p.fracture_toughness_mpa_sqrt_m,
            p.paris.coefficient,
            p.paris.exponent,
            p.elastic_modulus_gpa,
            p.poisson_ratio,
            p.density_kg_m3
        );
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[CHECK]"
    }
}

fn print_report(input: &RotorFractureInput, result: &RotorFractureResult) {
    let config = &input.config;

    println!("═══════════════════════════════════════════════");
    println!("  ROTOR FRACTURE ASSESSMENT: {}", result.label);
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Material:  {}", result.material.name);
    println!(
        "  Geometry:  {} (r_i = {:.1} mm, r_o = {:.1} mm)",
        input.geometry.geometry_type,
        mm(input.geometry.inner_radius_m),
        mm(input.geometry.outer_radius_m)
    );
    println!(
        "  Crack:     {} {}, a0 = {:.3} mm at r = {:.1} mm",
        input.crack.orientation.display_name(),
        input.crack.crack_type,
        mm(input.crack.initial_size_m),
        mm(input.crack.location_radius_m)
    );
    println!(
        "  Speed:     {:.0} rpm (ω = {:.1} rad/s), R = {}",
        input.load.speed_rpm, result.angular_velocity_rad_s, config.stress_ratio
    );
    println!();
    println!("Stresses:");
    println!(
        "  σ_θ = {:.2} MPa, σ_r = {:.2} MPa at the crack",
        result.stress_at_crack.hoop_mpa, result.stress_at_crack.radial_mpa
    );
    println!(
        "  Peak hoop stress {:.2} MPa at r = {:.1} mm",
        result.peak_stress.stress_mpa,
        mm(result.peak_stress.radius_m)
    );
    println!("  Δσ = {:.2} MPa", result.stress_range_mpa);
    println!();
    println!("Fracture ({}):", result.correlation);
    println!("  Y(a0)   = {:.4}", result.geometry_factor_initial);
    println!("  K_I(a0) = {:.3} MPa√m", result.k_initial);
    println!("  G(a0)   = {:.4} kJ/m²", result.energy_release_rate_kj_m2);
    match result.critical_crack {
        CriticalCrack::Reached { size_m, .. } => println!("  a_c     = {:.3} mm", mm(size_m)),
        CriticalCrack::AlreadyCritical { size_m, .. } => {
            println!("  a_c     = {:.3} mm (already exceeded by a0)", mm(size_m))
        }
        CriticalCrack::NotReached { search_limit_m, .. } => {
            println!("  a_c     = not reached within {:.3} mm", mm(search_limit_m))
        }
    }
    println!(
        "  SF      = {:.2} (required {:.2}) {}",
        result.fracture_safety_factor,
        config.required_fracture_sf,
        status_icon(result.fracture_safety_factor >= config.required_fracture_sf)
    );
    println!();
    println!("Fatigue:");
    match result.life {
        LifePrediction::Finite {
            cycles,
            end_size_m,
            endpoint,
        } => {
            let to = match endpoint {
                LifeEndpoint::Fracture => "fracture",
                LifeEndpoint::SearchLimit => "correlation limit, no fracture",
            };
            println!("  N       = {:.4e} cycles (to {} at {:.3} mm)", cycles, to, mm(end_size_m));
        }
        LifePrediction::DesignLifeReached {
            design_life_cycles,
            crack_size_m,
        } => println!(
            "  N       > {:.0} cycles (design life reached without criticality, a = {:.3} mm)",
            design_life_cycles,
            mm(crack_size_m)
        ),
        LifePrediction::NoFiniteGrowth => println!("  N       = no finite-life growth predicted"),
    }
    if let Some(sf) = result.life_safety_factor {
        println!(
            "  SF_life = {:.2} (required {:.2}) {}",
            sf,
            config.required_life_sf,
            status_icon(sf >= config.required_life_sf)
        );
    }
    if let Some(interval) = result.inspection_interval_cycles {
        println!("  Inspect every {:.0} cycles", interval);
    }
    if let Some(size) = result.crack_size_at_design_life_m {
        println!(
            "  Crack size after {:.0} cycles: {:.3} mm",
            config.design_life_cycles,
            mm(size)
        );
    }

    if !result.advisories.is_empty() {
        println!();
        println!("Advisories:");
        for advisory in &result.advisories {
            println!("  - {}", advisory.message());
        }
    }
    if !result.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &result.recommendations {
            println!("  - {}", recommendation.message());
        }
    }

    println!();
    println!("Derivation:");
    for step in &result.derivation {
        println!("  {} = {}", step.symbol, step.formula);
        println!("      = {}", step.substituted);
        println!("      = {:.6e} {}", step.value, step.units);
    }

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  RESULT: {} (governs: {:?})", result.status, result.governing);
    println!("═══════════════════════════════════════════════");
}

fn run(cli: &Cli) -> CalcResult<()> {
    let input = match &cli.input {
        Some(path) => {
            info!("Loading input from {}", path.display());
            load_input(path)?
        }
        None => demo_input(),
    };

    let result = calculate(&input)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        print_report(&input, &result);
    }

    if let Some(path) = &cli.save {
        save_report(&SavedReport::new(input, result), path)?;
        info!("Saved report to {}", path.display());
        if !cli.json {
            println!();
            println!("Report saved to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list_materials {
        list_materials();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::from(1)
        }
    }
}
