//! Stochastic Rotor Example - Campbell diagram with uncertain bearings
//!
//! Environment:
//! - `ROTOR_SAMPLES` - number of bearing stiffness samples (default 20)
//! - `ROTOR_SEED` - random seed (default 42)
//! - `ROTOR_OPTIONS` - optional JSON file with analysis options
//! - `RUST_LOG` - log filter, e.g. `info`

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use stochastic_rotor::math::linspace;
use stochastic_rotor::prelude::*;

fn env_usize(name: &str, default_val: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(default_val)
}

fn load_options() -> Result<AnalysisOptions> {
    match std::env::var("ROTOR_OPTIONS") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read options file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("invalid options in {path}"))
        }
        Err(_) => Ok(AnalysisOptions::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let n_samples = env_usize("ROTOR_SAMPLES", 20);
    let seed = env_usize("ROTOR_SEED", 42) as u64;
    let options = load_options()?;

    println!("=== Stochastic Rotor Example: Uncertain Bearing Stiffness ===\n");

    // kxx ~ N(1e6, 1e5), clipped to stay positive
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::<f64>::new(1e6, 1e5)?;
    let kxx: Vec<f64> = (0..n_samples)
        .map(|_| normal.sample(&mut rng).max(1e4))
        .collect();

    let steel = Material::steel();
    let shafts = (0..6)
        .map(|_| RandomShaftElement::new(0.25, 0.0, 0.05, &steel, &[]))
        .collect::<RotorResult<Vec<_>>>()?;
    let disks = vec![
        DiskElement::from_geometry(2, &steel, 0.07, 0.05, 0.28)?.into(),
        DiskElement::from_geometry(4, &steel, 0.07, 0.05, 0.28)?.into(),
    ];
    let bearings = vec![
        RandomBearing::new(0, kxx.clone(), 1e3, &["kxx"])?,
        RandomBearing::new(6, kxx, 1e3, &["kxx"])?,
    ];
    let rotor = StochasticRotor::new(shafts, disks, bearings, Vec::new())?;

    println!("Samples: {}", rotor.n_samples()?);
    println!("DOFs:    {}", rotor.ndof());
    println!("Random parameters:");
    for key in rotor.random_parameter_keys() {
        println!("  {key}");
    }

    let speed_range = linspace(0.0, 1000.0, 11);
    println!("\nRunning Campbell analysis...\n");
    let campbell = rotor.run_campbell_with(&speed_range, &options)?;

    println!("First mode damped natural frequency (rad/s):");
    for (j, speed) in speed_range.iter().enumerate() {
        let values = campbell.wd.slice(ndarray::s![0, j, ..]);
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &w| {
                (lo.min(w), hi.max(w))
            });
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        println!("  speed {speed:>7.1}: mean {mean:>8.2}, range [{min:.2}, {max:.2}]");
    }

    let json = campbell.to_json()?;
    println!("\nCampbell results: {} bytes of JSON", json.len());

    println!("\n=== Analysis Complete ===");
    Ok(())
}
