// Dataset Generator CLI
//
// This binary generates the precomputed JSON catalogs the explorers fetch at
// runtime. It runs before deployment; the browser-side fallback produces the
// same populations procedurally if these files are missing.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

use orbital::belt::generate_asteroids;
use orbital::catalog::{AsteroidCatalog, PlanetRecord, StarCatalog};
use orbital::stars::generate_stars;
use orbital::types::PLANET_ORBITS;

/// CLI arguments for the dataset generator
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(about = "Generate precomputed explorer datasets", long_about = None)]
struct Args {
    /// Dataset to generate ("belt" or "stars")
    #[arg(short, long)]
    dataset: String,

    /// Number of entities to generate
    #[arg(short, long, default_value_t = 100_000)]
    count: usize,

    /// Random seed (fixed default so deployments are reproducible)
    #[arg(short, long, default_value_t = 2025)]
    seed: u64,

    /// Output directory for generated catalogs
    #[arg(short, long, default_value = "public/data")]
    output: PathBuf,
}

// Generation chunk size between progress-bar updates
const CHUNK: usize = 1_000;

fn progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} bodies ({percent}%)")
            .expect("static template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

fn generate_belt_catalog(count: usize, seed: u64) -> AsteroidCatalog {
    let mut rng = SmallRng::seed_from_u64(seed);
    let pb = progress_bar(count as u64);

    let mut asteroids = Vec::with_capacity(count);
    let mut remaining = count;
    while remaining > 0 {
        let batch = remaining.min(CHUNK);
        asteroids.extend(generate_asteroids(batch, &mut rng));
        remaining -= batch;
        pb.set_position((count - remaining) as u64);
    }
    pb.finish_with_message("belt generation complete");

    let mut planets = std::collections::BTreeMap::new();
    for planet in PLANET_ORBITS {
        planets.insert(
            planet.name.to_lowercase(),
            PlanetRecord { a: planet.a, x: planet.x, y: planet.y },
        );
    }

    AsteroidCatalog {
        count: asteroids.len(),
        epoch: "2025-01-01".to_string(),
        description: format!("{} asteroids with Kirkwood gaps, seed {}", count, seed),
        planets,
        asteroids,
    }
}

fn generate_star_catalog(count: usize, seed: u64) -> StarCatalog {
    let mut rng = SmallRng::seed_from_u64(seed);
    let pb = progress_bar(count as u64);

    let mut stars = Vec::with_capacity(count);
    let mut remaining = count;
    while remaining > 0 {
        let batch = remaining.min(CHUNK);
        stars.extend(generate_stars(batch, &mut rng));
        remaining -= batch;
        pb.set_position((count - remaining) as u64);
    }
    pb.finish_with_message("star generation complete");

    StarCatalog {
        count: stars.len(),
        description: format!("{} synthetic stars, seed {}", count, seed),
        stars,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("\nExplorer Dataset Generator");
    println!("=======================================");
    println!("  Dataset: {}", args.dataset);
    println!("  Count: {}", args.count);
    println!("  Seed: {}", args.seed);
    println!("=======================================\n");

    fs::create_dir_all(&args.output)?;

    let (file_name, json) = match args.dataset.as_str() {
        "belt" => {
            let catalog = generate_belt_catalog(args.count, args.seed);
            ("asteroid-belt.json", serde_json::to_string(&catalog)?)
        }
        "stars" => {
            let catalog = generate_star_catalog(args.count, args.seed);
            ("stars.json", serde_json::to_string(&catalog)?)
        }
        other => {
            return Err(format!(
                "Invalid dataset: '{}'. Must be one of: belt, stars",
                other
            )
            .into());
        }
    };

    let path = args.output.join(file_name);
    fs::write(&path, &json)?;

    println!(
        "\n  ✓ Wrote {} ({:.2} MB)",
        path.display(),
        json.len() as f64 / 1_000_000.0
    );
    println!("\nGeneration complete.\n");

    Ok(())
}
