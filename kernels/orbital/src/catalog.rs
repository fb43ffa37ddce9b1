// Precomputed dataset schemas and the load-or-generate fallback
//
// Each explorer first tries to load a precomputed JSON catalog; if the file
// is missing or malformed it regenerates an equivalent population locally.
// The fallback is silent by design — a visitor should see the visualization
// either way, never an error.

use std::collections::BTreeMap;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::belt::generate_asteroids;
use crate::stars::generate_stars;
use crate::types::{Asteroid, Star, PLANET_ORBITS};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// ASTEROID CATALOG
// ============================================================================

// Planet entry as stored in the catalog: orbit radius and epoch position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub a: f64,
    pub x: f64,
    pub y: f64,
}

// The asteroid-belt dataset: count, descriptive metadata, the planet table,
// and one record per asteroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidCatalog {
    pub count: usize,
    pub epoch: String,
    pub description: String,
    pub planets: BTreeMap<String, PlanetRecord>,
    pub asteroids: Vec<Asteroid>,
}

// Build a procedural catalog with the same in-memory shape as the remote one
pub fn mock_asteroid_catalog(count: usize, seed: u64) -> AsteroidCatalog {
    let mut rng = SmallRng::seed_from_u64(seed);
    let asteroids = generate_asteroids(count, &mut rng);

    let mut planets = BTreeMap::new();
    for planet in PLANET_ORBITS {
        planets.insert(
            planet.name.to_lowercase(),
            PlanetRecord { a: planet.a, x: planet.x, y: planet.y },
        );
    }

    AsteroidCatalog {
        count: asteroids.len(),
        epoch: "2025-01-01".to_string(),
        description: "Procedural asteroid population with Kirkwood gaps".to_string(),
        planets,
        asteroids,
    }
}

// Parse an asteroid catalog from JSON text
pub fn parse_asteroid_catalog(json: &str) -> Result<AsteroidCatalog, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

// Load a catalog from disk, falling back to procedural generation on any
// I/O or parse failure.
pub fn load_or_generate_asteroids(path: &Path, count: usize, seed: u64) -> AsteroidCatalog {
    match std::fs::read_to_string(path) {
        Ok(json) => parse_asteroid_catalog(&json).unwrap_or_else(|_| mock_asteroid_catalog(count, seed)),
        Err(_) => mock_asteroid_catalog(count, seed),
    }
}

// ============================================================================
// STAR CATALOG
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarCatalog {
    pub count: usize,
    pub description: String,
    pub stars: Vec<Star>,
}

pub fn mock_star_catalog(count: usize, seed: u64) -> StarCatalog {
    let mut rng = SmallRng::seed_from_u64(seed);
    let stars = generate_stars(count, &mut rng);
    StarCatalog {
        count: stars.len(),
        description: "Procedural stellar population (main sequence, giants, white dwarfs)"
            .to_string(),
        stars,
    }
}

pub fn parse_star_catalog(json: &str) -> Result<StarCatalog, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_or_generate_stars(path: &Path, count: usize, seed: u64) -> StarCatalog {
    match std::fs::read_to_string(path) {
        Ok(json) => parse_star_catalog(&json).unwrap_or_else(|_| mock_star_catalog(count, seed)),
        Err(_) => mock_star_catalog(count, seed),
    }
}
