// Orbital Mechanics and Sky-Survey Dataset Core
//
// This library backs the asteroid-belt, stellar-cartography, and
// orbital-transfer explainers: closed-form two-body mechanics, stratified
// population generators with domain-realistic statistics, and the JSON
// catalog schemas shared with the precomputed datasets.
//
// All computations use f64; render buffers are narrowed to f32 at the edge.

pub mod belt;
pub mod catalog;
pub mod kepler;
pub mod stars;
pub mod transfer;
pub mod types;

mod sampling;

pub use belt::{generate_asteroids, prepare_belt_buffers, BeltBuffers};
pub use catalog::{
    load_or_generate_asteroids, load_or_generate_stars, mock_asteroid_catalog, mock_star_catalog,
    parse_asteroid_catalog, parse_star_catalog, AsteroidCatalog, CatalogError, StarCatalog,
};
pub use kepler::{elements_to_cartesian, solve_kepler_equation};
pub use stars::{generate_stars, prepare_star_buffers, StarBuffers};
pub use transfer::{
    bielliptic_transfer, hohmann_transfer, transfer_state, BiellipticTransfer, HohmannTransfer,
    TransferOrbit, TransferState,
};
pub use types::{
    Asteroid, Body, KirkwoodGap, OrbitClass, Planet, Star, StarClass, EARTH, KIRKWOOD_GAPS, MOON,
    PLANET_ORBITS, SUN,
};
