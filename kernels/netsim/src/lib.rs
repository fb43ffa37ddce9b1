// Network Topology and Resilience Simulation Core
//
// This library backs the network-theory explainer: random, scale-free, and
// small-world topology generators with a force-directed layout, connectivity
// metrics over a removal-marked subgraph, attack policies, and a synchronous
// SIR epidemic step. Everything is deterministic under a seeded RNG so the
// resilience comparisons are reproducible.

pub mod attack;
pub mod epidemic;
pub mod generators;
pub mod metrics;
pub mod types;

pub use attack::{apply_removal, RemovalPolicy};
pub use epidemic::{epidemic_step, EpidemicState, Status};
pub use generators::{force_layout, generate_random, generate_scale_free, generate_small_world};
pub use metrics::{calculate_metrics, component_sizes, NetworkMetrics};
pub use types::{Edge, Network, Node, NodeState};
