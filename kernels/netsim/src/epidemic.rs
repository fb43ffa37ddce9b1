// Synchronous SIR epidemic step over a network
//
// One step: every currently infected node attempts to infect each
// susceptible neighbor with the transmission probability, then rolls its
// own recovery. The next state is computed from a frozen snapshot of the
// current state, so newly infected nodes never transmit within the step
// they were infected, and the outcome does not depend on iteration order
// of the node set (only on the fixed random stream).

use rand::Rng;

use crate::types::Network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Susceptible,
    Infected,
    Recovered,
}

#[derive(Debug, Clone)]
pub struct EpidemicState {
    pub statuses: Vec<Status>,
}

impl EpidemicState {
    pub fn new(node_count: usize) -> Self {
        EpidemicState { statuses: vec![Status::Susceptible; node_count] }
    }

    pub fn seed_infection(&mut self, id: usize) {
        assert!(id < self.statuses.len(), "Seed node out of range");
        self.statuses[id] = Status::Infected;
    }

    // (susceptible, infected, recovered) counts
    pub fn counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for status in &self.statuses {
            match status {
                Status::Susceptible => counts.0 += 1,
                Status::Infected => counts.1 += 1,
                Status::Recovered => counts.2 += 1,
            }
        }
        counts
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.statuses.iter().any(|s| *s == Status::Infected)
    }
}

// Advance the epidemic by one synchronous step
//
// Random rolls are drawn in ascending node-id order (neighbors in adjacency
// order within each node), so a fixed seed replays the exact same outbreak.
// Removed nodes neither transmit nor get infected.
pub fn epidemic_step<R: Rng>(
    state: &mut EpidemicState,
    net: &Network,
    transmission: f64,
    recovery: f64,
    rng: &mut R,
) {
    assert_eq!(state.statuses.len(), net.node_count(), "State/network size mismatch");
    assert!((0.0..=1.0).contains(&transmission), "Transmission probability must be in [0, 1]");
    assert!((0.0..=1.0).contains(&recovery), "Recovery probability must be in [0, 1]");

    let adj = net.adjacency();
    let snapshot = state.statuses.clone();
    let mut next = snapshot.clone();

    for id in 0..net.node_count() {
        if snapshot[id] != Status::Infected || !net.is_active(id) {
            continue;
        }

        for &neighbor in &adj[id] {
            if snapshot[neighbor] == Status::Susceptible && net.is_active(neighbor) {
                if rng.gen::<f64>() < transmission {
                    next[neighbor] = Status::Infected;
                }
            }
        }

        if rng.gen::<f64>() < recovery {
            next[id] = Status::Recovered;
        }
    }

    state.statuses = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_scale_free;
    use crate::types::NodeState;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn run_outbreak(seed: u64, steps: usize) -> (usize, usize, usize) {
        let mut net_rng = SmallRng::seed_from_u64(100);
        let net = generate_scale_free(80, 2, &mut net_rng);
        let mut state = EpidemicState::new(net.node_count());
        state.seed_infection(0);
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..steps {
            epidemic_step(&mut state, &net, 0.3, 0.2, &mut rng);
        }
        state.counts()
    }

    #[test]
    fn test_outbreak_deterministic_under_seed() {
        assert_eq!(run_outbreak(77, 15), run_outbreak(77, 15));
    }

    #[test]
    fn test_certain_transmission_spreads_one_hop_per_step() {
        // Path 0-1-2-3: with transmission 1 and recovery 0, the infection
        // front advances exactly one hop per synchronous step
        let mut net = Network::with_nodes(4);
        net.add_edge(0, 1);
        net.add_edge(1, 2);
        net.add_edge(2, 3);
        net.recompute_degrees();

        let mut state = EpidemicState::new(4);
        state.seed_infection(0);
        let mut rng = SmallRng::seed_from_u64(0);

        epidemic_step(&mut state, &net, 1.0, 0.0, &mut rng);
        assert_eq!(state.statuses[1], Status::Infected);
        assert_eq!(state.statuses[2], Status::Susceptible, "no same-step chaining");

        epidemic_step(&mut state, &net, 1.0, 0.0, &mut rng);
        assert_eq!(state.statuses[2], Status::Infected);
        assert_eq!(state.statuses[3], Status::Susceptible);
    }

    #[test]
    fn test_recovered_nodes_stay_recovered() {
        let mut net = Network::with_nodes(2);
        net.add_edge(0, 1);
        net.recompute_degrees();

        let mut state = EpidemicState::new(2);
        state.seed_infection(0);
        state.statuses[1] = Status::Recovered;
        let mut rng = SmallRng::seed_from_u64(0);

        // Certain transmission, certain recovery: node 1 is immune
        epidemic_step(&mut state, &net, 1.0, 1.0, &mut rng);
        assert_eq!(state.statuses[0], Status::Recovered);
        assert_eq!(state.statuses[1], Status::Recovered);
        assert!(!state.active());
    }

    #[test]
    fn test_removed_nodes_block_transmission() {
        // Path 0-1-2 with node 1 removed: the infection cannot cross
        let mut net = Network::with_nodes(3);
        net.add_edge(0, 1);
        net.add_edge(1, 2);
        net.recompute_degrees();
        net.nodes[1].state = NodeState::Removed;

        let mut state = EpidemicState::new(3);
        state.seed_infection(0);
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..5 {
            epidemic_step(&mut state, &net, 1.0, 0.0, &mut rng);
        }
        assert_eq!(state.statuses[2], Status::Susceptible);
    }
}
