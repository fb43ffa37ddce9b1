// Connectivity metrics over the surviving (non-removed) subgraph

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::Network;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NetworkMetrics {
    // Largest connected component as a fraction of surviving nodes, in [0, 1]
    pub largest_component: f64,
    // Surviving nodes with zero surviving edges
    pub isolated_nodes: usize,
}

// Sizes of all connected components, BFS over surviving nodes and the edges
// whose endpoints both survive.
pub fn component_sizes(net: &Network) -> Vec<usize> {
    let n = net.node_count();
    let adj = net.adjacency();
    let mut visited = vec![false; n];
    let mut sizes = Vec::new();

    for start in 0..n {
        if visited[start] || !net.is_active(start) {
            continue;
        }
        let mut size = 0;
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        while let Some(id) = queue.pop_front() {
            size += 1;
            for &next in &adj[id] {
                if !visited[next] && net.is_active(next) {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        sizes.push(size);
    }

    sizes
}

pub fn calculate_metrics(net: &Network) -> NetworkMetrics {
    let surviving = net.nodes.iter().filter(|n| net.is_active(n.id)).count();
    if surviving == 0 {
        return NetworkMetrics { largest_component: 0.0, isolated_nodes: 0 };
    }

    let sizes = component_sizes(net);
    let largest = sizes.iter().copied().max().unwrap_or(0);

    // Degree over surviving edges only, so a node whose neighbors were all
    // removed counts as isolated
    let mut surviving_degree = vec![0usize; net.node_count()];
    for edge in &net.edges {
        if net.is_active(edge.a) && net.is_active(edge.b) {
            surviving_degree[edge.a] += 1;
            surviving_degree[edge.b] += 1;
        }
    }
    let isolated = net
        .nodes
        .iter()
        .filter(|n| net.is_active(n.id) && surviving_degree[n.id] == 0)
        .count();

    NetworkMetrics {
        largest_component: largest as f64 / surviving as f64,
        isolated_nodes: isolated,
    }
}
