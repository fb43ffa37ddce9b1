// Graph types shared by the topology generators, metrics, and simulations

use serde::{Deserialize, Serialize};

// Lifecycle state of a node under the attack simulation. Removal never
// deletes a node; it only marks it, so node ids stay stable across the
// whole removal sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    Normal,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    // Layout position, written by the force-directed pass
    pub x: f64,
    pub y: f64,
    // Cached degree over ALL edges (ignores removal); recomputed after
    // generation, used for targeted-attack ranking and display color
    pub degree: usize,
    pub state: NodeState,
}

// Undirected edge between node ids a and b
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Network {
    // Create a network of `count` disconnected nodes at the origin
    pub fn with_nodes(count: usize) -> Self {
        let nodes = (0..count)
            .map(|id| Node {
                id,
                x: 0.0,
                y: 0.0,
                degree: 0,
                state: NodeState::Normal,
            })
            .collect();
        Network { nodes, edges: Vec::new() }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // Add an undirected edge, rejecting self-loops and duplicates
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        assert!(a < self.nodes.len() && b < self.nodes.len(), "Edge endpoint out of range");
        if a == b || self.has_edge(a, b) {
            return false;
        }
        self.edges.push(Edge { a, b });
        true
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges
            .iter()
            .any(|e| (e.a == a && e.b == b) || (e.a == b && e.b == a))
    }

    // Recompute every node's cached degree from the edge list
    pub fn recompute_degrees(&mut self) {
        for node in &mut self.nodes {
            node.degree = 0;
        }
        for edge in &self.edges {
            self.nodes[edge.a].degree += 1;
            self.nodes[edge.b].degree += 1;
        }
    }

    // Adjacency lists, one Vec of neighbor ids per node
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adj[edge.a].push(edge.b);
            adj[edge.b].push(edge.a);
        }
        adj
    }

    #[inline]
    pub fn is_active(&self, id: usize) -> bool {
        self.nodes[id].state == NodeState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_deduplication() {
        let mut net = Network::with_nodes(3);
        assert!(net.add_edge(0, 1));
        assert!(!net.add_edge(1, 0), "reversed duplicate must be rejected");
        assert!(!net.add_edge(2, 2), "self-loop must be rejected");
        assert_eq!(net.edges.len(), 1);
    }

    #[test]
    fn test_degree_recompute() {
        let mut net = Network::with_nodes(4);
        net.add_edge(0, 1);
        net.add_edge(0, 2);
        net.add_edge(0, 3);
        net.recompute_degrees();
        assert_eq!(net.nodes[0].degree, 3);
        assert_eq!(net.nodes[3].degree, 1);
    }
}
