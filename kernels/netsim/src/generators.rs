// Topology generators and the force-directed layout pass
//
// Three classic random-graph families, chosen because they respond very
// differently to node removal: uniform-random (Erdős–Rényi), scale-free
// (Barabási–Albert preferential attachment), and small-world
// (Watts–Strogatz ring rewiring). All three are deterministic under a
// seeded RNG.

use rand::Rng;

use crate::types::Network;

// Draw budget per attachment edge in the scale-free generator. After this
// many failed draws the edge falls back to the lowest-id node not yet
// attached, so generation terminates even when the endpoint list keeps
// producing duplicates.
const ATTEMPTS_PER_EDGE: usize = 100;

// Uniform-random graph: every pair connected independently with probability p
pub fn generate_random<R: Rng>(n: usize, p: f64, rng: &mut R) -> Network {
    assert!((0.0..=1.0).contains(&p), "Edge probability must be in [0, 1]");
    let mut net = Network::with_nodes(n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen::<f64>() < p {
                net.add_edge(a, b);
            }
        }
    }
    net.recompute_degrees();
    net
}

// Scale-free graph via preferential attachment
//
// Starts from a small fully connected core, then each new node attaches m
// edges to existing nodes with probability proportional to their current
// degree. The repeated-endpoint list makes degree-proportional sampling a
// single uniform draw.
pub fn generate_scale_free<R: Rng>(n: usize, m: usize, rng: &mut R) -> Network {
    assert!(m >= 1, "Attachment count must be at least 1");
    assert!(n > m, "Need more nodes than attachment edges");

    let mut net = Network::with_nodes(n);

    // Seed core: m + 1 nodes, fully connected
    let core = m + 1;
    for a in 0..core {
        for b in (a + 1)..core {
            net.add_edge(a, b);
        }
    }

    // One entry per edge endpoint; sampling uniformly from this list is
    // sampling nodes proportionally to degree
    let mut endpoints: Vec<usize> = Vec::new();
    for edge in &net.edges {
        endpoints.push(edge.a);
        endpoints.push(edge.b);
    }

    for new_node in core..n {
        let mut attached = Vec::with_capacity(m);
        while attached.len() < m {
            // Retry on duplicate targets so each new node gets m distinct
            // edges, with a bounded draw budget per edge
            let mut target = endpoints[rng.gen_range(0..endpoints.len())];
            let mut attempts = 1;
            while (target == new_node || attached.contains(&target))
                && attempts < ATTEMPTS_PER_EDGE
            {
                target = endpoints[rng.gen_range(0..endpoints.len())];
                attempts += 1;
            }
            if target == new_node || attached.contains(&target) {
                // Budget exhausted: attach deterministically to the lowest-id
                // node not already taken. Always exists, since new_node > m
                // and at most m - 1 nodes are attached so far.
                target = (0..new_node)
                    .find(|id| !attached.contains(id))
                    .unwrap_or(0);
            }
            attached.push(target);
        }
        for &target in &attached {
            net.add_edge(new_node, target);
            endpoints.push(new_node);
            endpoints.push(target);
        }
    }

    net.recompute_degrees();
    net
}

// Small-world graph: ring lattice with k neighbors per node (k/2 each side),
// each lattice edge rewired with probability beta.
pub fn generate_small_world<R: Rng>(n: usize, k: usize, beta: f64, rng: &mut R) -> Network {
    assert!(k >= 2 && k % 2 == 0, "Lattice degree k must be even and >= 2");
    assert!(n > k, "Need more nodes than lattice degree");
    assert!((0.0..=1.0).contains(&beta), "Rewire probability must be in [0, 1]");

    let mut net = Network::with_nodes(n);

    // Ring lattice
    for a in 0..n {
        for offset in 1..=(k / 2) {
            let b = (a + offset) % n;
            net.add_edge(a, b);
        }
    }

    // Rewire: replace each edge's far endpoint with a uniform random node,
    // keeping the near endpoint, skipping rewires that would create a
    // self-loop or duplicate
    for idx in 0..net.edges.len() {
        if rng.gen::<f64>() < beta {
            let a = net.edges[idx].a;
            let candidate = rng.gen_range(0..n);
            if candidate != a && !net.has_edge(a, candidate) {
                net.edges[idx].b = candidate;
            }
        }
    }

    net.recompute_degrees();
    net
}

// Force-directed layout, Fruchterman-Reingold style
//
// Pairwise repulsion, spring attraction along edges toward a rest length,
// and a weak pull toward the center, with a linearly cooling step cap.
// Bounded iteration count; positions are clamped into the box every step.
pub fn force_layout<R: Rng>(
    net: &mut Network,
    width: f64,
    height: f64,
    iterations: usize,
    rng: &mut R,
) {
    let n = net.nodes.len();
    if n == 0 {
        return;
    }

    // Scatter initial positions so repulsion has a gradient to work with
    for node in &mut net.nodes {
        node.x = rng.gen::<f64>() * width;
        node.y = rng.gen::<f64>() * height;
    }

    let area = width * height;
    let rest = (area / n as f64).sqrt();

    for iter in 0..iterations {
        // Cooling: maximum displacement shrinks linearly to a small floor
        let temp = (width / 10.0) * (1.0 - iter as f64 / iterations as f64) + 0.5;

        let mut disp = vec![(0.0f64, 0.0f64); n];

        // Repulsion between every pair
        for a in 0..n {
            for b in (a + 1)..n {
                let dx = net.nodes[a].x - net.nodes[b].x;
                let dy = net.nodes[a].y - net.nodes[b].y;
                let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                let force = rest * rest / dist;
                let (ux, uy) = (dx / dist, dy / dist);
                disp[a].0 += ux * force;
                disp[a].1 += uy * force;
                disp[b].0 -= ux * force;
                disp[b].1 -= uy * force;
            }
        }

        // Spring attraction along edges
        for edge in &net.edges {
            let dx = net.nodes[edge.a].x - net.nodes[edge.b].x;
            let dy = net.nodes[edge.a].y - net.nodes[edge.b].y;
            let dist = (dx * dx + dy * dy).sqrt().max(0.01);
            let force = dist * dist / rest;
            let (ux, uy) = (dx / dist, dy / dist);
            disp[edge.a].0 -= ux * force;
            disp[edge.a].1 -= uy * force;
            disp[edge.b].0 += ux * force;
            disp[edge.b].1 += uy * force;
        }

        // Weak centering pull keeps disconnected components on screen
        let (cx, cy) = (width / 2.0, height / 2.0);
        for (i, node) in net.nodes.iter().enumerate() {
            disp[i].0 += (cx - node.x) * 0.02;
            disp[i].1 += (cy - node.y) * 0.02;
        }

        for (i, node) in net.nodes.iter_mut().enumerate() {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-9);
            let step = len.min(temp);
            node.x = (node.x + dx / len * step).clamp(0.0, width);
            node.y = (node.y + dy / len * step).clamp(0.0, height);
        }
    }
}
