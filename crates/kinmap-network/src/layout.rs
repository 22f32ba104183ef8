//! Graph layout — circular placement followed by fixed-iteration relaxation.
//!
//! Each pass pushes apart node pairs closer than `repulsion_distance`, pulls
//! together endpoints of edges longer than their strength-dependent ideal
//! length, then clamps every node into the canvas bounds. There is no
//! cooling schedule and no convergence test.

use std::collections::HashMap;
use std::f64::consts::PI;

use kinmap_core::LayoutConfig;
use tracing::{debug, warn};

use crate::types::{Network, NetworkNode};

/// Distances at or below this are treated as coincident.
const MIN_DISTANCE: f64 = 1e-9;

/// Force-directed layout engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `network` in place. Edges are not touched.
    pub fn layout(&self, network: &mut Network) {
        let nodes = &mut network.nodes;
        if nodes.is_empty() {
            return;
        }

        self.place_on_circle(nodes);

        let index: HashMap<i64, usize> = nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
        let springs: Vec<(usize, usize, f64)> = network
            .edges
            .iter()
            .filter_map(|edge| {
                match (index.get(&edge.source_id), index.get(&edge.target_id)) {
                    (Some(&s), Some(&t)) => Some((s, t, edge.strength)),
                    _ => {
                        warn!("Skipping edge {}: endpoint not in node set", edge.id);
                        None
                    }
                }
            })
            .collect();

        for _ in 0..self.config.iterations {
            self.repel(nodes);
            self.attract(nodes, &springs);
            self.clamp(nodes);
        }

        debug!(
            "Laid out {} nodes with {} springs over {} iterations",
            nodes.len(),
            springs.len(),
            self.config.iterations
        );
    }

    /// Owned variant of [`LayoutEngine::layout`].
    pub fn layout_owned(&self, mut network: Network) -> Network {
        self.layout(&mut network);
        network
    }

    fn place_on_circle(&self, nodes: &mut [NetworkNode]) {
        let count = nodes.len() as f64;
        for (index, node) in nodes.iter_mut().enumerate() {
            let angle = 2.0 * PI * index as f64 / count;
            node.x = self.config.center_x + angle.cos() * self.config.radius;
            node.y = self.config.center_y + angle.sin() * self.config.radius;
        }
    }

    fn repel(&self, nodes: &mut [NetworkNode]) {
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let dx = nodes[j].x - nodes[i].x;
                let dy = nodes[j].y - nodes[i].y;
                let distance = (dx * dx + dy * dy).sqrt();

                // Coincident nodes have no direction to push along.
                if distance >= self.config.repulsion_distance || distance <= MIN_DISTANCE {
                    continue;
                }

                let fx = dx / distance * self.config.repulsion_step;
                let fy = dy / distance * self.config.repulsion_step;
                nodes[i].x -= fx;
                nodes[i].y -= fy;
                nodes[j].x += fx;
                nodes[j].y += fy;
            }
        }
    }

    fn attract(&self, nodes: &mut [NetworkNode], springs: &[(usize, usize, f64)]) {
        for &(s, t, strength) in springs {
            let dx = nodes[t].x - nodes[s].x;
            let dy = nodes[t].y - nodes[s].y;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= self.config.ideal_distance(strength) || distance <= MIN_DISTANCE {
                continue;
            }

            let force = self.config.attraction_step * strength;
            let fx = dx / distance * force;
            let fy = dy / distance * force;
            nodes[s].x += fx;
            nodes[s].y += fy;
            nodes[t].x -= fx;
            nodes[t].y -= fy;
        }
    }

    // Tolerates inverted or NaN bounds, unlike `f64::clamp`.
    fn clamp(&self, nodes: &mut [NetworkNode]) {
        for node in nodes {
            node.x = node.x.max(self.config.min_x).min(self.config.max_x);
            node.y = node.y.max(self.config.min_y).min(self.config.max_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tests::profile;
    use crate::types::{Relationship, RelationshipType};

    fn bare_network(count: i64) -> Network {
        Network {
            nodes: (1..=count)
                .map(|id| NetworkNode {
                    id,
                    profile: profile(id, "Test", 30),
                    x: 0.0,
                    y: 0.0,
                    connections: Vec::new(),
                })
                .collect(),
            edges: Vec::new(),
        }
    }

    fn edge(source_id: i64, target_id: i64, strength: f64) -> Relationship {
        Relationship {
            id: Relationship::edge_id(source_id, target_id, RelationshipType::Friend),
            source_id,
            target_id,
            kind: RelationshipType::Friend,
            strength,
            description: String::new(),
            context: String::new(),
        }
    }

    fn distance(a: &NetworkNode, b: &NetworkNode) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    fn in_bounds(net: &Network) -> bool {
        net.nodes
            .iter()
            .all(|n| (50.0..=550.0).contains(&n.x) && (50.0..=450.0).contains(&n.y))
    }

    #[test]
    fn test_circle_placement_without_relaxation() {
        let engine = LayoutEngine::new(LayoutConfig {
            iterations: 0,
            ..Default::default()
        });
        let net = engine.layout_owned(bare_network(4));
        let expected = [(480.0, 250.0), (300.0, 430.0), (120.0, 250.0), (300.0, 70.0)];
        for (node, (x, y)) in net.nodes.iter().zip(expected) {
            assert!((node.x - x).abs() < 1e-9, "x {} != {}", node.x, x);
            assert!((node.y - y).abs() < 1e-9, "y {} != {}", node.y, y);
        }
    }

    #[test]
    fn test_empty_network_is_noop() {
        let mut net = Network::default();
        LayoutEngine::default().layout(&mut net);
        assert!(net.nodes.is_empty());
    }

    #[test]
    fn test_attraction_closes_strong_edge() {
        // Two nodes start 360 apart; each pass moves both by 0.1.
        let mut net = bare_network(2);
        net.edges.push(edge(1, 2, 1.0));
        LayoutEngine::default().layout(&mut net);
        assert!((distance(&net.nodes[0], &net.nodes[1]) - 340.0).abs() < 1e-6);

        let mut loose = bare_network(2);
        LayoutEngine::default().layout(&mut loose);
        assert!((distance(&loose.nodes[0], &loose.nodes[1]) - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_repulsion_stops_at_threshold() {
        let engine = LayoutEngine::new(LayoutConfig {
            radius: 20.0,
            ..Default::default()
        });
        let net = engine.layout_owned(bare_network(2));
        assert!((distance(&net.nodes[0], &net.nodes[1]) - 80.0).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_nodes_stay_finite() {
        let engine = LayoutEngine::new(LayoutConfig {
            radius: 0.0,
            ..Default::default()
        });
        let mut net = bare_network(3);
        net.edges.push(edge(1, 2, 0.9));
        engine.layout(&mut net);
        for node in &net.nodes {
            assert!(node.x.is_finite() && node.y.is_finite());
            assert_eq!((node.x, node.y), (300.0, 250.0));
        }
    }

    #[test]
    fn test_missing_endpoint_is_skipped() {
        let mut net = bare_network(3);
        net.edges.push(edge(1, 999, 1.0));
        net.edges.push(edge(2, 3, 0.5));
        LayoutEngine::default().layout(&mut net);
        assert_eq!(net.edges.len(), 2);
        assert!(in_bounds(&net));
    }

    #[test]
    fn test_bounds_hold_for_dense_network() {
        let mut net = bare_network(40);
        for s in 1..=40 {
            for t in (s + 1)..=40 {
                net.edges.push(edge(s, t, ((s * t) % 10) as f64 / 10.0));
            }
        }
        let engine = LayoutEngine::default();
        engine.layout(&mut net);
        assert!(in_bounds(&net));
        engine.layout(&mut net);
        assert!(in_bounds(&net));
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let engine = LayoutEngine::new(LayoutConfig {
            min_x: 600.0,
            min_y: f64::NAN,
            ..Default::default()
        });
        let mut net = bare_network(1);
        engine.layout(&mut net);
        assert_eq!(net.nodes[0].x, 550.0);
        assert!(net.nodes[0].y.is_finite());
    }
}
