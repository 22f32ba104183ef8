//! Network summary statistics.

use std::collections::HashMap;

use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use serde::Serialize;

use crate::types::{Network, NetworkNode, Relationship, RelationshipType};

/// Coarse size of the edge set relative to the node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn classify(nodes: usize, edges: usize) -> Self {
        if edges > nodes {
            Self::High
        } else if edges as f64 > nodes as f64 * 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostConnected {
    pub id: i64,
    pub name: String,
    pub connections: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrongestBond {
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    pub count: usize,
}

/// Summary of a generated network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub profiles: usize,
    pub connections: usize,
    #[serde(rename = "averageStrength")]
    pub average_strength: f64,
    /// Edges over possible unordered pairs. Can exceed 1.0 since a pair may carry several edges.
    pub density: f64,
    #[serde(rename = "mostConnected", skip_serializing_if = "Option::is_none")]
    pub most_connected: Option<MostConnected>,
    #[serde(rename = "strongestBond", skip_serializing_if = "Option::is_none")]
    pub strongest_bond: Option<StrongestBond>,
    #[serde(rename = "mostCommonType", skip_serializing_if = "Option::is_none")]
    pub most_common_type: Option<TypeCount>,
    pub complexity: Complexity,
    /// Connected components, isolated nodes included.
    pub components: usize,
}

impl NetworkStats {
    pub fn compute(network: &Network) -> Self {
        let profiles = network.nodes.len();
        let connections = network.edges.len();

        let average_strength = if connections == 0 {
            0.0
        } else {
            network.edges.iter().map(|e| e.strength).sum::<f64>() / connections as f64
        };

        let pairs = profiles * profiles.saturating_sub(1) / 2;
        let density = if pairs == 0 {
            0.0
        } else {
            connections as f64 / pairs as f64
        };

        // First maximum in node order.
        let most_connected = network
            .nodes
            .iter()
            .fold(None::<&NetworkNode>, |best, node| match best {
                Some(b) if b.connections.len() >= node.connections.len() => Some(b),
                _ => Some(node),
            })
            .map(|node| MostConnected {
                id: node.id,
                name: node.profile.display_name(),
                connections: node.connections.len(),
            });

        let strongest_bond = network
            .edges
            .iter()
            .fold(None::<&Relationship>, |best, edge| match best {
                Some(b) if b.strength >= edge.strength => Some(b),
                _ => Some(edge),
            })
            .map(|edge| StrongestBond {
                kind: edge.kind,
                strength: edge.strength,
            });

        let mut counts: HashMap<RelationshipType, usize> = HashMap::new();
        for edge in &network.edges {
            *counts.entry(edge.kind).or_insert(0) += 1;
        }
        let most_common_type = RelationshipType::all()
            .iter()
            .filter_map(|kind| counts.get(kind).map(|&count| TypeCount { kind: *kind, count }))
            .fold(None::<TypeCount>, |best, candidate| match best {
                Some(b) if b.count >= candidate.count => Some(b),
                _ => Some(candidate),
            });

        Self {
            profiles,
            connections,
            average_strength,
            density,
            most_connected,
            strongest_bond,
            most_common_type,
            complexity: Complexity::classify(profiles, connections),
            components: count_components(network),
        }
    }
}

fn count_components(network: &Network) -> usize {
    let mut graph = UnGraph::<i64, ()>::with_capacity(network.nodes.len(), network.edges.len());
    let index: HashMap<i64, _> = network
        .nodes
        .iter()
        .map(|node| (node.id, graph.add_node(node.id)))
        .collect();

    for edge in &network.edges {
        if let (Some(&s), Some(&t)) = (index.get(&edge.source_id), index.get(&edge.target_id)) {
            graph.add_edge(s, t, ());
        }
    }

    connected_components(&graph)
}
