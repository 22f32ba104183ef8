//! Network types: relationship kinds, edges, nodes.

use std::fmt;

use kinmap_core::Profile;
use serde::{Deserialize, Serialize};

/// Closed set of relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    Family,
    Colleague,
    Friend,
    Romantic,
    Neighbor,
    Business,
    SocialMedia,
    Education,
    Healthcare,
    Legal,
}

impl RelationshipType {
    pub fn all() -> &'static [RelationshipType] {
        &[
            Self::Family,
            Self::Colleague,
            Self::Friend,
            Self::Romantic,
            Self::Neighbor,
            Self::Business,
            Self::SocialMedia,
            Self::Education,
            Self::Healthcare,
            Self::Legal,
        ]
    }

    /// Wire name, also used in edge ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Colleague => "colleague",
            Self::Friend => "friend",
            Self::Romantic => "romantic",
            Self::Neighbor => "neighbor",
            Self::Business => "business",
            Self::SocialMedia => "social_media",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Legal => "legal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Colleague => "Colleague",
            Self::Friend => "Friend",
            Self::Romantic => "Romantic",
            Self::Neighbor => "Neighbor",
            Self::Business => "Business",
            Self::SocialMedia => "Social Media",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::Legal => "Legal",
        }
    }

    /// Hex stroke color hint for the visualization layer.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Family => "#ef4444",
            Self::Romantic => "#ec4899",
            Self::Colleague => "#3b82f6",
            Self::Friend => "#10b981",
            Self::Neighbor => "#f59e0b",
            Self::Business => "#8b5cf6",
            Self::SocialMedia => "#06b6d4",
            Self::Education => "#84cc16",
            Self::Healthcare => "#f97316",
            Self::Legal => "#6b7280",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, scored connection between two profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// `"{source_id}-{target_id}-{type}"`.
    pub id: String,
    pub source_id: i64,
    pub target_id: i64,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
    /// In `[0, 1]`, higher is stronger.
    pub strength: f64,
    pub description: String,
    pub context: String,
}

impl Relationship {
    pub fn edge_id(source_id: i64, target_id: i64, kind: RelationshipType) -> String {
        format!("{}-{}-{}", source_id, target_id, kind)
    }

    pub fn touches(&self, id: i64) -> bool {
        self.source_id == id || self.target_id == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other_end(&self, id: i64) -> Option<i64> {
        if self.source_id == id {
            Some(self.target_id)
        } else if self.target_id == id {
            Some(self.source_id)
        } else {
            None
        }
    }
}

/// A profile with its layout position and incident relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: i64,
    pub profile: Profile,
    pub x: f64,
    pub y: f64,
    pub connections: Vec<Relationship>,
}

/// Nodes plus edges, regenerated wholesale on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<Relationship>,
}

impl Network {
    pub fn node(&self, id: i64) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: i64) -> Option<&mut NetworkNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Recompute every node's connections from the edge set.
    pub fn refresh_connections(&mut self) {
        let edges = &self.edges;
        for node in &mut self.nodes {
            node.connections = edges.iter().filter(|e| e.touches(node.id)).cloned().collect();
        }
    }
}
