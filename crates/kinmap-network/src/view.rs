//! Read-only queries used by the visualization layer: filtering, neighbor
//! lookup, and hover highlighting.

use kinmap_core::Profile;
use serde::{Deserialize, Serialize};

use crate::types::{Network, Relationship, RelationshipType};

/// Which relationship kinds to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeFilter {
    #[default]
    All,
    Only(RelationshipType),
}

impl EdgeFilter {
    /// `"all"` or a relationship wire name.
    pub fn parse(name: &str) -> Option<Self> {
        if name == "all" {
            Some(Self::All)
        } else {
            RelationshipType::from_name(name).map(Self::Only)
        }
    }

    pub fn matches(&self, edge: &Relationship) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => edge.kind == *kind,
        }
    }
}

pub fn filter_edges(network: &Network, filter: EdgeFilter) -> Vec<&Relationship> {
    network.edges.iter().filter(|e| filter.matches(e)).collect()
}

/// Relationship kinds present in the network, sorted by wire name.
pub fn relationship_types(network: &Network) -> Vec<RelationshipType> {
    let mut kinds: Vec<RelationshipType> = network.edges.iter().map(|e| e.kind).collect();
    kinds.sort_by_key(|k| k.as_str());
    kinds.dedup();
    kinds
}

/// Ids connected to `id`, in edge order without repeats.
pub fn neighbors(network: &Network, id: i64) -> Vec<i64> {
    let mut ids = Vec::new();
    for other in network.edges.iter().filter_map(|e| e.other_end(id)) {
        if !ids.contains(&other) {
            ids.push(other);
        }
    }
    ids
}

/// Whether a node should be emphasized while `hovered` is under the cursor.
pub fn is_node_highlighted(network: &Network, id: i64, hovered: Option<i64>) -> bool {
    match hovered {
        None => false,
        Some(h) if h == id => true,
        Some(h) => network.edges.iter().any(|e| e.other_end(h) == Some(id)),
    }
}

/// Whether an edge should be drawn emphasized.
pub fn is_edge_highlighted(edge: &Relationship, hovered: Option<i64>, filter: EdgeFilter) -> bool {
    let visible = filter.matches(edge);
    match hovered {
        None => visible,
        Some(h) => visible && edge.touches(h),
    }
}

/// The profile on the other end of each of a node's connections, with the kind.
pub fn connected_profiles(network: &Network, id: i64) -> Vec<(&Profile, RelationshipType)> {
    let Some(node) = network.node(id) else {
        return Vec::new();
    };
    node.connections
        .iter()
        .filter_map(|conn| {
            let other = conn.other_end(id)?;
            network.node(other).map(|n| (&n.profile, conn.kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inferencer::generate_network;
    use crate::random::SequenceSource;
    use crate::rules::tests::profile;

    fn family_trio() -> Network {
        let people = vec![
            profile(1, "Quinn", 40),
            profile(2, "Quinn", 42),
            profile(3, "Quinn", 44),
        ];
        generate_network(&people, SequenceSource::constant(0.0))
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(EdgeFilter::parse("all"), Some(EdgeFilter::All));
        assert_eq!(
            EdgeFilter::parse("social_media"),
            Some(EdgeFilter::Only(RelationshipType::SocialMedia))
        );
        assert_eq!(EdgeFilter::parse("enemy"), None);
    }

    #[test]
    fn test_filter_edges() {
        let net = family_trio();
        assert_eq!(filter_edges(&net, EdgeFilter::All).len(), net.edges.len());
        let family = filter_edges(&net, EdgeFilter::Only(RelationshipType::Family));
        assert_eq!(family.len(), 3);
        assert!(filter_edges(&net, EdgeFilter::Only(RelationshipType::Legal)).is_empty());
    }

    #[test]
    fn test_neighbors_and_highlight() {
        let net = family_trio();
        assert_eq!(neighbors(&net, 1), vec![2, 3]);
        assert!(is_node_highlighted(&net, 3, Some(1)));
        assert!(is_node_highlighted(&net, 1, Some(1)));
        assert!(!is_node_highlighted(&net, 1, None));

        let edge = &net.edges[0];
        assert!(is_edge_highlighted(edge, None, EdgeFilter::All));
        assert!(is_edge_highlighted(edge, Some(edge.source_id), EdgeFilter::All));
        assert!(!is_edge_highlighted(
            edge,
            Some(edge.source_id),
            EdgeFilter::Only(RelationshipType::Legal)
        ));
    }

    #[test]
    fn test_relationship_types_sorted_unique() {
        let net = family_trio();
        assert_eq!(relationship_types(&net), vec![RelationshipType::Family]);
    }

    #[test]
    fn test_connected_profiles() {
        let net = family_trio();
        let linked = connected_profiles(&net, 2);
        let ids: Vec<i64> = linked.iter().map(|(p, _)| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(connected_profiles(&net, 77).is_empty());
    }
}
