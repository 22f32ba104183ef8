//! Relationship inference over every unordered profile pair.

use kinmap_core::Profile;
use tracing::{debug, info};

use crate::random::{RandomSource, RngSource};
use crate::rules::{self, PairFacts, RULE_ORDER};
use crate::types::{Network, NetworkNode, Relationship, RelationshipType};

/// Probability that each of the top-ranked candidates becomes an edge.
pub const INCLUSION_CHANCE: f64 = 0.7;
/// Upper bound on how many candidates per pair are considered.
pub const MAX_RELATIONSHIPS_PER_PAIR: usize = 3;

/// Build the relationship network for a profile list.
///
/// Nodes are created in input order with positions at the origin; run
/// `LayoutEngine` to place them. Pairs are visited as `(i, j)` with `i < j`,
/// so `profiles[i]` is always the edge source.
pub fn generate_network<R: RandomSource>(profiles: &[Profile], mut rng: R) -> Network {
    let mut edges = Vec::new();
    let mut pairs = 0usize;

    for (i, source) in profiles.iter().enumerate() {
        for target in &profiles[i + 1..] {
            pairs += 1;
            let possible = candidates(source, target, &mut rng);

            let wanted = rng.int_inclusive(1, MAX_RELATIONSHIPS_PER_PAIR);
            let considered = wanted.min(possible.len());
            let before = edges.len();
            for relationship in possible.into_iter().take(considered) {
                if rng.chance(INCLUSION_CHANCE) {
                    edges.push(relationship);
                }
            }

            debug!(
                "Pair {}-{}: kept {} of {} considered",
                source.id,
                target.id,
                edges.len() - before,
                considered
            );
        }
    }

    let mut network = Network {
        nodes: profiles
            .iter()
            .map(|profile| NetworkNode {
                id: profile.id,
                profile: profile.clone(),
                x: 0.0,
                y: 0.0,
                connections: Vec::new(),
            })
            .collect(),
        edges,
    };
    network.refresh_connections();

    info!(
        "Generated network: {} nodes, {} pairs, {} edges",
        network.nodes.len(),
        pairs,
        network.edges.len()
    );

    network
}

/// `generate_network` with the unseeded thread-local generator.
pub fn generate_network_default(profiles: &[Profile]) -> Network {
    generate_network(profiles, RngSource::thread())
}

/// Candidate relationships for one pair, strongest first.
///
/// Eligible kinds are taken in rule order; each passes its probability gate
/// (if any) before its strength is drawn. Ties keep rule order.
pub fn candidates<R: RandomSource>(
    source: &Profile,
    target: &Profile,
    mut rng: R,
) -> Vec<Relationship> {
    let facts = PairFacts::new(source, target);
    let mut found = Vec::new();

    for &kind in RULE_ORDER {
        if !facts.is_eligible(kind) || !passes_gate(kind, &facts, &mut rng) {
            continue;
        }
        found.push(build(kind, source, target, &facts, &mut rng));
    }

    found.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    found
}

/// Stochastic part of each rule. Deterministic kinds always pass.
fn passes_gate<R: RandomSource>(kind: RelationshipType, facts: &PairFacts, rng: &mut R) -> bool {
    match kind {
        RelationshipType::Family
        | RelationshipType::Colleague
        | RelationshipType::Healthcare
        | RelationshipType::Legal => true,
        RelationshipType::Business => rng.chance(rules::BUSINESS_CHANCE),
        RelationshipType::Neighbor => rng.chance(rules::NEIGHBOR_CHANCE),
        RelationshipType::Friend => facts.same_city || rng.chance(rules::DISTANT_FRIEND_CHANCE),
        RelationshipType::SocialMedia => rng.chance(rules::social_media_probability(facts)),
        RelationshipType::Romantic => {
            let compatible = facts.universal_orientation || rng.chance(rules::ORIENTATION_COIN);
            compatible && rng.chance(rules::ROMANTIC_CHANCE)
        }
        RelationshipType::Education => rng.chance(rules::EDUCATION_CHANCE),
    }
}

fn build<R: RandomSource>(
    kind: RelationshipType,
    source: &Profile,
    target: &Profile,
    facts: &PairFacts,
    rng: &mut R,
) -> Relationship {
    let strength =
        (rules::strength_base(kind, facts) + rng.jitter(rules::STRENGTH_JITTER)).clamp(0.0, 1.0);

    Relationship {
        id: Relationship::edge_id(source.id, target.id, kind),
        source_id: source.id,
        target_id: target.id,
        kind,
        strength,
        description: rules::describe(kind, source, target),
        context: rules::context(kind, source, target),
    }
}
