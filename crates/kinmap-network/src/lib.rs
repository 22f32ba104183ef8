//! Relationship network — inference, layout, and analysis.
//!
//! `generate_network` scores every profile pair against a fixed rule set and
//! samples typed relationships from the candidates. `LayoutEngine` then
//! places the nodes with a circular start and a fixed number of
//! repulsion/attraction passes. Randomness is injected through
//! `RandomSource` so tests can pin every draw.

pub mod inferencer;
pub mod layout;
pub mod random;
pub mod rules;
pub mod stats;
pub mod types;
pub mod view;

pub use inferencer::{candidates, generate_network, generate_network_default};
pub use layout::LayoutEngine;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use stats::{Complexity, NetworkStats};
pub use types::*;
pub use view::EdgeFilter;
