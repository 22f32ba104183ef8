//! Layout parameters and environment configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters for circular placement and spring/repulsion relaxation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Canvas center used for the initial circle.
    pub center_x: f64,
    pub center_y: f64,
    /// Radius of the initial circle.
    pub radius: f64,
    /// Relaxation passes. Always run in full.
    pub iterations: usize,
    /// Pairs closer than this push apart.
    pub repulsion_distance: f64,
    /// Displacement applied to each node of a repelling pair.
    pub repulsion_step: f64,
    /// Ideal edge length at strength 0.
    pub base_ideal_distance: f64,
    /// How much a strength of 1.0 shortens the ideal edge length.
    pub strength_pull: f64,
    /// Attraction displacement per unit of edge strength.
    pub attraction_step: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 300.0,
            center_y: 250.0,
            radius: 180.0,
            iterations: 100,
            repulsion_distance: 80.0,
            repulsion_step: 0.5,
            base_ideal_distance: 120.0,
            strength_pull: 40.0,
            attraction_step: 0.1,
            min_x: 50.0,
            max_x: 550.0,
            min_y: 50.0,
            max_y: 450.0,
        }
    }
}

impl LayoutConfig {
    /// Reject bounds that cannot be clamped into.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|b| b.is_finite());
        if !finite || self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(Error::Config(format!(
                "invalid bounds: x [{}, {}], y [{}, {}]",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        Ok(())
    }

    /// Ideal edge length for a relationship of the given strength.
    pub fn ideal_distance(&self, strength: f64) -> f64 {
        self.base_ideal_distance - strength * self.strength_pull
    }
}

/// Top-level Kinmap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KinmapConfig {
    pub layout: LayoutConfig,
    /// Fixed seed for reproducible networks. `None` draws from the thread RNG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl KinmapConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Reads `KINMAP_SEED` and `KINMAP_LAYOUT_ITERATIONS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = env_var::<u64>("KINMAP_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(iterations) = env_var::<usize>("KINMAP_LAYOUT_ITERATIONS")? {
            config.layout.iterations = iterations;
        }

        config.layout.validate()?;
        Ok(config)
    }
}

fn env_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} is not a valid value: {:?}", name, raw))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::Config(format!("{}: {}", name, e))),
    }
}
