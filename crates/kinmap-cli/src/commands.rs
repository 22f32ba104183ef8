//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::PathBuf;

use anyhow::{bail, Context};
use kinmap_core::{load_profiles, KinmapConfig};
use kinmap_network::{generate_network, LayoutEngine, Network, NetworkStats, RngSource};
use tracing::info;

/// Options shared by `generate` and `stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub profiles_path: PathBuf,
    pub seed: Option<u64>,
    pub layout: bool,
}

impl RunOptions {
    /// Parse `<profiles.json> [--seed N] [--no-layout]`.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut profiles_path = None;
        let mut seed = None;
        let mut layout = true;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--seed" => {
                    let raw = iter.next().context("--seed requires a value")?;
                    seed = Some(
                        raw.parse::<u64>()
                            .with_context(|| format!("invalid seed: {}", raw))?,
                    );
                }
                "--no-layout" => layout = false,
                flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
                path => {
                    if profiles_path.is_some() {
                        bail!("unexpected argument: {}", path);
                    }
                    profiles_path = Some(PathBuf::from(path));
                }
            }
        }

        Ok(Self {
            profiles_path: profiles_path.context("missing <profiles.json> argument")?,
            seed,
            layout,
        })
    }
}

/// Load profiles, generate the network, and lay it out unless disabled.
pub fn build_network(options: &RunOptions, config: &KinmapConfig) -> anyhow::Result<Network> {
    let profiles = load_profiles(&options.profiles_path).with_context(|| {
        format!("failed to load profiles from {}", options.profiles_path.display())
    })?;
    info!("Loaded {} profiles", profiles.len());

    let mut network = match options.seed.or(config.seed) {
        Some(seed) => {
            info!("Using seed {}", seed);
            generate_network(&profiles, RngSource::seeded(seed))
        }
        None => generate_network(&profiles, RngSource::thread()),
    };

    if options.layout {
        LayoutEngine::new(config.layout.clone()).layout(&mut network);
    }
    Ok(network)
}

pub fn run_generate(options: &RunOptions, config: &KinmapConfig) -> anyhow::Result<String> {
    let network = build_network(options, config)?;
    Ok(serde_json::to_string_pretty(&network)?)
}

pub fn run_stats(options: &RunOptions, config: &KinmapConfig) -> anyhow::Result<String> {
    let network = build_network(options, config)?;
    Ok(serde_json::to_string_pretty(&NetworkStats::compute(&network))?)
}

pub fn usage() -> String {
    [
        "Kinmap — relationship network generator for synthetic profiles",
        "",
        "Usage: kinmap <command> <profiles.json> [options]",
        "",
        "Commands:",
        "  generate <profiles.json>   Print the laid-out network as JSON",
        "  stats <profiles.json>      Print network statistics as JSON",
        "  help                       Show this help message",
        "",
        "Options:",
        "  --seed <N>                 Reproducible generation (overrides KINMAP_SEED)",
        "  --no-layout                Skip the layout pass",
    ]
    .join("\n")
}
