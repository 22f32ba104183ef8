//! Kinmap — relationship network generator for synthetic identity profiles.

use tracing_subscriber::EnvFilter;

mod commands;

use commands::RunOptions;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        eprintln!("{}", commands::usage());
        std::process::exit(1);
    };

    match command.as_str() {
        "generate" | "--generate" => {
            let options = RunOptions::parse(&args[2..])?;
            let config = kinmap_core::KinmapConfig::from_env()?;
            println!("{}", commands::run_generate(&options, &config)?);
        }
        "stats" | "--stats" => {
            let options = RunOptions::parse(&args[2..])?;
            let config = kinmap_core::KinmapConfig::from_env()?;
            println!("{}", commands::run_stats(&options, &config)?);
        }
        "--help" | "-h" | "help" => {
            println!("{}", commands::usage());
        }
        other => {
            eprintln!("Unknown command: {}. Use 'kinmap help' for usage.", other);
            std::process::exit(1);
        }
    }

    Ok(())
}
