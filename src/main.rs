use clap::Parser;
use tracing_subscriber::EnvFilter;

use projboard::gui::{AppConfig, ProjectsApp, ThemeChoice};

#[derive(Parser)]
#[command(name = "projboard")]
#[command(about = "Create, list and search projects from a small dashboard")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Color theme of the window
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Start with an empty project list instead of the sample projects
    #[arg(long)]
    no_seed: bool,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "projboard=debug" } else { "info" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose)?;

    let config = AppConfig {
        theme: args.theme,
        seed: !args.no_seed,
    };
    tracing::info!(?config, "starting dashboard");

    ProjectsApp::run(config)?;
    Ok(())
}
