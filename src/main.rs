use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cocoa_bracket::charts::*;
use cocoa_bracket::data_loader::*;
use cocoa_bracket::export::*;
use cocoa_bracket::report::*;
use cocoa_bracket::tournament::*;
use cocoa_bracket::tournament_context::*;

/*
    Everything random is drawn from one StdRng seeded on the command line, so the same seed
    always gives the same recipes and the same bracket. Only the generated_at timestamp changes.
*/

/// Synthetic hot cocoa tournament generator
#[derive(Parser)]
#[command(name = "cocoa_bracket")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate recipes, run the bracket and export JSON, Markdown and CSV
    Generate {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Reshape an exported tournament into chart-ready data
    Charts {
        #[arg(long, default_value = DATA_FILE)]
        input: PathBuf,
        #[arg(long, default_value = VISUALIZATION_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Generate { seed, output_dir }) => generate(seed, output_dir),
        Some(Commands::Charts { input, output }) => build_charts(input, output),
        None => generate(42, PathBuf::from(".")),
    }
}

fn generate(seed: u64, output_dir: PathBuf) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tournament = Tournament::new(TournamentContext::default());

    info!(seed, "generating recipes");
    let count = tournament.context.recipe_count;
    tournament.generate_recipes(count, &mut rng).context("generating recipes")?;

    tournament.run_tournament(&mut rng).context("running tournament")?;
    info!(matches = tournament.matches.len(), champion = ?tournament.get_champion(), "tournament complete");

    output_report(&tournament);

    save_all(&tournament, &output_dir)
        .with_context(|| format!("exporting to {}", output_dir.display()))?;

    Ok(())
}

fn build_charts(input: PathBuf, output: PathBuf) -> Result<()> {
    let data = load_data(&input).with_context(|| format!("loading {}", input.display()))?;
    let viz = build_visualizations(&data).context("building chart data")?;

    output_chart_summary(&viz);

    save_visualizations(&viz, &output).with_context(|| format!("writing {}", output.display()))?;
    info!(path = %output.display(), "visualization data saved");

    Ok(())
}
