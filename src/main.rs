use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{prelude::*, EnvFilter};
use u_precedence::input::PrintQueue;
use u_precedence::ordering::{EngineConfig, PositionLookup, TieBreak};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Ascending,
    FirstSeen,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LookupArg {
    Indexed,
    Scan,
}

/// Check page updates against ordering rules and sum middle pages.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Rules, a blank line, then one comma-separated update per line.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Order of pages the rules leave unconstrained.
    #[arg(long, value_enum, default_value_t = TieBreakArg::Ascending)]
    tie_break: TieBreakArg,

    /// How rule endpoints are located during validation.
    #[arg(long, value_enum, default_value_t = LookupArg::Indexed)]
    lookup: LookupArg,

    /// Evaluate updates on the current thread only.
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_tie_break(match self.tie_break {
                TieBreakArg::Ascending => TieBreak::Ascending,
                TieBreakArg::FirstSeen => TieBreak::FirstSeen,
            })
            .with_position_lookup(match self.lookup {
                LookupArg::Indexed => PositionLookup::Indexed,
                LookupArg::Scan => PositionLookup::LinearScan,
            })
            .with_parallel(!self.sequential)
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();

    let cli = Cli::parse();
    let queue = PrintQueue::from_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let summary = queue.summarize(cli.engine_config());
    tracing::info!(
        valid = summary.valid_count,
        corrected = summary.corrected_count,
        unsatisfiable = summary.unsatisfiable_count,
        "evaluated updates"
    );

    println!(
        "sum of middle elements from valid updates =\n\t{}",
        summary.valid_middle_sum
    );
    println!(
        "sum of middle elements from corrected invalid updates =\n\t{}",
        summary.corrected_middle_sum
    );
    Ok(())
}
