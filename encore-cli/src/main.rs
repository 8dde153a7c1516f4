mod config;
mod interact;
mod output;

use clap::Parser;
use encore_core::{RankingSession, SelectionMode, SessionConfig, SkipPolicy};
use std::path::PathBuf;

use crate::interact::StopReason;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "encore", version, about = "Rank your attended shows through pairwise comparisons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an interactive ranking session on a list of shows
    Rank(RankArgs),
    /// Create a default config file at ~/.config/encore/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one show per line (or a JSON array of names)
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline show name (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// Pool label for the summary line (e.g. "set", "festival")
    #[arg(long)]
    pool: Option<String>,

    /// Focus on under-ranked shows instead of the general selector
    #[arg(long)]
    focus: bool,

    /// Games threshold for --focus: shows with fewer decided comparisons
    /// count as under-ranked
    #[arg(long)]
    threshold: Option<u32>,

    /// Maximum win-chain length treated as already answered
    #[arg(long)]
    depth: Option<usize>,

    /// RNG seed for reproducible pair picks
    #[arg(long)]
    seed: Option<u64>,

    /// Skip semantics: "block" or "reoffer"
    #[arg(long)]
    skip_policy: Option<String>,

    /// Stop after this many presented comparisons
    #[arg(long)]
    max_comparisons: Option<usize>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Show progress after each decision
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/encore/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a string as either a JSON array of strings or plain text (one item per line).
fn parse_items_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let items: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
        items.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one item per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load items from --items file and --item inline args. Stdin stays free
/// for the interactive decisions.
fn load_items(args: &RankArgs) -> Vec<String> {
    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse_items_from_str(&content);
    }

    items.extend(args.inline_items.iter().cloned());

    if items.is_empty() {
        bail("No shows provided. Use --items <file> or --item <name>.");
    }
    if items.len() < 2 {
        bail(format!("Need at least 2 shows to rank, got {}", items.len()));
    }
    items
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default threshold, depth, etc.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let items = load_items(&args);
    let item_ids: Vec<i64> = (0..items.len() as i64).collect();

    let skip_policy = match args.skip_policy.as_deref().or(cfg.skip_policy.as_deref()) {
        Some("block") | None => SkipPolicy::Block,
        Some("reoffer") => SkipPolicy::Reoffer,
        Some(other) => bail(format!("Unknown skip policy \"{other}\". Use \"block\" or \"reoffer\".")),
    };

    let mut session_config = SessionConfig {
        mode: if args.focus {
            SelectionMode::UnderRankedFocus
        } else {
            SelectionMode::General
        },
        skip_policy,
        rng_seed: args.seed,
        ..SessionConfig::default()
    };
    if let Some(threshold) = args.threshold.or(cfg.threshold) {
        session_config.focus_threshold = threshold;
    }
    if let Some(depth) = args.depth.or(cfg.depth) {
        session_config.transitive_depth = depth;
    }

    let max_comparisons = args.max_comparisons.or(cfg.max_comparisons);

    if args.verbose {
        eprintln!(
            "Ranking {} shows{}",
            items.len(),
            args.pool.as_deref().map(|p| format!(" in pool \"{p}\"")).unwrap_or_default(),
        );
    }

    let mut session = RankingSession::new(&item_ids, session_config);
    let stats = interact::run_session(&mut session, &items, max_comparisons, args.verbose);

    let complete = session.is_complete();
    match stats.stop_reason {
        StopReason::Complete => println!("\nPool fully ranked — no comparison left is worth asking."),
        StopReason::Exhausted => println!("\nNothing left worth asking right now."),
        StopReason::CapReached => println!("\nComparison cap reached."),
        StopReason::Quit => println!("\nSession ended."),
    }

    let standings = session.standings();
    if args.json {
        output::print_json(&standings, &items, stats.decided, stats.skipped, complete);
    } else {
        output::print_table(&standings, &items, stats.decided, stats.skipped, complete);
    }
}
