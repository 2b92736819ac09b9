//! Interactive word index.
//!
//! Optionally loads a directory at start, then reads commands from stdin
//! until end of input.

use std::convert::Infallible;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use wordtrie::engine::DEFAULT_PERMUTATION_DEPTH;
use wordtrie::loader::MATCH_ALL_FILES;
use wordtrie::{Command, EngineConfig, IndexEngine, Repl, DEFAULT_STRIP_PATTERN};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show additional information
    #[arg(short, long, action = ArgAction::Set, default_value = "false", value_parser = parse_switch)]
    debug: bool,

    /// Max memory size in bytes. 0 for disable
    #[arg(short, long, default_value_t = 0)]
    memory_limit: u64,

    /// Pre-process every word before insert
    #[arg(short, long, action = ArgAction::Set, default_value = "true", value_parser = parse_switch)]
    normalize: bool,

    /// Index words only under their literal spelling
    #[arg(long, alias = "orderFixed", action = ArgAction::Set, default_value = "false", value_parser = parse_switch)]
    order_fixed: bool,

    /// Permutation window size; 0 indexes every full permutation
    #[arg(
        long = "permutations",
        aliases = ["numberOfPermutation", "nop"],
        default_value_t = DEFAULT_PERMUTATION_DEPTH,
        value_parser = parse_depth
    )]
    permutation_depth: i32,

    /// Pattern for removing unwanted characters, used for each word before insert
    #[arg(short, long, default_value = DEFAULT_STRIP_PATTERN)]
    pattern: String,

    /// Load data from this directory at start
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// File name glob for loading data at start
    #[arg(short, long, default_value = MATCH_ALL_FILES)]
    extension: String,
}

/// Anything other than `true` switches the option off.
fn parse_switch(value: &str) -> Result<bool, Infallible> {
    Ok(value == "true")
}

fn parse_depth(value: &str) -> Result<i32, Infallible> {
    Ok(value.parse().unwrap_or(DEFAULT_PERMUTATION_DEPTH))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("starting with {args:?}");

    let config = EngineConfig::default()
        .with_debug(args.debug)
        .with_normalize(args.normalize)
        .with_strip_pattern(args.pattern)
        .with_order_fixed(args.order_fixed)
        .with_permutation_depth(args.permutation_depth)
        .with_memory_limit(args.memory_limit);
    let engine = IndexEngine::new(config).context("invalid engine configuration")?;
    let mut repl = Repl::new(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = args.source {
        repl.execute(
            Command::Load {
                path,
                file_glob: args.extension,
            },
            &mut out,
        )?;
    }

    repl.run(io::stdin().lock(), &mut out)?;
    Ok(())
}
