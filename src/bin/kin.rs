//! `kin`: print how one person in a family file is related to another.
//!
//! ```text
//! kin family.json Alice Carol
//! Alice is Carol's mother
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kinship::{FamilyTree, ResolverConfig, TableSource};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "kin", about = "Name the relationship between two people in a family file")]
struct Args {
    /// Path to file with family data
    filepath: PathBuf,
    /// Name of first person
    name1: String,
    /// Name of second person
    name2: String,
    /// Relationship-term table to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,
    /// Term for relatives whose path is not in the table
    #[arg(long, value_name = "TERM")]
    fallback: Option<String>,
    /// Also print the path and the shared relative it passes through
    #[arg(long)]
    explain: bool,
}

/// Logs go to stderr; `KINSHIP_LOG` takes a standard filter directive.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("KINSHIP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let source = args.table.clone().map_or(TableSource::Builtin, TableSource::File);
    let mut config = ResolverConfig::default();
    if let Some(fallback) = &args.fallback {
        config.fallback_term = fallback.clone();
    }

    let tree = FamilyTree::open(&args.filepath, &source)
        .with_context(|| format!("loading family from {}", args.filepath.display()))?
        .with_config(config);

    let relation = tree.explain(&args.name1, &args.name2)?;
    match relation {
        None => println!("{} is not related to {}", args.name1, args.name2),
        Some(rel) => {
            let term = rel.term(&tree.config().fallback_term);
            println!("{} is {}'s {}", args.name1, args.name2, term);
            if args.explain {
                println!("  path: {}", rel.path);
                println!("  via:  {}", tree.family().name_of(rel.via));
            }
        }
    }

    Ok(())
}
