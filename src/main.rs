//! Potion Policy - command line entry point
//!
//! Evaluates a single turn's combat snapshot or validates a pre-run
//! loadout, printing the result as JSON or text.

use std::fs;
use std::path::PathBuf;

use ahash::AHashMap;
use clap::{Parser, Subcommand};
use potion_policy::catalog::{load_catalog, ResourceCatalog};
use potion_policy::core::config::load_policy_config;
use potion_policy::core::error::{PolicyError, Result};
use potion_policy::core::types::{slots_from_ids, ResourceId};
use potion_policy::{CombatState, DecisionPolicy, LoadoutValidator, PolicyConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Healing resource advisor for dungeon runs
#[derive(Parser, Debug)]
#[command(name = "potion-policy")]
#[command(about = "Decide when to drink healing juice during a dungeon run")]
struct Args {
    /// Resource catalog TOML (defaults to the built-in table)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, global = true, default_value = "json")]
    format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend whether to use a healing resource this turn
    Decide {
        /// Combat snapshot JSON file
        #[arg(long)]
        state: PathBuf,

        /// Slot contents, comma separated (0 = empty)
        #[arg(long, value_delimiter = ',')]
        slots: Vec<u32>,

        /// Policy config TOML (defaults to built-in thresholds)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a loadout before starting a run
    Validate {
        /// Loadout ids, comma separated (0 = empty)
        #[arg(long, value_delimiter = ',')]
        loadout: Vec<u32>,

        /// Owned balances as id=count pairs, comma separated
        #[arg(long, value_delimiter = ',')]
        owned: Vec<String>,
    },
    /// List the resource catalog
    Catalog,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("potion_policy=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => ResourceCatalog::builtin(),
    };

    match args.command {
        Command::Decide {
            state,
            slots,
            config,
        } => {
            let config = match config {
                Some(path) => load_policy_config(&path)?,
                None => PolicyConfig::default(),
            };
            let policy = DecisionPolicy::new(catalog, config)?;
            let state = CombatState::from_json(&fs::read_to_string(&state)?)?;
            let slots = slots_from_ids(&slots).ok_or_else(|| {
                PolicyError::InvalidState(format!("at most 4 slots, got {}", slots.len()))
            })?;

            let result = policy.decide(&state, &slots)?;
            if args.format == "text" {
                println!("Use: {}", if result.should_use { "yes" } else { "no" });
                if let (Some(slot), Some(resource)) = (result.slot, &result.resource) {
                    println!("Slot: {} ({})", slot, resource.name);
                }
                println!("Stage: {}", result.stage.label());
                println!(
                    "Risk: {:?} (score {:.1})",
                    result.assessment.level,
                    result.assessment.level.score()
                );
                println!("Reasoning: {}", result.reasoning);
            } else {
                print_json(&result)?;
            }
        }
        Command::Validate { loadout, owned } => {
            let loadout: Vec<ResourceId> = loadout.into_iter().map(ResourceId).collect();
            let validator = LoadoutValidator::new(&catalog);
            let validated = if owned.is_empty() {
                validator.validate(&loadout)?
            } else {
                validator.validate_with_balances(&loadout, &parse_balances(&owned)?)?
            };

            if args.format == "text" {
                for entry in &validated.resolved {
                    println!("Slot {}: {}", entry.slot, entry.resource.name);
                }
                println!("{} of 4 slots filled", validated.resolved.len());
            } else {
                print_json(&validated)?;
            }
        }
        Command::Catalog => {
            let defs = catalog.definitions();
            if args.format == "text" {
                for def in defs {
                    println!(
                        "{:>4}  {:<18} {:?} heal={}",
                        def.id.0, def.name, def.category, def.heal_amount
                    );
                }
            } else {
                print_json(&defs)?;
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_balances(pairs: &[String]) -> Result<AHashMap<ResourceId, u32>> {
    let mut owned = AHashMap::new();
    for pair in pairs {
        let parsed = pair
            .split_once('=')
            .and_then(|(id, count)| {
                Some((
                    id.trim().parse::<u32>().ok()?,
                    count.trim().parse::<u32>().ok()?,
                ))
            });
        let (id, count) = parsed.ok_or_else(|| {
            PolicyError::InvalidConfig(format!("expected id=count, got '{}'", pair))
        })?;
        owned.insert(ResourceId(id), count);
    }
    Ok(owned)
}
