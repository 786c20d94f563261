//! Enemy Forge - Entry Point
//!
//! Generates a batch of enemies for each requested tier, then clones a blank
//! comment template once per sample comment.

use enemy_forge::core::error::Result;
use enemy_forge::prototype::{Comment, FieldMap, PrototypeRegistry};
use enemy_forge::{EntityFactory, StatProfile, Tier};

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Per-tier baselines
    Tiered,
    /// Shared baselines, per-tier roll ranges
    Plain,
}

/// Enemy Forge - weighted enemy generation and prototype cloning
#[derive(Parser, Debug)]
#[command(name = "enemy-forge")]
#[command(about = "Generate enemies per difficulty tier and clone prototype records")]
struct Args {
    /// Stat profile TOML file (overrides --variant)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Built-in profile to use when no file is given
    #[arg(long, value_enum, default_value_t = Variant::Tiered)]
    variant: Variant,

    /// Tier to generate; every configured tier when omitted
    #[arg(long)]
    tier: Option<Tier>,

    /// Enemies per tier
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "enemy_forge=debug"
    } else {
        "enemy_forge=info"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let profile = match &args.profile {
        Some(path) => StatProfile::load_file(path)?,
        None => match args.variant {
            Variant::Tiered => StatProfile::tiered(),
            Variant::Plain => StatProfile::plain(),
        },
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Using profile '{}' with seed {}", profile.name, seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let tiers: Vec<Tier> = match args.tier {
        Some(tier) => vec![tier],
        None => profile.configured_tiers().collect(),
    };

    let factory = EntityFactory::new(&profile)?;
    for tier in tiers {
        println!("{} Factory", tier.label());
        for enemy in factory.create_many(tier, args.count, &mut rng)? {
            println!("{}", enemy.status());
        }
        println!();
    }

    run_comment_demo()
}

/// Clone a blank comment once per sample row
fn run_comment_demo() -> Result<()> {
    let rows = [
        json!({ "id": 1, "username": "Bob", "text": "Hi!" }),
        json!({ "id": 2, "username": "Adrain", "text": "Yo!" }),
        json!({ "id": 3, "username": "James", "text": "HHH!" }),
        json!({ "id": 4, "username": "Sam", "text": "Damn!" }),
        json!({ "id": 5, "username": "Paul", "text": "Dude!" }),
        json!({ "id": 6, "username": "Alex", "text": "Senyour!" }),
        json!({ "id": 7, "username": "Zen", "text": "Yoo!" }),
        json!({ "id": 8, "username": "Tim", "text": "Yes!" }),
    ];

    let mut registry = PrototypeRegistry::new();
    registry.register("comment", Comment::default());

    println!("Comments");
    for row in rows {
        let fields: FieldMap = match row {
            serde_json::Value::Object(map) => map,
            _ => continue,
        };
        let comment = registry.clone_with_fields("comment", &fields)?;
        println!("{}", comment);
    }
    Ok(())
}
