//! Command line front end for warband.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use warband::build_info;
use warband::lair::{generate_lair_map, render_ascii, LairMapOptions};
use warband::logging::init_tracing;
use warband::monsters::import::{csv_help, load_csv};
use warband::presentation::{render, Spice};
use warband::{build_from_pool, BuildOptions, MonsterPool, Party, Target};

/// Range for seeds drawn when none is given, short enough to read back
const AUTO_SEED_MAX: u64 = 999_999;

/// Encounter builder for 5e-style tabletop games
#[derive(Parser)]
#[command(name = "warband", long_about = None)]
#[command(version = build_info::VERSION)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build an encounter for a party
    Build(BuildArgs),

    /// Draw a procedural lair map
    Map(MapArgs),

    /// Show the CSV format for extending the monster pool
    CsvTemplate,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Party levels, e.g. "4x5" or "5,5,4,3"
    #[arg(short, long, default_value = "4x5")]
    party: Party,

    /// easy, medium, hard, deadly, a scaled label like "1.2x hard", or an xp value
    #[arg(short, long)]
    target: Option<Target>,

    /// Only monsters found in this environment
    #[arg(long)]
    env: Option<String>,

    /// Only these creature types (comma separated)
    #[arg(long, value_delimiter = ',')]
    include: Vec<String>,

    /// Never these creature types (comma separated)
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Monsters with at least one of these tags (comma separated)
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Fractional slack around the budget
    #[arg(long)]
    tolerance: Option<f64>,

    /// Largest group to build
    #[arg(long)]
    max_monsters: Option<usize>,

    /// Allow repeats even when other monsters are available
    #[arg(long)]
    no_variety: bool,

    /// Random seed for a reproducible build
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of search trials
    #[arg(long)]
    trials: Option<u32>,

    /// Growth attempts per trial
    #[arg(long)]
    retries: Option<u32>,

    /// CSV file of extra monsters (repeatable)
    #[arg(long = "import", value_name = "FILE")]
    imports: Vec<PathBuf>,

    /// JSON file with build options; flags override it
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Print the encounter as JSON
    #[arg(long)]
    json: bool,
}

impl BuildArgs {
    /// Options file first, then command line overrides.
    fn build_options(&self) -> Result<BuildOptions> {
        let mut options = match &self.options {
            Some(path) => BuildOptions::from_json_file(path)?,
            None => BuildOptions::default(),
        };

        if let Some(target) = self.target {
            options.target = target;
        }
        if let Some(env) = &self.env {
            options.filter.environment = Some(env.clone());
        }
        if !self.include.is_empty() {
            options.filter.include_types = self.include.clone();
        }
        if !self.exclude.is_empty() {
            options.filter.exclude_types = self.exclude.clone();
        }
        if !self.tags.is_empty() {
            options.filter.tags_any = self.tags.clone();
        }
        if let Some(tolerance) = self.tolerance {
            options.tolerance = tolerance;
        }
        if let Some(max_monsters) = self.max_monsters {
            options.max_monsters = max_monsters;
        }
        if self.no_variety {
            options.prefer_variety = false;
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }
        if let Some(trials) = self.trials {
            options.limits.trials = trials;
        }
        if let Some(retries) = self.retries {
            options.limits.retries = retries;
        }
        Ok(options)
    }

    fn execute(self) -> Result<()> {
        if self.party.is_empty() {
            anyhow::bail!("party is empty; pass levels like --party 4x5");
        }
        let mut options = self.build_options()?;
        let seed = *options.seed.get_or_insert_with(auto_seed);

        let mut pool = MonsterPool::seed();
        for path in &self.imports {
            let extra = load_csv(path)
                .with_context(|| format!("Failed to import monsters from {}", path.display()))?;
            pool = pool.extend(extra);
        }

        let encounter =
            build_from_pool(&self.party, &pool, &options).context("Failed to build encounter")?;

        if self.json {
            let json = serde_json::to_string_pretty(&encounter)
                .context("Failed to serialize encounter")?;
            println!("{json}");
            eprintln!("Seed: {seed}");
        } else {
            let spice = Spice::roll(&mut ChaCha8Rng::seed_from_u64(seed));
            print!("{}", render(&encounter, &self.party, Some(&spice)));
            println!("\nSeed: {seed}");
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
struct MapArgs {
    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Random room placements to try
    #[arg(long)]
    room_attempts: Option<u32>,

    #[arg(long)]
    min_room: Option<usize>,

    #[arg(long)]
    max_room: Option<usize>,

    /// Chance for a floor cell to be water (0..=1)
    #[arg(long)]
    water_chance: Option<f64>,

    /// Chance for a floor cell to be a hazard (0..=1)
    #[arg(long)]
    hazard_chance: Option<f64>,

    /// Random seed for a reproducible map
    #[arg(short, long)]
    seed: Option<u64>,
}

impl MapArgs {
    fn execute(self) -> Result<()> {
        let defaults = LairMapOptions::default();
        let seed = self.seed.unwrap_or_else(auto_seed);
        let options = LairMapOptions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            room_attempts: self.room_attempts.unwrap_or(defaults.room_attempts),
            min_room: self.min_room.unwrap_or(defaults.min_room),
            max_room: self.max_room.unwrap_or(defaults.max_room),
            water_chance: self.water_chance.unwrap_or(defaults.water_chance),
            hazard_chance: self.hazard_chance.unwrap_or(defaults.hazard_chance),
            seed: Some(seed),
        };

        let map = generate_lair_map(&options).context("Failed to generate lair map")?;
        print!("{}", render_ascii(&map));
        println!("Seed: {seed}");
        Ok(())
    }
}

fn auto_seed() -> u64 {
    rand::thread_rng().gen_range(1..=AUTO_SEED_MAX)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build(args) => args.execute(),
        Command::Map(args) => args.execute(),
        Command::CsvTemplate => {
            print!("{}", csv_help());
            Ok(())
        }
    }
}
