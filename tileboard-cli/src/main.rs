use tileboard_core::{
    DrawConfig, GeneratorConfig, Player, draw_board, generate_board, generate_board_seeded,
    spawn_players,
};

use std::{
    fs::create_dir as create_generated_dir,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use svg::save as save_as_svg;
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Number of tiles along each side of the board
    #[arg(short = 'n', long, default_value_t = 8)]
    size: u32,

    /// Cumulative thresholds for PLAIN, MOUNTAIN, DESERT and LAKE; the rest is FOREST
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = [0.5, 0.6, 0.7, 0.8]
    )]
    thresholds: Vec<f64>,

    /// Chance of a ridge between two mountain or desert tiles
    #[arg(long, default_value_t = 0.9)]
    both_high_prob: f64,

    /// Chance of a ridge next to a single mountain or desert tile
    #[arg(long, default_value_t = 0.3)]
    one_high_prob: f64,

    /// River growth attempts per tile of board size
    #[arg(long, default_value_t = 1.5)]
    river_multiplier: f64,

    /// Maximum number of edges a single river converts
    #[arg(long, default_value_t = 10)]
    river_length: usize,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    /// Skip placing the starting players
    #[arg(long)]
    no_players: bool,

    #[clap(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Output file, defaults to a timestamped file under `generated/`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = GeneratorConfig::builder()
        .board_size(args.size)
        .terrain_thresholds(&args.thresholds)
        .both_high_mountain_prob(args.both_high_prob)
        .one_high_mountain_prob(args.one_high_prob)
        .river_count_multiplier(args.river_multiplier)
        .river_max_length(args.river_length)
        .build()
        .context("Invalid generator configuration")?;

    event!(
        Level::INFO,
        "Generating {0}x{0} board with {1} river attempts (multiplier {2})",
        config.board_size().get(),
        config.river_count(),
        config.river_count_multiplier()
    );

    let mut board = match args.seed {
        Some(seed) => generate_board_seeded(&config, seed),
        None => generate_board(&config),
    };

    let players = if args.no_players {
        Vec::new()
    } else {
        Player::default_roster()
    };

    if !players.is_empty() {
        // Spawning draws from its own stream so a seed still pins the terrain
        let spawned = match args.seed {
            Some(seed) => spawn_players(
                &mut board,
                &players,
                &mut StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => spawn_players(&mut board, &players, &mut rand::rng()),
        };

        if let Err(e) = spawned {
            event!(Level::WARN, "Could not place every player: {}", e);
        }
    }

    let output = match args.output {
        Some(path) => path,
        None => default_output_path(args.format)?,
    };

    println!("Saving board as {:?} to: {}", args.format, output.display());

    match args.format {
        OutputFormat::Svg => {
            let document = draw_board(&board, &players, &DrawConfig::default());
            save_as_svg(&output, &document).context("Failed to save SVG file")?;
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&board).context("Failed to serialize board")?;
            std::fs::write(&output, json).context("Failed to save JSON file")?;
        }
    }

    Ok(())
}

fn default_output_path(format: OutputFormat) -> Result<PathBuf> {
    let now = std::time::SystemTime::now().duration_since(std::time::SystemTime::UNIX_EPOCH)?;

    if !Path::new("generated")
        .try_exists()
        .context("Error checking for 'generated' directory")?
    {
        create_generated_dir("generated").context("Failed to create 'generated' directory")?;
        println!("Directory 'generated' created.");
    }

    Ok(PathBuf::from(format!(
        "generated/{}-board.{}",
        now.as_millis(),
        format.extension()
    )))
}
