//! Headless demo: generate a run of levels and print them as text.

use anyhow::{Context, Result};
use board_roguelike::camera::Camera;
use board_roguelike::engine::GridMapper;
use board_roguelike::events::GameEvent;
use board_roguelike::turns::{FoodSupply, TurnClock};
use board_roguelike::{Category, Coord, LevelConfig, LevelDirector};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate roguelike boards level by level
#[derive(Parser)]
#[command(name = "board-demo")]
#[command(about = "Generate and print roguelike boards", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file overriding the default level configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// How many levels to generate
    #[arg(long, default_value_t = 3)]
    levels: u32,

    /// Turns to play on each level before moving on
    #[arg(long, default_value_t = 5)]
    turns: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => LevelConfig::load(path)
            .with_context(|| format!("loading level config from {}", path.display()))?,
        None => LevelConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, levels = cli.levels, "starting run");

    let mut food = FoodSupply::new(&config.food_supply);
    let mut director = LevelDirector::headless(config, seed);
    let mut clock = TurnClock::new();
    let mut camera = Camera::new(800.0, 600.0);

    for _ in 0..cli.levels {
        let level = director.next_level();
        let number = level.number();
        let (width, height) = (level.board.width, level.board.height);
        let food_on_board: Vec<Coord> = level
            .placed
            .iter()
            .filter(|p| p.category == Category::Food)
            .map(|p| p.coord)
            .collect();

        if let Some(level) = director.current() {
            println!("Level {} ({}x{})", number, width, height);
            print!("{}", director.tiles().render(&level.board));
        }

        camera.frame_board(width, height, director.mapper().cell_size);
        debug!(zoom = camera.zoom, position = ?camera.position, "camera framed board");

        // One turn per step, eating one food item off the board each turn.
        let mut log = Vec::new();
        for turn in 0..cli.turns as usize {
            clock.advance(director.events_mut());
            let eaten = food_on_board.get(turn).and_then(|&coord| director.remove_at(coord));
            if let Some(eaten) = eaten {
                camera.set_tracking_target(director.mapper().world_position(eaten.coord));
                let event = food.pick_up(eaten.variant);
                director.events_mut().push(event);
            }
            camera.update(1.0 / 60.0);
            log.extend(food.pump(director.events_mut()));
            if food.is_starved() {
                break;
            }
        }

        for event in &log {
            if let GameEvent::Starved { turn } = event {
                println!("Starved on turn {}", turn);
            }
        }
        if let Some(level) = director.current() {
            debug!(food_left = level.count(Category::Food), "turns played");
        }
        println!("Food: {}\n", food.food());
        if food.is_starved() {
            break;
        }
    }

    Ok(())
}
