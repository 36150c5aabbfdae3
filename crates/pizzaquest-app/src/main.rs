//! pizzaquest: play a level from the terminal.
//!
//! Usage:
//!   pizzaquest --level levels/demo.json --seed 7
//!   echo "d e d d space q" | pizzaquest --config fast.json

use std::path::{Path, PathBuf};
use std::process;

use pizzaquest_app::config::load_config;
use pizzaquest_app::game_loop::spawn_game_loop;
use pizzaquest_app::input::spawn_stdin_reader;
use pizzaquest_core::enums::Outcome;
use pizzaquest_sim::{SimConfig, SimulationEngine};
use pizzaquest_terrain::load_level;

const DEFAULT_LEVEL: &str = "levels/demo.json";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().skip(1).any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let level_path = parse_path(&args, "--level").unwrap_or_else(|| PathBuf::from(DEFAULT_LEVEL));
    let mut config = match parse_path(&args, "--config") {
        Some(path) => read_config(&path),
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_seed(&args) {
        config.seed = seed;
    }

    let level = match load_level(&level_path) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: cannot load {}: {e}", level_path.display());
            process::exit(1);
        }
    };
    let engine = match SimulationEngine::new(config, &level) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: level {} is not playable: {e}", level.id);
            process::exit(1);
        }
    };

    let (state, handle) = spawn_game_loop(engine);
    spawn_stdin_reader(state.command_tx.clone());

    let outcome = match handle.join() {
        Ok(outcome) => outcome,
        Err(_) => {
            eprintln!("Error: game loop panicked");
            process::exit(1);
        }
    };
    let time = state
        .latest_snapshot
        .lock()
        .ok()
        .and_then(|snap| snap.as_ref().map(|s| s.time))
        .unwrap_or_default();
    let seconds = time.elapsed_millis() as f64 / 1000.0;

    match outcome {
        Outcome::LevelComplete => println!("Level complete in {seconds:.2}s ({} ticks).", time.tick),
        Outcome::Lost => println!("You have been spat to death. ({seconds:.2}s)"),
        Outcome::Quit | Outcome::Playing => println!("Bye. ({seconds:.2}s)"),
    }
}

fn print_usage() {
    eprintln!(
        "pizzaquest: a tile-grid quest for pizza\n\
         \n\
         Options:\n\
         \n\
           --level <path>   Level JSON file (default: levels/demo.json)\n\
           --config <path>  SimConfig JSON file (seed, time_scale)\n\
           --seed <N>       RNG seed, overrides the config file\n\
         \n\
         Keys are read from stdin, separated by whitespace:\n\
         \n\
           w a s d / Up Left Down Right   move or turn\n\
           f                              take\n\
           e                              talk / use\n\
           space                          shoot a fireball\n\
           q                              quit\n"
    );
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_seed(args: &[String]) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            match args[i + 1].parse() {
                Ok(seed) => return Some(seed),
                Err(_) => {
                    eprintln!("Error: --seed expects a number, got {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    None
}

fn read_config(path: &Path) -> SimConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}: {e}", path.display());
            process::exit(1);
        }
    }
}
