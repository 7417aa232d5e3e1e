use std::fs;
use std::process;
use std::time::Instant;

use jackpot::core::GameConfig;
use jackpot::strategy::{policy_by_name, simulate, SimulationConfig};

const USAGE: &str = "Usage: simulate [--games N] [--seed S] [--tiles N] [--no-single-die] \
[--policy random|greedy] [--config FILE] [--json]";

struct Args {
    config: SimulationConfig,
    policy: String,
    json: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or_else(|| {
        eprintln!("Invalid {} value: {}", flag, value.map_or("<missing>", String::as_str));
        process::exit(1);
    })
}

fn load_game_config(path: &str) -> GameConfig {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        process::exit(1);
    });
    GameConfig::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Failed to load {}: {}", path, e);
        process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimulationConfig::default();
    let mut policy = "greedy".to_string();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.games = parse_value("--games", args.get(i));
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value("--seed", args.get(i));
            }
            "--tiles" => {
                i += 1;
                config.game.tile_count = parse_value("--tiles", args.get(i));
            }
            "--no-single-die" => {
                config.game.single_die_allowed = false;
            }
            "--policy" => {
                i += 1;
                policy = parse_value("--policy", args.get(i));
            }
            "--config" => {
                i += 1;
                let path: String = parse_value("--config", args.get(i));
                config.game = load_game_config(&path);
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Options:");
                println!("  --games N          Number of games to simulate (default: 1000)");
                println!("  --seed S           Master RNG seed (default: 42)");
                println!("  --tiles N          Tiles on the board (default: 9)");
                println!("  --no-single-die    Always roll two dice");
                println!("  --policy NAME      random or greedy (default: greedy)");
                println!("  --config FILE      Load the game config from JSON");
                println!("  --json             Print statistics as JSON");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
        i += 1;
    }

    Args { config, policy, json }
}

fn main() {
    env_logger::init();
    let args = parse_args();

    let Some(policy) = policy_by_name(&args.policy) else {
        eprintln!("Unknown policy: {}", args.policy);
        process::exit(1);
    };

    let t0 = Instant::now();
    let stats = simulate(&args.config, policy.as_ref());
    let elapsed = t0.elapsed();

    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Failed to encode statistics: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!(
        "Shut the Box Simulation ({} games, {} tiles, {} policy)",
        stats.games,
        args.config.game.tile_count,
        policy.name()
    );
    println!("  Elapsed:     {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!();
    println!("Results:");
    println!("  Shut rate:   {:.2}%", stats.shut_rate() * 100.0);
    println!("  Mean score:  {:.2}", stats.mean_score());
    println!("  Mean turns:  {:.2}", stats.mean_turns());
    if let (Some(best), Some(worst)) = (stats.best_score, stats.worst_score) {
        println!("  Best:        {}", best);
        println!("  Worst:       {}", worst);
    }
    println!();
    println!("Score distribution:");
    for (score, count) in stats.sorted_histogram() {
        println!("  {:>3}: {:>7} ({:.2}%)", score, count, count as f64 / stats.games as f64 * 100.0);
    }
}
