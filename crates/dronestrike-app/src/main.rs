use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use dronestrike_app::autopilot;
use dronestrike_app::game_loop;
use dronestrike_app::state::{LoopError, SessionSummary};
use dronestrike_core::commands::PlayerCommand;
use dronestrike_core::types::FieldSize;
use dronestrike_sim::engine::SimConfig;

/// Run a headless DRONESTRIKE session with an autopilot gunner.
#[derive(Parser, Debug)]
#[command(name = "dronestrike", version, about)]
struct Args {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Play-field width
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Play-field height
    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Session length in wall-clock seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 60)]
    tick_rate: u32,

    /// Milliseconds between autopilot shots
    #[arg(long, default_value_t = 400)]
    autopilot_interval: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("failed to encode summary: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SessionSummary, LoopError> {
    let config = SimConfig {
        seed: args.seed,
        field: FieldSize::new(args.width, args.height),
        frame_ms: 1000.0 / args.tick_rate.max(1) as f64,
    };
    let handle = game_loop::spawn_game_loop(config, args.tick_rate)?;
    handle.send(PlayerCommand::Start)?;

    let deadline = Instant::now() + Duration::from_secs_f64(args.seconds.max(0.0));
    let cadence = Duration::from_millis(args.autopilot_interval.max(1));
    while Instant::now() < deadline {
        std::thread::sleep(cadence);
        let target = handle.latest().and_then(|snap| autopilot::choose_target(&snap));
        if let Some(target) = target {
            log::debug!("autopilot firing at ({:.1}, {:.1})", target.x, target.y);
            handle.send(PlayerCommand::Fire {
                x: target.x,
                y: target.y,
            })?;
        }
    }

    handle.shutdown()
}
