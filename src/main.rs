//! Ping Ball headless driver
//!
//! Stands in for a UI: feeds the simulator fixed-rate frames, pings the ball
//! every couple of seconds, and prints the final state as JSON.
//!
//! Usage: `ping-ball [CONFIG.json] [TICKS]`

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use ping_ball::{FixedClock, SimConfig, Simulator};

/// Ticks between scripted pings (two seconds at 60 Hz)
const PING_INTERVAL_TICKS: u64 = 120;
const DEFAULT_TICKS: u64 = 600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ping Ball (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    let total_ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("Invalid tick count: {e}");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_TICKS,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or(0);
    let mut clock = FixedClock::new(config.tick_rate_hz);
    let frame_time = clock.tick_dt();
    let mut sim = match Simulator::new(config, seed) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Simulator initialized with seed: {}", seed);

    let mut bounces = 0;
    let mut next_ping = PING_INTERVAL_TICKS;
    while sim.tick() < total_ticks {
        if sim.tick() >= next_ping {
            sim.launch();
            next_ping += PING_INTERVAL_TICKS;
        }
        let frame = clock.drive(&mut sim, frame_time);
        bounces += frame.bounces;
        log::trace!("tick {}: pos {}", sim.tick(), sim.position());
    }

    log::info!("Ran {} ticks with {} bouncing ticks", sim.tick(), bounces);
    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}
