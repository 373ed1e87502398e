//! Catfall entry point
//!
//! Native headless driver: plays a few rounds with a simple autopilot and logs
//! the outcome of each. The windowed front end feeds the same `TickInput`s.
//!
//! Usage: `catfall [seed] [settings.json]`

use std::path::Path;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use catfall::Settings;
use catfall::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, step};

/// Rounds to play before exiting
const ROUNDS: u32 = 3;
/// Give up on a round after this many frames (ten minutes at 60 FPS)
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Steer away from the closest cat above the player and keep firing
fn autopilot(snap: &Snapshot, frame: u32) -> TickInput {
    let player = &snap.player;
    let center = player.x + player.size / 2.0;

    let threat = snap
        .enemies
        .iter()
        .filter(|e| e.y < player.y && e.y + e.size > player.y - 200.0)
        .filter(|e| e.x < center + player.size && e.x + e.size > center - player.size)
        .max_by(|a, b| a.y.total_cmp(&b.y));

    let (left, right) = match threat {
        Some(e) if e.x + e.size / 2.0 > center => (true, false),
        Some(_) => (false, true),
        None => (false, false),
    };

    TickInput {
        fire: frame % 4 == 0,
        fire_penetrating: frame % 90 == 0,
        ..TickInput::from_held(left, right, false, false)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Catfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let settings = match args.next() {
        Some(path) => match Settings::load(Path::new(&path)) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    let mut state = match GameState::new(settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("Seed: {seed}");

    for round in 1..=ROUNDS {
        let mut bosses = 0;
        let mut kills = 0;
        let mut frame = 0;
        while frame < MAX_FRAMES && !state.phase.is_terminal() {
            let input = autopilot(&state.snapshot(), frame);
            step(&mut state, &input, &mut rng);
            for event in state.drain_events() {
                match event {
                    GameEvent::BossSpawned { .. } => bosses += 1,
                    GameEvent::EnemyDestroyed { .. } => kills += 1,
                    _ => {}
                }
            }
            frame += 1;
        }

        let outcome = match state.phase {
            GamePhase::Won => "YOU WIN!",
            GamePhase::Lost => "You lost :(",
            GamePhase::Playing => "Out of time",
        };
        log::info!(
            "Round {round}: {outcome} Score: {} ({kills} cats, {bosses} bosses, {frame} frames)",
            state.score
        );

        if state.phase == GamePhase::Playing {
            break;
        }
        step(
            &mut state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
            &mut rng,
        );
    }

    ExitCode::SUCCESS
}
