/// Example playing the grid game with a scripted walker
///
/// This example shows how to:
/// 1. Start a round with a seeded target
/// 2. Feed key presses into the game
/// 3. Read the reward claim once the target is reached
///
/// Run with:
/// ```bash
/// SEED=42 cargo run --package dropscan --example grid_game
/// ```
use std::env;

use anyhow::{Context, Result};
use dropscan::game::{GamePhase, GridGame, MoveOutcome, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Key that brings `player` one cell closer to `target`
fn next_key(player: Position, target: Position) -> &'static str {
    if player.x < target.x {
        "ArrowRight"
    } else if player.x > target.x {
        "ArrowLeft"
    } else if player.y < target.y {
        "ArrowDown"
    } else if player.y > target.y {
        "ArrowUp"
    } else {
        // On the target before the first move: step off and back
        "ArrowRight"
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let seed = env::var("SEED")
        .ok()
        .map(|raw| raw.parse::<u64>())
        .transpose()
        .context("SEED must be an unsigned integer")?
        .unwrap_or(7);

    let mut game = GridGame::new();
    game.start_with(&mut StdRng::seed_from_u64(seed));
    info!(seed, target = ?game.target(), "Round started");

    while game.phase() == GamePhase::Playing {
        let key = next_key(game.player(), game.target());
        match game.handle_key(key) {
            MoveOutcome::Moved(position) | MoveOutcome::Blocked(position) => {
                info!(key, x = position.x, y = position.y, "Moved");
            }
            MoveOutcome::Won { moves } => info!(moves, "Target reached"),
            MoveOutcome::Ignored => break,
        }
    }

    let claim = game
        .reward_claim()
        .context("Round ended without reaching the target")?;
    println!("\n=== Reward Claim ===");
    println!("{}", serde_json::to_string_pretty(&claim)?);

    Ok(())
}
