// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Grid navigation game
//!
//! The player starts in the top-left corner of a square grid and walks to a
//! randomly placed target with the arrow keys. Reaching the target unlocks a
//! [`RewardClaim`] for the game's ERC-1155 reward drop; submitting the claim is
//! left to the wallet component.
//!
//! ```
//! use dropscan::game::{Direction, GamePhase, GridGame, Position};
//!
//! let mut game = GridGame::new();
//! game.start_at(Position::new(1, 0));
//! game.step(Direction::Right);
//!
//! assert_eq!(game.phase(), GamePhase::Won);
//! assert_eq!(game.moves(), 1);
//! assert!(game.reward_claim().is_some());
//! ```

use alloy_primitives::U256;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DropConfig;
use crate::types::contract::ContractRef;
use crate::types::standard::TokenStandard;

/// Default edge length of the grid
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// A cell on the grid; `y` grows downwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One arrow key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    fn apply(self, position: Position, size: u32) -> Position {
        let last = size - 1;
        match self {
            Self::Up => Position::new(position.x, position.y.saturating_sub(1)),
            Self::Down => Position::new(position.x, (position.y + 1).min(last)),
            Self::Left => Position::new(position.x.saturating_sub(1), position.y),
            Self::Right => Position::new((position.x + 1).min(last), position.y),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No round in progress
    #[default]
    NotStarted,
    /// Accepting moves
    Playing,
    /// Target reached; the reward can be claimed
    Won,
}

/// Result of one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not playing, or not an arrow key; nothing changed
    Ignored,
    /// The player moved
    Moved(Position),
    /// The player pushed against the wall; the move still counts
    Blocked(Position),
    /// The player reached the target
    Won {
        /// Moves taken, including the winning one
        moves: u32,
    },
}

/// Parameters for claiming the game reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardClaim {
    pub contract: ContractRef,
    pub token_id: U256,
    pub quantity: U256,
    pub standard: TokenStandard,
}

/// State of the grid game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGame {
    size: u32,
    player: Position,
    target: Position,
    moves: u32,
    phase: GamePhase,
    reward: DropConfig,
}

impl Default for GridGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGame {
    /// A 10x10 game rewarding the default reward drop
    pub fn new() -> Self {
        Self::with_grid_size(DEFAULT_GRID_SIZE)
    }

    /// A game on a `size`x`size` grid; sizes below 1 are raised to 1
    pub fn with_grid_size(size: u32) -> Self {
        Self {
            size: size.max(1),
            player: Position::ORIGIN,
            target: Position::ORIGIN,
            moves: 0,
            phase: GamePhase::NotStarted,
            reward: DropConfig::game_reward(),
        }
    }

    /// Reward a different drop item
    pub fn with_reward(mut self, reward: DropConfig) -> Self {
        self.reward = reward;
        self
    }

    /// Start a round with a target drawn from the thread RNG
    pub fn start(&mut self) {
        self.start_with(&mut rand::rng());
    }

    /// Start a round with a target drawn from `rng`
    pub fn start_with<R: Rng>(&mut self, rng: &mut R) {
        let target = Position::new(rng.random_range(0..self.size), rng.random_range(0..self.size));
        self.start_at(target);
    }

    /// Start a round with a fixed target, clamped onto the grid
    ///
    /// A target at the origin is only reached by walking back onto it.
    pub fn start_at(&mut self, target: Position) {
        let last = self.size - 1;
        self.player = Position::ORIGIN;
        self.target = Position::new(target.x.min(last), target.y.min(last));
        self.moves = 0;
        self.phase = GamePhase::Playing;
        debug!(target = ?self.target, size = self.size, "Game started");
    }

    /// Move one cell, clamped to the grid
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        if self.phase != GamePhase::Playing {
            return MoveOutcome::Ignored;
        }

        let next = direction.apply(self.player, self.size);
        let blocked = next == self.player;
        self.player = next;
        self.moves += 1;

        if next == self.target {
            self.phase = GamePhase::Won;
            info!(moves = self.moves, "Target reached");
            return MoveOutcome::Won { moves: self.moves };
        }

        if blocked {
            MoveOutcome::Blocked(next)
        } else {
            MoveOutcome::Moved(next)
        }
    }

    /// Handle a key press; keys other than the arrows are ignored
    pub fn handle_key(&mut self, key: &str) -> MoveOutcome {
        match Direction::from_key(key) {
            Some(direction) => self.step(direction),
            None => MoveOutcome::Ignored,
        }
    }

    /// Claim parameters, available only after winning
    pub fn reward_claim(&self) -> Option<RewardClaim> {
        (self.phase == GamePhase::Won).then(|| RewardClaim {
            contract: self.reward.contract,
            token_id: self.reward.item_id,
            quantity: U256::from(1),
            standard: TokenStandard::Erc1155,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }
}
