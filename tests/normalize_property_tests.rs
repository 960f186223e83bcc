// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for price normalization and grid movement
//!
//! These tests use proptest to check invariants across many amounts,
//! precisions and key sequences.

use alloy_primitives::U256;
use dropscan::game::{Direction, GamePhase, GridGame, MoveOutcome, Position};
use dropscan::{format_units, normalize, TokenAmount, TokenDecimals};
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn arb_key() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("ArrowUp"),
        Just("ArrowDown"),
        Just("ArrowLeft"),
        Just("ArrowRight"),
        Just("Enter"),
        Just(" "),
        Just("a"),
    ]
}

proptest! {
    /// Property: normalizing divides by 10^decimals
    #[test]
    fn prop_normalize_scales_by_decimals(raw in any::<u64>(), decimals in 0u8..=30) {
        let price = normalize(Some(TokenAmount::from(raw)), Some(TokenDecimals::new(decimals)))
            .unwrap()
            .as_f64();
        let expected = raw as f64 / 10f64.powi(decimals as i32);

        let tolerance = expected.abs() * 1e-9 + f64::MIN_POSITIVE;
        prop_assert!((price - expected).abs() <= tolerance, "{price} vs {expected}");
    }

    /// Property: a larger raw price never displays smaller
    #[test]
    fn prop_normalize_is_monotonic(a in any::<u64>(), b in any::<u64>(), decimals in 0u8..=30) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let decimals = Some(TokenDecimals::new(decimals));

        let low = normalize(Some(TokenAmount::from(low)), decimals).unwrap();
        let high = normalize(Some(TokenAmount::from(high)), decimals).unwrap();
        prop_assert!(low.as_f64() <= high.as_f64());
    }

    /// Property: normalized prices are never negative
    #[test]
    fn prop_normalize_non_negative(raw in any::<u128>(), decimals in 0u8..=77) {
        let price = normalize(Some(TokenAmount::new(U256::from(raw))), Some(TokenDecimals::new(decimals)));
        prop_assert!(price.unwrap().as_f64() >= 0.0);
    }

    /// Property: precisions beyond U256 range never produce a price
    #[test]
    fn prop_unscalable_decimals_have_no_price(raw in any::<u64>(), decimals in 78u8..=u8::MAX) {
        prop_assert!(normalize(Some(TokenAmount::from(raw)), Some(TokenDecimals::new(decimals))).is_none());
    }

    /// Property: the exact label reads back as the raw amount
    #[test]
    fn prop_format_units_preserves_digits(raw in any::<u64>(), decimals in 0u8..=30) {
        let label = format_units(TokenAmount::from(raw), TokenDecimals::new(decimals));
        prop_assert!(!label.ends_with('.'));

        let (whole, fraction) = label.split_once('.').unwrap_or((label.as_str(), ""));
        prop_assert!(fraction.len() <= decimals as usize);
        prop_assert!(!fraction.ends_with('0'));

        let padded = format!("{whole}{fraction:0<width$}", width = decimals as usize);
        prop_assert_eq!(padded.parse::<U256>().unwrap(), U256::from(raw));
    }

    /// Property: the player never leaves the grid
    #[test]
    fn prop_player_stays_on_grid(
        size in 1u32..=12,
        steps in prop::collection::vec(arb_direction(), 0..200),
    ) {
        let mut game = GridGame::with_grid_size(size);
        // Off-grid target is clamped onto the far corner
        game.start_at(Position::new(size, size));
        let target = game.target();
        prop_assert_eq!(target, Position::new(size - 1, size - 1));

        for direction in steps {
            game.step(direction);
            let player = game.player();
            prop_assert!(player.x < size && player.y < size);
            if game.phase() == GamePhase::Won {
                prop_assert_eq!(player, target);
                break;
            }
        }
    }

    /// Property: every accepted arrow press counts as one move
    #[test]
    fn prop_moves_count_accepted_presses(
        keys in prop::collection::vec(arb_key(), 0..100),
    ) {
        let mut game = GridGame::new();
        game.start_at(Position::new(9, 9));

        let mut accepted = 0u32;
        for key in keys {
            match game.handle_key(key) {
                MoveOutcome::Ignored => {}
                MoveOutcome::Won { moves } => {
                    accepted += 1;
                    prop_assert_eq!(moves, accepted);
                    break;
                }
                MoveOutcome::Moved(_) | MoveOutcome::Blocked(_) => accepted += 1,
            }
        }
        prop_assert_eq!(game.moves(), accepted);
    }
}
