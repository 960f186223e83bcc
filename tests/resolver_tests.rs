// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for PriceResolver against a scripted chain reader

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use dropscan::config::constants::currencies::NATIVE_TOKEN;
use dropscan::{
    Capability, ClaimCondition, CurrencyMetadata, ItemMetadata, PriceResolver, QueryKind, Stage,
    TokenStandard,
};
use helpers::{drop_config, MockChainReader, Reply, CURRENCY_C, CURRENCY_D};

fn resolver(mock: &Arc<MockChainReader>) -> PriceResolver {
    PriceResolver::new(mock.clone(), drop_config())
}

fn one_token(decimals: u32) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

fn drop_metadata() -> ItemMetadata {
    ItemMetadata {
        name: "Hollow Keys".to_string(),
        description: "A collection of keys".to_string(),
        image: "https://ipfs.io/ipfs/QmCollection/cover.png".to_string(),
    }
}

fn item_metadata() -> ItemMetadata {
    ItemMetadata {
        name: "Brass Key".to_string(),
        description: "Opens the first door".to_string(),
        image: "https://ipfs.io/ipfs/QmItem/0.png".to_string(),
    }
}

#[tokio::test]
async fn test_erc721_drop_priced_in_usdc() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc1155(Reply::Ok(false))
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .currency(CURRENCY_D, Reply::Ok(CurrencyMetadata::new("USDC", 6)))
            .contract_metadata(Reply::Ok(drop_metadata())),
    );

    let view = resolver(&mock).resolve().await;

    assert_eq!(view.stage, Stage::PriceResolved);
    assert_eq!(view.price_per_token.map(|p| p.as_f64()), Some(2.5));
    assert_eq!(view.price_label.as_deref(), Some("2.5 USDC"));
    assert_eq!(view.currency_symbol, "USDC");
    assert_eq!(view.display_name, "Hollow Keys");
    assert_eq!(view.standard, Some(TokenStandard::Erc721));
    assert!(!view.is_erc1155);

    assert_eq!(mock.count(|q| *q == QueryKind::Erc721ClaimCondition), 1);
    assert_eq!(
        mock.count(|q| matches!(q, QueryKind::Erc1155ClaimCondition { .. })),
        0
    );
    assert_eq!(
        mock.count(|q| matches!(q, QueryKind::TokenMetadata { .. })),
        0
    );
}

#[tokio::test]
async fn test_erc1155_drop_priced_in_erc20() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(false))
            .erc1155(Reply::Ok(true))
            .erc1155_condition(Reply::Ok(ClaimCondition::new(one_token(18), CURRENCY_C)))
            .currency(CURRENCY_C, Reply::Ok(CurrencyMetadata::new("AVAX", 18)))
            .contract_metadata(Reply::Ok(drop_metadata()))
            .token_metadata(Reply::Ok(item_metadata())),
    );

    let view = resolver(&mock).resolve().await;

    assert_eq!(view.stage, Stage::PriceResolved);
    assert_eq!(view.price_per_token.map(|p| p.as_f64()), Some(1.0));
    assert_eq!(view.price_label.as_deref(), Some("1 AVAX"));
    assert!(view.is_erc1155);
    assert_eq!(view.item_id, U256::ZERO);

    // Text from the item, image from the collection
    assert_eq!(view.display_name, "Brass Key");
    assert_eq!(view.description, "Opens the first door");
    assert_eq!(view.image, "https://ipfs.io/ipfs/QmCollection/cover.png");

    assert_eq!(
        mock.count(|q| *q == QueryKind::Erc1155ClaimCondition { token_id: U256::ZERO }),
        1
    );
    assert_eq!(mock.count(|q| *q == QueryKind::Erc721ClaimCondition), 0);
}

#[tokio::test]
async fn test_both_families_prefer_erc1155_condition() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc1155(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(5_000_000u64, CURRENCY_D)))
            .erc1155_condition(Reply::Ok(ClaimCondition::new(0u64, CURRENCY_C)))
            .currency(CURRENCY_C, Reply::Ok(CurrencyMetadata::new("WAVAX", 18)))
            .currency(CURRENCY_D, Reply::Ok(CurrencyMetadata::new("USDC", 6))),
    );

    let resolver = resolver(&mock);
    let view = resolver.resolve().await;

    assert_eq!(mock.condition_reads(), 2);
    assert_eq!(view.standard, Some(TokenStandard::Erc1155));
    assert_eq!(view.currency_symbol, "WAVAX");
    assert!(view.is_free());
    assert_eq!(view.stage, Stage::PriceResolved);
    assert_eq!(
        resolver.state().currency.map(|c| c.address),
        Some(CURRENCY_C)
    );
}

#[tokio::test]
async fn test_unsupported_contract_issues_no_condition_reads() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(false))
            .erc1155(Reply::Revert),
    );

    let resolver = resolver(&mock);
    let view = resolver.resolve().await;

    assert_eq!(mock.condition_reads(), 0);
    assert_eq!(mock.currency_reads(), 0);
    assert_eq!(view.stage, Stage::StandardKnown);
    assert_eq!(view.standard, None);
    assert!(!view.is_priced());

    let state = resolver.state();
    assert_eq!(state.flags.erc721, Capability::Unsupported);
    assert_eq!(state.flags.erc1155, Capability::Unsupported);
}

#[tokio::test]
async fn test_unreachable_node_leaves_standard_unknown() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Offline)
            .erc1155(Reply::Offline)
            .contract_metadata(Reply::Offline),
    );

    let resolver = resolver(&mock);
    let view = resolver.resolve().await;

    assert_eq!(view.stage, Stage::StandardUnknown);
    assert_eq!(mock.condition_reads(), 0);
    assert_eq!(view.display_name, "");
    assert_eq!(resolver.state().flags.erc721, Capability::Unknown);
}

#[tokio::test]
async fn test_native_currency_resolves_without_a_read() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc1155(Reply::Ok(true))
            .erc1155_condition(Reply::Ok(ClaimCondition::new(
                one_token(18) / U256::from(2),
                NATIVE_TOKEN,
            ))),
    );

    let view = resolver(&mock).resolve().await;

    assert_eq!(mock.currency_reads(), 0);
    assert_eq!(view.currency_symbol, "AVAX");
    assert_eq!(view.price_per_token.map(|p| p.as_f64()), Some(0.5));
    assert_eq!(view.price_label.as_deref(), Some("0.5 AVAX"));
}

#[tokio::test]
async fn test_zero_currency_is_never_queried() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(1_000u64, Address::ZERO))),
    );

    let resolver = resolver(&mock);
    let view = resolver.resolve().await;

    assert_eq!(mock.currency_reads(), 0);
    assert_eq!(view.stage, Stage::ConditionKnown);
    assert!(!view.is_priced());
    assert!(resolver.state().merged_condition().is_some());
}

#[tokio::test]
async fn test_failed_currency_read_settles_without_price() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .currency(CURRENCY_D, Reply::Offline),
    );

    let view = resolver(&mock).resolve().await;

    assert_eq!(mock.currency_reads(), 1);
    assert_eq!(view.stage, Stage::CurrencyKnown);
    assert_eq!(view.currency_symbol, "");
    assert_eq!(view.price_per_token, None);
    assert_eq!(view.price_label, None);
}

#[tokio::test]
async fn test_unscalable_decimals_never_price() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(1u64, CURRENCY_C)))
            .currency(CURRENCY_C, Reply::Ok(CurrencyMetadata::new("ODD", 200))),
    );

    let view = resolver(&mock).resolve().await;

    assert_eq!(view.stage, Stage::CurrencyKnown);
    assert!(!view.is_priced());
}

#[tokio::test]
async fn test_failed_condition_read_is_not_priced() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Revert),
    );

    let resolver = resolver(&mock);
    let view = resolver.resolve().await;

    assert_eq!(mock.condition_reads(), 1);
    assert_eq!(mock.currency_reads(), 0);
    assert_eq!(view.stage, Stage::StandardKnown);
    assert!(resolver.state().merged_condition().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_pending_currency_read_publishes_partial_view() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .currency(CURRENCY_D, Reply::Pending)
            .contract_metadata(Reply::Ok(drop_metadata())),
    );

    let resolver = resolver(&mock);
    let result = tokio::time::timeout(Duration::from_secs(30), resolver.resolve()).await;
    assert!(result.is_err(), "resolution should still be waiting");

    let view = resolver.current_view();
    assert_eq!(view.stage, Stage::CurrencyPending);
    assert_eq!(view.display_name, "Hollow Keys");
    assert_eq!(view.standard, Some(TokenStandard::Erc721));
    assert!(!view.is_priced());
}

#[tokio::test(start_paused = true)]
async fn test_price_resolves_while_erc1155_check_pending() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc1155(Reply::Pending)
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .currency(CURRENCY_D, Reply::Ok(CurrencyMetadata::new("USDC", 6))),
    );

    let resolver = resolver(&mock);
    let result = tokio::time::timeout(Duration::from_secs(3600), resolver.resolve()).await;
    assert!(result.is_err(), "the ERC-1155 interface check never answers");

    assert_eq!(mock.currency_reads(), 1);
    let view = resolver.current_view();
    assert_eq!(view.stage, Stage::PriceResolved);
    assert_eq!(view.price_label.as_deref(), Some("2.5 USDC"));
    assert_eq!(resolver.state().flags.erc1155, Capability::Unknown);
}

#[tokio::test(start_paused = true)]
async fn test_late_currency_for_replaced_condition_is_dropped() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc1155(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .erc1155_condition(Reply::Delayed(
                Duration::from_secs(1),
                ClaimCondition::new(one_token(18), CURRENCY_C),
            ))
            .currency(
                CURRENCY_D,
                Reply::Delayed(Duration::from_secs(5), CurrencyMetadata::new("USDC", 6)),
            )
            .currency(CURRENCY_C, Reply::Ok(CurrencyMetadata::new("WAVAX", 18))),
    );

    let resolver = resolver(&mock);
    let view = resolver.resolve().await;

    // The USDC read finished last but belongs to the replaced ERC-721 condition
    assert_eq!(mock.currency_reads(), 2);
    assert_eq!(view.stage, Stage::PriceResolved);
    assert_eq!(view.price_label.as_deref(), Some("1 WAVAX"));
    assert_eq!(
        resolver.state().currency.map(|c| c.address),
        Some(CURRENCY_C)
    );
}

#[tokio::test]
async fn test_subscribers_see_final_state() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .currency(CURRENCY_D, Reply::Ok(CurrencyMetadata::new("USDC", 6))),
    );

    let resolver = resolver(&mock);
    let mut updates = resolver.subscribe();
    assert_eq!(updates.borrow().stage(), Stage::Idle);

    resolver.resolve().await;

    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().stage(), Stage::PriceResolved);
}

#[tokio::test]
async fn test_resolve_again_starts_over() {
    let mock = Arc::new(
        MockChainReader::new()
            .erc721(Reply::Ok(true))
            .erc721_condition(Reply::Ok(ClaimCondition::new(2_500_000u64, CURRENCY_D)))
            .currency(CURRENCY_D, Reply::Ok(CurrencyMetadata::new("USDC", 6))),
    );

    let resolver = resolver(&mock);
    let first = resolver.resolve().await;
    let reads = mock.calls().len();

    let second = resolver.resolve().await;

    assert_eq!(first, second);
    assert_eq!(mock.calls().len(), reads * 2);
}

#[tokio::test]
async fn test_idle_view_is_renderable() {
    let mock = Arc::new(MockChainReader::new());
    let resolver = resolver(&mock);

    let view = resolver.current_view();
    assert_eq!(view.stage, Stage::Idle);
    assert_eq!(view.display_name, "");
    assert_eq!(view.price_label, None);
    assert!(mock.calls().is_empty());
}
