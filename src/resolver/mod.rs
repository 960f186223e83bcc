// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Drop price resolution
//!
//! [`PriceResolver`] drives the read pipeline for one drop:
//!
//! ```text
//! contract metadata ──────────────────────────────────────────┐
//! ERC-721 check  ─► ERC-721 condition  ─► merged currency ────┼─► view
//! ERC-1155 check ─► ERC-1155 condition ─► merged currency ────┤
//!               └─► ERC-1155 token metadata ──────────────────┘
//! ```
//!
//! Each arrow is a dependency: a read is issued only once its input is
//! available, and a condition read only for a family whose interface check
//! answered `Supported`. The branches do not wait for each other. Whenever a
//! condition arrives the currency of the merged condition is resolved, unless
//! that address is already resolved or in flight; a result for an address the
//! merge has moved away from is discarded. Every state change is published on a
//! [`tokio::sync::watch`] channel, so observers can render partial views
//! while reads are still in flight.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dropscan::{AlloyChainReader, DropConfig, DropscanConfig, PriceResolver};
//!
//! let config = DropscanConfig::default();
//! let drop = DropConfig::buy_page();
//! let reader = AlloyChainReader::connect(&config, drop.contract.chain)?;
//! let resolver = PriceResolver::new(Arc::new(reader), drop);
//!
//! let view = resolver.resolve().await;
//! println!("{} costs {:?}", view.display_name, view.price_label);
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn, Instrument};

use crate::config::DropConfig;
use crate::gateway::ChainReader;
use crate::spans;
use crate::types::claim::ClaimCondition;
use crate::types::standard::TokenStandard;

pub mod conditions;
pub mod currency;
pub mod detector;
pub mod normalize;
pub mod state;
pub mod view;

pub use normalize::{format_units, normalize};
pub use state::{ResolutionState, ResolvedCurrency, Stage};
pub use view::ResolvedPriceView;

/// Resolves and publishes the price view of one drop
pub struct PriceResolver {
    reader: Arc<dyn ChainReader>,
    drop: DropConfig,
    state: watch::Sender<ResolutionState>,
}

impl std::fmt::Debug for PriceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceResolver")
            .field("drop", &self.drop)
            .field("stage", &self.state.borrow().stage())
            .finish_non_exhaustive()
    }
}

impl PriceResolver {
    /// Create a resolver in the [`Stage::Idle`] state
    pub fn new(reader: Arc<dyn ChainReader>, drop: DropConfig) -> Self {
        let (state, _) = watch::channel(ResolutionState::default());
        Self {
            reader,
            drop,
            state,
        }
    }

    /// The drop this resolver reads
    pub fn drop_config(&self) -> &DropConfig {
        &self.drop
    }

    /// Observe state changes
    ///
    /// The receiver is notified once per actual change; writes that leave the
    /// state unchanged are not published.
    pub fn subscribe(&self) -> watch::Receiver<ResolutionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ResolutionState {
        self.state.borrow().clone()
    }

    /// View composed from the current state
    pub fn current_view(&self) -> ResolvedPriceView {
        ResolvedPriceView::compose(&self.state.borrow(), self.drop.item_id)
    }

    /// Run a full resolution and return the final view
    ///
    /// The state is reset to [`Stage::Idle`] first. Reads that never complete
    /// leave their dependents unresolved; wrap the call in a timeout to bound it.
    /// Whatever was published before cancellation stays readable through
    /// [`current_view`](Self::current_view).
    pub async fn resolve(&self) -> ResolvedPriceView {
        let contract = self.drop.contract;
        async {
            self.update(ResolutionState::reset);
            self.update(ResolutionState::begin);

            futures::join!(
                self.load_contract_metadata(),
                self.resolve_family(TokenStandard::Erc721),
                self.resolve_family(TokenStandard::Erc1155),
            );

            let view = self.current_view();
            info!(
                stage = ?view.stage,
                name = %view.display_name,
                price = ?view.price_label,
                "Drop resolved"
            );
            view
        }
        .instrument(spans::resolve_drop(&contract, self.drop.item_id))
        .await
    }

    /// Apply a transition, notifying subscribers if it changed anything
    fn update(&self, transition: impl FnOnce(&mut ResolutionState) -> bool) -> bool {
        self.state.send_if_modified(transition)
    }

    /// Check one family and, if supported, read what depends on it
    async fn resolve_family(&self, standard: TokenStandard) {
        let contract = &self.drop.contract;
        let capability = detector::check_standard(self.reader.as_ref(), contract, standard).await;
        self.update(|state| state.set_capability(standard, capability));

        let flags = self.state.borrow().flags;
        if !flags.get(standard).is_supported() {
            return;
        }

        match standard {
            TokenStandard::Erc721 => {
                self.load_condition(standard).await;
                self.resolve_currency().await;
            }
            TokenStandard::Erc1155 => {
                futures::join!(
                    async {
                        self.load_condition(standard).await;
                        self.resolve_currency().await;
                    },
                    self.load_token_metadata()
                );
            }
        }
    }

    async fn load_condition(&self, standard: TokenStandard) {
        let capability = self.state.borrow().flags.get(standard);
        self.update(ResolutionState::begin_condition);
        let condition = conditions::fetch_condition(
            self.reader.as_ref(),
            &self.drop.contract,
            standard,
            capability,
            self.drop.item_id,
        )
        .await;
        self.update(|state| state.finish_condition(standard, condition));
    }

    async fn resolve_currency(&self) {
        let address = self
            .state
            .borrow()
            .merged_condition()
            .and_then(ClaimCondition::currency_address);
        let Some(address) = address else {
            debug!("No claim condition currency, skipping currency stage");
            self.update(ResolutionState::clear_currency);
            return;
        };

        if !self.update(|state| state.begin_currency(address)) {
            debug!(currency = %address, "Currency already requested");
            return;
        }
        let currency =
            currency::resolve_currency(self.reader.as_ref(), &self.drop.contract, Some(address))
                .await;
        self.update(|state| state.finish_currency(address, currency));
    }

    async fn load_contract_metadata(&self) {
        let contract = &self.drop.contract;
        let metadata = async {
            match self.reader.contract_metadata(contract).await {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    warn!(error = %e, "Failed to load contract metadata");
                    None
                }
            }
        }
        .instrument(spans::fetch_item_metadata(contract, None))
        .await;
        self.update(|state| state.set_contract_metadata(metadata));
    }

    async fn load_token_metadata(&self) {
        let contract = &self.drop.contract;
        let item_id = self.drop.item_id;
        let metadata = async {
            match self.reader.token_metadata(contract, item_id).await {
                Ok(metadata) => Some(metadata),
                Err(e) => {
                    warn!(error = %e, "Failed to load token metadata");
                    None
                }
            }
        }
        .instrument(spans::fetch_item_metadata(contract, Some(item_id)))
        .await;
        self.update(|state| state.set_token_metadata(metadata));
    }
}
