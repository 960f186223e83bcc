// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Retry layer with jittered exponential backoff.
//!
//! Only transient failures are retried. A JSON-RPC error response such as
//! `execution reverted` is final: the resolver relies on reverts to learn that a
//! contract lacks a capability, so repeating the call would only delay that.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket, RpcError};
use alloy_transport::TransportError;
use rand::Rng;
use tower::Layer;
use tracing::{debug, warn};

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BASE_DELAY_MS: u64 = 200;
const DEFAULT_MAX_DELAY_MS: u64 = 5_000;

/// A Tower layer that retries transient RPC failures.
///
/// The delay before retry `n` is drawn uniformly from
/// `[backoff / 2, backoff]` where `backoff = min(base_delay * 2^n, max_delay)`.
///
/// # Example
///
/// ```rust
/// use dropscan::transport::RetryLayer;
/// use std::time::Duration;
///
/// let layer = RetryLayer::builder()
///     .max_retries(5)
///     .base_delay(Duration::from_millis(100))
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct RetryLayer {
    config: Arc<RetryConfig>,
}

/// Retry policy shared by every request of a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Backoff before the first retry
    pub base_delay: Duration,
    /// Upper bound on any single backoff
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
        }
    }
}

impl RetryConfig {
    /// Upper bound of the backoff before retry `attempt` (0-based).
    pub fn backoff_ceiling(&self, attempt: u32) -> Duration {
        let multiplier = 2u32.saturating_pow(attempt);
        self.base_delay
            .saturating_mul(multiplier)
            .min(self.max_delay)
    }

    fn jittered_backoff(&self, attempt: u32) -> Duration {
        let ceiling = self.backoff_ceiling(attempt);
        let floor = ceiling / 2;
        if ceiling <= floor {
            return ceiling;
        }
        rand::rng().random_range(floor..=ceiling)
    }
}

impl RetryLayer {
    /// Three retries, 200ms base delay, 5s cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default delays with a custom retry count. Zero disables retrying.
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self::builder().max_retries(max_retries).build()
    }

    /// Start from the default policy.
    pub fn builder() -> RetryLayerBuilder {
        RetryLayerBuilder::default()
    }

    /// The policy this layer applies.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

impl<S> Layer<S> for RetryLayer {
    type Service = RetryService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RetryService {
            service,
            config: Arc::clone(&self.config),
        }
    }
}

/// Builder for a [`RetryLayer`].
#[derive(Clone, Debug, Default)]
pub struct RetryLayerBuilder {
    config: RetryConfig,
}

impl RetryLayerBuilder {
    /// Retries after the initial attempt.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Backoff before the first retry.
    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.config.base_delay = delay;
        self
    }

    /// Cap on any single backoff.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.config.max_delay = delay;
        self
    }

    /// Finish the layer.
    pub fn build(self) -> RetryLayer {
        RetryLayer {
            config: Arc::new(self.config),
        }
    }
}

/// Service produced by [`RetryLayer`].
#[derive(Clone, Debug)]
pub struct RetryService<S> {
    service: S,
    config: Arc<RetryConfig>,
}

impl<S> tower::Service<RequestPacket> for RetryService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let service = self.service.clone();
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let mut attempt = 0u32;
            loop {
                let error = match service.clone().call(request.clone()).await {
                    Ok(response) => {
                        if attempt > 0 {
                            debug!(attempt, "RPC request succeeded after retry");
                        }
                        return Ok(response);
                    }
                    Err(error) => error,
                };

                if !is_transient(&error) || attempt >= config.max_retries {
                    if attempt > 0 {
                        warn!(error = %error, attempts = attempt + 1, "Giving up on RPC request");
                    }
                    return Err(error);
                }

                let delay = config.jittered_backoff(attempt);
                debug!(
                    error = %error,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Transient RPC failure, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        })
    }
}

/// Whether a failure may succeed if the same request is sent again.
fn is_transient(error: &TransportError) -> bool {
    match error {
        RpcError::Transport(kind) => kind.is_retry_err(),
        // Rate limits arrive as error responses; reverts do not ask for a retry
        RpcError::ErrorResp(payload) => payload.is_retry_err(),
        RpcError::NullResp => true,
        _ => false,
    }
}
