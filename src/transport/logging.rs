// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Request logging for the drop RPC client.
//!
//! Every request gets an `rpc_call` span carrying the JSON-RPC method and, for
//! `eth_call`, the contract being read. Payloads are only logged on request.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket, SerializedRequest};
use alloy_transport::TransportError;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

/// A Tower layer that wraps each RPC request in a tracing span.
///
/// # Example
///
/// ```rust,ignore
/// use alloy_rpc_client::ClientBuilder;
/// use dropscan::transport::LoggingLayer;
///
/// let client = ClientBuilder::default()
///     .layer(LoggingLayer::new().with_payloads())
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    log_payloads: bool,
}

impl LoggingLayer {
    /// Log method, call target, timing and errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log request and response payloads at TRACE.
    pub fn with_payloads(mut self) -> Self {
        self.log_payloads = true;
        self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LoggingService {
            service,
            log_payloads: self.log_payloads,
        }
    }
}

/// Service produced by [`LoggingLayer`].
#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    service: S,
    log_payloads: bool,
}

impl<S> tower::Service<RequestPacket> for LoggingService<S>
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
        let log_payloads = self.log_payloads;
        let mut service = self.service.clone();

        let method = describe_method(&request);
        let target = call_target(&request).unwrap_or_default();
        let span = tracing::debug_span!(
            "rpc_call",
            method = %method,
            target = %target,
            duration_ms = tracing::field::Empty,
        );

        Box::pin(
            async move {
                if log_payloads {
                    trace!(request = ?request, "RPC request");
                }

                let start = Instant::now();
                let result = service.call(request).await;
                let duration_ms = start.elapsed().as_millis() as u64;
                tracing::Span::current().record("duration_ms", duration_ms);

                match &result {
                    Ok(response) if log_payloads => {
                        trace!(response = ?response, duration_ms, "RPC response")
                    }
                    Ok(_) => debug!(duration_ms, "RPC response"),
                    Err(e) if e.is_error_resp() => {
                        // Reverts are an answer, not a failure of the endpoint
                        debug!(error = %e, duration_ms, "RPC error response")
                    }
                    Err(e) => warn!(error = %e, duration_ms, "RPC transport error"),
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Method name, or a summary for batches.
fn describe_method(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(req) => req.method().to_string(),
        RequestPacket::Batch(reqs) => match reqs.as_slice() {
            [] => "batch(empty)".to_string(),
            [only] => only.method().to_string(),
            many => format!("batch({} calls)", many.len()),
        },
    }
}

/// The `to` address of a single `eth_call`.
fn call_target(request: &RequestPacket) -> Option<String> {
    let RequestPacket::Single(req) = request else {
        return None;
    };
    eth_call_target(req)
}

fn eth_call_target(req: &SerializedRequest) -> Option<String> {
    if req.method() != "eth_call" {
        return None;
    }
    let params: Vec<serde_json::Value> = serde_json::from_str(req.params()?.get()).ok()?;
    params
        .first()?
        .get("to")?
        .as_str()
        .map(str::to_string)
}
