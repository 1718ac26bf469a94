//! Forwarding relay: best-effort fan-out of one message to every destination.
//!
//! All destinations are attempted concurrently and independently. A failed
//! destination is logged and recorded in the [`RelayReport`]; it never cancels
//! the others and never reaches the caller as an error. No retries.

use std::sync::Arc;

use futures_util::future::join_all;

use super::transport::Transport;
use super::types::{DestinationId, MessageRef};
use crate::core::error::AppResult;

/// Result of forwarding to a single destination.
#[derive(Debug)]
pub struct DeliveryOutcome {
    pub destination: DestinationId,
    pub result: AppResult<()>,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-destination outcomes of one relay pass, in destination order.
#[derive(Debug, Default)]
pub struct RelayReport {
    pub outcomes: Vec<DeliveryOutcome>,
}

impl RelayReport {
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_delivered()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DeliveryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_delivered())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_complete(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Forward `source` to every destination.
pub async fn relay(transport: &dyn Transport, source: MessageRef, destinations: &[DestinationId]) -> RelayReport {
    let attempts = destinations.iter().map(|destination| async move {
        let result = transport.forward_message(source, destination).await;
        if let Err(e) = &result {
            log::error!("Failed to forward message {} to {}: {}", source, destination, e);
        }
        DeliveryOutcome {
            destination: destination.clone(),
            result,
        }
    });

    let report = RelayReport {
        outcomes: join_all(attempts).await,
    };

    if report.is_complete() {
        log::debug!("Relayed message {} to {} destination(s)", source, report.delivered());
    } else {
        log::warn!(
            "Relayed message {} to {}/{} destination(s)",
            source,
            report.delivered(),
            report.outcomes.len()
        );
    }

    report
}

/// A transport bound to the fixed destination list.
#[derive(Clone)]
pub struct Relay {
    transport: Arc<dyn Transport>,
    destinations: Arc<[DestinationId]>,
}

impl Relay {
    pub fn new(transport: Arc<dyn Transport>, destinations: Vec<DestinationId>) -> Self {
        Self {
            transport,
            destinations: destinations.into(),
        }
    }

    pub fn destinations(&self) -> &[DestinationId] {
        &self.destinations
    }

    pub async fn relay(&self, source: MessageRef) -> RelayReport {
        relay(self.transport.as_ref(), source, &self.destinations).await
    }
}
