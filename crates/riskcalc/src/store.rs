//! Observable wrapper around [`RiskAggregator`].
//!
//! Front ends subscribe to a watch channel and redraw whenever a new
//! [`StoreSnapshot`] is published. Only successful mutations publish.

use tokio::sync::watch;
use tracing::debug;

use crate::aggregator::RiskAggregator;
use crate::types::{DetailedAnalysis, RiskEvent};
use crate::Result;

/// Analysis published after a mutation, tagged with a monotonically
/// increasing revision.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub analysis: DetailedAnalysis,
}

#[derive(Debug)]
pub struct RiskStore {
    aggregator: RiskAggregator,
    revision: u64,
    tx: watch::Sender<StoreSnapshot>,
}

impl RiskStore {
    pub fn new(aggregator: RiskAggregator) -> Self {
        let initial = StoreSnapshot {
            revision: 0,
            analysis: aggregator.detailed_analysis(),
        };
        let (tx, _rx) = watch::channel(initial);
        Self {
            aggregator,
            revision: 0,
            tx,
        }
    }

    /// Store over the seeded example ledger
    pub fn seeded() -> Self {
        Self::new(RiskAggregator::with_seed_events())
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }

    pub fn aggregator(&self) -> &RiskAggregator {
        &self.aggregator
    }

    pub fn events(&self) -> &[RiskEvent] {
        self.aggregator.events()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    pub fn add(&mut self, event: RiskEvent) {
        self.aggregator.add(event);
        self.publish();
    }

    pub fn remove_at(&mut self, index: usize) -> Result<RiskEvent> {
        let removed = self.aggregator.remove_at(index)?;
        self.publish();
        Ok(removed)
    }

    pub fn update_at(&mut self, event: RiskEvent, index: usize) -> Result<()> {
        self.aggregator.update_at(event, index)?;
        self.publish();
        Ok(())
    }

    fn publish(&mut self) {
        self.revision += 1;
        let snapshot = StoreSnapshot {
            revision: self.revision,
            analysis: self.aggregator.detailed_analysis(),
        };
        debug!(
            revision = snapshot.revision,
            events = snapshot.analysis.event_count,
            risk_level = %snapshot.analysis.risk_level,
            "publishing ledger snapshot"
        );
        // send_replace succeeds with or without live receivers
        self.tx.send_replace(snapshot);
    }
}
