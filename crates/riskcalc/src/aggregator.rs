//! Ordered risk ledger with probability renormalization and loss statistics.
//!
//! Every mutation rescales the stored probabilities so their validated
//! values sum to one. The rescaled values replace the inputs; the original
//! probabilities are not kept.

use tracing::{debug, warn};

use crate::error::RiskError;
use crate::seed::seed_events;
use crate::types::{DetailedAnalysis, RiskEvent, RiskLevel};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct RiskAggregator {
    events: Vec<RiskEvent>,
}

impl RiskAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the built-in example events, already renormalized.
    pub fn with_seed_events() -> Self {
        Self::from_events(seed_events())
    }

    pub fn from_events(events: Vec<RiskEvent>) -> Self {
        let mut aggregator = Self { events };
        aggregator.renormalize();
        aggregator
    }

    pub fn events(&self) -> &[RiskEvent] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&RiskEvent> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn add(&mut self, event: RiskEvent) {
        debug!(id = %event.id(), description = %event.description, "adding risk event");
        self.events.push(event);
        self.renormalize();
    }

    /// Remove and return the event at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<RiskEvent> {
        self.check_index(index)?;
        let removed = self.events.remove(index);
        debug!(index, id = %removed.id(), "removed risk event");
        self.renormalize();
        Ok(removed)
    }

    /// Replace the event at `index`.
    pub fn update_at(&mut self, event: RiskEvent, index: usize) -> Result<()> {
        self.check_index(index)?;
        debug!(index, id = %event.id(), "updating risk event");
        self.events[index] = event;
        self.renormalize();
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.events.len();
        if index >= len {
            warn!(index, len, "rejected out-of-range ledger index");
            return Err(RiskError::InvalidArgument { index, len });
        }
        Ok(())
    }

    /// Rescale stored probabilities so the validated values sum to one.
    ///
    /// No-op when every validated probability is zero.
    pub fn renormalize(&mut self) {
        let total = self.total_probability();
        if total == 0.0 {
            debug!(len = self.events.len(), "skipping renormalization, total probability is zero");
            return;
        }
        for event in &mut self.events {
            event.probability = event.validated_probability() / total;
        }
        debug!(len = self.events.len(), total, "renormalized probabilities");
    }

    // ======================================================================
    // Derived statistics
    // ======================================================================

    pub fn total_probability(&self) -> f64 {
        self.events.iter().map(RiskEvent::validated_probability).sum()
    }

    /// Expected loss
    pub fn average_loss(&self) -> f64 {
        self.events
            .iter()
            .map(|e| e.possible_loss * e.validated_probability())
            .sum()
    }

    pub fn variance(&self) -> f64 {
        let mean = self.average_loss();
        self.events
            .iter()
            .map(|e| {
                let diff = e.possible_loss - mean;
                diff * diff * e.validated_probability()
            })
            .sum()
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn rms_loss(&self) -> f64 {
        self.events
            .iter()
            .map(|e| e.possible_loss * e.possible_loss * e.validated_probability())
            .sum::<f64>()
            .sqrt()
    }

    pub fn integral_risk(&self) -> f64 {
        self.average_loss() + self.rms_loss()
    }

    /// Standard deviation over expected loss, zero when expected loss is zero.
    pub fn coefficient_of_variation(&self) -> f64 {
        let mean = self.average_loss();
        if mean == 0.0 {
            return 0.0;
        }
        self.standard_deviation() / mean
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.coefficient_of_variation())
    }

    pub fn detailed_analysis(&self) -> DetailedAnalysis {
        let average_loss = self.average_loss();
        let variance = self.variance();
        let standard_deviation = variance.sqrt();
        let rms_loss = self.rms_loss();
        let coefficient_of_variation = if average_loss == 0.0 {
            0.0
        } else {
            standard_deviation / average_loss
        };

        DetailedAnalysis {
            event_count: self.events.len(),
            total_probability: self.total_probability(),
            average_loss,
            variance,
            standard_deviation,
            rms_loss,
            integral_risk: average_loss + rms_loss,
            coefficient_of_variation,
            risk_level: RiskLevel::classify(coefficient_of_variation),
        }
    }
}
