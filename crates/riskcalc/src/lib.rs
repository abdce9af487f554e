//! riskcalc: risk event ledger and loss statistics
//!
//! Keeps an ordered list of risk events, renormalizes their probabilities on
//! every mutation and derives expected loss, dispersion and a coarse risk
//! level from the current list.

pub mod aggregator;
pub mod error;
pub mod ledger;
pub mod seed;
pub mod store;
pub mod types;

pub use aggregator::RiskAggregator;
pub use error::RiskError;
pub use ledger::{EventFile, EventRecord};
pub use seed::seed_events;
pub use store::{RiskStore, StoreSnapshot};
pub use types::{DetailedAnalysis, RiskEvent, RiskLevel};

pub type Result<T> = std::result::Result<T, RiskError>;
