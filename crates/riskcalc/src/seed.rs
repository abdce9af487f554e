use crate::types::RiskEvent;

/// Example events a fresh ledger starts with: (description, loss, probability)
const SEED: [(&str, f64, f64); 6] = [
    ("Server outage", 50_000.0, 0.10),
    ("Data breach", 250_000.0, 0.05),
    ("Key supplier default", 120_000.0, 0.08),
    ("Regulatory fine", 80_000.0, 0.03),
    ("Office flood", 30_000.0, 0.02),
    ("Key staff departure", 40_000.0, 0.15),
];

/// Built-in example events, with raw (not yet renormalized) probabilities.
pub fn seed_events() -> Vec<RiskEvent> {
    SEED.iter()
        .map(|(description, loss, probability)| RiskEvent::new(*description, *loss, *probability))
        .collect()
}
