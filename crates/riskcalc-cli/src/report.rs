use std::fmt::Write;

use riskcalc::{DetailedAnalysis, RiskAggregator};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    pub index: usize,
    pub id: String,
    pub description: String,
    pub possible_loss: f64,
    pub probability_percent: f64,
}

/// Event list plus analysis, as printed at the end of a run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub events: Vec<EventRow>,
    pub analysis: DetailedAnalysis,
}

impl Report {
    pub fn from_aggregator(aggregator: &RiskAggregator) -> Self {
        let events = aggregator
            .events()
            .iter()
            .enumerate()
            .map(|(index, e)| EventRow {
                index,
                id: e.id().to_string(),
                description: e.description.clone(),
                possible_loss: e.possible_loss,
                probability_percent: e.validated_probability() * 100.0,
            })
            .collect();
        Self {
            events,
            analysis: aggregator.detailed_analysis(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>3}  {:<28} {:>14} {:>9}", "#", "DESCRIPTION", "LOSS", "PROB");
        for row in &self.events {
            let _ = writeln!(
                out,
                "{:>3}  {:<28} {:>14.2} {:>8.2}%",
                row.index,
                truncate(&row.description, 28),
                row.possible_loss,
                row.probability_percent
            );
        }

        let a = &self.analysis;
        let _ = writeln!(out);
        let _ = writeln!(out, "events:             {}", a.event_count);
        let _ = writeln!(out, "expected loss:      {:.2}", a.average_loss);
        let _ = writeln!(out, "standard deviation: {:.2}", a.standard_deviation);
        let _ = writeln!(out, "rms loss:           {:.2}", a.rms_loss);
        let _ = writeln!(out, "integral risk:      {:.2}", a.integral_risk);
        let _ = writeln!(out, "coeff. of variation: {:.4}", a.coefficient_of_variation);
        let _ = writeln!(out, "risk level:         {}", a.risk_level);
        out
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max - 1).collect();
        t.push('…');
        t
    }
}
