pub mod input;
pub mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use riskcalc::{EventFile, RiskAggregator, RiskEvent, RiskStore};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// riskcalc - expected loss and risk level over a list of risk events
#[derive(Parser, Debug)]
#[command(name = "riskcalc", about = "Expected loss and risk level over a list of risk events")]
pub struct Args {
    /// YAML file with extra events to load
    #[arg(long, env = "RISKCALC_EVENTS")]
    pub events: Option<PathBuf>,

    /// Start from an empty ledger instead of the example events
    #[arg(long)]
    pub no_seed: bool,

    /// Add an event: "DESC;LOSS;PERCENT"
    #[arg(long = "add", value_name = "DESC;LOSS;PERCENT")]
    pub adds: Vec<String>,

    /// Replace an event: "INDEX;DESC;LOSS;PERCENT"
    #[arg(long = "update", value_name = "INDEX;DESC;LOSS;PERCENT")]
    pub updates: Vec<String>,

    /// Remove the event at INDEX
    #[arg(long = "remove", value_name = "INDEX")]
    pub removes: Vec<usize>,

    /// Output format
    #[arg(long, value_enum, env = "RISKCALC_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riskcalc=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = run(&args)?;

    let report = report::Report::from_aggregator(store.aggregator());
    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Build the ledger and apply the requested edits: adds, then updates, then removes.
pub fn run(args: &Args) -> anyhow::Result<RiskStore> {
    let mut events = if args.no_seed {
        Vec::new()
    } else {
        riskcalc::seed_events()
    };
    if let Some(ref path) = args.events {
        let file = EventFile::load(path)
            .with_context(|| format!("loading events from {}", path.display()))?;
        info!(path = %path.display(), count = file.events.len(), "loaded event file");
        events.extend(file.into_events());
    }

    let mut store = RiskStore::new(RiskAggregator::from_events(events));
    let published = store.subscribe();

    for spec in &args.adds {
        let e = input::parse_event(spec)?;
        store.add(RiskEvent::from_percent(
            e.description,
            e.possible_loss,
            e.probability_percent,
        ));
    }

    for spec in &args.updates {
        let (index, e) = input::parse_update(spec)?;
        let probability = e.probability_percent / 100.0;
        let replacement = match store.events().get(index) {
            Some(existing) => existing.edited(e.description, e.possible_loss, probability),
            None => RiskEvent::new(e.description, e.possible_loss, probability),
        };
        store
            .update_at(replacement, index)
            .with_context(|| format!("updating event {}", index))?;
    }

    for &index in &args.removes {
        let removed = store
            .remove_at(index)
            .with_context(|| format!("removing event {}", index))?;
        info!(index, description = %removed.description, "removed event");
    }

    let snapshot = published.borrow().clone();
    info!(
        revision = snapshot.revision,
        events = snapshot.analysis.event_count,
        risk_level = %snapshot.analysis.risk_level,
        "ledger ready"
    );
    Ok(store)
}
