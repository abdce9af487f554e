//! YAML event files.
//!
//! Events are listed with probabilities as percentages, the way they are
//! typed into a form. Files are only read, never written.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RiskError;
use crate::types::RiskEvent;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub description: String,
    pub possible_loss: f64,
    pub probability_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFile {
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl EventFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: EventFile = serde_yaml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<()> {
        for (i, record) in self.events.iter().enumerate() {
            if record.description.trim().is_empty() {
                return Err(RiskError::Validation(format!(
                    "event {} has an empty description",
                    i
                )));
            }
        }
        Ok(())
    }

    pub fn into_events(self) -> Vec<RiskEvent> {
        self.events
            .into_iter()
            .map(|r| RiskEvent::from_percent(r.description, r.possible_loss, r.probability_percent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_event_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
events:
  - description: Server outage
    possible_loss: 50000
    probability_percent: 10
  - description: Data breach
    possible_loss: 250000.5
    probability_percent: 5
"#
        )
        .unwrap();

        let loaded = EventFile::load(file.path()).unwrap();
        assert_eq!(loaded.events.len(), 2);
        assert_eq!(loaded.events[1].possible_loss, 250000.5);

        let events = loaded.into_events();
        assert_eq!(events[0].description, "Server outage");
        assert!((events[0].probability - 0.10).abs() < 1e-12);
        assert!((events[1].probability - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_missing_events_key_is_empty() {
        let loaded = EventFile::parse("{}").unwrap();
        assert!(loaded.events.is_empty());
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = EventFile::parse(
            r#"
events:
  - description: "  "
    possible_loss: 10
    probability_percent: 1
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RiskError::Validation(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = EventFile::parse("events: [description: 1").unwrap_err();
        assert!(matches!(err, RiskError::Yaml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EventFile::load(Path::new("/nonexistent/riskcalc-events.yaml")).unwrap_err();
        assert!(matches!(err, RiskError::Io(_)));
    }
}
