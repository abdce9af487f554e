//! Text-to-number conversion for user-entered fields.
//!
//! The ledger only ever sees parsed numbers; malformed text is rejected here.

use anyhow::{bail, Context, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Fields of one event as entered: loss in currency, probability in percent
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub description: String,
    pub possible_loss: f64,
    pub probability_percent: f64,
}

fn parse_decimal(raw: &str, field: &str) -> Result<f64> {
    let value: Decimal = raw
        .parse()
        .with_context(|| format!("invalid {} {:?}", field, raw))?;
    value
        .to_f64()
        .with_context(|| format!("{} {:?} is out of range", field, raw))
}

/// Parse a currency amount such as `$1,250.50` or `1250.5`.
pub fn parse_currency(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let cleaned: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    let amount = parse_decimal(&cleaned, "loss amount")?;
    if amount < 0.0 {
        bail!("loss amount {:?} must not be negative", raw);
    }
    Ok(amount)
}

/// Parse a percentage such as `12.5` or `12.5%`.
pub fn parse_percent(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let cleaned = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    parse_decimal(cleaned, "probability")
}

/// Parse `DESC;LOSS;PERCENT`.
pub fn parse_event(spec: &str) -> Result<EventInput> {
    let parts: Vec<&str> = spec.split(';').collect();
    let [description, loss, percent] = parts.as_slice() else {
        bail!("expected DESC;LOSS;PERCENT, got {:?}", spec);
    };
    let description = description.trim();
    if description.is_empty() {
        bail!("event description must not be empty");
    }
    Ok(EventInput {
        description: description.to_string(),
        possible_loss: parse_currency(loss)?,
        probability_percent: parse_percent(percent)?,
    })
}

/// Parse `INDEX;DESC;LOSS;PERCENT`.
pub fn parse_update(spec: &str) -> Result<(usize, EventInput)> {
    let (index, rest) = spec
        .split_once(';')
        .with_context(|| format!("expected INDEX;DESC;LOSS;PERCENT, got {:?}", spec))?;
    let index: usize = index
        .trim()
        .parse()
        .with_context(|| format!("invalid index {:?}", index))?;
    Ok((index, parse_event(rest)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("1250.5").unwrap(), 1250.5);
        assert_eq!(parse_currency("$1,250.50").unwrap(), 1250.5);
        assert_eq!(parse_currency("  $ 40 000 ").unwrap(), 40000.0);
        assert_eq!(parse_currency("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_currency_rejects_garbage() {
        assert!(parse_currency("").is_err());
        assert!(parse_currency("abc").is_err());
        assert!(parse_currency("12.3.4").is_err());
        assert!(parse_currency("-5").is_err());
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("10").unwrap(), 10.0);
        assert_eq!(parse_percent("12.5%").unwrap(), 12.5);
        assert_eq!(parse_percent(" 100 % ").unwrap(), 100.0);
        assert!(parse_percent("ten").is_err());
    }

    #[test]
    fn test_parse_event() {
        let input = parse_event("Server outage;$50,000;10%").unwrap();
        assert_eq!(input.description, "Server outage");
        assert_eq!(input.possible_loss, 50000.0);
        assert_eq!(input.probability_percent, 10.0);
    }

    #[test]
    fn test_parse_event_wrong_arity() {
        assert!(parse_event("only;two").is_err());
        assert!(parse_event("a;1;2;3").is_err());
        assert!(parse_event(" ;1;2").is_err());
    }

    #[test]
    fn test_parse_update() {
        let (index, input) = parse_update("2;Flood;300;5").unwrap();
        assert_eq!(index, 2);
        assert_eq!(input.description, "Flood");
        assert!(parse_update("x;Flood;300;5").is_err());
        assert!(parse_update("no-separator").is_err());
    }
}
