//! Input adapter: turns free-text, comma-separated form fields into typed
//! and validated sequences before anything reaches the engine.

use crate::core::error::ValidationError;
use crate::core::participant::Roster;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw session fields as a user typed them.
///
/// ```json
/// { "start": "100, 150, 200", "end": "90, 160, 200", "names": "Alice, Bob, Charlie", "unit_value": "0.5" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInput {
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_value: Option<String>,
}

/// A session whose fields passed every boundary check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSession {
    pub start: Vec<Decimal>,
    pub end: Vec<Decimal>,
    pub roster: Roster,
    pub unit_value: Option<Decimal>,
}

impl SessionInput {
    /// Parse every field. Names are counted against the start sequence.
    pub fn validate(&self) -> Result<ValidatedSession, ValidationError> {
        let start = parse_quantities("start", &self.start)?;
        let end = parse_quantities("end", &self.end)?;
        let roster = parse_names(self.names.as_deref(), start.len())?;
        let unit_value = parse_unit_value(self.unit_value.as_deref())?;
        Ok(ValidatedSession {
            start,
            end,
            roster,
            unit_value,
        })
    }
}

/// Parse a comma-separated list of decimal quantities.
///
/// `field` only labels error messages.
pub fn parse_quantities(field: &'static str, text: &str) -> Result<Vec<Decimal>, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    text.split(',')
        .enumerate()
        .map(|(position, raw)| {
            let value = raw.trim();
            Decimal::from_str(value).map_err(|_| ValidationError::InvalidQuantity {
                field,
                position,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Parse optional comma-separated display names.
///
/// Missing or blank input yields synthesized names. A blank entry inside a
/// non-blank list is rejected.
pub fn parse_names(text: Option<&str>, participants: usize) -> Result<Roster, ValidationError> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(Roster::synthesized(participants)),
    };

    let names: Vec<String> = text.split(',').map(|n| n.trim().to_string()).collect();
    if let Some(position) = names.iter().position(String::is_empty) {
        return Err(ValidationError::BlankName { position });
    }
    if names.len() != participants {
        return Err(ValidationError::NameCountMismatch {
            names: names.len(),
            participants,
        });
    }
    Ok(Roster::new(names))
}

/// Parse the optional value of one unit (e.g. a big blind in euros).
///
/// Zero behaves like an absent value.
pub fn parse_unit_value(text: Option<&str>) -> Result<Option<Decimal>, ValidationError> {
    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(None),
    };

    let invalid = || ValidationError::InvalidUnitValue {
        value: text.to_string(),
    };
    let value = Decimal::from_str(text).map_err(|_| invalid())?;
    if value < Decimal::ZERO {
        return Err(invalid());
    }
    Ok(Some(value).filter(|v| !v.is_zero()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::participant::ParticipantId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_quantities_trims_whitespace() {
        let values = parse_quantities("start", " 100, 150 ,200.5").unwrap();
        assert_eq!(values, vec![dec!(100), dec!(150), dec!(200.5)]);
    }

    #[test]
    fn test_parse_quantities_rejects_garbage() {
        let err = parse_quantities("end", "10, ten, 30").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidQuantity {
                field: "end",
                position: 1,
                value: "ten".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_quantities_rejects_trailing_comma() {
        let err = parse_quantities("start", "10, 20,").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidQuantity { position: 2, .. }));
    }

    #[test]
    fn test_parse_quantities_empty() {
        let err = parse_quantities("start", "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "start" });
    }

    #[test]
    fn test_parse_names_default() {
        let roster = parse_names(None, 2).unwrap();
        assert_eq!(roster, Roster::synthesized(2));
        let roster = parse_names(Some("  "), 2).unwrap();
        assert_eq!(roster, Roster::synthesized(2));
    }

    #[test]
    fn test_parse_names_trimmed() {
        let roster = parse_names(Some("Alice, Bob ,Charlie"), 3).unwrap();
        assert_eq!(roster.name(ParticipantId::new(1)), Some("Bob"));
    }

    #[test]
    fn test_parse_names_count_mismatch() {
        let err = parse_names(Some("Alice, Bob"), 3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NameCountMismatch {
                names: 2,
                participants: 3,
            }
        );
    }

    #[test]
    fn test_parse_names_rejects_blank_entry() {
        let err = parse_names(Some("Alice,,Bob"), 3).unwrap_err();
        assert_eq!(err, ValidationError::BlankName { position: 1 });

        let err = parse_names(Some("Alice, Bob, "), 3).unwrap_err();
        assert_eq!(err, ValidationError::BlankName { position: 2 });
    }

    #[test]
    fn test_parse_unit_value() {
        assert_eq!(parse_unit_value(None).unwrap(), None);
        assert_eq!(parse_unit_value(Some("")).unwrap(), None);
        assert_eq!(parse_unit_value(Some("0")).unwrap(), None);
        assert_eq!(parse_unit_value(Some("0.25")).unwrap(), Some(dec!(0.25)));
        assert!(parse_unit_value(Some("-1")).is_err());
        assert!(parse_unit_value(Some("abc")).is_err());
    }

    #[test]
    fn test_validate_session() {
        let input = SessionInput {
            start: "100, 150, 200".to_string(),
            end: "90, 160, 200".to_string(),
            names: Some("Alice, Bob, Charlie".to_string()),
            unit_value: Some("2".to_string()),
        };
        let session = input.validate().unwrap();
        assert_eq!(session.start.len(), 3);
        assert_eq!(session.roster.len(), 3);
        assert_eq!(session.unit_value, Some(dec!(2)));
    }

    #[test]
    fn test_validate_checks_names_before_lengths() {
        // Name count is checked against start; start/end lengths are the engine's concern.
        let input = SessionInput {
            start: "1, 2".to_string(),
            end: "3".to_string(),
            names: Some("Alice".to_string()),
            unit_value: None,
        };
        assert!(matches!(
            input.validate(),
            Err(ValidationError::NameCountMismatch { .. })
        ));
    }

    #[test]
    fn test_session_input_from_json() {
        let input: SessionInput =
            serde_json::from_str(r#"{ "start": "1, 2", "end": "2, 1" }"#).unwrap();
        assert_eq!(input.names, None);
        assert_eq!(input.unit_value, None);
        assert_eq!(input.validate().unwrap().roster, Roster::synthesized(2));
    }
}
