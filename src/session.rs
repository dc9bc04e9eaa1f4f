//! One settlement request from validated input to display-ready report.
//!
//! The report is a plain value owned by the caller. Carrying it between a
//! submission step and a display step (or storing it under its id) is left
//! to whoever calls [`settle_session`].

use crate::core::error::ValidationError;
use crate::io::input::ValidatedSession;
use crate::io::output::{FormattedTransfer, TransferFormatter};
use crate::optimization::settlement::{SettlementConfig, SettlementEngine};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Display-ready outcome of one settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Key a caller can store the report under.
    id: Uuid,
    computed_at: DateTime<Utc>,
    participant_count: usize,
    unit_value: Option<Decimal>,
    total_moved: Decimal,
    transfers: Vec<FormattedTransfer>,
}

impl SettlementReport {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }

    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    pub fn unit_value(&self) -> Option<Decimal> {
        self.unit_value
    }

    /// Total quantity moved, in units.
    pub fn total_moved(&self) -> Decimal {
        self.total_moved
    }

    pub fn transfers(&self) -> &[FormattedTransfer] {
        &self.transfers
    }

    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

/// Run the engine on a validated session and format its transfers.
pub fn settle_session(
    session: &ValidatedSession,
    config: &SettlementConfig,
) -> Result<SettlementReport, ValidationError> {
    let plan = SettlementEngine::settle_with(config, &session.start, &session.end)?;
    let transfers = TransferFormatter::new(&session.roster)
        .with_unit_value(session.unit_value)
        .format(&plan)?;

    Ok(SettlementReport {
        id: Uuid::new_v4(),
        computed_at: Utc::now(),
        participant_count: session.start.len(),
        unit_value: session.unit_value,
        total_moved: plan.total_moved(),
        transfers,
    })
}

impl fmt::Display for SettlementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Settlement ===")?;
        writeln!(f, "Participants:   {}", self.participant_count)?;
        writeln!(f, "Transfers:      {}", self.transfers.len())?;
        writeln!(f, "Total moved:    {}", self.total_moved)?;
        if let Some(unit_value) = self.unit_value {
            writeln!(f, "Unit value:     {}", unit_value)?;
        }

        if self.transfers.is_empty() {
            writeln!(f, "\nEveryone is already even.")?;
        } else {
            writeln!(f)?;
            for transfer in &self.transfers {
                writeln!(f, "  {}", transfer)?;
            }
        }
        Ok(())
    }
}
