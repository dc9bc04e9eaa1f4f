use crate::core::error::ValidationError;
use crate::core::participant::Roster;
use crate::core::transfer::{Transfer, TransferPlan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places kept for the converted display amount.
pub const CONVERTED_DECIMAL_PLACES: u32 = 2;

/// A transfer ready for display: names instead of indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTransfer {
    pub from: String,
    pub to: String,
    /// Quantity in units, exactly as the engine computed it.
    pub amount: Decimal,
    /// `amount` times the unit value, rounded for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_amount: Option<Decimal>,
}

impl fmt::Display for FormattedTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} to {}", self.from, self.amount, self.to)?;
        if let Some(converted) = self.converted_amount {
            write!(f, " ({})", converted)?;
        }
        Ok(())
    }
}

/// Maps engine output onto display names and an optional unit value.
#[derive(Debug, Clone)]
pub struct TransferFormatter<'a> {
    roster: &'a Roster,
    unit_value: Option<Decimal>,
}

impl<'a> TransferFormatter<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            unit_value: None,
        }
    }

    pub fn with_unit_value(mut self, unit_value: Option<Decimal>) -> Self {
        self.unit_value = unit_value;
        self
    }

    /// Fails only when the converted amount does not fit in a `Decimal`.
    pub fn format_transfer(&self, transfer: &Transfer) -> Result<FormattedTransfer, ValidationError> {
        let converted_amount = self
            .unit_value
            .map(|value| {
                transfer
                    .amount()
                    .checked_mul(value)
                    .map(|converted| converted.round_dp(CONVERTED_DECIMAL_PLACES))
                    .ok_or(ValidationError::QuantityOverflow { field: "converted" })
            })
            .transpose()?;

        Ok(FormattedTransfer {
            from: self.roster.label(transfer.from()),
            to: self.roster.label(transfer.to()),
            amount: transfer.amount(),
            converted_amount,
        })
    }

    pub fn format(&self, plan: &TransferPlan) -> Result<Vec<FormattedTransfer>, ValidationError> {
        plan.iter().map(|t| self.format_transfer(t)).collect()
    }
}
