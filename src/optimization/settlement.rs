use crate::core::error::ValidationError;
use crate::core::participant::ParticipantId;
use crate::core::position::{checked_sum, NetPositions};
use crate::core::transfer::{Transfer, TransferPlan};
use log::{debug, trace, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tunables for the settlement engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Largest accepted difference between the start and end totals.
    pub tolerance: Decimal,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tolerance: dec!(0.000001),
        }
    }
}

/// The settlement engine.
///
/// Turns per-participant start and end quantities into a list of transfers
/// that brings every participant's net balance back to zero.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Settle with the default tolerance.
    pub fn settle(start: &[Decimal], end: &[Decimal]) -> Result<TransferPlan, ValidationError> {
        Self::settle_with(&SettlementConfig::default(), start, end)
    }

    /// Validate the quantities and compute the transfers.
    ///
    /// Fails without a partial result when the sequences differ in length,
    /// their totals differ by more than `config.tolerance`, or a total or net
    /// balance does not fit in a `Decimal`.
    pub fn settle_with(
        config: &SettlementConfig,
        start: &[Decimal],
        end: &[Decimal],
    ) -> Result<TransferPlan, ValidationError> {
        let positions = NetPositions::from_quantities(start, end)?;

        let start_total = checked_sum("start", start.iter().copied())?;
        let end_total = checked_sum("end", end.iter().copied())?;
        let within_tolerance = start_total
            .checked_sub(end_total)
            .is_some_and(|diff| diff.abs() <= config.tolerance);
        if !within_tolerance {
            return Err(ValidationError::ImbalancedTotal {
                start_total,
                end_total,
            });
        }
        if start_total != end_total {
            warn!(
                "totals differ by {} (within tolerance {}); a residue will stay unsettled",
                end_total - start_total,
                config.tolerance
            );
        }

        Ok(Self::settle_positions(&positions))
    }

    /// Match creditors against debtors on already validated positions.
    ///
    /// # Algorithm
    ///
    /// 1. Collect creditors and debtors in participant index order.
    /// 2. Pair the current creditor with the current debtor and move
    ///    `min(remaining credit, remaining debt)` from debtor to creditor.
    /// 3. Advance past whichever side (or both) reached exactly zero.
    /// 4. Stop as soon as either side is exhausted.
    ///
    /// Every step advances at least one cursor, so the plan holds at most
    /// `creditors + debtors - 1` transfers. Flat participants never appear.
    pub fn settle_positions(positions: &NetPositions) -> TransferPlan {
        let mut creditors: Vec<(ParticipantId, Decimal)> = positions.creditors().collect();
        let mut debtors: Vec<(ParticipantId, Decimal)> = positions.debtors().collect();

        debug!(
            "settling {} participants: {} creditors, {} debtors",
            positions.len(),
            creditors.len(),
            debtors.len()
        );

        let mut plan =
            TransferPlan::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
        let (mut i, mut j) = (0, 0);

        while i < creditors.len() && j < debtors.len() {
            let (creditor, credit) = creditors[i];
            let (debtor, debt) = debtors[j];
            let amount = credit.min(debt);

            trace!("{} pays {} to {}", debtor, amount, creditor);
            plan.push(Transfer::new(debtor, creditor, amount));

            creditors[i].1 = credit - amount;
            debtors[j].1 = debt - amount;

            if creditors[i].1.is_zero() {
                i += 1;
            }
            if debtors[j].1.is_zero() {
                j += 1;
            }
        }

        debug!(
            "settled with {} transfers moving {}",
            plan.len(),
            plan.total_moved()
        );
        plan
    }
}

/// Settle `start` → `end` quantities with the default configuration.
///
/// # Examples
///
/// ```
/// use debt_settler::settle;
/// use rust_decimal_macros::dec;
///
/// let plan = settle(&[dec!(100), dec!(200)], &[dec!(150), dec!(150)]).unwrap();
/// assert_eq!(plan.transfers()[0].as_tuple(), (1, 0, dec!(50)));
/// ```
pub fn settle(start: &[Decimal], end: &[Decimal]) -> Result<TransferPlan, ValidationError> {
    SettlementEngine::settle(start, end)
}
