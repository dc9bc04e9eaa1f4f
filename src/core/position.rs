use crate::core::error::ValidationError;
use crate::core::participant::ParticipantId;
use crate::core::transfer::TransferPlan;
use rust_decimal::Decimal;
use serde::Serialize;

/// Net balance of every participant: end quantity minus start quantity.
///
/// A positive balance means the participant is owed by the pool (creditor).
/// A negative balance means the participant owes the pool (debtor).
///
/// Positions are kept in input order, so iteration order is the participant
/// index order. Construction guarantees that every net balance, the total
/// credit and the total debt fit in a `Decimal`, so the sums below cannot
/// overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetPositions {
    nets: Vec<Decimal>,
}

impl NetPositions {
    /// Compute `end[i] - start[i]` for every participant.
    ///
    /// Lengths and range are checked here; the zero-sum check belongs to the
    /// settlement engine because it depends on the configured tolerance.
    pub fn from_quantities(start: &[Decimal], end: &[Decimal]) -> Result<Self, ValidationError> {
        if start.len() != end.len() {
            return Err(ValidationError::LengthMismatch {
                start: start.len(),
                end: end.len(),
            });
        }
        let nets = start
            .iter()
            .zip(end)
            .map(|(s, e)| {
                e.checked_sub(*s)
                    .ok_or(ValidationError::QuantityOverflow { field: "net" })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_nets(nets)
    }

    pub fn from_nets(nets: Vec<Decimal>) -> Result<Self, ValidationError> {
        let positions = Self { nets };
        checked_sum("credit", positions.creditors().map(|(_, amount)| amount))?;
        checked_sum("debt", positions.debtors().map(|(_, amount)| amount))?;
        Ok(positions)
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    /// Net balance of a participant. Unknown participants are flat.
    pub fn net(&self, participant: ParticipantId) -> Decimal {
        self.nets
            .get(participant.index())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, Decimal)> + '_ {
        self.nets
            .iter()
            .enumerate()
            .map(|(i, &net)| (ParticipantId::new(i), net))
    }

    /// Participants owed by the pool, with the amount owed, in index order.
    pub fn creditors(&self) -> impl Iterator<Item = (ParticipantId, Decimal)> + '_ {
        self.iter().filter(|(_, net)| *net > Decimal::ZERO)
    }

    /// Participants owing the pool, with the (positive) amount owed, in index order.
    pub fn debtors(&self) -> impl Iterator<Item = (ParticipantId, Decimal)> + '_ {
        self.iter()
            .filter(|(_, net)| *net < Decimal::ZERO)
            .map(|(id, net)| (id, -net))
    }

    pub fn total_credit(&self) -> Decimal {
        self.creditors().map(|(_, amount)| amount).sum()
    }

    pub fn total_debt(&self) -> Decimal {
        self.debtors().map(|(_, amount)| amount).sum()
    }

    /// Sum of all net balances. Zero for a closed pool.
    pub fn imbalance(&self) -> Decimal {
        self.nets.iter().sum()
    }

    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.imbalance().abs() <= tolerance
    }

    /// Whether applying `plan` brings every participant exactly to zero.
    pub fn is_settled_by(&self, plan: &TransferPlan) -> bool {
        self.iter().all(|(id, net)| plan.net_effect(id) == net)
            && plan.participants().iter().all(|id| id.index() < self.len())
    }
}

/// Sum quantities, reporting overflow as a validation error for `field`.
pub(crate) fn checked_sum(
    field: &'static str,
    values: impl IntoIterator<Item = Decimal>,
) -> Result<Decimal, ValidationError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .ok_or(ValidationError::QuantityOverflow { field })
}
