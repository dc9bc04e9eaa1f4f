use crate::core::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A directed movement of quantity between two participants.
///
/// `from` pays `amount` to `to`. Transfers are produced by the settlement
/// engine and are immutable once created.
///
/// # Examples
///
/// ```
/// use debt_settler::core::participant::ParticipantId;
/// use debt_settler::core::transfer::Transfer;
/// use rust_decimal_macros::dec;
///
/// let transfer = Transfer::new(ParticipantId::new(1), ParticipantId::new(0), dec!(50));
///
/// assert_eq!(transfer.from().index(), 1);
/// assert_eq!(transfer.amount(), dec!(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The participant that pays.
    from: ParticipantId,
    /// The participant that receives.
    to: ParticipantId,
    /// Quantity moved. Always positive.
    amount: Decimal,
}

impl Transfer {
    /// Create a new transfer.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is not positive or if `from == to`.
    pub fn new(from: ParticipantId, to: ParticipantId, amount: Decimal) -> Self {
        assert!(
            amount > Decimal::ZERO,
            "Transfer amount must be positive, got {}",
            amount
        );
        assert!(from != to, "Transfer must be between distinct participants, got {} twice", from);
        Self { from, to, amount }
    }

    pub fn from(&self) -> ParticipantId {
        self.from
    }

    pub fn to(&self) -> ParticipantId {
        self.to
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// `(from index, to index, amount)`, the shape callers usually compare against.
    pub fn as_tuple(&self) -> (usize, usize, Decimal) {
        (self.from.index(), self.to.index(), self.amount)
    }
}

/// Ordered list of transfers returned by one settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferPlan {
    transfers: Vec<Transfer>,
}

impl TransferPlan {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            transfers: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, transfer: Transfer) {
        self.transfers.push(transfer);
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transfer> {
        self.transfers.iter()
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Total quantity moved across all transfers.
    pub fn total_moved(&self) -> Decimal {
        self.transfers.iter().map(|t| t.amount()).sum()
    }

    /// Quantity a participant receives minus what it pays under this plan.
    pub fn net_effect(&self, participant: ParticipantId) -> Decimal {
        self.transfers
            .iter()
            .map(|t| {
                if t.to() == participant {
                    t.amount()
                } else if t.from() == participant {
                    -t.amount()
                } else {
                    Decimal::ZERO
                }
            })
            .sum()
    }

    /// Every participant that pays or receives something, in index order.
    pub fn participants(&self) -> Vec<ParticipantId> {
        let mut participants: Vec<ParticipantId> = self
            .transfers
            .iter()
            .flat_map(|t| [t.from(), t.to()])
            .collect();
        participants.sort();
        participants.dedup();
        participants
    }

    pub fn into_vec(self) -> Vec<Transfer> {
        self.transfers
    }
}

impl FromIterator<Transfer> for TransferPlan {
    fn from_iter<T: IntoIterator<Item = Transfer>>(iter: T) -> Self {
        Self {
            transfers: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TransferPlan {
    type Item = Transfer;
    type IntoIter = std::vec::IntoIter<Transfer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransferPlan {
    type Item = &'a Transfer;
    type IntoIter = std::slice::Iter<'a, Transfer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.iter()
    }
}
