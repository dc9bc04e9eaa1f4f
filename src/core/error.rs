use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a settlement request is rejected.
///
/// The engine raises `LengthMismatch`, `ImbalancedTotal` and
/// `QuantityOverflow`; the input adapter raises the rest before the engine
/// is ever called. Messages are meant to be shown to the end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the number of participants must be the same (start has {start}, end has {end})")]
    LengthMismatch { start: usize, end: usize },

    #[error("the total quantity must be the same (start sums to {start_total}, end sums to {end_total})")]
    ImbalancedTotal {
        start_total: Decimal,
        end_total: Decimal,
    },

    #[error("the number of names must match the number of participants ({names} names for {participants} participants)")]
    NameCountMismatch { names: usize, participants: usize },

    #[error("{field} quantities are required")]
    EmptyField { field: &'static str },

    #[error("invalid {field} quantity '{value}' at position {position}")]
    InvalidQuantity {
        field: &'static str,
        position: usize,
        value: String,
    },

    #[error("unit value must be a non-negative number, got '{value}'")]
    InvalidUnitValue { value: String },

    #[error("{field} quantities are too large to settle")]
    QuantityOverflow { field: &'static str },

    #[error("participant name at position {position} is blank")]
    BlankName { position: usize },
}
