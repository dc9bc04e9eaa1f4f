//! # debt-settler
//!
//! Settles a closed pool of participants who each started with some quantity
//! of a unit (poker blinds, chips, tokens) and ended with a different one.
//!
//! Given start and end quantities per participant, the engine computes a short
//! ordered list of transfers that brings everyone back to zero net.
//!
//! ## Architecture
//!
//! - **core** — Participants, net positions, transfers, validation errors
//! - **optimization** — The greedy settlement engine
//! - **io** — Input parsing and display formatting at the boundary
//! - **session** — End-to-end settlement into a caller-owned report
//! - **simulation** — Random session generation

pub mod core;
pub mod io;
pub mod optimization;
pub mod session;
pub mod simulation;

pub use crate::optimization::settlement::settle;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::error::ValidationError;
    pub use crate::core::participant::{ParticipantId, Roster};
    pub use crate::core::position::NetPositions;
    pub use crate::core::transfer::{Transfer, TransferPlan};
    pub use crate::io::input::{SessionInput, ValidatedSession};
    pub use crate::io::output::{FormattedTransfer, TransferFormatter};
    pub use crate::optimization::settlement::{settle, SettlementConfig, SettlementEngine};
    pub use crate::session::{settle_session, SettlementReport};
}
