pub mod error;
pub mod participant;
pub mod position;
pub mod transfer;
