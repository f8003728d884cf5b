pub mod config;
pub mod decision;
pub mod error;
pub mod telemetry;

pub use decision::{DecisionConfig, DecisionEngine, LoanDecision, RejectionReason};
