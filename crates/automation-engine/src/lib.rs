//! Automation engine for the domo smart-home core
//!
//! Provides IF-THEN rules with declarative conditions and actions,
//! re-evaluated against live device state on every pass.

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod model;

pub use engine::{Engine, RuleOutcome, RuleStatus};
pub use error::AutomationError;
pub use model::*;
