//! Guided intake wizard: step position plus the accumulated client record.

pub mod machine;
pub mod record;
pub mod service;
pub mod step;

#[cfg(test)]
mod tests;

pub use machine::FormStateMachine;
pub use record::BriefingRecord;
pub use service::{ProjectStatus, Service, INVESTMENT_RANGES};
pub use step::Step;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("unknown briefing field: {0}")]
    UnknownField(String),
    #[error("a service must be chosen before leaving the project step")]
    ServiceRequired,
    #[error("submission is only available from the logistics step")]
    NotAtLogistics,
    #[error("deadline and investment are required before submission")]
    LogisticsIncomplete,
}
