//! Owns the step position and the record; gates forward transitions.

use crate::wizard::{BriefingRecord, Service, Step, WizardError};

#[derive(Debug, Clone, Default)]
pub struct FormStateMachine {
    step: Step,
    record: BriefingRecord,
}

impl FormStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &BriefingRecord {
        &self.record
    }

    pub fn edit(&mut self, field: &str, value: String) -> Result<(), WizardError> {
        self.record.set_field(field, value)
    }

    pub fn select_service(&mut self, service: Service) {
        self.record.service = service.label().to_string();
    }

    /// Advance one step. Refused (state unchanged) while the project step
    /// has no service chosen; no other step carries a forward gate.
    pub fn next(&mut self) -> Result<Step, WizardError> {
        if self.step == Step::ProjectScope && !self.record.has_service() {
            return Err(WizardError::ServiceRequired);
        }
        if let Some(next) = self.step.forward() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn prev(&mut self) -> Step {
        if let Some(back) = self.step.back() {
            self.step = back;
        }
        self.step
    }

    /// A submittable snapshot, or the gate that refused it. Only the two
    /// logistics fields are checked here; the record stays untouched either way.
    pub fn submission(&self) -> Result<BriefingRecord, WizardError> {
        if self.step != Step::Logistics {
            return Err(WizardError::NotAtLogistics);
        }
        if !self.record.logistics_complete() {
            return Err(WizardError::LogisticsIncomplete);
        }
        Ok(self.record.clone())
    }

    /// Discard the session: back to step one with a blank record.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
