//! The accumulated client answers for one wizard session.
//!
//! Every field is free text; empty means "not answered". The shell owns
//! presence/type hints on its widgets, so no format validation lives here.

use crate::wizard::WizardError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BriefingRecord {
    // Identificação
    pub name: String,
    pub brand_name: String,
    pub email: String,
    pub whatsapp: String,
    pub instagram: String,
    // Sobre a Marca
    pub history: String,
    pub competitors: String,
    pub differentiation: String,
    // O Projeto
    pub service: String,
    pub is_redesign: String,
    pub deliverables: String,
    // Estética
    pub purpose: String,
    pub audience: String,
    pub keywords: String,
    pub colors: String,
    pub references: String,
    // Logística
    pub deadline: String,
    pub investment: String,
}

impl BriefingRecord {
    /// Mutate one field by its form name. Step position is unaffected.
    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), WizardError> {
        let slot = match field {
            "name" => &mut self.name,
            "brandName" => &mut self.brand_name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            "instagram" => &mut self.instagram,
            "history" => &mut self.history,
            "competitors" => &mut self.competitors,
            "differentiation" => &mut self.differentiation,
            "service" => &mut self.service,
            "isRedesign" => &mut self.is_redesign,
            "deliverables" => &mut self.deliverables,
            "purpose" => &mut self.purpose,
            "audience" => &mut self.audience,
            "keywords" => &mut self.keywords,
            "colors" => &mut self.colors,
            "references" => &mut self.references,
            "deadline" => &mut self.deadline,
            "investment" => &mut self.investment,
            _ => return Err(WizardError::UnknownField(field.to_string())),
        };
        *slot = value;
        Ok(())
    }

    pub fn has_service(&self) -> bool {
        !self.service.is_empty()
    }

    pub fn logistics_complete(&self) -> bool {
        !self.deadline.is_empty() && !self.investment.is_empty()
    }
}
