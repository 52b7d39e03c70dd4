//! Explicit wizard states. Movement is a transition function, never an
//! unchecked integer bump.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Identification,
    BrandContext,
    ProjectScope,
    Aesthetics,
    Logistics,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Identification,
        Step::BrandContext,
        Step::ProjectScope,
        Step::Aesthetics,
        Step::Logistics,
    ];

    /// 1-based position, as shown by the shell's stepper.
    pub fn ordinal(self) -> u8 {
        match self {
            Step::Identification => 1,
            Step::BrandContext => 2,
            Step::ProjectScope => 3,
            Step::Aesthetics => 4,
            Step::Logistics => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Identification => "Identificação",
            Step::BrandContext => "Sobre a Marca",
            Step::ProjectScope => "O Projeto",
            Step::Aesthetics => "Estética",
            Step::Logistics => "Logística",
        }
    }

    /// The following step. `Logistics` has none; submission takes over there.
    pub fn forward(self) -> Option<Step> {
        match self {
            Step::Identification => Some(Step::BrandContext),
            Step::BrandContext => Some(Step::ProjectScope),
            Step::ProjectScope => Some(Step::Aesthetics),
            Step::Aesthetics => Some(Step::Logistics),
            Step::Logistics => None,
        }
    }

    pub fn back(self) -> Option<Step> {
        match self {
            Step::Identification => None,
            Step::BrandContext => Some(Step::Identification),
            Step::ProjectScope => Some(Step::BrandContext),
            Step::Aesthetics => Some(Step::ProjectScope),
            Step::Logistics => Some(Step::Aesthetics),
        }
    }
}
