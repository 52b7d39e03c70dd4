//! Fixed option lists the shell renders as buttons and selects.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    IdentidadeVisual,
    SocialDesign,
    WebExperience,
    PapelariaPremium,
    AcompanhamentoMensal,
    Outro,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::IdentidadeVisual,
        Service::SocialDesign,
        Service::WebExperience,
        Service::PapelariaPremium,
        Service::AcompanhamentoMensal,
        Service::Outro,
    ];

    pub fn select_service(service: u8) -> Result<Self, String> {
        match service {
            0 => Ok(Service::IdentidadeVisual),
            1 => Ok(Service::SocialDesign),
            2 => Ok(Service::WebExperience),
            3 => Ok(Service::PapelariaPremium),
            4 => Ok(Service::AcompanhamentoMensal),
            5 => Ok(Service::Outro),
            _ => Err("Invalid service selected!".to_string()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::IdentidadeVisual => "Identidade Visual",
            Service::SocialDesign => "Social Design",
            Service::WebExperience => "Web Experience",
            Service::PapelariaPremium => "Papelaria Premium",
            Service::AcompanhamentoMensal => "Acompanhamento Mensal",
            Service::Outro => "Outro",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    CriacaoDoZero,
    Redesign,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::CriacaoDoZero, ProjectStatus::Redesign];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::CriacaoDoZero => "Criação do Zero",
            ProjectStatus::Redesign => "Redesign / Modernização",
        }
    }
}

pub const INVESTMENT_RANGES: [&str; 4] = [
    "R$ 1.000 - R$ 2.500",
    "R$ 2.500 - R$ 5.000",
    "R$ 5.000 - R$ 10.000",
    "Acima de R$ 10.000",
];
