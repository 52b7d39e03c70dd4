//! Maps a completed record onto the five fixed dossier sections.

use crate::dossier::section::{FieldEntry, Section};
use crate::wizard::BriefingRecord;

/// Printed in place of any field the client left blank.
pub const PLACEHOLDER: &str = "Não informado";

fn entry(label: &'static str, value: &str) -> FieldEntry {
    let value = if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    };
    FieldEntry { label, value }
}

/// Deterministic: the same record always yields the same sections, in the
/// same order. Non-empty values pass through unmodified.
pub fn compose(record: &BriefingRecord) -> Vec<Section> {
    vec![
        Section {
            title: "1. Identificação",
            entries: vec![
                entry("Cliente", &record.name),
                entry("Empresa/Marca", &record.brand_name),
                entry("E-mail", &record.email),
                entry("WhatsApp", &record.whatsapp),
                entry("Instagram", &record.instagram),
            ],
        },
        Section {
            title: "2. Sobre a Marca",
            entries: vec![
                entry("História", &record.history),
                entry("Concorrentes", &record.competitors),
                entry("Diferencial", &record.differentiation),
            ],
        },
        Section {
            title: "3. O Projeto",
            entries: vec![
                entry("Serviço", &record.service),
                entry("Tipo", &record.is_redesign),
                entry("Entregáveis", &record.deliverables),
            ],
        },
        Section {
            title: "4. Estratégia e Estética",
            entries: vec![
                entry("Objetivo", &record.purpose),
                entry("Público-alvo", &record.audience),
                entry("Palavras-chave", &record.keywords),
                entry("Cores/Preferências", &record.colors),
                entry("Referências", &record.references),
            ],
        },
        Section {
            title: "5. Logística",
            entries: vec![
                entry("Prazo Desejado", &record.deadline),
                entry("Investimento", &record.investment),
            ],
        },
    ]
}
