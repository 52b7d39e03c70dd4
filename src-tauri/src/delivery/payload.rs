//! The bundle handed to the delivery step, plus its derivations.

use crate::dossier::PLACEHOLDER;
use crate::wizard::BriefingRecord;
use bytes::Bytes;
use regex::Regex;
use std::sync::OnceLock;

/// Title shown on the native share sheet.
pub const SHARE_TITLE: &str = "Briefing Estratégico - Anna Designer";

#[derive(Debug, Clone)]
pub struct DeliveryPayload {
    pub document: Bytes,
    pub filename: String,
    pub message: String,
    /// Fixed destination contact for the deep link.
    pub whatsapp_number: String,
}

impl DeliveryPayload {
    pub fn assemble(record: &BriefingRecord, document: Vec<u8>, whatsapp_number: &str) -> Self {
        Self {
            document: Bytes::from(document),
            filename: derive_filename(&record.name),
            message: compose_message(record),
            whatsapp_number: whatsapp_number.to_string(),
        }
    }
}

/// `"Ana Paula"` → `Briefing_AnnaForm_Ana_Paula.pdf`. Pure and idempotent
/// for a given name; runs of whitespace collapse to single underscores.
pub fn derive_filename(name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"));
    format!("Briefing_AnnaForm_{}.pdf", re.replace_all(name, "_"))
}

/// The WhatsApp opener message.
pub fn compose_message(record: &BriefingRecord) -> String {
    let brand = if record.brand_name.is_empty() {
        PLACEHOLDER
    } else {
        &record.brand_name
    };
    format!(
        "✨ *BRIEFING ESTRATÉGICO FINALIZADO* ✨\n\n\
         Olá Anna! Acabei de concluir o briefing estratégico.\n\n\
         👤 *Cliente:* {}\n\
         🚀 *Projeto/Marca:* {}\n\
         🛠️ *Serviço:* {}",
        record.name, brand, record.service
    )
}
