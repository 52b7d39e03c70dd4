//! Manual delivery: save the dossier locally, then open a pre-filled
//! WhatsApp conversation for the client to attach it by hand.

use crate::delivery::payload::DeliveryPayload;
use crate::delivery::DeliveryError;
use crate::notify::Notifier;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

const INFO_NOTICE: &str = "Dossiê gerado! Agora é só anexar o arquivo no WhatsApp.";
const ATTACHMENT_NOTE: &str = "(Estou enviando o arquivo PDF em anexo!)";

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), DeliveryError>;
}

/// Opens links through the system handler, in a new browsing context.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), DeliveryError> {
        tauri_plugin_opener::open_url(url, None::<&str>)
            .map_err(|e| DeliveryError::OpenBlocked(e.to_string()))
    }
}

pub struct FallbackChannel {
    save_dir: PathBuf,
    delay: Duration,
    opener: Box<dyn LinkOpener>,
}

impl FallbackChannel {
    pub fn new(save_dir: PathBuf, delay: Duration, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            save_dir,
            delay,
            opener,
        }
    }

    /// The wa.me deep link carrying the message plus the attachment note.
    pub fn deep_link(&self, payload: &DeliveryPayload) -> String {
        let text = format!("{}\n\n{}", payload.message, ATTACHMENT_NOTE);
        format!(
            "https://wa.me/{}?text={}",
            payload.whatsapp_number,
            urlencoding::encode(&text)
        )
    }

    /// Write the document under its derived filename. The bytes go through
    /// a scoped temporary file that persists on success and is removed on
    /// any other path.
    fn save(&self, payload: &DeliveryPayload) -> Result<PathBuf, DeliveryError> {
        std::fs::create_dir_all(&self.save_dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.save_dir)?;
        tmp.write_all(&payload.document)?;
        let target = self.save_dir.join(&payload.filename);
        tmp.persist(&target).map_err(|e| DeliveryError::Save(e.error))?;
        Ok(target)
    }

    /// Deliver manually: save, tell the user, then (after the fixed delay)
    /// open the conversation. A blocked open is logged and swallowed;
    /// surfacing it is still an open product decision.
    pub async fn deliver(
        &self,
        payload: &DeliveryPayload,
        notifier: &dyn Notifier,
    ) -> Result<(), DeliveryError> {
        let saved = self.save(payload)?;
        log::info!("dossier saved to {}", saved.display());
        notifier.info(INFO_NOTICE);

        tokio::time::sleep(self.delay).await;
        if let Err(e) = self.opener.open(&self.deep_link(payload)) {
            log::warn!("deep link open was blocked: {}", e);
        }
        Ok(())
    }
}
