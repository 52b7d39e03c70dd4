//! Orchestrates one submission end to end: generate the dossier, pick a
//! delivery channel, run it, and keep the in-flight guard honest.

use crate::config::BriefingConfig;
use crate::delivery::channel::{select_channel, DeliveryChannel, ShareHost};
use crate::delivery::fallback::{FallbackChannel, LinkOpener};
use crate::delivery::payload::DeliveryPayload;
use crate::dossier;
use crate::notify::Notifier;
use crate::wizard::BriefingRecord;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const SUCCESS_NOTICE: &str = "Briefing compartilhado com sucesso!";
const ERROR_NOTICE: &str = "Erro ao processar o briefing. Tente novamente.";

/// How a submission ended, as reported back to the shell.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Another submission holds the in-flight guard; nothing was produced.
    AlreadyInFlight,
    /// The native share resolved.
    Shared,
    /// Saved locally; the WhatsApp conversation was opened for manual attach.
    SavedForManualSend,
    /// Generation or save failed; record and step are untouched for a retry.
    Failed,
}

/// Scoped hold on the in-flight flag; released on every exit path,
/// including early returns and panics.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
            .then(|| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct DeliveryDispatcher {
    busy: AtomicBool,
    config: BriefingConfig,
    notifier: Arc<dyn Notifier>,
    share: Arc<dyn ShareHost>,
    fallback: FallbackChannel,
}

impl DeliveryDispatcher {
    pub fn new(
        config: BriefingConfig,
        notifier: Arc<dyn Notifier>,
        share: Arc<dyn ShareHost>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let fallback =
            FallbackChannel::new(config.save_dir.clone(), config.fallback_delay, opener);
        Self {
            busy: AtomicBool::new(false),
            config,
            notifier,
            share,
            fallback,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Run one submission. The guard is taken synchronously, before any
    /// suspension point, so a second submission started while this one
    /// awaits the share resolution is a no-op.
    pub async fn submit(&self, record: &BriefingRecord) -> Outcome {
        let Some(_guard) = InFlight::acquire(&self.busy) else {
            log::info!("submission ignored: another dossier is in flight");
            return Outcome::AlreadyInFlight;
        };

        let generated_on = chrono::Local::now().format("%d/%m/%Y").to_string();
        let document = match dossier::generate(record, &generated_on) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("dossier generation failed: {}", e);
                self.notifier.error(ERROR_NOTICE);
                return Outcome::Failed;
            }
        };

        let payload = DeliveryPayload::assemble(record, document, &self.config.whatsapp_number);
        log::info!(
            "dossier ready: {} ({} bytes)",
            payload.filename,
            payload.document.len()
        );

        match select_channel(&*self.share, &payload) {
            DeliveryChannel::NativeShare => match self.share.share(&payload).await {
                Ok(()) => {
                    self.notifier.success(SUCCESS_NOTICE);
                    Outcome::Shared
                }
                Err(rejection) => {
                    // Declines and cancellations are a normal branch.
                    log::debug!("share declined ({}), taking the manual path", rejection);
                    self.deliver_manually(&payload).await
                }
            },
            DeliveryChannel::ManualFallback => self.deliver_manually(&payload).await,
        }
    }

    async fn deliver_manually(&self, payload: &DeliveryPayload) -> Outcome {
        match self.fallback.deliver(payload, &*self.notifier).await {
            Ok(()) => Outcome::SavedForManualSend,
            Err(e) => {
                log::error!("manual delivery failed: {}", e);
                self.notifier.error(ERROR_NOTICE);
                Outcome::Failed
            }
        }
    }
}
