//! Unit tests for payload derivation and the dual-path delivery protocol.

use super::*;
use crate::config::BriefingConfig;
use crate::notify::{NoticeKind, Notifier};
use crate::wizard::BriefingRecord;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn record() -> BriefingRecord {
    let mut r = BriefingRecord::default();
    r.name = "Carla Souza".into();
    r.brand_name = "Café Aurora".into();
    r.whatsapp = "31 98888-7777".into();
    r.service = "Identidade Visual".into();
    r.deadline = "45 dias".into();
    r.investment = "R$ 2.500 - R$ 5.000".into();
    r
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((kind, message.to_string()));
    }
}

struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), DeliveryError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Share host that accepts after an artificial resolution delay, counting
/// the payloads it was handed.
struct SlowAcceptingShare {
    attempts: Arc<AtomicUsize>,
    delay: Duration,
}

#[async_trait::async_trait]
impl ShareHost for SlowAcceptingShare {
    fn can_share(&self, _payload: &DeliveryPayload) -> bool {
        true
    }

    async fn share(&self, _payload: &DeliveryPayload) -> Result<(), ShareRejection> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Share host that reports capability but always declines, like a user
/// dismissing the sheet.
struct DecliningShare;

#[async_trait::async_trait]
impl ShareHost for DecliningShare {
    fn can_share(&self, _payload: &DeliveryPayload) -> bool {
        true
    }

    async fn share(&self, _payload: &DeliveryPayload) -> Result<(), ShareRejection> {
        Err(ShareRejection("dismissed by the user".into()))
    }
}

struct Harness {
    dispatcher: Arc<DeliveryDispatcher>,
    notifier: Arc<RecordingNotifier>,
    opened: Arc<Mutex<Vec<String>>>,
}

fn harness(share: Arc<dyn ShareHost>, save_dir: std::path::PathBuf) -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());
    let opened = Arc::new(Mutex::new(Vec::new()));
    let config = BriefingConfig {
        whatsapp_number: "5531992781019".into(),
        save_dir,
        fallback_delay: Duration::from_millis(5),
    };
    let dispatcher = Arc::new(DeliveryDispatcher::new(
        config,
        notifier.clone(),
        share,
        Box::new(RecordingOpener {
            opened: opened.clone(),
        }),
    ));
    Harness {
        dispatcher,
        notifier,
        opened,
    }
}

#[test]
fn filename_derivation_is_pure_and_idempotent() {
    assert_eq!(derive_filename("Ana Paula"), "Briefing_AnnaForm_Ana_Paula.pdf");
    assert_eq!(derive_filename("Ana Paula"), derive_filename("Ana Paula"));
    // Runs of mixed whitespace collapse to a single underscore.
    assert_eq!(
        derive_filename("Ana  \t Paula de Souza"),
        "Briefing_AnnaForm_Ana_Paula_de_Souza.pdf"
    );
}

#[test]
fn message_embeds_client_brand_and_service() {
    let msg = compose_message(&record());
    assert!(msg.contains("*Cliente:* Carla Souza"));
    assert!(msg.contains("*Projeto/Marca:* Café Aurora"));
    assert!(msg.contains("*Serviço:* Identidade Visual"));

    let mut nameless_brand = record();
    nameless_brand.brand_name.clear();
    let msg = compose_message(&nameless_brand);
    assert!(msg.contains("*Projeto/Marca:* Não informado"));
}

#[test]
fn deep_link_targets_the_fixed_contact_with_escaped_text() {
    let payload = DeliveryPayload::assemble(&record(), b"%PDF-".to_vec(), "5531992781019");
    let channel = FallbackChannel::new(
        std::env::temp_dir(),
        Duration::from_millis(5),
        Box::new(RecordingOpener {
            opened: Arc::new(Mutex::new(Vec::new())),
        }),
    );
    let link = channel.deep_link(&payload);
    assert!(link.starts_with("https://wa.me/5531992781019?text="));
    assert!(link.contains("Carla%20Souza"));
    assert!(link.contains("Estou%20enviando%20o%20arquivo%20PDF"));
    assert!(!link[link.find('?').unwrap()..].contains(' '));
}

#[test]
fn probe_selects_the_channel() {
    let payload = DeliveryPayload::assemble(&record(), b"%PDF-".to_vec(), "5531992781019");
    assert_eq!(
        select_channel(&NoShareHost, &payload),
        DeliveryChannel::ManualFallback
    );
    assert_eq!(
        select_channel(&DecliningShare, &payload),
        DeliveryChannel::NativeShare
    );
}

#[tokio::test]
async fn submission_without_share_capability_saves_and_opens_whatsapp() {
    let dir = tempfile::tempdir().unwrap();
    let h = harness(Arc::new(NoShareHost), dir.path().to_path_buf());

    let outcome = h.dispatcher.submit(&record()).await;
    assert_eq!(outcome, Outcome::SavedForManualSend);

    let saved = dir.path().join("Briefing_AnnaForm_Carla_Souza.pdf");
    let bytes = std::fs::read(&saved).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    assert_eq!(
        h.notifier.of_kind(NoticeKind::Info),
        vec!["Dossiê gerado! Agora é só anexar o arquivo no WhatsApp.".to_string()]
    );
    assert!(h.notifier.of_kind(NoticeKind::Error).is_empty());

    let opened = h.opened.lock().unwrap();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains("Carla%20Souza"));
    assert!(opened[0].contains("Identidade%20Visual"));

    assert!(!h.dispatcher.is_busy());
}

#[tokio::test]
async fn accepted_share_skips_the_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let attempts = Arc::new(AtomicUsize::new(0));
    let share = Arc::new(SlowAcceptingShare {
        attempts: attempts.clone(),
        delay: Duration::from_millis(1),
    });
    let h = harness(share, dir.path().to_path_buf());

    let outcome = h.dispatcher.submit(&record()).await;
    assert_eq!(outcome, Outcome::Shared);
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert_eq!(
        h.notifier.of_kind(NoticeKind::Success),
        vec!["Briefing compartilhado com sucesso!".to_string()]
    );
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    assert!(h.opened.lock().unwrap().is_empty());
    assert!(!h.dispatcher.is_busy());
}

#[tokio::test]
async fn rejected_share_falls_back_without_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let h = harness(Arc::new(DecliningShare), dir.path().to_path_buf());

    let outcome = h.dispatcher.submit(&record()).await;
    assert_eq!(outcome, Outcome::SavedForManualSend);
    assert!(h.notifier.of_kind(NoticeKind::Error).is_empty());
    assert_eq!(h.notifier.of_kind(NoticeKind::Info).len(), 1);
    assert!(dir.path().join("Briefing_AnnaForm_Carla_Souza.pdf").exists());
    assert_eq!(h.opened.lock().unwrap().len(), 1);
    assert!(!h.dispatcher.is_busy());
}

#[tokio::test]
async fn second_submission_while_awaiting_share_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let attempts = Arc::new(AtomicUsize::new(0));
    let share = Arc::new(SlowAcceptingShare {
        attempts: attempts.clone(),
        delay: Duration::from_millis(100),
    });
    let h = harness(share, dir.path().to_path_buf());

    let first = {
        let dispatcher = h.dispatcher.clone();
        let record = record();
        tokio::spawn(async move { dispatcher.submit(&record).await })
    };
    // Let the first submission reach its suspension point.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let second = h.dispatcher.submit(&record()).await;
    assert_eq!(second, Outcome::AlreadyInFlight);

    assert_eq!(first.await.unwrap(), Outcome::Shared);
    // Exactly one payload reached a channel.
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
    assert_eq!(h.notifier.of_kind(NoticeKind::Success).len(), 1);
    assert!(!h.dispatcher.is_busy());
}

#[tokio::test]
async fn save_failure_surfaces_an_error_and_clears_the_guard() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file where the save directory should be.
    let blocked = dir.path().join("not-a-directory");
    std::fs::write(&blocked, b"occupied").unwrap();
    let h = harness(Arc::new(NoShareHost), blocked);

    let outcome = h.dispatcher.submit(&record()).await;
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(
        h.notifier.of_kind(NoticeKind::Error),
        vec!["Erro ao processar o briefing. Tente novamente.".to_string()]
    );
    assert!(h.opened.lock().unwrap().is_empty());
    assert!(!h.dispatcher.is_busy());
}
