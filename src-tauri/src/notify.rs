//! Notification capability: the core reports outcomes, the shell renders
//! them as toasts. The core never touches a concrete toast implementation.

use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Serialize, Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    fn info(&self, message: &str) {
        self.notify(NoticeKind::Info, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }
}

/// Forwards notices to the shell as `briefing://notice` events.
pub struct EventNotifier<R: tauri::Runtime> {
    app: tauri::AppHandle<R>,
}

impl<R: tauri::Runtime> EventNotifier<R> {
    pub fn new(app: tauri::AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: tauri::Runtime> Notifier for EventNotifier<R> {
    fn notify(&self, kind: NoticeKind, message: &str) {
        use tauri::Emitter;
        let notice = Notice {
            kind,
            message: message.to_string(),
        };
        if let Err(e) = self.app.emit("briefing://notice", notice) {
            log::warn!("failed to emit notice event: {}", e);
        }
    }
}
