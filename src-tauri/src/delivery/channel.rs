//! Delivery protocol selection: native share when the host can take the
//! document, manual fallback otherwise.

use crate::delivery::payload::DeliveryPayload;

/// The host declined the request or the user dismissed the share sheet.
/// A normal branch of the flow, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRejection(pub String);

impl std::fmt::Display for ShareRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[async_trait::async_trait]
pub trait ShareHost: Send + Sync {
    /// Whether the host exposes sharing at all and reports it can take
    /// this exact document.
    fn can_share(&self, payload: &DeliveryPayload) -> bool;

    /// Hand the document to another application, presenting
    /// [`crate::delivery::payload::SHARE_TITLE`] on the sheet. Suspends until
    /// the host resolves the request; both outcomes are valid continuations.
    async fn share(&self, payload: &DeliveryPayload) -> Result<(), ShareRejection>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryChannel {
    NativeShare,
    ManualFallback,
}

/// Capability probe deciding which protocol a payload travels through.
pub fn select_channel(host: &dyn ShareHost, payload: &DeliveryPayload) -> DeliveryChannel {
    if host.can_share(payload) {
        DeliveryChannel::NativeShare
    } else {
        DeliveryChannel::ManualFallback
    }
}

/// Desktop hosts expose no share sheet; the probe reports accordingly.
pub struct NoShareHost;

#[async_trait::async_trait]
impl ShareHost for NoShareHost {
    fn can_share(&self, _payload: &DeliveryPayload) -> bool {
        false
    }

    async fn share(&self, _payload: &DeliveryPayload) -> Result<(), ShareRejection> {
        Err(ShareRejection("host exposes no share capability".into()))
    }
}
