//! Delivery of the finished dossier: native share with a manual fallback.

pub mod channel;
pub mod dispatcher;
pub mod fallback;
pub mod payload;

#[cfg(test)]
mod tests;

pub use channel::{select_channel, DeliveryChannel, NoShareHost, ShareHost, ShareRejection};
pub use dispatcher::{DeliveryDispatcher, Outcome};
pub use fallback::{FallbackChannel, LinkOpener, SystemOpener};
pub use payload::{compose_message, derive_filename, DeliveryPayload, SHARE_TITLE};

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to save the dossier: {0}")]
    Save(#[from] std::io::Error),
    #[error("the host blocked the deep link: {0}")]
    OpenBlocked(String),
}
