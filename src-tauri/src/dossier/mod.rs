//! Dossier generation: record → sections → fixed A4 pages → PDF bytes.

pub mod composer;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod section;
pub mod wrap;


pub use composer::{compose, PLACEHOLDER};
pub use layout::{paginate, PageLayout};
pub use render::render;
pub use section::{FieldEntry, Section};

use crate::wizard::BriefingRecord;

#[derive(Debug, thiserror::Error)]
pub enum DossierError {
    #[error("failed to encode page stream: {0}")]
    Stream(#[from] std::io::Error),
}

/// Full generation pipeline. Synchronous and side-effect free; any failure
/// here aborts the submission before a delivery attempt starts.
pub fn generate(record: &BriefingRecord, generated_on: &str) -> Result<Vec<u8>, DossierError> {
    let sections = compose(record);
    let pages = paginate(&sections, generated_on);
    render(&pages)
}
