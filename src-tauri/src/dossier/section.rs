//! Schema of the composed dossier: titled, ordered groups of labeled fields.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<FieldEntry>,
}
