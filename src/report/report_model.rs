use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::codegen::collector::NamedBounds;
use crate::codegen::generator::duplicate_identifiers;

/// Duplicate identifier and how often it was emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateEntry {
    pub identifier: String,
    pub count: usize,
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    pub prefix: String,
    pub guard: String,
    pub records: Vec<NamedBounds>,
    pub duplicates: Vec<DuplicateEntry>,
    /// SHA-1 of the generated text; equal digests mean byte-identical output.
    pub digest: String,
}

impl GenerationReport {
    pub fn new(
        page: Option<&str>,
        prefix: &str,
        guard: &str,
        records: Vec<NamedBounds>,
        text: &str,
    ) -> Self {
        let duplicates = duplicate_identifiers(&records)
            .into_iter()
            .map(|(identifier, count)| DuplicateEntry { identifier, count })
            .collect();

        Self {
            page: page.map(str::to_string),
            prefix: prefix.to_string(),
            guard: guard.to_string(),
            records,
            duplicates,
            digest: text_digest(text),
        }
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

pub fn text_digest(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
