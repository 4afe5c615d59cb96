use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::codegen::assembler::assemble;
use crate::codegen::collector::{NamedBounds, collect};
use crate::codegen::sanitize::is_valid_identifier;
use crate::scene::scene_model::Selection;

pub const DEFAULT_PREFIX: &str = "fbh";
pub const DEFAULT_GUARD: &str = "FIGMABOUNDSHEADER";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("You must select at least 1 node/group!")]
    EmptySelection,
    #[error("prefix '{0}' is not a valid C identifier")]
    InvalidPrefix(String),
    #[error("guard '{0}' is not a valid C identifier")]
    InvalidGuard(String),
}

/// Naming knobs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Top-level identifier segment seeding every path.
    pub prefix: String,

    /// Macro stem for `<guard>_H` and `<guard>_IMPL`.
    pub guard: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            guard: DEFAULT_GUARD.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Both the prefix and the guard must be C identifiers themselves.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !is_valid_identifier(&self.prefix) {
            return Err(GenerateError::InvalidPrefix(self.prefix.clone()));
        }
        if !is_valid_identifier(&self.guard) {
            return Err(GenerateError::InvalidGuard(self.guard.clone()));
        }
        Ok(())
    }
}

/// Header text together with the records it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedHeader {
    pub records: Vec<NamedBounds>,
    pub text: String,
}

/// Collect the records of every root, in selection order.
pub fn generate_records(
    selection: &Selection,
    options: &GeneratorOptions,
) -> Result<Vec<NamedBounds>, GenerateError> {
    if selection.is_empty() {
        return Err(GenerateError::EmptySelection);
    }
    options.validate()?;

    let records: Vec<NamedBounds> = selection
        .roots
        .iter()
        .flat_map(|root| collect(&options.prefix, root))
        .collect();

    debug!(
        roots = selection.len(),
        records = records.len(),
        "collected bounds"
    );

    for (identifier, count) in duplicate_identifiers(&records) {
        warn!(%identifier, count, "identifier emitted more than once");
    }

    Ok(records)
}

/// Generate the header for `selection`, keeping the records for reporting.
pub fn generate_header(
    selection: &Selection,
    options: &GeneratorOptions,
) -> Result<GeneratedHeader, GenerateError> {
    let records = generate_records(selection, options)?;
    let text = assemble(&records, &options.guard);
    info!(records = records.len(), bytes = text.len(), "generated bounds header");
    Ok(GeneratedHeader { records, text })
}

/// Generate the header text for `selection`.
pub fn generate(selection: &Selection, options: &GeneratorOptions) -> Result<String, GenerateError> {
    generate_header(selection, options).map(|header| header.text)
}

/// Identifiers that occur more than once, with their counts, in first-seen order.
///
/// Sibling layers with the same sanitized name collide; they are emitted
/// as-is and reported here.
pub fn duplicate_identifiers(records: &[NamedBounds]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in records {
        let count = counts.entry(record.identifier.as_str()).or_insert(0);
        if *count == 0 {
            order.push(record.identifier.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|id| {
            let count = counts[id];
            (count > 1).then(|| (id.to_string(), count))
        })
        .collect()
}
