mod writer;

pub use writer::{ensure_output_dir, generate, WriteMode};

use crate::errors::{SdError, SdResult};
use crate::types::{ServerRecord, ServiceCategory};
use serde::Serialize;

/// Labels attached to every target. `active` is `"0"` or `"1"` since
/// Prometheus label values are strings.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TargetLabels {
    pub environment_type: String,
    pub operator: Option<String>,
    pub active: String,
}

/// One entry of a `file_sd_configs` target file.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TargetEntry {
    pub labels: TargetLabels,
    pub targets: Vec<String>,
}

impl TargetEntry {
    pub fn new(category: ServiceCategory, record: &ServerRecord) -> Self {
        Self {
            labels: TargetLabels {
                environment_type: record.environment_type.clone(),
                operator: record.operator.clone(),
                active: if record.active { "1" } else { "0" }.to_string(),
            },
            targets: vec![category.target_for(&record.url)],
        }
    }
}

pub fn target_entries(category: ServiceCategory, records: &[ServerRecord]) -> Vec<TargetEntry> {
    records
        .iter()
        .map(|record| TargetEntry::new(category, record))
        .collect()
}

/// Renders the target file content of `category`: a JSON array pretty printed
/// with two space indentation.
pub fn render(category: ServiceCategory, records: &[ServerRecord]) -> SdResult<Vec<u8>> {
    serde_json::to_vec_pretty(&target_entries(category, records)).map_err(|source| {
        SdError::Render {
            category: category.name(),
            source,
        }
    })
}
