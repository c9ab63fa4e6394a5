use crate::config::Config;
use crate::errors::SdResult;
use crate::fetch::{fetch_metadata, fetch_server_lists};
use crate::http_client::JsonSource;
use crate::merge::merge;
use crate::targets::generate;
use crate::types::ServiceCategory;
use std::path::PathBuf;

#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub written: Vec<PathBuf>,
}

/// Fetches metadata and server lists, then regenerates every target file.
/// Nothing is written unless all fetches succeeded.
pub async fn run<S>(config: &Config, source: &S) -> SdResult<RunSummary>
where
    S: JsonSource + ?Sized,
{
    let metadata = fetch_metadata(source, &config.metadata_url()).await?;
    let environments = fetch_server_lists(source, &config.environments()).await?;

    let records = merge(&metadata, &environments);
    let written = generate(
        &config.target_path,
        &records,
        &ServiceCategory::ALL,
        config.write_mode,
    )?;

    Ok(RunSummary {
        records: records.len(),
        written,
    })
}
