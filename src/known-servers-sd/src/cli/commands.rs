use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "known-servers-sd",
    version,
    about = "Generates Prometheus file based service discovery targets for the known Raiden service bundle servers"
)]
pub struct Cli {
    /// Directory the target files are written to. Must already exist.
    /// Defaults to the current working directory.
    #[clap(long, value_name = "DIR")]
    pub target_path: Option<PathBuf>,

    /// Base URL the metadata and known servers lists are fetched from
    #[clap(long, value_name = "URL")]
    pub url_base: Option<String>,

    /// Replace the target files only after all of them were rendered
    #[clap(long)]
    pub atomic: bool,

    /// Log filter directive, e.g. "debug" or "known_servers_sd=trace"
    #[clap(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
