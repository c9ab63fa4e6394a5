pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod http_client;
pub mod logging;
pub mod merge;
pub mod pipeline;
pub mod targets;
pub mod types;
pub mod utils;
