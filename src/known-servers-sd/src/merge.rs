use crate::constants::TRANSPORT_PREFIX;
use crate::types::{EnvironmentServers, Metadata, ServerRecord};
use std::collections::HashSet;
use tracing::info;

/// Flattens the per-environment server lists into one record per
/// `(environment, server)` pair, preserving environment and list order.
///
/// Operators are looked up with the raw identifier, before the transport
/// prefix is stripped from the url.
pub fn merge(metadata: &Metadata, environments: &[EnvironmentServers]) -> Vec<ServerRecord> {
    let mut records = Vec::new();

    for env in environments {
        let active: HashSet<&str> = env
            .servers
            .active_servers
            .iter()
            .map(String::as_str)
            .collect();

        records.extend(env.servers.all_servers.iter().map(|server| ServerRecord {
            url: strip_transport_prefix(server).to_string(),
            operator: metadata
                .get(server)
                .and_then(|meta| meta.operator.clone()),
            environment_type: env.environment.clone(),
            active: active.contains(server.as_str()),
        }));
    }

    info!(count = records.len(), "Got servers");
    records
}

pub fn strip_transport_prefix(server: &str) -> &str {
    server.strip_prefix(TRANSPORT_PREFIX).unwrap_or(server)
}
