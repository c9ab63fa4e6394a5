use serde::Deserialize;
use std::collections::HashMap;

/// Operator metadata for a single server. Unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ServerMetadata {
    #[serde(default)]
    pub operator: Option<String>,
}

/// Metadata document keyed by the raw server identifier.
pub type Metadata = HashMap<String, ServerMetadata>;

/// Known servers list of one environment, as published upstream.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ServerList {
    pub active_servers: Vec<String>,
    pub all_servers: Vec<String>,
}

/// Where the known servers list of an environment lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentServers {
    pub environment: String,
    pub servers: ServerList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerRecord {
    pub url: String,
    pub operator: Option<String>,
    pub environment_type: String,
    pub active: bool,
}
