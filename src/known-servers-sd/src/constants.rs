pub const KNOWN_SERVERS_URL_BASE: &str =
    "https://raw.githubusercontent.com/raiden-network/raiden-service-bundle/master/known_servers/";
pub const KNOWN_SERVERS_METADATA_FILE: &str = "known_servers_metadata.json";

/// Environment name and the known servers list file for it, in fetch order.
pub const KNOWN_SERVERS_FILES: &[(&str, &str)] = &[
    ("development", "known_servers-development-v1.2.0.json"),
    ("production", "known_servers-production-v1.2.0.json"),
];

/// Qualifier that server identifiers may carry in the known servers lists.
pub const TRANSPORT_PREFIX: &str = "transport.";

pub const TARGET_FILE_PREFIX: &str = "targets_rsb_";
pub const TARGET_FILE_EXTENSION: &str = "json";

pub const DEFAULT_LOG_LEVEL: &str = "info";
