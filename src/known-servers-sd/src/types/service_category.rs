use crate::constants::{TARGET_FILE_EXTENSION, TARGET_FILE_PREFIX};
use std::fmt::{Display, Formatter};

/// Endpoint classes exposed by every service bundle server. Each category gets
/// its own target file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    Synapse,
    Db,
    Redis,
    Pfs,
    Ms,
    Traefik,
}

impl ServiceCategory {
    /// All categories in declaration order, which is also the write order.
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Synapse,
        ServiceCategory::Db,
        ServiceCategory::Redis,
        ServiceCategory::Pfs,
        ServiceCategory::Ms,
        ServiceCategory::Traefik,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ServiceCategory::Synapse => "synapse",
            ServiceCategory::Db => "db",
            ServiceCategory::Redis => "redis",
            ServiceCategory::Pfs => "pfs",
            ServiceCategory::Ms => "ms",
            ServiceCategory::Traefik => "traefik",
        }
    }

    /// Host prefix of the scrape endpoint, prepended to the server url.
    pub const fn label_prefix(self) -> &'static str {
        match self {
            ServiceCategory::Synapse => "metrics.transport",
            ServiceCategory::Db => "metrics.db",
            ServiceCategory::Redis => "metrics.redis",
            ServiceCategory::Pfs => "metrics.pfs",
            ServiceCategory::Ms => "metrics.ms",
            ServiceCategory::Traefik => "proxy",
        }
    }

    pub fn file_name(self) -> String {
        format!(
            "{TARGET_FILE_PREFIX}{}.{TARGET_FILE_EXTENSION}",
            self.name()
        )
    }

    pub fn target_for(self, url: &str) -> String {
        format!("{}.{url}", self.label_prefix())
    }
}

impl Display for ServiceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
