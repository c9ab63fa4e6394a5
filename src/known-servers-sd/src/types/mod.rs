mod server;
mod service_category;

pub use server::{
    Environment, EnvironmentServers, Metadata, ServerList, ServerMetadata, ServerRecord,
};
pub use service_category::ServiceCategory;
