use assert_cmd::assert::Assert;
use assert_cmd::Command;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const METADATA_FILE: &str = "known_servers_metadata.json";
pub const DEVELOPMENT_FILE: &str = "known_servers-development-v1.2.0.json";
pub const PRODUCTION_FILE: &str = "known_servers-production-v1.2.0.json";

type Fixtures = Arc<HashMap<String, (StatusCode, String)>>;

/// Serves fixed documents under `/known_servers/<file>`, answering 404 for
/// anything else.
pub struct TestServer {
    handle: JoinHandle<std::io::Result<()>>,
    addr: SocketAddr,
}

async fn serve_file(
    State(fixtures): State<Fixtures>,
    Path(file): Path<String>,
) -> (StatusCode, String) {
    fixtures
        .get(&file)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "404: Not Found".to_string()))
}

impl TestServer {
    pub async fn launch(documents: &[(&str, StatusCode, &str)]) -> anyhow::Result<Self> {
        let fixtures: Fixtures = Arc::new(
            documents
                .iter()
                .map(|(file, status, body)| (file.to_string(), (*status, body.to_string())))
                .collect(),
        );

        let app = Router::new()
            .route("/known_servers/{file}", get(serve_file))
            .with_state(fixtures);

        // 0: means port will be picked by the OS
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move { axum::serve(listener, app).await });

        Ok(Self { handle, addr })
    }

    /// Standard fixtures: one metadata entry, an empty development list and
    /// two production servers of which one is active.
    pub async fn launch_default() -> anyhow::Result<Self> {
        Self::launch(&[
            (
                METADATA_FILE,
                StatusCode::OK,
                r#"{"a.example.com": {"operator": "Op1", "email": "ops@example.com"}}"#,
            ),
            (
                DEVELOPMENT_FILE,
                StatusCode::OK,
                r#"{"active_servers": [], "all_servers": ["transport.dev.example.com"]}"#,
            ),
            (
                PRODUCTION_FILE,
                StatusCode::OK,
                r#"{"active_servers": ["a.example.com"], "all_servers": ["a.example.com", "b.example.com"]}"#,
            ),
        ])
        .await
    }

    pub fn url_base(&self) -> String {
        format!("http://{}/known_servers/", self.addr)
    }

    pub async fn run(&self, args: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("known-servers-sd").unwrap();
        cmd.arg("--url-base").arg(self.url_base());
        cmd.args(args);
        cmd.env("RUST_BACKTRACE", "1");
        cmd.timeout(std::time::Duration::from_secs(30));

        tokio::task::spawn_blocking(move || cmd.assert())
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
