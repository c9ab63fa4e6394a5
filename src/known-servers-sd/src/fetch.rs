use crate::errors::{SdError, SdResult};
use crate::http_client::JsonSource;
use crate::types::{Environment, EnvironmentServers, Metadata, ServerList};
use serde::de::DeserializeOwned;
use tracing::info;

async fn fetch_document<T, S>(source: &S, url: &str, what: &str) -> SdResult<T>
where
    T: DeserializeOwned,
    S: JsonSource + ?Sized,
{
    let value = source
        .fetch_json(url)
        .await
        .map_err(|e| SdError::fetch(what, e))?;

    serde_json::from_value(value).map_err(|e| SdError::schema(what, e))
}

/// Fetches the operator metadata document.
pub async fn fetch_metadata<S>(source: &S, url: &str) -> SdResult<Metadata>
where
    S: JsonSource + ?Sized,
{
    info!("Fetching metadata");
    fetch_document(source, url, "metadata").await
}

/// Fetches the known servers list of every environment, in the given order.
/// The first failing environment aborts the whole fetch.
pub async fn fetch_server_lists<S>(
    source: &S,
    environments: &[Environment],
) -> SdResult<Vec<EnvironmentServers>>
where
    S: JsonSource + ?Sized,
{
    let mut lists = Vec::with_capacity(environments.len());

    for environment in environments {
        info!(env_type = %environment.name, "Fetching known servers");
        let what = format!("{} servers", environment.name);
        let servers: ServerList = fetch_document(source, &environment.url, &what).await?;

        lists.push(EnvironmentServers {
            environment: environment.name.clone(),
            servers,
        });
    }

    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;
    use crate::http_client::MockJsonSource;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    fn environments() -> Vec<Environment> {
        vec![
            Environment {
                name: "development".to_string(),
                url: "http://dev".to_string(),
            },
            Environment {
                name: "production".to_string(),
                url: "http://prod".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_fetch_metadata_ignores_extra_fields() {
        let mut source = MockJsonSource::new();
        source
            .expect_fetch_json()
            .with(eq("http://meta"))
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "a.example.com": {"operator": "Op1", "email": "op@example.com"},
                    "b.example.com": {}
                }))
            });

        let metadata = fetch_metadata(&source, "http://meta").await.unwrap();

        assert_eq!(metadata["a.example.com"].operator.as_deref(), Some("Op1"));
        assert_eq!(metadata["b.example.com"].operator, None);
    }

    #[tokio::test]
    async fn test_fetch_metadata_status_error_names_metadata() {
        let mut source = MockJsonSource::new();
        source.expect_fetch_json().returning(|url| {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 500,
            })
        });

        let err = fetch_metadata(&source, "http://meta").await.unwrap_err();

        assert!(matches!(
            err,
            SdError::Fetch {
                source: FetchError::Status { status: 500, .. },
                ..
            }
        ));
        assert_eq!(err.to_string(), "can't fetch metadata");
    }

    #[tokio::test]
    async fn test_fetch_metadata_rejects_non_object() {
        let mut source = MockJsonSource::new();
        source
            .expect_fetch_json()
            .returning(|_| Ok(json!(["a.example.com"])));

        let err = fetch_metadata(&source, "http://meta").await.unwrap_err();

        assert!(matches!(err, SdError::Schema { .. }));
    }

    #[tokio::test]
    async fn test_fetch_server_lists_keeps_environment_order() {
        let mut source = MockJsonSource::new();
        source
            .expect_fetch_json()
            .with(eq("http://dev"))
            .times(1)
            .returning(|_| Ok(json!({"active_servers": [], "all_servers": ["d.io"]})));
        source
            .expect_fetch_json()
            .with(eq("http://prod"))
            .times(1)
            .returning(|_| Ok(json!({"active_servers": ["p.io"], "all_servers": ["p.io"]})));

        let lists = fetch_server_lists(&source, &environments()).await.unwrap();

        let names: Vec<_> = lists.iter().map(|l| l.environment.as_str()).collect();
        assert_eq!(names, ["development", "production"]);
        assert_eq!(lists[1].servers.active_servers, ["p.io"]);
    }

    #[rstest]
    #[case(r#"{"active_servers": []}"#, "missing field `all_servers`")]
    #[case(r#"{"all_servers": ["d.io"]}"#, "missing field `active_servers`")]
    #[tokio::test]
    async fn test_fetch_server_lists_missing_field_is_fatal(
        #[case] body: &'static str,
        #[case] cause: &str,
    ) {
        let mut source = MockJsonSource::new();
        source
            .expect_fetch_json()
            .with(eq("http://dev"))
            .times(1)
            .returning(move |_| Ok(serde_json::from_str(body).unwrap()));
        // production must never be requested once development failed
        source
            .expect_fetch_json()
            .with(eq("http://prod"))
            .never();

        let err = fetch_server_lists(&source, &environments())
            .await
            .unwrap_err();

        assert!(matches!(err, SdError::Schema { ref what, .. } if what == "development servers"));
        assert!(err.to_string().contains("development servers"));
        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains(cause), "{source}");
    }
}
