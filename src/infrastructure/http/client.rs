//! reqwest implementation of the `ContainerManager` port.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{ContainerApiError, ContainerResult};
use crate::domain::models::{
    ClientSettings, ContainerInfo, ContainerList, DeployConfig, DeployResponse, ListFilter,
    LogList, StatusResponse,
};
use crate::domain::ports::ContainerManager;

/// Default request timeout (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Optional settings for [`ContainerClient::new`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Timeout applied to every request
    pub timeout: Duration,

    /// Bearer token; an empty string counts as no token
    pub token: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

/// HTTP client for the container-manager API
///
/// Holds one reusable `reqwest::Client` bound to `<base_url>/containers`
/// with `Content-Type: application/json` and, when configured,
/// `Authorization: Bearer <token>` as default headers. Cloning is cheap and
/// clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ContainerClient {
    http_client: ReqwestClient,
    root: Url,
}

impl ContainerClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service base URL; one trailing slash is ignored
    /// * `options` - Timeout and optional bearer token
    ///
    /// # Example
    /// ```no_run
    /// use cmctl::infrastructure::http::{ClientOptions, ContainerClient};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ContainerClient::new(
    ///     "https://containers.example.com/",
    ///     ClientOptions {
    ///         token: Some("s3cret".to_string()),
    ///         ..Default::default()
    ///     },
    /// )?;
    /// assert_eq!(client.root().as_str(), "https://containers.example.com/containers");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(base_url: &str, options: ClientOptions) -> ContainerResult<Self> {
        let root = resource_root(base_url)?;
        let token = options.token.as_deref().filter(|t| !t.is_empty());

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                ContainerApiError::InvalidConfig(format!("Invalid bearer token: {e}"))
            })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        info!(
            root = %root,
            timeout_ms = u64::try_from(options.timeout.as_millis()).unwrap_or(u64::MAX),
            token_configured = token.is_some(),
            "Initializing container-manager client"
        );

        let http_client = ReqwestClient::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()
            .map_err(ContainerApiError::Network)?;

        Ok(Self { http_client, root })
    }

    /// Create a client from loaded configuration
    pub fn from_settings(settings: &ClientSettings) -> ContainerResult<Self> {
        Self::new(
            &settings.base_url,
            ClientOptions {
                timeout: settings.timeout(),
                token: settings.token.clone(),
            },
        )
    }

    /// The resource root every request is resolved against
    pub const fn root(&self) -> &Url {
        &self.root
    }

    /// Root URL extended with path segments, each percent-encoded.
    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.root.clone();
        // http(s) URLs always have a path, so this cannot fail
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    /// URL of one container, optionally followed by an action segment.
    ///
    /// Empty, `.` and `..` ids are rejected: they would resolve to the
    /// collection or its parent instead of a container.
    fn container_url(&self, id: &str, action: Option<&str>) -> ContainerResult<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(ContainerApiError::InvalidId(id.to_string()));
        }
        Ok(match action {
            Some(action) => self.url_for(&[id, action]),
            None => self.url_for(&[id]),
        })
    }

    /// Send one request and reject non-success statuses.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, String)],
        body: Option<&DeployConfig>,
    ) -> ContainerResult<Response> {
        debug!(%method, %url, ?query, "Sending container-manager request");

        let mut request = self.http_client.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        debug!(%status, "Received container-manager response");

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            warn!(%status, "Container-manager request failed");
            return Err(ContainerApiError::Http { status, body });
        }

        Ok(response)
    }

    /// Read the body and decode it into the declared shape.
    async fn decode<T: DeserializeOwned>(
        context: &'static str,
        response: Response,
    ) -> ContainerResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ContainerApiError::Decode { context, source })
    }
}

#[async_trait]
impl ContainerManager for ContainerClient {
    #[instrument(name = "container_client.deploy", skip(self, config))]
    async fn deploy(&self, config: &DeployConfig) -> ContainerResult<DeployResponse> {
        let response = self
            .execute(Method::POST, self.url_for(&[""]), &[], Some(config))
            .await?;
        let created: DeployResponse = Self::decode("deploy", response).await?;
        info!(container_id = %created.id, "Container deployed");
        Ok(created)
    }

    #[instrument(name = "container_client.list", skip(self))]
    async fn list(&self, filter: Option<&ListFilter>) -> ContainerResult<ContainerList> {
        let query: Vec<(&str, String)> = filter
            .map(|f| {
                f.params()
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();

        let response = self
            .execute(Method::GET, self.root.clone(), &query, None)
            .await?;
        Self::decode("list", response).await
    }

    #[instrument(name = "container_client.get_by_id", skip(self))]
    async fn get_by_id(&self, id: &str) -> ContainerResult<ContainerInfo> {
        let response = self
            .execute(Method::GET, self.container_url(id, None)?, &[], None)
            .await?;
        Self::decode("get_by_id", response).await
    }

    #[instrument(name = "container_client.get_logs", skip(self))]
    async fn get_logs(
        &self,
        id: &str,
        since: Option<&str>,
        tail: Option<u32>,
    ) -> ContainerResult<LogList> {
        let mut query = Vec::with_capacity(2);
        if let Some(since) = since {
            query.push(("since", since.to_string()));
        }
        if let Some(tail) = tail {
            query.push(("tail", tail.to_string()));
        }

        let response = self
            .execute(Method::GET, self.container_url(id, Some("logs"))?, &query, None)
            .await?;
        Self::decode("get_logs", response).await
    }

    #[instrument(name = "container_client.start", skip(self))]
    async fn start(&self, id: &str) -> ContainerResult<StatusResponse> {
        let response = self
            .execute(Method::POST, self.container_url(id, Some("start"))?, &[], None)
            .await?;
        Self::decode("start", response).await
    }

    #[instrument(name = "container_client.stop", skip(self))]
    async fn stop(&self, id: &str, timeout: Option<u32>) -> ContainerResult<StatusResponse> {
        let query: Vec<(&str, String)> = timeout
            .map(|t| vec![("timeout", t.to_string())])
            .unwrap_or_default();

        let response = self
            .execute(Method::POST, self.container_url(id, Some("stop"))?, &query, None)
            .await?;
        Self::decode("stop", response).await
    }

    #[instrument(name = "container_client.remove", skip(self))]
    async fn remove(&self, id: &str) -> ContainerResult<()> {
        self.execute(Method::DELETE, self.container_url(id, None)?, &[], None)
            .await?;
        info!(container_id = %id, "Container removed");
        Ok(())
    }
}

/// Resolve `<base_url>/containers`, dropping one trailing slash from `base_url`.
pub fn resource_root(base_url: &str) -> ContainerResult<Url> {
    let trimmed = base_url.strip_suffix('/').unwrap_or(base_url);
    let url = Url::parse(&format!("{trimmed}/containers"))
        .map_err(|e| ContainerApiError::InvalidConfig(format!("Invalid base URL '{base_url}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ContainerApiError::InvalidConfig(format!(
            "Unsupported URL scheme '{other}' in base URL '{base_url}'"
        ))),
    }
}
