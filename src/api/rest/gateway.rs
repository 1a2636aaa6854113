use std::time::Duration;

use lazy_static::lazy_static;
use reqwest::{Client, Method, RequestBuilder, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::{Error, RequestId, Result, idempotency::REQUEST_ID_HEADER};

lazy_static! {
    /// The default URL that specifies the endpont to use for the Todoist REST API.
    pub static ref TODOIST_API_URL: url::Url = {
        url::Url::parse("https://api.todoist.com/rest/v2/").unwrap()
    };
}

/// Ceiling applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings used when building a [`Gateway`].
///
/// ```
/// use std::time::Duration;
/// use doist_rest::api::rest::ClientConfig;
///
/// let config = ClientConfig::default().with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all resource paths are joined onto. See [`struct@TODOIST_API_URL`].
    pub base_url: url::Url,
    /// Timeout for a single request, including reading the response.
    pub timeout: Duration,
    /// Reject shared label renames where the old and new name are equal. The API itself
    /// accepts them, so this can be turned off.
    pub reject_noop_rename: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TODOIST_API_URL.clone(),
            timeout: DEFAULT_TIMEOUT,
            reject_noop_rename: true,
        }
    }
}

impl ClientConfig {
    /// Points the client at a different endpoint, e.g. a mock server.
    pub fn with_base_url(mut self, url: url::Url) -> Self {
        self.base_url = url;
        self
    }

    /// Overrides [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// See [`ClientConfig::reject_noop_rename`].
    pub fn with_reject_noop_rename(mut self, reject: bool) -> Self {
        self.reject_noop_rename = reject;
        self
    }
}

/// Makes network calls to the Todoist API and returns structs that can then be worked with.
///
/// One gateway is built per token. It holds a single [`reqwest::Client`] that is reused for
/// every call and carries no other mutable state, so it can be cloned and shared between
/// tasks freely.
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    token: String,
    url: url::Url,
    pub(super) reject_noop_rename: bool,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("url", &self.url.as_str())
            .field("reject_noop_rename", &self.reject_noop_rename)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Create a new [`Gateway`].
    ///
    /// * `token` - the API token used for network calls.
    /// * `config` - endpoint and timeout settings, see [`ClientConfig::default`].
    pub fn new(token: &str, config: &ClientConfig) -> Result<Gateway> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Gateway {
            client,
            token: token.to_string(),
            url: with_trailing_slash(config.base_url.clone()),
            reject_noop_rename: config.reject_noop_rename,
        })
    }

    /// The base URL requests are sent to.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Makes a GET request and decodes the `200 OK` body.
    pub(super) async fn get<Q, R>(&self, path: &[&str], query: Option<&Q>) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let text = self
            .execute::<Q, ()>(Method::GET, path, query, None, StatusCode::OK)
            .await?;
        decode(&text)
    }

    /// Sends a POST request with the given content and decodes the `200 OK` body.
    pub(super) async fn post<B, R>(&self, path: &[&str], content: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let text = self
            .execute::<(), B>(Method::POST, path, None, Some(content), StatusCode::OK)
            .await?;
        decode(&text)
    }

    /// Same as [`Gateway::post`], but expects `204 No Content` and returns nothing.
    pub(super) async fn post_empty<B>(&self, path: &[&str], content: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<(), B>(Method::POST, path, None, content, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Sends a DELETE request, expecting `204 No Content`.
    pub(super) async fn delete(&self, path: &[&str]) -> Result<()> {
        self.execute::<(), ()>(Method::DELETE, path, None, None, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Appends `segments` to the base URL, each percent-encoded as exactly one path segment.
    ///
    /// Ids therefore can't escape their resource through `/`, `?`, `#` or `..`.
    fn endpoint(&self, segments: &[&str]) -> Result<url::Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds and sends a single request, returning the raw body if the status matches
    /// `expected`.
    ///
    /// Every call is authenticated. Anything but a GET gets a fresh [`RequestId`], and a body is
    /// sent as JSON.
    pub(super) async fn execute<Q, B>(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&Q>,
        content: Option<&B>,
        expected: StatusCode,
    ) -> Result<String>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let url_path = url.path().to_string();
        let mut req = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.token);
        if let Some(q) = query {
            req = req.query(q);
        }
        let request_id = (method != Method::GET).then(|| RequestId::new().to_string());
        if let Some(id) = &request_id {
            req = req.header(REQUEST_ID_HEADER, id.as_str());
        }
        if let Some(content) = content {
            let body = serde_json::to_string(content).map_err(Error::Encode)?;
            req = req
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        debug!(%method, path = %url_path, request_id = request_id.as_deref(), "sending request");
        handle_req(req, expected).await
    }
}

/// Does the actual call to the Todoist API and handles error handling.
async fn handle_req(req: RequestBuilder, expected: StatusCode) -> Result<String> {
    let resp = req.send().await?;
    let status = resp.status();
    let text = resp.text().await?;
    debug!(%status, "received response");
    if status != expected {
        warn!(%status, %expected, "unexpected response status");
        return Err(Error::from_status(status, text));
    }
    Ok(text)
}

fn decode<R: DeserializeOwned>(text: &str) -> Result<R> {
    serde_json::from_str(text).map_err(Error::Decode)
}

/// Normalises the base so [`Gateway::url`] always reads as a directory.
fn with_trailing_slash(mut url: url::Url) -> url::Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
