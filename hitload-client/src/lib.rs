use hitload_common::{ProbeError, Sample, TRANSPORT_ERROR_CODE};
use std::time::{Duration, Instant};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP methods the probe client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Parse a method name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "HEAD" => Some(Method::Head),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }

    pub fn as_name(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Probe client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub method: Method,
    pub timeout: Duration,
    /// Sent as `application/octet-stream` when present.
    pub body: Option<Vec<u8>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { method: Method::Get, timeout: DEFAULT_TIMEOUT, body: None }
    }
}

/// Issues one timed request per call and turns the outcome into a [`Sample`].
#[derive(Debug, Clone)]
pub struct Client {
    pub config: ClientConfig,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ProbeError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProbeError::ClientSetup(e.to_string()))?;
        Ok(Self { config, http_client })
    }

    /// Request `url` once and record how long it took.
    ///
    /// Anything that prevents an HTTP response (bad URL, refused connection,
    /// timeout) is recorded as [`TRANSPORT_ERROR_CODE`] with the time spent
    /// before the failure.
    pub async fn probe(&self, url: &str) -> Sample {
        let start = Instant::now();
        match self.send(url).await {
            Ok(status) => Sample::new(start.elapsed(), i32::from(status)),
            Err(e) => {
                tracing::debug!(%url, error = %e, "request failed");
                Sample::new(start.elapsed(), TRANSPORT_ERROR_CODE)
            }
        }
    }

    /// Like [`Client::probe`], but surfaces the transport error instead of
    /// folding it into a sentinel code.
    pub async fn try_probe(&self, url: &str) -> Result<(u16, Duration), ProbeError> {
        let start = Instant::now();
        let status = self.send(url).await?;
        Ok((status, start.elapsed()))
    }

    /// Send the request and drain the body; the status code is the outcome.
    async fn send(&self, url: &str) -> Result<u16, ProbeError> {
        let url = reqwest::Url::parse(url).map_err(|e| ProbeError::InvalidUrl(format!("{url}: {e}")))?;

        let mut request = self.http_client.request(self.config.method.to_reqwest(), url);
        if let Some(body) = &self.config.body {
            request = request
                .header("Content-Type", "application/octet-stream")
                .body(body.clone());
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        response.bytes().await.map_err(|e| self.map_error(e))?;

        Ok(status)
    }

    fn map_error(&self, e: reqwest::Error) -> ProbeError {
        if e.is_timeout() {
            ProbeError::Timeout(self.config.timeout)
        } else {
            ProbeError::NetworkError(e.to_string())
        }
    }
}
