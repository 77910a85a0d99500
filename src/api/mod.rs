// API client module: a single async HTTP client that talks to the content
// authoring service. Resource modules (challenge, tutorial, course, skill
// path) are thin endpoint bindings on top of the generic request helpers
// defined here.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::content::{AnyContent, ContentKind};
use crate::error::{ApiError, ApiResult};

mod challenge;
mod course;
mod skillpath;
mod tutorial;

pub use challenge::{Challenge, CreateChallengeRequest};
pub use course::{Course, CourseModule, CreateCourseRequest};
pub use skillpath::{CreateSkillPathRequest, SkillPath};
pub use tutorial::{CreateTutorialRequest, Tutorial};

const USER_AGENT: &str = concat!("labctl/", env!("CARGO_PKG_VERSION"));

/// Query parameters appended to a request URL.
pub type Query<'a> = Option<&'a [(&'a str, &'a str)]>;

/// Connection settings for a [`Client`]. Credentials are obtained elsewhere
/// and handed over as a ready-to-use access token.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

/// API client holding a reqwest client and the base URL of the service.
/// The configuration is fixed at construction; cloning is cheap.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

/// A request body already encoded as JSON.
#[derive(Debug, Clone)]
pub struct JsonBody(Vec<u8>);

impl JsonBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Encode `value` as a JSON request body.
pub fn to_json_body<T: Serialize + ?Sized>(value: &T) -> ApiResult<JsonBody> {
    serde_json::to_vec(value)
        .map(JsonBody)
        .map_err(ApiError::Serialization)
}

impl Client {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|err| {
            ApiError::Setup(format!("invalid base URL {:?}: {}", config.base_url, err))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Setup(format!(
                "base URL {:?} cannot hold a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ApiError::Setup("access token contains characters not allowed in a header".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Setup(format!("cannot build HTTP client: {}", err)))?;

        Ok(Client { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// GET `path` and decode the 2xx response body into `T`.
    pub async fn get_into<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
    ) -> ApiResult<T> {
        let response = self
            .send(cancel, Method::GET, path, query, headers, None)
            .await?;
        decode(cancel, Method::GET, path, response).await
    }

    /// POST `body` to `path` and decode the 2xx response body into `T`.
    pub async fn post_into<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
        body: JsonBody,
    ) -> ApiResult<T> {
        let response = self
            .send(cancel, Method::POST, path, query, headers, Some(body))
            .await?;
        decode(cancel, Method::POST, path, response).await
    }

    /// DELETE `path`. The raw response is handed back; its connection is
    /// released when the caller drops it.
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        path: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
    ) -> ApiResult<Response> {
        self.send(cancel, Method::DELETE, path, query, headers, None)
            .await
    }

    /// Perform exactly one round trip. Non-2xx statuses become
    /// `ApiError::Status` with the server-supplied message.
    async fn send(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        query: Query<'_>,
        headers: Option<HeaderMap>,
        body: Option<JsonBody>,
    ) -> ApiResult<Response> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled {
                method,
                path: path.to_string(),
            });
        }

        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(headers) = headers {
            request = request.headers(headers);
        }
        if let Some(JsonBody(bytes)) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        debug!(%method, path, "sending request");
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(ApiError::Cancelled { method, path: path.to_string() });
            }
            result = request.send() => result.map_err(|source| ApiError::Transport {
                method: method.clone(),
                path: path.to_string(),
                source,
            })?,
        };

        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "received response");
        if status.is_success() {
            return Ok(response);
        }

        let body = read_body(cancel, &method, path, response).await?;
        Err(ApiError::Status {
            method,
            path: path.to_string(),
            status,
            message: error_message(status, &body),
        })
    }

    pub async fn create_content(
        &self,
        cancel: &CancellationToken,
        kind: ContentKind,
        name: &str,
        sample: bool,
    ) -> ApiResult<AnyContent> {
        let name = name.to_string();
        let content = match kind {
            ContentKind::Challenge => AnyContent::Challenge(
                self.create_challenge(cancel, &CreateChallengeRequest { name, sample })
                    .await?,
            ),
            ContentKind::Tutorial => AnyContent::Tutorial(
                self.create_tutorial(cancel, &CreateTutorialRequest { name, sample })
                    .await?,
            ),
            ContentKind::Course => AnyContent::Course(
                self.create_course(cancel, &CreateCourseRequest { name, sample })
                    .await?,
            ),
            ContentKind::SkillPath => AnyContent::SkillPath(
                self.create_skill_path(cancel, &CreateSkillPathRequest { name, sample })
                    .await?,
            ),
            ContentKind::All => return Err(ApiError::UnsupportedKind(kind)),
        };
        Ok(content)
    }

    pub async fn get_content(
        &self,
        cancel: &CancellationToken,
        kind: ContentKind,
        name: &str,
    ) -> ApiResult<AnyContent> {
        let content = match kind {
            ContentKind::Challenge => AnyContent::Challenge(self.get_challenge(cancel, name).await?),
            ContentKind::Tutorial => AnyContent::Tutorial(self.get_tutorial(cancel, name).await?),
            ContentKind::Course => AnyContent::Course(self.get_course(cancel, name).await?),
            ContentKind::SkillPath => {
                AnyContent::SkillPath(self.get_skill_path(cancel, name).await?)
            }
            ContentKind::All => return Err(ApiError::UnsupportedKind(kind)),
        };
        Ok(content)
    }

    pub async fn delete_content(
        &self,
        cancel: &CancellationToken,
        kind: ContentKind,
        name: &str,
    ) -> ApiResult<()> {
        match kind {
            ContentKind::Challenge => self.delete_challenge(cancel, name).await,
            ContentKind::Tutorial => self.delete_tutorial(cancel, name).await,
            ContentKind::Course => self.delete_course(cancel, name).await,
            ContentKind::SkillPath => self.delete_skill_path(cancel, name).await,
            ContentKind::All => Err(ApiError::UnsupportedKind(kind)),
        }
    }
}

async fn read_body(
    cancel: &CancellationToken,
    method: &Method,
    path: &str,
    response: Response,
) -> ApiResult<Vec<u8>> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Cancelled {
            method: method.clone(),
            path: path.to_string(),
        }),
        result = response.bytes() => result
            .map(|bytes| bytes.to_vec())
            .map_err(|source| ApiError::Transport {
                method: method.clone(),
                path: path.to_string(),
                source,
            }),
    }
}

async fn decode<T: DeserializeOwned>(
    cancel: &CancellationToken,
    method: Method,
    path: &str,
    response: Response,
) -> ApiResult<T> {
    let body = read_body(cancel, &method, path, response).await?;
    serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
        method,
        path: path.to_string(),
        source,
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pick the most useful description of a failed response.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() {
        return text.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}
