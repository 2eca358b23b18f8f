use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::ErrorResponse;
use thiserror::Error;
use yew::Callback;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();
}

/// Failures surfaced by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-success status; `detail` carries the
    /// flattened error body when one was sent.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, detail: Option<String> },
    /// A request parameter was empty or out of range, caught before sending.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

impl ApiError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(err) => err.status().map(|status| status.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::InvalidParameter(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Server-provided detail message, when one was sent.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Lightweight API client for the Warenwelt back office.
///
/// Holds the bearer token pushed in by the session layer and a hook that
/// fires on every 401 response so the session can be torn down in one place.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    access_token: Arc<Mutex<Option<String>>>,
    on_unauthorized: Rc<RefCell<Option<Callback<()>>>>,
}

impl ApiClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            access_token: Arc::new(Mutex::new(None)),
            on_unauthorized: Rc::new(RefCell::new(None)),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT
            .with(|cell| {
                cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                    .clone()
            })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.lock() {
            *guard = token;
        }
    }

    pub fn current_access_token(&self) -> Option<String> {
        self.access_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    /// Install the callback fired whenever the server answers 401.
    pub fn set_unauthorized_handler(&self, handler: Option<Callback<()>>) {
        *self.on_unauthorized.borrow_mut() = handler;
    }

    fn notify_unauthorized(&self) {
        let handler = self.on_unauthorized.borrow().clone();
        if let Some(handler) = handler {
            handler.emit(());
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_access_token() {
            request.header("Authorization", format!("Bearer {token}"))
        } else {
            request
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await?;
        self.check(response).await
    }

    /// Single choke point for response statuses: fires the unauthorized hook
    /// on 401 and turns error bodies into [`ApiError::Status`].
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.notify_unauthorized();
        }
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.message());
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.client.get(self.api_url(path))).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn get_json_with<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.api_url(path)).query(query);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.api_url(path)).json(body);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.put(self.api_url(path)).json(body);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.client.delete(self.api_url(path))).await?;
        Ok(())
    }

    /// POST an `application/x-www-form-urlencoded` body, as the login
    /// endpoint expects.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self
            .client
            .post(self.api_url(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_form(fields));
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.api_url(path)).multipart(form);
        let response = self.execute(request).await?;
        Ok(response.json().await?)
    }

    /// GET a binary body, e.g. a CSV export.
    pub(crate) async fn get_bytes<Q>(&self, path: &str, query: &Q) -> Result<Vec<u8>, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.api_url(path)).query(query);
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

pub(crate) fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Guards service calls that interpolate an id into the request path.
pub(crate) fn require_id(id: i64, name: &'static str) -> Result<i64, ApiError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ApiError::InvalidParameter(name))
    }
}
