pub mod types;

#[cfg(test)]
pub(crate) mod mock;

use anyhow::Result;
use hyper::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client as AsyncClient, Method, RequestBuilder, Response};
use serde_json::Value;

use self::types::{ApiError, ResponseBody};
use super::role::Role;
use crate::config::VERSION;

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub headers: HeaderMap,
    pub ua: String,
}

impl HttpClient {
    /// Client for the public API, authenticated with a bearer token.
    pub fn new(token: &str, base_url: String) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(AUTHORIZATION, format!("Bearer {token}").parse()?);

        Self::build(headers, base_url)
    }

    /// Client scoped to `role`, used for the internal API.
    pub fn with_role(role: &Role, base_url: String, service_key: Option<&str>) -> Result<Self> {
        let mut headers = role.headers()?;

        if let Some(service_key) = service_key {
            headers.insert("x-tracecat-service-key", service_key.parse()?);
        }

        Self::build(headers, base_url)
    }

    fn build(mut headers: HeaderMap, base_url: String) -> Result<Self> {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let ua = format!(
            "tracecat_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let client = AsyncClient::builder()
            .user_agent(ua.clone())
            .default_headers(headers.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers,
            ua,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("request: {} {}", method, path);

        self.client.request(method, self.url(path))
    }

    /// Sends `request` and normalizes the response with [`handle_response`].
    pub async fn send(&self, request: RequestBuilder) -> Result<Option<ResponseBody>> {
        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self.client.execute(request).await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        handle_response(response).await
    }
}

/// Maps a response to its outcome.
///
/// 1. 422 fails with [`ApiError::Validation`] carrying the decoded body,
///    or the raw text as a JSON string when the body is not JSON
/// 2. 204 is an empty success
/// 3. any other error status fails with [`ApiError::Status`]
/// 4. the body is decoded as JSON, falling back to the raw text
pub async fn handle_response(response: Response) -> Result<Option<ResponseBody>> {
    let status = response.status();

    log::debug!("response status: {status}");

    match status {
        StatusCode::UNPROCESSABLE_ENTITY => {
            let body = response.text().await?;
            let body = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));

            Err(ApiError::Validation(body).into())
        }

        StatusCode::NO_CONTENT => Ok(None),

        _ => {
            let response = response.error_for_status().map_err(ApiError::from)?;
            let text = response.text().await?;

            match serde_json::from_str::<Value>(&text) {
                Ok(value) => Ok(Some(ResponseBody::Json(value))),
                Err(err) => {
                    log::debug!("Response is not JSON, returning text: {err}");

                    Ok(Some(ResponseBody::Text(text)))
                }
            }
        }
    }
}
