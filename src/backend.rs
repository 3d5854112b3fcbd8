//! Client for the link-shortening backend.
//!
//! Every call maps to one round-trip of the backend's plain-text/JSON API.
//! The session cookie set by `api/login` is kept in the client's cookie store
//! and sent with every later request.

use crate::errors::ApiError;
use crate::models::{Credentials, LinkData};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

#[async_trait]
pub trait Backend: Send + Sync {
    async fn session_username(&self) -> Result<String, ApiError>;
    async fn links(&self) -> Result<Vec<String>, ApiError>;
    async fn link_data(&self, short: &str) -> Result<LinkData, ApiError>;
    async fn shorten(&self, long_url: &str) -> Result<String, ApiError>;
    async fn remove_link(&self, short: &str) -> Result<(), ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Splits the backend's space-separated link listing.
pub fn parse_link_list(body: &str) -> Vec<String> {
    body.split_whitespace().map(str::to_string).collect()
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}api/{path}", self.base_url)
    }

    async fn post_text(&self, path: &str, body: String) -> Result<Response, ApiError> {
        debug!("POST api/{path}");
        let response = self.client.post(self.endpoint(path)).body(body).send().await?;
        check(response).await
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<Response, ApiError> {
        debug!("POST api/{path} as {}", credentials.username);
        let response = self
            .client
            .post(self.endpoint(path))
            .json(credentials)
            .send()
            .await?;
        check(response).await
    }
}

/// Turns a non-2xx response into an error carrying the body text.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::status(status.as_u16(), text.trim_end().to_string()))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn session_username(&self) -> Result<String, ApiError> {
        let response = self.post_text("getSessionUsername", String::new()).await?;
        Ok(response.text().await?)
    }

    async fn links(&self) -> Result<Vec<String>, ApiError> {
        debug!("GET api/getLinks");
        let response = self.client.get(self.endpoint("getLinks")).send().await?;
        let body = check(response).await?.text().await?;
        Ok(parse_link_list(&body))
    }

    async fn link_data(&self, short: &str) -> Result<LinkData, ApiError> {
        let response = self.post_text("getLinkData", short.to_string()).await?;
        Ok(response.json().await?)
    }

    async fn shorten(&self, long_url: &str) -> Result<String, ApiError> {
        let response = self.post_text("shorten", long_url.to_string()).await?;
        Ok(response.text().await?)
    }

    async fn remove_link(&self, short: &str) -> Result<(), ApiError> {
        self.post_text("removeLink", short.to_string()).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_credentials("login", credentials).await?;
        Ok(())
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_credentials("register", credentials).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_text("logout", String::new()).await?;
        Ok(())
    }
}
