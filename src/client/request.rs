//! No-WASM HTTP gateway implementation using reqwest
//!
//! All requests share one pooled client built with the configured timeout.
//! The bearer token is attached whenever one is set, and every non-2xx
//! response is translated through the error taxonomy, carrying the server's
//! message when its envelope parses.

use std::sync::{Arc, Mutex};

use reqwest::{multipart, Client};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::GatewayConfig;
use crate::error::{status_error, Error, ErrorKind, Result};
use crate::interface::{AuthApi, EnrollmentApi, HttpClient, MediaApi, ResourceApi};
use crate::model::{
    ApiMessage, AuthSession, Content, ContentDraft, ContentPatch, Course, CourseDraft,
    CoursePatch, Credentials, MediaAsset, ProfilePatch, RegisterForm, User,
};

/// HTTP gateway for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
}

impl HttpClient for HttpGateway {
    async fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: Arc::new(Mutex::new(None)),
        })
    }
}

impl HttpGateway {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// Send with auth header and error translation, returning the raw
    /// response for callers that discard the body.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(ApiMessage::into_text);
        Err(status_error(status.as_u16(), message))
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }
}

fn classify(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        ErrorKind::TimeoutError.into()
    } else {
        e.into()
    }
}

impl AuthApi for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.dispatch(
            self.client
                .post(self.endpoint("/auth/login"))
                .json(credentials),
        )
        .await
    }

    async fn register(&self, form: &RegisterForm) -> Result<AuthSession> {
        // the confirmation field is skipped by serialization
        self.dispatch(self.client.post(self.endpoint("/auth/register")).json(form))
            .await
    }

    async fn logout(&self) -> Result<()> {
        self.send(self.client.post(self.endpoint("/auth/logout")))
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        self.dispatch(self.client.get(self.endpoint("/auth/me"))).await
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<User> {
        self.dispatch(self.client.put(self.endpoint("/auth/profile")).json(patch))
            .await
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        let body = json!({
            "currentPassword": current,
            "newPassword": new,
        });
        self.send(
            self.client
                .post(self.endpoint("/auth/change-password"))
                .json(&body),
        )
        .await?;
        Ok(())
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}

impl ResourceApi<Course> for HttpGateway {
    async fn fetch_all(&self, _parent: Option<&str>) -> Result<Vec<Course>> {
        // courses are a top-level collection; no parent scope applies
        self.dispatch(self.client.get(self.endpoint("/courses"))).await
    }

    async fn fetch_one(&self, id: &str) -> Result<Course> {
        self.dispatch(self.client.get(self.endpoint(&format!("/courses/{id}"))))
            .await
    }

    async fn create(&self, draft: &CourseDraft) -> Result<Course> {
        self.dispatch(self.client.post(self.endpoint("/courses")).json(draft))
            .await
    }

    async fn update(&self, id: &str, patch: &CoursePatch) -> Result<Course> {
        self.dispatch(
            self.client
                .put(self.endpoint(&format!("/courses/{id}")))
                .json(patch),
        )
        .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.send(self.client.delete(self.endpoint(&format!("/courses/{id}"))))
            .await?;
        Ok(())
    }
}

impl ResourceApi<Content> for HttpGateway {
    async fn fetch_all(&self, parent: Option<&str>) -> Result<Vec<Content>> {
        let url = match parent {
            Some(course_id) => self.endpoint(&format!("/courses/{course_id}/content")),
            None => self.endpoint("/content"),
        };
        self.dispatch(self.client.get(url)).await
    }

    async fn fetch_one(&self, id: &str) -> Result<Content> {
        self.dispatch(self.client.get(self.endpoint(&format!("/content/{id}"))))
            .await
    }

    async fn create(&self, draft: &ContentDraft) -> Result<Content> {
        self.dispatch(self.client.post(self.endpoint("/content")).json(draft))
            .await
    }

    async fn update(&self, id: &str, patch: &ContentPatch) -> Result<Content> {
        self.dispatch(
            self.client
                .put(self.endpoint(&format!("/content/{id}")))
                .json(patch),
        )
        .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.send(self.client.delete(self.endpoint(&format!("/content/{id}"))))
            .await?;
        Ok(())
    }
}

impl EnrollmentApi for HttpGateway {
    async fn enroll(&self, course_id: &str) -> Result<String> {
        let receipt: ApiMessage = self
            .dispatch(
                self.client
                    .post(self.endpoint(&format!("/courses/{course_id}/enroll"))),
            )
            .await?;
        Ok(receipt
            .into_text()
            .unwrap_or_else(|| "enrolled".to_string()))
    }
}

impl MediaApi for HttpGateway {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = multipart::Form::new().part("file", part);

        self.dispatch(
            self.client
                .post(self.endpoint("/content/upload"))
                .multipart(form),
        )
        .await
    }
}
