//! WASM gateway implementation using gloo_net
//!
//! Same trait surface as the reqwest backend, over the browser's fetch API.
//! Browser fetch enforces no request timeout; failures still land in the
//! network error category.

use std::sync::{Arc, Mutex};

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use wasm_bindgen::JsValue;

use crate::config::GatewayConfig;
use crate::error::{status_error, Error, ErrorKind, Result};
use crate::interface::{AuthApi, EnrollmentApi, HttpClient, MediaApi, ResourceApi};
use crate::model::{
    ApiMessage, AuthSession, Content, ContentDraft, ContentPatch, Course, CourseDraft,
    CoursePatch, Credentials, MediaAsset, ProfilePatch, RegisterForm, User,
};

/// HTTP gateway for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmGateway {
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
}

impl HttpClient for WasmGateway {
    async fn new(config: &GatewayConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.clone(),
            token: Arc::new(Mutex::new(None)),
        })
    }
}

impl WasmGateway {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.lock().unwrap().as_deref() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Handle a JSON response with error translation
    async fn handle_json_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.ok() {
            let message = resp
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(ApiMessage::into_text);
            return Err(status_error(resp.status(), message));
        }

        Ok(resp.json::<T>().await?)
    }

    /// As above, for endpoints whose body the caller discards.
    async fn check_response(resp: Response) -> Result<()> {
        if !resp.ok() {
            let message = resp
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(ApiMessage::into_text);
            return Err(status_error(resp.status(), message));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self
            .authorize(Request::get(&self.endpoint(path)))
            .build()?
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .authorize(Request::post(&self.endpoint(path)))
            .json(body)?
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .authorize(Request::put(&self.endpoint(path)))
            .json(body)?
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn delete_empty(&self, path: &str) -> Result<()> {
        let resp = self
            .authorize(Request::delete(&self.endpoint(path)))
            .build()?
            .send()
            .await?;
        Self::check_response(resp).await
    }
}

fn js_error(value: JsValue) -> Error {
    ErrorKind::PlatformError(format!("{value:?}")).into()
}

impl AuthApi for WasmGateway {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        self.post_json("/auth/login", credentials).await
    }

    async fn register(&self, form: &RegisterForm) -> Result<AuthSession> {
        // the confirmation field is skipped by serialization
        self.post_json("/auth/register", form).await
    }

    async fn logout(&self) -> Result<()> {
        let resp = self
            .authorize(Request::post(&self.endpoint("/auth/logout")))
            .build()?
            .send()
            .await?;
        Self::check_response(resp).await
    }

    async fn current_user(&self) -> Result<User> {
        self.get_json("/auth/me").await
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<User> {
        self.put_json("/auth/profile", patch).await
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        let body = json!({
            "currentPassword": current,
            "newPassword": new,
        });
        let resp = self
            .authorize(Request::post(&self.endpoint("/auth/change-password")))
            .json(&body)?
            .send()
            .await?;
        Self::check_response(resp).await
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}

impl ResourceApi<Course> for WasmGateway {
    async fn fetch_all(&self, _parent: Option<&str>) -> Result<Vec<Course>> {
        // courses are a top-level collection; no parent scope applies
        self.get_json("/courses").await
    }

    async fn fetch_one(&self, id: &str) -> Result<Course> {
        self.get_json(&format!("/courses/{id}")).await
    }

    async fn create(&self, draft: &CourseDraft) -> Result<Course> {
        self.post_json("/courses", draft).await
    }

    async fn update(&self, id: &str, patch: &CoursePatch) -> Result<Course> {
        self.put_json(&format!("/courses/{id}"), patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_empty(&format!("/courses/{id}")).await
    }
}

impl ResourceApi<Content> for WasmGateway {
    async fn fetch_all(&self, parent: Option<&str>) -> Result<Vec<Content>> {
        match parent {
            Some(course_id) => self.get_json(&format!("/courses/{course_id}/content")).await,
            None => self.get_json("/content").await,
        }
    }

    async fn fetch_one(&self, id: &str) -> Result<Content> {
        self.get_json(&format!("/content/{id}")).await
    }

    async fn create(&self, draft: &ContentDraft) -> Result<Content> {
        self.post_json("/content", draft).await
    }

    async fn update(&self, id: &str, patch: &ContentPatch) -> Result<Content> {
        self.put_json(&format!("/content/{id}"), patch).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.delete_empty(&format!("/content/{id}")).await
    }
}

impl EnrollmentApi for WasmGateway {
    async fn enroll(&self, course_id: &str) -> Result<String> {
        let resp = self
            .authorize(Request::post(
                &self.endpoint(&format!("/courses/{course_id}/enroll")),
            ))
            .build()?
            .send()
            .await?;
        let receipt: ApiMessage = Self::handle_json_response(resp).await?;
        Ok(receipt
            .into_text()
            .unwrap_or_else(|| "enrolled".to_string()))
    }
}

impl MediaApi for WasmGateway {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset> {
        let form = web_sys::FormData::new().map_err(js_error)?;

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        form.append_with_blob_and_filename("file", &blob, file_name)
            .map_err(js_error)?;

        let resp = self
            .authorize(Request::post(&self.endpoint("/content/upload")))
            .body(form)?
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }
}
