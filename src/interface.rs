#![allow(async_fn_in_trait)]

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::model::{
    AuthSession, Credentials, MediaAsset, ProfilePatch, Record, RegisterForm, User,
};

/// Common trait for HTTP client construction.
pub trait HttpClient {
    /// Create a new gateway instance for the given deployment.
    async fn new(config: &GatewayConfig) -> Result<Self>
    where
        Self: Sized;
}

/// Authentication operations against `/auth/*`.
pub trait AuthApi {
    /// Exchange credentials for a user and token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession>;

    /// Create an account; same response shape as login.
    async fn register(&self, form: &RegisterForm) -> Result<AuthSession>;

    /// Invalidate the session server-side.
    async fn logout(&self) -> Result<()>;

    /// Fetch the user the current token belongs to.
    async fn current_user(&self) -> Result<User>;

    /// Update the authenticated user's profile.
    async fn update_profile(&self, patch: &ProfilePatch) -> Result<User>;

    /// Rotate the account password.
    async fn change_password(&self, current: &str, new: &str) -> Result<()>;

    /// Set or clear the bearer token attached to subsequent requests.
    fn set_token(&self, token: Option<String>);
}

/// CRUD operations for a server-owned collection.
pub trait ResourceApi<T: Record> {
    /// Read the whole collection, optionally scoped to a parent record.
    async fn fetch_all(&self, parent: Option<&str>) -> Result<Vec<T>>;

    /// Read a single record by id.
    async fn fetch_one(&self, id: &str) -> Result<T>;

    /// Create a record; the server assigns the id.
    async fn create(&self, draft: &T::Draft) -> Result<T>;

    /// Patch a record in place.
    async fn update(&self, id: &str, patch: &T::Patch) -> Result<T>;

    /// Remove a record.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Course enrollment.
pub trait EnrollmentApi {
    /// Enroll the authenticated user; returns the server's confirmation
    /// message.
    async fn enroll(&self, course_id: &str) -> Result<String>;
}

/// Media upload, the one multipart endpoint.
pub trait MediaApi {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaAsset>;
}
