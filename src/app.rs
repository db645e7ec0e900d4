//! Application context - explicit state objects with a defined lifecycle
//!
//! One `App` is created on startup and dropped on shutdown; views borrow the
//! stores they render. The stores share one gateway clone, so a single token
//! backs every request.

use crate::interface::{AuthApi, EnrollmentApi, MediaApi, ResourceApi};
use crate::model::{Content, Course};
use crate::session::SessionStore;
use crate::storage::TokenStore;
use crate::store::ResourceStore;

pub struct App<G, S> {
    pub session: SessionStore<G, S>,
    pub courses: ResourceStore<Course, G>,
    pub content: ResourceStore<Content, G>,
}

impl<G, S> App<G, S>
where
    G: AuthApi + ResourceApi<Course> + ResourceApi<Content> + EnrollmentApi + MediaApi + Clone,
    S: TokenStore,
{
    pub fn new(gateway: G, tokens: S) -> Self {
        App {
            session: SessionStore::new(gateway.clone(), tokens),
            courses: ResourceStore::new(gateway.clone()),
            content: ResourceStore::new(gateway),
        }
    }

    /// One-time startup step: resolve any persisted session.
    pub async fn start(&mut self) {
        self.session.restore_session().await;
    }

    /// Reload both collections concurrently.
    pub async fn refresh(&mut self) {
        let courses = self.courses.fetch_all(None);
        let content = self.content.fetch_all(None);
        futures::join!(courses, content);
    }
}

#[cfg(feature = "no-wasm")]
pub type NativeApp = App<crate::client::HttpGateway, crate::storage::FileTokenStore>;

#[cfg(feature = "no-wasm")]
impl NativeApp {
    /// Build the native context against the configured deployment.
    pub async fn bootstrap(
        config: &crate::config::GatewayConfig,
        token_path: impl Into<std::path::PathBuf>,
    ) -> crate::error::Result<Self> {
        use crate::interface::HttpClient;

        let gateway = crate::client::HttpGateway::new(config).await?;
        Ok(App::new(
            gateway,
            crate::storage::FileTokenStore::new(token_path),
        ))
    }
}
