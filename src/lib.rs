pub mod error;
pub mod config;
pub mod model;
pub mod interface;
pub mod client;
pub mod storage;
pub mod session;
pub mod store;
pub mod routes;
pub mod app;

#[cfg(test)]
mod testing;

pub use app::App;
pub use routes::{evaluate, Route, RouteDecision};
pub use session::{Session, SessionStatus, SessionStore};
pub use store::ResourceStore;

#[cfg(feature = "no-wasm")]
pub use client::HttpGateway;
#[cfg(feature = "wasm")]
pub use client::WasmGateway;
#[cfg(feature = "no-wasm")]
pub use tokio;
