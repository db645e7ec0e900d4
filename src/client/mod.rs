//! API gateway client - the sole module performing network I/O
//!
//! This module provides the gateway implementations behind the traits in
//! `interface`, with a reqwest backend for native builds and a gloo_net
//! backend for WASM builds.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::HttpGateway;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmGateway;
