//! Game backend client library.
//!
//! Provides a shared request dispatcher ([`EngineClient`]) with pluggable
//! authorization, typed query serialization, and per-resource API modules
//! (accounts, sessions, segments, metrics, storage and friends).

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod query;

pub use api::{ApiOptions, EngineClient};
pub use auth::{
    AccessTokenAuthorization, ApiKeyAuthorization, Authorization, SessionTokenAuthorization,
};
pub use config::ClientConfig;
pub use error::{EngineError, EngineErrorKind};
pub use query::{Query, QueryValue, ToQuery};
