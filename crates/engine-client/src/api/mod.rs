//! Game backend REST API client.
//!
//! [`EngineClient`] is the single dispatcher every resource API funnels
//! through: it composes URLs, injects the application/server/locale and
//! authorization headers, serializes queries and bodies, and turns every
//! failure into an [`EngineError`]. Nothing is retried.

mod account;
mod camera;
mod discord;
mod metric;
mod options;
mod reference;
mod request;
mod segment;
mod server;
mod session;
mod sound;
mod spawn_location;
mod storage;

pub mod models;

pub use account::AccountApi;
pub use camera::CameraApi;
pub use discord::DiscordApi;
pub use metric::MetricApi;
pub use options::ApiOptions;
pub use reference::ReferenceApi;
pub use request::{APPLICATION_NAME_HEADER, LOCALE_HEADER, SERVER_ID_HEADER};
pub use segment::SegmentApi;
pub use server::ServerApi;
pub use session::SessionApi;
pub use sound::SoundApi;
pub use spawn_location::SpawnLocationApi;
pub use storage::StorageApi;

use std::fmt;
use std::sync::Arc;

use crate::query::{Query, ToQuery};
use crate::{Authorization, ClientConfig, EngineError};

use models::*;

/// Shared request dispatcher.
///
/// Cheap to clone; clones share the HTTP connection pool, configuration and
/// authorization strategy. Neither is mutated after construction, so one
/// instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct EngineClient {
    pub(super) http: reqwest::Client,
    pub(super) config: Arc<ClientConfig>,
    pub(super) auth: Arc<dyn Authorization>,
}

impl fmt::Debug for EngineClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EngineClient {
    pub fn accounts(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    pub fn sessions(&self) -> SessionApi {
        SessionApi::new(self.clone())
    }

    pub fn segments(&self) -> SegmentApi {
        SegmentApi::new(self.clone())
    }

    pub fn references(&self) -> ReferenceApi {
        ReferenceApi::new(self.clone())
    }

    pub fn metrics(&self) -> MetricApi {
        MetricApi::new(self.clone())
    }

    pub fn cameras(&self) -> CameraApi {
        CameraApi::new(self.clone())
    }

    pub fn sounds(&self) -> SoundApi {
        SoundApi::new(self.clone())
    }

    pub fn spawn_locations(&self) -> SpawnLocationApi {
        SpawnLocationApi::new(self.clone())
    }

    pub fn storage(&self) -> StorageApi {
        StorageApi::new(self.clone())
    }

    pub fn servers(&self) -> ServerApi {
        ServerApi::new(self.clone())
    }

    pub fn discord(&self) -> DiscordApi {
        DiscordApi::new(self.clone())
    }
}
