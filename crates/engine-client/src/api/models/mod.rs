//! Request and response shapes for the game backend API.
//!
//! Field names are camelCase on the wire; timestamps are epoch milliseconds.

mod account;
mod animation;
mod camera;
mod discord;
mod inventory;
mod metric;
mod reference;
mod segment;
mod server;
mod session;
mod sound;
mod spawn_location;
mod storage;

pub use account::*;
pub use animation::*;
pub use camera::*;
pub use discord::*;
pub use inventory::*;
pub use metric::*;
pub use reference::*;
pub use segment::*;
pub use server::*;
pub use session::*;
pub use sound::*;
pub use spawn_location::*;
pub use storage::*;

use serde::{Deserialize, Serialize};

use crate::query::{Query, ToQuery};

/// Paged list wrapper returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub page_index: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_count: u64,
}

/// Plain paging options for list endpoints without extra filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl ToQuery for PageQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .set_opt("pageIndex", self.page_index)
            .set_opt("pageSize", self.page_size)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}
