//! Domain DTOs for the room-type API.
//!
//! # Design
//! Wire names are the backend's (`nome`, `descricao`, `capacidadeMaxima`,
//! `tarifaPadrao`); Rust names are English. These types are defined
//! independently from the server crate and integration tests catch schema
//! drift between the two.

use serde::{Deserialize, Serialize};

/// A room category as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomType {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "capacidadeMaxima")]
    pub max_capacity: i32,
    #[serde(rename = "tarifaPadrao")]
    pub standard_rate: f64,
}

/// Body for create and update requests. Never carries an id: the target of an
/// update travels in the path.
///
/// Numeric fields are optional because they come from free-text form input.
/// A value that does not parse is sent as `null` and left for the backend to
/// reject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomTypePayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "capacidadeMaxima")]
    pub max_capacity: Option<i32>,
    #[serde(rename = "tarifaPadrao")]
    pub standard_rate: Option<f64>,
}

impl From<&RoomType> for RoomTypePayload {
    fn from(room: &RoomType) -> Self {
        Self {
            name: room.name.clone(),
            description: room.description.clone(),
            max_capacity: Some(room.max_capacity),
            standard_rate: Some(room.standard_rate),
        }
    }
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
