//! In-memory room-type store with the catalogue's business rules.
//!
//! Records are never removed: `inactivate` flips the `active` flag, which
//! hides the record from `list_active` but keeps it reachable by id and keeps
//! its name reserved.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, CAPACITY_MESSAGE, RATE_MESSAGE, REQUIRED_FIELDS_MESSAGE};

/// A room type as exposed over the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
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

/// Create/update body. Every field may be missing or `null` on the wire;
/// validation turns that into a 400 instead of an extractor rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RoomTypeInput {
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "capacidadeMaxima", default)]
    pub max_capacity: Option<i32>,
    #[serde(rename = "tarifaPadrao", default)]
    pub standard_rate: Option<f64>,
}

#[derive(Clone, Debug)]
struct StoredRoomType {
    room: RoomType,
    active: bool,
    // Kept for audit; only tests read them back.
    #[cfg_attr(not(test), allow(dead_code))]
    created_at: DateTime<Utc>,
    #[cfg_attr(not(test), allow(dead_code))]
    updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct RoomTypeService {
    rooms: BTreeMap<i64, StoredRoomType>,
    next_id: i64,
}

impl Default for RoomTypeService {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomTypeService {
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Active room types in id order.
    pub fn list_active(&self) -> Vec<RoomType> {
        self.rooms
            .values()
            .filter(|stored| stored.active)
            .map(|stored| stored.room.clone())
            .collect()
    }

    /// Looks up by id regardless of the active flag.
    pub fn find(&self, id: i64) -> Result<RoomType, ServiceError> {
        self.rooms
            .get(&id)
            .map(|stored| stored.room.clone())
            .ok_or(ServiceError::NotFound)
    }

    #[cfg(test)]
    fn is_active(&self, id: i64) -> Option<bool> {
        self.rooms.get(&id).map(|stored| stored.active)
    }

    #[cfg(test)]
    fn timestamps(&self, id: i64) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.rooms
            .get(&id)
            .map(|stored| (stored.created_at, stored.updated_at))
    }

    pub fn create(&mut self, input: RoomTypeInput) -> Result<RoomType, ServiceError> {
        let fields = validate(input)?;
        if self.name_owner(&fields.name).is_some() {
            return Err(ServiceError::DuplicateName);
        }

        let id = self.next_id;
        self.next_id += 1;
        let room = fields.into_room(id);
        let now = Utc::now();
        self.rooms.insert(
            id,
            StoredRoomType {
                room: room.clone(),
                active: true,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(room)
    }

    /// Replaces every editable field of `id`. The active flag and creation
    /// time are kept.
    pub fn update(&mut self, id: i64, input: RoomTypeInput) -> Result<RoomType, ServiceError> {
        if !self.rooms.contains_key(&id) {
            return Err(ServiceError::NotFound);
        }
        let fields = validate(input)?;
        if self.name_owner(&fields.name).is_some_and(|owner| owner != id) {
            return Err(ServiceError::DuplicateName);
        }

        let stored = self.rooms.get_mut(&id).ok_or(ServiceError::NotFound)?;
        stored.room = fields.into_room(id);
        stored.updated_at = Utc::now();
        Ok(stored.room.clone())
    }

    /// Soft delete. Inactivating an already inactive record succeeds.
    pub fn inactivate(&mut self, id: i64) -> Result<(), ServiceError> {
        let stored = self.rooms.get_mut(&id).ok_or(ServiceError::NotFound)?;
        stored.active = false;
        stored.updated_at = Utc::now();
        Ok(())
    }

    /// Id of the record holding `name`, active or not.
    fn name_owner(&self, name: &str) -> Option<i64> {
        self.rooms
            .values()
            .find(|stored| stored.room.name == name)
            .map(|stored| stored.room.id)
    }
}

struct ValidFields {
    name: String,
    description: String,
    max_capacity: i32,
    standard_rate: f64,
}

impl ValidFields {
    fn into_room(self, id: i64) -> RoomType {
        RoomType {
            id,
            name: self.name,
            description: self.description,
            max_capacity: self.max_capacity,
            standard_rate: self.standard_rate,
        }
    }
}

fn validate(input: RoomTypeInput) -> Result<ValidFields, ServiceError> {
    let RoomTypeInput {
        name: Some(name),
        description: Some(description),
        max_capacity: Some(max_capacity),
        standard_rate: Some(standard_rate),
    } = input
    else {
        return Err(ServiceError::Invalid(REQUIRED_FIELDS_MESSAGE));
    };
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(ServiceError::Invalid(REQUIRED_FIELDS_MESSAGE));
    }
    if max_capacity <= 0 {
        return Err(ServiceError::Invalid(CAPACITY_MESSAGE));
    }
    if standard_rate <= 0.0 {
        return Err(ServiceError::Invalid(RATE_MESSAGE));
    }
    Ok(ValidFields {
        name,
        description,
        max_capacity,
        standard_rate,
    })
}
