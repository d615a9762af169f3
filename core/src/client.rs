//! Stateless HTTP request builder and response parser for the room-type API.
//!
//! # Design
//! `RoomTypeClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Any 2xx status counts as success; the backend
//! answers 201/204 today but the client does not pin that down.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, RoomType, RoomTypePayload};

/// Collection path of the resource, relative to the base URL.
pub const RESOURCE_PATH: &str = "/tipos-quarto";

/// Synchronous, stateless client for the room-type API.
#[derive(Debug, Clone)]
pub struct RoomTypeClient {
    base_url: String,
}

impl RoomTypeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{RESOURCE_PATH}", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{RESOURCE_PATH}/{id}", self.base_url)
    }

    pub fn build_list_room_types(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_room_type(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_room_type(&self, input: &RoomTypePayload) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_room_type(
        &self,
        id: i64,
        input: &RoomTypePayload,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    /// Soft delete: the backend marks the record inactive and drops it from
    /// listings, but keeps it addressable by id.
    pub fn build_inactivate_room_type(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_room_types(&self, response: HttpResponse) -> Result<Vec<RoomType>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_room_type(&self, response: HttpResponse) -> Result<RoomType, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Returns the stored record when the server echoes one back. The status
    /// alone decides success: a 2xx whose body is not a full record is still
    /// a completed write.
    pub fn parse_create_room_type(&self, response: HttpResponse) -> Result<Option<RoomType>, ApiError> {
        check_status(&response)?;
        Ok(echoed_record(&response.body))
    }

    pub fn parse_update_room_type(&self, response: HttpResponse) -> Result<Option<RoomType>, ApiError> {
        check_status(&response)?;
        Ok(echoed_record(&response.body))
    }

    pub fn parse_inactivate_room_type(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &RoomTypePayload) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn echoed_record(body: &str) -> Option<RoomType> {
    serde_json::from_str(body).ok()
}

/// Map non-2xx responses to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());
    if let Some(message) = message {
        return Err(ApiError::Rejected {
            status: response.status,
            message,
        });
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
