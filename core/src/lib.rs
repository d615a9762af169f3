//! Synchronous client core for the room-type catalogue API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and layers the create/edit
//! form and list behavior on top of that in `RoomTypeController`.
//!
//! # Design
//! - `RoomTypeClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit. Hosts plug in a `Transport` to execute requests
//!   and a `RoomTypeView` to draw results.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.
//! - "Delete" is always called inactivation here: the backend keeps the
//!   record and only hides it from listings.

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod types;
pub mod view;

pub use client::RoomTypeClient;
pub use controller::RoomTypeController;
pub use error::ApiError;
pub use form::{FormMode, RoomTypeForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{RoomType, RoomTypePayload};
pub use view::{ListState, Placeholder, RoomTypeRow, RoomTypeView};
