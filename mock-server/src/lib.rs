//! Reference backend for the room-type catalogue.
//!
//! Serves `/tipos-quarto` from an in-memory `RoomTypeService`. Business
//! failures are answered with `{"message": ...}` bodies; malformed JSON and
//! non-numeric ids are left to axum's extractor rejections.

pub mod error;
pub mod service;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ServiceError;
pub use service::{RoomTypeInput, RoomTypeService, RoomType};

pub type Db = Arc<RwLock<RoomTypeService>>;

pub fn app() -> Router {
    app_with(RoomTypeService::new())
}

/// Router over a pre-populated service.
pub fn app_with(service: RoomTypeService) -> Router {
    let db: Db = Arc::new(RwLock::new(service));
    Router::new()
        .route("/tipos-quarto", get(list_room_types).post(create_room_type))
        .route(
            "/tipos-quarto/{id}",
            get(get_room_type)
                .put(update_room_type)
                .delete(inactivate_room_type),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Browser pages are served from anywhere, including `file://`.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_room_types(State(db): State<Db>) -> Json<Vec<RoomType>> {
    Json(db.read().await.list_active())
}

async fn get_room_type(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<RoomType>, ServiceError> {
    db.read().await.find(id).map(Json)
}

async fn create_room_type(
    State(db): State<Db>,
    Json(input): Json<RoomTypeInput>,
) -> Result<(StatusCode, Json<RoomType>), ServiceError> {
    let room = db.write().await.create(input).inspect_err(|err| {
        warn!(error = %err, "rejected room type creation");
    })?;
    info!(id = room.id, name = %room.name, "created room type");
    Ok((StatusCode::CREATED, Json(room)))
}

async fn update_room_type(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<RoomTypeInput>,
) -> Result<Json<RoomType>, ServiceError> {
    let room = db.write().await.update(id, input).inspect_err(|err| {
        warn!(id, error = %err, "rejected room type update");
    })?;
    info!(id, "updated room type");
    Ok(Json(room))
}

async fn inactivate_room_type(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    db.write().await.inactivate(id)?;
    info!(id, "inactivated room type");
    Ok(StatusCode::NO_CONTENT)
}
