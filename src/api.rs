//! REST API: one resource per room store endpoint.
//!
//! `GET ?room=` reads, `POST {room, data}` replaces, `PATCH {room, roundId,
//! matchIndex, updatedMatch}` edits one match of a completed round. Errors
//! are `{"error": message}` with 400/404/500; other verbs get 405. Store
//! calls may touch the disk, so they run on the blocking thread pool.

use std::sync::Arc;

use actix_web::{
    error::InternalError,
    get,
    http::StatusCode,
    web::{self, Data, Json, Query},
    HttpRequest, HttpResponse, Resource, ResponseError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{MatchPatch, RoomState, Roster, RoundId};
use crate::rooms::{self, PatchRequest, RoomError};
use crate::store::RoomStore;

/// Shared server state: the room store and the roster used for loser names.
pub struct ApiState {
    pub store: Arc<dyn RoomStore>,
    pub roster: Roster,
}

impl ApiState {
    pub fn new(store: Arc<dyn RoomStore>, roster: Roster) -> Self {
        Self { store, roster }
    }
}

type AppState = Data<ApiState>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct SuccessResponse {
    success: bool,
}

#[derive(Deserialize)]
struct RoomQuery {
    room: Option<String>,
}

#[derive(Deserialize)]
struct SaveBody {
    room: Option<String>,
    data: Option<RoomState>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatchBody {
    room: Option<String>,
    round_id: Option<RoundId>,
    match_index: Option<i64>,
    updated_match: Option<MatchPatch>,
}

impl ResponseError for RoomError {
    fn status_code(&self) -> StatusCode {
        match self {
            RoomError::Validation(_) => StatusCode::BAD_REQUEST,
            RoomError::NotFound(_) => StatusCode::NOT_FOUND,
            RoomError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Room store failure: {}", self);
        } else {
            log::warn!("Rejected room request ({}): {}", status.as_u16(), self);
        }
        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
    }
}

#[get("/api/health")]
async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-scorecard",
    })
}

/// Stored room state, or `null` for a room that was never saved.
async fn api_get_room(state: AppState, query: Query<RoomQuery>) -> actix_web::Result<HttpResponse> {
    let room = query.into_inner().room;
    let data = web::block(move || rooms::read(state.store.as_ref(), room.as_deref())).await??;
    Ok(HttpResponse::Ok().json(data))
}

/// Replace the whole room state.
async fn api_save_room(state: AppState, body: Json<SaveBody>) -> actix_web::Result<HttpResponse> {
    let body = body.into_inner();
    web::block(move || rooms::replace(state.store.as_ref(), body.room.as_deref(), body.data.as_ref()))
        .await??;
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

/// Update one match of a completed round.
async fn api_patch_match(state: AppState, body: Json<PatchBody>) -> actix_web::Result<HttpResponse> {
    let body = body.into_inner();
    web::block(move || {
        let request = PatchRequest {
            room: body.room.as_deref(),
            round_id: body.round_id,
            match_index: body.match_index,
            updated_match: body.updated_match.as_ref(),
        };
        rooms::patch_match(state.store.as_ref(), &state.roster, request)
    })
    .await??;
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    log::warn!("{} {} not allowed", req.method(), req.path());
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method not allowed." }))
}

/// Room endpoint mounted at `path`.
fn room_resource(path: &str) -> Resource {
    web::resource(path)
        .route(web::get().to(api_get_room))
        .route(web::post().to(api_save_room))
        .route(web::patch().to(api_patch_match))
        .default_service(web::to(method_not_allowed))
}

/// Malformed bodies and queries answer 400 with the same error shape.
fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

/// Register the API on an app. `ApiState` must be added as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| bad_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| bad_request(err)))
        .service(api_health)
        .service(room_resource("/api/kv"))
        .service(room_resource("/api/database"));
}
