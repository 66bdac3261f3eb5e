//! HTTP client for the room API.
//!
//! Used by the `scorecard` CLI. Saves are fire-and-forget from the user's
//! point of view: [`RoomClient::save_logged`] logs failures and carries on,
//! leaving local state as the source of truth.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::models::{MatchPatch, RoomState, RoundId};

/// Errors talking to the room API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },
}

/// Client bound to one server and one room.
#[derive(Debug, Clone)]
pub struct RoomClient {
    http: Client,
    endpoint: String,
    room: String,
}

#[derive(Serialize)]
struct SaveBody<'a> {
    room: &'a str,
    data: &'a RoomState,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatchBody<'a> {
    room: &'a str,
    round_id: RoundId,
    match_index: usize,
    updated_match: &'a MatchPatch,
}

impl RoomClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str, room: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}/api/kv", base_url.trim_end_matches('/')),
            room: room.into(),
        }
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    /// Stored state for the room; `None` if it was never saved.
    pub async fn fetch(&self) -> Result<Option<RoomState>, ClientError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("room", self.room.as_str())])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Replace the stored room state.
    pub async fn save(&self, state: &RoomState) -> Result<(), ClientError> {
        let body = SaveBody {
            room: &self.room,
            data: state,
        };
        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Save, logging instead of failing.
    pub async fn save_logged(&self, state: &RoomState) {
        match self.save(state).await {
            Ok(()) => log::debug!("Saved room {:?}", self.room),
            Err(e) => log::error!("Error saving room {:?}: {}", self.room, e),
        }
    }

    /// Edit one match of a completed round on the server.
    pub async fn patch_match(
        &self,
        round_id: RoundId,
        match_index: usize,
        patch: &MatchPatch,
    ) -> Result<(), ClientError> {
        let body = PatchBody {
            room: &self.room,
            round_id,
            match_index,
            updated_match: patch,
        };
        let response = self.http.patch(&self.endpoint).json(&body).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the server's message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(body);
    Err(ClientError::HttpStatus {
        status: status.as_u16(),
        message,
    })
}
