//! HTTP surface of the draw.
//!
//! Every handler answers with a structured body; draw outcomes such as an
//! exhausted sequence are reported through `status`, never as a failure.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Datelike;
use prizedraw_core::{DrawError, DrawService, Revealed};
use serde::Serialize;
use std::sync::Arc;

pub type AppState = Arc<DrawService>;

pub fn app(service: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", get(generate))
        .route("/previous", get(previous))
        .route("/reset", get(reset))
        .route("/download", get(download))
        .route("/status", get(status))
        .with_state(service)
}

#[derive(Serialize)]
struct IndexResponse {
    total: usize,
    year: i32,
}

#[derive(Debug, Serialize)]
struct DrawResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    urc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl DrawResponse {
    fn status(status: &'static str) -> Self {
        Self {
            status,
            name: None,
            urc: None,
            index: None,
            prize: None,
            message: None,
        }
    }

    fn revealed(revealed: Revealed) -> Self {
        Self {
            name: Some(revealed.entry.name),
            urc: Some(revealed.entry.identity_code),
            index: Some(revealed.index),
            prize: Some(revealed.entry.prize.as_str().to_string()),
            ..Self::status("ok")
        }
    }
}

fn internal_error(err: DrawError) -> Response {
    tracing::error!("Request failed: {}", err);
    let body = DrawResponse {
        message: Some(err.to_string()),
        ..DrawResponse::status("error")
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

async fn index(State(service): State<AppState>) -> impl IntoResponse {
    Json(IndexResponse {
        total: service.total(),
        year: chrono::Local::now().year(),
    })
}

async fn generate(State(service): State<AppState>) -> Response {
    match service.reveal() {
        Ok(revealed) => Json(DrawResponse::revealed(revealed)).into_response(),
        Err(DrawError::SequenceExhausted) => Json(DrawResponse::status("done")).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn previous(State(service): State<AppState>) -> Response {
    match service.undo() {
        Ok(revealed) => Json(DrawResponse::revealed(revealed)).into_response(),
        Err(DrawError::NothingToUndo) => Json(DrawResponse::status("error")).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn reset(State(service): State<AppState>) -> Response {
    match service.reset() {
        Ok(()) => Json(DrawResponse::status("ok")).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn download(State(service): State<AppState>) -> Response {
    match service.export_log() {
        Ok(bytes) => {
            let disposition = format!("attachment; filename=\"{}\"", service.log_file_name());
            (
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(DrawError::LogUnavailable) => {
            (StatusCode::NOT_FOUND, "No log file found.").into_response()
        }
        Err(e) => internal_error(e),
    }
}

async fn status(State(service): State<AppState>) -> impl IntoResponse {
    Json(service.status())
}
