//! REST endpoints over an in-memory record store.

use std::sync::{Arc, RwLock};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::error::RecordError;
use crate::file_type::RecordFileType;
use crate::parser::parse_record;
use crate::record::Record;
use crate::sort::sort_records;

/// Records shared by all endpoint handlers, in insertion order.
///
/// Reads work on a snapshot, so a sort never blocks writers and never
/// observes a half-inserted batch.
#[derive(Clone)]
pub struct RecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> RecordStore {
        RecordStore {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append one record.
    pub fn push(&self, record: Record) {
        let mut records_guard = self.records.write().unwrap();
        records_guard.push(record);
    }

    /// Clone the current records in insertion order.
    pub fn snapshot(&self) -> Vec<Record> {
        let records_guard = self.records.read().unwrap();
        records_guard.clone()
    }
}

/// Request body for record creation.
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    /// One delimited record line.
    record: String,
    /// Format tag naming the delimiter of `record`.
    fmt: String,
}

/// Error surfaced by an endpoint, mapped onto an HTTP status and a stable
/// machine-readable code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body could not be read as the expected JSON shape.
    #[error("malformed request body: {reason}")]
    MalformedRequest { reason: String },
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ServiceError {
    fn status(&self) -> StatusCode {
        match self {
            ServiceError::MalformedRequest { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Record(error) => match error {
                RecordError::Io(_) | RecordError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::MalformedRequest { .. } => "MALFORMED_REQUEST",
            ServiceError::Record(error) => match error {
                RecordError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
                RecordError::MalformedRecord { .. } => "MALFORMED_RECORD",
                RecordError::InvalidSortSpec { .. } => "INVALID_SORT_SPEC",
                RecordError::ColumnOutOfRange { .. } => "COLUMN_OUT_OF_RANGE",
                RecordError::Io(_) | RecordError::Csv(_) => "INTERNAL",
            },
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        let body = Json(json!({
            "error": {
                "error_code": self.error_code(),
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

/// Build the REST router over a shared record store.
pub fn record_router(store: RecordStore) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/records", get(list_records).post(create_record))
        .route("/records/email", get(list_by_email))
        .route("/records/birthdate", get(list_by_birthdate))
        .route("/records/name", get(list_by_name))
        .with_state(store)
}

async fn home() -> Json<serde_json::Value> {
    Json(json!({"message": "Hey rest client, you are looking dandy today"}))
}

async fn create_record(
    State(store): State<RecordStore>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ServiceError> {
    let Json(request) = payload.map_err(|rejection| ServiceError::MalformedRequest {
        reason: rejection.body_text(),
    })?;
    let file_type = RecordFileType::resolve(&request.fmt)?;
    let record = parse_record(&request.record, &file_type)?;
    store.push(record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

/// List records, reordered by any number of repeated `sort` query
/// parameters. Without them the insertion order comes back.
async fn list_records(
    State(store): State<RecordStore>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Record>>, ServiceError> {
    let specs: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "sort")
        .map(|(_, value)| value)
        .collect();
    let sorted = sort_records(&store.snapshot(), &specs)?;
    Ok(Json(sorted))
}

async fn list_by_email(
    State(store): State<RecordStore>,
) -> Result<Json<Vec<Record>>, ServiceError> {
    sorted_view(&store, &["2,asc"])
}

async fn list_by_birthdate(
    State(store): State<RecordStore>,
) -> Result<Json<Vec<Record>>, ServiceError> {
    sorted_view(&store, &["4,asc"])
}

/// First name is the primary key so namesakes group together, last name
/// breaks the ties.
async fn list_by_name(
    State(store): State<RecordStore>,
) -> Result<Json<Vec<Record>>, ServiceError> {
    sorted_view(&store, &["1,asc", "0,asc"])
}

fn sorted_view(store: &RecordStore, specs: &[&str]) -> Result<Json<Vec<Record>>, ServiceError> {
    let specs: Vec<String> = specs.iter().map(|spec| spec.to_string()).collect();
    let sorted = sort_records(&store.snapshot(), &specs)?;
    Ok(Json(sorted))
}
