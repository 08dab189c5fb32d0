use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::StaffId;
use super::query::{DepartmentFilter, SortKey, SortOrder, StaffQuery, StatusFilter};
use super::service::{DeleteConfirmation, DirectoryServiceError, StaffDirectoryService};
use super::sharing::CredentialPublisher;
use super::store::{SnapshotStore, StoreError};
use super::validation::{HireForm, ProfileForm};

/// Router builder exposing the directory operations over HTTP.
pub fn directory_router<S, P>(service: Arc<StaffDirectoryService<S, P>>) -> Router
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    Router::new()
        .route("/api/v1/staff", get(list_handler::<S, P>))
        .route("/api/v1/staff", post(hire_handler::<S, P>))
        .route("/api/v1/staff/summary", get(summary_handler::<S, P>))
        .route("/api/v1/staff/:id", get(get_handler::<S, P>))
        .route("/api/v1/staff/:id", put(update_handler::<S, P>))
        .route("/api/v1/staff/:id", delete(delete_handler::<S, P>))
        .route(
            "/api/v1/staff/:id/credentials",
            post(regenerate_handler::<S, P>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StaffQueryParams {
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    order: Option<String>,
}

impl From<StaffQueryParams> for StaffQuery {
    fn from(params: StaffQueryParams) -> Self {
        let defaults = StaffQuery::default();
        StaffQuery {
            search: params.search.unwrap_or_default(),
            department: params
                .department
                .as_deref()
                .map(DepartmentFilter::parse)
                .unwrap_or(defaults.department),
            status: params
                .status
                .as_deref()
                .map(StatusFilter::parse)
                .unwrap_or(defaults.status),
            sort_key: params
                .sort
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or(defaults.sort_key),
            sort_order: params
                .order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or(defaults.sort_order),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeleteParams {
    #[serde(default)]
    confirm: bool,
}

pub(crate) async fn list_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
    Query(params): Query<StaffQueryParams>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    let query = StaffQuery::from(params);
    let records = service.query(&query);
    (StatusCode::OK, axum::Json(records)).into_response()
}

pub(crate) async fn summary_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    (StatusCode::OK, axum::Json(service.summary())).into_response()
}

pub(crate) async fn get_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
    Path(id): Path<i64>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    match service.get(StaffId(id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn hire_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
    axum::Json(form): axum::Json<HireForm>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    match service.hire(form) {
        Ok((record, credentials)) => {
            let payload = json!({
                "record": record,
                "credentials": credentials,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
    Path(id): Path<i64>,
    axum::Json(form): axum::Json<ProfileForm>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    match service.update(StaffId(id), form) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
    Path(id): Path<i64>,
    Query(params): Query<DeleteParams>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    let confirmation = if params.confirm {
        DeleteConfirmation::Confirmed
    } else {
        DeleteConfirmation::Declined
    };

    match service.remove(StaffId(id), confirmation) {
        Ok(removed) => (StatusCode::OK, axum::Json(removed)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn regenerate_handler<S, P>(
    State(service): State<Arc<StaffDirectoryService<S, P>>>,
    Path(id): Path<i64>,
) -> Response
where
    S: SnapshotStore + 'static,
    P: CredentialPublisher + 'static,
{
    match service.regenerate_credentials(StaffId(id)) {
        Ok(bundle) => (StatusCode::OK, axum::Json(bundle)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: DirectoryServiceError) -> Response {
    match err {
        DirectoryServiceError::Validation(report) => {
            let payload = json!({ "errors": report.errors });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        DirectoryServiceError::Store(StoreError::NotFound(id)) => {
            let payload = json!({ "error": format!("staff record {id} not found") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        DirectoryServiceError::RemovalNotConfirmed => {
            let payload = json!({
                "error": "removal must be confirmed; repeat the request with confirm=true",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
