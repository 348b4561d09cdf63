//! REST transport under `/inventory/api`

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use netinv_core::rules::validation::parse_record_id;
use netinv_core::{InventoryError, InventoryPatch, InventoryRecord, NewInventoryRecord};
use netinv_engine::commands::{InventoryCommand, InventoryCommandResult, InventoryQuery};

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<T, ApiError>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/inventory/api", get(list_inventory).post(create_inventory))
        .route("/inventory/api/", get(list_inventory).post(create_inventory))
        .route(
            "/inventory/api/:id",
            get(get_inventory)
                .patch(update_inventory)
                .delete(delete_inventory),
        )
        .route("/inventory/api/location/:location", get(list_by_location))
        .route("/inventory/api/make/:make", get(list_by_make))
}

/// Body decoding failures are validation errors in the standard error shape
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, InventoryError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| InventoryError::InvalidField {
            field: "body".to_string(),
            reason: rejection.body_text(),
        })
}

async fn list_inventory(State(state): State<AppState>) -> ApiResult<Json<Vec<InventoryRecord>>> {
    let records = state.query(InventoryQuery::List).await?.into_records();
    Ok(Json(records))
}

async fn create_inventory(
    State(state): State<AppState>,
    payload: Result<Json<NewInventoryRecord>, JsonRejection>,
) -> ApiResult<Json<InventoryRecord>> {
    let record = body(payload)?;
    match state.command(InventoryCommand::Create { record }).await? {
        InventoryCommandResult::Created(created) => Ok(Json(created)),
        other => Err(unexpected(other)),
    }
}

async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<InventoryRecord>> {
    let id = parse_record_id(&id)?;
    state
        .query(InventoryQuery::Get { id })
        .await?
        .into_records()
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| InventoryError::NotFound { id: id.to_string() }.into())
}

async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<InventoryPatch>, JsonRejection>,
) -> ApiResult<Json<InventoryRecord>> {
    let id = parse_record_id(&id)?;
    let patch = body(payload)?;
    match state.command(InventoryCommand::Update { id, patch }).await? {
        InventoryCommandResult::Updated(updated) => Ok(Json(updated)),
        other => Err(unexpected(other)),
    }
}

async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_record_id(&id)?;
    state.command(InventoryCommand::Delete { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> ApiResult<Json<Vec<InventoryRecord>>> {
    let records = state
        .query(InventoryQuery::ByLocation { location })
        .await?
        .into_records();
    Ok(Json(records))
}

async fn list_by_make(
    State(state): State<AppState>,
    Path(make): Path<String>,
) -> ApiResult<Json<Vec<InventoryRecord>>> {
    let records = state
        .query(InventoryQuery::ByMake { make })
        .await?
        .into_records();
    Ok(Json(records))
}

fn unexpected(result: InventoryCommandResult) -> ApiError {
    InventoryError::Internal {
        message: format!("unexpected command result: {:?}", result),
    }
    .into()
}
