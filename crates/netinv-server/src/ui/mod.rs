//! Server-rendered UI for htmx clients
//!
//! Routes return full pages or HTML fragments. Failures are plain-text
//! bodies with the status of their error kind.

pub mod forms;
pub mod render;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Form, Router};
use netinv_core::rules::validation::parse_record_id;
use netinv_core::{InventoryError, InventoryRecord};
use netinv_engine::commands::{InventoryCommand, InventoryQuery};
use std::collections::HashMap;

use crate::error::status_for;
use crate::state::AppState;

/// Response header telling htmx to navigate
pub const HX_REDIRECT: &str = "HX-Redirect";

/// Error returned by UI handlers
#[derive(Debug)]
pub struct UiError(pub InventoryError);

impl From<InventoryError> for UiError {
    fn from(err: InventoryError) -> Self {
        UiError(err)
    }
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind());
        let message = match &self.0 {
            InventoryError::NameConflict { .. } => "Name already exists".to_string(),
            InventoryError::NotFound { .. } => "Item not found".to_string(),
            other => other.to_string(),
        };
        (status, message).into_response()
    }
}

type UiResult<T> = Result<T, UiError>;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/inventory", get(inventory_page))
        .route("/inventory/add", get(inventory_rows).post(add_inventory))
        .route("/inventory/:id/edit", get(edit_inventory_form))
        .route(
            "/inventory/:id",
            patch(update_inventory).delete(delete_inventory),
        )
}

fn redirect_to_inventory() -> Response {
    (StatusCode::NO_CONTENT, [(HX_REDIRECT, "/inventory")]).into_response()
}

async fn all_records(state: &AppState) -> UiResult<Vec<InventoryRecord>> {
    Ok(state.query(InventoryQuery::List).await?.into_records())
}

async fn home() -> Html<&'static str> {
    Html(render::home_page())
}

async fn inventory_page(State(state): State<AppState>) -> UiResult<Html<String>> {
    let records = all_records(&state).await?;
    Ok(Html(render::inventory_page(&records)))
}

async fn inventory_rows(State(state): State<AppState>) -> UiResult<Html<String>> {
    let records = all_records(&state).await?;
    Ok(Html(render::table_rows(&records)))
}

async fn edit_inventory_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> UiResult<Html<String>> {
    let id = parse_record_id(&id)?;
    let record = state
        .query(InventoryQuery::Get { id })
        .await?
        .into_records()
        .into_iter()
        .next()
        .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })?;
    Ok(Html(render::edit_form(&record)))
}

async fn add_inventory(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> UiResult<Response> {
    let record = forms::new_record_from_form(&form)?;
    state.command(InventoryCommand::Create { record }).await?;
    Ok(redirect_to_inventory())
}

async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> UiResult<Html<&'static str>> {
    let id = parse_record_id(&id)?;
    let patch = forms::patch_from_form(&form)?;
    state.command(InventoryCommand::Update { id, patch }).await?;
    Ok(Html(render::RELOAD_SCRIPT))
}

async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> UiResult<Response> {
    let id = parse_record_id(&id)?;
    state.command(InventoryCommand::Delete { id }).await?;
    Ok(redirect_to_inventory())
}
