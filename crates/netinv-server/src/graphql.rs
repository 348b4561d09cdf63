//! GraphQL transport at `/graphql`
//!
//! POST executes operations, GET serves GraphiQL. Field names are exposed
//! in camelCase (`ipAddress`, `endOfSupport`, ...).

use async_graphql::http::GraphiQLSource;
use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, InputObject, MaybeUndefined, Object, Schema,
    SimpleObject,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Router};
use chrono::NaiveDate;
use netinv_core::{
    ExError, FieldPatch, InventoryError, InventoryPatch, InventoryRecord, NewInventoryRecord,
};
use netinv_core_types::RequestContext;
use netinv_engine::commands::{InventoryCommand, InventoryCommandResult, InventoryQuery};
use uuid::Uuid;

use crate::state::AppState;

pub type InventorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// A stored device record
#[derive(Debug, Clone, SimpleObject)]
pub struct InventoryType {
    pub id: Uuid,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<String>,
    pub state: Option<String>,
    pub device_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub os_version: Option<String>,
    pub end_of_support: Option<NaiveDate>,
}

impl From<InventoryRecord> for InventoryType {
    fn from(r: InventoryRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            ip_address: r.ip_address,
            location: r.location,
            state: r.state,
            device_type: r.device_type,
            make: r.make,
            model: r.model,
            os_version: r.os_version,
            end_of_support: r.end_of_support,
        }
    }
}

/// Fields for a new record
#[derive(Debug, Clone, Default, InputObject)]
pub struct InventoryInput {
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<String>,
    pub state: Option<String>,
    pub device_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub os_version: Option<String>,
    pub end_of_support: Option<NaiveDate>,
}

impl From<InventoryInput> for NewInventoryRecord {
    fn from(i: InventoryInput) -> Self {
        Self {
            name: i.name,
            ip_address: i.ip_address,
            location: i.location,
            state: i.state,
            device_type: i.device_type,
            make: i.make,
            model: i.model,
            os_version: i.os_version,
            end_of_support: i.end_of_support,
        }
    }
}

/// Partial update: an absent field is left alone, `null` clears it
#[derive(Debug, Clone, InputObject)]
pub struct InventoryUpdateInput {
    pub id: Uuid,
    pub name: MaybeUndefined<String>,
    pub ip_address: MaybeUndefined<String>,
    pub location: MaybeUndefined<String>,
    pub state: MaybeUndefined<String>,
    pub device_type: MaybeUndefined<String>,
    pub make: MaybeUndefined<String>,
    pub model: MaybeUndefined<String>,
    pub os_version: MaybeUndefined<String>,
    pub end_of_support: MaybeUndefined<NaiveDate>,
}

fn field_patch<T>(value: MaybeUndefined<T>) -> FieldPatch<T> {
    match value {
        MaybeUndefined::Undefined => FieldPatch::Omitted,
        MaybeUndefined::Null => FieldPatch::Present(None),
        MaybeUndefined::Value(v) => FieldPatch::Present(Some(v)),
    }
}

impl InventoryUpdateInput {
    fn into_parts(self) -> (Uuid, InventoryPatch) {
        let patch = InventoryPatch {
            name: field_patch(self.name),
            ip_address: field_patch(self.ip_address),
            location: field_patch(self.location),
            state: field_patch(self.state),
            device_type: field_patch(self.device_type),
            make: field_patch(self.make),
            model: field_patch(self.model),
            os_version: field_patch(self.os_version),
            end_of_support: field_patch(self.end_of_support),
        };
        (self.id, patch)
    }
}

/// Convert a domain error, tagging it with its stable code
fn to_graphql_error(ctx: &Context<'_>, err: InventoryError) -> async_graphql::Error {
    let ex: ExError = err.into();
    let code = ex.code();
    let request_id = ctx
        .data_opt::<RequestContext>()
        .map(|rc| rc.request_id.to_string());

    async_graphql::Error::new(ex.message()).extend_with(|_, ext| {
        ext.set("code", code);
        if let Some(id) = &request_id {
            ext.set("requestId", id.as_str());
        }
    })
}

fn records(result: Vec<InventoryRecord>) -> Vec<InventoryType> {
    result.into_iter().map(InventoryType::from).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn inventory_items(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<InventoryType>> {
        let state = ctx.data::<AppState>()?;
        let result = state
            .query(InventoryQuery::List)
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        Ok(records(result.into_records()))
    }

    /// `null` when no record has this id
    async fn inventory_item(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> async_graphql::Result<Option<InventoryType>> {
        let state = ctx.data::<AppState>()?;
        let result = state
            .query(InventoryQuery::Get { id })
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        Ok(result.into_records().into_iter().next().map(InventoryType::from))
    }

    async fn inventory_by_location(
        &self,
        ctx: &Context<'_>,
        location: String,
    ) -> async_graphql::Result<Vec<InventoryType>> {
        let state = ctx.data::<AppState>()?;
        let result = state
            .query(InventoryQuery::ByLocation { location })
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        Ok(records(result.into_records()))
    }

    async fn inventory_by_make(
        &self,
        ctx: &Context<'_>,
        make: String,
    ) -> async_graphql::Result<Vec<InventoryType>> {
        let state = ctx.data::<AppState>()?;
        let result = state
            .query(InventoryQuery::ByMake { make })
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        Ok(records(result.into_records()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_inventory_item(
        &self,
        ctx: &Context<'_>,
        inventory: InventoryInput,
    ) -> async_graphql::Result<InventoryType> {
        let state = ctx.data::<AppState>()?;
        let result = state
            .command(InventoryCommand::Create {
                record: inventory.into(),
            })
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        written_record(ctx, result)
    }

    async fn update_inventory_item(
        &self,
        ctx: &Context<'_>,
        inventory: InventoryUpdateInput,
    ) -> async_graphql::Result<InventoryType> {
        let state = ctx.data::<AppState>()?;
        let (id, patch) = inventory.into_parts();
        let result = state
            .command(InventoryCommand::Update { id, patch })
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        written_record(ctx, result)
    }

    async fn delete_inventory_item(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
    ) -> async_graphql::Result<bool> {
        let state = ctx.data::<AppState>()?;
        state
            .command(InventoryCommand::Delete { id })
            .await
            .map_err(|e| to_graphql_error(ctx, e))?;
        Ok(true)
    }
}

fn written_record(
    ctx: &Context<'_>,
    result: InventoryCommandResult,
) -> async_graphql::Result<InventoryType> {
    match result.into_record() {
        Some(record) => Ok(record.into()),
        None => Err(to_graphql_error(
            ctx,
            InventoryError::Internal {
                message: "command returned no record".to_string(),
            },
        )),
    }
}

pub fn build_schema(state: AppState) -> InventorySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(schema: InventorySchema) -> Router<AppState> {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(schema)
}

async fn graphql_handler(
    State(schema): State<InventorySchema>,
    request_context: Option<Extension<RequestContext>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(Extension(rc)) = request_context {
        request = request.data(rc);
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
