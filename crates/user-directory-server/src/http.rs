use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use juniper::http::GraphQLRequest;
use juniper::InputValue;
use serde::Deserialize;

use user_directory_lib::graphql::{Context, Schema};
use user_directory_lib::UserStore;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
pub struct AppState {
    schema: Arc<Schema>,
    context: Context,
}
impl AppState {
    pub fn new(schema: Schema, store: UserStore) -> Self {
        AppState {
            schema: Arc::new(schema),
            context: Context::new(Arc::new(store)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_graphiql).post(handle_graphql_post))
        .route(GRAPHQL_PATH, get(handle_graphql_get).post(handle_graphql_post))
        .route("/healthz", get(handle_healthz))
        .with_state(state)
}

// --- POST / and POST /graphql ---

pub(crate) async fn handle_graphql_post(
    State(state): State<AppState>,
    request: Result<Json<GraphQLRequest>, JsonRejection>,
) -> Response {
    match request {
        Ok(Json(request)) => execute(&state, request).await,
        Err(rejection) => reject(rejection.body_text()),
    }
}

// --- GET /graphql?query=&operationName=&variables= ---

#[derive(Deserialize)]
pub(crate) struct GraphQLGetParams {
    query: String,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
    variables: Option<String>,
}

pub(crate) async fn handle_graphql_get(
    State(state): State<AppState>,
    params: Result<Query<GraphQLGetParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return reject(rejection.body_text()),
    };

    let variables = match params
        .variables
        .as_deref()
        .map(|variables| serde_json::from_str::<InputValue>(variables))
        .transpose()
    {
        Ok(variables) => variables,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting GET request with malformed variables");
            return error_envelope(StatusCode::BAD_REQUEST, format!("invalid variables: {e}"));
        }
    };

    let request = GraphQLRequest::new(params.query, params.operation_name, variables);
    execute(&state, request).await
}

// --- GET / ---

pub(crate) async fn handle_graphiql() -> Html<String> {
    Html(juniper::http::graphiql::graphiql_source(GRAPHQL_PATH, None))
}

// --- GET /healthz ---

pub(crate) async fn handle_healthz(State(state): State<AppState>) -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "users": state.context.store().len(),
    }))
    .into_response()
}

/// Runs one request and wraps juniper's envelope. Requests rejected before
/// execution (parse or validation errors) get a 400.
async fn execute(state: &AppState, request: GraphQLRequest) -> Response {
    let started = Instant::now();
    let response = request.execute(&state.schema, &state.context).await;
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    tracing::info!(
        operation = request.operation_name().unwrap_or("<anonymous>"),
        status = status.as_u16(),
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "executed GraphQL request"
    );

    (status, Json(response)).into_response()
}

/// Requests axum could not extract still get a GraphQL error envelope.
fn reject(message: String) -> Response {
    tracing::warn!(error = %message, "rejecting malformed GraphQL request");
    error_envelope(StatusCode::BAD_REQUEST, message)
}

fn error_envelope(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(serde_json::json!({ "errors": [{ "message": message }] })),
    )
        .into_response()
}
