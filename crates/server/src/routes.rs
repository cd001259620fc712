use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use common::types::Health;

use crate::state::AppState;

pub mod items;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Log method and path of every request before it reaches a handler.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "{} {}", method, uri);
    next.run(req).await
}

fn collection_routes() -> MethodRouter<AppState> {
    get(items::list_items).post(items::create_item)
}

fn member_routes() -> MethodRouter<AppState> {
    get(items::get_item)
        .put(items::update_item)
        .delete(items::delete_item)
}

/// Build the full application router: item CRUD plus health check
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // 末尾斜杠与不带斜杠等价：/items/ 同 /items，/items/1/ 同 /items/1
    let item_routes = Router::new()
        .route("/items", collection_routes())
        .route("/items/", collection_routes())
        .route("/items/:id", member_routes())
        .route("/items/:id/", member_routes());

    Router::new()
        .route("/health", get(health))
        .merge(item_routes)
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
