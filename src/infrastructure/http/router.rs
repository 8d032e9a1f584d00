use crate::infrastructure::http::controllers::{agents, dashboard, tickets};
use crate::infrastructure::http::middleware::{track_request_metrics, AppState};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Endpoint overview logged at startup.
pub const ENDPOINTS: &[&str] = &[
    "GET    /api/dashboard/stats",
    "GET    /api/tickets",
    "POST   /api/tickets",
    "GET    /api/tickets/:id",
    "PUT    /api/tickets/:id",
    "DELETE /api/tickets/:id",
    "POST   /api/tickets/:id/notes",
    "POST   /api/tickets/:id/assign",
    "GET    /api/agents",
    "GET    /api/agents/:id",
    "PUT    /api/agents/:id",
    "GET    /api/agents/:id/stats",
    "GET    /api/health",
];

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let api = Router::new()
        .route(
            "/api/dashboard/stats",
            get(dashboard::get_dashboard_stats),
        )
        // Ticket routes
        .route(
            "/api/tickets",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route(
            "/api/tickets/:id",
            get(tickets::get_ticket)
                .put(tickets::update_ticket)
                .delete(tickets::delete_ticket),
        )
        .route("/api/tickets/:id/notes", post(tickets::add_note))
        .route("/api/tickets/:id/assign", post(tickets::assign_ticket))
        // Agent routes
        .route("/api/agents", get(agents::list_agents))
        .route(
            "/api/agents/:id",
            get(agents::get_agent).put(agents::update_agent),
        )
        .route("/api/agents/:id/stats", get(agents::get_agent_stats))
        .route("/api/health", get(health_handler))
        .route_layer(axum::middleware::from_fn(track_request_metrics));

    // The dashboard is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .merge(api)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Deskline Helpdesk API"
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "Backend server is running!" }))
}
