use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

// GET /api/agents
pub async fn list_agents(State(state): State<AppState>) -> ApiResult<Json<Vec<Agent>>> {
    let agents = state.agent_service.list_agents().await?;
    Ok(Json(agents))
}

// GET /api/agents/:id
pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Agent>> {
    let agent = state.agent_service.get_agent(&id).await?;
    Ok(Json(agent))
}

// PUT /api/agents/:id
pub async fn update_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAgentRequest>, JsonRejection>,
) -> ApiResult<Json<Agent>> {
    let Json(request) = payload?;
    let agent = state.agent_service.update_agent_status(&id, request).await?;
    Ok(Json(agent))
}

// GET /api/agents/:id/stats
pub async fn get_agent_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AgentStats>> {
    let stats = state.agent_service.get_agent_stats(&id).await?;
    Ok(Json(stats))
}
