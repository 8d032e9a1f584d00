use crate::{
    domain::entities::DashboardStats,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{extract::State, Json};

// GET /api/dashboard/stats
pub async fn get_dashboard_stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let stats = state.dashboard_service.get_stats().await?;
    Ok(Json(stats))
}
