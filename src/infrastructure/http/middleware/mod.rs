pub mod error;
pub mod request_metrics;

pub use error::{ApiError, ApiResult};
pub use request_metrics::track_request_metrics;

use crate::application::services::{AgentService, DashboardService, TicketService};

#[derive(Clone)]
pub struct AppState {
    pub ticket_service: TicketService,
    pub agent_service: AgentService,
    pub dashboard_service: DashboardService,
}
