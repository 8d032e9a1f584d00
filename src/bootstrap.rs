use crate::application::services::{AgentService, DashboardService, TicketService};
use crate::config::Config;
use crate::domain::ports::clock::Clock;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Store;
use crate::infrastructure::runtime::SystemClock;
use std::sync::Arc;

/// Wires services around a shared store and the system clock.
pub async fn build_app_state(config: &Config) -> AppState {
    let store = if config.seed_sample_data {
        Store::seeded()
    } else {
        Store::new()
    };

    {
        let state = store.lock().await;
        tracing::info!(
            "Store initialized with {} tickets and {} agents",
            state.tickets().len(),
            state.agents().len()
        );
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    app_state(store, clock)
}

pub fn app_state(store: Store, clock: Arc<dyn Clock>) -> AppState {
    AppState {
        ticket_service: TicketService::new(store.clone(), clock),
        agent_service: AgentService::new(store.clone()),
        dashboard_service: DashboardService::new(store),
    }
}
