use crate::{
    domain::entities::*, domain::errors::DomainResult, infrastructure::persistence::Store,
};

/// Computes dashboard statistics from the current store contents.
/// Nothing is cached; every call reflects the latest counters.
#[derive(Clone)]
pub struct DashboardService {
    store: Store,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn get_stats(&self) -> DomainResult<DashboardStats> {
        let state = self.store.lock().await;
        Ok(compute_dashboard_stats(state.tickets(), state.agents()))
    }
}

pub fn compute_dashboard_stats(tickets: &[Ticket], agents: &[Agent]) -> DashboardStats {
    let count = |pred: fn(&TicketStatus) -> bool| tickets.iter().filter(|t| pred(&t.status)).count();

    DashboardStats {
        total_tickets: tickets.len(),
        open_tickets: count(|s| *s == TicketStatus::Open),
        pending_tickets: count(TicketStatus::is_pending),
        resolved_tickets: count(TicketStatus::is_resolved),
        average_resolution_time: AVERAGE_RESOLUTION_TIME_HOURS,
        agent_capacity: agent_capacity(agents),
    }
}

/// Share of the combined per-agent ceiling in use. Not clamped; zero agents
/// report 0.
fn agent_capacity(agents: &[Agent]) -> u32 {
    if agents.is_empty() {
        return 0;
    }
    let assigned: u64 = agents.iter().map(|a| u64::from(a.tickets_assigned)).sum();
    let ceiling = agents.len() as f64 * f64::from(AGENT_TICKET_CEILING);
    (100.0 * assigned as f64 / ceiling).round() as u32
}
