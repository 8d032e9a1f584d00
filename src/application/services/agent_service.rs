use crate::{
    domain::entities::*,
    domain::errors::{DomainError, DomainResult},
    infrastructure::persistence::Store,
};

/// Read access to agents plus availability updates and per-agent stats.
#[derive(Clone)]
pub struct AgentService {
    store: Store,
}

impl AgentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list_agents(&self) -> DomainResult<Vec<Agent>> {
        let state = self.store.lock().await;
        Ok(state.agents().to_vec())
    }

    pub async fn get_agent(&self, agent_id: &str) -> DomainResult<Agent> {
        let state = self.store.lock().await;
        state
            .agent(agent_id)
            .cloned()
            .ok_or_else(DomainError::agent_not_found)
    }

    /// Snapshots already embedded in tickets keep the old status.
    pub async fn update_agent_status(
        &self,
        agent_id: &str,
        request: UpdateAgentRequest,
    ) -> DomainResult<Agent> {
        let mut state = self.store.lock().await;
        let agent = state
            .agent_mut(agent_id)
            .ok_or_else(DomainError::agent_not_found)?;

        if let Some(status) = request.status {
            tracing::info!(
                "Agent {} status changed from {} to {}",
                agent.id,
                agent.status,
                status
            );
            agent.status = status;
        }
        Ok(agent.clone())
    }

    pub async fn get_agent_stats(&self, agent_id: &str) -> DomainResult<AgentStats> {
        let state = self.store.lock().await;
        let agent = state
            .agent(agent_id)
            .ok_or_else(DomainError::agent_not_found)?;
        Ok(compute_agent_stats(agent, state.tickets()))
    }
}

/// `resolution_rate` weighs the historical resolved counter against the
/// current assignment load, rounded to a whole percentage.
pub fn compute_agent_stats(agent: &Agent, tickets: &[Ticket]) -> AgentStats {
    let owned: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.assignee_id() == Some(agent.id.as_str()))
        .collect();
    let with_status = |status: TicketStatus| owned.iter().filter(|t| t.status == status).count();

    let resolution_rate = if agent.tickets_resolved > 0 {
        let resolved = f64::from(agent.tickets_resolved);
        let assigned = f64::from(agent.tickets_assigned);
        (100.0 * resolved / (resolved + assigned)).round() as u32
    } else {
        0
    };

    AgentStats {
        agent_id: agent.id.clone(),
        agent_name: agent.name.clone(),
        total_assigned: agent.tickets_assigned,
        total_resolved: agent.tickets_resolved,
        open_tickets: with_status(TicketStatus::Open),
        in_progress: with_status(TicketStatus::InProgress),
        resolution_rate,
    }
}
