use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    Offline,
    Busy,
    Away,
}

impl Default for AgentStatus {
    fn default() -> Self {
        AgentStatus::Offline
    }
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Online => "online",
            AgentStatus::Offline => "offline",
            AgentStatus::Busy => "busy",
            AgentStatus::Away => "away",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(AgentStatus::Online),
            "offline" => Ok(AgentStatus::Offline),
            "busy" => Ok(AgentStatus::Busy),
            "away" => Ok(AgentStatus::Away),
            _ => Err(format!("Invalid agent status: {}", s)),
        }
    }
}

/// A support-team member tickets can be assigned to.
///
/// `tickets_assigned` is a live counter maintained by the assignment
/// bookkeeping, not a count derived from the ticket collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: AgentStatus,
    pub tickets_assigned: u32,
    pub tickets_resolved: u32,
    pub avatar: String,
}

impl Agent {
    pub fn record_assignment(&mut self) {
        self.tickets_assigned += 1;
    }

    /// Never drops below zero, even when seeded counters disagree with the tickets.
    pub fn release_assignment(&mut self) {
        self.tickets_assigned = self.tickets_assigned.saturating_sub(1);
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot::from(self)
    }
}

/// Denormalized copy of an agent embedded in a ticket at assignment time.
/// It is not refreshed when the agent changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: AgentStatus,
    pub avatar: String,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id.clone(),
            name: agent.name.clone(),
            email: agent.email.clone(),
            status: agent.status,
            avatar: agent.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAgentRequest {
    pub status: Option<AgentStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStats {
    pub agent_id: String,
    pub agent_name: String,
    pub total_assigned: u32,
    pub total_resolved: u32,
    pub open_tickets: usize,
    pub in_progress: usize,
    pub resolution_rate: u32,
}
