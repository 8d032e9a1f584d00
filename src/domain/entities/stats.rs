use serde::{Deserialize, Serialize};

/// Placeholder reported by the dashboard; resolution time is not tracked.
pub const AVERAGE_RESOLUTION_TIME_HOURS: u32 = 18;

/// Tickets a single agent is expected to carry at full load.
pub const AGENT_TICKET_CEILING: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tickets: usize,
    pub open_tickets: usize,
    pub pending_tickets: usize,
    pub resolved_tickets: usize,
    pub average_resolution_time: u32,
    /// Percentage of combined agent ceiling in use; may exceed 100.
    pub agent_capacity: u32,
}
