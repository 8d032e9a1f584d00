use crate::domain::entities::{Agent, Ticket};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

const TICKET_ID_PREFIX: &str = "TK-";

/// Handle to the process-wide ticket and agent collections.
///
/// Cloning shares the same state. Callers hold the guard returned by
/// [`Store::lock`] for the whole of an operation, which makes compound
/// mutations such as reassignment atomic under concurrent requests.
#[derive(Clone, Default)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(tickets: Vec<Ticket>, agents: Vec<Agent>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::with_records(tickets, agents))),
        }
    }

    /// Store preloaded with the sample tickets and agents.
    pub fn seeded() -> Self {
        Self::with_records(super::seed::sample_tickets(), super::seed::sample_agents())
    }

    pub async fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().await
    }
}

#[derive(Debug, Default)]
pub struct StoreState {
    tickets: Vec<Ticket>,
    agents: Vec<Agent>,
    last_ticket_number: u64,
    last_note_millis: i64,
}

impl StoreState {
    pub fn with_records(tickets: Vec<Ticket>, agents: Vec<Agent>) -> Self {
        let last_ticket_number = tickets
            .iter()
            .filter_map(|t| ticket_number(&t.id))
            .max()
            .unwrap_or(0);
        Self {
            tickets,
            agents,
            last_ticket_number,
            last_note_millis: 0,
        }
    }

    // Tickets

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn ticket_mut(&mut self, id: &str) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.id == id)
    }

    pub fn insert_ticket(&mut self, ticket: Ticket) {
        if let Some(n) = ticket_number(&ticket.id) {
            self.last_ticket_number = self.last_ticket_number.max(n);
        }
        self.tickets.push(ticket);
    }

    pub fn remove_ticket(&mut self, id: &str) -> Option<Ticket> {
        let index = self.tickets.iter().position(|t| t.id == id)?;
        Some(self.tickets.remove(index))
    }

    /// Issues the next `TK-NNN` id. Numbers are never handed out twice,
    /// even after the ticket that held one is deleted.
    pub fn next_ticket_id(&mut self) -> String {
        self.last_ticket_number += 1;
        format!("{}{:03}", TICKET_ID_PREFIX, self.last_ticket_number)
    }

    /// Timestamp-derived note id, bumped past the previous one when two
    /// notes land in the same millisecond.
    pub fn next_note_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis().max(self.last_note_millis + 1);
        self.last_note_millis = millis;
        format!("NOTE-{}", millis)
    }

    // Agents

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn agent_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }
}

fn ticket_number(id: &str) -> Option<u64> {
    id.strip_prefix(TICKET_ID_PREFIX)?.parse().ok()
}
