use crate::{
    domain::entities::*,
    domain::errors::{DomainError, DomainResult},
    domain::ports::clock::Clock,
    infrastructure::persistence::{Store, StoreState},
};
use std::sync::Arc;

/// Service for ticket CRUD, notes and agent assignment.
///
/// Every operation runs inside a single store lock, so compound updates
/// (ticket reference plus agent counters) are never observed half-applied.
#[derive(Clone)]
pub struct TicketService {
    store: Store,
    clock: Arc<dyn Clock>,
}

impl TicketService {
    pub fn new(store: Store, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Tickets matching all given filters, in insertion order.
    pub async fn list_tickets(&self, filter: &TicketFilter) -> DomainResult<Vec<Ticket>> {
        let state = self.store.lock().await;
        let tickets: Vec<Ticket> = state
            .tickets()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        tracing::debug!(
            "Listed {} of {} tickets (status={:?}, priority={:?}, search={:?})",
            tickets.len(),
            state.tickets().len(),
            filter.status,
            filter.priority,
            filter.search
        );
        Ok(tickets)
    }

    pub async fn get_ticket(&self, ticket_id: &str) -> DomainResult<Ticket> {
        let state = self.store.lock().await;
        state
            .ticket(ticket_id)
            .cloned()
            .ok_or_else(DomainError::ticket_not_found)
    }

    pub async fn create_ticket(&self, request: CreateTicketRequest) -> DomainResult<Ticket> {
        request.validate().map_err(DomainError::ValidationError)?;

        let now = self.clock.now();
        let mut state = self.store.lock().await;
        let ticket = Ticket {
            id: state.next_ticket_id(),
            title: request.title.unwrap_or_default(),
            description: request.description.unwrap_or_default(),
            status: TicketStatus::Open,
            priority: request.priority.unwrap_or_default(),
            category: request
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            created_at: now,
            updated_at: now,
            assigned_to: None,
            customer_name: request.customer_name.unwrap_or_default(),
            customer_email: request.customer_email.unwrap_or_default(),
            notes: Vec::new(),
        };
        state.insert_ticket(ticket.clone());

        tracing::info!(
            "Created ticket {} ({}, {}) for {}",
            ticket.id,
            ticket.priority,
            ticket.category,
            ticket.customer_email
        );
        Ok(ticket)
    }

    /// Partial update. `description` is only replaced by a non-empty value.
    /// A present `assigned_to` (an empty id counts as `null`) goes through the same counter bookkeeping as
    /// [`TicketService::assign_ticket`] but leaves the status alone.
    pub async fn update_ticket(
        &self,
        ticket_id: &str,
        request: UpdateTicketRequest,
    ) -> DomainResult<Ticket> {
        let now = self.clock.now();
        let mut state = self.store.lock().await;

        if state.ticket(ticket_id).is_none() {
            return Err(DomainError::ticket_not_found());
        }

        if let Some(assignee) = &request.assigned_to {
            let target = assignee
                .as_ref()
                .map(|a| a.id.as_str())
                .filter(|id| !id.is_empty());
            move_assignment(&mut state, ticket_id, target)?;
        }

        let ticket = state
            .ticket_mut(ticket_id)
            .ok_or_else(DomainError::ticket_not_found)?;
        if let Some(status) = request.status {
            ticket.status = status;
        }
        if let Some(priority) = request.priority {
            ticket.priority = priority;
        }
        if let Some(description) = request.description.filter(|d| !d.is_empty()) {
            ticket.description = description;
        }
        ticket.touch(now);

        tracing::info!(
            "Updated ticket {} (status={}, priority={})",
            ticket.id,
            ticket.status,
            ticket.priority
        );
        Ok(ticket.clone())
    }

    pub async fn add_note(&self, ticket_id: &str, request: AddNoteRequest) -> DomainResult<Note> {
        let now = self.clock.now();
        let mut state = self.store.lock().await;

        if state.ticket(ticket_id).is_none() {
            return Err(DomainError::ticket_not_found());
        }

        let note = Note::new(state.next_note_id(now), request.content, request.author, now);
        let ticket = state
            .ticket_mut(ticket_id)
            .ok_or_else(DomainError::ticket_not_found)?;
        ticket.notes.push(note.clone());
        ticket.touch(now);

        tracing::info!(
            "Added note {} to ticket {} by {}",
            note.id,
            ticket_id,
            note.author
        );
        Ok(note)
    }

    /// Removes the ticket and releases its agent's assignment counter.
    pub async fn delete_ticket(&self, ticket_id: &str) -> DomainResult<Ticket> {
        let mut state = self.store.lock().await;
        let ticket = state
            .remove_ticket(ticket_id)
            .ok_or_else(DomainError::ticket_not_found)?;

        if let Some(agent_id) = ticket.assignee_id() {
            if let Some(agent) = state.agent_mut(agent_id) {
                agent.release_assignment();
            }
        }

        tracing::info!("Deleted ticket {}", ticket.id);
        Ok(ticket)
    }

    /// Assigns the ticket to `agent_id`, or unassigns it when `None`.
    ///
    /// Assigning sets the status to `assigned`; unassigning reopens it.
    /// Reassigning to the current agent releases and re-acquires the same
    /// counter, leaving it unchanged.
    pub async fn assign_ticket(
        &self,
        ticket_id: &str,
        agent_id: Option<&str>,
    ) -> DomainResult<Ticket> {
        let agent_id = agent_id.filter(|id| !id.is_empty());
        let now = self.clock.now();
        let mut state = self.store.lock().await;

        let previous = move_assignment(&mut state, ticket_id, agent_id)?;

        let ticket = state
            .ticket_mut(ticket_id)
            .ok_or_else(DomainError::ticket_not_found)?;
        ticket.status = if agent_id.is_some() {
            TicketStatus::Assigned
        } else {
            TicketStatus::Open
        };
        ticket.touch(now);

        tracing::info!(
            "Ticket {} assignment changed from {:?} to {:?}",
            ticket_id,
            previous,
            agent_id
        );
        Ok(ticket.clone())
    }
}

/// Points the ticket at `target` (or nobody) and keeps agent counters in step.
///
/// All lookups happen before any write, so a missing ticket or agent leaves
/// the state untouched. Returns the id of the previous assignee.
fn move_assignment(
    state: &mut StoreState,
    ticket_id: &str,
    target: Option<&str>,
) -> DomainResult<Option<String>> {
    let previous = state
        .ticket(ticket_id)
        .ok_or_else(DomainError::ticket_not_found)?
        .assignee_id()
        .map(str::to_string);

    if let Some(agent_id) = target {
        if state.agent(agent_id).is_none() {
            return Err(DomainError::agent_not_found());
        }
    }

    if let Some(prev) = previous.as_deref() {
        if let Some(agent) = state.agent_mut(prev) {
            agent.release_assignment();
        }
    }

    let snapshot = match target {
        Some(agent_id) => {
            let agent = state
                .agent_mut(agent_id)
                .ok_or_else(DomainError::agent_not_found)?;
            agent.record_assignment();
            Some(agent.snapshot())
        }
        None => None,
    };

    let ticket = state
        .ticket_mut(ticket_id)
        .ok_or_else(DomainError::ticket_not_found)?;
    ticket.assigned_to = snapshot;

    Ok(previous)
}
