//! Sample data loaded at startup when seeding is enabled.

use crate::domain::entities::{
    Agent, AgentSnapshot, AgentStatus, Ticket, TicketPriority, TicketStatus,
};
use chrono::{DateTime, TimeZone, Utc};

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn agent(
    id: &str,
    name: &str,
    email: &str,
    status: AgentStatus,
    assigned: u32,
    resolved: u32,
    avatar: &str,
) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        status,
        tickets_assigned: assigned,
        tickets_resolved: resolved,
        avatar: avatar.to_string(),
    }
}

pub fn sample_agents() -> Vec<Agent> {
    vec![
        agent("agent-1", "John Smith", "john@helpdesk.com", AgentStatus::Online, 5, 142, "👨‍💼"),
        agent("agent-2", "Sarah Johnson", "sarah@helpdesk.com", AgentStatus::Online, 4, 156, "👩‍💼"),
        agent("agent-3", "Mike Davis", "mike@helpdesk.com", AgentStatus::Busy, 8, 128, "👨‍💼"),
        agent("agent-4", "Emma Wilson", "emma@helpdesk.com", AgentStatus::Away, 0, 134, "👩‍💼"),
    ]
}

struct SeedTicket {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TicketStatus,
    priority: TicketPriority,
    category: &'static str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    assignee: Option<&'static str>,
    customer_name: &'static str,
    customer_email: &'static str,
}

pub fn sample_tickets() -> Vec<Ticket> {
    let agents = sample_agents();
    let snapshot = |id: &str| -> Option<AgentSnapshot> {
        agents.iter().find(|a| a.id == id).map(AgentSnapshot::from)
    };

    let seeds = [
        SeedTicket {
            id: "TK-001",
            title: "Login issue with two-factor authentication",
            description: "Cannot login to account even with correct credentials. Two-factor authentication code is not being sent.",
            status: TicketStatus::Open,
            priority: TicketPriority::High,
            category: "Account",
            created_at: at(2, 12, 10, 30),
            updated_at: at(2, 12, 10, 30),
            assignee: None,
            customer_name: "Alex Chen",
            customer_email: "alex@customer.com",
        },
        SeedTicket {
            id: "TK-002",
            title: "Payment processing error",
            description: "Getting error code 403 when trying to process payment. Order ID: ORD-12345",
            status: TicketStatus::Assigned,
            priority: TicketPriority::Urgent,
            category: "Billing",
            created_at: at(2, 12, 9, 15),
            updated_at: at(2, 12, 11, 0),
            assignee: Some("agent-1"),
            customer_name: "Maria Rodriguez",
            customer_email: "maria@customer.com",
        },
        SeedTicket {
            id: "TK-003",
            title: "Feature request: Dark mode",
            description: "Would like to have a dark mode option in the application for better usability at night.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::Low,
            category: "Feature Request",
            created_at: at(2, 11, 14, 20),
            updated_at: at(2, 12, 8, 0),
            assignee: Some("agent-2"),
            customer_name: "James Patterson",
            customer_email: "james@customer.com",
        },
        SeedTicket {
            id: "TK-004",
            title: "Account deletion request",
            description: "Customer wants to permanently delete their account and all associated data.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::Medium,
            category: "Account",
            created_at: at(2, 10, 16, 45),
            updated_at: at(2, 12, 7, 30),
            assignee: Some("agent-3"),
            customer_name: "David Thompson",
            customer_email: "david@customer.com",
        },
        SeedTicket {
            id: "TK-005",
            title: "Refund confirmation not received",
            description: "Processed refund on 2026-02-08 but customer has not received confirmation email.",
            status: TicketStatus::Resolved,
            priority: TicketPriority::High,
            category: "Billing",
            created_at: at(2, 8, 11, 0),
            updated_at: at(2, 12, 12, 0),
            assignee: Some("agent-1"),
            customer_name: "Lisa Anderson",
            customer_email: "lisa@customer.com",
        },
        SeedTicket {
            id: "TK-006",
            title: "Mobile app crashes on startup",
            description: "Application crashes immediately upon launching on iOS 18. Verified on iPhone 15 Pro.",
            status: TicketStatus::Open,
            priority: TicketPriority::Urgent,
            category: "Bug",
            created_at: at(2, 12, 12, 30),
            updated_at: at(2, 12, 12, 30),
            assignee: None,
            customer_name: "Robert Kumar",
            customer_email: "robert@customer.com",
        },
    ];

    seeds
        .into_iter()
        .map(|s| Ticket {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            status: s.status,
            priority: s.priority,
            category: s.category.to_string(),
            created_at: s.created_at,
            updated_at: s.updated_at,
            assigned_to: s.assignee.and_then(|id| snapshot(id)),
            customer_name: s.customer_name.to_string(),
            customer_email: s.customer_email.to_string(),
            notes: Vec::new(),
        })
        .collect()
}
