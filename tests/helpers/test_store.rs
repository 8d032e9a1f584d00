#![allow(dead_code)]
use chrono::{DateTime, Duration, TimeZone, Utc};
use deskline::application::services::{AgentService, DashboardService, TicketService};
use deskline::domain::entities::*;
use deskline::infrastructure::persistence::{seed, Store};
use deskline::infrastructure::runtime::ManualClock;
use std::sync::Arc;

pub struct TestContext {
    pub store: Store,
    pub clock: Arc<ManualClock>,
    pub tickets: TicketService,
    pub agents: AgentService,
    pub dashboard: DashboardService,
}

pub fn test_start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

/// Fresh services over the given store, sharing a manual clock
pub fn setup_with_store(store: Store) -> TestContext {
    let clock = Arc::new(ManualClock::new(test_start_time()));
    TestContext {
        tickets: TicketService::new(store.clone(), clock.clone()),
        agents: AgentService::new(store.clone()),
        dashboard: DashboardService::new(store.clone()),
        store,
        clock,
    }
}

/// Sample tickets and agents, as loaded at startup
pub fn setup_seeded() -> TestContext {
    setup_with_store(Store::seeded())
}

/// Sample agents, no tickets
pub fn setup_agents_only() -> TestContext {
    setup_with_store(Store::with_records(Vec::new(), seed::sample_agents()))
}

impl TestContext {
    pub fn tick(&self) {
        self.clock.advance(Duration::seconds(1));
    }

    pub fn clock_now(&self) -> DateTime<Utc> {
        use deskline::domain::ports::clock::Clock;
        self.clock.now()
    }

    pub async fn assigned_count(&self, agent_id: &str) -> u32 {
        self.store
            .lock()
            .await
            .agent(agent_id)
            .expect("Agent not found")
            .tickets_assigned
    }

    pub async fn ticket_count(&self) -> usize {
        self.store.lock().await.tickets().len()
    }

    pub async fn create_test_ticket(&self, title: &str, customer_name: &str) -> Ticket {
        self.tickets
            .create_ticket(create_request(title, customer_name, "customer@example.com"))
            .await
            .expect("Failed to create ticket")
    }
}

pub fn create_request(title: &str, customer_name: &str, customer_email: &str) -> CreateTicketRequest {
    CreateTicketRequest {
        title: Some(title.to_string()),
        description: None,
        priority: None,
        category: None,
        customer_name: Some(customer_name.to_string()),
        customer_email: Some(customer_email.to_string()),
    }
}
