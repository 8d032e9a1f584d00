mod helpers;

use deskline::domain::entities::*;
use deskline::domain::errors::DomainError;
use helpers::*;

#[tokio::test]
async fn test_list_agents_in_seed_order() {
    let ctx = setup_seeded();
    let agents = ctx.agents.list_agents().await.unwrap();
    let ids: Vec<&str> = agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["agent-1", "agent-2", "agent-3", "agent-4"]);
}

#[tokio::test]
async fn test_get_agent() {
    let ctx = setup_seeded();
    let agent = ctx.agents.get_agent("agent-3").await.unwrap();
    assert_eq!(agent.name, "Mike Davis");
    assert_eq!(agent.status, AgentStatus::Busy);
    assert_eq!(agent.tickets_assigned, 8);
    assert_eq!(agent.tickets_resolved, 128);

    let err = ctx.agents.get_agent("agent-0").await.unwrap_err();
    assert_eq!(err, DomainError::agent_not_found());
}

#[tokio::test]
async fn test_update_agent_status() {
    let ctx = setup_seeded();

    let agent = ctx
        .agents
        .update_agent_status(
            "agent-4",
            UpdateAgentRequest {
                status: Some(AgentStatus::Online),
            },
        )
        .await
        .unwrap();
    assert_eq!(agent.status, AgentStatus::Online);
    assert_eq!(
        ctx.agents.get_agent("agent-4").await.unwrap().status,
        AgentStatus::Online
    );

    // Counters are untouched by a status change
    assert_eq!(agent.tickets_assigned, 0);
    assert_eq!(agent.tickets_resolved, 134);
}

#[tokio::test]
async fn test_update_agent_without_status_is_noop() {
    let ctx = setup_seeded();
    let before = ctx.agents.get_agent("agent-1").await.unwrap();
    let after = ctx
        .agents
        .update_agent_status("agent-1", UpdateAgentRequest::default())
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_unknown_agent() {
    let ctx = setup_seeded();
    let err = ctx
        .agents
        .update_agent_status(
            "agent-77",
            UpdateAgentRequest {
                status: Some(AgentStatus::Away),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::agent_not_found());
}

#[tokio::test]
async fn test_agent_stats_scan_assigned_tickets() {
    let ctx = setup_seeded();

    let stats = ctx.agents.get_agent_stats("agent-3").await.unwrap();
    assert_eq!(stats.agent_id, "agent-3");
    assert_eq!(stats.agent_name, "Mike Davis");
    assert_eq!(stats.total_assigned, 8);
    assert_eq!(stats.total_resolved, 128);
    assert_eq!(stats.open_tickets, 0);
    assert_eq!(stats.in_progress, 1);
    // 128 / (128 + 8) = 94.1..
    assert_eq!(stats.resolution_rate, 94);
}

#[tokio::test]
async fn test_agent_stats_follow_assignment() {
    let ctx = setup_seeded();

    // Assigning sets status to assigned, which is neither open nor in progress
    ctx.tickets
        .assign_ticket("TK-006", Some("agent-4"))
        .await
        .unwrap();
    ctx.tickets
        .update_ticket(
            "TK-006",
            UpdateTicketRequest {
                status: Some(TicketStatus::InProgress),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stats = ctx.agents.get_agent_stats("agent-4").await.unwrap();
    assert_eq!(stats.total_assigned, 1);
    assert_eq!(stats.in_progress, 1);
    // 134 / (134 + 1) = 99.2..
    assert_eq!(stats.resolution_rate, 99);
}

#[tokio::test]
async fn test_agent_stats_unknown_agent() {
    let ctx = setup_seeded();
    let err = ctx.agents.get_agent_stats("ghost").await.unwrap_err();
    assert_eq!(err, DomainError::agent_not_found());
}
