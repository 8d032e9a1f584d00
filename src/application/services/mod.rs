pub mod agent_service;
pub mod dashboard_service;
pub mod ticket_service;

pub use agent_service::AgentService;
pub use dashboard_service::DashboardService;
pub use ticket_service::TicketService;
