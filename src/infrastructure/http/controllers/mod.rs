pub mod agents;
pub mod dashboard;
pub mod tickets;
