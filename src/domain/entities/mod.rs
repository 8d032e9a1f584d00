pub mod agent;
pub mod stats;
pub mod ticket;

pub use agent::*;
pub use stats::*;
pub use ticket::*;
