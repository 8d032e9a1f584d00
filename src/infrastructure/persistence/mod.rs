pub mod seed;
mod store;

pub use store::{Store, StoreState};
