#![allow(unused_imports)]
pub mod http_helpers;
pub mod test_store;

pub use http_helpers::*;
pub use test_store::*;
