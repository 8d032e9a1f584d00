pub mod clock;

pub use clock::{ManualClock, SystemClock};
