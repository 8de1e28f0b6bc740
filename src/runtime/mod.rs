pub mod clock;
pub mod logging;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::init_tracing;
