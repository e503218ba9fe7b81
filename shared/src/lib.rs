pub mod models {
    pub mod contest;
    pub mod problem;
}

pub mod dto {
    pub mod contest;
    pub mod common;
}

pub mod clock;
pub mod error;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{contest::Contest, problem::Problem};

// Re-export DTOs
pub use dto::{
    contest::{contests_from_wire, parse_instant, ContestDto, ContestListResponse},
    common::ErrorResponse,
};

pub use clock::{
    Clock, ContestBuckets, ContestClock, ContestDisplay, ContestPhase, FeaturedSelection,
    FixedClock, SystemClock, TICK_INTERVAL,
};
