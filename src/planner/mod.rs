pub mod calculations;
pub mod constants;

pub use calculations::{compute_requirements, compute_shortages, compute_views, deduct};
pub use constants::*;
