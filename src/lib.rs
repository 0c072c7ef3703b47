pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{PlanViews, RecipeBook, Selection, StockLedger};
pub use state::{FinalizeOutcome, PlanningSession};
