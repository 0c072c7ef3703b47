mod persistence;
mod session;

pub use persistence::{load_recipes, load_stock, save_stock};
pub use session::{
    parse_servings, FinalizeOutcome, FinalizeReport, PlanningSession, StockDeduction,
};
