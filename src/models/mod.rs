mod plan;
mod recipe;
mod stock;

pub use plan::{PlanSummary, PlanViews, RequirementView, Selection, ShortageView};
pub use recipe::{Recipe, RecipeBook};
pub use stock::StockLedger;
