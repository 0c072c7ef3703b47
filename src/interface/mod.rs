pub mod prompts;
pub mod render;

pub use prompts::{
    match_dish, prompt_action, prompt_dish, prompt_export_format, prompt_export_path,
    prompt_pick_dish, prompt_servings, prompt_yes_no, Action, DishMatch,
};
pub use render::{
    display_finalize_outcome, display_plan, display_recipes, display_requirements,
    display_selection, display_shortages, display_stock, display_summary,
};
