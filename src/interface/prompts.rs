use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::export::ExportFormat;
use crate::planner::constants::{FUZZY_MATCH_THRESHOLD, MAX_FUZZY_SUGGESTIONS};
use crate::state::parse_servings;

/// Outcome of matching typed text against dish names.
#[derive(Debug, Clone, PartialEq)]
pub enum DishMatch {
    Exact(String),
    Suggestions(Vec<String>),
    NoMatch,
}

/// Match user text to a dish: exact (case-insensitive) first, then fuzzy.
///
/// Suggestions are ordered by descending similarity.
pub fn match_dish(input: &str, candidates: &[&str]) -> DishMatch {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return DishMatch::NoMatch;
    }

    if let Some(exact) = candidates.iter().find(|c| c.to_lowercase() == wanted) {
        return DishMatch::Exact(exact.to_string());
    }

    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|c| (*c, jaro_winkler(&c.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if scored.is_empty() {
        return DishMatch::NoMatch;
    }

    DishMatch::Suggestions(
        scored
            .into_iter()
            .take(MAX_FUZZY_SUGGESTIONS)
            .map(|(name, _)| name.to_string())
            .collect(),
    )
}

/// Prompt for a dish name among `candidates`, with fuzzy suggestions.
///
/// Returns `None` when the user enters nothing or rejects every suggestion.
pub fn prompt_dish(prompt: &str, candidates: &[&str]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    if input.trim().is_empty() {
        return Ok(None);
    }

    match match_dish(&input, candidates) {
        DishMatch::Exact(name) => Ok(Some(name)),
        DishMatch::NoMatch => {
            println!("No matching dish found for '{}'", input.trim());
            Ok(None)
        }
        DishMatch::Suggestions(options) if options.len() == 1 => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", options[0]))
                .default(true)
                .interact()?;
            Ok(confirm.then(|| options[0].clone()))
        }
        DishMatch::Suggestions(options) => {
            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            Ok(options.get(selection).cloned())
        }
    }
}

/// Pick one of a fixed list of dishes.
pub fn prompt_pick_dish(prompt: &str, dishes: &[&str]) -> Result<Option<String>> {
    if dishes.is_empty() {
        return Ok(None);
    }

    let selection = Select::new()
        .with_prompt(prompt)
        .items(dishes)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| dishes[i].to_string()))
}

/// Prompt for a serving count. Invalid text normalizes to 0.
pub fn prompt_servings(dish: &str, current: u32) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(format!("Servings of {} (0 removes)", dish))
        .default(current.to_string())
        .interact_text()?;

    Ok(parse_servings(&input))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for an export format.
pub fn prompt_export_format() -> Result<ExportFormat> {
    let formats = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Text];
    let labels = ["CSV shopping list", "JSON document", "Text purchase order"];

    let selection = Select::new()
        .with_prompt("Export format")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(formats.get(selection).copied().unwrap_or_default())
}

/// Prompt for an output path.
pub fn prompt_export_path(default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Write to")
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Actions offered by the interactive planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDish,
    SetServings,
    AddServing,
    RemoveServing,
    RemoveDish,
    Show,
    Export,
    Finalize,
    Quit,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::AddDish,
        Action::SetServings,
        Action::AddServing,
        Action::RemoveServing,
        Action::RemoveDish,
        Action::Show,
        Action::Export,
        Action::Finalize,
        Action::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddDish => "Add dish",
            Action::SetServings => "Set servings",
            Action::AddServing => "+1 serving",
            Action::RemoveServing => "-1 serving",
            Action::RemoveDish => "Remove dish",
            Action::Show => "Show plan",
            Action::Export => "Export shopping list",
            Action::Finalize => "Finalize (deduct stock)",
            Action::Quit => "Quit",
        }
    }
}

/// Prompt for the next planner action. Escape quits.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection
        .and_then(|i| Action::ALL.get(i).copied())
        .unwrap_or(Action::Quit))
}
