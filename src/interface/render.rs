use crate::models::{PlanSummary, RecipeBook, StockLedger};
use crate::planner::constants::format_quantity;
use crate::state::{FinalizeOutcome, PlanningSession};

/// Display width of the longest name, counted in characters.
fn column_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(10)
}

/// Display the planned dishes with serving counts.
pub fn display_selection(session: &PlanningSession) {
    println!();
    println!("=== Selected Dishes ===");
    println!();

    let selection = session.selection();
    if selection.is_empty() {
        println!("No dishes selected. Add a dish to start planning.");
        return;
    }

    let width = column_width(selection.keys().map(String::as_str));
    for (dish, servings) in selection {
        println!("  {:<width$}  x {:>4}", dish, servings, width = width);
    }
}

/// Display every required material alongside current stock.
pub fn display_requirements(session: &PlanningSession, unit: &str) {
    println!();
    println!("=== Material Requirements ===");
    println!();

    let requirement = &session.views().requirement;
    if requirement.is_empty() {
        println!("Select dishes to see material requirements.");
        return;
    }

    let width = column_width(requirement.iter().map(|(m, _)| m));
    for (material, required) in requirement.iter() {
        println!(
            "  {:<width$}  {:>8} {}  (stock: {} {})",
            material,
            format_quantity(required),
            unit,
            format_quantity(session.stock().available(material)),
            unit,
            width = width
        );
    }
}

/// Display the shortage list.
pub fn display_shortages(session: &PlanningSession, unit: &str) {
    println!();
    println!("=== Shopping List ===");
    println!();

    let shortage = &session.views().shortage;
    if shortage.is_empty() {
        println!("All materials in stock! No additional purchase needed.");
        return;
    }

    println!("{} items to purchase", shortage.len());
    println!();

    let width = column_width(shortage.iter().map(|(m, _)| m));
    for (material, deficit) in shortage.iter() {
        println!(
            "  {:<width$}  {:>8} {}  need to buy",
            material,
            format_quantity(deficit),
            unit,
            width = width
        );
    }
}

/// Display the headline figures.
pub fn display_summary(summary: &PlanSummary) {
    println!();
    println!("--- Summary ---");
    println!("Materials needed: {}", summary.materials_needed);
    println!("Available in stock: {}", summary.materials_in_stock);
    println!("Need to purchase: {}", summary.items_to_purchase);
    println!("Total servings: {}", summary.total_servings);
    println!();
}

/// Display the full plan: selection, requirements, shortages and summary.
pub fn display_plan(session: &PlanningSession, unit: &str) {
    display_selection(session);
    display_requirements(session, unit);
    display_shortages(session, unit);
    display_summary(&session.summary());
}

/// Display the recipe table.
pub fn display_recipes(recipes: &RecipeBook, unit: &str) {
    if recipes.is_empty() {
        println!("Recipes: (none)");
        return;
    }

    println!();
    println!("=== Recipes ({} dishes, {} per serving) ===", recipes.len(), unit);

    for (dish, recipe) in recipes.iter() {
        println!();
        println!("  {}", dish);
        for (material, per_serving) in recipe {
            println!("    {:<20} {:>8}", material, format!("{:.3}", per_serving));
        }
    }

    println!();
}

/// Display the stock ledger.
pub fn display_stock(stock: &StockLedger, unit: &str) {
    if stock.is_empty() {
        println!("Stock: (none)");
        return;
    }

    println!();
    println!("=== Stock ({} materials) ===", stock.len());
    println!();

    let width = column_width(stock.iter().map(|(m, _)| m));
    for (material, qty) in stock.iter() {
        println!(
            "  {:<width$}  {:>8} {}",
            material,
            format_quantity(qty),
            unit,
            width = width
        );
    }

    println!();
}

/// Acknowledge a finalize attempt.
pub fn display_finalize_outcome(outcome: &FinalizeOutcome, unit: &str) {
    match outcome {
        FinalizeOutcome::NothingToFinalize => {
            println!("Nothing to finalize: no materials are required by the current plan.");
        }
        FinalizeOutcome::Applied(report) => {
            println!();
            println!("Stock updated for {} dishes.", report.committed.len());

            for d in &report.deductions {
                println!(
                    "  {:<20} {:>8} -> {:>8} {}",
                    d.material,
                    format_quantity(d.before),
                    format_quantity(d.after),
                    unit
                );
            }

            if !report.untracked.is_empty() {
                println!(
                    "Not tracked in stock (unchanged): {}",
                    report.untracked.join(", ")
                );
            }

            println!("Selection cleared.");
            println!();
        }
    }
}
