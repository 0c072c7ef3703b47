use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use catering_planner_rs::cli::{save_target, Cli, Command};
use catering_planner_rs::error::Result;
use catering_planner_rs::export::{export_to_path, ExportFormat, PurchaseDocument};
use catering_planner_rs::interface::{
    display_finalize_outcome, display_plan, display_recipes, display_selection, display_stock,
    prompt_action, prompt_dish, prompt_export_format, prompt_export_path, prompt_pick_dish,
    prompt_servings, prompt_yes_no, Action,
};
use catering_planner_rs::planner::{reference_recipe_book, reference_stock_ledger};
use catering_planner_rs::state::{load_recipes, load_stock, save_stock, PlanningSession};
use catering_planner_rs::{RecipeBook, StockLedger};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let recipes = read_recipes(cli.recipes.as_deref())?;
    let stock = read_stock(cli.stock.as_deref())?;
    let session = PlanningSession::new(recipes, stock);

    let command = cli.command.unwrap_or_default();
    match command {
        Command::Plan => cmd_plan(session, cli.stock.as_deref(), &cli.unit),
        Command::Dishes => {
            display_recipes(session.recipes(), &cli.unit);
            Ok(())
        }
        Command::Stock => {
            display_stock(session.stock(), &cli.unit);
            Ok(())
        }
        Command::Shortage {
            dishes,
            export,
            format,
        } => cmd_shortage(session, &dishes, export, format, &cli.unit),
        Command::Finalize { dishes, save } => {
            cmd_finalize(session, &dishes, save, cli.stock.as_deref(), &cli.unit)
        }
    }
}

/// Log to stderr so exported output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,catering_planner_rs=debug,catering_planner=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_recipes(path: Option<&Path>) -> Result<RecipeBook> {
    match path {
        Some(p) => load_recipes(p),
        None => {
            debug!("no recipe file given; using sample menu");
            reference_recipe_book()
        }
    }
}

fn read_stock(path: Option<&Path>) -> Result<StockLedger> {
    match path {
        Some(p) => load_stock(p),
        None => {
            debug!("no stock file given; using sample stock");
            reference_stock_ledger()
        }
    }
}

/// Compute and show requirements for a menu, optionally exporting it.
fn cmd_shortage(
    mut session: PlanningSession,
    dishes: &[(String, i64)],
    export: Option<PathBuf>,
    format: ExportFormat,
    unit: &str,
) -> Result<()> {
    session.apply_servings(dishes)?;
    display_plan(&session, unit);

    if let Some(path) = export {
        let document = PurchaseDocument::from_session(&session, unit);
        let exporter = format.exporter();
        export_to_path(exporter.as_ref(), &document, &path)?;
        println!("Shopping list written to {}", path.display());
    }

    Ok(())
}

/// Deduct a menu's requirements from stock.
fn cmd_finalize(
    mut session: PlanningSession,
    dishes: &[(String, i64)],
    save: bool,
    stock_path: Option<&Path>,
    unit: &str,
) -> Result<()> {
    let save_to = save_target(save, stock_path)?;

    session.apply_servings(dishes)?;
    display_plan(&session, unit);

    let outcome = session.finalize();
    display_finalize_outcome(&outcome, unit);

    if let (true, Some(path)) = (outcome.is_applied(), save_to) {
        save_stock(path, session.stock())?;
        println!("Stock saved to {}", path.display());
    }

    Ok(())
}

/// Interactive planning loop.
fn cmd_plan(mut session: PlanningSession, stock_path: Option<&Path>, unit: &str) -> Result<()> {
    println!(
        "Loaded {} dishes and {} stocked materials",
        session.recipes().len(),
        session.stock().len()
    );

    loop {
        match prompt_action()? {
            Action::AddDish => {
                let available = session.available_dishes();
                if available.is_empty() {
                    println!("All dishes are already selected.");
                    continue;
                }
                if let Some(dish) = prompt_dish("Dish to add", &available)? {
                    if session.add(&dish) {
                        println!("Added: {}", dish);
                    }
                }
                display_selection(&session);
            }
            Action::SetServings => {
                if let Some(dish) = pick_selected(&session, "Set servings for")? {
                    let current = session.servings(&dish).unwrap_or(0);
                    let servings = prompt_servings(&dish, current)?;
                    session.set_quantity(&dish, servings);
                    display_plan(&session, unit);
                }
            }
            Action::AddServing => {
                if let Some(dish) = pick_selected(&session, "Add a serving to")? {
                    session.increment(&dish);
                    display_selection(&session);
                }
            }
            Action::RemoveServing => {
                if let Some(dish) = pick_selected(&session, "Remove a serving from")? {
                    session.decrement(&dish);
                    display_selection(&session);
                }
            }
            Action::RemoveDish => {
                if let Some(dish) = pick_selected(&session, "Remove")? {
                    session.remove(&dish);
                    display_selection(&session);
                }
            }
            Action::Show => display_plan(&session, unit),
            Action::Export => export_interactive(&session, unit)?,
            Action::Finalize => finalize_interactive(&mut session, stock_path, unit)?,
            Action::Quit => break,
        }
    }

    Ok(())
}

fn pick_selected(session: &PlanningSession, prompt: &str) -> Result<Option<String>> {
    let selected: Vec<&str> = session.selection().keys().map(String::as_str).collect();
    if selected.is_empty() {
        println!("No dishes selected.");
        return Ok(None);
    }
    prompt_pick_dish(prompt, &selected)
}

/// Export the current plan. A failed export is reported and planning continues.
fn export_interactive(session: &PlanningSession, unit: &str) -> Result<()> {
    if session.views().requirement.is_empty() {
        println!("Select dishes before exporting.");
        return Ok(());
    }
    if session.views().shortage.is_empty() {
        println!("All materials in stock; the export will list no purchases.");
    }

    let format = prompt_export_format()?;
    let path = prompt_export_path(&format!("shopping_list.{}", format.extension()))?;

    let document = PurchaseDocument::from_session(session, unit);
    let exporter = format.exporter();
    match export_to_path(exporter.as_ref(), &document, &path) {
        Ok(()) => println!("Shopping list written to {}", path),
        Err(e) => {
            warn!(error = %e, "export failed");
            eprintln!("Export failed: {}", e);
        }
    }

    Ok(())
}

fn finalize_interactive(
    session: &mut PlanningSession,
    stock_path: Option<&Path>,
    unit: &str,
) -> Result<()> {
    if !session.views().requirement.is_empty()
        && !prompt_yes_no("Deduct required materials from stock?", false)?
    {
        return Ok(());
    }

    let outcome = session.finalize();
    display_finalize_outcome(&outcome, unit);

    if let (true, Some(path)) = (outcome.is_applied(), stock_path) {
        if prompt_yes_no("Save updated stock?", true)? {
            save_stock(path, session.stock())?;
            println!("Stock saved to {}", path.display());
        }
    }

    Ok(())
}
