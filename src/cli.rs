use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{PlannerError, Result as PlannerResult};
use crate::export::ExportFormat;
use crate::planner::constants::DEFAULT_UNIT;

/// Catering planner: turn a menu of dishes and servings into raw-material
/// requirements, a shopping list and stock deductions.
#[derive(Parser, Debug)]
#[command(name = "catering_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recipe table JSON file (built-in sample menu when omitted).
    #[arg(short, long, global = true)]
    pub recipes: Option<PathBuf>,

    /// Stock ledger JSON file (built-in sample stock when omitted).
    #[arg(short, long, global = true)]
    pub stock: Option<PathBuf>,

    /// Unit label shown next to quantities.
    #[arg(long, default_value = DEFAULT_UNIT, global = true)]
    pub unit: String,

    /// Enable debug logging for the planner.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a menu interactively.
    Plan,

    /// List dishes and their per-serving recipes.
    Dishes,

    /// List current stock.
    Stock,

    /// Compute requirements and shortages for a menu.
    Shortage {
        /// Dish and servings as NAME=SERVINGS (repeatable).
        #[arg(short, long = "dish", value_parser = parse_dish_servings)]
        dishes: Vec<(String, i64)>,

        /// Write the shopping list to this file.
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },

    /// Deduct a menu's requirements from stock.
    Finalize {
        /// Dish and servings as NAME=SERVINGS (repeatable).
        #[arg(short, long = "dish", value_parser = parse_dish_servings)]
        dishes: Vec<(String, i64)>,

        /// Write the updated ledger back to the --stock file.
        #[arg(long)]
        save: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

/// Where `finalize --save` writes the ledger, if saving was asked for.
///
/// Saving needs the `--stock` file the ledger was read from.
pub fn save_target(save: bool, stock_path: Option<&Path>) -> PlannerResult<Option<&Path>> {
    match (save, stock_path) {
        (false, _) => Ok(None),
        (true, Some(path)) => Ok(Some(path)),
        (true, None) => Err(PlannerError::InvalidInput(
            "--save needs a --stock file to write to".to_string(),
        )),
    }
}

/// Parse `NAME=SERVINGS`; a bare `NAME` means one serving.
pub fn parse_dish_servings(s: &str) -> Result<(String, i64), String> {
    let (name, servings) = match s.rsplit_once('=') {
        Some((name, count)) => {
            let servings = count
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid serving count '{}'", count.trim()))?;
            (name, servings)
        }
        None => (s, 1),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err("dish name must not be empty".to_string());
    }

    Ok((name.to_string(), servings))
}
