use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Recipe, RecipeBook, StockLedger};

/// Read and decode a JSON table, naming the file in any error.
fn read_table<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| PlannerError::TableRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PlannerError::TableParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a recipe table from a JSON object of `{dish: {material: per_serving}}`.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<RecipeBook> {
    let dishes: BTreeMap<String, Recipe> = read_table(path.as_ref())?;
    let book = RecipeBook::new(dishes)?;
    debug!(path = %path.as_ref().display(), dishes = book.len(), "loaded recipes");
    Ok(book)
}

/// Load a stock ledger from a JSON object of `{material: quantity}`.
pub fn load_stock<P: AsRef<Path>>(path: P) -> Result<StockLedger> {
    let quantities: BTreeMap<String, f64> = read_table(path.as_ref())?;
    let ledger = StockLedger::new(quantities)?;
    debug!(path = %path.as_ref().display(), materials = ledger.len(), "loaded stock");
    Ok(ledger)
}

/// Save a stock ledger as pretty-printed JSON.
pub fn save_stock<P: AsRef<Path>>(path: P, stock: &StockLedger) -> Result<()> {
    let json = serde_json::to_string_pretty(stock)?;
    fs::write(path.as_ref(), json).map_err(|source| PlannerError::StockWrite {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    debug!(path = %path.as_ref().display(), materials = stock.len(), "saved stock");
    Ok(())
}
