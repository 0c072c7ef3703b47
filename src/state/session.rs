use tracing::{debug, info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{PlanSummary, PlanViews, RecipeBook, Selection, StockLedger};
use crate::planner::calculations::{compute_views, deduct};
use crate::planner::constants::DEFAULT_SERVINGS;

/// One material's movement during a finalize.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDeduction {
    pub material: String,
    pub before: f64,
    pub required: f64,
    pub after: f64,
}

/// What a successful finalize changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalizeReport {
    /// Ledger entries that were drawn down.
    pub deductions: Vec<StockDeduction>,

    /// Required materials the ledger does not track; left unrepresented.
    pub untracked: Vec<String>,

    /// Dishes and serving counts that were committed and cleared.
    pub committed: Selection,
}

/// Result of asking the session to finalize.
#[derive(Debug, Clone, PartialEq)]
pub enum FinalizeOutcome {
    Applied(FinalizeReport),
    NothingToFinalize,
}

impl FinalizeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FinalizeOutcome::Applied(_))
    }
}

/// A single planning session: fixed recipes, a stock ledger, the user's
/// selection and the views derived from them.
///
/// Every mutator recomputes the views before returning, so readers always
/// see requirement and shortage figures for the current selection.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    recipes: RecipeBook,
    stock: StockLedger,
    selection: Selection,
    views: PlanViews,
}

impl PlanningSession {
    pub fn new(recipes: RecipeBook, stock: StockLedger) -> Self {
        Self {
            recipes,
            stock,
            selection: Selection::new(),
            views: PlanViews::default(),
        }
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn views(&self) -> &PlanViews {
        &self.views
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary::new(&self.selection, &self.views)
    }

    /// Serving count for a selected dish (case-insensitive).
    pub fn servings(&self, dish: &str) -> Option<u32> {
        let name = self.recipes.canonical_name(dish)?;
        self.selection.get(name).copied()
    }

    /// Known dishes not yet in the selection.
    pub fn available_dishes(&self) -> Vec<&str> {
        self.recipes
            .dish_names()
            .filter(|d| !self.selection.contains_key(*d))
            .collect()
    }

    /// Select a dish with one serving.
    ///
    /// Returns false (and changes nothing) for unknown or already-selected dishes.
    pub fn add(&mut self, dish: &str) -> bool {
        let Some(name) = self.resolve(dish) else {
            return false;
        };

        if self.selection.contains_key(&name) {
            debug!(dish = %name, "dish already selected");
            return false;
        }

        self.selection.insert(name, DEFAULT_SERVINGS);
        self.recompute();
        true
    }

    /// Set the serving count for a dish.
    ///
    /// A count of zero or below removes the dish. Unknown dishes are ignored.
    pub fn set_quantity(&mut self, dish: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(dish);
        }

        let Some(name) = self.resolve(dish) else {
            return false;
        };

        let servings = u32::try_from(quantity).unwrap_or(u32::MAX);
        if self.selection.get(&name) == Some(&servings) {
            return false;
        }

        self.selection.insert(name, servings);
        self.recompute();
        true
    }

    /// Add one serving, selecting the dish if needed.
    pub fn increment(&mut self, dish: &str) -> bool {
        let current = self.servings(dish).unwrap_or(0);
        self.set_quantity(dish, i64::from(current) + 1)
    }

    /// Remove one serving; a dish at one serving is removed.
    pub fn decrement(&mut self, dish: &str) -> bool {
        match self.servings(dish) {
            Some(current) => self.set_quantity(dish, i64::from(current) - 1),
            None => false,
        }
    }

    /// Drop a dish from the selection. Absent dishes are not an error.
    pub fn remove(&mut self, dish: &str) -> bool {
        let name = self
            .recipes
            .canonical_name(dish)
            .map(str::to_string)
            .unwrap_or_else(|| dish.to_string());

        if self.selection.remove(&name).is_none() {
            debug!(dish = %dish, "remove: dish not selected");
            return false;
        }

        self.recompute();
        true
    }

    /// Set serving counts for a batch of `(dish, servings)` pairs.
    ///
    /// Every name is checked before anything changes, so an unknown dish
    /// leaves the selection untouched.
    pub fn apply_servings(&mut self, entries: &[(String, i64)]) -> Result<()> {
        if let Some((name, _)) = entries.iter().find(|(name, _)| !self.recipes.contains(name)) {
            return Err(PlannerError::DishNotFound(name.clone()));
        }

        for (name, servings) in entries {
            self.set_quantity(name, *servings);
        }
        Ok(())
    }

    /// Draw the current requirement from stock and clear the selection.
    ///
    /// Deductions are clamped at zero per material. All new balances are
    /// worked out before any is written, then committed together.
    pub fn finalize(&mut self) -> FinalizeOutcome {
        if self.views.requirement.is_empty() {
            info!("finalize requested with nothing planned");
            return FinalizeOutcome::NothingToFinalize;
        }

        let mut report = FinalizeReport::default();
        for (material, required) in self.views.requirement.iter() {
            match self.stock.get(material) {
                Some(before) => report.deductions.push(StockDeduction {
                    material: material.to_string(),
                    before,
                    required,
                    after: deduct(before, required),
                }),
                None => report.untracked.push(material.to_string()),
            }
        }

        self.stock.commit(
            report
                .deductions
                .iter()
                .map(|d| (d.material.as_str(), d.after)),
        );
        report.committed = std::mem::take(&mut self.selection);
        self.recompute();

        info!(
            dishes = report.committed.len(),
            deducted = report.deductions.len(),
            untracked = report.untracked.len(),
            "stock finalized"
        );
        FinalizeOutcome::Applied(report)
    }

    /// Consume the session, handing back the ledger.
    pub fn into_stock(self) -> StockLedger {
        self.stock
    }

    fn resolve(&self, dish: &str) -> Option<String> {
        let name = self.recipes.canonical_name(dish);
        if name.is_none() {
            warn!(dish = %dish, "unknown dish");
        }
        name.map(str::to_string)
    }

    fn recompute(&mut self) {
        self.views = compute_views(&self.selection, &self.recipes, &self.stock);
    }
}

/// Normalize raw serving-count text.
///
/// Skips leading whitespace, accepts an optional sign and an optional `0x`
/// prefix (hexadecimal), then reads leading digits; anything after them is
/// ignored. Text with no leading digits is 0.
pub fn parse_servings(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return 0;
    }

    let magnitude = i64::from_str_radix(digits, radix).unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}
