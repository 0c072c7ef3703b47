use crate::error::Result;
use crate::models::{RecipeBook, StockLedger};

/// Serving count given to a freshly added dish.
pub const DEFAULT_SERVINGS: u32 = 1;

/// Decimal places shown for quantities at the presentation boundary.
pub const DISPLAY_DECIMALS: usize = 2;

/// Unit label for the reference data (opaque to the calculator).
pub const DEFAULT_UNIT: &str = "kg";

/// Minimum Jaro-Winkler similarity for a fuzzy dish-name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy suggestions offered at once.
pub const MAX_FUZZY_SUGGESTIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Reference data (Kerala catering sample menu, kg per serving)
// ─────────────────────────────────────────────────────────────────────────────

pub const REFERENCE_RECIPES: &[(&str, &[(&str, f64)])] = &[
    (
        "Biriyani",
        &[
            ("Basmati Rice", 0.2),
            ("Chicken", 0.15),
            ("Onions", 0.05),
            ("Spices Mix", 0.01),
            ("Ghee", 0.02),
            ("Yogurt", 0.03),
        ],
    ),
    (
        "Fish Curry",
        &[
            ("Fish", 0.12),
            ("Coconut", 0.1),
            ("Onions", 0.04),
            ("Tomatoes", 0.03),
            ("Spices Mix", 0.008),
            ("Coconut Oil", 0.01),
        ],
    ),
    (
        "Sambar",
        &[
            ("Toor Dal", 0.05),
            ("Vegetables", 0.08),
            ("Tamarind", 0.005),
            ("Spices Mix", 0.005),
            ("Curry Leaves", 0.002),
        ],
    ),
    (
        "Rasam",
        &[
            ("Toor Dal", 0.03),
            ("Tomatoes", 0.04),
            ("Tamarind", 0.008),
            ("Rasam Powder", 0.003),
            ("Curry Leaves", 0.002),
        ],
    ),
    (
        "Appam",
        &[
            ("Rice Flour", 0.08),
            ("Coconut Milk", 0.05),
            ("Yeast", 0.001),
            ("Sugar", 0.005),
        ],
    ),
    (
        "Puttu",
        &[("Rice Flour", 0.1), ("Coconut", 0.03), ("Salt", 0.001)],
    ),
];

pub const REFERENCE_STOCK: &[(&str, f64)] = &[
    ("Basmati Rice", 50.0),
    ("Chicken", 25.0),
    ("Fish", 15.0),
    ("Onions", 30.0),
    ("Tomatoes", 20.0),
    ("Coconut", 40.0),
    ("Spices Mix", 5.0),
    ("Ghee", 10.0),
    ("Yogurt", 12.0),
    ("Coconut Oil", 8.0),
    ("Toor Dal", 15.0),
    ("Vegetables", 25.0),
    ("Tamarind", 3.0),
    ("Curry Leaves", 2.0),
    ("Rasam Powder", 1.5),
    ("Rice Flour", 20.0),
    ("Coconut Milk", 10.0),
    ("Yeast", 0.5),
    ("Sugar", 15.0),
    ("Salt", 5.0),
];

/// Recipe table used when no recipe file is supplied.
pub fn reference_recipe_book() -> Result<RecipeBook> {
    RecipeBook::from_table(REFERENCE_RECIPES)
}

/// Stock ledger used when no stock file is supplied.
pub fn reference_stock_ledger() -> Result<StockLedger> {
    StockLedger::from_table(REFERENCE_STOCK)
}

/// Format a quantity for display, rounding only here.
pub fn format_quantity(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS, value)
}
