//! Property-based invariants for the requirement/shortage calculator and
//! the planning session:
//!
//! 1. Requirement equals the per-dish sum of recipe quantities times servings.
//! 2. A material is short exactly when requirement exceeds stock, by the difference.
//! 3. Setting the same serving count twice equals setting it once.
//! 4. Finalize clamps every deducted balance at zero and empties the selection.
//! 5. The selection never holds a zero count.

use std::collections::BTreeMap;

use catering_planner_rs::models::{Recipe, RecipeBook, Selection, StockLedger};
use catering_planner_rs::planner::compute_views;
use catering_planner_rs::state::PlanningSession;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const MATERIALS: &[&str] = &["Rice", "Chicken", "Onions", "Coconut", "Toor Dal", "Salt"];
const DISHES: &[&str] = &["Biriyani", "Fish Curry", "Sambar", "Appam"];

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    prop::collection::btree_map(
        prop::sample::select(MATERIALS).prop_map(str::to_string),
        0.0f64..2.0,
        0..=MATERIALS.len(),
    )
}

fn book_strategy() -> impl Strategy<Value = RecipeBook> {
    prop::collection::vec(recipe_strategy(), DISHES.len()).prop_map(|recipes| {
        let dishes: BTreeMap<String, Recipe> = DISHES
            .iter()
            .map(|d| d.to_string())
            .zip(recipes)
            .collect();
        RecipeBook::new(dishes).unwrap()
    })
}

fn stock_strategy() -> impl Strategy<Value = StockLedger> {
    prop::collection::btree_map(
        prop::sample::select(MATERIALS).prop_map(str::to_string),
        0.0f64..50.0,
        0..=MATERIALS.len(),
    )
    .prop_map(|m| StockLedger::new(m).unwrap())
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    prop::collection::btree_map(
        prop::sample::select(DISHES).prop_map(str::to_string),
        1u32..200,
        0..=DISHES.len(),
    )
}

fn edits_strategy() -> impl Strategy<Value = Vec<(usize, i64)>> {
    prop::collection::vec((0..DISHES.len(), -5i64..30), 0..40)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn requirement_is_weighted_sum(
        book in book_strategy(),
        stock in stock_strategy(),
        selection in selection_strategy(),
    ) {
        let views = compute_views(&selection, &book, &stock);

        for material in MATERIALS {
            let expected: f64 = selection
                .iter()
                .filter_map(|(dish, &servings)| {
                    book.recipe(dish)
                        .and_then(|r| r.get(*material))
                        .map(|q| q * f64::from(servings))
                })
                .sum();
            let referenced = selection
                .keys()
                .any(|d| book.recipe(d).is_some_and(|r| r.contains_key(*material)));

            match views.requirement.get(material) {
                Some(actual) => {
                    prop_assert!(referenced);
                    prop_assert!((actual - expected).abs() < 1e-6);
                }
                None => prop_assert!(!referenced),
            }
        }
    }

    #[test]
    fn shortage_iff_requirement_exceeds_stock(
        book in book_strategy(),
        stock in stock_strategy(),
        selection in selection_strategy(),
    ) {
        let views = compute_views(&selection, &book, &stock);

        for (material, required) in views.requirement.iter() {
            let available = stock.available(material);
            match views.shortage.get(material) {
                Some(deficit) => {
                    prop_assert!(required > available);
                    prop_assert_eq!(deficit, required - available);
                    prop_assert!(deficit > 0.0);
                }
                None => prop_assert!(required <= available),
            }
        }
        for (material, _) in views.shortage.iter() {
            prop_assert!(views.requirement.contains(material));
        }
    }

    #[test]
    fn set_quantity_is_idempotent(
        book in book_strategy(),
        stock in stock_strategy(),
        dish in 0..DISHES.len(),
        qty in -5i64..50,
    ) {
        let mut once = PlanningSession::new(book.clone(), stock.clone());
        once.set_quantity(DISHES[dish], qty);

        let mut twice = PlanningSession::new(book, stock);
        twice.set_quantity(DISHES[dish], qty);
        twice.set_quantity(DISHES[dish], qty);

        prop_assert_eq!(once.selection(), twice.selection());
        prop_assert_eq!(once.views(), twice.views());
    }

    #[test]
    fn selection_never_holds_zero(
        book in book_strategy(),
        stock in stock_strategy(),
        edits in edits_strategy(),
    ) {
        let mut session = PlanningSession::new(book, stock);
        for (dish, qty) in edits {
            session.set_quantity(DISHES[dish], qty);
            prop_assert!(session.selection().values().all(|&s| s > 0));
        }
    }

    #[test]
    fn finalize_clamps_and_clears(
        book in book_strategy(),
        stock in stock_strategy(),
        selection in selection_strategy(),
    ) {
        let mut session = PlanningSession::new(book, stock.clone());
        for (dish, &servings) in &selection {
            session.set_quantity(dish, i64::from(servings));
        }
        let requirement = session.views().requirement.clone();

        let outcome = session.finalize();
        prop_assert_eq!(outcome.is_applied(), !requirement.is_empty());

        if outcome.is_applied() {
            prop_assert!(session.selection().is_empty());
            for (material, before) in stock.iter() {
                let after = session.stock().get(material).unwrap();
                match requirement.get(material) {
                    Some(required) => prop_assert_eq!(after, (before - required).max(0.0)),
                    None => prop_assert_eq!(after, before),
                }
            }
            prop_assert_eq!(session.stock().len(), stock.len());
        } else {
            prop_assert_eq!(session.stock(), &stock);
        }
    }
}
