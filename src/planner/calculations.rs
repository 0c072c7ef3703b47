use tracing::debug;

use crate::models::{PlanViews, RecipeBook, RequirementView, Selection, ShortageView, StockLedger};

/// Total material requirement for a selection.
///
/// Sums `per_serving * servings` over every selected dish. Dishes missing
/// from the recipe book contribute nothing.
pub fn compute_requirements(selection: &Selection, recipes: &RecipeBook) -> RequirementView {
    let mut requirement = RequirementView::default();

    for (dish, &servings) in selection {
        if servings == 0 {
            continue;
        }

        let Some(recipe) = recipes.recipe(dish) else {
            debug!(dish = %dish, "selected dish has no recipe; skipping");
            continue;
        };

        for (material, per_serving) in recipe {
            requirement.accumulate(material, per_serving * f64::from(servings));
        }
    }

    requirement
}

/// Materials whose requirement strictly exceeds stock, with the deficit.
///
/// Untracked materials count as zero on hand.
pub fn compute_shortages(requirement: &RequirementView, stock: &StockLedger) -> ShortageView {
    let mut shortage = ShortageView::default();

    for (material, required) in requirement.iter() {
        let available = stock.available(material);
        if required > available {
            shortage.insert(material, required - available);
        }
    }

    shortage
}

/// Recompute both derived views from scratch.
pub fn compute_views(
    selection: &Selection,
    recipes: &RecipeBook,
    stock: &StockLedger,
) -> PlanViews {
    let requirement = compute_requirements(selection, recipes);
    let shortage = compute_shortages(&requirement, stock);

    debug!(
        dishes = selection.len(),
        materials = requirement.len(),
        shortages = shortage.len(),
        "recomputed plan views"
    );

    PlanViews {
        requirement,
        shortage,
    }
}

/// Stock remaining after drawing `required`, clamped at zero.
#[inline]
pub fn deduct(available: f64, required: f64) -> f64 {
    (available - required).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> RecipeBook {
        RecipeBook::from_table(&[
            ("Biriyani", &[("Rice", 1.0), ("Chicken", 1.0)]),
            ("Puttu", &[("Rice Flour", 0.1), ("Coconut", 0.03)]),
            ("Appam", &[("Rice Flour", 0.08), ("Sugar", 0.005)]),
        ])
        .unwrap()
    }

    fn selection(entries: &[(&str, u32)]) -> Selection {
        entries
            .iter()
            .map(|(dish, servings)| (dish.to_string(), *servings))
            .collect()
    }

    #[test]
    fn test_empty_selection_yields_empty_views() {
        let stock = StockLedger::from_table(&[("Rice", 5.0)]).unwrap();
        let views = compute_views(&Selection::new(), &sample_book(), &stock);
        assert!(views.requirement.is_empty());
        assert!(views.shortage.is_empty());
    }

    #[test]
    fn test_requirements_scale_with_servings() {
        let req = compute_requirements(&selection(&[("Biriyani", 6)]), &sample_book());
        assert_eq!(req.get("Rice"), Some(6.0));
        assert_eq!(req.get("Chicken"), Some(6.0));
        assert_eq!(req.len(), 2);
    }

    #[test]
    fn test_shared_material_accumulates_across_dishes() {
        let req = compute_requirements(&selection(&[("Puttu", 10), ("Appam", 5)]), &sample_book());
        let flour = req.get("Rice Flour").unwrap();
        assert!((flour - (0.1 * 10.0 + 0.08 * 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_dish_contributes_nothing() {
        let req = compute_requirements(&selection(&[("Dosa", 3)]), &sample_book());
        assert!(req.is_empty());
    }

    #[test]
    fn test_shortage_only_when_strictly_greater() {
        let stock = StockLedger::from_table(&[("Rice", 6.0), ("Chicken", 4.0)]).unwrap();
        let views = compute_views(&selection(&[("Biriyani", 6)]), &sample_book(), &stock);
        assert!(!views.shortage.contains("Rice")); // 6 == 6
        assert_eq!(views.shortage.get("Chicken"), Some(2.0));
    }

    #[test]
    fn test_untracked_material_is_fully_short() {
        let stock = StockLedger::from_table(&[("Rice", 10.0)]).unwrap();
        let views = compute_views(&selection(&[("Biriyani", 2)]), &sample_book(), &stock);
        assert_eq!(views.shortage.get("Chicken"), Some(2.0));
        assert!(!views.shortage.contains("Rice"));
    }

    #[test]
    fn test_deduct_clamps_at_zero() {
        assert_eq!(deduct(5.0, 6.0), 0.0);
        assert_eq!(deduct(5.0, 2.0), 3.0);
        assert_eq!(deduct(0.0, 0.0), 0.0);
    }
}
