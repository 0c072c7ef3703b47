use serde::Serialize;

use crate::models::{PlanSummary, PlanViews, Selection, StockLedger};
use crate::state::PlanningSession;

/// One required material with stock context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseLine {
    pub material: String,
    pub required: f64,
    pub in_stock: f64,
    /// Zero when stock covers the requirement.
    pub to_buy: f64,
}

/// One planned dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DishLine {
    pub dish: String,
    pub servings: u32,
}

/// Snapshot of a plan handed to an exporter.
///
/// Built from the views of the latest recomputation; exporters never see
/// the live session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseDocument {
    pub unit: String,
    pub dishes: Vec<DishLine>,
    pub lines: Vec<PurchaseLine>,
    pub summary: PlanSummary,
}

impl PurchaseDocument {
    pub fn from_session(session: &PlanningSession, unit: &str) -> Self {
        Self::from_parts(session.selection(), session.views(), session.stock(), unit)
    }

    pub fn from_parts(
        selection: &Selection,
        views: &PlanViews,
        stock: &StockLedger,
        unit: &str,
    ) -> Self {
        let dishes = selection
            .iter()
            .map(|(dish, &servings)| DishLine {
                dish: dish.clone(),
                servings,
            })
            .collect();

        let lines = views
            .requirement
            .iter()
            .map(|(material, required)| PurchaseLine {
                material: material.to_string(),
                required,
                in_stock: stock.available(material),
                to_buy: views.shortage.get(material).unwrap_or(0.0),
            })
            .collect();

        Self {
            unit: unit.to_string(),
            dishes,
            lines,
            summary: PlanSummary::new(selection, views),
        }
    }

    /// Lines with something to buy.
    pub fn purchases(&self) -> impl Iterator<Item = &PurchaseLine> {
        self.lines.iter().filter(|l| l.to_buy > 0.0)
    }

    pub fn has_purchases(&self) -> bool {
        self.purchases().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeBook;

    #[test]
    fn test_document_marks_only_shortages_for_purchase() {
        let recipes =
            RecipeBook::from_table(&[("Biriyani", &[("Rice", 1.0), ("Chicken", 1.0)])]).unwrap();
        let stock = StockLedger::from_table(&[("Rice", 5.0), ("Chicken", 4.0)]).unwrap();
        let mut session = PlanningSession::new(recipes, stock);
        session.set_quantity("Biriyani", 5);

        let doc = PurchaseDocument::from_session(&session, "kg");
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.dishes, vec![DishLine { dish: "Biriyani".to_string(), servings: 5 }]);

        let purchases: Vec<&str> = doc.purchases().map(|l| l.material.as_str()).collect();
        assert_eq!(purchases, vec!["Chicken"]);
        assert_eq!(doc.summary.items_to_purchase, 1);
    }
}
