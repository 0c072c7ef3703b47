use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{PlannerError, Result};

/// Per-serving material quantities for a single dish.
pub type Recipe = BTreeMap<String, f64>;

/// Immutable table of dishes and their per-serving recipes.
///
/// Dish names are unique ignoring case, so lookups by user-typed names
/// resolve to exactly one canonical spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecipeBook {
    dishes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    /// Build a recipe book, rejecting negative or non-finite quantities.
    pub fn new(dishes: BTreeMap<String, Recipe>) -> Result<Self> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();

        for (dish, recipe) in &dishes {
            if dish.trim().is_empty() {
                return Err(PlannerError::InvalidData(
                    "dish name must not be empty".to_string(),
                ));
            }

            if let Some(other) = seen.insert(dish.to_lowercase(), dish) {
                return Err(PlannerError::InvalidData(format!(
                    "dish names '{}' and '{}' differ only by case",
                    other, dish
                )));
            }

            for (material, per_serving) in recipe {
                if material.trim().is_empty() {
                    return Err(PlannerError::InvalidData(format!(
                        "{} lists a material with an empty name",
                        dish
                    )));
                }
                if !per_serving.is_finite() || *per_serving < 0.0 {
                    return Err(PlannerError::InvalidData(format!(
                        "{} needs {} of {}; per-serving quantities must be finite and non-negative",
                        dish, per_serving, material
                    )));
                }
            }
        }

        Ok(Self { dishes })
    }

    /// Build a recipe book from a borrowed table literal.
    pub fn from_table(table: &[(&str, &[(&str, f64)])]) -> Result<Self> {
        let dishes = table
            .iter()
            .map(|(dish, materials)| {
                let recipe = materials
                    .iter()
                    .map(|(material, qty)| (material.to_string(), *qty))
                    .collect();
                (dish.to_string(), recipe)
            })
            .collect();
        Self::new(dishes)
    }

    /// Recipe for a dish by its canonical name.
    pub fn recipe(&self, dish: &str) -> Option<&Recipe> {
        self.dishes.get(dish)
    }

    /// Resolve a user-supplied dish name to its canonical spelling.
    ///
    /// Exact matches win; otherwise the comparison ignores case.
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        if let Some((key, _)) = self.dishes.get_key_value(name) {
            return Some(key.as_str());
        }

        let wanted = name.trim().to_lowercase();
        self.dishes
            .keys()
            .find(|k| k.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Check whether a dish is known (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.canonical_name(name).is_some()
    }

    /// All dish names in sorted order.
    pub fn dish_names(&self) -> impl Iterator<Item = &str> {
        self.dishes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.dishes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
