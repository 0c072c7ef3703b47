use std::collections::BTreeMap;

use serde::Serialize;

/// Planned dishes and their serving counts.
///
/// Never holds a zero count; the session removes an entry instead.
pub type Selection = BTreeMap<String, u32>;

/// Total quantity of each material needed for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequirementView(BTreeMap<String, f64>);

impl RequirementView {
    pub fn get(&self, material: &str) -> Option<f64> {
        self.0.get(material).copied()
    }

    pub fn contains(&self, material: &str) -> bool {
        self.0.contains_key(material)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Accumulate `qty` onto a material, starting from zero.
    pub(crate) fn accumulate(&mut self, material: &str, qty: f64) {
        *self.0.entry(material.to_string()).or_insert(0.0) += qty;
    }
}

/// Deficit of each material whose requirement exceeds stock.
///
/// Every value is strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShortageView(BTreeMap<String, f64>);

impl ShortageView {
    pub fn get(&self, material: &str) -> Option<f64> {
        self.0.get(material).copied()
    }

    pub fn contains(&self, material: &str) -> bool {
        self.0.contains_key(material)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, material: &str, deficit: f64) {
        self.0.insert(material.to_string(), deficit);
    }
}

/// Requirement and shortage views published together.
///
/// A session always replaces the pair as a unit, so its shortage view never
/// describes a different requirement than the one beside it. Pairs built by
/// hand carry no such guarantee.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanViews {
    pub requirement: RequirementView,
    pub shortage: ShortageView,
}

/// Headline figures for the current plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Sum of serving counts across all planned dishes.
    pub total_servings: u64,

    /// Materials with a non-zero requirement entry.
    pub materials_needed: usize,

    /// Required materials fully covered by stock.
    pub materials_in_stock: usize,

    /// Required materials that must be bought.
    pub items_to_purchase: usize,
}

impl PlanSummary {
    pub fn new(selection: &Selection, views: &PlanViews) -> Self {
        let materials_in_stock = views
            .requirement
            .iter()
            .filter(|(material, _)| !views.shortage.contains(material))
            .count();
        Self {
            total_servings: selection.values().map(|&s| u64::from(s)).sum(),
            materials_needed: views.requirement.len(),
            materials_in_stock,
            items_to_purchase: views.shortage.len(),
        }
    }
}
