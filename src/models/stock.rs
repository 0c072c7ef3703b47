use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{PlannerError, Result};

/// On-hand quantity of each material.
///
/// Read-only during planning; only the session's finalize step writes to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StockLedger {
    quantities: BTreeMap<String, f64>,
}

impl StockLedger {
    /// Build a ledger, rejecting negative or non-finite quantities.
    pub fn new(quantities: BTreeMap<String, f64>) -> Result<Self> {
        for (material, qty) in &quantities {
            if !qty.is_finite() || *qty < 0.0 {
                return Err(PlannerError::InvalidData(format!(
                    "stock of {} is {}; quantities must be finite and non-negative",
                    material, qty
                )));
            }
        }
        Ok(Self { quantities })
    }

    /// Build a ledger from a borrowed table literal.
    pub fn from_table(table: &[(&str, f64)]) -> Result<Self> {
        Self::new(
            table
                .iter()
                .map(|(material, qty)| (material.to_string(), *qty))
                .collect(),
        )
    }

    /// Quantity on hand, if the material is tracked at all.
    pub fn get(&self, material: &str) -> Option<f64> {
        self.quantities.get(material).copied()
    }

    /// Quantity on hand, treating untracked materials as zero.
    pub fn available(&self, material: &str) -> f64 {
        self.get(material).unwrap_or(0.0)
    }

    pub fn contains(&self, material: &str) -> bool {
        self.quantities.contains_key(material)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantities.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Overwrite quantities for materials already in the ledger.
    ///
    /// Untracked materials are skipped; the ledger never grows here.
    pub(crate) fn commit<'a, I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (material, qty) in updates {
            if let Some(slot) = self.quantities.get_mut(material) {
                *slot = qty;
            }
        }
    }
}
