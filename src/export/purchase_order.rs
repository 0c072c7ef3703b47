use std::io::Write;

use crate::error::Result;
use crate::export::{Exporter, PurchaseDocument};
use crate::planner::constants::format_quantity;

/// Plain-text purchase order suitable for printing.
#[derive(Debug, Clone, Default)]
pub struct TextExporter {
    title: String,
}

impl TextExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Exporter for TextExporter {
    fn name(&self) -> &str {
        "text"
    }

    fn export(&self, document: &PurchaseDocument, out: &mut dyn Write) -> Result<()> {
        let title = if self.title.is_empty() {
            "Shopping List"
        } else {
            self.title.as_str()
        };

        writeln!(out, "{}", title)?;
        writeln!(out, "{}", "=".repeat(title.chars().count()))?;
        writeln!(out)?;

        if !document.dishes.is_empty() {
            writeln!(out, "Planned dishes:")?;
            for line in &document.dishes {
                writeln!(out, "  {} x {}", line.dish, line.servings)?;
            }
            writeln!(out)?;
        }

        if !document.has_purchases() {
            writeln!(out, "All materials in stock. No additional purchase needed.")?;
            return Ok(());
        }

        let width = document
            .purchases()
            .map(|l| l.material.chars().count())
            .max()
            .unwrap_or(8)
            .max("Material".len());

        writeln!(
            out,
            "{:<width$}  {:>10}  {:>10}  {:>10}",
            "Material",
            "Required",
            "In stock",
            "To buy",
            width = width
        )?;

        for line in document.purchases() {
            writeln!(
                out,
                "{:<width$}  {:>10}  {:>10}  {:>10} {}",
                line.material,
                format_quantity(line.required),
                format_quantity(line.in_stock),
                format_quantity(line.to_buy),
                document.unit,
                width = width
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Items to purchase: {}", document.summary.items_to_purchase)?;
        writeln!(out, "Total servings: {}", document.summary.total_servings)?;
        Ok(())
    }
}
