use std::io::Write;

use crate::error::Result;
use crate::export::{Exporter, PurchaseDocument};
use crate::planner::constants::DISPLAY_DECIMALS;

/// Round a quantity to n decimal places.
fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Full plan as a JSON document: dishes, every requirement line, summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn export(&self, document: &PurchaseDocument, out: &mut dyn Write) -> Result<()> {
        let lines: Vec<serde_json::Value> = document
            .lines
            .iter()
            .map(|line| {
                serde_json::json!({
                    "material": line.material,
                    "required": round_to(line.required, DISPLAY_DECIMALS),
                    "in_stock": round_to(line.in_stock, DISPLAY_DECIMALS),
                    "to_buy": round_to(line.to_buy, DISPLAY_DECIMALS),
                })
            })
            .collect();

        let json = serde_json::json!({
            "unit": document.unit,
            "dishes": document.dishes,
            "materials": lines,
            "summary": document.summary,
        });

        serde_json::to_writer_pretty(&mut *out, &json)?;
        writeln!(out)?;
        Ok(())
    }
}
