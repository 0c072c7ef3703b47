use std::io::Write;

use crate::error::Result;
use crate::export::{Exporter, PurchaseDocument};
use crate::planner::constants::format_quantity;

/// Shopping list as CSV: one row per material to buy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn name(&self) -> &str {
        "csv"
    }

    fn export(&self, document: &PurchaseDocument, out: &mut dyn Write) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);

        wtr.write_record(["material", "required", "in_stock", "to_buy", "unit"])?;

        for line in document.purchases() {
            let required = format_quantity(line.required);
            let in_stock = format_quantity(line.in_stock);
            let to_buy = format_quantity(line.to_buy);
            wtr.write_record([
                line.material.as_str(),
                required.as_str(),
                in_stock.as_str(),
                to_buy.as_str(),
                document.unit.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
