//! Export boundary for purchase documents.
//!
//! Exporters are injected capabilities. The session builds a
//! [`PurchaseDocument`] snapshot and hands it over; an exporter that is not
//! ready is reported as an error without touching planning state.

mod document;
mod json_document;
mod purchase_order;
mod shopping_csv;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::{PlannerError, Result};

pub use document::{DishLine, PurchaseDocument, PurchaseLine};
pub use json_document::JsonExporter;
pub use purchase_order::TextExporter;
pub use shopping_csv::CsvExporter;

/// Whether an exporter can run right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Unavailable(String),
}

/// Renders a purchase document to a byte sink.
pub trait Exporter {
    fn name(&self) -> &str;

    fn readiness(&self) -> Readiness {
        Readiness::Ready
    }

    fn export(&self, document: &PurchaseDocument, out: &mut dyn Write) -> Result<()>;
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub fn exporter(self) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Json => Box::new(JsonExporter),
            ExportFormat::Text => Box::new(TextExporter::new("Shopping List")),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

fn ensure_ready(exporter: &dyn Exporter) -> Result<()> {
    match exporter.readiness() {
        Readiness::Ready => Ok(()),
        Readiness::Unavailable(reason) => Err(PlannerError::ExporterUnavailable {
            exporter: exporter.name().to_string(),
            reason,
        }),
    }
}

/// Run an exporter after checking it is ready.
pub fn export_document(
    exporter: &dyn Exporter,
    document: &PurchaseDocument,
    out: &mut dyn Write,
) -> Result<()> {
    ensure_ready(exporter)?;
    exporter.export(document, out)?;
    info!(
        exporter = exporter.name(),
        purchases = document.summary.items_to_purchase,
        "exported purchase document"
    );
    Ok(())
}

/// Export to a file. The file is only created once the exporter is ready.
pub fn export_to_path<P: AsRef<Path>>(
    exporter: &dyn Exporter,
    document: &PurchaseDocument,
    path: P,
) -> Result<()> {
    ensure_ready(exporter)?;
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    export_document(exporter, document, &mut writer)?;
    writer.flush()?;
    Ok(())
}
