use daplan_core::source::PageDump;
use daplan_core::{ExtractOptions, Gazetteer};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    gazetteer_dir: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), daplan_core::error::DaplanError> {
    let dump: PageDump = serde_json::from_str(&std::fs::read_to_string(&input_file)?)?;
    let gazetteer = Gazetteer::load(&gazetteer_dir)?;
    let options = ExtractOptions::default();

    let records = daplan_core::extract_document(&dump, &gazetteer, &options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&records)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} record(s) from {} page(s), written to {}",
                records.len(),
                dump.pages.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&records)?,
            _ => output::table::print(&records),
        },
    }

    Ok(())
}
